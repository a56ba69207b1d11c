//! # Actions
//!
//! Every user decision in the wizard becomes an `Action`.
//! User taps "I love it"? That's `Action::SelectPositive`.
//! User presses back? That's `Action::Back`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the next state plus an `Effect` for the controller to carry
//! out. No side effects here. Submission and signalling happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes every route testable without a runtime:
//! `assert_eq!(update(&state, action, &gate).state.screen(), expected)`.

use log::debug;

use crate::core::ratings::RatingsGate;
use crate::core::reason::{MainReason, SubReason};
use crate::core::state::{Screen, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectPositive,
    SelectNegative,
    SelectMainReason(MainReason),
    SelectSubReason(MainReason, SubReason),
    SelectGiveFeedback,
    Back,
    Cancel,
    SubmitNegativeOpenEnded {
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
        text: String,
    },
    SubmitBrokenSite {
        text: String,
        url: Option<String>,
    },
    SubmitPositiveNoDetails,
    SubmitPositiveOpenEnded(String),
    SubmitRatingGiven,
}

/// Data handed to the submitter, exactly as the user provided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Negative {
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
        text: String,
    },
    BrokenSite {
        text: String,
        url: Option<String>,
    },
    Positive(Option<String>),
    Rated,
}

/// What the controller must do after applying a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Close the flow.
    Exit { submitted: bool },
    /// Dispatch the submission in the background, then close the flow as submitted.
    Submit(Submission),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,
    pub effect: Effect,
}

impl Transition {
    fn to(state: ViewState) -> Self {
        Self {
            state,
            effect: Effect::None,
        }
    }

    fn stay(state: &ViewState, effect: Effect) -> Self {
        Self {
            state: state.clone(),
            effect,
        }
    }
}

pub fn update(state: &ViewState, action: Action, gate: &RatingsGate) -> Transition {
    debug!("Action {:?} on {:?}", action, state.current.screen);

    match action {
        Action::SelectPositive => {
            let next = if gate.can_show_ratings_button() {
                Screen::PositiveFirstStep
            } else {
                Screen::PositiveShare
            };
            Transition::to(state.advance(next))
        }
        Action::SelectNegative => Transition::to(state.advance(Screen::NegativeMainReason)),
        Action::SelectMainReason(main_reason) => {
            let next = match main_reason {
                MainReason::WebsitesNotLoading => Screen::NegativeSitesBroken {
                    main_reason,
                    sub_reason: None,
                },
                MainReason::Other => Screen::NegativeOpenEnded {
                    main_reason,
                    sub_reason: None,
                },
                MainReason::MissingBrowsingFeatures
                | MainReason::SearchNotGoodEnough
                | MainReason::NotEnoughCustomizations
                | MainReason::AppIsSlowOrBuggy => Screen::NegativeSubReason { main_reason },
            };
            Transition::to(ViewState {
                main_reason: Some(main_reason),
                sub_reason: None,
                ..state.advance(next)
            })
        }
        Action::SelectSubReason(main_reason, sub_reason) => {
            let next = Screen::NegativeOpenEnded {
                main_reason,
                sub_reason: Some(sub_reason),
            };
            Transition::to(ViewState {
                main_reason: Some(main_reason),
                sub_reason: Some(sub_reason),
                ..state.advance(next)
            })
        }
        Action::SelectGiveFeedback => Transition::to(state.advance(Screen::PositiveShare)),
        Action::Back => back(state, gate),
        Action::Cancel => Transition::stay(state, Effect::Exit { submitted: false }),
        Action::SubmitNegativeOpenEnded {
            main_reason,
            sub_reason,
            text,
        } => Transition::stay(
            state,
            Effect::Submit(Submission::Negative {
                main_reason,
                sub_reason,
                text,
            }),
        ),
        Action::SubmitBrokenSite { text, url } => {
            Transition::stay(state, Effect::Submit(Submission::BrokenSite { text, url }))
        }
        Action::SubmitPositiveNoDetails => {
            Transition::stay(state, Effect::Submit(Submission::Positive(None)))
        }
        Action::SubmitPositiveOpenEnded(text) => {
            Transition::stay(state, Effect::Submit(Submission::Positive(Some(text))))
        }
        Action::SubmitRatingGiven => Transition::stay(state, Effect::Submit(Submission::Rated)),
    }
}

/// Backward navigation retraces the forward path. Only the open-ended screen
/// needs `previous`, because two different screens lead into it.
fn back(state: &ViewState, gate: &RatingsGate) -> Transition {
    let next = match state.current.screen {
        Screen::InitialClarifier => {
            return Transition::stay(state, Effect::Exit { submitted: false });
        }
        Screen::PositiveFirstStep | Screen::NegativeMainReason => Screen::InitialClarifier,
        Screen::PositiveShare => {
            if gate.can_show_ratings_button() {
                Screen::PositiveFirstStep
            } else {
                Screen::InitialClarifier
            }
        }
        Screen::NegativeSubReason { .. } | Screen::NegativeSitesBroken { .. } => {
            Screen::NegativeMainReason
        }
        Screen::NegativeOpenEnded { main_reason, .. } => match state.previous.map(|p| p.screen) {
            Some(Screen::NegativeSubReason { .. }) => Screen::NegativeSubReason {
                main_reason: state.main_reason.unwrap_or(main_reason),
            },
            // Anything else, including the broken-site screen, falls back to the reason list.
            _ => Screen::NegativeMainReason,
        },
    };
    Transition::to(state.retreat(next))
}
