//! # Flow State
//!
//! The snapshot the host renders. One `ViewState` is current at a time and
//! it is replaced wholesale on every event, never patched in place.
//!
//! ```text
//! ViewState
//! ├── current: ScreenState            // screen on display + slide direction
//! ├── previous: Option<ScreenState>   // last screen left by a forward step
//! ├── main_reason: Option<MainReason> // negative branch classification
//! └── sub_reason: Option<SubReason>   // cleared whenever a main reason is picked
//! ```
//!
//! State changes only happen through `update(state, action, gate)` in action.rs.

use crate::core::reason::{MainReason, SubReason};

/// Which way the screen transition should slide. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forwards,
    Backwards,
}

/// One step of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    InitialClarifier,

    // positive branch
    PositiveFirstStep,
    PositiveShare,

    // negative branch
    NegativeMainReason,
    NegativeSubReason {
        main_reason: MainReason,
    },
    NegativeSitesBroken {
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
    },
    NegativeOpenEnded {
        main_reason: MainReason,
        sub_reason: Option<SubReason>,
    },
}

impl Screen {
    pub fn forwards(self) -> ScreenState {
        ScreenState {
            screen: self,
            direction: Direction::Forwards,
        }
    }

    pub fn backwards(self) -> ScreenState {
        ScreenState {
            screen: self,
            direction: Direction::Backwards,
        }
    }
}

/// A screen plus the direction it was entered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenState {
    pub screen: Screen,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current: ScreenState,
    pub previous: Option<ScreenState>,
    pub main_reason: Option<MainReason>,
    pub sub_reason: Option<SubReason>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// The state every flow starts in.
    pub fn new() -> Self {
        Self {
            current: Screen::InitialClarifier.forwards(),
            previous: None,
            main_reason: None,
            sub_reason: None,
        }
    }

    /// Moves forward to `next`, remembering the screen being left.
    pub fn advance(&self, next: Screen) -> ViewState {
        ViewState {
            current: next.forwards(),
            previous: Some(self.current),
            ..self.clone()
        }
    }

    /// Moves backward to `next`. `previous` and the reasons are kept as they are.
    pub fn retreat(&self, next: Screen) -> ViewState {
        ViewState {
            current: next.backwards(),
            ..self.clone()
        }
    }

    pub fn screen(&self) -> Screen {
        self.current.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_initial_clarifier() {
        let state = ViewState::new();
        assert_eq!(state.screen(), Screen::InitialClarifier);
        assert_eq!(state.current.direction, Direction::Forwards);
        assert!(state.previous.is_none());
        assert!(state.main_reason.is_none());
        assert!(state.sub_reason.is_none());
    }

    #[test]
    fn test_advance_records_previous() {
        let state = ViewState::new().advance(Screen::NegativeMainReason);
        assert_eq!(state.screen(), Screen::NegativeMainReason);
        assert_eq!(state.previous, Some(Screen::InitialClarifier.forwards()));
    }

    #[test]
    fn test_retreat_keeps_previous_and_reasons() {
        let mut state = ViewState::new().advance(Screen::NegativeMainReason);
        state.main_reason = Some(MainReason::Other);
        let back = state.retreat(Screen::InitialClarifier);
        assert_eq!(back.current, Screen::InitialClarifier.backwards());
        assert_eq!(back.previous, state.previous);
        assert_eq!(back.main_reason, Some(MainReason::Other));
    }

    #[test]
    fn test_snapshots_are_independent() {
        let first = ViewState::new();
        let second = first.advance(Screen::PositiveShare);
        assert_eq!(first.screen(), Screen::InitialClarifier);
        assert_eq!(second.screen(), Screen::PositiveShare);
    }
}
