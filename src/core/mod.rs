//! # Core Flow Logic
//!
//! This module contains the feedback wizard's navigation rules.
//! It knows nothing about any specific UI technology or transport.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewState (snapshot) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!           ┌──────────────┐          ┌────────────┐
//!           │ FeedbackFlow │◄─────────│    Host    │
//!           │  (effects)   │          │ (commands) │
//!           └──────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ViewState` and the `Screen` variants
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`reason`]: main reasons and their sub-reasons
//! - [`ratings`]: the ratings-button gate and its collaborators
//! - [`config`]: config file loading and resolution

pub mod action;
pub mod config;
pub mod ratings;
pub mod reason;
pub mod state;

pub use action::{Action, Effect, Submission, Transition, update};
pub use ratings::{BuildMode, RatingsGate, StaticStoreDetector, StoreDetector};
pub use reason::{MainReason, SubReason};
pub use state::{Direction, Screen, ScreenState, ViewState};
