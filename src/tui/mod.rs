//! TUI module for the interactive résumé.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, View, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Style constants
//! - `schedule`: Timers and the input subscription (threads)
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod schedule;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
