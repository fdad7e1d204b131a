//! termfolio: an interactive terminal résumé.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod palette;
pub mod platform;
pub mod report;
pub mod reveal;
pub mod tui;
