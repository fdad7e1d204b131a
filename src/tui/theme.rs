//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Green on black: the terminal card (typed text, caret)
//! - Blue: accent (active tab, stat values, bullet markers)
//! - Cyan: interactive elements (keybinding hints, palette prompt)
//! - Dim: de-emphasized (organizations, periods, stat labels)
//! - Bold: titles

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// TERMINAL CARD
// ============================================================================

/// Typed text inside the terminal card.
pub const STYLE_TERMINAL: Style = Style::new().fg(Color::Green).bg(Color::Black);

/// The blinking caret.
pub const STYLE_CARET: Style = Style::new().fg(Color::LightGreen).bg(Color::Black);

/// Window-control dots in the card's title.
pub const STYLE_DOT_RED: Style = Style::new().fg(Color::Red);
pub const STYLE_DOT_YELLOW: Style = Style::new().fg(Color::Yellow);
pub const STYLE_DOT_GREEN: Style = Style::new().fg(Color::Green);

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Accent — blue.
pub const STYLE_ACCENT: Style = Style::new().fg(Color::Blue);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Name / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Inactive tab.
pub const STYLE_TAB: Style = Style::new().fg(Color::Gray);

/// Active tab.
pub const STYLE_TAB_ACTIVE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

/// Headline number on a project card.
pub const STYLE_STAT_VALUE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

/// Technology / skill chip.
pub const STYLE_TAG: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

/// Highlighted palette row.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Palette border.
pub const STYLE_PALETTE_BORDER: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
