//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition
//! function (`update`) and the rendering layer (`view`) both program
//! against them.
//!
//! Design principle: `View` carries only selection state (active
//! section, palette). The palette is `Option<PaletteState>`, so a closed
//! palette has no query to go stale: opening always starts empty.
//! Animation state (reveal progress, caret) lives beside it in `App`.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::config::Config;
use crate::content::{Section, TERMINAL_TEXT};
use crate::palette::{self, PaletteCommand};
use crate::reveal::{CursorBlink, Revealer};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Three producers feed a single mpsc channel:
/// - The input listener sends `Key`, `Mouse` and `Resize`, and
///   `InputClosed` once if its source fails
/// - The reveal ticker sends `Tick(Tick::Reveal)`
/// - The blink ticker sends `Tick(Tick::Blink)`
///
/// Input goes through `map_key`/`map_mouse → update`; ticks go through
/// `handle_tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A terminal key event.
    Key(KeyEvent),
    /// A terminal mouse event.
    Mouse(MouseEvent),
    /// The terminal was resized; only a redraw is needed.
    Resize,
    /// A timer fired.
    Tick(Tick),
    /// The input source failed; no more keys will arrive.
    InputClosed,
}

/// Which repeating timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Reveal one more char of the terminal text.
    Reveal,
    /// Flip the caret.
    Blink,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model, owned by the event loop.
#[derive(Debug)]
pub struct App {
    /// Selection state driven by user actions.
    pub view: View,

    /// Typewriter progress of the terminal card.
    pub revealer: Revealer,

    /// Caret visibility in the terminal card.
    pub cursor: CursorBlink,

    /// Set to true when the app should exit on the next iteration.
    pub should_quit: bool,
}

/// Selection state: exactly one active section, palette open or closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub section: Section,
    /// First body row shown. Reset on section change; the viewport
    /// clamps it to the rendered content.
    pub scroll: u16,
    /// `Some` while the palette overlay is shown.
    pub palette: Option<PaletteState>,
}

/// Per-open palette state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteState {
    /// Live filter text.
    pub query: String,
    /// Highlighted row in the filtered list.
    pub cursor: usize,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key and mouse events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Jump to a section (number keys).
    SelectSection(Section),
    /// Next tab, wrapping.
    NextSection,
    /// Previous tab, wrapping.
    PrevSection,
    /// Scroll the section body up by this many rows.
    ScrollUp(u16),
    /// Scroll the section body down by this many rows.
    ScrollDown(u16),
    /// Show the palette (Ctrl+K).
    OpenPalette,
    /// Hide the palette (Esc, or a click outside it).
    ClosePalette,
    /// Append a char to the palette query.
    Type(char),
    /// Delete the last char of the palette query.
    Backspace,
    /// Move the palette highlight up.
    MoveUp,
    /// Move the palette highlight down.
    MoveDown,
    /// Invoke the highlighted palette command.
    Confirm,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// the effects boundary decides HOW.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Show this view (may be unchanged).
    View(View),
    /// Quit the application.
    Quit,
    /// Show `view` and execute `effect`.
    Effect { view: View, effect: Effect },
}

/// Side effect requested by a pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a URI (https, mailto, tel) to the host's default handler.
    OpenUri { uri: &'static str },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Fresh session: About tab, palette closed, reveal at zero
    /// (or complete when animation is off).
    pub fn new(config: &Config) -> Self {
        let revealer = if config.animate {
            Revealer::new(TERMINAL_TEXT)
        } else {
            Revealer::completed(TERMINAL_TEXT)
        };
        App {
            view: View::default(),
            revealer,
            cursor: CursorBlink::default(),
            should_quit: false,
        }
    }

    pub fn palette_open(&self) -> bool {
        self.view.palette.is_some()
    }
}

impl View {
    pub fn with_section(section: Section) -> Self {
        View {
            section,
            scroll: 0,
            palette: None,
        }
    }

    /// Same section, palette shown with an empty query.
    pub fn with_palette(section: Section) -> Self {
        View {
            palette: Some(PaletteState::default()),
            ..View::with_section(section)
        }
    }
}

impl PaletteState {
    /// Commands visible under the current query.
    pub fn matches(&self) -> Vec<&'static PaletteCommand> {
        palette::filter(palette::commands(), &self.query)
    }

    /// The highlighted command, if the filtered list is non-empty.
    pub fn selected(&self) -> Option<&'static PaletteCommand> {
        self.matches().get(self.cursor).copied()
    }
}

// ============================================================================
// TESTS
// ============================================================================
