//! Typewriter reveal of a fixed string, plus an independent blinking caret.
//!
//! Both are plain state objects advanced by ticks. Scheduling the ticks
//! (and cancelling them) is the event loop's job; see `tui::schedule`.

/// Progressive reveal of a fixed source string, one char per tick.
///
/// Counts Unicode scalar values, so a multi-byte char is revealed whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealer {
    source: &'static str,
    revealed: usize,
    total: usize,
}

impl Revealer {
    /// Start with nothing revealed.
    pub fn new(source: &'static str) -> Self {
        Revealer {
            source,
            revealed: 0,
            total: source.chars().count(),
        }
    }

    /// Start fully revealed (animation disabled).
    pub fn completed(source: &'static str) -> Self {
        let total = source.chars().count();
        Revealer {
            source,
            revealed: total,
            total,
        }
    }

    /// Reveal one more char. Returns false once the source is exhausted,
    /// in which case nothing changes.
    pub fn tick(&mut self) -> bool {
        if self.revealed < self.total {
            self.revealed += 1;
            true
        } else {
            false
        }
    }

    /// The currently revealed prefix.
    pub fn visible(&self) -> &'static str {
        match self.source.char_indices().nth(self.revealed) {
            Some((byte_end, _)) => &self.source[..byte_end],
            None => self.source,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.total
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

/// Caret visibility, flipped on every blink tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    pub visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        CursorBlink { visible: true }
    }
}

impl CursorBlink {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

// ============================================================================
// TESTS
// ============================================================================
