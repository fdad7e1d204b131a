//! Command palette model: the fixed command set and its filter.
//!
//! Pure data and one pure function. Opening, closing and invoking are
//! transitions in `tui::update`.

use crate::content::{EMAIL_URI, GITHUB_URL, LINKEDIN_URL, PHONE_URI, Section};

/// What a palette command does when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Switch the active section.
    Navigate(Section),
    /// Open a URI with the host's default handler.
    OpenLink(&'static str),
    /// Open a `mailto:` URI in the mail client.
    ComposeMail(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteCommand {
    pub id: &'static str,
    pub label: &'static str,
    pub action: CommandAction,
}

static COMMANDS: [PaletteCommand; 8] = [
    PaletteCommand {
        id: "about",
        label: "View About",
        action: CommandAction::Navigate(Section::About),
    },
    PaletteCommand {
        id: "projects",
        label: "View Projects",
        action: CommandAction::Navigate(Section::Projects),
    },
    PaletteCommand {
        id: "skills",
        label: "View Skills",
        action: CommandAction::Navigate(Section::Skills),
    },
    PaletteCommand {
        id: "experience",
        label: "View Experience",
        action: CommandAction::Navigate(Section::Experience),
    },
    PaletteCommand {
        id: "github",
        label: "Visit GitHub",
        action: CommandAction::OpenLink(GITHUB_URL),
    },
    PaletteCommand {
        id: "linkedin",
        label: "Visit LinkedIn",
        action: CommandAction::OpenLink(LINKEDIN_URL),
    },
    PaletteCommand {
        id: "email",
        label: "Send Email",
        action: CommandAction::ComposeMail(EMAIL_URI),
    },
    PaletteCommand {
        id: "phone",
        label: "Call Phone",
        action: CommandAction::OpenLink(PHONE_URI),
    },
];

/// The fixed command list, in display order.
pub fn commands() -> &'static [PaletteCommand] {
    &COMMANDS
}

/// Commands whose label contains `query`, ignoring case.
///
/// Stable: keeps the input order. An empty query matches everything.
pub fn filter<'a>(commands: &'a [PaletteCommand], query: &str) -> Vec<&'a PaletteCommand> {
    let needle = query.to_lowercase();
    commands
        .iter()
        .filter(|c| c.label.to_lowercase().contains(&needle))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
