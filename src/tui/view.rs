//! Pure rendering: map App state to ratatui widget trees.
//!
//! Layout, top to bottom: header (name, contacts), the terminal card,
//! the tab bar, the active section, and a help line. The palette is
//! drawn last, over everything else. Widget-building functions are pure
//! (state in, widgets out); the only effect is Frame::render_widget().

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Tabs, Wrap};

use crate::content::{Profile, Section, profile};
use crate::palette;
use crate::reveal::{CursorBlink, Revealer};

use super::state::{App, PaletteState, View};
use super::theme;

/// Caret glyph drawn after the typed text.
pub const CARET: &str = "▋";

/// Palette overlay width, before clamping to the screen.
const PALETTE_WIDTH: u16 = 48;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let profile = profile();
    let [header, terminal, tabs, body, help] = screen_layout(area);

    frame.render_widget(render_header(&profile), header);
    frame.render_widget(render_terminal(&app.revealer, app.cursor), terminal);
    frame.render_widget(render_tabs(app.view.section), tabs);
    render_section(&profile, &app.view, frame, body);
    frame.render_widget(render_help(app.palette_open()), help);

    if let Some(palette) = &app.view.palette {
        render_palette(palette, frame, palette_area(area));
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Header, terminal card, tabs, section body, help line.
fn screen_layout(area: Rect) -> [Rect; 5] {
    Layout::vertical([
        Constraint::Length(3), // header
        Constraint::Length(6), // terminal card
        Constraint::Length(1), // tabs
        Constraint::Min(0),    // section
        Constraint::Length(1), // help
    ])
    .areas(area)
}

/// Name on the first line, contact links below (wrapping on narrow screens).
fn render_header(profile: &Profile) -> Paragraph<'static> {
    let mut contacts = Vec::new();
    for (i, contact) in profile.contacts.iter().enumerate() {
        if i > 0 {
            contacts.push(Span::raw("   "));
        }
        contacts.push(Span::styled(format!("{}: ", contact.label), theme::STYLE_INTERACTIVE));
        contacts.push(Span::raw(display_target(contact.target)));
    }

    Paragraph::new(vec![
        Line::from(Span::styled(profile.name, theme::STYLE_TITLE)),
        Line::from(contacts),
    ])
    .wrap(Wrap { trim: true })
}

/// A URI without its scheme noise, for display.
pub fn display_target(target: &str) -> &str {
    ["mailto:", "tel:", "https://www.", "https://", "http://"]
        .iter()
        .find_map(|prefix| target.strip_prefix(prefix))
        .map(|rest| rest.trim_end_matches('/'))
        .unwrap_or(target)
}

fn render_tabs(active: Section) -> Tabs<'static> {
    let titles = Section::ALL
        .iter()
        .map(|s| format!(" {} {} ", s.index() + 1, s.title()));
    Tabs::new(titles)
        .select(active.index())
        .style(theme::STYLE_TAB)
        .highlight_style(theme::STYLE_TAB_ACTIVE)
        .divider(" ")
}

/// Help line showing available keybindings.
fn render_help(palette_open: bool) -> Paragraph<'static> {
    let help_text = if palette_open {
        "[type] filter  [↑/↓] move  [Enter] run  [Esc] close"
    } else {
        "[1-4] section  [←/→] cycle  [↑/↓] scroll  [^K] commands  [q] quit"
    };
    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// TERMINAL CARD
// ============================================================================

fn render_terminal(revealer: &Revealer, cursor: CursorBlink) -> Paragraph<'static> {
    let dots = Line::from(vec![
        Span::styled(" ● ", theme::STYLE_DOT_RED),
        Span::styled("● ", theme::STYLE_DOT_YELLOW),
        Span::styled("● ", theme::STYLE_DOT_GREEN),
    ]);

    Paragraph::new(terminal_lines(revealer.visible(), cursor.visible))
        .block(Block::bordered().title(dots))
        .style(theme::STYLE_TERMINAL)
}

/// Typed prefix split into lines, with the caret after the last char.
pub fn terminal_lines(visible: &'static str, caret: bool) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = visible.split('\n').map(Line::from).collect();
    if caret {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(CARET, theme::STYLE_CARET));
        }
    }
    lines
}

// ============================================================================
// SECTIONS
// ============================================================================

fn section_block(section: Section) -> Block<'static> {
    Block::bordered().title(Span::styled(
        format!(" {} ", section.title()),
        theme::STYLE_IMPORTANT,
    ))
}

fn section_paragraph(profile: &Profile, section: Section) -> Paragraph<'static> {
    Paragraph::new(section_lines(profile, section)).wrap(Wrap { trim: false })
}

/// Largest useful scroll offset for `section` within `body`: past it the
/// last wrapped row would leave the bottom of the viewport empty.
fn scroll_limit(profile: &Profile, section: Section, body: Rect) -> u16 {
    let inner = section_block(section).inner(body);
    let rows = section_paragraph(profile, section).line_count(inner.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}

/// Largest useful scroll offset for `section` on a screen of `area`.
pub fn max_scroll(area: Rect, section: Section) -> u16 {
    let [_, _, _, body, _] = screen_layout(area);
    scroll_limit(&profile(), section, body)
}

fn render_section(profile: &Profile, view: &View, frame: &mut Frame, area: Rect) {
    let section = view.section;
    let offset = view.scroll.min(scroll_limit(profile, section, area));
    let body = section_paragraph(profile, section)
        .block(section_block(section))
        .scroll((offset, 0));
    frame.render_widget(body, area);
}

/// Body of exactly one section.
pub fn section_lines(profile: &Profile, section: Section) -> Vec<Line<'static>> {
    match section {
        Section::About => about_lines(profile),
        Section::Experience => experience_lines(profile),
        Section::Projects => project_lines(profile),
        Section::Skills => skill_lines(profile),
    }
}

fn about_lines(profile: &Profile) -> Vec<Line<'static>> {
    let edu = &profile.education;
    let mut lines = vec![
        Line::from(Span::styled("Education & Background", theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(Span::styled(edu.institution, theme::STYLE_IMPORTANT)),
        Line::from(edu.degree),
        Line::from(Span::styled(edu.expected, theme::STYLE_DIM)),
        Line::from(""),
    ];
    for highlight in edu.highlights {
        lines.push(Line::from(vec![
            Span::styled("  ★ ", theme::STYLE_ACCENT),
            Span::raw(*highlight),
        ]));
    }
    lines
}

fn experience_lines(profile: &Profile) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, job) in profile.experience.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(job.title, theme::STYLE_IMPORTANT),
            Span::styled(format!("  {}", job.period), theme::STYLE_DIM),
        ]));
        lines.push(Line::from(Span::styled(job.organization, theme::STYLE_DIM)));
        for bullet in job.bullets {
            lines.push(Line::from(vec![
                Span::styled("  › ", theme::STYLE_ACCENT),
                Span::raw(*bullet),
            ]));
        }
    }
    lines
}

fn project_lines(profile: &Profile) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, project) in profile.projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("◆ ", theme::STYLE_ACCENT),
            Span::styled(project.title, theme::STYLE_IMPORTANT),
        ]));
        lines.push(Line::from(Span::styled(project.description, theme::STYLE_DIM)));

        let mut stats = vec![Span::raw("  ")];
        for stat in project.stats {
            stats.push(Span::styled(stat.value, theme::STYLE_STAT_VALUE));
            stats.push(Span::styled(format!(" {}    ", stat.label), theme::STYLE_DIM));
        }
        lines.push(Line::from(stats));

        for detail in project.details {
            lines.push(Line::from(vec![
                Span::styled("  › ", theme::STYLE_ACCENT),
                Span::raw(*detail),
            ]));
        }

        lines.push(tag_line(project.tech));
    }
    lines
}

fn skill_lines(profile: &Profile) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for group in profile.skills {
        lines.push(Line::from(Span::styled(group.category, theme::STYLE_IMPORTANT)));
        lines.push(tag_line(group.skills));
        lines.push(Line::from(""));
    }
    lines
}

/// Chips on one line: ` Python ` ` NumPy ` ...
fn tag_line(tags: &'static [&'static str]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for tag in tags {
        spans.push(Span::styled(format!(" {} ", tag), theme::STYLE_TAG));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

// ============================================================================
// PALETTE OVERLAY
// ============================================================================

/// Where the palette is drawn within `area`. Also used to decide whether
/// a mouse press landed outside it.
pub fn palette_area(area: Rect) -> Rect {
    // borders + prompt + separator + one row per command
    let wanted_height = palette::commands().len() as u16 + 4;
    let width = PALETTE_WIDTH.min(area.width);
    let height = wanted_height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 3,
        width,
        height,
    }
}

fn render_palette(palette: &PaletteState, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title(" Command Palette ")
        .border_style(theme::STYLE_PALETTE_BORDER);
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("> ", theme::STYLE_INTERACTIVE),
            Span::raw(palette.query.clone()),
            Span::styled("▏", theme::STYLE_INTERACTIVE),
        ]),
        Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            theme::STYLE_DIM,
        )),
    ];

    let matches = palette.matches();
    if matches.is_empty() {
        lines.push(Line::from(Span::styled("  No matching commands", theme::STYLE_DIM)));
    }
    for (i, command) in matches.iter().enumerate() {
        let line = Line::from(format!("  {}", command.label));
        if i == palette.cursor {
            lines.push(line.style(theme::STYLE_CURSOR));
        } else {
            lines.push(line);
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// TESTS
// ============================================================================
