//! Pure state transitions: (View, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! The palette is modal: while it is open only palette actions and Quit
//! are accepted. Unhandled actions return the view unchanged (no-op).

use crate::palette::{CommandAction, PaletteCommand};

use super::state::{Action, App, Effect, PaletteState, Tick, Transition, View};

/// Pure state transition function.
pub fn update(mut view: View, action: &Action) -> Transition {
    match view.palette.take() {
        Some(palette) => update_palette(view, palette, action),
        None => update_sections(view, action),
    }
}

// ============================================================================
// PER-MODE HANDLERS
// ============================================================================

/// Palette closed: tab navigation, body scrolling, open the palette, quit.
fn update_sections(view: View, action: &Action) -> Transition {
    let section = view.section;
    match action {
        Action::SelectSection(target) if *target == section => Transition::View(view),
        Action::SelectSection(target) => Transition::View(View::with_section(*target)),
        Action::NextSection => Transition::View(View::with_section(section.next())),
        Action::PrevSection => Transition::View(View::with_section(section.prev())),
        Action::ScrollUp(rows) => Transition::View(View {
            scroll: view.scroll.saturating_sub(*rows),
            ..view
        }),
        Action::ScrollDown(rows) => Transition::View(View {
            scroll: view.scroll.saturating_add(*rows),
            ..view
        }),
        Action::OpenPalette => Transition::View(reopen(view, PaletteState::default())),
        Action::Quit => Transition::Quit,
        _ => Transition::View(view),
    }
}

/// Palette open: edit the query, move the highlight, invoke or dismiss.
///
/// `view` is the view underneath the palette (its `palette` is `None`).
fn update_palette(view: View, palette: PaletteState, action: &Action) -> Transition {
    match action {
        Action::Type(c) => {
            let mut query = palette.query;
            query.push(*c);
            Transition::View(reopen(view, PaletteState { query, cursor: 0 }))
        }
        Action::Backspace => {
            let mut query = palette.query;
            query.pop();
            Transition::View(reopen(view, PaletteState { query, cursor: 0 }))
        }
        Action::MoveUp => Transition::View(reopen(
            view,
            PaletteState {
                cursor: palette.cursor.saturating_sub(1),
                ..palette
            },
        )),
        Action::MoveDown => {
            let len = palette.matches().len();
            let cursor = if len == 0 {
                0
            } else {
                (palette.cursor + 1).min(len - 1)
            };
            Transition::View(reopen(view, PaletteState { cursor, ..palette }))
        }
        Action::Confirm => match palette.selected() {
            Some(command) => invoke(view, command),
            // Nothing to run: stay open.
            None => Transition::View(reopen(view, palette)),
        },
        Action::ClosePalette => Transition::View(view),
        Action::Quit => Transition::Quit,
        _ => Transition::View(reopen(view, palette)),
    }
}

fn reopen(view: View, palette: PaletteState) -> View {
    View {
        palette: Some(palette),
        ..view
    }
}

/// Run a command once and close the palette.
fn invoke(view: View, command: &PaletteCommand) -> Transition {
    match command.action {
        CommandAction::Navigate(target) if target == view.section => Transition::View(view),
        CommandAction::Navigate(target) => Transition::View(View::with_section(target)),
        CommandAction::OpenLink(uri) | CommandAction::ComposeMail(uri) => Transition::Effect {
            view,
            effect: Effect::OpenUri { uri },
        },
    }
}

// ============================================================================
// TIMER EVENTS
// ============================================================================

/// Apply a timer tick. Returns true if the model changed.
pub fn handle_tick(app: &mut App, tick: Tick) -> bool {
    match tick {
        Tick::Reveal => app.revealer.tick(),
        Tick::Blink => {
            app.cursor.toggle();
            true
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::{EMAIL_URI, GITHUB_URL, Section};
    use crate::palette;

    fn open(section: Section, query: &str) -> View {
        View {
            palette: Some(PaletteState {
                query: query.into(),
                cursor: 0,
            }),
            ..View::with_section(section)
        }
    }

    fn scrolled(section: Section, scroll: u16) -> View {
        View {
            scroll,
            ..View::with_section(section)
        }
    }

    fn expect_view(t: Transition) -> View {
        match t {
            Transition::View(v) => v,
            other => panic!("Expected View, got {:?}", other),
        }
    }

    // -- Section navigation --

    #[test]
    fn select_sets_exactly_that_section() {
        for from in Section::ALL {
            for to in Section::ALL {
                let v = expect_view(update(View::with_section(from), &Action::SelectSection(to)));
                assert_eq!(v, View::with_section(to));
            }
        }
    }

    #[test]
    fn selecting_active_section_is_noop() {
        let before = View::with_section(Section::Projects);
        let after = expect_view(update(before.clone(), &Action::SelectSection(Section::Projects)));
        assert_eq!(before, after);
    }

    #[test]
    fn next_and_prev_cycle_tabs() {
        let v = expect_view(update(View::with_section(Section::Skills), &Action::NextSection));
        assert_eq!(v.section, Section::About);
        let v = expect_view(update(View::with_section(Section::About), &Action::PrevSection));
        assert_eq!(v.section, Section::Skills);
    }

    #[test]
    fn quit_from_sections() {
        assert_eq!(update(View::default(), &Action::Quit), Transition::Quit);
    }

    #[test]
    fn palette_only_actions_are_noops_when_closed() {
        for action in [
            Action::ClosePalette,
            Action::Type('x'),
            Action::Backspace,
            Action::MoveDown,
            Action::Confirm,
        ] {
            let v = expect_view(update(View::with_section(Section::Experience), &action));
            assert_eq!(v, View::with_section(Section::Experience), "{:?}", action);
        }
    }

    // -- Body scrolling --

    #[test]
    fn scroll_down_then_up_moves_the_body() {
        let v = expect_view(update(View::with_section(Section::Projects), &Action::ScrollDown(3)));
        assert_eq!(v, scrolled(Section::Projects, 3));
        let v = expect_view(update(v, &Action::ScrollUp(1)));
        assert_eq!(v, scrolled(Section::Projects, 2));
    }

    #[test]
    fn scroll_up_stops_at_the_top() {
        let v = expect_view(update(scrolled(Section::Skills, 2), &Action::ScrollUp(10)));
        assert_eq!(v.scroll, 0);
    }

    #[test]
    fn scroll_down_saturates() {
        let v = expect_view(update(scrolled(Section::Skills, u16::MAX - 1), &Action::ScrollDown(10)));
        assert_eq!(v.scroll, u16::MAX);
    }

    #[test]
    fn changing_section_resets_scroll() {
        let v = expect_view(update(scrolled(Section::Projects, 5), &Action::NextSection));
        assert_eq!(v, View::with_section(Section::Skills));
        let v = expect_view(update(
            scrolled(Section::Projects, 5),
            &Action::SelectSection(Section::About),
        ));
        assert_eq!(v.scroll, 0);
    }

    #[test]
    fn selecting_active_section_keeps_scroll() {
        let v = expect_view(update(
            scrolled(Section::Projects, 5),
            &Action::SelectSection(Section::Projects),
        ));
        assert_eq!(v, scrolled(Section::Projects, 5));
    }

    #[test]
    fn palette_round_trip_keeps_scroll() {
        let v = expect_view(update(scrolled(Section::Projects, 4), &Action::OpenPalette));
        assert_eq!(v.scroll, 4);
        let v = expect_view(update(v, &Action::ClosePalette));
        assert_eq!(v, scrolled(Section::Projects, 4));
    }

    #[test]
    fn scroll_keys_do_not_reach_the_body_while_open() {
        let start = open(Section::Projects, "");
        let v = expect_view(update(start.clone(), &Action::ScrollDown(1)));
        assert_eq!(v, start);
    }

    #[test]
    fn link_command_keeps_scroll() {
        let start = View {
            palette: Some(PaletteState {
                query: "git".into(),
                cursor: 0,
            }),
            ..scrolled(Section::Projects, 6)
        };
        match update(start, &Action::Confirm) {
            Transition::Effect { view, .. } => assert_eq!(view, scrolled(Section::Projects, 6)),
            other => panic!("Expected Effect, got {:?}", other),
        }
    }

    // -- Opening and closing --

    #[test]
    fn open_chord_shows_empty_palette_with_full_list() {
        let v = expect_view(update(View::with_section(Section::Skills), &Action::OpenPalette));
        assert_eq!(v.section, Section::Skills);
        let p = v.palette.expect("palette open");
        assert_eq!(p.query, "");
        assert_eq!(p.matches().len(), palette::commands().len());
    }

    #[test]
    fn open_chord_while_open_keeps_query() {
        let v = expect_view(update(open(Section::About, "vi"), &Action::OpenPalette));
        assert_eq!(v, open(Section::About, "vi"));
    }

    #[test]
    fn escape_closes_and_keeps_section() {
        let v = expect_view(update(open(Section::Projects, "git"), &Action::ClosePalette));
        assert_eq!(v, View::with_section(Section::Projects));
    }

    #[test]
    fn reopening_after_close_starts_with_empty_query() {
        let closed = expect_view(update(open(Section::About, "git"), &Action::ClosePalette));
        let reopened = expect_view(update(closed, &Action::OpenPalette));
        assert_eq!(reopened.palette.unwrap().query, "");
    }

    #[test]
    fn section_keys_are_ignored_while_open() {
        let v = expect_view(update(open(Section::About, ""), &Action::SelectSection(Section::Skills)));
        assert_eq!(v, open(Section::About, ""));
        let v = expect_view(update(open(Section::About, ""), &Action::NextSection));
        assert_eq!(v, open(Section::About, ""));
    }

    #[test]
    fn quit_while_open() {
        assert_eq!(update(open(Section::About, "x"), &Action::Quit), Transition::Quit);
    }

    // -- Query editing --

    #[test]
    fn typing_appends_and_resets_highlight() {
        let start = View {
            palette: Some(PaletteState {
                query: "vie".into(),
                cursor: 3,
            }),
            ..View::with_section(Section::About)
        };
        let v = expect_view(update(start, &Action::Type('w')));
        assert_eq!(v, open(Section::About, "view"));
    }

    #[test]
    fn backspace_pops_last_char() {
        let v = expect_view(update(open(Section::About, "gitx"), &Action::Backspace));
        assert_eq!(v, open(Section::About, "git"));
    }

    #[test]
    fn backspace_on_empty_query_stays_empty() {
        let v = expect_view(update(open(Section::About, ""), &Action::Backspace));
        assert_eq!(v, open(Section::About, ""));
    }

    // -- Highlight movement --

    #[test]
    fn move_down_clamps_to_filtered_length() {
        let mut view = open(Section::About, "view");
        for _ in 0..10 {
            view = expect_view(update(view, &Action::MoveDown));
        }
        assert_eq!(view.palette.unwrap().cursor, 3);
    }

    #[test]
    fn move_up_stops_at_top() {
        let v = expect_view(update(open(Section::About, ""), &Action::MoveUp));
        assert_eq!(v.palette.unwrap().cursor, 0);
    }

    #[test]
    fn move_down_with_no_matches_stays_at_zero() {
        let v = expect_view(update(open(Section::About, "zzz"), &Action::MoveDown));
        assert_eq!(v.palette.unwrap().cursor, 0);
    }

    // -- Invocation --

    #[test]
    fn navigate_command_switches_section_and_closes() {
        // "view" → [about, projects, skills, experience]; row 1 is projects
        let start = View {
            palette: Some(PaletteState {
                query: "view".into(),
                cursor: 1,
            }),
            ..View::with_section(Section::About)
        };
        let v = expect_view(update(start, &Action::Confirm));
        assert_eq!(v, View::with_section(Section::Projects));
    }

    #[test]
    fn link_command_keeps_section_closes_and_emits_effect() {
        let result = update(open(Section::Skills, "git"), &Action::Confirm);
        assert_eq!(
            result,
            Transition::Effect {
                view: View::with_section(Section::Skills),
                effect: Effect::OpenUri { uri: GITHUB_URL },
            }
        );
    }

    #[test]
    fn mail_command_emits_mailto_effect() {
        let result = update(open(Section::Experience, "email"), &Action::Confirm);
        assert_eq!(
            result,
            Transition::Effect {
                view: View::with_section(Section::Experience),
                effect: Effect::OpenUri { uri: EMAIL_URI },
            }
        );
    }

    #[test]
    fn confirm_with_no_matches_stays_open() {
        let v = expect_view(update(open(Section::About, "zzz"), &Action::Confirm));
        assert_eq!(v, open(Section::About, "zzz"));
    }

    #[test]
    fn every_command_closes_the_palette() {
        for (i, _) in palette::commands().iter().enumerate() {
            let start = View {
                palette: Some(PaletteState {
                    query: String::new(),
                    cursor: i,
                }),
                ..View::with_section(Section::About)
            };
            let view = match update(start, &Action::Confirm) {
                Transition::View(v) => v,
                Transition::Effect { view, .. } => view,
                Transition::Quit => panic!("Confirm must not quit"),
            };
            assert!(view.palette.is_none());
        }
    }

    // -- Ticks --

    #[test]
    fn reveal_tick_advances_until_complete() {
        let mut app = App::new(&Config::default());
        let total = app.revealer.total();
        for _ in 0..total {
            assert!(handle_tick(&mut app, Tick::Reveal));
        }
        assert!(app.revealer.is_complete());
        assert!(!handle_tick(&mut app, Tick::Reveal));
    }

    #[test]
    fn blink_tick_toggles_regardless_of_reveal() {
        let mut app = App::new(&Config::default());
        assert!(app.cursor.visible);
        assert!(handle_tick(&mut app, Tick::Blink));
        assert!(!app.cursor.visible);
        assert_eq!(app.revealer.revealed(), 0);
        handle_tick(&mut app, Tick::Blink);
        assert!(app.cursor.visible);
    }
}
