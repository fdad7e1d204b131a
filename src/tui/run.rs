//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only TUI module with side effects. It wires the pure
//! layers (state, update, view) to the real terminal via crossterm and
//! ratatui. Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: three producers feed a single mpsc channel.
//! - Input listener: forwards crossterm key, mouse and resize events,
//!   then `InputClosed` if the terminal stops delivering them
//! - Reveal ticker: one tick per revealed char, disposed once complete
//! - Blink ticker: caret toggles, for the whole session
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;

use crossterm::ExecutableCommand;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::content::Section;
use crate::error::Result;
use crate::platform;

use super::schedule::{CrosstermEvents, EventSource, InputListener, Ticker};
use super::state::{Action, App, AppEvent, Effect, Tick, Transition};
use super::update::{handle_tick, update};
use super::view::{max_scroll, palette_area, render};

/// Rows moved by PageUp/PageDown.
pub const SCROLL_PAGE: u16 = 10;

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// The palette chord, Escape and Ctrl+C mean the same thing everywhere.
/// Other keys depend on whether the palette has focus: while it is open,
/// printable keys are query text, not shortcuts.
pub fn map_key(key: KeyEvent, palette_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Char('k') if ctrl => return Some(Action::OpenPalette),
        KeyCode::Esc => return Some(Action::ClosePalette),
        _ => {}
    }

    if palette_open {
        return match key.code {
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Action::Type(c))
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextSection),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevSection),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp(1)),
        KeyCode::PageDown => Some(Action::ScrollDown(SCROLL_PAGE)),
        KeyCode::PageUp => Some(Action::ScrollUp(SCROLL_PAGE)),
        KeyCode::Char(c @ '1'..='4') => {
            Section::from_number(c as u8 - b'0').map(Action::SelectSection)
        }
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Map a mouse event to an Action. Only a press outside the open
/// palette means anything: it dismisses the palette.
pub fn map_mouse(mouse: MouseEvent, palette_open: bool, screen: Rect) -> Option<Action> {
    if !palette_open {
        return None;
    }
    match mouse.kind {
        MouseEventKind::Down(_) => {
            let at = Position::new(mouse.column, mouse.row);
            if palette_area(screen).contains(at) {
                None
            } else {
                Some(Action::ClosePalette)
            }
        }
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode. Every step is attempted; the
/// first failure is returned.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let mouse = io::stdout().execute(DisableMouseCapture).map(|_| ());
    let screen = io::stdout().execute(LeaveAlternateScreen).map(|_| ());
    raw.and(mouse).and(screen)
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Restores the terminal when dropped, on every exit path of `run`.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = (self.restore)();
    }
}

/// Arm the guard, then run `setup`. A setup that fails halfway (raw mode
/// on, alternate screen refused) is still undone.
fn enter_guarded<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: fn() -> io::Result<()>,
) -> io::Result<(TerminalGuard, T)> {
    let guard = TerminalGuard { restore };
    let value = setup()?;
    Ok((guard, value))
}

// ============================================================================
// SUBSCRIPTIONS
// ============================================================================

/// Everything acquired for one session. Dropping it releases all of it.
struct Subscriptions {
    _input: InputListener,
    /// None once the text is fully revealed.
    reveal: Option<Ticker>,
    _blink: Ticker,
}

/// The reveal timer runs only while there is text left to type.
fn reveal_timer_needed(app: &App) -> bool {
    !app.revealer.is_complete()
}

impl Subscriptions {
    fn acquire(config: &Config, app: &App, tx: &mpsc::Sender<AppEvent>) -> Self {
        Self::acquire_with(CrosstermEvents, config, app, tx)
    }

    fn acquire_with<S: EventSource>(
        source: S,
        config: &Config,
        app: &App,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Self {
        let reveal = reveal_timer_needed(app).then(|| {
            Ticker::spawn(config.reveal_delay, tx.clone(), AppEvent::Tick(Tick::Reveal))
        });
        Subscriptions {
            _input: InputListener::spawn_with(source, tx.clone()),
            reveal,
            _blink: Ticker::spawn(config.blink_delay, tx.clone(), AppEvent::Tick(Tick::Blink)),
        }
    }

    /// Cancel the reveal timer once there is nothing left to reveal.
    fn settle(&mut self, app: &App) {
        if !reveal_timer_needed(app) && self.reveal.take().is_some() {
            debug!("reveal complete, timer disposed");
        }
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
pub fn run(config: &Config) -> Result<()> {
    install_panic_hook();
    let (_guard, mut terminal) = enter_guarded(setup_terminal, restore_terminal)?;

    let mut app = App::new(config);
    let (tx, rx) = mpsc::channel::<AppEvent>();
    let mut subscriptions = Subscriptions::acquire(config, &app, &tx);
    // The producers hold their own clones; the loop ends if they all stop.
    drop(tx);

    info!(animate = config.animate, "session started");

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        handle_event(&mut app, event, screen);
        subscriptions.settle(&app);
    }

    drop(subscriptions);
    info!("session ended");
    Ok(())
}

/// Apply one channel event to the model. `screen` is the current
/// terminal area, used for hit-testing and the scroll bound.
fn handle_event(app: &mut App, event: AppEvent, screen: Rect) {
    match event {
        AppEvent::Key(key) => {
            if let Some(action) = map_key(key, app.palette_open()) {
                dispatch(app, &action);
            }
        }
        AppEvent::Mouse(mouse) => {
            if let Some(action) = map_mouse(mouse, app.palette_open(), screen) {
                dispatch(app, &action);
            }
        }
        AppEvent::Resize => {}
        AppEvent::Tick(tick) => {
            handle_tick(app, tick);
        }
        AppEvent::InputClosed => {
            warn!("terminal input closed, quitting");
            app.should_quit = true;
        }
    }
    let limit = max_scroll(screen, app.view.section);
    app.view.scroll = app.view.scroll.min(limit);
}

/// Run an action through the pure transition and apply the result.
fn dispatch(app: &mut App, action: &Action) {
    let was_open = app.palette_open();
    let view = std::mem::take(&mut app.view);
    let section = view.section;

    match update(view, action) {
        Transition::View(next) => {
            app.view = next;
        }
        Transition::Quit => {
            app.should_quit = true;
        }
        Transition::Effect { view, effect } => {
            app.view = view;
            handle_effect(effect);
        }
    }

    if app.view.section != section {
        debug!(from = ?section, to = ?app.view.section, "section changed");
    }
    match (was_open, app.palette_open()) {
        (false, true) => debug!("palette opened"),
        (true, false) => debug!("palette closed"),
        _ => {}
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
///
/// Failures are logged and otherwise ignored: the palette has already
/// closed and there is nothing on screen to report them in.
fn handle_effect(effect: Effect) {
    match effect {
        Effect::OpenUri { uri } => {
            info!(uri, "opening link");
            if let Err(e) = platform::open_uri(uri) {
                warn!(error = %e, "command action failed");
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{Event, MouseButton};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits_in_both_modes() {
        assert_eq!(map_key(ctrl('c'), false), Some(Action::Quit));
        assert_eq!(map_key(ctrl('c'), true), Some(Action::Quit));
    }

    #[test]
    fn ctrl_k_opens_palette_in_both_modes() {
        assert_eq!(map_key(ctrl('k'), false), Some(Action::OpenPalette));
        assert_eq!(map_key(ctrl('k'), true), Some(Action::OpenPalette));
    }

    #[test]
    fn plain_k_is_not_the_chord() {
        assert_eq!(map_key(press(KeyCode::Char('k')), false), Some(Action::ScrollUp(1)));
        assert_eq!(map_key(press(KeyCode::Char('k')), true), Some(Action::Type('k')));
    }

    #[test]
    fn esc_closes_regardless_of_focus() {
        assert_eq!(map_key(press(KeyCode::Esc), false), Some(Action::ClosePalette));
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(Action::ClosePalette));
    }

    #[test]
    fn number_keys_select_sections() {
        assert_eq!(
            map_key(press(KeyCode::Char('1')), false),
            Some(Action::SelectSection(Section::About))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('3')), false),
            Some(Action::SelectSection(Section::Projects))
        );
        assert_eq!(map_key(press(KeyCode::Char('5')), false), None);
    }

    #[test]
    fn arrows_and_tab_cycle_sections() {
        assert_eq!(map_key(press(KeyCode::Right), false), Some(Action::NextSection));
        assert_eq!(map_key(press(KeyCode::Tab), false), Some(Action::NextSection));
        assert_eq!(map_key(press(KeyCode::Left), false), Some(Action::PrevSection));
        assert_eq!(map_key(press(KeyCode::BackTab), false), Some(Action::PrevSection));
    }

    #[test]
    fn open_palette_captures_printable_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q')), true), Some(Action::Type('q')));
        assert_eq!(map_key(press(KeyCode::Char('2')), true), Some(Action::Type('2')));
        assert_eq!(map_key(press(KeyCode::Char('q')), false), Some(Action::Quit));
    }

    #[test]
    fn palette_editing_keys() {
        assert_eq!(map_key(press(KeyCode::Enter), true), Some(Action::Confirm));
        assert_eq!(map_key(press(KeyCode::Up), true), Some(Action::MoveUp));
        assert_eq!(map_key(press(KeyCode::Down), true), Some(Action::MoveDown));
        assert_eq!(map_key(press(KeyCode::Backspace), true), Some(Action::Backspace));
        assert_eq!(map_key(press(KeyCode::Enter), false), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = ctrl('k');
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, false), None);
    }

    #[test]
    fn click_outside_palette_closes_it() {
        let screen = Rect::new(0, 0, 100, 40);
        assert_eq!(map_mouse(click(0, 0), true, screen), Some(Action::ClosePalette));
    }

    #[test]
    fn click_inside_palette_is_ignored() {
        let screen = Rect::new(0, 0, 100, 40);
        let p = palette_area(screen);
        assert_eq!(map_mouse(click(p.x + 1, p.y + 1), true, screen), None);
    }

    #[test]
    fn click_with_palette_closed_is_ignored() {
        let screen = Rect::new(0, 0, 100, 40);
        assert_eq!(map_mouse(click(0, 0), false, screen), None);
    }

    #[test]
    fn dispatch_applies_navigation_through_palette() {
        let mut app = App::new(&Config::default());
        dispatch(&mut app, &Action::OpenPalette);
        assert!(app.palette_open());
        for c in "skills".chars() {
            dispatch(&mut app, &Action::Type(c));
        }
        dispatch(&mut app, &Action::Confirm);
        assert!(!app.palette_open());
        assert_eq!(app.view.section, Section::Skills);
    }

    #[test]
    fn vertical_keys_scroll_when_closed_and_move_highlight_when_open() {
        assert_eq!(map_key(press(KeyCode::Down), false), Some(Action::ScrollDown(1)));
        assert_eq!(map_key(press(KeyCode::Char('k')), false), Some(Action::ScrollUp(1)));
        assert_eq!(
            map_key(press(KeyCode::PageDown), false),
            Some(Action::ScrollDown(SCROLL_PAGE))
        );
        assert_eq!(map_key(press(KeyCode::PageUp), false), Some(Action::ScrollUp(SCROLL_PAGE)));
        assert_eq!(map_key(press(KeyCode::Down), true), Some(Action::MoveDown));
    }

    #[test]
    fn scrolling_is_clamped_to_the_screen() {
        let mut app = App::new(&Config::default());
        app.view.section = Section::Projects;
        for _ in 0..5 {
            handle_event(&mut app, AppEvent::Key(press(KeyCode::PageDown)), screen());
        }
        let limit = max_scroll(screen(), Section::Projects);
        assert_eq!(app.view.scroll, limit);

        // One step up is visible immediately, not after undoing the overshoot.
        handle_event(&mut app, AppEvent::Key(press(KeyCode::Up)), screen());
        assert_eq!(app.view.scroll, limit - 1);
    }

    #[test]
    fn input_closed_ends_the_session() {
        let mut app = App::new(&Config::default());
        handle_event(&mut app, AppEvent::InputClosed, screen());
        assert!(app.should_quit);
    }

    #[test]
    fn ticks_do_not_quit() {
        let mut app = App::new(&Config::default());
        handle_event(&mut app, AppEvent::Tick(Tick::Blink), screen());
        handle_event(&mut app, AppEvent::Tick(Tick::Reveal), screen());
        assert!(!app.should_quit);
        assert_eq!(app.revealer.revealed(), 1);
    }

    /// Never produces input.
    struct Idle;

    impl EventSource for Idle {
        fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
            thread::sleep(timeout);
            Ok(None)
        }
    }

    #[test]
    fn reveal_timer_is_disposed_once_text_is_complete() {
        let config = Config::default();
        let mut app = App::new(&config);
        let (tx, _rx) = mpsc::channel();
        let mut subscriptions = Subscriptions::acquire_with(Idle, &config, &app, &tx);
        assert!(subscriptions.reveal.is_some());

        for _ in 1..app.revealer.total() {
            handle_tick(&mut app, Tick::Reveal);
        }
        subscriptions.settle(&app);
        assert!(subscriptions.reveal.is_some(), "one char still to type");

        handle_tick(&mut app, Tick::Reveal);
        subscriptions.settle(&app);
        assert!(subscriptions.reveal.is_none());
    }

    #[test]
    fn no_reveal_timer_without_animation() {
        let config = Config {
            animate: false,
            ..Config::default()
        };
        let app = App::new(&config);
        assert!(!reveal_timer_needed(&app));
        let (tx, _rx) = mpsc::channel();
        let subscriptions = Subscriptions::acquire_with(Idle, &config, &app, &tx);
        assert!(subscriptions.reveal.is_none());
    }

    static FAILED_SETUP_RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_failed_setup_restore() -> io::Result<()> {
        FAILED_SETUP_RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn failed_setup_still_restores() {
        let result = enter_guarded(
            || -> io::Result<()> { Err(io::Error::other("alternate screen refused")) },
            count_failed_setup_restore,
        );
        assert!(result.is_err());
        assert_eq!(FAILED_SETUP_RESTORES.load(Ordering::SeqCst), 1);
    }

    static SESSION_RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_session_restore() -> io::Result<()> {
        SESSION_RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn successful_setup_restores_on_drop_only() {
        let (guard, value) = enter_guarded(|| Ok(7), count_session_restore).unwrap();
        assert_eq!(value, 7);
        assert_eq!(SESSION_RESTORES.load(Ordering::SeqCst), 0);
        drop(guard);
        assert_eq!(SESSION_RESTORES.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dispatch_quit_sets_flag() {
        let mut app = App::new(&Config::default());
        dispatch(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }
}
