//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (loading spinner, press tint): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or a
//!   background action (the fetch completing).
//!
//! ## Fetch
//!
//! `Action::Mount` is dispatched once before the loop starts. The fetch runs
//! on a tokio task and reports back through a std channel as an `Action`.
//! Nothing cancels it: quitting first just drops the receiver.
//!
//! ## Press Feedback
//!
//! Activating a row tints it for `PRESS_FEEDBACK`. The navigation it asks
//! for is held in `TuiState::pending_routes` until the tint window closes,
//! so the tinted row is drawn before the detail pane covers the list.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{ChapterSource, EquranClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{Route, RouteStack};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::ChapterListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub chapter_list: ChapterListState,
    /// Shared with the `App`'s navigator; non-empty means a detail pane is up.
    pub router: RouteStack,
    /// Navigations waiting for the press tint to finish.
    pub pending_routes: Vec<Route>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::with_router(RouteStack::new())
    }

    pub fn with_router(router: RouteStack) -> Self {
        Self {
            chapter_list: ChapterListState::new(),
            router,
            pending_routes: Vec::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the chapter source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn ChapterSource> {
    Arc::new(EquranClient::new(config.base_url.clone(), config.timeout))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let router = RouteStack::new();
    let mut app = App::from_config(build_source(&config), Arc::new(router.clone()), &config);
    let mut tui = TuiState::with_router(router);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let effect = update(&mut app, Action::Mount);
    let mut should_quit = apply_effect(&app, effect, &tx);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    while !should_quit {
        let now = Instant::now();
        if release_navigation(&app, &mut tui, now) {
            needs_redraw = true;
        }
        let animating = app.is_loading() || tui.chapter_list.is_animating(now);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame, now))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = dispatch_event(&event, &app, &mut tui) {
                let effect = defer_navigation(update(&mut app, action), &mut tui, Instant::now());
                if apply_effect(&app, effect, &tx) {
                    should_quit = true;
                    break;
                }
            }
        }

        // Handle background task actions (fetch completion)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(&app, effect, &tx) {
                should_quit = true;
            }
        }
    }

    ratatui::restore();
    info!("Terminal restored, exiting");
    Ok(())
}

/// Translate a terminal event into a core action, handling the parts that
/// only concern presentation (detail pane, press tint) on the way.
fn dispatch_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    // Detail pane: only back and quit
    if tui.router.current().is_some() {
        if matches!(event, TuiEvent::Escape) {
            tui.router.back();
        }
        return None;
    }

    let len = app.chapters().len();
    match event {
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::MouseMove(col, row) => {
            Some(Action::Hover(tui.chapter_list.row_at(*col, *row, len)))
        }
        TuiEvent::MouseClick(col, row) => {
            let idx = tui.chapter_list.row_at(*col, *row, len)?;
            tui.chapter_list.press(idx, Instant::now());
            Some(Action::Activate(idx))
        }
        TuiEvent::Submit => {
            if let Some(idx) = app.selected.filter(|idx| *idx < len) {
                tui.chapter_list.press(idx, Instant::now());
            }
            tui.chapter_list.handle_event(event)
        }
        _ => tui.chapter_list.handle_event(event),
    }
}

/// Perform the I/O an effect asks for. Returns true when the loop should stop.
fn apply_effect(app: &App, effect: Effect, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::FetchChapters => {
            spawn_fetch(app, tx.clone());
            false
        }
        Effect::Navigate(route) => {
            app.navigate(route);
            false
        }
    }
}

/// Hold a navigation back while a row is still tinted.
fn defer_navigation(effect: Effect, tui: &mut TuiState, now: Instant) -> Effect {
    match effect {
        Effect::Navigate(route) if tui.chapter_list.is_animating(now) => {
            debug!("Holding navigation to {} until the press tint clears", route.path());
            tui.pending_routes.push(route);
            Effect::None
        }
        other => other,
    }
}

/// Push held navigations once the tint has cleared. Returns true if any were pushed.
fn release_navigation(app: &App, tui: &mut TuiState, now: Instant) -> bool {
    if tui.pending_routes.is_empty() || tui.chapter_list.is_animating(now) {
        return false;
    }
    for route in tui.pending_routes.drain(..) {
        app.navigate(route);
    }
    true
}

/// Run one fetch and turn its outcome into the action that ends loading.
pub async fn fetch_action(source: Arc<dyn ChapterSource>) -> Action {
    match source.fetch_chapters().await {
        Ok(chapters) => Action::ChaptersLoaded(chapters),
        Err(e) => Action::LoadFailed(e.to_string()),
    }
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning chapter list request via {}", app.source.name());
    let source = app.source.clone();
    tokio::spawn(async move {
        let action = fetch_action(source).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver chapter list: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchError;
    use crate::core::navigation::{Navigator, Route};
    use crate::test_support::{RecordingNavigator, StaticSource, chapter, loaded_app};
    use crate::tui::components::chapter_list::PRESS_FEEDBACK;
    use crate::tui::components::chapter_row::PRESS_TINT;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn tinted_cells(terminal: &Terminal<TestBackend>) -> usize {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.bg == PRESS_TINT)
            .count()
    }

    #[tokio::test]
    async fn test_fetch_action_success() {
        let source = Arc::new(StaticSource::ok(vec![chapter(1, "Al-Fatihah")]));
        let action = fetch_action(source).await;
        assert_eq!(action, Action::ChaptersLoaded(vec![chapter(1, "Al-Fatihah")]));
    }

    #[test]
    fn test_fetch_action_failure() {
        let source = Arc::new(StaticSource::err(FetchError::MissingData));
        let action = tokio_test::block_on(fetch_action(source));
        assert_eq!(action, Action::LoadFailed("response has no data field".into()));
    }

    #[tokio::test]
    async fn test_spawn_fetch_delivers_through_channel() {
        let app = App::new(
            Arc::new(StaticSource::ok(vec![chapter(1, "Al-Fatihah")])),
            Arc::new(RecordingNavigator::default()),
        );
        let (tx, rx) = mpsc::channel();
        assert!(!apply_effect(&app, Effect::FetchChapters, &tx));

        let action = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(action, Action::ChaptersLoaded(ref c) if c.len() == 1));
    }

    #[test]
    fn test_navigate_effect_reaches_navigator() {
        let navigator = Arc::new(RecordingNavigator::default());
        let mut app = App::new(Arc::new(StaticSource::ok(vec![])), navigator.clone());
        update(&mut app, Action::Mount);
        update(&mut app, Action::ChaptersLoaded(vec![chapter(1, "a"), chapter(2, "b")]));

        let (tx, _rx) = mpsc::channel();
        let effect = update(&mut app, Action::Activate(1));
        assert!(!apply_effect(&app, effect, &tx));
        assert_eq!(
            navigator.recorded(),
            vec![Route::ChapterDetail {
                nomor: "2".into()
            }]
        );
    }

    #[test]
    fn test_click_on_row_activates_and_tints() {
        let app = loaded_app(vec![chapter(1, "a"), chapter(2, "b")]);
        let mut tui = TuiState::new();
        tui.chapter_list.area = ratatui::layout::Rect::new(0, 1, 40, 9);

        let action = dispatch_event(&TuiEvent::MouseClick(3, 4), &app, &mut tui);
        assert_eq!(action, Some(Action::Activate(1)));
        assert_eq!(tui.chapter_list.pressed_index(Instant::now()), Some(1));

        // Header row is outside the list
        assert_eq!(dispatch_event(&TuiEvent::MouseClick(3, 0), &app, &mut tui), None);
    }

    #[test]
    fn test_escape_pops_detail_before_quitting() {
        let app = loaded_app(vec![chapter(1, "a")]);
        let mut tui = TuiState::new();
        tui.router.navigate(Route::ChapterDetail {
            nomor: "1".into(),
        });

        assert_eq!(dispatch_event(&TuiEvent::Escape, &app, &mut tui), None);
        assert_eq!(tui.router.current(), None);
        assert_eq!(dispatch_event(&TuiEvent::Escape, &app, &mut tui), Some(Action::Quit));
    }

    #[test]
    fn test_detail_pane_swallows_list_keys() {
        let app = loaded_app(vec![chapter(1, "a")]);
        let mut tui = TuiState::new();
        tui.router.navigate(Route::ChapterDetail {
            nomor: "1".into(),
        });
        assert_eq!(dispatch_event(&TuiEvent::Submit, &app, &mut tui), None);
        assert_eq!(dispatch_event(&TuiEvent::Quit, &app, &mut tui), Some(Action::Quit));
    }

    #[test]
    fn test_click_tint_is_drawn_before_detail_opens() {
        let router = RouteStack::new();
        let mut app = App::new(Arc::new(StaticSource::ok(vec![])), Arc::new(router.clone()));
        update(&mut app, Action::Mount);
        update(&mut app, Action::ChaptersLoaded(vec![chapter(1, "a"), chapter(2, "b")]));
        let mut tui = TuiState::with_router(router);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let (tx, _rx) = mpsc::channel();

        // First frame records the list layout for hit testing
        terminal
            .draw(|f| ui::draw_ui(f, &app, &mut tui, 0, Instant::now()))
            .unwrap();

        let action = dispatch_event(&TuiEvent::MouseClick(3, 4), &app, &mut tui).unwrap();
        let now = Instant::now();
        let effect = defer_navigation(update(&mut app, action), &mut tui, now);
        assert!(!apply_effect(&app, effect, &tx));
        assert!(!release_navigation(&app, &mut tui, now));

        terminal
            .draw(|f| ui::draw_ui(f, &app, &mut tui, 0, now))
            .unwrap();
        assert!(tinted_cells(&terminal) > 0);
        assert_eq!(tui.router.depth(), 0);

        // Tint window over: the detail pane opens
        let later = now + PRESS_FEEDBACK;
        assert!(release_navigation(&app, &mut tui, later));
        assert_eq!(
            tui.router.current(),
            Some(Route::ChapterDetail {
                nomor: "2".into()
            })
        );
        terminal
            .draw(|f| ui::draw_ui(f, &app, &mut tui, 0, later))
            .unwrap();
        assert_eq!(tinted_cells(&terminal), 0);
    }

    #[test]
    fn test_enter_tint_holds_navigation() {
        let router = RouteStack::new();
        let mut app = App::new(Arc::new(StaticSource::ok(vec![])), Arc::new(router.clone()));
        update(&mut app, Action::Mount);
        update(&mut app, Action::ChaptersLoaded(vec![chapter(1, "a")]));
        let mut tui = TuiState::with_router(router);

        let action = dispatch_event(&TuiEvent::Submit, &app, &mut tui).unwrap();
        let now = Instant::now();
        let effect = defer_navigation(update(&mut app, action), &mut tui, now);
        assert_eq!(effect, Effect::None);
        assert_eq!(tui.pending_routes.len(), 1);
        assert_eq!(tui.router.depth(), 0);

        assert!(release_navigation(&app, &mut tui, now + PRESS_FEEDBACK));
        assert_eq!(tui.router.depth(), 1);
        assert!(tui.pending_routes.is_empty());
    }

    #[test]
    fn test_navigation_without_press_is_not_held() {
        let mut tui = TuiState::new();
        let route = Route::ChapterDetail {
            nomor: "3".into(),
        };
        let effect = defer_navigation(Effect::Navigate(route.clone()), &mut tui, Instant::now());
        assert_eq!(effect, Effect::Navigate(route));
        assert!(tui.pending_routes.is_empty());
    }
}
