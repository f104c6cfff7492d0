//! # Actions
//!
//! Everything that can happen on the chapter screen becomes an `Action`.
//! Screen appears? That's `Action::Mount`.
//! API responds? That's `Action::ChaptersLoaded(list)` or `Action::LoadFailed(reason)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::chapter::Chapter;
use crate::core::navigation::Route;
use crate::core::state::{App, ScreenState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The screen became visible. Issues the one fetch.
    Mount,
    ChaptersLoaded(Vec<Chapter>),
    LoadFailed(String),
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    /// Move down by the given number of rows.
    PageDown(usize),
    PageUp(usize),
    /// Pointer moved over a row (or off the list).
    Hover(Option<usize>),
    /// Row pressed (Enter or click).
    Activate(usize),
    /// Activate the selected row, if any.
    ActivateSelected,
    Quit,
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchChapters,
    Navigate(Route),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => {
            if app.mounted {
                debug!("Mount ignored: list already requested");
                return Effect::None;
            }
            app.mounted = true;
            app.screen = ScreenState::Loading;
            Effect::FetchChapters
        }
        Action::ChaptersLoaded(chapters) => {
            if !app.is_loading() {
                warn!("Ignoring late chapter list ({} rows)", chapters.len());
                return Effect::None;
            }
            info!("Chapter list loaded: {} rows", chapters.len());
            app.selected = if chapters.is_empty() { None } else { Some(0) };
            app.screen = ScreenState::Loaded(chapters);
            Effect::None
        }
        Action::LoadFailed(reason) => {
            if !app.is_loading() {
                warn!("Ignoring late load failure: {}", reason);
                return Effect::None;
            }
            warn!("Failed to fetch surah list: {}", reason);
            app.selected = None;
            app.screen = ScreenState::Failed { reason };
            Effect::None
        }
        Action::SelectNext => {
            move_selection(app, |idx, _| idx.saturating_add(1));
            Effect::None
        }
        Action::SelectPrevious => {
            move_selection(app, |idx, _| idx.saturating_sub(1));
            Effect::None
        }
        Action::SelectFirst => {
            move_selection(app, |_, _| 0);
            Effect::None
        }
        Action::SelectLast => {
            move_selection(app, |_, len| len - 1);
            Effect::None
        }
        Action::PageDown(rows) => {
            move_selection(app, |idx, _| idx.saturating_add(rows.max(1)));
            Effect::None
        }
        Action::PageUp(rows) => {
            move_selection(app, |idx, _| idx.saturating_sub(rows.max(1)));
            Effect::None
        }
        Action::Hover(Some(idx)) => {
            if idx < app.chapters().len() {
                app.selected = Some(idx);
            }
            Effect::None
        }
        Action::Hover(None) => Effect::None,
        Action::Activate(idx) => activate(app, idx),
        Action::ActivateSelected => match app.selected {
            Some(idx) => activate(app, idx),
            None => Effect::None,
        },
        Action::Quit => Effect::Quit,
    }
}

/// Apply `step(current, len)` to the cursor, clamped to the list.
fn move_selection(app: &mut App, step: impl Fn(usize, usize) -> usize) {
    let len = app.chapters().len();
    if len == 0 {
        app.selected = None;
        return;
    }
    let current = app.selected.unwrap_or(0);
    app.selected = Some(step(current, len).min(len - 1));
}

fn activate(app: &mut App, idx: usize) -> Effect {
    let Some(chapter) = app.chapters().get(idx) else {
        debug!("Activate ignored: no row {}", idx);
        return Effect::None;
    };
    let route = Route::ChapterDetail {
        nomor: chapter.key(),
    };
    app.selected = Some(idx);
    Effect::Navigate(route)
}
