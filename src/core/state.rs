//! # Application State
//!
//! Core state for the chapter list screen. No terminal types live here;
//! presentation state (scroll offsets, press tint timers) is in `tui`.
//!
//! ```text
//! App
//! ├── source: Arc<dyn ChapterSource>   // where the list comes from
//! ├── navigator: Arc<dyn Navigator>    // where a selection goes
//! ├── screen: ScreenState              // Loading | Loaded | Failed
//! ├── selected: Option<usize>          // cursor row
//! ├── mounted: bool                    // fetch already issued
//! └── show_load_errors: bool           // footer on Failed
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use log::info;

use crate::api::ChapterSource;
use crate::core::chapter::Chapter;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{Navigator, Route};

/// Lifecycle of the list. Starts in `Loading` and leaves it exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Loading,
    Loaded(Vec<Chapter>),
    /// Load failed. Displayed as an empty list.
    Failed { reason: String },
}

pub struct App {
    pub source: Arc<dyn ChapterSource>,
    pub navigator: Arc<dyn Navigator>,
    pub screen: ScreenState,
    pub selected: Option<usize>,
    pub mounted: bool,
    pub show_load_errors: bool,
}

impl App {
    pub fn new(source: Arc<dyn ChapterSource>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            source,
            navigator,
            screen: ScreenState::Loading,
            selected: None,
            mounted: false,
            show_load_errors: true,
        }
    }

    pub fn from_config(
        source: Arc<dyn ChapterSource>,
        navigator: Arc<dyn Navigator>,
        config: &ResolvedConfig,
    ) -> Self {
        Self {
            show_load_errors: config.show_load_errors,
            ..Self::new(source, navigator)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, ScreenState::Loading)
    }

    /// Rows to display. Empty while loading and after a failure.
    pub fn chapters(&self) -> &[Chapter] {
        match &self.screen {
            ScreenState::Loaded(chapters) => chapters,
            ScreenState::Loading | ScreenState::Failed { .. } => &[],
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.screen {
            ScreenState::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    pub fn selected_chapter(&self) -> Option<&Chapter> {
        self.selected.and_then(|idx| self.chapters().get(idx))
    }

    /// Look up a loaded chapter by its route parameter.
    pub fn chapter_for_route(&self, route: &Route) -> Option<&Chapter> {
        match route {
            Route::ChapterDetail { nomor } => {
                self.chapters().iter().find(|c| c.key() == *nomor)
            }
        }
    }

    /// Hand a route to the injected navigator.
    pub fn navigate(&self, route: Route) {
        info!("Selected chapter route: {:?}", route);
        self.navigator.navigate(route);
    }
}
