//! # Navigation
//!
//! The list screen never owns a router. It is handed a [`Navigator`] and
//! pushes [`Route`] values onto it; whoever built the `App` decides what a
//! push means (a terminal pane, a recorded call in tests).

use std::sync::{Arc, Mutex};

use log::{info, warn};

/// Path of the chapter-detail screen.
pub const CHAPTER_DETAIL_PATH: &str = "/(tabs)/equran";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Detail screen for one chapter. `nomor` is the ordinal as a string.
    ChapterDetail { nomor: String },
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::ChapterDetail { .. } => CHAPTER_DETAIL_PATH,
        }
    }

    /// Route parameters as `(name, value)` pairs.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Route::ChapterDetail { nomor } => vec![("nomor", nomor.as_str())],
        }
    }
}

/// Capability to move to another screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// In-process navigation history. Clones share the same stack, so the
/// terminal loop can read and pop what the `App` pushed.
#[derive(Clone, Default)]
pub struct RouteStack {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RouteStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The route on top of the stack, or `None` while on the list screen.
    pub fn current(&self) -> Option<Route> {
        match self.routes.lock() {
            Ok(routes) => routes.last().cloned(),
            Err(poisoned) => poisoned.into_inner().last().cloned(),
        }
    }

    /// Pop the top route. Returns false if already at the root.
    pub fn back(&self) -> bool {
        let mut routes = match self.routes.lock() {
            Ok(routes) => routes,
            Err(poisoned) => poisoned.into_inner(),
        };
        routes.pop().is_some()
    }

    pub fn depth(&self) -> usize {
        match self.routes.lock() {
            Ok(routes) => routes.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

impl Navigator for RouteStack {
    fn navigate(&self, route: Route) {
        info!("Navigating to {} {:?}", route.path(), route.params());
        match self.routes.lock() {
            Ok(mut routes) => routes.push(route),
            Err(poisoned) => {
                warn!("Route stack lock poisoned, recovering");
                poisoned.into_inner().push(route);
            }
        }
    }
}
