//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ChapterSource, FetchError};
use crate::core::action::{Action, update};
use crate::core::chapter::{Chapter, RevelationPlace};
use crate::core::navigation::{Navigator, Route};
use crate::core::state::App;

/// A source that returns a canned result without touching the network.
pub struct StaticSource {
    result: Result<Vec<Chapter>, FetchError>,
}

impl StaticSource {
    pub fn ok(chapters: Vec<Chapter>) -> Self {
        Self {
            result: Ok(chapters),
        }
    }

    pub fn err(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ChapterSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_chapters(&self) -> Result<Vec<Chapter>, FetchError> {
        self.result.clone()
    }
}

/// Navigator that remembers every route it was given.
#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn recorded(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// A chapter revealed in Mekah with `number * 2` verses.
pub fn chapter(number: u32, latin_name: &str) -> Chapter {
    Chapter {
        number,
        arabic_name: format!("سورة {number}"),
        latin_name: latin_name.to_string(),
        verse_count: number * 2,
        revelation_place: RevelationPlace::Mekah,
    }
}

/// Creates a test App with an empty StaticSource and a RecordingNavigator.
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticSource::ok(vec![])),
        Arc::new(RecordingNavigator::default()),
    )
}

/// A mounted App that has already received `chapters`.
pub fn loaded_app(chapters: Vec<Chapter>) -> App {
    let mut app = test_app();
    update(&mut app, Action::Mount);
    update(&mut app, Action::ChaptersLoaded(chapters));
    app
}
