//! # ChapterList Component
//!
//! Scrollable, clickable list of chapter rows.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChapterListState` lives in `TuiState` (scroll offset, last layout,
//!   press tint)
//! - `ChapterList` is created each frame with borrowed state and the
//!   chapters as props
//!
//! The selected row comes from the core `App`; this component only mirrors
//! it into ratatui's `ListState` so the viewport follows the cursor.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{List, ListState};

use crate::core::action::Action;
use crate::core::chapter::Chapter;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::chapter_row::{ROW_HEIGHT, RowLook, row_item};
use crate::tui::event::TuiEvent;

/// How long a pressed row stays tinted.
pub const PRESS_FEEDBACK: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
pub struct PressedRow {
    pub index: usize,
    pub at: Instant,
}

/// Layout and scroll state for the chapter list.
/// Must be persisted in the parent TuiState.
pub struct ChapterListState {
    pub list_state: ListState,
    /// Area the list was last drawn into (for hit testing)
    pub area: Rect,
    /// Rows that fit in the viewport (for paging)
    pub page_rows: usize,
    pub pressed: Option<PressedRow>,
}

impl Default for ChapterListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChapterListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            area: Rect::default(),
            page_rows: 1,
            pressed: None,
        }
    }

    pub fn press(&mut self, index: usize, now: Instant) {
        self.pressed = Some(PressedRow { index, at: now });
    }

    /// The row still inside its tint window, if any.
    pub fn pressed_index(&self, now: Instant) -> Option<usize> {
        self.pressed
            .filter(|p| now.saturating_duration_since(p.at) < PRESS_FEEDBACK)
            .map(|p| p.index)
    }

    /// Whether a tint is still showing (the loop keeps redrawing until it clears).
    pub fn is_animating(&self, now: Instant) -> bool {
        self.pressed_index(now).is_some()
    }

    /// Map a screen position to a row index, using the last drawn layout.
    pub fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let offset = self.list_state.offset();
        let index = offset + ((row - self.area.y) / ROW_HEIGHT) as usize;
        (index < len).then_some(index)
    }
}

impl EventHandler for ChapterListState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => Some(Action::SelectPrevious),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => Some(Action::SelectNext),
            TuiEvent::PageUp => Some(Action::PageUp(self.page_rows)),
            TuiEvent::PageDown => Some(Action::PageDown(self.page_rows)),
            TuiEvent::Home => Some(Action::SelectFirst),
            TuiEvent::End => Some(Action::SelectLast),
            TuiEvent::Submit => Some(Action::ActivateSelected),
            _ => None,
        }
    }
}

/// Transient render wrapper for the chapter list.
pub struct ChapterList<'a> {
    state: &'a mut ChapterListState,
    chapters: &'a [Chapter],
    selected: Option<usize>,
    now: Instant,
}

impl<'a> ChapterList<'a> {
    pub fn new(
        state: &'a mut ChapterListState,
        chapters: &'a [Chapter],
        selected: Option<usize>,
        now: Instant,
    ) -> Self {
        Self {
            state,
            chapters,
            selected,
            now,
        }
    }
}

impl Component for ChapterList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;
        self.state.page_rows = ((area.height / ROW_HEIGHT) as usize).max(1);

        let pressed = self.state.pressed_index(self.now);
        let items: Vec<_> = self
            .chapters
            .iter()
            .enumerate()
            .map(|(i, chapter)| {
                let look = if pressed == Some(i) {
                    RowLook::Pressed
                } else if self.selected == Some(i) {
                    RowLook::Selected
                } else {
                    RowLook::Normal
                };
                row_item(chapter, area.width, look)
            })
            .collect();

        self.state.list_state.select(self.selected);
        frame.render_stateful_widget(List::new(items), area, &mut self.state.list_state);
    }
}
