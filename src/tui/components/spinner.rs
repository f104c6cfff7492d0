//! # Spinner Component
//!
//! Indeterminate progress indicator shown alone while the list loads.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::header::ACCENT;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Spinner {
    frame_index: usize,
}

impl Spinner {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame_index % FRAMES.len()]
    }
}

impl Component for Spinner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [center] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let paragraph = Paragraph::new(self.glyph())
            .style(Style::default().fg(ACCENT))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, center);
    }
}
