//! # Header Component
//!
//! Static title bar above the chapter list. Stateless: the title is the
//! only prop, so the detail pane can reuse it with its own text.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const LIST_TITLE: &str = "Daftar Surah";

/// Accent used for the header, badges and the Arabic names.
pub const ACCENT: Color = Color::Rgb(0x10, 0xB9, 0x81);

pub struct Header {
    pub title: String,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .bg(ACCENT)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let paragraph = Paragraph::new(self.title.as_str())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
