//! # Chapter Detail Pane
//!
//! Stand-in for the chapter-detail screen: shows which route was pushed
//! and the header of the chapter it names. Verse text is not loaded here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::chapter::Chapter;
use crate::core::navigation::Route;
use crate::tui::component::Component;
use crate::tui::components::chapter_row::badge;
use crate::tui::components::header::{ACCENT, Header};

pub struct ChapterDetail<'a> {
    pub route: &'a Route,
    /// `None` if the route names a chapter that isn't in the loaded list.
    pub chapter: Option<&'a Chapter>,
}

impl<'a> ChapterDetail<'a> {
    pub fn new(route: &'a Route, chapter: Option<&'a Chapter>) -> Self {
        Self { route, chapter }
    }

    fn title(&self) -> String {
        match (self.chapter, self.route) {
            (Some(chapter), _) => chapter.latin_name.clone(),
            (None, Route::ChapterDetail { nomor }) => format!("Surah {nomor}"),
        }
    }

    fn body(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if let Some(chapter) = self.chapter {
            lines.push(Line::from(Span::styled(
                chapter.arabic_name.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                badge(chapter.number),
                Style::default().fg(ACCENT),
            )));
            lines.push(Line::from(chapter.subtitle()));
            lines.push(Line::from(""));
        }
        let params = self
            .route
            .params()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        lines.push(Line::from(Span::styled(
            format!("{}?{}", self.route.path(), params),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Component for ChapterDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::new(self.title()).render(frame, header_area);

        let [_, content] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(body_area);
        frame.render_widget(
            Paragraph::new(self.body()).alignment(Alignment::Center),
            content,
        );

        frame.render_widget(
            Paragraph::new(" Esc Back  q Quit ").style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}
