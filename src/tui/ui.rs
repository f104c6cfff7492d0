use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::header::LIST_TITLE;
use crate::tui::components::{ChapterDetail, ChapterList, Header, Spinner};

const HELP_TEXT: &str = " ↑↓ Move  Enter Open  q Quit ";

/// Split the list screen into header, list and footer.
fn list_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize, now: Instant) {
    let area = frame.area();

    // A pushed route covers the list until it is popped
    if let Some(route) = tui.router.current() {
        ChapterDetail::new(&route, app.chapter_for_route(&route)).render(frame, area);
        return;
    }

    // Loading shows the indicator and nothing else
    if app.is_loading() {
        Spinner::new(spinner_frame).render(frame, area);
        return;
    }

    let [header_area, list_area, footer_area] = list_layout(area);
    Header::new(LIST_TITLE).render(frame, header_area);
    ChapterList::new(&mut tui.chapter_list, app.chapters(), app.selected, now)
        .render(frame, list_area);

    let footer = match app.failure_reason() {
        Some(reason) if app.show_load_errors => Paragraph::new(format!(" Failed to load: {reason}"))
            .style(Style::default().fg(Color::Red)),
        _ => Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::chapter::{Chapter, RevelationPlace};
    use crate::core::navigation::{Navigator, Route};
    use crate::test_support::{chapter, loaded_app, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, 0, Instant::now()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn fatihah() -> Chapter {
        Chapter {
            number: 1,
            arabic_name: "الفاتحة".into(),
            latin_name: "Al-Fatihah".into(),
            verse_count: 7,
            revelation_place: RevelationPlace::Mekah,
        }
    }

    #[test]
    fn test_loading_shows_only_spinner() {
        let mut app = test_app();
        update(&mut app, Action::Mount);
        let mut tui = TuiState::new();
        let screen = render(&app, &mut tui, 40, 10);

        let visible: String = screen.concat().chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(visible, "⠋");
    }

    #[test]
    fn test_single_row_scenario() {
        let app = loaded_app(vec![fatihah()]);
        let mut tui = TuiState::new();
        let screen = render(&app, &mut tui, 40, 10);

        assert_eq!(screen[0].trim(), "Daftar Surah");
        assert!(screen[1].starts_with("(  1  ) Al-Fatihah"));
        assert!(screen[1].trim_end().ends_with("الفاتحة →"));
        assert_eq!(screen[2].trim(), "7 ayat • Mekkah");
        assert!(screen[9].contains("Enter Open"));
    }

    #[test]
    fn test_row_count_and_badges_match_data() {
        let chapters: Vec<_> = (1..=4).map(|n| chapter(n, &format!("Surah {n}"))).collect();
        let app = loaded_app(chapters);
        let mut tui = TuiState::new();
        let screen = render(&app, &mut tui, 40, 20);

        let subtitles = screen.iter().filter(|l| l.contains("ayat •")).count();
        assert_eq!(subtitles, 4);
        for n in 1..=4u32 {
            let row = &screen[1 + (n as usize - 1) * 3];
            assert!(row.starts_with(&format!("(  {n}  ) Surah {n}")), "row {n}: {row}");
        }
    }

    #[test]
    fn test_loaded_empty_shows_header() {
        let app = loaded_app(vec![]);
        let mut tui = TuiState::new();
        let screen = render(&app, &mut tui, 40, 6);
        assert_eq!(screen[0].trim(), "Daftar Surah");
        assert!(screen[1..5].iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_failed_shows_empty_list_and_reason() {
        let mut app = test_app();
        update(&mut app, Action::Mount);
        update(&mut app, Action::LoadFailed("response has no data field".into()));
        let mut tui = TuiState::new();
        let screen = render(&app, &mut tui, 60, 6);
        assert_eq!(screen[0].trim(), "Daftar Surah");
        assert!(screen[5].contains("Failed to load: response has no data field"));

        // Silent variant: looks exactly like an empty list
        app.show_load_errors = false;
        let screen = render(&app, &mut tui, 60, 6);
        assert!(!screen[5].contains("Failed"));
        assert!(screen[5].contains("Enter Open"));
    }

    #[test]
    fn test_pushed_route_renders_detail() {
        let app = loaded_app(vec![fatihah()]);
        let mut tui = TuiState::new();
        tui.router.navigate(Route::ChapterDetail {
            nomor: "1".into(),
        });
        let screen = render(&app, &mut tui, 40, 10);
        assert_eq!(screen[0].trim(), "Al-Fatihah");
        assert!(screen.iter().any(|l| l.contains("/(tabs)/equran?nomor=1")));

        tui.router.back();
        let screen = render(&app, &mut tui, 40, 10);
        assert_eq!(screen[0].trim(), "Daftar Surah");
    }
}
