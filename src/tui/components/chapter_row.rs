//! # Chapter Row
//!
//! One list entry, three terminal lines tall:
//!
//! ```text
//! (  1  ) Al-Fatihah                    الفاتحة →
//!         7 ayat • Mekkah
//! <blank spacer>
//! ```
//!
//! Left: ordinal badge. Center: Latin name over the subtitle. Right: Arabic
//! name and the affordance arrow, flush with the right edge.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_width::UnicodeWidthStr;

use crate::core::chapter::Chapter;
use crate::tui::components::header::ACCENT;

/// Terminal lines per row, spacer included.
pub const ROW_HEIGHT: u16 = 3;

const BADGE_WIDTH: usize = 7;
const ARROW: &str = "→";

/// Pressed-row tint.
pub const PRESS_TINT: Color = Color::Rgb(0xD1, 0xFA, 0xE5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLook {
    Normal,
    Selected,
    Pressed,
}

impl RowLook {
    fn base(self) -> Style {
        match self {
            RowLook::Normal => Style::default(),
            RowLook::Selected => Style::default().bg(Color::DarkGray),
            RowLook::Pressed => Style::default().bg(PRESS_TINT).fg(Color::Black),
        }
    }
}

/// The badge text, e.g. `(  1  )`, `( 114 )`.
pub fn badge(number: u32) -> String {
    format!("({:^5})", number)
}

/// Cut `s` to at most `max` display columns, marking the cut with `…`.
fn fit(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    for ch in s.chars() {
        let next = format!("{out}{ch}");
        if next.width() + 1 > max {
            break;
        }
        out = next;
    }
    out.push('…');
    out
}

pub fn row_lines(chapter: &Chapter, width: u16, look: RowLook) -> Vec<Line<'static>> {
    let width = width as usize;
    let base = look.base();
    let accent = if look == RowLook::Pressed {
        base.add_modifier(Modifier::BOLD)
    } else {
        base.fg(ACCENT).add_modifier(Modifier::BOLD)
    };

    let right = format!("{} {}", chapter.arabic_name, ARROW);
    let right_width = right.width();
    let name_room = width.saturating_sub(BADGE_WIDTH + 1 + right_width + 1);
    let name = fit(&chapter.latin_name, name_room);
    let gap = width.saturating_sub(BADGE_WIDTH + 1 + name.width() + right_width);

    let first = Line::from(vec![
        Span::styled(badge(chapter.number), accent),
        Span::styled(" ", base),
        Span::styled(name, base.add_modifier(Modifier::BOLD)),
        Span::styled(" ".repeat(gap), base),
        Span::styled(right, accent),
    ]);

    let subtitle = fit(&chapter.subtitle(), width.saturating_sub(BADGE_WIDTH + 1));
    let sub_pad = width.saturating_sub(BADGE_WIDTH + 1 + subtitle.width());
    let subtitle_style = if look == RowLook::Pressed {
        base
    } else {
        base.fg(Color::Gray)
    };
    let second = Line::from(vec![
        Span::styled(" ".repeat(BADGE_WIDTH + 1), base),
        Span::styled(subtitle, subtitle_style),
        Span::styled(" ".repeat(sub_pad), base),
    ]);

    vec![first, second, Line::from("")]
}

pub fn row_item(chapter: &Chapter, width: u16, look: RowLook) -> ListItem<'static> {
    ListItem::new(row_lines(chapter, width, look))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chapter::RevelationPlace;

    fn fatihah() -> Chapter {
        Chapter {
            number: 1,
            arabic_name: "الفاتحة".into(),
            latin_name: "Al-Fatihah".into(),
            verse_count: 7,
            revelation_place: RevelationPlace::Mekah,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_badge_widths() {
        assert_eq!(badge(1), "(  1  )");
        assert_eq!(badge(114), "( 114 )");
        assert_eq!(badge(1).width(), BADGE_WIDTH);
    }

    #[test]
    fn test_row_layout() {
        let lines = row_lines(&fatihah(), 40, RowLook::Normal);
        assert_eq!(lines.len(), ROW_HEIGHT as usize);

        let first = text(&lines[0]);
        assert!(first.starts_with("(  1  ) Al-Fatihah"));
        assert!(first.ends_with("الفاتحة →"));
        assert_eq!(first.width(), 40);

        let second = text(&lines[1]);
        assert_eq!(second.trim(), "7 ayat • Mekkah");
        assert!(second.starts_with("        7 ayat"));
    }

    #[test]
    fn test_narrow_row_truncates_latin_name() {
        let lines = row_lines(&fatihah(), 24, RowLook::Normal);
        let first = text(&lines[0]);
        assert!(first.contains('…'));
        assert!(first.ends_with("الفاتحة →"));
        assert!(first.width() <= 24);
    }

    #[test]
    fn test_pressed_row_is_tinted() {
        let lines = row_lines(&fatihah(), 40, RowLook::Pressed);
        assert!(lines[0].spans.iter().all(|s| s.style.bg == Some(PRESS_TINT)));

        let normal = row_lines(&fatihah(), 40, RowLook::Normal);
        assert!(normal[0].spans.iter().all(|s| s.style.bg.is_none()));
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 5), "abc");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abcdef", 0), "");
    }
}
