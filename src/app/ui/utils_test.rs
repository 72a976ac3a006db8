use chrono::TimeZone;
use ratatui::style::{Modifier, Style, Stylize};
use ratatui_macros::span;

use super::*;

#[test]
fn test_split_to_lines() {
    let text = "This is a test string that is too long to fit in a single line.";
    let max_width = 20;
    let lines = split_to_lines(text, max_width);

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].content(), "This is a test ");
    assert_eq!(lines[1].content(), "string that is too ");
    assert_eq!(lines[2].content(), "long to fit in a ");
    assert_eq!(lines[3].content(), "single line.");
}

#[test]
fn test_split_to_lines_keeps_styles() {
    let text = vec![span!("Latest: ").bold(), span!("login fails on staging")];
    let lines = split_to_lines(text, 14);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].content(), "Latest: login ");
    assert_eq!(lines[0].spans[0].style, bold);
    assert_eq!(lines[0].spans[2].style, Style::default());
    assert_eq!(lines[1].content(), "fails on ");
    assert_eq!(lines[2].content(), "staging");
}

#[test]
fn test_split_to_lines_long_word() {
    let lines = split_to_lines("supercalifragilistic", 5);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].content(), "supercalifragilistic");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    assert_eq!(truncate("Acme login API returns 500", 10), "Acme logi…");
    assert_eq!(truncate("line one\nline two", 20), "line one line two");
    assert_eq!(truncate("abc", 1), "…");
}

#[test]
fn test_format_time() {
    let time = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let expected = time.with_timezone(&Local).format("%Y-%m-%d").to_string();

    assert_eq!(format_time(Some(time), "%Y-%m-%d"), expected);
    assert_eq!(format_time(None, "%Y-%m-%d"), "");
}

#[test]
fn test_popup_area() {
    let area = Rect::new(0, 0, 100, 50);
    let popup = popup_area(area, 40, 30);

    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 15);
    assert_eq!(popup.x, 30);
}

#[test]
fn test_notice_area() {
    let area = Rect::new(0, 0, 100, 50);
    let notice = notice_area(area, 30);

    assert_eq!(notice.width, 30);
    assert_eq!(notice.x, 70);
    assert_eq!(notice.height, 50);
}

trait Content {
    fn content(&self) -> String;
}

impl Content for Line<'_> {
    fn content(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.content.to_string())
            .collect::<Vec<String>>()
            .join("")
    }
}
