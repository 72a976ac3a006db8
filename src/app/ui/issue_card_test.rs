use chrono::TimeZone;
use unicode_width::UnicodeWidthStr;

use super::*;

fn view() -> IssueView {
    IssueView {
        group_id: "g1f00ba4-6c1e-4b7e".to_string(),
        title: "Acme Login".to_string(),
        messages: vec![
            Message::new("m1", "g1f00ba4-6c1e-4b7e", "Acme login API returns 500 since deploy")
                .with_username("ana")
                .with_channel("support")
                .with_kind("issue")
                .with_ts("2024-05-01T10:00:00Z"),
            Message::new("m2", "g1f00ba4-6c1e-4b7e", "Still failing for the Acme tenant after rollback")
                .with_kind("question")
                .with_ts("2024-05-01T11:00:00Z"),
        ],
        last_update: Some(chrono::Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap()),
        latest_type: "question".to_string(),
    }
}

fn text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_collapsed_card() {
    let view = view();
    let lines = IssueCard::new(&view, 60, "%Y-%m-%d").as_lines();

    assert_eq!(lines.len(), 4);
    assert!(text(&lines[0]).starts_with("╭─ Acme Login "));
    assert!(text(&lines[0]).ends_with(" question ─╮"));
    assert!(text(&lines[1]).contains("Still failing for the Acme tenant"));
    assert!(text(&lines[2]).contains("2 messages · updated "));
    assert!(text(&lines[2]).contains("#g1f00ba4"));
    assert!(!text(&lines[2]).contains("g1f00ba4-"));
    assert!(text(&lines[3]).starts_with("╰"));

    for line in &lines {
        assert_eq!(text(line).width(), 60, "{:?}", text(line));
    }
}

#[test]
fn test_expanded_card() {
    let view = view();
    let lines = IssueCard::new(&view, 60, "%Y-%m-%d")
        .with_expanded(true)
        .as_lines();
    let all = lines.iter().map(text).collect::<Vec<_>>();

    assert!(all.iter().any(|l| l.contains("Latest Update")));
    assert!(all.iter().any(|l| l.contains("All Messages (2)")));
    assert!(all.iter().any(|l| l.contains("ana · ") && l.contains("#support")));
    assert!(all.iter().any(|l| l.contains("unknown · ")));
    assert!(all.iter().any(|l| l.contains("Acme login API returns 500")));
    assert!(lines.len() > 4);

    for line in &all {
        assert_eq!(line.width(), 60, "{:?}", line);
    }
}

#[test]
fn test_selected_card_marker() {
    let view = view();
    let lines = IssueCard::new(&view, 40, "%Y-%m-%d")
        .with_selected(true)
        .as_lines();

    assert!(text(&lines[0]).starts_with("╭─ ▸ Acme Login"));
    assert_eq!(lines[0].spans[0].style.fg, Some(Color::LightBlue));
}

#[test]
fn test_long_title_is_truncated() {
    let mut view = view();
    view.title = "A very long derived title that cannot possibly fit".to_string();
    view.latest_type = String::new();
    let lines = IssueCard::new(&view, 30, "%Y-%m-%d").as_lines();

    assert!(text(&lines[0]).contains('…'));
    assert_eq!(text(&lines[0]).width(), 30);
}

#[test]
fn test_missing_timestamp() {
    let mut view = view();
    view.last_update = None;
    let lines = IssueCard::new(&view, 60, "%Y-%m-%d").as_lines();

    assert!(text(&lines[2]).starts_with("│ 2 messages · #g1f00ba4"));
    assert!(!text(&lines[2]).contains("updated"));
}
