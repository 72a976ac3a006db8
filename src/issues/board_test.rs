use super::*;
use crate::issues::parse_timestamp;

fn board() -> IssueBoard {
    IssueBoard::new(KeywordSets::default())
}

fn initial_messages() -> Vec<Message> {
    vec![
        Message::new("1", "g1", "Login API is broken for the Acme account")
            .with_ts("2024-01-01T10:00:00Z")
            .with_kind("bug"),
        Message::new("2", "g2", "hmm ok thanks")
            .with_ts("2024-01-01T11:00:00Z")
            .with_kind("question"),
    ]
}

#[test]
fn test_board_views_are_ordered_and_titled() {
    let mut board = board();
    board.load(initial_messages());

    let views = board.views();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].group_id, "g2");
    assert_eq!(views[0].title, "Hmm ok thanks");
    assert_eq!(views[0].latest_type, "question");
    assert_eq!(views[1].group_id, "g1");
    assert_eq!(views[1].title, "Acme Login");
    assert_eq!(
        views[1].last_update,
        Some(parse_timestamp(Some("2024-01-01T10:00:00Z")).unwrap())
    );
}

#[test]
fn test_board_live_message_joins_existing_group() {
    let mut board = board();
    board.load(initial_messages());
    assert_eq!(board.position("g1"), Some(1));

    let live = Message::new("3", "g1", "still failing for Acme")
        .with_ts("2024-01-01T12:00:00Z")
        .with_kind("support");
    assert!(board.push(live));

    let view = board.view("g1").unwrap();
    assert_eq!(view.len(), 2);
    assert_eq!(
        view.last_update,
        Some(parse_timestamp(Some("2024-01-01T12:00:00Z")).unwrap())
    );
    assert_eq!(view.latest_type, "support");
    // Title still comes from the first message of the group.
    assert_eq!(view.title, "Acme Login");
    assert_eq!(board.position("g1"), Some(0));
    assert_eq!(board.message_count(), 3);
}

#[test]
fn test_board_live_message_without_timestamp_sinks_group() {
    let mut board = board();
    board.load(initial_messages());
    board.push(Message::new("3", "g2", "one more thing"));

    let view = board.view("g2").unwrap();
    assert_eq!(view.last_update, None);
    assert_eq!(board.position("g2"), Some(1));
}

#[test]
fn test_board_keeps_redelivered_messages_by_default() {
    let mut board = board();
    board.load(initial_messages());
    assert!(board.push(initial_messages().remove(0)));
    assert_eq!(board.view("g1").unwrap().len(), 2);
}

#[test]
fn test_board_dedup_by_id() {
    let mut board = board().with_dedup_by_id(true);
    board.load(initial_messages());
    assert!(!board.push(initial_messages().remove(0)));
    assert_eq!(board.view("g1").unwrap().len(), 1);
    assert_eq!(board.message_count(), 2);
}

#[test]
fn test_board_fallback_title() {
    let mut board = board().with_fallback_title("Untitled");
    board.load(vec![Message::new("1", "g1", "")]);
    assert_eq!(board.views()[0].title, "Untitled");

    let mut board = self::board();
    board.load(vec![Message::new("1", "g1", "")]);
    assert_eq!(board.views()[0].title, FALLBACK_TITLE);
}

#[test]
fn test_board_empty() {
    let mut board = board();
    board.load(vec![]);
    assert!(board.is_empty());
    assert_eq!(board.message_count(), 0);
}

#[test]
fn test_issue_view_short_id() {
    let mut board = board();
    board.load(vec![
        Message::new("1", "3f2a9c1e-77aa-4bcd-9e10-1234567890ab", "hello"),
        Message::new("2", "g1", "hello"),
    ]);
    assert_eq!(board.views()[0].short_id(), "3f2a9c1e");
    assert_eq!(board.views()[1].short_id(), "g1");
}
