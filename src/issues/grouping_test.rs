use std::collections::HashSet;

use super::*;

fn msg(id: &str, group: &str, ts: Option<&str>) -> Message {
    let m = Message::new(id, group, format!("message {id}"));
    match ts {
        Some(ts) => m.with_ts(ts),
        None => m,
    }
}

fn ids(groups: &[IssueGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.group_id()).collect()
}

#[test]
fn test_group_by_group_id_partitions_messages() {
    let messages = vec![
        msg("1", "g1", None),
        msg("2", "g2", None),
        msg("3", "g1", None),
        msg("4", "g3", None),
        msg("5", "g2", None),
    ];

    let groups = group_by_group_id(&messages);
    assert_eq!(ids(&groups), vec!["g1", "g2", "g3"]);

    let total = groups.iter().map(|g| g.len()).sum::<usize>();
    assert_eq!(total, messages.len());

    let seen = groups
        .iter()
        .flat_map(|g| g.messages().iter().map(|m| m.id()))
        .collect::<HashSet<_>>();
    assert_eq!(seen.len(), messages.len());

    for group in &groups {
        assert!(group.messages().iter().all(|m| m.group_id() == group.group_id()));
    }
}

#[test]
fn test_group_by_group_id_keeps_arrival_order() {
    let messages = vec![
        msg("b", "g1", Some("2024-01-01T12:00:00Z")),
        msg("a", "g1", Some("2024-01-01T10:00:00Z")),
        msg("c", "g1", None),
    ];

    let groups = group_by_group_id(&messages);
    let order = groups[0].messages().iter().map(|m| m.id()).collect::<Vec<_>>();
    assert_eq!(order, vec!["b", "a", "c"]);
}

#[test]
fn test_group_by_group_id_keeps_duplicate_ids() {
    let messages = vec![msg("1", "g1", None), msg("1", "g1", None)];
    let groups = group_by_group_id(&messages);
    assert_eq!(groups[0].len(), 2);
}

#[test]
fn test_group_by_group_id_empty() {
    assert!(group_by_group_id(&[]).is_empty());
}

#[test]
fn test_order_groups_by_latest_message() {
    let messages = vec![
        msg("1", "g1", Some("2024-01-01T10:00:00Z")),
        msg("2", "g2", Some("2024-01-01T11:00:00Z")),
        msg("3", "g1", Some("2024-01-01T12:00:00Z")),
    ];

    let groups = order_groups(group_by_group_id(&messages));
    assert_eq!(ids(&groups), vec!["g1", "g2"]);
}

#[test]
fn test_order_groups_uses_last_arrived_not_newest() {
    // g1's newest message arrived first; its last arrival is older than g2.
    let messages = vec![
        msg("1", "g1", Some("2024-01-01T12:00:00Z")),
        msg("2", "g2", Some("2024-01-01T11:00:00Z")),
        msg("3", "g1", Some("2024-01-01T10:00:00Z")),
    ];

    let groups = order_groups(group_by_group_id(&messages));
    assert_eq!(ids(&groups), vec!["g2", "g1"]);
}

#[test]
fn test_order_groups_missing_timestamp_sorts_last() {
    let messages = vec![
        msg("1", "g1", Some("2024-01-01T10:00:00Z")),
        msg("2", "g2", Some("2024-01-01T09:00:00Z")),
        msg("3", "g1", None),
    ];

    let groups = order_groups(group_by_group_id(&messages));
    assert_eq!(ids(&groups), vec!["g2", "g1"]);
    assert_eq!(groups[1].sort_key(), DateTime::<Utc>::MIN_UTC);
}

#[test]
fn test_order_groups_missing_timestamp_below_pre_epoch() {
    let messages = vec![
        msg("1", "none", None),
        msg("2", "old", Some("1960-01-01T00:00:00Z")),
        msg("3", "bad", Some("not a date")),
    ];

    let groups = order_groups(group_by_group_id(&messages));
    assert_eq!(ids(&groups), vec!["old", "none", "bad"]);
}

#[test]
fn test_order_groups_earlier_missing_timestamp_is_ignored() {
    let messages = vec![
        msg("1", "g1", None),
        msg("2", "g2", Some("2024-01-01T09:00:00Z")),
        msg("3", "g1", Some("2024-01-01T10:00:00Z")),
    ];

    let groups = order_groups(group_by_group_id(&messages));
    assert_eq!(ids(&groups), vec!["g1", "g2"]);
    assert_eq!(
        groups[0].last_update().unwrap(),
        parse_timestamp(Some("2024-01-01T10:00:00Z")).unwrap()
    );
}

#[test]
fn test_order_groups_ties_keep_first_seen_order() {
    let messages = vec![
        msg("1", "g3", None),
        msg("2", "g1", Some("garbage")),
        msg("3", "g2", None),
    ];

    let groups = order_groups(group_by_group_id(&messages));
    assert_eq!(ids(&groups), vec!["g3", "g1", "g2"]);
}

#[test]
fn test_order_groups_is_deterministic() {
    let messages = vec![
        msg("1", "g1", Some("2024-01-01T10:00:00Z")),
        msg("2", "g2", None),
        msg("3", "g3", Some("2024-01-01T10:00:00Z")),
        msg("4", "g4", Some("2024-01-02T10:00:00Z")),
    ];

    let first = order_groups(group_by_group_id(&messages));
    let second = order_groups(group_by_group_id(&messages));
    assert_eq!(first, second);
    assert_eq!(ids(&first), vec!["g4", "g1", "g3", "g2"]);
}

#[test]
fn test_parse_timestamp_formats() {
    let want = parse_timestamp(Some("2024-01-01T10:00:00Z")).unwrap();

    assert_eq!(parse_timestamp(Some("2024-01-01T10:00:00+00:00")).unwrap(), want);
    assert_eq!(parse_timestamp(Some("2024-01-01T12:00:00+02:00")).unwrap(), want);
    assert_eq!(parse_timestamp(Some("2024-01-01 10:00:00+00")).unwrap(), want);
    assert_eq!(parse_timestamp(Some("2024-01-01T10:00:00")).unwrap(), want);
    assert_eq!(parse_timestamp(Some("2024-01-01T10:00:00.000000")).unwrap(), want);
    assert_eq!(parse_timestamp(Some("2024-01-01 10:00")).unwrap(), want);
    assert_eq!(
        parse_timestamp(Some("2024-01-01")).unwrap(),
        parse_timestamp(Some("2024-01-01T00:00:00Z")).unwrap()
    );
}

#[test]
fn test_parse_timestamp_malformed() {
    assert_eq!(
        parse_timestamp(None),
        Err(IssueError::MalformedTimestamp(None))
    );
    assert_eq!(
        parse_timestamp(Some("  ")),
        Err(IssueError::MalformedTimestamp(None))
    );
    assert_eq!(
        parse_timestamp(Some("yesterday")),
        Err(IssueError::MalformedTimestamp(Some("yesterday".to_string())))
    );
}
