use super::*;

fn keywords() -> KeywordSets {
    KeywordSets::default()
}

#[test]
fn test_derive_title_prefers_proper_nouns_then_technical() {
    let title = derive_title("Login API is broken for the Acme account", &keywords());
    assert_eq!(title, "Acme Login");
}

#[test]
fn test_derive_title_falls_back_to_raw_text() {
    let title = derive_title("hmm ok thanks", &keywords());
    assert_eq!(title, "Hmm ok thanks");
}

#[test]
fn test_derive_title_empty_input() {
    assert_eq!(derive_title("", &keywords()), "");
    assert_eq!(derive_title("   ", &keywords()), "   ");
}

#[test]
fn test_derive_title_raw_text_is_truncated_to_60_chars() {
    let text = "ok ".repeat(40);
    let title = derive_title(&text, &keywords());
    assert_eq!(title.chars().count(), 60);
    assert!(title.starts_with("Ok ok"));
}

#[test]
fn test_derive_title_uses_filtered_words_without_keywords() {
    let title = derive_title("the dashboard widget looks strange after refreshing", &keywords());
    assert_eq!(title, "Dashboard widget strange");
}

#[test]
fn test_derive_title_orders_business_before_technical() {
    let title = derive_title("the invoice endpoint returns a timeout for billing", &keywords());
    assert_eq!(title, "Invoice billing endpoint timeout");
}

#[test]
fn test_derive_title_caps_keywords_at_four() {
    let title = derive_title(
        "we saw Globex and Initech hit Umbrella with a Wayne outage during deploy",
        &keywords(),
    );
    assert_eq!(title, "Globex Initech Umbrella Wayne");
}

#[test]
fn test_derive_title_deduplicates_exact_matches_only() {
    let title = derive_title("deploy failed, deploy again, Deploy now", &keywords());
    // "Deploy" is a proper noun candidate and "deploy" a technical keyword.
    assert_eq!(title, "Deploy deploy");
}

#[test]
fn test_derive_title_strips_punctuation() {
    let title = derive_title("is the Acme-Corp server down?!", &keywords());
    assert_eq!(title, "AcmeCorp server");
}

#[test]
fn test_derive_title_only_uppercases_first_char() {
    let title = derive_title("getting webhook errors from stripe", &keywords());
    assert_eq!(title, "Webhook errors");
}

#[test]
fn test_derive_title_is_deterministic() {
    let text = "Procurement portal for Contoso times out on invoice upload";
    let first = derive_title(text, &keywords());
    let second = derive_title(text, &keywords());
    assert_eq!(first, second);
    assert_eq!(first, "Contoso Procurement invoice upload");
}

#[test]
fn test_derive_title_with_injected_vocabulary() {
    let sets = KeywordSets::new(&["the", "is"], &["^widget"], &["^acme"]).unwrap();
    let title = derive_title("the widget is acme related", &sets);
    assert_eq!(title, "Acme widget");
}

#[test]
fn test_title_for_group_prefers_precomputed_title() {
    let messages = vec![
        Message::new("1", "g1", "Login API is broken for the Acme account"),
        Message::new("2", "g1", "any update?").with_group_title("SSO outage"),
    ];
    let title = title_for_group(&messages, &keywords()).unwrap();
    assert_eq!(title, "SSO outage");
}

#[test]
fn test_title_for_group_ignores_blank_precomputed_title() {
    let messages = vec![Message::new("1", "g1", "hmm ok thanks").with_group_title("  ")];
    let title = title_for_group(&messages, &keywords()).unwrap();
    assert_eq!(title, "Hmm ok thanks");
}

#[test]
fn test_title_for_group_reports_empty_title() {
    let messages = vec![Message::new("1", "g1", "")];
    let err = title_for_group(&messages, &keywords()).unwrap_err();
    assert_eq!(err, IssueError::EmptyDerivedTitle);

    let err = title_for_group(&[], &keywords()).unwrap_err();
    assert_eq!(err, IssueError::EmptyDerivedTitle);
}
