#[cfg(test)]
#[path = "title_test.rs"]
mod tests;

use crate::models::Message;

use super::{IssueError, KeywordSets};

/// Tokens must be longer than this to count as keywords.
const MIN_KEYWORD_LEN: usize = 3;
const MAX_KEYWORDS: usize = 4;
const MAX_FILTERED_WORDS: usize = 3;
const MAX_RAW_CHARS: usize = 60;

/// Derives a short label from free text.
///
/// Proper nouns come first, then business keywords, then technical ones,
/// deduplicated by exact spelling. Without any keyword the first few
/// remaining content words are used, and without those the raw text is
/// truncated. Only the first character is upper-cased.
pub fn derive_title(text: &str, keywords: &KeywordSets) -> String {
    let cleaned = strip_punctuation(text);
    let words = cleaned.split_whitespace().collect::<Vec<_>>();

    let filtered = words
        .iter()
        .copied()
        .filter(|w| !keywords.is_stop_word(w))
        .filter(|w| w.chars().count() > MIN_KEYWORD_LEN)
        .collect::<Vec<_>>();

    let technical = filtered
        .iter()
        .copied()
        .filter(|w| keywords.technical().matches(w));
    let business = filtered
        .iter()
        .copied()
        .filter(|w| keywords.business().matches(w));

    // The sentence-initial word is capitalized by grammar, not because it
    // names something.
    let proper_nouns = words
        .iter()
        .copied()
        .skip(1)
        .filter(|w| is_capitalized(w))
        .filter(|w| w.chars().count() > MIN_KEYWORD_LEN)
        .filter(|w| !keywords.is_stop_word(w));

    let mut picked: Vec<&str> = vec![];
    for word in proper_nouns.chain(business).chain(technical) {
        if !picked.contains(&word) {
            picked.push(word);
        }
    }

    let title = if !picked.is_empty() {
        picked
            .into_iter()
            .take(MAX_KEYWORDS)
            .collect::<Vec<_>>()
            .join(" ")
    } else if !filtered.is_empty() {
        filtered
            .into_iter()
            .take(MAX_FILTERED_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        text.chars().take(MAX_RAW_CHARS).collect()
    };

    capitalize_first(&title)
}

/// Picks the display title of a group: the first precomputed
/// `group_title` among its members, otherwise a title derived from the
/// first message.
pub fn title_for_group(messages: &[Message], keywords: &KeywordSets) -> Result<String, IssueError> {
    if let Some(title) = messages.iter().find_map(|m| m.group_title()) {
        return Ok(title.to_string());
    }

    let first = messages.first().map(|m| m.text()).unwrap_or_default();
    let title = derive_title(first, keywords);
    if title.trim().is_empty() {
        return Err(IssueError::EmptyDerivedTitle);
    }
    Ok(title)
}

fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
