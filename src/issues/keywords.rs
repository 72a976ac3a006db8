#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::config::KeywordsConfig;

use super::IssueError;

pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "am", "an", "and", "any", "anyone", "are",
    "around", "as", "at", "be", "because", "been", "before", "being", "but", "by", "can",
    "cannot", "could", "did", "do", "does", "doing", "done", "for", "from", "get", "getting",
    "got", "guys", "had", "has", "have", "having", "he", "hello", "her", "here", "hey", "hi",
    "him", "his", "hmm", "how", "i", "if", "in", "into", "is", "it", "its", "just", "know",
    "let", "like", "look", "looks", "me", "might", "more", "my", "need", "needs", "no", "not",
    "now", "of", "ok", "okay", "on", "or", "our", "please", "pls", "really", "seems", "she",
    "should", "so", "some", "someone", "still", "sure", "team", "thank", "thanks", "that",
    "the", "their", "them", "then", "there", "these", "they", "think", "this", "those", "thx",
    "to", "today", "too", "up", "us", "very", "want", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "why", "will", "with", "would", "yeah", "yes", "yet",
    "you", "your",
];

/// Matched against tokens of four or more characters.
pub const DEFAULT_TECHNICAL: &[&str] = &[
    r"^api", r"^back-?end", r"^front-?end", r"^server", r"timeout", r"^deploy", r"^auth(?:$|[^o])",
    r"^latency", r"^login", r"^logout", r"^database", r"^endpoint", r"^crash", r"^outage",
    r"^error", r"^bug", r"^webhook", r"^integration", r"^token", r"^quer(y|ies)",
    r"^cache", r"^migration", r"^pipeline", r"^kubernetes", r"^docker", r"^memory",
    r"^certificate", r"^sync", r"^upload", r"^download", r"^exports?$",
    r"^imports?$", r"^permission", r"^password", r"^schema", r"^config",
];

pub const DEFAULT_BUSINESS: &[&str] = &[
    r"^procurement", r"^invoice", r"^vendor", r"^compliance", r"^billing", r"^contract",
    r"^pricing", r"^payment", r"^renewal", r"^subscription", r"^budget", r"^purchase",
    r"^quote", r"^refund", r"^onboarding", r"^licen[cs]e", r"^audit", r"^legal", r"^finance",
    r"^revenue", r"^order", r"^shipment", r"^supplier", r"^approval", r"^expense",
];

static DEFAULT_SETS: Lazy<KeywordSets> = Lazy::new(|| {
    KeywordSets::new(DEFAULT_STOP_WORDS, DEFAULT_TECHNICAL, DEFAULT_BUSINESS)
        .unwrap_or_else(|err| panic!("built-in keyword patterns must compile: {err}"))
});

/// A named vocabulary of case-insensitive token patterns.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    name: String,
    patterns: Vec<Regex>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(name: impl Into<String>, patterns: &[S]) -> Result<Self, IssueError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p.as_ref())
                    .case_insensitive(true)
                    .build()
                    .map_err(|err| IssueError::InvalidPattern {
                        pattern: p.as_ref().to_string(),
                        reason: err.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.into(),
            patterns,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, token: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(token))
    }
}

/// Vocabularies consumed by the title heuristic.
#[derive(Debug, Clone)]
pub struct KeywordSets {
    stop_words: HashSet<String>,
    technical: KeywordSet,
    business: KeywordSet,
}

impl KeywordSets {
    pub fn new<A, B, C>(stop_words: &[A], technical: &[B], business: &[C]) -> Result<Self, IssueError>
    where
        A: AsRef<str>,
        B: AsRef<str>,
        C: AsRef<str>,
    {
        Ok(Self {
            stop_words: stop_words
                .iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            technical: KeywordSet::new("technical", technical)?,
            business: KeywordSet::new("business", business)?,
        })
    }

    /// Builds the sets from configuration. Lists left unset fall back to the
    /// built-in vocabularies, `extra_stop_words` is added on top.
    pub fn from_config(config: &KeywordsConfig) -> Result<Self, IssueError> {
        let mut stop_words = match config.stop_words.as_deref() {
            Some(words) => words.to_vec(),
            None => DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        };
        stop_words.extend(config.extra_stop_words.iter().cloned());

        let technical = match config.technical.as_deref() {
            Some(patterns) => KeywordSet::new("technical", patterns)?,
            None => DEFAULT_SETS.technical.clone(),
        };
        let business = match config.business.as_deref() {
            Some(patterns) => KeywordSet::new("business", patterns)?,
            None => DEFAULT_SETS.business.clone(),
        };

        for set in [&technical, &business] {
            log::debug!("{} keywords: {} patterns", set.name(), set.len());
        }

        Ok(Self {
            stop_words: stop_words.iter().map(|w| w.to_lowercase()).collect(),
            technical,
            business,
        })
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(&token.to_lowercase())
    }

    pub fn technical(&self) -> &KeywordSet {
        &self.technical
    }

    pub fn business(&self) -> &KeywordSet {
        &self.business
    }
}

impl Default for KeywordSets {
    fn default() -> Self {
        DEFAULT_SETS.clone()
    }
}
