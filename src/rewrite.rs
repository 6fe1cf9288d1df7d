//! Keyword rewriting.
//!
//! Matching is a plain substring search, scanned left to right without
//! overlap. It does not respect word boundaries, and an existing `static`
//! after the match is left alone, so `public final static` becomes
//! `public static final static`.

use serde::Deserialize;

/// The keyword sequence rewritten by default.
pub const DEFAULT_FROM: &str = "public final";
/// What [`DEFAULT_FROM`] becomes.
pub const DEFAULT_TO: &str = "public static final";

/// A fixed-substring replacement rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordRule {
    pub from: String,
    pub to: String,
}

impl Default for KeywordRule {
    fn default() -> Self {
        KeywordRule {
            from: DEFAULT_FROM.to_string(),
            to: DEFAULT_TO.to_string(),
        }
    }
}

impl KeywordRule {
    /// Build a rule. An empty `from` is accepted here but never matches:
    /// [`KeywordRule::apply`] returns the text unchanged and
    /// [`KeywordRule::count`] reports zero, rather than inserting `to`
    /// between every character the way `str::replace("", to)` would.
    /// [`Config`](crate::Config) rejects an empty `from` outright.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        KeywordRule {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Number of replacements [`KeywordRule::apply`] performs on `text`.
    pub fn count(&self, text: &str) -> usize {
        if self.from.is_empty() {
            return 0;
        }
        text.matches(self.from.as_str()).count()
    }

    /// Replace every occurrence of `from` with `to`. No-op when `from` is empty.
    pub fn apply(&self, text: &str) -> String {
        if self.from.is_empty() {
            return text.to_string();
        }
        let rewritten = text.replace(self.from.as_str(), &self.to);
        tracing::debug!(
            "rewrote {} occurrence(s) of {:?}",
            self.count(text),
            self.from
        );
        rewritten
    }
}

/// Rewrite `public final` to `public static final` throughout `text`.
pub fn rewrite_keywords(text: &str) -> String {
    KeywordRule::default().apply(text)
}
