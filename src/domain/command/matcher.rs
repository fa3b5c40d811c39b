//! Matchers - test a pattern against the start of the remaining text

use regex_lite::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A pattern tested against a text prefix.
///
/// `match_prefix` returns the number of bytes consumed when the pattern
/// matches at position 0, and `None` otherwise. The returned length always
/// falls on a char boundary.
pub trait Matcher: Send + Sync {
    fn match_prefix(&self, text: &str) -> Option<usize>;

    /// Short human readable form, used in logs
    fn describe(&self) -> String;
}

/// Case-insensitive regex anchored at the cursor.
///
/// The pattern is compiled on first use, so a malformed pattern only
/// surfaces when a message is first tested against it.
pub struct RegexMatcher {
    pattern: String,
    compiled: OnceLock<Result<Regex, String>>,
}

impl RegexMatcher {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            compiled: OnceLock::new(),
        }
    }

    fn regex(&self) -> Result<&Regex, &str> {
        self.compiled
            .get_or_init(|| {
                Regex::new(&format!("(?i)^(?:{})", self.pattern)).map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|e| e.as_str())
    }
}

impl Matcher for RegexMatcher {
    fn match_prefix(&self, text: &str) -> Option<usize> {
        match self.regex() {
            Ok(re) => re.find(text).map(|m| m.end()),
            Err(e) => {
                tracing::warn!("Invalid command pattern /{}/: {}", self.pattern, e);
                None
            }
        }
    }

    fn describe(&self) -> String {
        format!("/{}/", self.pattern)
    }
}

impl fmt::Debug for RegexMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexMatcher").field("pattern", &self.pattern).finish()
    }
}

/// Literal keyword, case-insensitive, must end at a word boundary
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
}

impl KeywordMatcher {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self { keyword: keyword.into() }
    }
}

impl Matcher for KeywordMatcher {
    fn match_prefix(&self, text: &str) -> Option<usize> {
        let len = self.keyword.len();
        let head = text.get(..len)?;
        if !head.eq_ignore_ascii_case(&self.keyword) {
            return None;
        }
        match text[len..].chars().next() {
            Some(c) if c.is_alphanumeric() || c == '_' => None,
            _ => Some(len),
        }
    }

    fn describe(&self) -> String {
        format!("'{}'", self.keyword)
    }
}

/// Matches anything without consuming. Used for the implicit tree root.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysMatcher;

impl Matcher for AlwaysMatcher {
    fn match_prefix(&self, _text: &str) -> Option<usize> {
        Some(0)
    }

    fn describe(&self) -> String {
        "<always>".to_string()
    }
}

/// Never matches. A node built without a matcher gets this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverMatcher;

impl Matcher for NeverMatcher {
    fn match_prefix(&self, _text: &str) -> Option<usize> {
        None
    }

    fn describe(&self) -> String {
        "<never>".to_string()
    }
}
