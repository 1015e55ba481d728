//! Regex-or-literal value matching

use regex::Regex;

/// Outcome of matching a filter value against a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternMatch {
    /// Full regex match or literal equality
    Matched,
    /// Valid pattern that does not match
    NoMatch,
    /// Malformed regex; treated as no match
    InvalidPattern,
}

impl PatternMatch {
    /// Collapse to the boolean seen by filters
    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, PatternMatch::Matched)
    }
}

/// Filter value compiled once as a fully anchored regex
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    regex: Option<Regex>,
}

impl Pattern {
    /// Compile `raw`; a malformed regex is kept as a literal-only pattern
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        // Validate on its own first so `a)|(b` cannot escape the anchoring group.
        let regex = Regex::new(&raw)
            .and_then(|_| Regex::new(&format!("^(?:{raw})$")))
            .ok();

        Self { raw, regex }
    }

    /// Raw pattern text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern compiled as a regex
    #[must_use]
    pub fn is_valid_regex(&self) -> bool {
        self.regex.is_some()
    }

    /// Match `text` fully against the regex, or literally
    #[must_use]
    pub fn evaluate(&self, text: &str) -> PatternMatch {
        if self.raw == text {
            return PatternMatch::Matched;
        }

        match &self.regex {
            Some(re) if re.is_match(text) => PatternMatch::Matched,
            Some(_) => PatternMatch::NoMatch,
            None => PatternMatch::InvalidPattern,
        }
    }
}
