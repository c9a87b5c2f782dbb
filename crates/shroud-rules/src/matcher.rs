// src/matcher.rs
//
// The literal-or-pattern matcher shared by every string criterion of a rule.

use regex::Regex;

use crate::errors::RuleError;

/// Shared detection rule: a criterion starting with `^` is a regular
/// expression, anything else is an exact literal.
pub fn is_pattern(criterion: &str) -> bool {
    criterion.starts_with('^')
}

/// A compiled string criterion.
#[derive(Debug, Clone)]
pub enum TextMatcher {
    /// Exact, case-sensitive comparison
    Literal(String),
    /// Unanchored regex search; the pattern itself carries any anchors
    Pattern(Regex),
}

impl TextMatcher {
    /// Compile a criterion string. An empty criterion is a wildcard and
    /// yields `None`.
    pub fn parse(criterion: &str) -> Result<Option<Self>, RuleError> {
        if criterion.is_empty() {
            return Ok(None);
        }
        if !is_pattern(criterion) {
            return Ok(Some(TextMatcher::Literal(criterion.to_string())));
        }
        Regex::new(criterion)
            .map(|re| Some(TextMatcher::Pattern(re)))
            .map_err(|source| RuleError::InvalidPattern {
                pattern: criterion.to_string(),
                source,
            })
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            TextMatcher::Literal(literal) => literal == text,
            TextMatcher::Pattern(re) => re.is_match(text),
        }
    }

    /// The criterion as written.
    pub fn as_str(&self) -> &str {
        match self {
            TextMatcher::Literal(literal) => literal,
            TextMatcher::Pattern(re) => re.as_str(),
        }
    }
}
