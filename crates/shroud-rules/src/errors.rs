// src/errors.rs
//! Rule construction errors (R2xxx).
//!
//! Rules are validated once, when they are built from their configuration
//! strings. Evaluating a built rule never fails.

#![allow(unused_assignments)] // False positives from thiserror derive

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum RuleError {
    #[error("invalid name pattern '{pattern}'")]
    #[diagnostic(
        code(R2001),
        help("criteria starting with '^' are regular expressions; anything else is matched literally")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("'{value}' is not a valid member visibility")]
    #[diagnostic(code(R2002), help("supported values are 'public' and 'protected'"))]
    UnknownMemberVisibility { value: String },

    #[error("'{value}' is not a valid declaring type visibility")]
    #[diagnostic(code(R2003), help("only 'public' is supported"))]
    UnknownTypeVisibility { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let bad_regex = regex::Regex::new("(").expect_err("unbalanced group");
        let cases: Vec<(RuleError, &str)> = vec![
            (
                RuleError::InvalidPattern {
                    pattern: "^(".to_string(),
                    source: bad_regex,
                },
                "R2001",
            ),
            (
                RuleError::UnknownMemberVisibility {
                    value: "internal".to_string(),
                },
                "R2002",
            ),
            (
                RuleError::UnknownTypeVisibility {
                    value: "private".to_string(),
                },
                "R2003",
            ),
        ];
        for (err, expected_code) in cases {
            let code = err.code().expect("should have error code");
            assert_eq!(code.to_string(), expected_code);
        }
    }

    #[test]
    fn messages_name_the_value() {
        let err = RuleError::UnknownMemberVisibility {
            value: "friend".to_string(),
        };
        assert_eq!(err.to_string(), "'friend' is not a valid member visibility");
    }
}
