// src/errors/mod.rs
//! Top-level error type and diagnostic rendering.
//!
//! Error code ranges:
//! - S1xxx: generic substitution (fatal graph inconsistencies)
//! - R2xxx: rule construction

#![allow(unused_assignments)] // False positives from thiserror derive

pub mod report;

use miette::Diagnostic;
use thiserror::Error;

use shroud_generic::SubstitutionError;
use shroud_rules::RuleError;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ShroudError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Substitution(#[from] SubstitutionError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Rule(#[from] RuleError),
}

impl ShroudError {
    /// Short tag for log fields: which engine raised the error.
    pub fn origin(&self) -> &'static str {
        match self {
            ShroudError::Substitution(_) => "substitution",
            ShroudError::Rule(_) => "rule",
        }
    }
}

pub use report::{render_to_stderr, render_to_string, report_fatal};
