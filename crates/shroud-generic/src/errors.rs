// src/errors.rs
//! Generic substitution errors (S1xxx).
//!
//! Every variant means the declared-type graph handed to the engine is
//! inconsistent. None of them is recoverable: the run must stop with a
//! diagnostic instead of rewriting references from a partial result.

#![allow(unused_assignments)] // False positives from thiserror derive

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    #[error("'{found}' is not a generic instantiation")]
    #[diagnostic(code(S1001))]
    NotAnInstantiation { found: String },

    #[error("unresolved type: {element}")]
    #[diagnostic(
        code(S1002),
        help("the element of a generic instantiation must name a declared type")
    )]
    UnresolvedElement { element: String },

    #[error("'{type_name}' declares {expected} generic parameters but was given {found} arguments")]
    #[diagnostic(code(S1003))]
    ArgumentCountMismatch {
        type_name: String,
        expected: usize,
        found: usize,
    },

    #[error("generic parameter !{position} belongs to unresolved type #{owner}")]
    #[diagnostic(code(S1004))]
    UnresolvedParameterOwner { owner: u32, position: u16 },
}
