// src/lib.rs
//
// Predicate engine: decides whether a declared member satisfies a
// declarative rename/skip rule.

mod errors;
mod matcher;
mod rule;
mod rule_set;
mod visibility;

pub use errors::RuleError;
pub use matcher::{TextMatcher, is_pattern};
pub use rule::{MatchContext, MemberRule, RuleSpec};
pub use rule_set::RuleSet;
pub use visibility::{
    AccessTable, DeclaringTypeVisibility, MemberVisibility, VisibilityFilter, VisibilitySpec,
};
