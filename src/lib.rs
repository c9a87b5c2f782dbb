// src/lib.rs
//! Rule matching and generic type rewriting for a whole-program metadata renamer.
//!
//! The rename pipeline drives two engines over a read-only [`TypeGraph`]:
//!
//! - the predicate engine ([`MemberRule::test`]) decides whether a declared
//!   member is selected by a skip/force rule;
//! - the substitution engine ([`substitute`]) rewrites a type expression
//!   under a generic instantiation.
//!
//! [`Session`] bundles both behind one handle and turns fatal substitution
//! errors into [`ShroudError`] diagnostics for the driver to report.

pub mod errors;
pub mod logging;
mod session;

pub use errors::{ShroudError, render_to_stderr, render_to_string, report_fatal};
pub use session::Session;

pub use shroud_generic::{Binding, BindingKey, Substitution, SubstitutionError, substitute, substitute_all};
pub use shroud_identity::{
    EventId, FieldId, MetadataToken, MethodId, PropertyId, TokenTable, TypeDefId, UnitId,
};
pub use shroud_metadata::{
    Access, DeclaredType, EventAccessors, EventDef, FieldDef, GenericParam, Member, MemberKind,
    MethodDef, NameStyle, PropertyAccessors, PropertyDef, TypeGraph, TypeOwner, TypeRef,
    TypeRefKind, TypeVisibility, Unit, display_type, host_unit_name, qualified_name,
};
pub use shroud_rules::{
    AccessTable, MatchContext, MemberRule, RuleError, RuleSet, RuleSpec, TextMatcher,
    VisibilityFilter, VisibilitySpec,
};
