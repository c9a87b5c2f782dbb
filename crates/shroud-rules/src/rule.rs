// src/rule.rs
//
// Declarative member rules and their evaluation against declared members.

use regex::Regex;
use shroud_metadata::{Member, TypeGraph, qualified_name};

use crate::errors::RuleError;
use crate::matcher::TextMatcher;
use crate::visibility::{AccessTable, VisibilityFilter, VisibilitySpec};

/// Raw rule attributes as they appear in a rule file.
///
/// Empty strings and a missing pattern are wildcards, so
/// `RuleSpec::default()` describes a rule that accepts every member.
#[derive(Debug, Clone, Default)]
pub struct RuleSpec {
    /// Member name: literal, or a regex when it starts with `^`
    pub name: String,
    /// Precompiled member name pattern, checked before `name`
    pub name_pattern: Option<Regex>,
    /// Qualified name of the declaring type: literal or `^` regex
    pub type_name: String,
    /// Member visibility criterion (`public`, `protected`)
    pub visibility: String,
    /// Declaring type visibility criterion (`public`)
    pub type_visibility: String,
}

/// What a rule needs to look at besides the candidate itself.
#[derive(Clone, Copy)]
pub struct MatchContext<'a> {
    pub graph: &'a TypeGraph,
    pub filter: &'a dyn VisibilityFilter,
}

impl<'a> MatchContext<'a> {
    pub fn new(graph: &'a TypeGraph, filter: &'a dyn VisibilityFilter) -> Self {
        Self { graph, filter }
    }

    /// Context using the default [`AccessTable`].
    pub fn with_access_table(graph: &'a TypeGraph) -> Self {
        Self {
            graph,
            filter: &AccessTable,
        }
    }
}

/// A compiled rule selecting members by name, declaring type and visibility.
///
/// The same rule type serves events, methods, fields and properties; the
/// member kind only changes how the effective access level is derived.
#[derive(Debug, Clone, Default)]
pub struct MemberRule {
    name: Option<TextMatcher>,
    name_pattern: Option<Regex>,
    type_name: Option<TextMatcher>,
    visibility: VisibilitySpec,
}

impl MemberRule {
    /// A rule with no criteria; accepts every member.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn from_spec(spec: &RuleSpec) -> Result<Self, RuleError> {
        Ok(Self {
            name: TextMatcher::parse(&spec.name)?,
            name_pattern: spec.name_pattern.clone(),
            type_name: TextMatcher::parse(&spec.type_name)?,
            visibility: VisibilitySpec::parse(&spec.visibility, &spec.type_visibility)?,
        })
    }

    /// Rule matching the member name by literal or `^` pattern.
    pub fn named(
        name: &str,
        type_name: &str,
        visibility: &str,
        type_visibility: &str,
    ) -> Result<Self, RuleError> {
        Self::from_spec(&RuleSpec {
            name: name.to_string(),
            type_name: type_name.to_string(),
            visibility: visibility.to_string(),
            type_visibility: type_visibility.to_string(),
            ..RuleSpec::default()
        })
    }

    /// Rule matching the member name against a precompiled pattern.
    pub fn with_name_pattern(
        name_pattern: Regex,
        type_name: &str,
        visibility: &str,
        type_visibility: &str,
    ) -> Result<Self, RuleError> {
        Self::from_spec(&RuleSpec {
            name_pattern: Some(name_pattern),
            type_name: type_name.to_string(),
            visibility: visibility.to_string(),
            type_visibility: type_visibility.to_string(),
            ..RuleSpec::default()
        })
    }

    pub fn visibility(&self) -> &VisibilitySpec {
        &self.visibility
    }

    /// True when the rule carries no criteria at all.
    pub fn is_wildcard(&self) -> bool {
        self.name.is_none()
            && self.name_pattern.is_none()
            && self.type_name.is_none()
            && self.visibility.is_wildcard()
    }

    /// Does `member` satisfy every criterion this rule carries?
    ///
    /// Criteria are checked in order: declaring type name, visibility, then
    /// name (precompiled pattern before the name string). The first failing
    /// criterion rejects the member.
    pub fn test<M: Member + ?Sized>(&self, member: &M, ctx: &MatchContext<'_>) -> bool {
        let declaring_type = member.declaring_type();

        if let Some(type_name) = &self.type_name {
            let full_name = qualified_name(ctx.graph, declaring_type);
            if !type_name.is_match(&full_name) {
                tracing::trace!(
                    kind = %member.kind(),
                    member = member.name(),
                    %full_name,
                    criterion = type_name.as_str(),
                    "rule rejected member: declaring type name"
                );
                return false;
            }
        }

        if !self.visibility.is_wildcard() {
            let own = member.effective_access(ctx.graph);
            let type_visibility = ctx.graph.effective_visibility(declaring_type);
            if !ctx.filter.allowed(own, type_visibility, &self.visibility) {
                tracing::trace!(
                    kind = %member.kind(),
                    member = member.name(),
                    ?own,
                    ?type_visibility,
                    "rule rejected member: visibility"
                );
                return false;
            }
        }

        if let Some(pattern) = &self.name_pattern
            && !pattern.is_match(member.name())
        {
            tracing::trace!(
                kind = %member.kind(),
                member = member.name(),
                pattern = pattern.as_str(),
                "rule rejected member: name pattern"
            );
            return false;
        }

        if let Some(name) = &self.name
            && !name.is_match(member.name())
        {
            tracing::trace!(
                kind = %member.kind(),
                member = member.name(),
                criterion = name.as_str(),
                "rule rejected member: name"
            );
            return false;
        }

        true
    }
}
