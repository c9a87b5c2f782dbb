// src/session.rs
//
// The operations the rename pipeline calls, bound to one read-only graph.

use shroud_generic::Substitution;
use shroud_identity::TypeDefId;
use shroud_metadata::{Member, TypeGraph, TypeRef, display_type, host_unit_name, qualified_name};
use shroud_rules::{AccessTable, MatchContext, MemberRule, RuleSet, VisibilityFilter};

use crate::errors::ShroudError;

/// Handle for evaluating rules and substituting generics over one graph.
///
/// A session only borrows the graph, so any number of sessions can run on
/// worker threads while the graph is not being mutated.
#[derive(Clone, Copy)]
pub struct Session<'g> {
    graph: &'g TypeGraph,
    filter: &'g dyn VisibilityFilter,
}

impl<'g> Session<'g> {
    /// Session using the default visibility table.
    pub fn new(graph: &'g TypeGraph) -> Self {
        Self {
            graph,
            filter: &AccessTable,
        }
    }

    pub fn with_filter(graph: &'g TypeGraph, filter: &'g dyn VisibilityFilter) -> Self {
        Self { graph, filter }
    }

    pub fn graph(&self) -> &'g TypeGraph {
        self.graph
    }

    fn match_context(&self) -> MatchContext<'g> {
        MatchContext::new(self.graph, self.filter)
    }

    /// Does `candidate` satisfy `rule`?
    pub fn test<M: Member + ?Sized>(&self, candidate: &M, rule: &MemberRule) -> bool {
        rule.test(candidate, &self.match_context())
    }

    /// Does any rule of `rules` accept `candidate`?
    pub fn matches_any<M: Member + ?Sized>(&self, candidate: &M, rules: &RuleSet) -> bool {
        rules.is_match(candidate, &self.match_context())
    }

    /// Rewrite `expr` under `instantiation`.
    ///
    /// Errors are fatal for the run; they are logged here and handed back for
    /// the driver to report.
    #[tracing::instrument(level = "debug", skip_all, fields(instantiation = %self.display_type(instantiation)))]
    pub fn substitute(
        &self,
        expr: &TypeRef,
        instantiation: &TypeRef,
    ) -> Result<TypeRef, ShroudError> {
        Substitution::for_instance(self.graph, instantiation)
            .and_then(|substitution| substitution.apply(expr))
            .map_err(|err| {
                tracing::error!(error = %err, expr = %self.display_type(expr), "generic substitution failed");
                ShroudError::from(err)
            })
    }

    /// Rewrite every type of a signature under one instantiation.
    #[tracing::instrument(level = "debug", skip_all, fields(instantiation = %self.display_type(instantiation), count = exprs.len()))]
    pub fn substitute_all(
        &self,
        exprs: &[TypeRef],
        instantiation: &TypeRef,
    ) -> Result<Vec<TypeRef>, ShroudError> {
        shroud_generic::substitute_all(self.graph, exprs, instantiation).map_err(|err| {
            tracing::error!(error = %err, "generic substitution failed");
            ShroudError::from(err)
        })
    }

    pub fn qualified_name(&self, ty: TypeDefId) -> String {
        qualified_name(self.graph, ty)
    }

    pub fn host_unit_name(&self, ty: TypeDefId) -> &'g str {
        host_unit_name(self.graph, ty)
    }

    pub fn display_type(&self, ty: &TypeRef) -> String {
        display_type(self.graph, ty)
    }
}
