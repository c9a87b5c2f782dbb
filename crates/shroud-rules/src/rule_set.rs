// src/rule_set.rs
//
// Ordered rule collections (skip lists, force lists).

use shroud_metadata::Member;

use crate::rule::{MatchContext, MemberRule};

/// A list of rules; a member matches the set when any rule accepts it.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<MemberRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: MemberRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemberRule> {
        self.rules.iter()
    }

    /// Index of the first rule accepting `member`.
    pub fn first_match<M: Member + ?Sized>(
        &self,
        member: &M,
        ctx: &MatchContext<'_>,
    ) -> Option<usize> {
        self.rules.iter().position(|rule| rule.test(member, ctx))
    }

    pub fn is_match<M: Member + ?Sized>(&self, member: &M, ctx: &MatchContext<'_>) -> bool {
        self.first_match(member, ctx).is_some()
    }
}

impl FromIterator<MemberRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = MemberRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
