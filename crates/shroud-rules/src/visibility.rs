// src/visibility.rs
//
// Visibility criteria of a rule and the comparison contract that evaluates
// them. The predicate engine only supplies the two access values and the
// criterion; the table deciding acceptance sits behind `VisibilityFilter`.

use std::str::FromStr;

use shroud_metadata::{Access, TypeVisibility};

use crate::errors::RuleError;

/// Constraint on the candidate member's own access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberVisibility {
    #[default]
    Any,
    /// Only public members
    Public,
    /// Members a subclass in another unit can see
    Protected,
}

impl FromStr for MemberVisibility {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Ok(MemberVisibility::Any)
        } else if s.eq_ignore_ascii_case("public") {
            Ok(MemberVisibility::Public)
        } else if s.eq_ignore_ascii_case("protected") {
            Ok(MemberVisibility::Protected)
        } else {
            Err(RuleError::UnknownMemberVisibility {
                value: s.to_string(),
            })
        }
    }
}

/// Constraint on the visibility of the member's declaring type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclaringTypeVisibility {
    #[default]
    Any,
    /// Declaring type reachable from outside its unit
    Public,
}

impl FromStr for DeclaringTypeVisibility {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Ok(DeclaringTypeVisibility::Any)
        } else if s.eq_ignore_ascii_case("public") {
            Ok(DeclaringTypeVisibility::Public)
        } else {
            Err(RuleError::UnknownTypeVisibility {
                value: s.to_string(),
            })
        }
    }
}

/// Both visibility criteria of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilitySpec {
    pub member: MemberVisibility,
    pub declaring_type: DeclaringTypeVisibility,
}

impl VisibilitySpec {
    pub const ANY: VisibilitySpec = VisibilitySpec {
        member: MemberVisibility::Any,
        declaring_type: DeclaringTypeVisibility::Any,
    };

    /// Parse the member and declaring type criteria; empty strings are wildcards.
    pub fn parse(member: &str, declaring_type: &str) -> Result<Self, RuleError> {
        Ok(Self {
            member: member.parse()?,
            declaring_type: declaring_type.parse()?,
        })
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Self::ANY
    }
}

/// Decides whether a member passes a rule's visibility criteria.
///
/// `own` is the member's effective access, `declaring_type` the effective
/// visibility of the type declaring it.
pub trait VisibilityFilter: Send + Sync {
    fn allowed(&self, own: Access, declaring_type: TypeVisibility, spec: &VisibilitySpec) -> bool;
}

/// The default comparison table.
///
/// | criterion | accepted |
/// |-----------|----------|
/// | member `public` | `Public` |
/// | member `protected` | `Public`, `Family`, `FamOrAssem` |
/// | type `public` | any externally visible type |
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessTable;

impl VisibilityFilter for AccessTable {
    fn allowed(
        &self,
        own: Access,
        declaring_type: TypeVisibility,
        spec: &VisibilitySpec,
    ) -> bool {
        let type_ok = match spec.declaring_type {
            DeclaringTypeVisibility::Any => true,
            DeclaringTypeVisibility::Public => declaring_type.is_externally_visible(),
        };
        let member_ok = match spec.member {
            MemberVisibility::Any => true,
            MemberVisibility::Public => own == Access::Public,
            MemberVisibility::Protected => own.is_family_visible(),
        };
        type_ok && member_ok
    }
}
