// src/lib.rs
//
// Read-only model of the declared-type graph consumed by the rule and
// substitution engines: units, declared types, members, access flags and
// type reference trees.

mod access;
mod defs;
mod graph;
mod members;
mod names;
mod type_ref;

pub use access::{Access, TypeVisibility};
pub use defs::{
    DeclaredType, EventAccessors, EventDef, FieldDef, GenericParam, MethodDef, PropertyAccessors,
    PropertyDef, TypeOwner, Unit,
};
pub use graph::TypeGraph;
pub use members::{Member, MemberKind};
pub use names::{NameStyle, display_type, host_unit_name, qualified_name, qualified_name_with};
pub use type_ref::{Instantiation, TypeRef, TypeRefKind};
