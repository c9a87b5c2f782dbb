// src/lib.rs
//
// Stable identities for metadata entities.
// Defines typed entity ids and the in-unit MetadataToken.

mod entities;
mod token;

pub use entities::{EventId, FieldId, MethodId, PropertyId, TypeDefId, UnitId};
pub use token::{MetadataToken, TokenTable};
