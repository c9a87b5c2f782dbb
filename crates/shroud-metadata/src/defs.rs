// src/defs.rs
//
// Entity definitions stored in the TypeGraph.

use shroud_identity::{EventId, FieldId, MetadataToken, MethodId, PropertyId, TypeDefId, UnitId};

use crate::access::{Access, TypeVisibility};
use crate::type_ref::TypeRef;

/// A compilation unit (module) loaded into the graph.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: UnitId,
    /// Display/file name of the module, e.g. `Acme.Core.dll`
    pub file_name: String,
    /// Simple name of the hosting assembly, e.g. `Acme.Core`
    pub assembly_name: String,
    pub(crate) rids: RowCounters,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RowCounters {
    pub type_def: u32,
    pub method: u32,
    pub field: u32,
    pub event: u32,
    pub property: u32,
}

impl RowCounters {
    /// Rows are 1-based.
    pub(crate) fn bump(counter: &mut u32) -> u32 {
        *counter += 1;
        *counter
    }
}

/// Where a declared type sits: directly in a namespace, or inside another type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeOwner {
    Namespace(String),
    Nested(TypeDefId),
}

/// A generic parameter declared by a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParam {
    pub name: String,
    pub position: u16,
}

#[derive(Debug, Clone)]
pub struct DeclaredType {
    pub id: TypeDefId,
    pub unit: UnitId,
    pub token: MetadataToken,
    pub name: String,
    pub owner: TypeOwner,
    pub visibility: TypeVisibility,
    pub generic_params: Vec<GenericParam>,
    pub methods: Vec<MethodId>,
    pub fields: Vec<FieldId>,
    pub events: Vec<EventId>,
    pub properties: Vec<PropertyId>,
}

impl DeclaredType {
    pub fn is_nested(&self) -> bool {
        matches!(self.owner, TypeOwner::Nested(_))
    }

    pub fn declaring_type(&self) -> Option<TypeDefId> {
        match self.owner {
            TypeOwner::Nested(parent) => Some(parent),
            TypeOwner::Namespace(_) => None,
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_params.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct MethodDef {
    pub id: MethodId,
    pub token: MetadataToken,
    pub name: String,
    pub declaring_type: TypeDefId,
    pub access: Access,
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    pub id: FieldId,
    pub token: MetadataToken,
    pub name: String,
    pub declaring_type: TypeDefId,
    pub field_type: TypeRef,
    pub access: Access,
}

/// Accessor methods of an event; any of them may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventAccessors {
    pub add: Option<MethodId>,
    pub remove: Option<MethodId>,
    pub invoke: Option<MethodId>,
}

#[derive(Debug, Clone)]
pub struct EventDef {
    pub id: EventId,
    pub token: MetadataToken,
    pub name: String,
    pub declaring_type: TypeDefId,
    pub event_type: TypeRef,
    pub accessors: EventAccessors,
}

impl EventDef {
    /// The accessor whose flags stand for the event: add, then remove, then invoke.
    pub fn effective_accessor(&self) -> Option<MethodId> {
        self.accessors
            .add
            .or(self.accessors.remove)
            .or(self.accessors.invoke)
    }
}

/// Accessor methods of a property; any of them may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyAccessors {
    pub getter: Option<MethodId>,
    pub setter: Option<MethodId>,
}

#[derive(Debug, Clone)]
pub struct PropertyDef {
    pub id: PropertyId,
    pub token: MetadataToken,
    pub name: String,
    pub declaring_type: TypeDefId,
    pub property_type: TypeRef,
    pub accessors: PropertyAccessors,
}

impl PropertyDef {
    /// The accessor whose flags stand for the property: getter, then setter.
    pub fn effective_accessor(&self) -> Option<MethodId> {
        self.accessors.getter.or(self.accessors.setter)
    }
}
