//! The declared-type graph.
//!
//! `TypeGraph` owns every unit, declared type and member loaded from the
//! input binaries. It is populated once through the `add_*` builder methods
//! and then shared read-only with the rule and substitution engines.
//!
//! Ids handed out by a graph are indices into its storage vectors. Looking up
//! an id that came from a different graph is a caller bug; the `try_*`
//! lookups exist for ids that arrive through type references, whose validity
//! is not guaranteed by construction.

use rustc_hash::FxHashMap;
use shroud_identity::{
    EventId, FieldId, MetadataToken, MethodId, PropertyId, TokenTable, TypeDefId, UnitId,
};

use crate::access::{Access, TypeVisibility};
use crate::defs::{
    DeclaredType, EventAccessors, EventDef, FieldDef, GenericParam, MethodDef,
    PropertyAccessors, PropertyDef, RowCounters, TypeOwner, Unit,
};
use crate::names::{NameStyle, qualified_name_with};
use crate::type_ref::TypeRef;

#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    pub(crate) units: Vec<Unit>,
    pub(crate) type_defs: Vec<DeclaredType>,
    pub(crate) method_defs: Vec<MethodDef>,
    pub(crate) field_defs: Vec<FieldDef>,
    pub(crate) event_defs: Vec<EventDef>,
    pub(crate) property_defs: Vec<PropertyDef>,

    // Qualified name -> every type carrying it, across units
    pub(crate) types_by_name: FxHashMap<String, Vec<TypeDefId>>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Building =====

    pub fn add_unit(
        &mut self,
        file_name: impl Into<String>,
        assembly_name: impl Into<String>,
    ) -> UnitId {
        let id = UnitId::new(self.units.len() as u32);
        self.units.push(Unit {
            id,
            file_name: file_name.into(),
            assembly_name: assembly_name.into(),
            rids: RowCounters::default(),
        });
        id
    }

    /// Add a top-level type to `unit`.
    pub fn add_type(
        &mut self,
        unit: UnitId,
        namespace: impl Into<String>,
        name: impl Into<String>,
        visibility: TypeVisibility,
    ) -> TypeDefId {
        self.push_type(unit, TypeOwner::Namespace(namespace.into()), name.into(), visibility)
    }

    /// Add a type nested in `parent`; it lives in the parent's unit.
    pub fn add_nested_type(
        &mut self,
        parent: TypeDefId,
        name: impl Into<String>,
        visibility: TypeVisibility,
    ) -> TypeDefId {
        let unit = self.type_def(parent).unit;
        self.push_type(unit, TypeOwner::Nested(parent), name.into(), visibility)
    }

    fn push_type(
        &mut self,
        unit: UnitId,
        owner: TypeOwner,
        name: String,
        visibility: TypeVisibility,
    ) -> TypeDefId {
        let rid = RowCounters::bump(&mut self.units[unit.index() as usize].rids.type_def);
        let id = TypeDefId::new(self.type_defs.len() as u32);
        self.type_defs.push(DeclaredType {
            id,
            unit,
            token: MetadataToken::new(TokenTable::TypeDef, rid),
            name,
            owner,
            visibility,
            generic_params: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            events: Vec::new(),
            properties: Vec::new(),
        });
        let full_name = qualified_name_with(self, id, &NameStyle::CANONICAL);
        self.types_by_name.entry(full_name).or_default().push(id);
        id
    }

    /// Declare the next generic parameter of `ty`; returns its position.
    pub fn add_generic_param(&mut self, ty: TypeDefId, name: impl Into<String>) -> u16 {
        let params = &mut self.type_defs[ty.index() as usize].generic_params;
        let position = params.len() as u16;
        params.push(GenericParam {
            name: name.into(),
            position,
        });
        position
    }

    fn next_row(&mut self, ty: TypeDefId, table: TokenTable) -> MetadataToken {
        let unit = self.type_def(ty).unit;
        let rids = &mut self.units[unit.index() as usize].rids;
        let counter = match table {
            TokenTable::TypeDef => &mut rids.type_def,
            TokenTable::Method => &mut rids.method,
            TokenTable::Field => &mut rids.field,
            TokenTable::Event => &mut rids.event,
            TokenTable::Property => &mut rids.property,
        };
        MetadataToken::new(table, RowCounters::bump(counter))
    }

    pub fn add_method(
        &mut self,
        declaring_type: TypeDefId,
        name: impl Into<String>,
        access: Access,
    ) -> MethodId {
        let token = self.next_row(declaring_type, TokenTable::Method);
        let id = MethodId::new(self.method_defs.len() as u32);
        self.method_defs.push(MethodDef {
            id,
            token,
            name: name.into(),
            declaring_type,
            access,
        });
        self.type_defs[declaring_type.index() as usize].methods.push(id);
        id
    }

    pub fn add_field(
        &mut self,
        declaring_type: TypeDefId,
        name: impl Into<String>,
        field_type: TypeRef,
        access: Access,
    ) -> FieldId {
        let token = self.next_row(declaring_type, TokenTable::Field);
        let id = FieldId::new(self.field_defs.len() as u32);
        self.field_defs.push(FieldDef {
            id,
            token,
            name: name.into(),
            declaring_type,
            field_type,
            access,
        });
        self.type_defs[declaring_type.index() as usize].fields.push(id);
        id
    }

    pub fn add_event(
        &mut self,
        declaring_type: TypeDefId,
        name: impl Into<String>,
        event_type: TypeRef,
        accessors: EventAccessors,
    ) -> EventId {
        let token = self.next_row(declaring_type, TokenTable::Event);
        let id = EventId::new(self.event_defs.len() as u32);
        self.event_defs.push(EventDef {
            id,
            token,
            name: name.into(),
            declaring_type,
            event_type,
            accessors,
        });
        self.type_defs[declaring_type.index() as usize].events.push(id);
        id
    }

    pub fn add_property(
        &mut self,
        declaring_type: TypeDefId,
        name: impl Into<String>,
        property_type: TypeRef,
        accessors: PropertyAccessors,
    ) -> PropertyId {
        let token = self.next_row(declaring_type, TokenTable::Property);
        let id = PropertyId::new(self.property_defs.len() as u32);
        self.property_defs.push(PropertyDef {
            id,
            token,
            name: name.into(),
            declaring_type,
            property_type,
            accessors,
        });
        self.type_defs[declaring_type.index() as usize]
            .properties
            .push(id);
        id
    }

    // ===== Lookup =====

    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.units[id.index() as usize]
    }

    pub fn type_def(&self, id: TypeDefId) -> &DeclaredType {
        &self.type_defs[id.index() as usize]
    }

    pub fn try_type_def(&self, id: TypeDefId) -> Option<&DeclaredType> {
        self.type_defs.get(id.index() as usize)
    }

    pub fn method(&self, id: MethodId) -> &MethodDef {
        &self.method_defs[id.index() as usize]
    }

    pub fn try_method(&self, id: MethodId) -> Option<&MethodDef> {
        self.method_defs.get(id.index() as usize)
    }

    pub fn field(&self, id: FieldId) -> &FieldDef {
        &self.field_defs[id.index() as usize]
    }

    pub fn event(&self, id: EventId) -> &EventDef {
        &self.event_defs[id.index() as usize]
    }

    pub fn property(&self, id: PropertyId) -> &PropertyDef {
        &self.property_defs[id.index() as usize]
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn types(&self) -> impl Iterator<Item = &DeclaredType> {
        self.type_defs.iter()
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDef> {
        self.method_defs.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.field_defs.iter()
    }

    pub fn events(&self) -> impl Iterator<Item = &EventDef> {
        self.event_defs.iter()
    }

    pub fn properties(&self) -> impl Iterator<Item = &PropertyDef> {
        self.property_defs.iter()
    }

    /// Unit hosting a declared type.
    pub fn unit_of(&self, id: TypeDefId) -> &Unit {
        self.unit(self.type_def(id).unit)
    }

    pub fn generic_params(&self, id: TypeDefId) -> &[GenericParam] {
        &self.type_def(id).generic_params
    }

    /// All types with this qualified name, in load order.
    pub fn find_types(&self, qualified_name: &str) -> &[TypeDefId] {
        self.types_by_name
            .get(qualified_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First type loaded with this qualified name.
    pub fn find_type(&self, qualified_name: &str) -> Option<TypeDefId> {
        self.find_types(qualified_name).first().copied()
    }

    /// Resolve a type reference to the declared type it names.
    ///
    /// `Simple` resolves to its type and `GenericInstance` to its element's
    /// type. Every other shape (pointers, arrays, parameters, ...) does not
    /// name a declared type and yields `None`, as do dangling ids.
    pub fn resolve(&self, ty: &TypeRef) -> Option<&DeclaredType> {
        match ty {
            TypeRef::Simple(id) => self.try_type_def(*id),
            TypeRef::GenericInstance { element, .. } => self.resolve(element),
            _ => None,
        }
    }

    /// Visibility of a type as seen from outside its unit.
    ///
    /// A nested type that is public, family or family-or-assembly is only as
    /// visible as its declaring type; in that case the declaring type's
    /// effective visibility is returned when it is not externally visible.
    pub fn effective_visibility(&self, id: TypeDefId) -> TypeVisibility {
        let ty = self.type_def(id);
        match ty.declaring_type() {
            None => ty.visibility,
            Some(parent) if ty.visibility.is_externally_visible() => {
                let outer = self.effective_visibility(parent);
                if outer.is_externally_visible() {
                    ty.visibility
                } else {
                    outer
                }
            }
            Some(_) => ty.visibility,
        }
    }
}
