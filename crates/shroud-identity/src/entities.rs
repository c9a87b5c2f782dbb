//! First-class identity types for metadata entities.
//!
//! These are indices into the declared-type graph. Keeping one type per entity
//! kind prevents a field id from ever being looked up as a method.

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name(u32);

        impl $name {
            pub fn new(index: u32) -> Self {
                Self(index)
            }

            pub fn index(self) -> u32 {
                self.0
            }
        }
    };
}

define_entity_id! {
    /// Identity for a compilation unit (module) loaded into the graph
    pub struct UnitId;
}

define_entity_id! {
    /// Identity for a declared type (class, struct, interface, delegate, enum)
    pub struct TypeDefId;
}

define_entity_id! {
    /// Identity for a method, including event and property accessors
    pub struct MethodId;
}

define_entity_id! {
    /// Identity for a field
    pub struct FieldId;
}

define_entity_id! {
    /// Identity for an event
    pub struct EventId;
}

define_entity_id! {
    /// Identity for a property
    pub struct PropertyId;
}
