// src/members.rs
//
// Uniform view over declared members for rule evaluation.

use std::fmt;

use shroud_identity::TypeDefId;

use crate::access::Access;
use crate::defs::{EventDef, FieldDef, MethodDef, PropertyDef};
use crate::graph::TypeGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Field,
    Event,
    Property,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemberKind::Method => "method",
            MemberKind::Field => "field",
            MemberKind::Event => "event",
            MemberKind::Property => "property",
        };
        f.write_str(name)
    }
}

/// A declared member a rule can be tested against.
pub trait Member {
    fn kind(&self) -> MemberKind;

    fn name(&self) -> &str;

    fn declaring_type(&self) -> TypeDefId;

    /// Access level used for visibility criteria.
    ///
    /// Compound members (events, properties) take it from their first
    /// present accessor; with no accessor at all they have no access.
    fn effective_access(&self, graph: &TypeGraph) -> Access;
}

impl Member for MethodDef {
    fn kind(&self) -> MemberKind {
        MemberKind::Method
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> TypeDefId {
        self.declaring_type
    }

    fn effective_access(&self, _graph: &TypeGraph) -> Access {
        self.access
    }
}

impl Member for FieldDef {
    fn kind(&self) -> MemberKind {
        MemberKind::Field
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> TypeDefId {
        self.declaring_type
    }

    fn effective_access(&self, _graph: &TypeGraph) -> Access {
        self.access
    }
}

impl Member for EventDef {
    fn kind(&self) -> MemberKind {
        MemberKind::Event
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> TypeDefId {
        self.declaring_type
    }

    fn effective_access(&self, graph: &TypeGraph) -> Access {
        self.effective_accessor()
            .and_then(|m| graph.try_method(m))
            .map_or(Access::CompilerControlled, |m| m.access)
    }
}

impl Member for PropertyDef {
    fn kind(&self) -> MemberKind {
        MemberKind::Property
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> TypeDefId {
        self.declaring_type
    }

    fn effective_access(&self, graph: &TypeGraph) -> Access {
        self.effective_accessor()
            .and_then(|m| graph.try_method(m))
            .map_or(Access::CompilerControlled, |m| m.access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::TypeVisibility;
    use crate::defs::{EventAccessors, PropertyAccessors};
    use crate::type_ref::TypeRef;

    fn setup() -> (TypeGraph, TypeDefId) {
        let mut graph = TypeGraph::new();
        let unit = graph.add_unit("a.dll", "a");
        let ty = graph.add_type(unit, "N", "T", TypeVisibility::Public);
        (graph, ty)
    }

    #[test]
    fn event_prefers_add_accessor() {
        let (mut graph, ty) = setup();
        let add = graph.add_method(ty, "add_Changed", Access::Public);
        let remove = graph.add_method(ty, "remove_Changed", Access::Private);
        let evt = graph.add_event(
            ty,
            "Changed",
            TypeRef::simple(ty),
            EventAccessors {
                add: Some(add),
                remove: Some(remove),
                invoke: None,
            },
        );
        assert_eq!(graph.event(evt).effective_access(&graph), Access::Public);
    }

    #[test]
    fn event_falls_back_to_remove_then_invoke() {
        let (mut graph, ty) = setup();
        let remove = graph.add_method(ty, "remove_Changed", Access::Family);
        let invoke = graph.add_method(ty, "raise_Changed", Access::Private);
        let with_remove = graph.add_event(
            ty,
            "Changed",
            TypeRef::simple(ty),
            EventAccessors {
                add: None,
                remove: Some(remove),
                invoke: Some(invoke),
            },
        );
        let with_invoke = graph.add_event(
            ty,
            "Raised",
            TypeRef::simple(ty),
            EventAccessors {
                invoke: Some(invoke),
                ..EventAccessors::default()
            },
        );
        assert_eq!(graph.event(with_remove).effective_access(&graph), Access::Family);
        assert_eq!(graph.event(with_invoke).effective_access(&graph), Access::Private);
    }

    #[test]
    fn accessorless_members_have_no_access() {
        let (mut graph, ty) = setup();
        let evt = graph.add_event(ty, "Ghost", TypeRef::simple(ty), EventAccessors::default());
        let prop = graph.add_property(ty, "Ghost", TypeRef::simple(ty), PropertyAccessors::default());
        assert_eq!(
            graph.event(evt).effective_access(&graph),
            Access::CompilerControlled
        );
        assert_eq!(
            graph.property(prop).effective_access(&graph),
            Access::CompilerControlled
        );
    }

    #[test]
    fn property_prefers_getter() {
        let (mut graph, ty) = setup();
        let get = graph.add_method(ty, "get_Size", Access::Assembly);
        let set = graph.add_method(ty, "set_Size", Access::Public);
        let prop = graph.add_property(
            ty,
            "Size",
            TypeRef::simple(ty),
            PropertyAccessors {
                getter: Some(get),
                setter: Some(set),
            },
        );
        let member = graph.property(prop);
        assert_eq!(member.kind(), MemberKind::Property);
        assert_eq!(member.effective_access(&graph), Access::Assembly);
    }

    #[test]
    fn plain_members_use_own_access() {
        let (mut graph, ty) = setup();
        let m = graph.add_method(ty, "Run", Access::FamOrAssem);
        let f = graph.add_field(ty, "count", TypeRef::simple(ty), Access::Private);
        assert_eq!(graph.method(m).effective_access(&graph), Access::FamOrAssem);
        assert_eq!(graph.field(f).effective_access(&graph), Access::Private);
        assert_eq!(graph.field(f).kind().to_string(), "field");
    }
}
