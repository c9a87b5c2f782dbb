// src/binding.rs
//
// Bindings from generic parameter positions of one declared type to the
// concrete arguments of one instantiation.

use smallvec::SmallVec;

use shroud_identity::MetadataToken;
use shroud_metadata::{DeclaredType, TypeGraph, TypeRef, display_type, qualified_name};

use crate::errors::SubstitutionError;

/// Identity of one generic parameter: owning unit, owning type token, position.
///
/// The unit is identified by its display name, compared exactly. Two units
/// loaded under the same display name are indistinguishable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingKey<'a> {
    pub unit_name: &'a str,
    pub token: MetadataToken,
    pub position: u16,
}

impl<'a> BindingKey<'a> {
    pub fn of(graph: &'a TypeGraph, owner: &DeclaredType, position: u16) -> Self {
        Self {
            unit_name: &graph.unit(owner.unit).file_name,
            token: owner.token,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    pub key: BindingKey<'a>,
    pub argument: &'a TypeRef,
}

pub(crate) type BindingList<'a> = SmallVec<[Binding<'a>; 4]>;

/// Build the bindings of `instantiation`, one per argument in declaration order.
///
/// The instantiation must be a `GenericInstance` whose element resolves to a
/// declared type with exactly as many generic parameters as arguments.
pub(crate) fn bind_arguments<'a>(
    graph: &'a TypeGraph,
    instantiation: &'a TypeRef,
) -> Result<BindingList<'a>, SubstitutionError> {
    let inst = instantiation
        .as_instantiation()
        .ok_or_else(|| SubstitutionError::NotAnInstantiation {
            found: display_type(graph, instantiation),
        })?;

    let declared = graph
        .resolve(inst.element)
        .ok_or_else(|| SubstitutionError::UnresolvedElement {
            element: display_type(graph, inst.element),
        })?;

    if declared.generic_params.len() != inst.args.len() {
        return Err(SubstitutionError::ArgumentCountMismatch {
            type_name: qualified_name(graph, declared.id),
            expected: declared.generic_params.len(),
            found: inst.args.len(),
        });
    }

    let bindings: BindingList<'a> = inst
        .args
        .iter()
        .enumerate()
        .map(|(position, argument)| Binding {
            key: BindingKey::of(graph, declared, position as u16),
            argument,
        })
        .collect();

    tracing::debug!(
        owner = %qualified_name(graph, declared.id),
        token = %declared.token,
        count = bindings.len(),
        "bound generic arguments"
    );
    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shroud_metadata::TypeVisibility;

    #[test]
    fn binds_in_declaration_order() {
        let mut graph = TypeGraph::new();
        let unit = graph.add_unit("Acme.dll", "Acme");
        let map = graph.add_type(unit, "Acme", "Map`2", TypeVisibility::Public);
        graph.add_generic_param(map, "K");
        graph.add_generic_param(map, "V");
        let int = graph.add_type(unit, "System", "Int32", TypeVisibility::Public);
        let string = graph.add_type(unit, "System", "String", TypeVisibility::Public);

        let inst = TypeRef::generic_instance(
            TypeRef::simple(map),
            vec![TypeRef::simple(int), TypeRef::simple(string)],
        );
        let bindings = bind_arguments(&graph, &inst).unwrap();

        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].key.unit_name, "Acme.dll");
        assert_eq!(bindings[0].key.token, graph.type_def(map).token);
        assert_eq!(bindings[0].key.position, 0);
        assert_eq!(bindings[0].argument, &TypeRef::simple(int));
        assert_eq!(bindings[1].key.position, 1);
        assert_eq!(bindings[1].argument, &TypeRef::simple(string));
    }

    #[test]
    fn arity_mismatch_is_fatal() {
        let mut graph = TypeGraph::new();
        let unit = graph.add_unit("Acme.dll", "Acme");
        let list = graph.add_type(unit, "Acme", "List`1", TypeVisibility::Public);
        graph.add_generic_param(list, "T");

        let too_many = TypeRef::generic_instance(
            TypeRef::simple(list),
            vec![TypeRef::simple(list), TypeRef::simple(list)],
        );
        assert_eq!(
            bind_arguments(&graph, &too_many).unwrap_err(),
            SubstitutionError::ArgumentCountMismatch {
                type_name: "Acme.List`1".to_string(),
                expected: 1,
                found: 2,
            }
        );

        let none = TypeRef::generic_instance(TypeRef::simple(list), Vec::new());
        assert!(matches!(
            bind_arguments(&graph, &none),
            Err(SubstitutionError::ArgumentCountMismatch { found: 0, .. })
        ));
    }
}
