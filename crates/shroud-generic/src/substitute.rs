// src/substitute.rs
//
// Rewrites type expressions under a generic instantiation: every generic
// parameter bound by the instantiated type is replaced by its argument, every
// other node is rebuilt with the same shape.

use shroud_metadata::{TypeGraph, TypeRef};

use crate::binding::{Binding, BindingKey, BindingList, bind_arguments};
use crate::errors::SubstitutionError;

/// The bindings of one instantiation, applied to one or more expressions.
#[derive(Debug, Clone)]
pub struct Substitution<'a> {
    graph: &'a TypeGraph,
    bindings: BindingList<'a>,
}

impl<'a> Substitution<'a> {
    /// Validate `instantiation` and bind its arguments.
    pub fn for_instance(
        graph: &'a TypeGraph,
        instantiation: &'a TypeRef,
    ) -> Result<Self, SubstitutionError> {
        Ok(Self {
            graph,
            bindings: bind_arguments(graph, instantiation)?,
        })
    }

    pub fn bindings(&self) -> &[Binding<'a>] {
        &self.bindings
    }

    /// Rewrite `ty`, replacing every bound generic parameter.
    ///
    /// Bound arguments are inserted as-is and not substituted again, so an
    /// instantiation that mentions its own parameters cannot recurse.
    pub fn apply(&self, ty: &TypeRef) -> Result<TypeRef, SubstitutionError> {
        let rewritten = match ty {
            TypeRef::Simple(_) => ty.clone(),
            TypeRef::GenericInstance { element, args } => {
                let element = self.apply(element)?;
                let args = args
                    .iter()
                    .map(|arg| self.apply(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                TypeRef::generic_instance(element, args)
            }
            TypeRef::Pointer(elem) => self.apply(elem)?.pointer(),
            TypeRef::ByRef(elem) => self.apply(elem)?.by_ref(),
            TypeRef::Array { element, rank } => TypeRef::Array {
                element: Box::new(self.apply(element)?),
                rank: *rank,
            },
            TypeRef::RequiredModifier { element, modifier } => {
                let element = self.apply(element)?;
                element.required_modifier(self.apply(modifier)?)
            }
            TypeRef::OptionalModifier { element, modifier } => {
                let element = self.apply(element)?;
                element.optional_modifier(self.apply(modifier)?)
            }
            TypeRef::Sentinel(elem) => self.apply(elem)?.sentinel(),
            TypeRef::Pinned(elem) => self.apply(elem)?.pinned(),
            TypeRef::GenericParameter { owner, position } => {
                let declared = self.graph.try_type_def(*owner).ok_or(
                    SubstitutionError::UnresolvedParameterOwner {
                        owner: owner.index(),
                        position: *position,
                    },
                )?;
                let key = BindingKey::of(self.graph, declared, *position);
                match self.lookup(&key) {
                    Some(argument) => {
                        tracing::trace!(
                            unit = key.unit_name,
                            token = %key.token,
                            position = key.position,
                            "substituted generic parameter"
                        );
                        argument.clone()
                    }
                    None => ty.clone(),
                }
            }
        };
        Ok(rewritten)
    }

    fn lookup(&self, key: &BindingKey<'_>) -> Option<&'a TypeRef> {
        self.bindings
            .iter()
            .find(|binding| binding.key == *key)
            .map(|binding| binding.argument)
    }
}

/// Rewrite `expr` under `instantiation`.
///
/// Fails without producing any output when the instantiation is malformed or
/// `expr` mentions a parameter whose owner does not resolve.
pub fn substitute(
    graph: &TypeGraph,
    expr: &TypeRef,
    instantiation: &TypeRef,
) -> Result<TypeRef, SubstitutionError> {
    Substitution::for_instance(graph, instantiation)?.apply(expr)
}

/// Rewrite several expressions (e.g. a method signature) under one instantiation.
pub fn substitute_all(
    graph: &TypeGraph,
    exprs: &[TypeRef],
    instantiation: &TypeRef,
) -> Result<Vec<TypeRef>, SubstitutionError> {
    let substitution = Substitution::for_instance(graph, instantiation)?;
    exprs.iter().map(|expr| substitution.apply(expr)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shroud_identity::TypeDefId;
    use shroud_metadata::{TypeRefKind, TypeVisibility};

    struct Fixture {
        graph: TypeGraph,
        container: TypeDefId,
        other: TypeDefId,
        list: TypeDefId,
        string: TypeDefId,
        int: TypeDefId,
    }

    fn fixture() -> Fixture {
        let mut graph = TypeGraph::new();
        let unit = graph.add_unit("Acme.dll", "Acme");
        let container = graph.add_type(unit, "Acme", "Container`1", TypeVisibility::Public);
        graph.add_generic_param(container, "T");
        let other = graph.add_type(unit, "Acme", "Other`1", TypeVisibility::Public);
        graph.add_generic_param(other, "U");
        let list = graph.add_type(unit, "System", "List`1", TypeVisibility::Public);
        graph.add_generic_param(list, "T");
        let string = graph.add_type(unit, "System", "String", TypeVisibility::Public);
        let int = graph.add_type(unit, "System", "Int32", TypeVisibility::Public);
        Fixture {
            graph,
            container,
            other,
            list,
            string,
            int,
        }
    }

    fn container_of(fx: &Fixture, arg: TypeRef) -> TypeRef {
        TypeRef::generic_instance(TypeRef::simple(fx.container), vec![arg])
    }

    #[test]
    fn bound_parameter_becomes_argument() {
        let fx = fixture();
        let inst = container_of(&fx, TypeRef::simple(fx.string));
        let result = substitute(&fx.graph, &TypeRef::parameter(fx.container, 0), &inst).unwrap();
        assert_eq!(result, TypeRef::simple(fx.string));
    }

    #[test]
    fn generic_instance_arguments_are_rewritten() {
        let fx = fixture();
        let expr = TypeRef::generic_instance(
            TypeRef::simple(fx.list),
            vec![TypeRef::parameter(fx.container, 0)],
        );
        let inst = container_of(&fx, TypeRef::simple(fx.string));

        let result = substitute(&fx.graph, &expr, &inst).unwrap();
        assert_eq!(
            result,
            TypeRef::generic_instance(TypeRef::simple(fx.list), vec![TypeRef::simple(fx.string)])
        );
    }

    #[test]
    fn unrelated_owner_is_left_alone() {
        let fx = fixture();
        let expr = TypeRef::parameter(fx.other, 0).array(1);
        let inst = container_of(&fx, TypeRef::simple(fx.string));
        assert_eq!(substitute(&fx.graph, &expr, &inst).unwrap(), expr);
    }

    #[test]
    fn every_wrapper_keeps_its_shape() {
        let fx = fixture();
        let t = || TypeRef::parameter(fx.container, 0);
        let s = || TypeRef::simple(fx.string);
        let modifier = TypeRef::simple(fx.int);
        let inst = container_of(&fx, s());

        let cases = vec![
            (t().pointer(), s().pointer()),
            (t().by_ref(), s().by_ref()),
            (t().array(1), s().array(1)),
            (t().array(3), s().array(3)),
            (
                t().required_modifier(modifier.clone()),
                s().required_modifier(modifier.clone()),
            ),
            (
                t().optional_modifier(modifier.clone()),
                s().optional_modifier(modifier.clone()),
            ),
            (t().sentinel(), s().sentinel()),
            (t().pinned(), s().pinned()),
            (TypeRef::simple(fx.int), TypeRef::simple(fx.int)),
        ];
        for (expr, expected) in cases {
            let result = substitute(&fx.graph, &expr, &inst).unwrap();
            assert_eq!(result, expected, "substituting {:?}", expr);
            assert_eq!(result.kind(), expr.kind());
        }
    }

    #[test]
    fn modifier_type_is_substituted_too() {
        let fx = fixture();
        let expr = TypeRef::simple(fx.int).optional_modifier(TypeRef::parameter(fx.container, 0));
        let inst = container_of(&fx, TypeRef::simple(fx.string));
        assert_eq!(
            substitute(&fx.graph, &expr, &inst).unwrap(),
            TypeRef::simple(fx.int).optional_modifier(TypeRef::simple(fx.string))
        );
    }

    #[test]
    fn bound_argument_is_not_substituted_again() {
        let fx = fixture();
        // Container<List<T>> where T is Container's own parameter
        let self_referential = TypeRef::generic_instance(
            TypeRef::simple(fx.list),
            vec![TypeRef::parameter(fx.container, 0)],
        );
        let inst = container_of(&fx, self_referential.clone());

        let result = substitute(&fx.graph, &TypeRef::parameter(fx.container, 0), &inst).unwrap();
        assert_eq!(result, self_referential);
    }

    #[test]
    fn positions_must_match() {
        let mut fx = fixture();
        let unit = fx.graph.type_def(fx.container).unit;
        let pair = fx
            .graph
            .add_type(unit, "Acme", "Pair`2", TypeVisibility::Public);
        fx.graph.add_generic_param(pair, "A");
        fx.graph.add_generic_param(pair, "B");
        let inst = TypeRef::generic_instance(
            TypeRef::simple(pair),
            vec![TypeRef::simple(fx.string), TypeRef::simple(fx.int)],
        );
        let expr = TypeRef::generic_instance(
            TypeRef::simple(pair),
            vec![TypeRef::parameter(pair, 1), TypeRef::parameter(pair, 0)],
        );
        assert_eq!(
            substitute(&fx.graph, &expr, &inst).unwrap(),
            TypeRef::generic_instance(
                TypeRef::simple(pair),
                vec![TypeRef::simple(fx.int), TypeRef::simple(fx.string)],
            )
        );
        // Out-of-range position has no binding
        let stray = TypeRef::parameter(pair, 2);
        assert_eq!(substitute(&fx.graph, &stray, &inst).unwrap(), stray);
    }

    #[test]
    fn same_token_in_another_unit_does_not_match() {
        let mut fx = fixture();
        let foreign_unit = fx.graph.add_unit("Foreign.dll", "Foreign");
        // First type row of its unit, same token as Container
        let foreign = fx
            .graph
            .add_type(foreign_unit, "Foreign", "Box`1", TypeVisibility::Public);
        fx.graph.add_generic_param(foreign, "T");
        assert_eq!(fx.graph.type_def(foreign).token, fx.graph.type_def(fx.container).token);

        let expr = TypeRef::parameter(foreign, 0);
        let inst = container_of(&fx, TypeRef::simple(fx.string));
        assert_eq!(substitute(&fx.graph, &expr, &inst).unwrap(), expr);
    }

    #[test]
    fn units_sharing_a_display_name_are_conflated() {
        let mut fx = fixture();
        let twin_unit = fx.graph.add_unit("Acme.dll", "Acme.Twin");
        let twin = fx
            .graph
            .add_type(twin_unit, "Twin", "Box`1", TypeVisibility::Public);
        fx.graph.add_generic_param(twin, "T");

        let inst = container_of(&fx, TypeRef::simple(fx.string));
        assert_eq!(
            substitute(&fx.graph, &TypeRef::parameter(twin, 0), &inst).unwrap(),
            TypeRef::simple(fx.string)
        );
    }

    #[test]
    fn unit_names_compare_case_sensitively() {
        let mut fx = fixture();
        let lower_unit = fx.graph.add_unit("acme.dll", "acme");
        let lower = fx
            .graph
            .add_type(lower_unit, "acme", "Box`1", TypeVisibility::Public);
        fx.graph.add_generic_param(lower, "T");

        let expr = TypeRef::parameter(lower, 0);
        let inst = container_of(&fx, TypeRef::simple(fx.string));
        assert_eq!(substitute(&fx.graph, &expr, &inst).unwrap(), expr);
    }

    #[test]
    fn malformed_instantiations_are_fatal() {
        let fx = fixture();
        let expr = TypeRef::parameter(fx.container, 0);

        let not_generic = TypeRef::simple(fx.container);
        assert!(matches!(
            substitute(&fx.graph, &expr, &not_generic),
            Err(SubstitutionError::NotAnInstantiation { .. })
        ));

        let dangling = TypeRef::generic_instance(
            TypeRef::simple(TypeDefId::new(500)),
            vec![TypeRef::simple(fx.string)],
        );
        assert_eq!(
            substitute(&fx.graph, &expr, &dangling),
            Err(SubstitutionError::UnresolvedElement {
                element: "<unresolved #500>".to_string(),
            })
        );

        let wrong_arity = TypeRef::generic_instance(
            TypeRef::simple(fx.container),
            vec![TypeRef::simple(fx.string), TypeRef::simple(fx.int)],
        );
        assert!(matches!(
            substitute(&fx.graph, &expr, &wrong_arity),
            Err(SubstitutionError::ArgumentCountMismatch {
                expected: 1,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn unresolved_parameter_owner_is_fatal() {
        let fx = fixture();
        let expr = TypeRef::parameter(TypeDefId::new(77), 0).pointer();
        let inst = container_of(&fx, TypeRef::simple(fx.string));
        assert_eq!(
            substitute(&fx.graph, &expr, &inst),
            Err(SubstitutionError::UnresolvedParameterOwner {
                owner: 77,
                position: 0,
            })
        );
    }

    #[test]
    fn signature_is_rewritten_with_one_binding_list() {
        let fx = fixture();
        let inst = container_of(&fx, TypeRef::simple(fx.int));
        let signature = vec![
            TypeRef::parameter(fx.container, 0).by_ref(),
            TypeRef::simple(fx.string),
            TypeRef::generic_instance(
                TypeRef::simple(fx.list),
                vec![TypeRef::parameter(fx.container, 0)],
            ),
        ];
        let rewritten = substitute_all(&fx.graph, &signature, &inst).unwrap();
        assert_eq!(
            rewritten,
            vec![
                TypeRef::simple(fx.int).by_ref(),
                TypeRef::simple(fx.string),
                TypeRef::generic_instance(TypeRef::simple(fx.list), vec![TypeRef::simple(fx.int)]),
            ]
        );

        let substitution = Substitution::for_instance(&fx.graph, &inst).unwrap();
        assert_eq!(substitution.bindings().len(), 1);
        assert_eq!(
            substitution.apply(&signature[0]).unwrap().kind(),
            TypeRefKind::ByRef
        );
    }
}
