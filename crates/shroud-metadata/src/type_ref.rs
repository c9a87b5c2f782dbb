// src/type_ref.rs
//
// Type reference trees: the closed set of shapes a type expression can take
// in a member signature.

use shroud_identity::TypeDefId;

/// A node in a type expression.
///
/// Equality and hashing are structural: two trees are equal when every node
/// has the same variant, metadata and children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A declared type used without type arguments
    Simple(TypeDefId),
    /// A generic declared type applied to type arguments (`List<T>`)
    GenericInstance {
        element: Box<TypeRef>,
        args: Vec<TypeRef>,
    },
    /// Unmanaged pointer (`T*`)
    Pointer(Box<TypeRef>),
    /// Managed reference (`ref T`)
    ByRef(Box<TypeRef>),
    /// Array; rank 1 is a vector, higher ranks are multi-dimensional
    Array { element: Box<TypeRef>, rank: u32 },
    /// `modreq` custom modifier
    RequiredModifier {
        element: Box<TypeRef>,
        modifier: Box<TypeRef>,
    },
    /// `modopt` custom modifier
    OptionalModifier {
        element: Box<TypeRef>,
        modifier: Box<TypeRef>,
    },
    /// Vararg sentinel
    Sentinel(Box<TypeRef>),
    /// Pinned local
    Pinned(Box<TypeRef>),
    /// Positional generic parameter declared by `owner`
    GenericParameter { owner: TypeDefId, position: u16 },
}

/// Variant tag of a [`TypeRef`], without children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRefKind {
    Simple,
    GenericInstance,
    Pointer,
    ByRef,
    Array,
    RequiredModifier,
    OptionalModifier,
    Sentinel,
    Pinned,
    GenericParameter,
}

/// Borrowed view of a `GenericInstance` node.
#[derive(Debug, Clone, Copy)]
pub struct Instantiation<'a> {
    pub element: &'a TypeRef,
    pub args: &'a [TypeRef],
}

impl TypeRef {
    pub fn simple(id: TypeDefId) -> Self {
        TypeRef::Simple(id)
    }

    pub fn parameter(owner: TypeDefId, position: u16) -> Self {
        TypeRef::GenericParameter { owner, position }
    }

    pub fn generic_instance(element: TypeRef, args: Vec<TypeRef>) -> Self {
        TypeRef::GenericInstance {
            element: Box::new(element),
            args,
        }
    }

    pub fn pointer(self) -> Self {
        TypeRef::Pointer(Box::new(self))
    }

    pub fn by_ref(self) -> Self {
        TypeRef::ByRef(Box::new(self))
    }

    /// Array of this element type. Rank 0 is treated as rank 1.
    pub fn array(self, rank: u32) -> Self {
        TypeRef::Array {
            element: Box::new(self),
            rank: rank.max(1),
        }
    }

    pub fn required_modifier(self, modifier: TypeRef) -> Self {
        TypeRef::RequiredModifier {
            element: Box::new(self),
            modifier: Box::new(modifier),
        }
    }

    pub fn optional_modifier(self, modifier: TypeRef) -> Self {
        TypeRef::OptionalModifier {
            element: Box::new(self),
            modifier: Box::new(modifier),
        }
    }

    pub fn sentinel(self) -> Self {
        TypeRef::Sentinel(Box::new(self))
    }

    pub fn pinned(self) -> Self {
        TypeRef::Pinned(Box::new(self))
    }

    pub fn kind(&self) -> TypeRefKind {
        match self {
            TypeRef::Simple(_) => TypeRefKind::Simple,
            TypeRef::GenericInstance { .. } => TypeRefKind::GenericInstance,
            TypeRef::Pointer(_) => TypeRefKind::Pointer,
            TypeRef::ByRef(_) => TypeRefKind::ByRef,
            TypeRef::Array { .. } => TypeRefKind::Array,
            TypeRef::RequiredModifier { .. } => TypeRefKind::RequiredModifier,
            TypeRef::OptionalModifier { .. } => TypeRefKind::OptionalModifier,
            TypeRef::Sentinel(_) => TypeRefKind::Sentinel,
            TypeRef::Pinned(_) => TypeRefKind::Pinned,
            TypeRef::GenericParameter { .. } => TypeRefKind::GenericParameter,
        }
    }

    /// View this node as a generic instantiation, if it is one.
    pub fn as_instantiation(&self) -> Option<Instantiation<'_>> {
        match self {
            TypeRef::GenericInstance { element, args } => Some(Instantiation {
                element,
                args: args.as_slice(),
            }),
            _ => None,
        }
    }

    /// Direct children in substitution order: element first, then arguments
    /// or the modifier type.
    pub fn children(&self) -> Vec<&TypeRef> {
        match self {
            TypeRef::Simple(_) | TypeRef::GenericParameter { .. } => Vec::new(),
            TypeRef::GenericInstance { element, args } => {
                let mut out = Vec::with_capacity(args.len() + 1);
                out.push(element.as_ref());
                out.extend(args.iter());
                out
            }
            TypeRef::Pointer(elem)
            | TypeRef::ByRef(elem)
            | TypeRef::Sentinel(elem)
            | TypeRef::Pinned(elem)
            | TypeRef::Array { element: elem, .. } => vec![elem.as_ref()],
            TypeRef::RequiredModifier { element, modifier }
            | TypeRef::OptionalModifier { element, modifier } => {
                vec![element.as_ref(), modifier.as_ref()]
            }
        }
    }

    /// True when any `GenericParameter` leaf occurs in this tree.
    pub fn has_generic_parameters(&self) -> bool {
        match self {
            TypeRef::GenericParameter { .. } => true,
            TypeRef::Simple(_) => false,
            _ => self.children().into_iter().any(TypeRef::has_generic_parameters),
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(TypeRef::node_count)
            .sum::<usize>()
    }
}
