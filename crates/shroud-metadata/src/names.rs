// src/names.rs
//
// Human-readable, nesting-aware names for declared types and type references.
// Used for rule matching against type-name criteria and for diagnostics.

use std::fmt::Write;

use shroud_identity::TypeDefId;

use crate::defs::TypeOwner;
use crate::graph::TypeGraph;
use crate::type_ref::TypeRef;

/// Separators used when building qualified names. All values are fixed.
#[derive(Debug, Clone, Copy)]
pub struct NameStyle {
    /// Between namespace and the outermost type name
    pub namespace_separator: &'static str,
    /// Between a declaring type and the type nested in it
    pub nesting_separator: &'static str,
}

impl NameStyle {
    /// The style rule files are written against: `Ns.Outer/Inner`.
    pub const CANONICAL: NameStyle = NameStyle {
        namespace_separator: ".",
        nesting_separator: "/",
    };
}

impl Default for NameStyle {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Fully qualified name of a declared type, e.g. `Acme.Outer/Inner`.
pub fn qualified_name(graph: &TypeGraph, ty: TypeDefId) -> String {
    qualified_name_with(graph, ty, &NameStyle::CANONICAL)
}

/// Fully qualified name using explicit separators.
///
/// A top-level type always gets the namespace separator, so a type in the
/// global namespace is named `.Name`.
pub fn qualified_name_with(graph: &TypeGraph, ty: TypeDefId, style: &NameStyle) -> String {
    let mut nested: Vec<&str> = Vec::new();
    let mut current = graph.type_def(ty);
    let namespace = loop {
        match &current.owner {
            TypeOwner::Nested(parent) => {
                nested.push(current.name.as_str());
                current = graph.type_def(*parent);
            }
            TypeOwner::Namespace(ns) => break ns.as_str(),
        }
    };

    let mut out = String::with_capacity(namespace.len() + current.name.len() + 1);
    out.push_str(namespace);
    out.push_str(style.namespace_separator);
    out.push_str(&current.name);
    for name in nested.iter().rev() {
        out.push_str(style.nesting_separator);
        out.push_str(name);
    }
    out
}

/// Display name of the unit attached to a type: its assembly's simple name.
pub fn host_unit_name(graph: &TypeGraph, ty: TypeDefId) -> &str {
    &graph.unit_of(ty).assembly_name
}

/// Render a type expression for diagnostics, e.g. `Acme.Map`2<K,System.String[]>`.
pub fn display_type(graph: &TypeGraph, ty: &TypeRef) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_type(graph, ty, &mut out);
    out
}

fn write_type(graph: &TypeGraph, ty: &TypeRef, out: &mut String) -> std::fmt::Result {
    match ty {
        TypeRef::Simple(id) => match graph.try_type_def(*id) {
            Some(_) => out.push_str(&qualified_name(graph, *id)),
            None => write!(out, "<unresolved #{}>", id.index())?,
        },
        TypeRef::GenericInstance { element, args } => {
            write_type(graph, element, out)?;
            out.push('<');
            for (idx, arg) in args.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_type(graph, arg, out)?;
            }
            out.push('>');
        }
        TypeRef::Pointer(elem) => {
            write_type(graph, elem, out)?;
            out.push('*');
        }
        TypeRef::ByRef(elem) => {
            write_type(graph, elem, out)?;
            out.push('&');
        }
        TypeRef::Array { element, rank } => {
            write_type(graph, element, out)?;
            out.push('[');
            for _ in 1..*rank {
                out.push(',');
            }
            out.push(']');
        }
        TypeRef::RequiredModifier { element, modifier } => {
            write_type(graph, element, out)?;
            out.push_str(" modreq(");
            write_type(graph, modifier, out)?;
            out.push(')');
        }
        TypeRef::OptionalModifier { element, modifier } => {
            write_type(graph, element, out)?;
            out.push_str(" modopt(");
            write_type(graph, modifier, out)?;
            out.push(')');
        }
        TypeRef::Sentinel(elem) => {
            write_type(graph, elem, out)?;
            out.push_str(" sentinel");
        }
        TypeRef::Pinned(elem) => {
            write_type(graph, elem, out)?;
            out.push_str(" pinned");
        }
        TypeRef::GenericParameter { owner, position } => {
            let param = graph
                .try_type_def(*owner)
                .and_then(|t| t.generic_params.get(*position as usize));
            match param {
                Some(param) => out.push_str(&param.name),
                None => write!(out, "!{}", position)?,
            }
        }
    }
    Ok(())
}
