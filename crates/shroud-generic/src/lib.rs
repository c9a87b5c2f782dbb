// src/lib.rs
//
// Type substitution engine: rewrites type reference trees under a generic
// instantiation.

mod binding;
mod errors;
mod substitute;

pub use binding::{Binding, BindingKey};
pub use errors::SubstitutionError;
pub use substitute::{Substitution, substitute, substitute_all};
