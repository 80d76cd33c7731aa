//! Kind-specific access to reflected values.
//!
//! - [`Struct`]: named field access for structs (e.g. `Employee { .. }`).
//! - [`ReflectRef`] / [`ReflectMut`]: the kind-specific view of a
//!   `dyn Reflect`, obtained through
//!   [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) and
//!   [`Reflect::reflect_mut`](crate::Reflect::reflect_mut).
//! - [`ApplyError`]: failures of [`Reflect::try_apply`](crate::Reflect::try_apply).
//! - [`ReflectCloneError`]: failures of
//!   [`Reflect::reflect_clone`](crate::Reflect::reflect_clone).

// -----------------------------------------------------------------------------
// Modules

mod apply_error;
mod clone_error;
mod kind;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use apply_error::ApplyError;
pub use clone_error::ReflectCloneError;
pub use kind::{ReflectMut, ReflectRef};
pub use struct_ops::{Struct, StructFieldIter};
