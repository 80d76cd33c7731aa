//! Static type information.
//!
//! - [`TypePath`]: stable type names, without a leading `::`.
//! - [`Type`]: a `TypeId` paired with the type's path functions.
//! - [`TypeInfo`]: what kind of type this is, and its shape:
//!     - [`StructInfo`]: named fields in declaration order.
//!     - [`PointerInfo`]: the pointee's type information.
//!     - [`OpaqueInfo`]: nothing beyond the type itself.
//! - [`NamedField`]: a struct field's name and type.
//! - [`Typed`] / [`DynamicTyped`]: static and dynamic access to [`TypeInfo`].

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
