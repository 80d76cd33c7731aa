//! Derive macro for `fm_reflect`.
//!
//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Struct Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed`, `Struct` and
/// `Reflect` for a struct with named fields. Tuple structs, unit structs,
/// enums and unions are rejected.
///
/// Type parameters must implement `TypePath`, and every reflected field type
/// must implement `Reflect` and `Typed`.
///
/// ## Custom Type Path
///
/// By default the type path is `module_path!()` followed by the type name.
/// The path can be pinned instead:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "hr::model::Employee")]
/// struct Employee { /* ... */ }
/// ```
///
/// The path does not include generics; they are appended automatically.
///
/// ## Ignoring Fields
///
/// A field marked `#[reflect(ignore)]` is invisible to reflection: it has no
/// entry in `StructInfo`, and `Struct::field` does not find it. Its type does
/// not need to implement `Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Session {
///     user: String,
///     #[reflect(ignore)]
///     started: std::time::Instant,
/// }
/// ```
///
/// ## Cloning
///
/// `Reflect::reflect_clone` rebuilds the struct from its reflected fields, so
/// it fails for a struct with an ignored field. Mark a `Clone` type
/// `#[reflect(clone)]` to clone it through `Clone` instead, hidden fields
/// included:
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(clone)]
/// struct Session {
///     user: String,
///     #[reflect(ignore)]
///     started: std::time::Instant,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(&ast)
}
