//! Paths into `fm_reflect` used by the generated code.
//!
//! The crate root is resolved from the caller's `Cargo.toml`, see
//! [`fm_reflect`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `fm_reflect` crate.
///
/// 1. For crates that depend on `fm_reflect`, `::fm_reflect` is returned.
/// 2. For crates that depend on `fieldmap`, `::fieldmap::reflect` is returned.
/// 3. Otherwise `::fm_reflect` is returned, which may be incorrect.
///
/// Reading the manifest is relatively expensive, so the path is resolved
/// once per derive and passed around.
pub(crate) fn fm_reflect() -> syn::Path {
    fm_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("fm_reflect"))
}

// -----------------------------------------------------------------------------
// Items

macro_rules! item_path {
    ($($name:ident => $($segment:ident)::+;)*) => {$(
        #[inline(always)]
        pub(crate) fn $name(fm_reflect_path: &syn::Path) -> TokenStream {
            quote! { #fm_reflect_path $(::$segment)+ }
        }
    )*};
}

item_path! {
    reflect_ => Reflect;
    macro_utils_ => __macro_exports::macro_utils;

    type_path_ => info::TypePath;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    struct_info_ => info::StructInfo;
    named_field_ => info::NamedField;
    reflect_kind_ => info::ReflectKind;

    struct_ => ops::Struct;
    struct_field_iter_ => ops::StructFieldIter;
    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;
    apply_error_ => ops::ApplyError;
    reflect_clone_error_ => ops::ReflectCloneError;

    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
    generic_type_path_cell_ => impls::GenericTypePathCell;
    concat_ => impls::concat;
    struct_try_apply_ => impls::struct_try_apply;
    struct_debug_ => impls::struct_debug;
}
