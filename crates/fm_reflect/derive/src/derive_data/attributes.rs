use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type-level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "...")]`
    pub type_path: Option<LitStr>,
    /// `#[reflect(clone)]`: `reflect_clone` goes through `Clone`.
    pub clone: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if res.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    validate_type_path(&lit)?;
                    res.type_path = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("clone") {
                    if res.clone.is_some() {
                        return Err(meta.error("duplicate `clone` attribute"));
                    }
                    res.clone = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported attribute, expected `type_path = \"...\"` or `clone`",
                    ))
                }
            })?;
        }

        Ok(res)
    }
}

fn validate_type_path(lit: &LitStr) -> syn::Result<()> {
    let path = lit.value();
    if path.is_empty() || path.starts_with("::") || path.ends_with("::") {
        return Err(syn::Error::new(
            lit.span(),
            "`type_path` must be a non-empty path without leading or trailing `::`",
        ));
    }
    if path.contains(['<', '>']) {
        return Err(syn::Error::new(
            lit.span(),
            "`type_path` must not contain generics, they are appended automatically",
        ));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field-level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(ignore)]`
    pub ignore: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    res.ignore = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported attribute, expected `ignore`"))
                }
            })?;
        }

        Ok(res)
    }
}
