use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Ident, Type};

use super::{FieldAttributes, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The field name as a string literal.
    pub fn name(&self) -> String {
        self.ident.to_string()
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A parsed struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    pub fm_reflect_path: syn::Path,
    pub input: &'a DeriveInput,
    pub attrs: TypeAttributes,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        const UNSUPPORTED: &str = "`#[derive(Reflect)]` only supports structs with named fields";

        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new_spanned(&input.ident, UNSUPPORTED));
                }
            },
            Data::Enum(_) | Data::Union(_) => {
                return Err(syn::Error::new_spanned(&input.ident, UNSUPPORTED));
            }
        };

        for param in &input.generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(_) | GenericParam::Const(_) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "`#[derive(Reflect)]` only supports type parameters",
                    ));
                }
            }
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new_spanned(field, UNSUPPORTED));
            };
            fields.push(StructField {
                ident,
                ty: &field.ty,
                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
            });
        }

        Ok(Self {
            fm_reflect_path: crate::path::fm_reflect(),
            input,
            attrs,
            fields,
        })
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        &self.input.ident
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        self.input.generics.type_params().next().is_some()
    }

    /// All fields, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields visible to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.attrs.ignore)
    }

    /// Returns `(impl_generics, ty_generics, where_clause)`.
    ///
    /// Every type parameter gets a `TypePath` bound. With
    /// `add_reflect_bounds`, each reflected field type also gets
    /// `Reflect + Typed`, and `Self` gets `Send + Sync` (plus `Clone` under
    /// `#[reflect(clone)]`).
    pub fn split_generics(
        &self,
        add_reflect_bounds: bool,
    ) -> (syn::ImplGenerics<'_>, syn::TypeGenerics<'_>, TokenStream) {
        use fm_macro_utils::full_path::{CloneFP, SendFP, SyncFP};

        let generics = &self.input.generics;
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let mut predicates = Vec::new();
        if let Some(where_clause) = where_clause {
            predicates.extend(where_clause.predicates.iter().map(|p| quote!(#p)));
        }

        if self.is_generic() {
            let type_path_ = crate::path::type_path_(&self.fm_reflect_path);
            predicates.extend(generics.type_params().map(|param| {
                let ident = &param.ident;
                quote!(#ident: #type_path_)
            }));

            if add_reflect_bounds {
                let reflect_ = crate::path::reflect_(&self.fm_reflect_path);
                let typed_ = crate::path::typed_(&self.fm_reflect_path);
                predicates.push(quote!(Self: #SendFP + #SyncFP));
                if self.attrs.clone.is_some() {
                    predicates.push(quote!(Self: #CloneFP));
                }
                predicates.extend(self.active_fields().map(|field| {
                    let ty = field.ty;
                    quote!(#ty: #reflect_ + #typed_)
                }));
            }
        }

        let where_clause = if predicates.is_empty() {
            TokenStream::new()
        } else {
            quote! { where #(#predicates,)* }
        };

        (impl_generics, ty_generics, where_clause)
    }
}
