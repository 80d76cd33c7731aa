use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::ReflectStruct;
use fm_macro_utils::full_path::{CloneFP, ResultFP};

/// Generate `Reflect::reflect_clone` tokens.
///
/// - `#[reflect(clone)]`: `Clone::clone`.
/// - No ignored field: rebuild `Self` from each field's `reflect_clone`.
/// - Otherwise: always `Err(FieldNotCloneable)` naming the first ignored field.
pub(crate) fn impl_struct_clone(info: &ReflectStruct) -> TokenStream {
    let fm_reflect_path = &info.fm_reflect_path;
    let macro_utils_ = crate::path::macro_utils_(fm_reflect_path);
    let reflect_ = crate::path::reflect_(fm_reflect_path);
    let reflect_clone_error_ = crate::path::reflect_clone_error_(fm_reflect_path);
    let type_path_ = crate::path::type_path_(fm_reflect_path);

    if let Some(span) = info.attrs.clone {
        return quote_spanned! { span =>
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Ok(#macro_utils_::Box::new(<Self as #CloneFP>::clone(self)))
            }
        };
    }

    if let Some(field) = info.fields().iter().find(|field| field.attrs.ignore) {
        let name = field.name();
        return quote! {
            #[inline]
            fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
                #ResultFP::Err(#reflect_clone_error_::FieldNotCloneable {
                    type_path: #macro_utils_::Cow::Borrowed(<Self as #type_path_>::type_path()),
                    field: #macro_utils_::Cow::Borrowed(#name),
                })
            }
        };
    }

    let members = info.fields().iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        quote! {
            #ident: #macro_utils_::__reflect_clone_field::<#ty>(&self.#ident)?,
        }
    });

    quote! {
        fn reflect_clone(&self) -> #ResultFP<#macro_utils_::Box<dyn #reflect_>, #reflect_clone_error_> {
            #ResultFP::Ok(#macro_utils_::Box::new(Self {
                #(#members)*
            }))
        }
    }
}
