use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use fm_macro_utils::full_path::ResultFP;

/// Generate implementation code for `Reflect` of a struct.
///
/// `try_apply` replaces `self` with a clone of a value of the same type and
/// otherwise copies same-named fields; `reflect_debug` prints the reflected
/// fields only.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let fm_reflect_path = &info.fm_reflect_path;
    let reflect_ = crate::path::reflect_(fm_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(fm_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(fm_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(fm_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(fm_reflect_path);
    let apply_error_ = crate::path::apply_error_(fm_reflect_path);
    let struct_try_apply_ = crate::path::struct_try_apply_(fm_reflect_path);
    let struct_debug_ = crate::path::struct_debug_(fm_reflect_path);

    let reflect_clone_tokens = super::impl_struct_clone(info);

    let ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            #[inline]
            fn try_apply(&mut self, value: &dyn #reflect_) -> #ResultFP<(), #apply_error_> {
                #struct_try_apply_(self, value)
            }

            #reflect_clone_tokens

            #[inline]
            fn reflect_debug(
                &self,
                f: &mut #macro_utils_::Formatter<'_>,
            ) -> #macro_utils_::FmtResult {
                #struct_debug_(self, f)
            }
        }
    }
}
