use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectStruct;
use fm_macro_utils::full_path::OptionFP;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let type_path_trait_tokens = impl_trait_type_path(info);
    let typed_trait_tokens = impl_trait_typed(info);
    let struct_trait_tokens = impl_trait_struct(info);
    let reflect_trait_tokens = impl_trait_reflect(info);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let fm_reflect_path = &info.fm_reflect_path;
    let struct_ = crate::path::struct_(fm_reflect_path);
    let reflect_ = crate::path::reflect_(fm_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(fm_reflect_path);
    let option_ = OptionFP.to_token_stream();

    let field_names = info.active_fields().map(|field| field.name()).collect::<Vec<_>>();
    let field_idents = info.active_fields().map(|field| field.ident).collect::<Vec<_>>();
    let field_indices = (0..field_names.len()).collect::<Vec<usize>>();
    let field_count = field_names.len();

    let fields_ref = field_idents
        .iter()
        .map(|ident| quote!(&self.#ident as &dyn #reflect_))
        .collect::<Vec<_>>();
    let fields_mut = field_idents
        .iter()
        .map(|ident| quote!(&mut self.#ident as &mut dyn #reflect_))
        .collect::<Vec<_>>();

    let ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_ref),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Some(#fields_mut),)*
                    _ => #option_::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#field_indices => #option_::Some(#field_names),)*
                    _ => #option_::None,
                }
            }

            fn index_of(&self, name: &str) -> #option_<usize> {
                match name {
                    #(#field_names => #option_::Some(#field_indices),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}
