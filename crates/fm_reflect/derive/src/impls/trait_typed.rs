use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Typed`.
///
/// The `StructInfo` lists the reflected fields in declaration order.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let fm_reflect_path = &info.fm_reflect_path;
    let typed_ = crate::path::typed_(fm_reflect_path);
    let type_info_ = crate::path::type_info_(fm_reflect_path);
    let struct_info_ = crate::path::struct_info_(fm_reflect_path);
    let named_field_ = crate::path::named_field_(fm_reflect_path);

    let fields = info.active_fields().map(|field| {
        let ty = field.ty;
        let name = field.name();
        quote!(#named_field_::new::<#ty>(#name))
    });

    let type_info_tokens = quote! {
        #type_info_::Struct(#struct_info_::new::<Self>(&[
            #(#fields),*
        ]))
    };

    let inner_cell_tokens = if info.is_generic() {
        let info_cell = crate::path::generic_type_info_cell_(fm_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(fm_reflect_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics(true);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}
