use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use fm_macro_utils::full_path::OptionFP;

/// Generate implementation codes for `TypePath`.
///
/// Non-generic types return string constants. Generic types compose their
/// path from the parameters' paths once per instantiation and cache it in a
/// `GenericTypePathCell`.
pub(crate) fn impl_trait_type_path(info: &ReflectStruct) -> TokenStream {
    let fm_reflect_path = &info.fm_reflect_path;
    let type_path_ = crate::path::type_path_(fm_reflect_path);
    let ident = info.ident();
    let ident_str = ident.to_string();

    // (base path, module path)
    let (base_path, module_path) = match &info.attrs.type_path {
        Some(lit) => {
            let path = lit.value();
            let module = path.rsplit_once("::").map(|(module, _)| module.to_owned());
            let module_path = match module {
                Some(module) => quote!(#OptionFP::Some(#module)),
                None => quote!(#OptionFP::None),
            };
            (quote!(#lit), module_path)
        }
        None => (
            quote!(::core::concat!(::core::module_path!(), "::", #ident_str)),
            quote!(#OptionFP::Some(::core::module_path!())),
        ),
    };

    let base_name = match &info.attrs.type_path {
        Some(lit) => {
            let path = lit.value();
            let name = path.rsplit_once("::").map_or(path.as_str(), |(_, name)| name);
            quote!(#name)
        }
        None => quote!(#ident_str),
    };

    let (type_path, type_name, inline_flag) = if info.is_generic() {
        let type_params = info
            .input
            .generics
            .type_params()
            .map(|param| &param.ident)
            .collect::<Vec<_>>();
        (
            path_cell(info, &base_path, &type_params, quote!(type_path)),
            path_cell(info, &base_name, &type_params, quote!(type_name)),
            TokenStream::new(),
        )
    } else {
        (base_path, base_name, quote! { #[inline] })
    };

    let (impl_generics, ty_generics, where_clause) = info.split_generics(false);

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn module_path() -> #OptionFP<&'static str> {
                #module_path
            }
        }
    }
}

/// `base<P0::method(), P1::method(), ...>` cached per instantiation.
fn path_cell(
    info: &ReflectStruct,
    base: &TokenStream,
    type_params: &[&syn::Ident],
    method: TokenStream,
) -> TokenStream {
    let fm_reflect_path = &info.fm_reflect_path;
    let path_cell_ = crate::path::generic_type_path_cell_(fm_reflect_path);
    let type_path_ = crate::path::type_path_(fm_reflect_path);
    let concat_ = crate::path::concat_(fm_reflect_path);

    let mut parts = Vec::with_capacity(type_params.len() * 2 + 2);
    parts.push(base.clone());
    for (index, param) in type_params.iter().enumerate() {
        let sep = if index == 0 { "<" } else { ", " };
        parts.push(quote!(#sep));
        parts.push(quote!(<#param as #type_path_>::#method()));
    }
    parts.push(quote!(">"));

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #concat_(&[#(#parts),*])
        })
    }
}
