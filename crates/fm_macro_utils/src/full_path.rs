//! Fully qualified paths of prelude items.
//!
//! Generated code must not rely on the caller's prelude: a user type named
//! `Option` would otherwise shadow `core::option::Option`.
//!
//! ```
//! use fm_macro_utils::full_path::OptionFP;
//! use quote::quote;
//!
//! let tokens = quote! { #OptionFP<u8> };
//! assert_eq!(tokens.to_string(), ":: core :: option :: Option < u8 >");
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! full_path {
    ($($(#[$attr:meta])* $name:ident => $path:path;)*) => {$(
        $(#[$attr])*
        pub struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($path));
            }
        }
    )*};
}

full_path! {
    /// `::core::option::Option`
    OptionFP => ::core::option::Option;
    /// `::core::result::Result`
    ResultFP => ::core::result::Result;
    /// `::core::marker::Send`
    SendFP => ::core::marker::Send;
    /// `::core::marker::Sync`
    SyncFP => ::core::marker::Sync;
    /// `::core::clone::Clone`
    CloneFP => ::core::clone::Clone;
}
