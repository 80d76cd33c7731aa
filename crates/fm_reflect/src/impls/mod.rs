//! Utilities for implementing the reflection traits, and the built-in
//! implementations.
//!
//! - [`concat`]: string concatenation for generic type paths.
//! - [`NonGenericTypeInfoCell`]: caches the [`TypeInfo`] of a non-generic type.
//! - [`GenericTypePathCell`] / [`GenericTypeInfoCell`]: the same for generic types.
//! - [`struct_try_apply`] / [`struct_debug`]: struct implementations of
//!   [`Reflect::try_apply`] and [`Reflect::reflect_debug`].
//!
//! ## Implemented Menu
//!
//! - opaque: `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`,
//!   `f32`, `f64`, `&'static str`, `String`, `Option<T>`, `Vec<T>`
//! - pointer: `Box<T>`
//!
//! [`Reflect::try_apply`]: crate::Reflect::try_apply
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod alloc;
mod core;
mod native;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell};
pub use cell::{NonGenericTypeCell, NonGenericTypeInfoCell};

pub use utils::*;

/// String concatenation with a single allocation.
///
/// Used to build the paths of generic types.
///
/// # Example
///
/// ```
/// use fm_reflect::impls;
///
/// let s = impls::concat(&["alloc::vec::Vec", "<", "u8", ">"]);
///
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
