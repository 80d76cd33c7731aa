#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Inside this crate the derive macro still emits `::fm_reflect::...` paths,
// which only resolve through this alias.
extern crate self as fm_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use fm_reflect_derive as derive;
pub use reflection::Reflect;
