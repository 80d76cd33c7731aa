#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod config;
mod error;
mod mapper;
mod pair;

pub mod registry;

// -----------------------------------------------------------------------------
// Top-level exports

pub use config::{FieldConfig, MappingConfig};
pub use error::MapError;
pub use mapper::{FieldPolicy, Mapper, MapperBuilder};
pub use pair::TypePair;
pub use registry::ConfigRegistry;
