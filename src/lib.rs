#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use fm_mapper as mapper;
pub use fm_reflect as reflect;
pub use fm_utils as utils;

pub use fm_mapper::{FieldConfig, FieldPolicy, MapError, Mapper, MappingConfig, TypePair};

/// The types most users need, plus the `Reflect` derive.
pub mod prelude {
    pub use fm_mapper::{FieldConfig, FieldPolicy, MapError, Mapper, MappingConfig};
    pub use fm_reflect::Reflect;
    pub use fm_reflect::derive::Reflect;
}
