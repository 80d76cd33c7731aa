//! Items referenced by code generated from `fm_reflect_derive`.
//!
//! Not part of the public API.

#[doc(hidden)]
pub mod macro_utils {
    pub use alloc::borrow::Cow;
    pub use alloc::boxed::Box;
    pub use core::fmt::{Formatter, Result as FmtResult};

    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::ReflectCloneError;

    /// Clones one field of a derived struct through
    /// [`Reflect::reflect_clone`].
    pub fn __reflect_clone_field<T: Reflect + TypePath>(field: &T) -> Result<T, ReflectCloneError> {
        field
            .reflect_clone()?
            .take::<T>()
            .map_err(|_| ReflectCloneError::NotSupport {
                type_path: Cow::Borrowed(T::type_path()),
            })
    }
}
