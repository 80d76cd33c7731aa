//! Containers for static storage of type information.
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] holding one [`TypeInfo`].
//! - [`GenericTypeInfoCell`] / [`GenericTypePathCell`]: a `static` inside a
//!   generic function is shared by every instantiation, so these key their
//!   entries by [`TypeId`].
//!
//! Entries of generic cells are leaked and live for the rest of the program.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use fm_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::{String, TypeInfo};

    pub trait TypedProperty: Send + Sync + 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic type information.
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Container for the [`TypeInfo`] of a non-generic type.
///
/// ## Example
///
/// ```
/// use fm_reflect::{
///     impls::NonGenericTypeInfoCell,
///     info::{OpaqueInfo, TypeInfo, TypePath, Typed},
/// };
///
/// struct Celsius(f32);
///
/// impl TypePath for Celsius {
///     fn type_path() -> &'static str { "units::Celsius" }
///     fn type_name() -> &'static str { "Celsius" }
///     fn module_path() -> Option<&'static str> { Some("units") }
/// }
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Celsius::type_info(), Celsius::type_info()));
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, initializing it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

impl<T: TypedProperty> Default for NonGenericTypeCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Container for static storage of type information with generics.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Container for the [`TypeInfo`] of a generic type.
///
/// Used by the derive macro and by the `Option<T>`, `Vec<T>` and `Box<T>`
/// implementations.
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for the type path or name of a generic type.
///
/// ## Example
///
/// ```
/// use fm_reflect::{impls::{self, GenericTypePathCell}, info::TypePath};
///
/// struct Wrapper<T>(T);
///
/// impl<T: TypePath> TypePath for Wrapper<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["demo::Wrapper<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["Wrapper<", T::type_name(), ">"]))
///     }
/// }
///
/// assert_eq!(<Wrapper<i32>>::type_path(), "demo::Wrapper<i32>");
/// assert_eq!(<Wrapper<String>>::type_name(), "Wrapper<String>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for type `G`, generating it with `f` if absent.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // Another thread may have inserted in between; the first entry wins.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

impl<T: TypedProperty> Default for GenericTypeCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
