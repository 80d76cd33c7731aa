use core::any::{Any, TypeId};

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// A stable alternative to [`core::any::type_name`]: derived types use
/// `module_path!()`, and `#[reflect(type_path = "...")]` pins the path so it
/// survives moving the definition.
///
/// - [`type_path`]: full path, unique per type.
/// - [`type_name`]: the path without its module prefix, may be duplicated.
/// - [`module_path`]: the module prefix, if any.
///
/// None of these start with `::`.
///
/// # Examples
///
/// ```
/// use fm_reflect::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect)]
/// #[reflect(type_path = "hr::model::Employee")]
/// struct Employee { id: u32 }
///
/// assert_eq!(Employee::type_path(), "hr::model::Employee");
/// assert_eq!(Employee::type_name(), "Employee");
/// assert_eq!(Employee::module_path(), Some("hr::model"));
///
/// assert_eq!(<Option<u32>>::type_path(), "core::option::Option<u32>");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the type.
    fn type_path() -> &'static str;

    /// Returns the type name without its module path.
    fn type_name() -> &'static str;

    /// Returns the module path the type lives in.
    ///
    /// Primitive types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`].
///
/// Automatically implemented for every type implementing [`TypePath`].
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the type's [`TypePath`] functions.
///
/// Equality and hashing only look at the [`TypeId`].
///
/// # Examples
///
/// ```
/// use fm_reflect::info::Type;
///
/// let ty = Type::of::<String>();
///
/// assert!(ty.is::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// assert_eq!(ty.name(), "String");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl Type {
    /// Creates the `Type` of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
            module_path: T::module_path,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl core::fmt::Debug for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `ty`, `ty_id`, `type_is`, `type_path` and `type_name` for info
/// structs holding a `Type` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.$field.name()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Type, TypePath};

    #[test]
    fn primitive_paths() {
        assert_eq!(u8::type_path(), "u8");
        assert_eq!(u8::type_name(), "u8");
        assert_eq!(u8::module_path(), None);
        assert_eq!(<&'static str>::type_path(), "&str");
    }

    #[test]
    fn generic_paths_are_composed() {
        assert_eq!(
            <Vec<Option<String>>>::type_path(),
            "alloc::vec::Vec<core::option::Option<alloc::string::String>>"
        );
        assert_eq!(<Vec<Option<String>>>::type_name(), "Vec<Option<String>>");
        assert_eq!(<Box<i64>>::module_path(), Some("alloc::boxed"));
    }

    #[test]
    fn type_eq_by_id() {
        assert_eq!(Type::of::<u32>(), Type::of::<u32>());
        assert_ne!(Type::of::<u32>(), Type::of::<i32>());
    }
}
