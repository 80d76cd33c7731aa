use core::any::TypeId;
use core::{error, fmt};

use crate::info::{OpaqueInfo, PointerInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Obtained via [`Reflect::reflect_kind`](crate::Reflect::reflect_kind) or
/// [`TypeInfo::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A struct with named fields.
    Struct,
    /// An owning pointer to one reflected value.
    Pointer,
    /// A value without reflected inner structure.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a value is not the expected [`ReflectKind`].
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information of a reflected type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info) when
/// the type is known, or [`DynamicTyped::reflect_type_info`] from a
/// `dyn Reflect`.
///
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Converts [`TypeInfo`] to the kind-specific information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the [`ReflectKind`] of the type.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty().id()
    }

    #[inline]
    pub fn type_is<T: core::any::Any>(&self) -> bool {
        self.ty().is::<T>()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    #[inline]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    /// Follows pointer info down to the first non-pointer type.
    ///
    /// # Examples
    ///
    /// ```
    /// use fm_reflect::info::Typed;
    ///
    /// let info = <Box<Box<u16>>>::type_info();
    ///
    /// assert!(info.is_pointer());
    /// assert!(info.innermost().type_is::<u16>());
    /// ```
    pub fn innermost(&'static self) -> &'static TypeInfo {
        let mut info = self;
        while let Self::Pointer(ptr) = info {
            info = ptr.pointee_info();
        }
        info
    }
}
