use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a reflected value.
///
/// # Examples
///
/// ```
/// use fm_reflect::{Reflect, ops::ReflectRef};
///
/// let value = Box::new(5_u64);
///
/// match value.reflect_ref() {
///     ReflectRef::Pointer(inner) => assert!(inner.is::<u64>()),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    /// The pointee of a pointer value.
    Pointer(&'a dyn Reflect),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the struct view, or an error naming the actual kind.
    #[inline]
    pub fn as_struct(self) -> Result<&'a dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: self.kind(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable, kind-specific view of a reflected value.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    /// The pointee of a pointer value.
    Pointer(&'a mut dyn Reflect),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the mutable struct view, or an error naming the actual kind.
    #[inline]
    pub fn as_struct(self) -> Result<&'a mut dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: self.kind(),
            }),
        }
    }
}
