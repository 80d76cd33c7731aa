use alloc::borrow::Cow;
use core::{error, fmt};

use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::ReflectCloneError;

/// An enumeration of the error outcomes of
/// [`try_apply`](crate::Reflect::try_apply).
#[derive(Debug)]
pub enum ApplyError {
    /// Tried to apply incompatible types.
    MismatchedTypes {
        from_type: Cow<'static, str>,
        to_type: Cow<'static, str>,
    },
    /// Attempted to apply the wrong [kind](ReflectKind) to a type, e.g. an
    /// opaque value to a struct.
    MismatchedKinds {
        from_kind: ReflectKind,
        to_kind: ReflectKind,
    },
    /// The value has the same type but could not be copied whole.
    NotCloneable(ReflectCloneError),
}

impl ApplyError {
    /// Shorthand for [`ApplyError::MismatchedTypes`] with static paths.
    #[inline]
    pub const fn mismatched_types(from_type: &'static str, to_type: &'static str) -> Self {
        Self::MismatchedTypes {
            from_type: Cow::Borrowed(from_type),
            to_type: Cow::Borrowed(to_type),
        }
    }
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedTypes { from_type, to_type } => {
                write!(f, "attempted to apply `{from_type}` to `{to_type}`")
            }
            Self::MismatchedKinds { from_kind, to_kind } => {
                write!(f, "attempted to apply `{from_kind}` to `{to_kind}`")
            }
            Self::NotCloneable(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl error::Error for ApplyError {}

impl From<ReflectKindError> for ApplyError {
    #[inline]
    fn from(value: ReflectKindError) -> Self {
        Self::MismatchedKinds {
            from_kind: value.received,
            to_kind: value.expected,
        }
    }
}

impl From<ReflectCloneError> for ApplyError {
    #[inline]
    fn from(value: ReflectCloneError) -> Self {
        Self::NotCloneable(value)
    }
}
