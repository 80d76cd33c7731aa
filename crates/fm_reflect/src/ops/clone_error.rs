use alloc::borrow::Cow;
use core::{error, fmt};

/// An enumeration of the error outcomes of
/// [`reflect_clone`](crate::Reflect::reflect_clone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectCloneError {
    /// The type does not support cloning through reflection.
    NotSupport { type_path: Cow<'static, str> },
    /// A field hidden from reflection cannot be rebuilt.
    ///
    /// Mark the type `#[reflect(clone)]` to clone it through [`Clone`].
    FieldNotCloneable {
        type_path: Cow<'static, str>,
        field: Cow<'static, str>,
    },
}

impl fmt::Display for ReflectCloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupport { type_path } => {
                write!(f, "`reflect_clone` not supported for `{type_path}`")
            }
            Self::FieldNotCloneable { type_path, field } => {
                write!(
                    f,
                    "field `{type_path}::{field}` cannot be cloned through reflection"
                )
            }
        }
    }
}

impl error::Error for ReflectCloneError {}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::ToString;

    use super::ReflectCloneError;

    #[test]
    fn display() {
        let err = ReflectCloneError::FieldNotCloneable {
            type_path: Cow::Borrowed("hr::Session"),
            field: Cow::Borrowed("started"),
        };
        assert_eq!(
            err.to_string(),
            "field `hr::Session::started` cannot be cloned through reflection"
        );
    }
}
