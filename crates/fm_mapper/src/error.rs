use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Error returned by [`Mapper::map`](crate::Mapper::map).
///
/// Whatever the variant, the destination has not been modified.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MapError {
    /// The destination is neither a struct nor a pointer to one.
    #[error("destination must be a pointer to a struct, found `{type_path}`")]
    DestinationType { type_path: &'static str },

    /// The source is neither a struct nor a pointer to one.
    #[error("source must be a struct or pointer to a struct, found `{type_path}`")]
    SourceType { type_path: &'static str },

    /// A source field has a different type than the destination field it
    /// maps to. Only raised under [`FieldPolicy::Strict`](crate::FieldPolicy::Strict).
    #[error("field `{field}` cannot be assigned from `{source_type}` to `{destination_type}`")]
    FieldType {
        field: &'static str,
        source_type: &'static str,
        destination_type: &'static str,
    },

    /// A field of the right type holds a value that cannot be copied whole,
    /// see [`Reflect::reflect_clone`](fm_reflect::Reflect::reflect_clone).
    /// Only raised under [`FieldPolicy::Strict`](crate::FieldPolicy::Strict).
    #[error("field `{field}` of type `{type_path}` cannot be cloned")]
    FieldClone {
        field: &'static str,
        type_path: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::MapError;

    #[test]
    fn messages() {
        let err = MapError::DestinationType { type_path: "i32" };
        assert_eq!(err.to_string(), "destination must be a pointer to a struct, found `i32`");

        let err = MapError::FieldType {
            field: "salary",
            source_type: "u32",
            destination_type: "alloc::string::String",
        };
        assert_eq!(
            err.to_string(),
            "field `salary` cannot be assigned from `u32` to `alloc::string::String`"
        );

        let err = MapError::FieldClone {
            field: "session",
            type_path: "hr::Session",
        };
        assert_eq!(err.to_string(), "field `session` of type `hr::Session` cannot be cloned");
    }
}
