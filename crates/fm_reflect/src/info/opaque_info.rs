use crate::info::{Type, TypePath, impl_type_fn};

/// Static information of a type without reflected inner structure.
///
/// Numbers, strings and containers such as `Vec<T>` are opaque: they are
/// only ever assigned as a whole.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
