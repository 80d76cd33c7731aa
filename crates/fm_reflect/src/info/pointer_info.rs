use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Static information of an owning pointer such as `Box<T>`.
///
/// # Examples
///
/// ```
/// use fm_reflect::info::Typed;
///
/// let info = <Box<String>>::type_info().as_pointer().unwrap();
///
/// assert!(info.type_is::<Box<String>>());
/// assert!(info.pointee().is::<String>());
/// ```
#[derive(Debug, Clone)]
pub struct PointerInfo {
    ty: Type,
    pointee: Type,
    pointee_info: fn() -> &'static TypeInfo,
}

impl PointerInfo {
    impl_type_fn!(ty);

    /// Creates the info of pointer type `P` pointing at `T`.
    #[inline]
    pub const fn new<P: TypePath + ?Sized, T: Typed>() -> Self {
        Self {
            ty: Type::of::<P>(),
            pointee: Type::of::<T>(),
            pointee_info: T::type_info,
        }
    }

    /// Returns the pointee [`Type`].
    #[inline]
    pub const fn pointee(&self) -> &Type {
        &self.pointee
    }

    /// Returns the pointee's [`TypeInfo`].
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }
}
