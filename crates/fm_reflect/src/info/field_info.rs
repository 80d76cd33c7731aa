use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named struct field.
///
/// # Examples
///
/// ```
/// use fm_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Employee {
///     salary: u32,
/// }
///
/// let info = Employee::type_info().as_struct().unwrap();
/// let field = info.field_at(0).unwrap();
///
/// assert_eq!(field.name(), "salary");
/// assert!(field.type_is::<u32>());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    ty: Type,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    impl_type_fn!(ty);

    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
