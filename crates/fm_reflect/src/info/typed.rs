use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), so the
/// field table of a type is available without an instance.
///
/// # Examples
///
/// ```
/// use fm_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct EmployeeViewModel {
///     first_name: String,
///     full_name: String,
/// }
///
/// let info = EmployeeViewModel::type_info().as_struct().unwrap();
///
/// assert!(info.field_names().eq(["first_name", "full_name"]));
/// assert!(info.field("full_name").unwrap().type_is::<String>());
/// ```
///
/// # Manual implementation
///
/// Cache the info in a cell from [`impls`](crate::impls):
///
/// ```
/// use fm_reflect::{
///     impls::NonGenericTypeInfoCell,
///     info::{OpaqueInfo, TypeInfo, TypePath, Typed},
/// };
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "auth::Token" }
///     fn type_name() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(Token::type_info().is_opaque());
/// ```
pub trait Typed: TypePath {
    /// Returns the [`TypeInfo`] of this type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Automatically implemented for every type implementing [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
