use alloc::boxed::Box;

use fm_utils::hash::HashMap;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// Static information of a struct with named fields.
///
/// Fields are kept in declaration order; name lookups go through an index.
///
/// # Examples
///
/// ```
/// use fm_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Employee {
///     first_name: String,
///     last_name: String,
///     salary: u32,
/// }
///
/// let info = Employee::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 3);
/// assert_eq!(info.index_of("salary"), Some(2));
/// assert!(info.field("FirstName").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates the info of struct `T` from its fields, in declaration order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
        }
    }

    /// Returns the field named `name`.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the declaration index of the field named `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Iterates the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
