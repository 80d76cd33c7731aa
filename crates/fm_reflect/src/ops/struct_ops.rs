use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct trait

/// Type-erased access to the named fields of a struct.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for structs
/// with named fields. Fields marked `#[reflect(ignore)]` are invisible here.
///
/// # Examples
///
/// ```
/// use fm_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Employee {
///     first_name: String,
///     salary: u32,
/// }
///
/// let employee = Employee { first_name: "John".into(), salary: 1000 };
/// let value: &dyn Struct = &employee;
///
/// assert_eq!(value.field_len(), 2);
/// assert_eq!(value.field_as::<u32>("salary"), Some(&1000));
/// assert_eq!(value.name_at(0), Some("first_name"));
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`, or `None` if there is no such field.
    ///
    /// Names are matched exactly, including case.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Mutable version of [`field`](Struct::field).
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index` in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutable version of [`field_at`](Struct::field_at).
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the declaration index of the field named `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fm_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let foo = Foo { a: 1, b: true };
    ///
    /// assert_eq!(foo.index_of("b"), Some(1));
    /// assert_eq!(foo.index_of("B"), None);
    /// ```
    fn index_of(&self, name: &str) -> Option<usize>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Iterates the field values in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// Returns a typed reference to the field named `name`.
    ///
    /// Returns `None` if the field does not exist or is not a `T`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns a typed mutable reference to the field named `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fm_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect)]
    /// struct Foo { a: i32 }
    ///
    /// let mut foo = Foo { a: 10 };
    /// let value: &mut dyn Struct = &mut foo;
    ///
    /// if let Some(a) = value.field_mut_as::<i32>("a") {
    ///     *a = 31;
    /// }
    ///
    /// assert_eq!(foo.a, 31);
    /// ```
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Struct Field Iterator

/// An iterator over the field values of a struct, in declaration order.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::{ApplyError, ReflectCloneError, ReflectRef, Struct};

    #[derive(Reflect, Debug, PartialEq)]
    struct Employee {
        first_name: String,
        last_name: String,
        salary: u32,
    }

    #[derive(Reflect, Debug, PartialEq, Default)]
    struct EmployeeViewModel {
        first_name: String,
        full_name: String,
        salary: u32,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "test::Pair")]
    struct Pair<A, B> {
        left: A,
        right: B,
    }

    #[derive(Reflect)]
    struct WithIgnored {
        id: u64,
        #[reflect(ignore)]
        started: std::time::Instant,
    }

    #[derive(Reflect, Debug, Clone, PartialEq, Default)]
    #[reflect(clone)]
    struct Audit {
        version: u32,
        #[reflect(ignore)]
        checksum: u64,
    }

    fn employee() -> Employee {
        Employee {
            first_name: String::from("John"),
            last_name: String::from("Doe"),
            salary: 1000,
        }
    }

    #[test]
    fn field_access() {
        let mut e = employee();

        assert_eq!(e.field_len(), 3);
        assert_eq!(e.name_at(2), Some("salary"));
        assert_eq!(e.index_of("last_name"), Some(1));
        assert!(e.field("FirstName").is_none());

        let value: &mut dyn Struct = &mut e;
        *value.field_mut_as::<u32>("salary").unwrap() = 1200;
        assert_eq!(value.field_as::<String>("first_name").unwrap(), "John");
        assert!(value.field_as::<u64>("salary").is_none());
        assert_eq!(e.salary, 1200);

        let names: Vec<_> = (0..e.field_len()).filter_map(|i| e.name_at(i)).collect();
        assert_eq!(names, ["first_name", "last_name", "salary"]);
        assert_eq!(e.iter_fields().len(), 3);
    }

    #[test]
    fn apply_same_named_fields() {
        let mut vm = EmployeeViewModel::default();
        vm.try_apply(&employee()).unwrap();

        assert_eq!(
            vm,
            EmployeeViewModel {
                first_name: String::from("John"),
                full_name: String::new(),
                salary: 1000,
            }
        );
    }

    #[test]
    fn apply_through_pointer() {
        let mut vm = Box::new(EmployeeViewModel::default());
        vm.try_apply(&Box::new(employee())).unwrap();
        assert_eq!(vm.salary, 1000);
    }

    #[test]
    fn apply_opaque_to_struct_fails() {
        let mut vm = EmployeeViewModel::default();
        assert!(vm.try_apply(&100_i32).is_err());
    }

    #[test]
    fn generic_paths() {
        assert_eq!(<Pair<u8, String>>::type_path(), "test::Pair<u8, alloc::string::String>");
        assert_eq!(<Pair<u8, String>>::type_name(), "Pair<u8, String>");
        assert_eq!(<Pair<u8, u8>>::module_path(), Some("test"));

        let info = <Pair<u8, i64>>::type_info().as_struct().unwrap();
        assert!(info.field("right").unwrap().type_is::<i64>());

        let pair = Pair { left: 1_u8, right: -1_i64 };
        let right = pair.field_at(1).and_then(|v| v.downcast_ref::<i64>());
        assert_eq!(right, Some(&-1));
        assert_eq!(pair.left, 1);
    }

    #[test]
    fn default_type_path() {
        assert!(Employee::type_path().ends_with("::Employee"));
        assert_eq!(Employee::type_name(), "Employee");
        assert!(Employee::module_path().unwrap().starts_with("fm_reflect"));
    }

    #[test]
    fn ignored_fields_are_invisible() {
        let value = WithIgnored { id: 7, started: std::time::Instant::now() };

        assert_eq!(value.field_len(), 1);
        assert!(value.field("started").is_none());
        assert_eq!(WithIgnored::type_info().as_struct().unwrap().field_len(), 1);
        assert!(value.started.elapsed() < core::time::Duration::from_secs(60));
    }

    #[test]
    fn reflect_ref_and_debug() {
        let e = employee();

        assert!(matches!(e.reflect_ref(), ReflectRef::Struct(_)));
        let text = alloc::format!("{:?}", e.as_reflect());
        assert!(text.contains("first_name: \"John\""));
        assert!(text.contains("salary: 1000"));
    }

    #[test]
    fn clone_field_by_field() {
        let cloned = employee().reflect_clone().unwrap();
        assert_eq!(cloned.take::<Employee>().ok(), Some(employee()));
    }

    #[test]
    fn clone_flag_keeps_ignored_fields() {
        let audit = Audit { version: 2, checksum: 99 };
        let cloned = audit.reflect_clone().unwrap();
        assert_eq!(cloned.take::<Audit>().ok(), Some(audit));
    }

    #[test]
    fn ignored_field_blocks_clone() {
        let value = WithIgnored { id: 1, started: std::time::Instant::now() };

        let err = value.reflect_clone().err().unwrap();
        assert!(matches!(
            err,
            ReflectCloneError::FieldNotCloneable { ref field, .. } if field == "started"
        ));

        let mut other = WithIgnored { id: 2, started: value.started };
        assert!(matches!(other.try_apply(&value), Err(ApplyError::NotCloneable(_))));
        assert_eq!(other.id, 2);
    }

    #[test]
    fn apply_same_type_copies_whole_value() {
        let mut audit = Audit::default();
        audit.try_apply(&Box::new(Audit { version: 3, checksum: 7 })).unwrap();

        assert_eq!(audit, Audit { version: 3, checksum: 7 });
    }
}
