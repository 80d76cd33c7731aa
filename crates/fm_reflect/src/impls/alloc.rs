use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell, concat};
use crate::info::{OpaqueInfo, PointerInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{ApplyError, ReflectCloneError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// String

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }

    #[inline]
    fn type_name() -> &'static str {
        "String"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::string")
    }
}

impl Typed for String {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for String {
    crate::impls::impl_simple_type_reflect!(Opaque);
}

// -----------------------------------------------------------------------------
// Vec

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: TypePath> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Vec<T> {
    crate::reflection::impl_reflect_cast_fn!(Opaque);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        match value.downcast_ref::<Self>() {
            Some(value) => {
                self.clone_from(value);
                Ok(())
            }
            None => Err(ApplyError::mismatched_types(
                value.reflect_type_path(),
                Self::type_path(),
            )),
        }
    }

    #[inline]
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(self.clone()))
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|item| item as &dyn Reflect))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: TypePath> TypePath for Box<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::boxed::Box<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Box<", T::type_name(), ">"]))
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl<T: Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>()))
    }
}

/// `Box<T>` is the one pointer level: its views expose the pointee, and
/// `try_apply` writes through to it.
impl<T: Reflect + Typed> Reflect for Box<T> {
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(&**self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(&mut **self)
    }

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        (**self).try_apply(value.pointee())
    }

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        match (**self).reflect_clone()?.take::<T>() {
            Ok(pointee) => Ok(Box::new(Box::new(pointee))),
            Err(_) => Err(ReflectCloneError::NotSupport {
                type_path: Self::type_path().into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn vec_is_opaque() {
        let mut v = vec![1_u8, 2];
        v.try_apply(&vec![3_u8]).unwrap();
        assert_eq!(v, [3]);

        assert!(v.try_apply(&vec![3_u16]).is_err());
        assert!(<Vec<String>>::type_info().is_opaque());
        assert_eq!(format!("{:?}", v.as_reflect()), "[3]");
    }

    #[test]
    fn box_exposes_pointee() {
        let boxed = Box::new(String::from("x"));

        assert_eq!(boxed.reflect_kind(), ReflectKind::Pointer);
        match boxed.reflect_ref() {
            ReflectRef::Pointer(inner) => assert_eq!(inner.downcast_ref::<String>().unwrap(), "x"),
            _ => panic!("expected a pointer"),
        }
        assert!(<Box<String>>::type_info().is_pointer());
        assert_eq!(<Box<String>>::type_path(), "alloc::boxed::Box<alloc::string::String>");
    }

    #[test]
    fn box_apply_writes_through() {
        let mut boxed = Box::new(1_i32);

        boxed.try_apply(&5_i32).unwrap();
        assert_eq!(*boxed, 5);

        boxed.try_apply(&Box::new(9_i32)).unwrap();
        assert_eq!(*boxed, 9);

        let mut plain = 0_i32;
        plain.try_apply(Box::new(3_i32).as_reflect().pointee()).unwrap();
        assert_eq!(plain, 3);
    }
}
