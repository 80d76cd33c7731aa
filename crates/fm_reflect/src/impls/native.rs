use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};

macro_rules! impl_native_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            crate::impls::impl_simple_type_reflect!(Opaque);
        }
    )*};
}

impl_native_opaque!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl TypePath for &'static str {
    #[inline]
    fn type_path() -> &'static str {
        "&str"
    }

    #[inline]
    fn type_name() -> &'static str {
        "&str"
    }
}

impl Typed for &'static str {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for &'static str {
    crate::impls::impl_simple_type_reflect!(Opaque);
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::ApplyError;

    #[test]
    fn apply_same_type() {
        let mut x = 1_u32;
        x.try_apply(&42_u32).unwrap();
        assert_eq!(x, 42);

        let mut s = "old";
        s.try_apply(&"new").unwrap();
        assert_eq!(s, "new");
    }

    #[test]
    fn apply_other_type_fails() {
        let mut x = 1_u32;
        let err = x.try_apply(&42_i64).unwrap_err();
        assert!(matches!(err, ApplyError::MismatchedTypes { .. }));
        assert_eq!(x, 1);

        assert!(x.try_apply(&String::from("1")).is_err());
    }

    #[test]
    fn native_info_is_opaque() {
        assert!(f64::type_info().is_opaque());
        assert!(<&'static str>::type_info().type_is::<&'static str>());
        assert_eq!(format!("{:?}", 3_i8.as_reflect()), "3");
    }
}
