/// Implements [`Reflect`](crate::Reflect) for a `Clone + Debug` leaf type.
///
/// `try_apply` accepts exactly `Self` and clones it in; `reflect_clone`
/// goes through [`Clone`].
macro_rules! impl_simple_type_reflect {
    ($kind:ident) => {
        $crate::reflection::impl_reflect_cast_fn!($kind);

        fn try_apply(
            &mut self,
            value: &dyn $crate::Reflect,
        ) -> Result<(), $crate::ops::ApplyError> {
            if let Some(value) = <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                Clone::clone_from(self, value);
                Ok(())
            } else {
                Err($crate::ops::ApplyError::mismatched_types(
                    $crate::info::DynamicTypePath::reflect_type_path(value),
                    <Self as $crate::info::TypePath>::type_path(),
                ))
            }
        }

        #[inline]
        fn reflect_clone(
            &self,
        ) -> Result<
            $crate::__macro_exports::macro_utils::Box<dyn $crate::Reflect>,
            $crate::ops::ReflectCloneError,
        > {
            Ok($crate::__macro_exports::macro_utils::Box::new(Clone::clone(self)))
        }

        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use impl_simple_type_reflect;
