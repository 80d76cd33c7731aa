use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ApplyError, ReflectCloneError, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection.
///
/// `Reflect` gives type-erased access to a value: its type identity and path,
/// its [kind](ReflectKind), and a checked way to assign another reflected
/// value to it.
///
/// Implementations come from [`#[derive(Reflect)]`](crate::derive::Reflect)
/// for structs, and from this crate for leaf types and `Box<T>`.
///
/// # Type Identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of the box itself.
/// Use [`Reflect::ty_id`] instead:
///
/// ```
/// use fm_reflect::Reflect;
/// use core::any::{Any, TypeId};
///
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Kinds
///
/// Use [`reflect_ref`] and [`reflect_mut`] to reach the kind-specific view:
///
/// ```
/// use fm_reflect::{Reflect, derive::Reflect, ops::ReflectRef};
///
/// #[derive(Reflect)]
/// struct Foo { a: i32 }
///
/// let foo = Foo { a: 1 };
/// assert!(matches!(foo.reflect_ref(), ReflectRef::Struct(_)));
/// assert!(matches!(1_i32.reflect_ref(), ReflectRef::Opaque(_)));
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a `Box<dyn Reflect>`.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces this value with `value` if it has exactly the same type.
    ///
    /// On a type mismatch the input is handed back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fm_reflect::Reflect;
    /// let mut name = String::from("John");
    ///
    /// assert!(name.set(String::from("Jane").into_boxed_reflect()).is_ok());
    /// assert!(name.set(10_u8.into_boxed_reflect()).is_err());
    /// assert_eq!(name, "Jane");
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [kind](ReflectKind) of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable, kind-specific view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable, kind-specific view of this value.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Assigns a reflected value to this value.
    ///
    /// - Opaque values accept only their own type and are cloned in.
    /// - Structs given a value of their own type replace themselves with its
    ///   [`reflect_clone`](Reflect::reflect_clone), fields hidden from
    ///   reflection included.
    /// - Structs given another struct copy every field whose name matches,
    ///   recursively through `try_apply`.
    /// - Pointers forward to their pointee.
    ///
    /// # Handling Errors
    ///
    /// A struct may be left partially assigned if a field fails midway.
    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError>;

    /// Clones this value into a new box of the same type.
    ///
    /// Leaf types clone through [`Clone`]. Derived structs clone field by
    /// field, or through [`Clone`] when marked `#[reflect(clone)]`; without
    /// the flag a struct with a `#[reflect(ignore)]` field cannot be cloned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fm_reflect::Reflect;
    /// let value = String::from("Doe");
    /// let cloned = value.reflect_clone().unwrap();
    ///
    /// assert_eq!(cloned.take::<String>().ok().as_deref(), Some("Doe"));
    /// ```
    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError>;

    /// Debug formatter for the value.
    ///
    /// Opaque values write `Opaque(type_path)` unless the implementation
    /// forwards to [`Debug`](core::fmt::Debug).
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::impls::struct_debug(data, f),
            ReflectRef::Pointer(data) => data.reflect_debug(f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fm_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// assert!(!x.is::<u32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fm_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_i32.into_boxed_reflect();
    ///
    /// assert_eq!(x.take::<i32>().ok(), Some(10));
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { *<Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Strips one pointer level: returns the pointee of a
    /// [`Pointer`](ReflectKind::Pointer) value, or the value itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fm_reflect::Reflect;
    /// let boxed = Box::new(7_u8);
    /// let value = boxed.as_reflect();
    ///
    /// assert!(value.pointee().is::<u8>());
    /// assert!(7_u8.as_reflect().pointee().is::<u8>());
    /// ```
    #[inline]
    pub fn pointee(&self) -> &dyn Reflect {
        match self.reflect_ref() {
            ReflectRef::Pointer(inner) => inner,
            _ => self,
        }
    }

    /// Mutable version of [`pointee`](Self::pointee).
    #[inline]
    pub fn pointee_mut(&mut self) -> &mut dyn Reflect {
        if self.reflect_kind() != ReflectKind::Pointer {
            return self;
        }
        match self.reflect_mut() {
            ReflectMut::Pointer(inner) => inner,
            ReflectMut::Struct(data) => data,
            ReflectMut::Opaque(data) => data,
        }
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `set`, `reflect_kind`, `reflect_ref` and `reflect_mut` for
/// `Struct` and `Opaque` kinds.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
