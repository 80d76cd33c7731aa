use core::fmt;

use fm_reflect::Reflect;
use fm_reflect::info::{Type, TypeInfo, Typed};

/// Key of one (source type, destination type) combination.
///
/// Both sides are de-referenced by one pointer level first, so `Box<T>` and
/// `T` produce the same key. Equality and hashing only look at the two
/// `TypeId`s.
///
/// # Examples
///
/// ```
/// use fm_mapper::TypePair;
/// use fm_reflect::Reflect;
///
/// let boxed = Box::new(String::new());
///
/// assert_eq!(
///     TypePair::of::<String, u8>(),
///     TypePair::of_values(boxed.as_reflect(), &0_u8),
/// );
/// assert_eq!(TypePair::of::<Box<String>, u8>(), TypePair::of::<String, u8>());
/// assert_ne!(TypePair::of::<String, u8>(), TypePair::of::<u8, String>());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    source: Type,
    destination: Type,
}

impl TypePair {
    /// Creates a pair from two already de-referenced types.
    #[inline]
    pub const fn new(source: Type, destination: Type) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Creates the pair of types `S` and `D`.
    #[inline]
    pub fn of<S: Typed, D: Typed>() -> Self {
        Self::new(*deref_type(S::type_info()), *deref_type(D::type_info()))
    }

    /// Creates the pair of the types of two sample values.
    #[inline]
    pub fn of_values(source: &dyn Reflect, destination: &dyn Reflect) -> Self {
        Self::new(
            *deref_type(source.reflect_type_info()),
            *deref_type(destination.reflect_type_info()),
        )
    }

    #[inline]
    pub const fn source(&self) -> &Type {
        &self.source
    }

    #[inline]
    pub const fn destination(&self) -> &Type {
        &self.destination
    }
}

fn deref_type(info: &'static TypeInfo) -> &'static Type {
    match info {
        TypeInfo::Pointer(ptr) => ptr.pointee(),
        _ => info.ty(),
    }
}

impl fmt::Debug for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypePair({self})")
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source.path(), self.destination.path())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};

    use fm_reflect::Reflect;

    use super::TypePair;

    #[test]
    fn pointer_and_value_share_a_key() {
        let value = 1_u16;
        let boxed = Box::new(1_u16);

        assert_eq!(
            TypePair::of_values(&value, &String::new()),
            TypePair::of_values(boxed.as_reflect(), &String::new()),
        );
    }

    #[test]
    fn only_one_level_is_stripped() {
        assert_ne!(TypePair::of::<Box<Box<u8>>, u8>(), TypePair::of::<u8, u8>());
    }

    #[test]
    fn display() {
        let pair = TypePair::of::<u32, String>();
        assert_eq!(pair.to_string(), "u32 -> alloc::string::String");
        assert!(pair.source().is::<u32>());
        assert!(pair.destination().is::<String>());
    }
}
