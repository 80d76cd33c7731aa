use core::fmt;

use crate::Reflect;
use crate::ops::{ApplyError, Struct};

/// A function used for implementing [`Reflect::try_apply`] on structs.
///
/// # Rules
///
/// 1. Unwraps one pointer level of `y`.
/// 2. If `y` has the type of `x`, replaces `x` with `y.reflect_clone()`.
///    Fields hidden from reflection are copied too.
/// 3. If `y` is not a `Struct`, returns `Err`.
/// 4. Applies every field of `y` to the field of `x` with the same name.
///    Fields missing from `x` are skipped.
///
/// # Example
///
/// ```ignore
/// fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
///     struct_try_apply(self, value)
/// }
/// ```
#[inline(never)]
pub fn struct_try_apply(x: &mut dyn Struct, y: &dyn Reflect) -> Result<(), ApplyError> {
    let y = y.pointee();

    if y.ty_id() == x.ty_id() {
        return x.set(y.reflect_clone()?).map_err(|value| {
            ApplyError::mismatched_types(value.reflect_type_path(), y.reflect_type_path())
        });
    }

    let y = y.reflect_ref().as_struct()?;

    for (index, y_field) in y.iter_fields().enumerate() {
        let Some(name) = y.name_at(index) else {
            continue;
        };
        if let Some(field) = x.field_mut(name) {
            field.try_apply(y_field)?;
        }
    }
    Ok(())
}

/// A function used for implementing [`Reflect::reflect_debug`] on structs.
///
/// Writes `type_path { field: value, .. }` through each field's
/// `reflect_debug`.
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_path());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        if let Some(name) = dyn_struct.name_at(index) {
            debug.field(name, &field as &dyn fmt::Debug);
        }
    }
    debug.finish()
}
