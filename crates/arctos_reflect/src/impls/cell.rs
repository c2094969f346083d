//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! Only non-generic types are reflected here, so a single
//! [`OnceLock`] per type is enough.

use std::sync::OnceLock;

use crate::info::TypeInfo;

/// Container for static storage of a non-generic [`TypeInfo`].
///
/// ## Example
///
/// ```
/// use arctos_reflect::impl_type_path;
/// use arctos_reflect::impls::NonGenericTypeInfoCell;
/// use arctos_reflect::info::{Modifiers, TypeInfo, Typed};
///
/// struct A;
/// impl_type_path!(A);
///
/// impl Typed for A {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::class::<A>(Modifiers::PUBLIC))
///     }
/// }
///
/// assert!(core::ptr::eq(A::type_info(), A::type_info()));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the [`TypeInfo`] stored in the cell.
    ///
    /// If there is no entry found, a new one will be generated from the given function.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

impl Default for NonGenericTypeInfoCell {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
