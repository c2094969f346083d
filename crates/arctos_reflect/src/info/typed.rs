use crate::Reflect;
use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implement it with a [`NonGenericTypeInfoCell`], so the descriptor
/// is built once and lives for the rest of the process.
///
/// Subclasses also implement [`as_super`](Typed::as_super) and
/// [`as_super_mut`](Typed::as_super_mut) to hand out their embedded superclass part.
///
/// # Examples
///
/// ```
/// use arctos_reflect::{Reflect, impl_type_path};
/// use arctos_reflect::info::{Modifiers, TypeInfo, Typed};
/// use arctos_reflect::impls::NonGenericTypeInfoCell;
///
/// struct Animal;
/// struct Dog { animal: Animal }
///
/// impl_type_path!(Animal);
/// impl_type_path!(Dog);
///
/// impl Typed for Animal {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::class::<Self>(Modifiers::PUBLIC | Modifiers::ABSTRACT))
///     }
/// }
///
/// impl Typed for Dog {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::class::<Self>(Modifiers::PUBLIC).with_superclass::<Animal>()
///         })
///     }
///
///     fn as_super(this: &Self) -> Option<&dyn Reflect> {
///         Some(&this.animal)
///     }
///
///     fn as_super_mut(this: &mut Self) -> Option<&mut dyn Reflect> {
///         Some(&mut this.animal)
///     }
/// }
///
/// let info = Dog::type_info();
/// assert_eq!(info.superclass().unwrap().type_name(), "Animal");
///
/// let dog: &dyn Reflect = &Dog { animal: Animal };
/// assert!(dog.reflect_super().unwrap().is::<Animal>());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;

    /// Returns the embedded superclass part.
    fn as_super(_this: &Self) -> Option<&dyn Reflect>
    where
        Self: Sized,
    {
        None
    }

    /// Mutable version of [`as_super`](Typed::as_super).
    fn as_super_mut(_this: &mut Self) -> Option<&mut dyn Reflect>
    where
        Self: Sized,
    {
        None
    }
}
