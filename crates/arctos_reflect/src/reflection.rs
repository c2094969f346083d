use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Reflect

/// Object-safe access to the runtime type of a value.
///
/// Implemented for every sized [`Typed`] type, so a `&dyn Reflect` is the
/// equivalent of an object reference: it knows its class and can be
/// downcast back to the concrete type.
///
/// Subclasses embed their superclass part, and expose it through
/// [`Typed::as_super`]; [`reflect_super`](Reflect::reflect_super) walks
/// that chain dynamically.
///
/// # Examples
///
/// ```
/// use arctos_reflect::{Reflect, impl_type_path};
/// use arctos_reflect::info::{Modifiers, TypeInfo, Typed};
/// use arctos_reflect::impls::NonGenericTypeInfoCell;
///
/// struct Cat;
/// impl_type_path!(Cat);
///
/// impl Typed for Cat {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::class::<Self>(Modifiers::PUBLIC))
///     }
/// }
///
/// let cat: Box<dyn Reflect> = Box::new(Cat);
/// assert_eq!(cat.reflect_type_info().type_name(), "Cat");
/// assert!(cat.is::<Cat>());
/// assert!(cat.reflect_super().is_none());
/// ```
pub trait Reflect: Any + Send + Sync {
    /// Returns the [`TypeInfo`] of the underlying type.
    fn reflect_type_info(&self) -> &'static TypeInfo;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Returns the embedded superclass part, if the type has a superclass.
    fn reflect_super(&self) -> Option<&dyn Reflect>;

    /// Mutable version of [`reflect_super`](Reflect::reflect_super).
    fn reflect_super_mut(&mut self) -> Option<&mut dyn Reflect>;
}

impl<T: Typed + Send + Sync> Reflect for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    #[inline]
    fn reflect_super(&self) -> Option<&dyn Reflect> {
        T::as_super(self)
    }

    #[inline]
    fn reflect_super_mut(&mut self) -> Option<&mut dyn Reflect> {
        T::as_super_mut(self)
    }
}

impl dyn Reflect {
    /// The [`TypeId`] of the underlying value, not of the container.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Downcast a boxed value, giving it back on mismatch.
    pub fn downcast<T: Any>(self: Box<Self>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            // Checked above.
            Ok(self.into_any().downcast().unwrap_or_else(|_| unreachable!()))
        } else {
            Err(self)
        }
    }

    /// Downcast and unbox.
    #[inline]
    pub fn take<T: Any>(self: Box<Self>) -> Result<T, Box<dyn Reflect>> {
        self.downcast().map(|value| *value)
    }

    /// Returns the part of this value that is an instance of `type_id`,
    /// walking up the superclass chain.
    pub fn view_as(&self, type_id: TypeId) -> Option<&dyn Reflect> {
        let mut target: &dyn Reflect = self;
        loop {
            if target.as_any().type_id() == type_id {
                return Some(target);
            }
            target = target.reflect_super()?;
        }
    }

    /// Mutable version of [`view_as`](Self::view_as).
    pub fn view_as_mut(&mut self, type_id: TypeId) -> Option<&mut dyn Reflect> {
        let mut target: &mut dyn Reflect = self;
        loop {
            if target.as_any().type_id() == type_id {
                return Some(target);
            }
            target = target.reflect_super_mut()?;
        }
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.reflect_type_info().type_path())
    }
}
