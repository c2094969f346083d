use alloc::boxed::Box;
use core::any::Any;

// -----------------------------------------------------------------------------
// TypeTrait

/// A capability stored in a [`TypeMeta`](crate::registry::TypeMeta).
///
/// Implemented for every `Clone + Send + Sync + 'static` type,
/// usually created through [`FromType`](crate::registry::FromType).
pub trait TypeTrait: Any + Send + Sync {
    /// Clone into a new boxed trait object.
    fn clone_type_trait(&self) -> Box<dyn TypeTrait>;
}

impl<T: Clone + Any + Send + Sync> TypeTrait for T {
    #[inline]
    fn clone_type_trait(&self) -> Box<dyn TypeTrait> {
        Box::new(self.clone())
    }
}

impl dyn TypeTrait {
    #[inline]
    pub fn is<T: TypeTrait>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: TypeTrait>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref()
    }

    /// Downcast a boxed trait, giving it back on mismatch.
    pub fn downcast<T: TypeTrait>(self: Box<Self>) -> Result<Box<T>, Box<dyn TypeTrait>> {
        if self.is::<T>() {
            // Checked above.
            Ok((self as Box<dyn Any>).downcast().unwrap_or_else(|_| unreachable!()))
        } else {
            Err(self)
        }
    }
}

// -----------------------------------------------------------------------------
// reflect_trait

/// Generate a caster [`TypeTrait`] for a trait object.
///
/// `reflect_trait!(pub struct ReflectFoo for dyn Foo)` creates `ReflectFoo`,
/// which turns a `&dyn Reflect` into a `&dyn Foo` when the underlying type
/// implements `Foo`. Insert it into a type's [`TypeMeta`] with
/// [`FromType`], then fetch it from the registry.
///
/// # Examples
///
/// ```
/// use arctos_reflect::{Reflect, impl_type_path, reflect_trait};
/// use arctos_reflect::impls::NonGenericTypeInfoCell;
/// use arctos_reflect::info::{Modifiers, TypeInfo, Typed};
/// use arctos_reflect::registry::FromType;
///
/// pub trait Speak {
///     fn speak(&self) -> String;
/// }
///
/// reflect_trait!(pub struct ReflectSpeak for dyn Speak);
///
/// struct Parrot;
/// impl_type_path!(Parrot);
///
/// impl Speak for Parrot {
///     fn speak(&self) -> String { "hello".into() }
/// }
///
/// impl Typed for Parrot {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::class::<Parrot>(Modifiers::PUBLIC))
///     }
/// }
///
/// let caster = <ReflectSpeak as FromType<Parrot>>::from_type();
/// let value: Box<dyn Reflect> = Box::new(Parrot);
///
/// assert_eq!(caster.get(&*value).unwrap().speak(), "hello");
/// assert!(caster.get(&true).is_none());
/// ```
///
/// [`TypeMeta`]: crate::registry::TypeMeta
/// [`FromType`]: crate::registry::FromType
#[macro_export]
macro_rules! reflect_trait {
    ($(#[$attr:meta])* $vis:vis struct $reflect:ident for dyn $trait_:ident) => {
        $(#[$attr])*
        #[derive(Clone)]
        $vis struct $reflect {
            get_func: fn(&dyn $crate::Reflect) -> ::core::option::Option<&dyn $trait_>,
            get_mut_func: fn(&mut dyn $crate::Reflect) -> ::core::option::Option<&mut dyn $trait_>,
            get_boxed_func: fn(
                ::std::boxed::Box<dyn $crate::Reflect>,
            ) -> ::core::result::Result<
                ::std::boxed::Box<dyn $trait_>,
                ::std::boxed::Box<dyn $crate::Reflect>,
            >,
        }

        impl $reflect {
            /// Downcast a `&dyn Reflect` to the trait object.
            ///
            /// Returns `None` if the underlying type does not implement the trait.
            #[inline]
            pub fn get<'a>(&self, value: &'a dyn $crate::Reflect) -> ::core::option::Option<&'a dyn $trait_> {
                (self.get_func)(value)
            }

            /// Downcast a `&mut dyn Reflect` to the trait object.
            #[inline]
            pub fn get_mut<'a>(
                &self,
                value: &'a mut dyn $crate::Reflect,
            ) -> ::core::option::Option<&'a mut dyn $trait_> {
                (self.get_mut_func)(value)
            }

            /// Downcast a `Box<dyn Reflect>` to the trait object, giving it back on mismatch.
            #[inline]
            pub fn get_boxed(
                &self,
                value: ::std::boxed::Box<dyn $crate::Reflect>,
            ) -> ::core::result::Result<
                ::std::boxed::Box<dyn $trait_>,
                ::std::boxed::Box<dyn $crate::Reflect>,
            > {
                (self.get_boxed_func)(value)
            }
        }

        impl<T: $trait_ + $crate::info::Typed + ::core::marker::Send + ::core::marker::Sync>
            $crate::registry::FromType<T> for $reflect
        {
            fn from_type() -> Self {
                Self {
                    get_func: |value| {
                        <dyn $crate::Reflect>::downcast_ref::<T>(value).map(|value| value as &dyn $trait_)
                    },
                    get_mut_func: |value| {
                        <dyn $crate::Reflect>::downcast_mut::<T>(value).map(|value| value as &mut dyn $trait_)
                    },
                    get_boxed_func: |value| {
                        <dyn $crate::Reflect>::downcast::<T>(value).map(|value| value as ::std::boxed::Box<dyn $trait_>)
                    },
                }
            }
        }
    };
}
