//! Reflection implementations for built-in types.
//!
//! ## Menu
//!
//! - [`NonGenericTypeInfoCell`]: static storage used by [`Typed`] implementations.
//! - [`impl_type_path!`](crate::impl_type_path): implement [`TypePath`] for a named type.
//! - `()`, `bool`, `i32` and `String` implement [`TypePath`] and [`Typed`],
//!   they are the member types a [`Value`](crate::Value) can carry.

// -----------------------------------------------------------------------------
// Modules

mod cell;

// -----------------------------------------------------------------------------
// Exports

pub use cell::NonGenericTypeInfoCell;

use alloc::string::String;

use crate::info::{Modifiers, TypeInfo, TypePath, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTraitDefault};

// -----------------------------------------------------------------------------
// impl_type_path

/// Implement [`TypePath`](crate::info::TypePath) for a named, non-generic type.
///
/// - `impl_type_path!(Foo)`: the module path is the module of the call site.
/// - `impl_type_path!((in a::b) Foo)`: the module path is given explicitly.
///
/// # Examples
///
/// ```
/// use arctos_reflect::{impl_type_path, info::TypePath};
///
/// mod school {
///     pub struct Pupil;
///     arctos_reflect::impl_type_path!((in campus::school) Pupil);
/// }
///
/// assert_eq!(school::Pupil::type_path(), "campus::school::Pupil");
/// assert_eq!(school::Pupil::type_name(), "Pupil");
/// assert_eq!(school::Pupil::module_path(), Some("campus::school"));
/// ```
#[macro_export]
macro_rules! impl_type_path {
    ((in $first:ident $(:: $rest:ident)*) $ty:ident) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!(
                    ::core::stringify!($first),
                    $("::", ::core::stringify!($rest),)*
                    "::",
                    ::core::stringify!($ty),
                )
            }

            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn type_ident() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(::core::concat!(
                    ::core::stringify!($first),
                    $("::", ::core::stringify!($rest),)*
                ))
            }
        }
    };
    ($ty:ident) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty))
            }

            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn type_ident() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                ::core::option::Option::Some(::core::module_path!())
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Primitives

macro_rules! impl_primitive {
    ($ty:ty, $name:literal) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $name
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::class::<$ty>(Modifiers::PUBLIC | Modifiers::FINAL))
            }
        }

        impl_default_meta!($ty);
    };
}

macro_rules! impl_default_meta {
    ($ty:ty) => {
        impl GetTypeMeta for $ty {
            fn get_type_meta() -> TypeMeta {
                let mut meta = TypeMeta::with_capacity::<Self>(1);
                meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
                meta
            }
        }
    };
}

impl_primitive!((), "()");
impl_primitive!(bool, "bool");
impl_primitive!(i32, "i32");

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
    fn type_ident() -> &'static str {
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
        CELL.get_or_init(|| TypeInfo::class::<String>(Modifiers::PUBLIC | Modifiers::FINAL))
    }
}

impl_default_meta!(String);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{TypePath, Typed};

    struct Local;
    crate::impl_type_path!(Local);

    struct Placed;
    crate::impl_type_path!((in campus) Placed);

    #[test]
    fn local_type_path_uses_call_site_module() {
        assert_eq!(Local::type_path(), "arctos_reflect::impls::tests::Local");
        assert_eq!(Local::module_path(), Some("arctos_reflect::impls::tests"));
        assert_eq!(Placed::type_path(), "campus::Placed");
    }

    #[test]
    fn primitives_are_final_classes() {
        let info = <i32 as Typed>::type_info();
        assert_eq!(info.type_path(), "i32");
        assert!(info.modifiers().is_final());
        assert_eq!(info.module_path(), None);
        assert_eq!(String::type_info().type_name(), "String");
    }
}
