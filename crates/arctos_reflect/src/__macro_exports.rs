//! Items used by exported macros, not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{Modifiers, TypeInfo, Typed};
    use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

    /// A registration function submitted through [`inventory`].
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta + ?Sized> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Registered on every platform `inventory` supports,
    /// so its presence tells whether submission worked.
    pub struct __AvailFlag;

    crate::impl_type_path!((in arctos_reflect::__macro_exports::auto_register) __AvailFlag);

    impl Typed for __AvailFlag {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| TypeInfo::class::<Self>(Modifiers::PRIVATE | Modifiers::FINAL))
        }
    }

    impl GetTypeMeta for __AvailFlag {
        fn get_type_meta() -> TypeMeta {
            TypeMeta::of::<Self>()
        }
    }

    inventory::submit! {
        __AutoRegisterFunc(<__AvailFlag as __RegisterType>::__register)
    }

    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}

/// Submit types for [`TypeRegistry::auto_register`](crate::registry::TypeRegistry::auto_register).
///
/// Does nothing when the `auto_register` feature is disabled.
///
/// ```no_run
/// # use arctos_reflect::{auto_register, impl_type_path};
/// # use arctos_reflect::impls::NonGenericTypeInfoCell;
/// # use arctos_reflect::info::{Modifiers, TypeInfo, Typed};
/// # use arctos_reflect::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
/// # use core::any::TypeId;
/// struct Foo;
/// # impl_type_path!(Foo);
/// # impl Typed for Foo {
/// #     fn type_info() -> &'static TypeInfo {
/// #         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
/// #         CELL.get_or_init(|| TypeInfo::class::<Foo>(Modifiers::PUBLIC))
/// #     }
/// # }
/// # impl GetTypeMeta for Foo {
/// #     fn get_type_meta() -> TypeMeta { TypeMeta::of::<Self>() }
/// # }
///
/// auto_register!(Foo);
///
/// let mut registry = TypeRegistry::empty();
/// assert!(registry.auto_register());
/// assert!(registry.contains(TypeId::of::<Foo>()));
/// ```
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! auto_register {
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::__macro_exports::auto_register::inventory::submit! {
                $crate::__macro_exports::auto_register::__AutoRegisterFunc(
                    <$ty as $crate::__macro_exports::auto_register::__RegisterType>::__register
                )
            }
        )+
    };
}

/// Submit types for [`TypeRegistry::auto_register`](crate::registry::TypeRegistry::auto_register).
///
/// Does nothing when the `auto_register` feature is disabled.
#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! auto_register {
    ($($ty:ty),+ $(,)?) => {};
}
