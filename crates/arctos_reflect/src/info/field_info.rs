use alloc::boxed::Box;
use core::fmt;

use crate::info::{Modifiers, Type, Typed};
use crate::{FromValue, Reflect, ReflectError, Value};

type InstanceGetter = Box<dyn Fn(&dyn Reflect) -> Option<Value> + Send + Sync>;
type InstanceSetter = Box<dyn Fn(&mut dyn Reflect, Value) -> Result<(), ReflectError> + Send + Sync>;
type StaticGetter = Box<dyn Fn() -> Value + Send + Sync>;
type StaticSetter = Box<dyn Fn(Value) -> Result<(), ReflectError> + Send + Sync>;

enum FieldAccessor {
    Instance {
        get: InstanceGetter,
        set: InstanceSetter,
    },
    Static {
        get: StaticGetter,
        set: StaticSetter,
    },
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a declared field.
///
/// Instance fields read and write a part of the declaring type,
/// static fields read and write shared state owned by the declaring type.
///
/// Accessors run on the already resolved declaring part of an object,
/// access checks are done by [`Field`](crate::access::Field).
///
/// # Examples
///
/// ```
/// use arctos_reflect::info::{FieldInfo, Modifiers};
/// # use arctos_reflect::{impl_type_path, info::{Typed, TypeInfo}, impls::NonGenericTypeInfoCell};
///
/// struct Lamp { on: bool }
/// # impl_type_path!(Lamp);
/// # impl Typed for Lamp {
/// #     fn type_info() -> &'static TypeInfo {
/// #         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
/// #         CELL.get_or_init(|| TypeInfo::class::<Self>(Modifiers::PUBLIC))
/// #     }
/// # }
///
/// let field = FieldInfo::instance::<Lamp, bool>("on", Modifiers::PRIVATE, |l| l.on, |l, on| l.on = on);
///
/// assert_eq!(field.name(), "on");
/// assert!(field.ty().is::<bool>());
/// assert!(field.owner().is::<Lamp>());
/// assert!(!field.is_static());
/// ```
pub struct FieldInfo {
    name: &'static str,
    ty: Type,
    owner: Type,
    modifiers: Modifiers,
    accessor: FieldAccessor,
}

impl FieldInfo {
    /// Creates an instance field of `T` holding a `V`.
    pub fn instance<T, V>(
        name: &'static str,
        modifiers: Modifiers,
        get: fn(&T) -> V,
        set: fn(&mut T, V),
    ) -> Self
    where
        T: Typed + Send + Sync,
        V: FromValue + Into<Value>,
    {
        Self {
            name,
            ty: Type::of::<V>(),
            owner: Type::of::<T>(),
            modifiers: modifiers.difference(Modifiers::STATIC),
            accessor: FieldAccessor::Instance {
                get: Box::new(move |this: &dyn Reflect| {
                    this.as_any().downcast_ref::<T>().map(|this| get(this).into())
                }),
                set: Box::new(move |this: &mut dyn Reflect, value: Value| {
                    let value = V::from_value(value)?;
                    let found = this.reflect_type_info().type_path();
                    match this.as_any_mut().downcast_mut::<T>() {
                        Some(this) => {
                            set(this, value);
                            Ok(())
                        }
                        None => Err(ReflectError::TargetMismatch {
                            expected: T::type_path(),
                            found,
                        }),
                    }
                }),
            },
        }
    }

    /// Creates a static field owned by `T`, holding a `V`.
    ///
    /// The value lives outside any instance, `get` and `set` reach it directly.
    pub fn new_static<T, V>(
        name: &'static str,
        modifiers: Modifiers,
        get: fn() -> V,
        set: fn(V),
    ) -> Self
    where
        T: Typed + ?Sized,
        V: FromValue + Into<Value>,
    {
        Self {
            name,
            ty: Type::of::<V>(),
            owner: Type::of::<T>(),
            modifiers: modifiers | Modifiers::STATIC,
            accessor: FieldAccessor::Static {
                get: Box::new(move || get().into()),
                set: Box::new(move |value: Value| {
                    set(V::from_value(value)?);
                    Ok(())
                }),
            },
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type of the field value.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Returns the declaring type.
    #[inline]
    pub const fn owner(&self) -> Type {
        self.owner
    }

    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    #[inline]
    pub const fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }

    /// Reads the field from the declaring part of an object.
    ///
    /// Returns `None` when `this` is not the declaring type.
    pub(crate) fn get_instance(&self, this: &dyn Reflect) -> Option<Value> {
        match &self.accessor {
            FieldAccessor::Instance { get, .. } => get(this),
            FieldAccessor::Static { get, .. } => Some(get()),
        }
    }

    pub(crate) fn set_instance(&self, this: &mut dyn Reflect, value: Value) -> Result<(), ReflectError> {
        match &self.accessor {
            FieldAccessor::Instance { set, .. } => set(this, value),
            FieldAccessor::Static { set, .. } => set(value),
        }
    }

    /// Reads a static field, `None` for instance fields.
    pub(crate) fn get_static(&self) -> Option<Value> {
        match &self.accessor {
            FieldAccessor::Static { get, .. } => Some(get()),
            FieldAccessor::Instance { .. } => None,
        }
    }

    /// Writes a static field, instance fields need a target.
    pub(crate) fn set_static(&self, value: Value) -> Result<(), ReflectError> {
        match &self.accessor {
            FieldAccessor::Static { set, .. } => set(value),
            FieldAccessor::Instance { .. } => Err(ReflectError::NullTarget { member: self.name }),
        }
    }
}

impl fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("owner", &self.owner)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}
