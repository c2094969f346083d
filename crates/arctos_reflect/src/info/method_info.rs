use alloc::boxed::Box;
use core::fmt;

use crate::info::{Modifiers, Type, TypePath, Typed};
use crate::{Args, Reflect, ReflectError, Value};

type InstanceBody = Box<dyn Fn(&mut dyn Reflect, &mut Args) -> Result<Value, ReflectError> + Send + Sync>;
type StaticBody = Box<dyn Fn(&mut Args) -> Result<Value, ReflectError> + Send + Sync>;

/// The callable part of a [`MethodInfo`].
pub enum MethodBody {
    /// Runs on the declaring part of an object.
    Instance(InstanceBody),
    /// Runs without an object.
    Static(StaticBody),
    /// Declared only, an implementation is found by dispatch.
    Abstract,
}

impl fmt::Debug for MethodBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MethodBody::Instance(_) => "Instance",
            MethodBody::Static(_) => "Static",
            MethodBody::Abstract => "Abstract",
        })
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

/// Information for a declared method: name, signature, modifiers and body.
///
/// Bodies receive arguments already checked against [`params`](MethodInfo::params).
///
/// # Examples
///
/// ```
/// use arctos_reflect::info::{MethodInfo, Modifiers, Type};
/// # use arctos_reflect::{impl_type_path, info::{Typed, TypeInfo}, impls::NonGenericTypeInfoCell};
///
/// struct Counter { n: i32 }
/// # impl_type_path!(Counter);
/// # impl Typed for Counter {
/// #     fn type_info() -> &'static TypeInfo {
/// #         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
/// #         CELL.get_or_init(|| TypeInfo::class::<Self>(Modifiers::PUBLIC))
/// #     }
/// # }
///
/// let add = MethodInfo::instance::<Counter, ()>(
///     "add",
///     Modifiers::PUBLIC,
///     [Type::of::<i32>()],
///     |c, args| {
///         c.n += args.take::<i32>()?;
///         Ok(())
///     },
/// );
///
/// assert!(add.matches("add", &[Type::of::<i32>()]));
/// assert!(add.return_type().is::<()>());
/// ```
pub struct MethodInfo {
    name: &'static str,
    owner: Type,
    params: Box<[Type]>,
    return_type: Type,
    modifiers: Modifiers,
    body: MethodBody,
}

impl MethodInfo {
    /// Creates an instance method of `T` returning `R`.
    pub fn instance<T, R>(
        name: &'static str,
        modifiers: Modifiers,
        params: impl IntoIterator<Item = Type>,
        body: fn(&mut T, &mut Args) -> Result<R, ReflectError>,
    ) -> Self
    where
        T: Typed + Send + Sync,
        R: TypePath + Into<Value>,
    {
        Self {
            name,
            owner: Type::of::<T>(),
            params: params.into_iter().collect(),
            return_type: Type::of::<R>(),
            modifiers: modifiers.difference(Modifiers::STATIC | Modifiers::ABSTRACT),
            body: MethodBody::Instance(Box::new(move |this: &mut dyn Reflect, args: &mut Args| {
                let found = this.reflect_type_info().type_path();
                match this.as_any_mut().downcast_mut::<T>() {
                    Some(this) => body(this, args).map(Into::into),
                    None => Err(ReflectError::TargetMismatch {
                        expected: T::type_path(),
                        found,
                    }),
                }
            })),
        }
    }

    /// Creates a static method owned by `T`, returning `R`.
    pub fn new_static<T, R>(
        name: &'static str,
        modifiers: Modifiers,
        params: impl IntoIterator<Item = Type>,
        body: fn(&mut Args) -> Result<R, ReflectError>,
    ) -> Self
    where
        T: Typed + ?Sized,
        R: TypePath + Into<Value>,
    {
        Self {
            name,
            owner: Type::of::<T>(),
            params: params.into_iter().collect(),
            return_type: Type::of::<R>(),
            modifiers: modifiers | Modifiers::STATIC,
            body: MethodBody::Static(Box::new(move |args: &mut Args| body(args).map(Into::into))),
        }
    }

    /// Creates an abstract method declared by `T`.
    ///
    /// Invoking it dispatches to the most derived implementation
    /// of the target object.
    pub fn new_abstract<T, R>(
        name: &'static str,
        modifiers: Modifiers,
        params: impl IntoIterator<Item = Type>,
    ) -> Self
    where
        T: Typed + ?Sized,
        R: TypePath,
    {
        Self {
            name,
            owner: Type::of::<T>(),
            params: params.into_iter().collect(),
            return_type: Type::of::<R>(),
            modifiers: modifiers | Modifiers::ABSTRACT,
            body: MethodBody::Abstract,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declaring type.
    #[inline]
    pub const fn owner(&self) -> Type {
        self.owner
    }

    /// Returns the parameter types in declaration order.
    #[inline]
    pub fn params(&self) -> &[Type] {
        &self.params
    }

    #[inline]
    pub const fn return_type(&self) -> Type {
        self.return_type
    }

    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    #[inline]
    pub const fn body(&self) -> &MethodBody {
        &self.body
    }

    #[inline]
    pub const fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }

    #[inline]
    pub const fn is_abstract(&self) -> bool {
        self.modifiers.is_abstract()
    }

    /// Private and static methods are bound to their declaring type.
    #[inline]
    pub const fn is_virtual(&self) -> bool {
        !self.modifiers.is_private() && !self.modifiers.is_static()
    }

    /// Returns `true` if the name and parameter types are equal.
    pub fn matches(&self, name: &str, params: &[Type]) -> bool {
        self.name == name && *self.params == *params
    }

    /// Returns `true` if both methods have the same name and parameter types.
    #[inline]
    pub fn same_signature(&self, other: &MethodInfo) -> bool {
        self.matches(other.name, &other.params)
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("params", &self.params)
            .field("return_type", &self.return_type)
            .field("modifiers", &self.modifiers)
            .field("body", &self.body)
            .finish()
    }
}
