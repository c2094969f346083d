use alloc::boxed::Box;
use core::fmt;

use crate::info::{Modifiers, Type, Typed};
use crate::{Args, Reflect, ReflectError};

type Factory = Box<dyn Fn(&mut Args) -> Result<Box<dyn Reflect>, ReflectError> + Send + Sync>;

/// Information for a declared constructor.
///
/// The factory builds a complete `T`, including its superclass part.
pub struct ConstructorInfo {
    owner: Type,
    params: Box<[Type]>,
    modifiers: Modifiers,
    factory: Factory,
}

impl ConstructorInfo {
    pub fn new<T: Typed + Send + Sync>(
        modifiers: Modifiers,
        params: impl IntoIterator<Item = Type>,
        factory: fn(&mut Args) -> Result<T, ReflectError>,
    ) -> Self {
        Self {
            owner: Type::of::<T>(),
            params: params.into_iter().collect(),
            modifiers,
            factory: Box::new(move |args: &mut Args| {
                factory(args).map(|value| Box::new(value) as Box<dyn Reflect>)
            }),
        }
    }

    /// Returns the constructed type.
    #[inline]
    pub const fn owner(&self) -> Type {
        self.owner
    }

    /// Constructors are named after their type.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.owner.path()
    }

    #[inline]
    pub fn params(&self) -> &[Type] {
        &self.params
    }

    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    #[inline]
    pub fn matches(&self, params: &[Type]) -> bool {
        *self.params == *params
    }

    pub(crate) fn construct(&self, args: &mut Args) -> Result<Box<dyn Reflect>, ReflectError> {
        (self.factory)(args)
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("owner", &self.owner)
            .field("params", &self.params)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}
