use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::access::check_args;
use crate::info::{ConstructorInfo, Modifiers, Type, TypeInfo};
use crate::{Args, Reflect, ReflectError, Value};

/// A constructor handle obtained from a [`TypeInfo`](crate::info::TypeInfo).
#[derive(Clone, Copy)]
pub struct Constructor {
    class: &'static TypeInfo,
    info: &'static ConstructorInfo,
    accessible: bool,
}

impl Constructor {
    #[inline]
    pub(crate) const fn new(class: &'static TypeInfo, info: &'static ConstructorInfo) -> Self {
        Self {
            class,
            info,
            accessible: false,
        }
    }

    /// Constructors are named after their type.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.class.type_path()
    }

    #[inline]
    pub fn params(&self) -> &'static [Type] {
        self.info.params()
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.info.modifiers()
    }

    #[inline]
    pub fn declaring_type(&self) -> &'static TypeInfo {
        self.class
    }

    #[inline]
    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    #[inline]
    pub fn set_accessible(&mut self, accessible: bool) {
        self.accessible = accessible;
    }

    /// Creates a new instance, like `newInstance(args...)`.
    ///
    /// Abstract types and interfaces cannot be instantiated.
    pub fn new_instance(&self, args: Vec<Value>) -> Result<Box<dyn Reflect>, ReflectError> {
        if !(self.accessible || self.info.modifiers().is_public()) {
            return Err(ReflectError::IllegalAccess {
                class: self.class.type_path(),
                member: "<init>",
            });
        }
        if self.class.modifiers().is_abstract() {
            return Err(ReflectError::Instantiation(self.class.type_path()));
        }
        check_args(self.info.params(), &args)?;

        log::trace!("construct {}", self.class.type_path());
        self.info.construct(&mut Args::new(args))
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.info.modifiers(), self.class.type_path())?;
        for (index, ty) in self.info.params().iter().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            f.write_str(ty.name())?;
        }
        f.write_str(")")
    }
}
