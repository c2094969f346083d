use alloc::vec::Vec;
use core::fmt;

use crate::access::check_args;
use crate::info::{MethodBody, MethodInfo, Modifiers, Type, TypeInfo};
use crate::{Args, Reflect, ReflectError, Value};

// -----------------------------------------------------------------------------
// Method

/// A method handle obtained from a [`TypeInfo`](crate::info::TypeInfo).
///
/// Static methods are invoked with a `None` target. Virtual methods
/// dispatch to the most derived override of the target's runtime type,
/// private methods always run the declared body.
#[derive(Clone, Copy)]
pub struct Method {
    class: &'static TypeInfo,
    info: &'static MethodInfo,
    accessible: bool,
}

impl Method {
    #[inline]
    pub(crate) const fn new(class: &'static TypeInfo, info: &'static MethodInfo) -> Self {
        Self {
            class,
            info,
            accessible: false,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    #[inline]
    pub fn params(&self) -> &'static [Type] {
        self.info.params()
    }

    #[inline]
    pub fn return_type(&self) -> Type {
        self.info.return_type()
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.info.modifiers()
    }

    /// Returns the declaring type.
    #[inline]
    pub fn declaring_type(&self) -> &'static TypeInfo {
        self.class
    }

    #[inline]
    pub fn info(&self) -> &'static MethodInfo {
        self.info
    }

    /// Returns the access override flag.
    #[inline]
    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    /// Sets the access override flag.
    #[inline]
    pub fn set_accessible(&mut self, accessible: bool) {
        self.accessible = accessible;
    }

    fn check_access(&self) -> Result<(), ReflectError> {
        if self.accessible || self.info.modifiers().is_public() {
            Ok(())
        } else {
            Err(ReflectError::IllegalAccess {
                class: self.class.type_path(),
                member: self.info.name(),
            })
        }
    }

    /// Invokes the method.
    ///
    /// The target is ignored for static methods.
    pub fn invoke(
        &self,
        target: Option<&mut dyn Reflect>,
        args: Vec<Value>,
    ) -> Result<Value, ReflectError> {
        self.check_access()?;
        check_args(self.info.params(), &args)?;
        let mut args = Args::new(args);

        if let MethodBody::Static(body) = self.info.body() {
            log::trace!("invoke {}::{}", self.class.type_path(), self.info.name());
            return body(&mut args);
        }

        let target = target.ok_or(ReflectError::NullTarget {
            member: self.info.name(),
        })?;
        let runtime = target.reflect_type_info();
        if !self.class.is_assignable_from(runtime) {
            return Err(ReflectError::TargetMismatch {
                expected: self.class.type_path(),
                found: runtime.type_path(),
            });
        }

        let resolved = if self.info.is_virtual() {
            runtime.dispatch(self.info).unwrap_or(self.info)
        } else {
            self.info
        };

        let MethodBody::Instance(body) = resolved.body() else {
            log::warn!(
                "no implementation of {}::{} in {}",
                self.class.type_path(),
                self.info.name(),
                runtime.type_path(),
            );
            return Err(ReflectError::AbstractMethod {
                class: runtime.type_path(),
                member: self.info.name(),
            });
        };

        log::trace!("invoke {}::{}", resolved.owner().path(), resolved.name());
        match target.view_as_mut(resolved.owner().id()) {
            Some(this) => body(this, &mut args),
            None => Err(ReflectError::TargetMismatch {
                expected: resolved.owner().path(),
                found: runtime.type_path(),
            }),
        }
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}.{}(",
            self.info.modifiers(),
            self.info.return_type().name(),
            self.class.type_path(),
            self.info.name(),
        )?;
        for (index, ty) in self.info.params().iter().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            f.write_str(ty.name())?;
        }
        f.write_str(")")
    }
}
