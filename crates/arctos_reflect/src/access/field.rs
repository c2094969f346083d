use core::fmt;

use crate::info::{FieldInfo, Modifiers, Type, TypeInfo};
use crate::{FromValue, Reflect, ReflectError, Value};

// -----------------------------------------------------------------------------
// Field

/// A field handle obtained from a [`TypeInfo`](crate::info::TypeInfo).
///
/// Static fields are read and written with a `None` target;
/// instance fields need the object, which may be of any subclass
/// of the declaring type.
#[derive(Clone, Copy)]
pub struct Field {
    class: &'static TypeInfo,
    info: &'static FieldInfo,
    accessible: bool,
}

impl Field {
    #[inline]
    pub(crate) const fn new(class: &'static TypeInfo, info: &'static FieldInfo) -> Self {
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

    /// Returns the declared value type, like `getType()`.
    #[inline]
    pub fn ty(&self) -> Type {
        self.info.ty()
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
    pub fn info(&self) -> &'static FieldInfo {
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

    /// Reads the field value.
    pub fn get(&self, target: Option<&dyn Reflect>) -> Result<Value, ReflectError> {
        self.check_access()?;
        if let Some(value) = self.info.get_static() {
            return Ok(value);
        }

        let target = target.ok_or(ReflectError::NullTarget {
            member: self.info.name(),
        })?;
        target
            .view_as(self.info.owner().id())
            .and_then(|this| self.info.get_instance(this))
            .ok_or_else(|| ReflectError::TargetMismatch {
                expected: self.class.type_path(),
                found: target.reflect_type_info().type_path(),
            })
    }

    /// Reads the field value as `V`, like `getBoolean`.
    pub fn get_as<V: FromValue>(&self, target: Option<&dyn Reflect>) -> Result<V, ReflectError> {
        V::from_value(self.get(target)?)
    }

    /// Writes the field value.
    pub fn set(&self, target: Option<&mut dyn Reflect>, value: Value) -> Result<(), ReflectError> {
        self.check_access()?;
        let found = value.ty();
        if found != self.info.ty() {
            return Err(ReflectError::ArgumentType {
                index: 0,
                expected: self.info.ty(),
                found,
            });
        }

        if self.info.is_static() {
            return self.info.set_static(value);
        }

        let target = target.ok_or(ReflectError::NullTarget {
            member: self.info.name(),
        })?;
        let found = target.reflect_type_info().type_path();
        match target.view_as_mut(self.info.owner().id()) {
            Some(this) => self.info.set_instance(this, value),
            None => Err(ReflectError::TargetMismatch {
                expected: self.class.type_path(),
                found,
            }),
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}.{}",
            self.info.modifiers(),
            self.info.ty().name(),
            self.class.type_path(),
            self.info.name()
        )
    }
}
