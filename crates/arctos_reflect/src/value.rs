use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde_core::{Serialize, Serializer};

use crate::info::{Type, TypePath};
use crate::{Reflect, ReflectError};

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed value, passed to and returned from reflective calls.
///
/// Primitive member types have their own variants, any other
/// reflected type travels as [`Value::Object`].
///
/// # Examples
///
/// ```
/// use arctos_reflect::{Value, FromValue, info::Type};
///
/// let v = Value::from("female");
/// assert_eq!(v.ty(), Type::of::<String>());
/// assert_eq!(String::from_value(v).unwrap(), "female");
///
/// assert_eq!(Value::from(true).as_bool(), Some(true));
/// ```
pub enum Value {
    Unit,
    Bool(bool),
    I32(i32),
    Str(String),
    Object(Box<dyn Reflect>),
}

impl Value {
    /// Returns the [`Type`] of the carried value.
    pub fn ty(&self) -> Type {
        match self {
            Value::Unit => Type::of::<()>(),
            Value::Bool(_) => Type::of::<bool>(),
            Value::I32(_) => Type::of::<i32>(),
            Value::Str(_) => Type::of::<String>(),
            Value::Object(obj) => *obj.reflect_type_info().ty(),
        }
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I32(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&dyn Reflect> {
        match self {
            Value::Object(obj) => Some(&**obj),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(b) => fmt::Debug::fmt(b, f),
            Value::I32(i) => fmt::Debug::fmt(i, f),
            Value::Str(s) => fmt::Debug::fmt(s, f),
            Value::Object(obj) => write!(f, "<{}>", obj.reflect_type_info().type_path()),
        }
    }
}

impl PartialEq for Value {
    /// Objects are never equal, there is no reflected equality.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Unit => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::I32(i) => serializer.serialize_i32(*i),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Object(obj) => serializer.serialize_str(obj.reflect_type_info().type_path()),
        }
    }
}

impl From<()> for Value {
    #[inline]
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Value::I32(value)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}

impl From<Box<dyn Reflect>> for Value {
    #[inline]
    fn from(value: Box<dyn Reflect>) -> Self {
        Value::Object(value)
    }
}

// -----------------------------------------------------------------------------
// FromValue

/// Extract a concrete value from a [`Value`].
///
/// Implemented for the primitive member types; the [`TypePath`] bound
/// lets the descriptors record the type a member expects.
pub trait FromValue: TypePath + Sized {
    fn from_value(value: Value) -> Result<Self, ReflectError>;
}

fn mismatch<T: TypePath>(value: &Value) -> ReflectError {
    ReflectError::ArgumentType {
        index: 0,
        expected: Type::of::<T>(),
        found: value.ty(),
    }
}

impl FromValue for () {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Unit => Ok(()),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::I32(i) => Ok(i),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ReflectError> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

// -----------------------------------------------------------------------------
// Args

/// Argument list of a reflective call, consumed front to back.
///
/// Argument types are checked against the descriptor before a body runs,
/// so a body can take its arguments in declaration order.
pub struct Args {
    values: alloc::vec::IntoIter<Value>,
    index: usize,
}

impl Args {
    #[inline]
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values: values.into_iter(),
            index: 0,
        }
    }

    /// Take the next argument as `T`.
    pub fn take<T: FromValue>(&mut self) -> Result<T, ReflectError> {
        let index = self.index;
        let value = self.values.next().ok_or(ReflectError::ArgumentCount {
            expected: index + 1,
            found: index,
        })?;
        self.index += 1;
        T::from_value(value).map_err(|err| match err {
            ReflectError::ArgumentType {
                expected, found, ..
            } => ReflectError::ArgumentType {
                index,
                expected,
                found,
            },
            other => other,
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    use super::{Args, FromValue, Value};
    use crate::ReflectError;
    use crate::info::Type;

    #[test]
    fn take_reports_argument_position() {
        let mut args = Args::new(vec![Value::from("arctos"), Value::from("li")]);
        assert_eq!(args.take::<String>().unwrap(), "arctos");

        let err = args.take::<bool>().unwrap_err();
        match err {
            ReflectError::ArgumentType {
                index,
                expected,
                found,
            } => {
                assert_eq!(index, 1);
                assert_eq!(expected, Type::of::<bool>());
                assert_eq!(found, Type::of::<String>());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn take_past_end() {
        let mut args = Args::new(vec![]);
        assert!(matches!(
            args.take::<bool>(),
            Err(ReflectError::ArgumentCount {
                expected: 1,
                found: 0
            })
        ));
    }

    #[test]
    fn accessors_match_variant() {
        assert_eq!(Value::I32(7).as_i32(), Some(7));
        assert_eq!(Value::Bool(true).as_i32(), None);
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::I32(7).as_object().is_none());

        let object = Value::Object(Box::new(String::from("boxed")));
        let inner = object.as_object().and_then(|obj| obj.downcast_ref::<String>());
        assert_eq!(inner.map(String::as_str), Some("boxed"));
    }

    #[test]
    fn unit_round() {
        assert!(Value::from(()).is_unit());
        assert!(<()>::from_value(Value::Unit).is_ok());
        assert!(bool::from_value(Value::Unit).is_err());
    }

    #[test]
    fn serialize_primitives() {
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::I32(-3)).unwrap(), "-3");
        assert_eq!(
            serde_json::to_string(&Value::from("male")).unwrap(),
            "\"male\""
        );
        assert_eq!(serde_json::to_string(&Value::Unit).unwrap(), "null");
    }
}
