use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

use crate::info::Type;

// -----------------------------------------------------------------------------
// ReflectError

/// Failure of a lookup or a dynamic access.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ReflectError {
    #[error("class `{0}` was not found in the registry")]
    ClassNotFound(String),

    #[error("`{class}` has no field `{name}`")]
    NoSuchField { class: &'static str, name: String },

    #[error("`{class}` has no method `{name}({})`", Params(params))]
    NoSuchMethod {
        class: &'static str,
        name: String,
        params: Vec<Type>,
    },

    #[error("`{class}` has no constructor `({})`", Params(params))]
    NoSuchConstructor {
        class: &'static str,
        params: Vec<Type>,
    },

    #[error("member `{class}::{member}` is not accessible")]
    IllegalAccess {
        class: &'static str,
        member: &'static str,
    },

    #[error("cannot instantiate `{0}`")]
    Instantiation(&'static str),

    #[error("wrong number of arguments: expected {expected}, found {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("argument {index} mismatch: expected `{expected}`, found `{found}`")]
    ArgumentType {
        index: usize,
        expected: Type,
        found: Type,
    },

    #[error("instance member `{member}` needs a target object")]
    NullTarget { member: &'static str },

    #[error("target `{found}` is not an instance of `{expected}`")]
    TargetMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("`{class}::{member}` has no body to invoke")]
    AbstractMethod {
        class: &'static str,
        member: &'static str,
    },
}

struct Params<'a>(&'a [Type]);

impl fmt::Display for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, ty) in self.0.iter().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            f.write_str(ty.name())?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ResultExt

/// Catch-and-log for reflective lookups.
///
/// Lookups are expected to succeed given correct names; when one does not,
/// the error is logged and swallowed.
///
/// ```
/// use arctos_reflect::{ResultExt, registry::TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// let info = registry.for_name("no::such::Class").or_log("for_name");
/// assert!(info.is_none());
/// ```
pub trait ResultExt<T> {
    /// Returns the success value, or logs the error under `context` and returns `None`.
    fn or_log(self, context: &str) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T, ReflectError> {
    fn or_log(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                log::error!("{context} -> {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::ReflectError;
    use crate::info::Type;

    #[test]
    fn method_signature_in_message() {
        let err = ReflectError::NoSuchMethod {
            class: "demo::Bachelor",
            name: "setGraduated".into(),
            params: vec![Type::of::<bool>(), Type::of::<alloc::string::String>()],
        };
        assert_eq!(
            err.to_string(),
            "`demo::Bachelor` has no method `setGraduated(bool, String)`"
        );
    }
}
