//! Accessible handles for reading, writing and invoking members.
//!
//! ## Menu
//!
//! - [`Field`]: read or write a field, of an object or of a type.
//! - [`Method`]: invoke a method, with dispatch to the most derived override.
//! - [`Constructor`]: create a new boxed instance.
//!
//! Handles are obtained from a [`TypeInfo`](crate::info::TypeInfo).
//! Each handle carries an `accessible` flag, initially `false`;
//! public members can always be used, other members only after
//! [`set_accessible(true)`](Method::set_accessible).

// -----------------------------------------------------------------------------
// Modules

mod constructor;
mod field;
mod method;

// -----------------------------------------------------------------------------
// Internal API

use crate::info::Type;
use crate::{ReflectError, Value};

/// Check call arguments against declared parameter types.
fn check_args(params: &[Type], args: &[Value]) -> Result<(), ReflectError> {
    if params.len() != args.len() {
        return Err(ReflectError::ArgumentCount {
            expected: params.len(),
            found: args.len(),
        });
    }
    for (index, (expected, arg)) in params.iter().zip(args).enumerate() {
        let found = arg.ty();
        if *expected != found {
            return Err(ReflectError::ArgumentType {
                index,
                expected: *expected,
                found,
            });
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Exports

pub use constructor::Constructor;
pub use field::Field;
pub use method::Method;
