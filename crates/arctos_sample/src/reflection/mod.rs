//! The sample hierarchy and its type descriptors.
//!
//! Every type here lives under the `arctos_sample::reflection` module path,
//! which is what [`TypeRegistry::for_name`] expects.
//!
//! [`TypeRegistry::for_name`]: arctos_reflect::registry::TypeRegistry::for_name

// -----------------------------------------------------------------------------
// Modules

mod bachelor;
mod capability;
mod master;
mod student;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use bachelor::Bachelor;
pub use capability::{Person, ReflectPerson, ReflectStudying, Studying};
pub use master::Master;
pub use student::Student;

use arctos_reflect::registry::TypeRegistry;

/// Registers every sample type, with its superclass and interfaces.
pub fn register_types(registry: &mut TypeRegistry) {
    registry.register::<Bachelor>();
    registry.register::<Master>();
}

arctos_reflect::auto_register!(Student, Bachelor, Master, dyn Studying, dyn Person);
