//! Static descriptors of reflected types and their members.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): Full name, a fixed and unique identifier for the type.
//!     - [`type_name`](TypePath::type_name): The name without module path, may be duplicated.
//!     - [`type_ident`](TypePath::type_ident): The name without generics and module path.
//!     - [`module_path`](TypePath::module_path): optional module path, the "package".
//!
//! - [`TypePathTable`]: A struct, storaging 4 function pointer for a single type's `TypePath` implementation.
//!
//! - [`Type`]: A struct contains a `TypeId` and a `TypePathTable`.
//!
//! - [`Modifiers`]: Access and shape flags (`public`, `abstract`, `static`, ...).
//!
//! - [`TypeInfo`]: A class or interface descriptor, including its superclass,
//!   interfaces and declared members.
//!     - [`ConstructorInfo`]: parameter types and a factory.
//!     - [`FieldInfo`]: field name, value type and accessors.
//!     - [`MethodInfo`]: method name, signature and body.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.

// -----------------------------------------------------------------------------
// Modules

mod constructor_info;
mod field_info;
mod method_info;
mod modifiers;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use constructor_info::ConstructorInfo;
pub use field_info::FieldInfo;
pub use method_info::{MethodBody, MethodInfo};
pub use modifiers::Modifiers;
pub use type_info::{TypeInfo, TypeKind};
pub use type_path::{Type, TypePath, TypePathTable};
pub use typed::Typed;
