//! Runtime type introspection through an explicit metadata registry.
//!
//! Rust has no class objects to query at runtime, so every introspectable
//! type describes itself once, in a [`TypeInfo`](info::TypeInfo):
//! its path, modifiers, superclass, interfaces, constructors, fields and methods.
//! Descriptors are collected by a [`TypeRegistry`](registry::TypeRegistry)
//! and can be looked up by type path.
//!
//! ## Menu
//!
//! - [`info`]: static descriptors (`TypeInfo`, `FieldInfo`, `MethodInfo`, ...).
//! - [`access`]: accessible handles used to read, write and invoke members.
//! - [`registry`]: the type registry and its type traits.
//! - [`Value`]: the dynamic value passed through reflective calls.
//! - [`Reflect`]: object-safe access to the runtime type of a value.
//!
//! ## Example
//!
//! ```
//! use arctos_reflect::info::{Modifiers, Type, TypeInfo, Typed, ConstructorInfo, FieldInfo};
//! use arctos_reflect::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
//! use arctos_reflect::{Value, impl_type_path};
//! use arctos_reflect::impls::NonGenericTypeInfoCell;
//!
//! #[derive(Default)]
//! struct Point { x: i32 }
//!
//! impl_type_path!((in demo) Point);
//!
//! impl Typed for Point {
//!     fn type_info() -> &'static TypeInfo {
//!         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
//!         CELL.get_or_init(|| {
//!             TypeInfo::class::<Self>(Modifiers::PUBLIC)
//!                 .with_constructors([ConstructorInfo::new::<Self>(
//!                     Modifiers::PUBLIC,
//!                     [],
//!                     |_| Ok(Point::default()),
//!                 )])
//!                 .with_fields([FieldInfo::instance::<Self, i32>(
//!                     "x",
//!                     Modifiers::PRIVATE,
//!                     |p| p.x,
//!                     |p, x| p.x = x,
//!                 )])
//!         })
//!     }
//! }
//!
//! impl GetTypeMeta for Point {
//!     fn get_type_meta() -> TypeMeta {
//!         TypeMeta::of::<Self>()
//!     }
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Point>();
//!
//! let info = registry.for_name("demo::Point").unwrap();
//! let mut point = info.constructor(&[]).unwrap().new_instance(vec![]).unwrap();
//!
//! let mut x = info.declared_field("x").unwrap();
//! x.set_accessible(true);
//! x.set(Some(&mut *point), Value::I32(7)).unwrap();
//!
//! assert_eq!(point.downcast_ref::<Point>().unwrap().x, 7);
//! assert_eq!(x.ty(), Type::of::<i32>());
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Exported macros name paths through `$crate`, but doc tests and
// downstream crates see this crate as `arctos_reflect`.
extern crate self as arctos_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod reflection;
mod typeid_map;
mod value;

pub mod access;
pub mod impls;
pub mod info;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::{ReflectError, ResultExt};
pub use reflection::Reflect;
pub use typeid_map::TypeIdMap;
pub use value::{Args, FromValue, Value};
