//! A small class hierarchy described through [`arctos_reflect`], and the
//! introspection exercises run against it.
//!
//! - [`Student`](reflection::Student): abstract base, implements
//!   [`Studying`](reflection::Studying), owns the shared `GENDER` attribute.
//! - [`Bachelor`](reflection::Bachelor): a student with a `graduated` flag.
//! - [`Master`](reflection::Master): a student who is also a
//!   [`Person`](reflection::Person).
//!
//! ```
//! use arctos_reflect::registry::TypeRegistry;
//!
//! let mut registry = TypeRegistry::new();
//! arctos_sample::reflection::register_types(&mut registry);
//!
//! let master = registry.for_name("arctos_sample::reflection::Master").unwrap();
//! assert_eq!(master.superclass().unwrap().type_name(), "Student");
//! ```

extern crate alloc;

pub mod reflection;
