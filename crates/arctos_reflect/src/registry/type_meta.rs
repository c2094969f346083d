use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;
use core::ops::Deref;

use crate::TypeIdMap;
use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// Everything the [`TypeRegistry`] knows about one type.
///
/// The class descriptor ([`TypeInfo`]) plus a table of [`TypeTrait`]s keyed by their type.
///
/// An instance of `TypeMeta` can be created using the [`TypeMeta::of`]
/// method, but is more often generated by a [`GetTypeMeta`] implementation.
///
/// # Example
///
/// ```
/// # use arctos_reflect::registry::{TypeMeta, TypeTraitDefault, FromType};
/// let mut meta = TypeMeta::of::<String>();
/// meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
///
/// let f = meta.get_trait::<TypeTraitDefault>().unwrap();
/// let s = f.default().take::<String>().unwrap();
///
/// assert_eq!(s, "");
/// ```
pub struct TypeMeta {
    ty: Type,
    type_info: &'static TypeInfo,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Metadata for `T` with no type-traits yet.
    ///
    /// If you know the number of [`TypeTrait`] in advance,
    /// consider use [`TypeMeta::with_capacity`].
    #[inline]
    pub fn of<T: Typed + ?Sized>() -> Self {
        Self::from_type_info(T::type_info())
    }

    /// Like [`of`](Self::of), with room for `capacity` type-traits.
    #[inline]
    pub fn with_capacity<T: Typed + ?Sized>(capacity: usize) -> Self {
        let type_info = T::type_info();
        Self {
            ty: *type_info.ty(),
            type_info,
            trait_table: TypeIdMap::with_capacity(capacity),
        }
    }

    /// Create a empty [`TypeMeta`] from a [`TypeInfo`] only.
    ///
    /// Used for types reached through a descriptor, such as a superclass.
    #[inline]
    pub fn from_type_info(type_info: &'static TypeInfo) -> Self {
        Self {
            ty: *type_info.ty(),
            type_info,
            trait_table: TypeIdMap::new(),
        }
    }

    /// Returns the [`TypeInfo`] .
    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    crate::info::impl_type_fn!(ty);

    /// Adds a type-trait, replacing one of the same type.
    #[inline(always)]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.insert_trait_by_id(TypeId::of::<T>(), Box::new(data));
    }

    #[inline(never)]
    fn insert_trait_by_id(&mut self, id: TypeId, val: Box<dyn TypeTrait>) {
        self.trait_table.insert(id, val);
    }

    /// Removes a [`TypeTrait`] from the meta.
    #[inline]
    pub fn remove_trait<T: TypeTrait>(&mut self) -> Option<Box<T>> {
        self.remove_trait_by_id(TypeId::of::<T>())
            .and_then(|v| v.downcast::<T>().ok())
    }

    /// Removes a [`TypeTrait`] from the meta.
    pub fn remove_trait_by_id(&mut self, type_id: TypeId) -> Option<Box<dyn TypeTrait>> {
        self.trait_table.remove(&type_id)
    }

    /// The type-trait `T`, if present.
    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.get_trait_by_id(TypeId::of::<T>())
            .and_then(<dyn TypeTrait>::downcast_ref)
    }

    /// The type-trait `T`, if present.
    pub fn get_trait_by_id(&self, type_id: TypeId) -> Option<&dyn TypeTrait> {
        self.trait_table.get(&type_id).map(Deref::deref)
    }

    /// Whether a type-trait of type `T` is present.
    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    /// Number of type-traits.
    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }

    /// Iterates the type-traits, in no particular order.
    pub fn trait_iter(&self) -> impl ExactSizeIterator<Item = (TypeId, &dyn TypeTrait)> {
        self.trait_table
            .iter()
            .map(|(key, val)| (*key, val.deref()))
    }
}

impl Clone for TypeMeta {
    fn clone(&self) -> Self {
        let mut trait_table = TypeIdMap::with_capacity(self.trait_len());
        for (id, type_trait) in self.trait_table.iter() {
            trait_table.insert(*id, (**type_trait).clone_type_trait());
        }
        Self {
            ty: self.ty,
            type_info: self.type_info,
            trait_table,
        }
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_info", &self.type_info)
            .field("trait_len", &self.trait_len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Types that can describe themselves to a [`TypeRegistry`].
///
/// # Implementation
///
/// ```
/// use arctos_reflect::{impl_type_path, reflect_trait};
/// use arctos_reflect::impls::NonGenericTypeInfoCell;
/// use arctos_reflect::info::{Modifiers, TypeInfo, Typed};
/// use arctos_reflect::registry::{FromType, GetTypeMeta, TypeMeta};
///
/// trait Greet {
///     fn greet(&self) -> String;
/// }
///
/// reflect_trait!(struct ReflectGreet for dyn Greet);
///
/// struct A;
/// impl_type_path!(A);
///
/// impl Greet for A {
///     fn greet(&self) -> String { "hi".into() }
/// }
///
/// impl Typed for A {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::class::<A>(Modifiers::PUBLIC))
///     }
/// }
///
/// impl GetTypeMeta for A {
///     fn get_type_meta() -> TypeMeta {
///         let mut meta = TypeMeta::of::<Self>();
///         meta.insert_trait::<ReflectGreet>(FromType::<Self>::from_type());
///         meta
///     }
/// }
///
/// let meta = A::get_type_meta();
/// assert!(meta.has_trait::<ReflectGreet>());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot provide type registration information",
    note = "consider implementing `GetTypeMeta` with `TypeMeta::of::<Self>()`"
)]
pub trait GetTypeMeta: Typed {
    /// Builds the metadata registered for this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers the superclass, interfaces and any other type this one refers to.
    /// **Allow** not to register oneself.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::TypeMeta;
    use crate::registry::{FromType, TypeTraitDefault};

    #[test]
    fn trait_table_insert_remove() {
        let mut meta = TypeMeta::of::<String>();
        assert!(!meta.has_trait::<TypeTraitDefault>());

        meta.insert_trait::<TypeTraitDefault>(FromType::<String>::from_type());
        assert_eq!(meta.trait_len(), 1);

        let cloned = meta.clone();
        assert!(cloned.has_trait::<TypeTraitDefault>());

        assert!(meta.remove_trait::<TypeTraitDefault>().is_some());
        assert_eq!(meta.trait_len(), 0);
        assert_eq!(cloned.type_path(), "alloc::string::String");
    }
}
