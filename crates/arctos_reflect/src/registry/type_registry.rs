use alloc::string::{String, ToString};
use core::any::TypeId;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use foldhash::fast::FixedState;
use hashbrown::{HashMap, HashSet};

use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};
use crate::{ReflectError, TypeIdMap};

type NameMap = HashMap<&'static str, TypeId, FixedState>;
type NameSet = HashSet<&'static str, FixedState>;

// -----------------------------------------------------------------------------
// TypeRegistry

/// The class table: every type that can be looked up by name at runtime.
///
/// Lookups go by [`TypeId`], by canonical path or by simple name.
/// [Registering] a type stores its [`TypeMeta`] here
/// using a type's [`GetTypeMeta`] implementation.
///
/// Types can then be looked up by full type path, or by their short name
/// when it is unambiguous.
///
/// # Example
///
/// ```
/// use arctos_reflect::registry::{TypeRegistry, TypeTraitDefault};
///
/// let input = "String"; // a simple name
/// let registry = TypeRegistry::new();
///
/// let generator = registry
///     .get_with_type_name(input).unwrap()
///     .get_trait::<TypeTraitDefault>().unwrap();
///
/// let s = generator.default();
/// assert_eq!(s.reflect_type_info().type_path(), "alloc::string::String");
///
/// let s = s.take::<String>().unwrap();
/// assert_eq!(s, "");
/// ```
///
/// [Registering]: TypeRegistry::register
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: NameMap,
    type_name_to_id: NameMap,
    ambiguous_names: NameSet,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// A registry with nothing in it, not even the primitives.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedState::with_seed(0)),
            type_name_to_id: HashMap::with_hasher(FixedState::with_seed(0)),
            ambiguous_names: HashSet::with_hasher(FixedState::with_seed(0)),
        }
    }

    /// Create a type registry with default registrations for the member types:
    ///
    /// - `()` `bool` `i32`
    /// - `String`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<i32>();
        registry.register::<String>();
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut NameMap,
        type_name_to_id: &mut NameMap,
        ambiguous_names: &mut NameSet,
    ) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        // Check for duplicate names.
        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                log::debug!("type name `{type_name}` is ambiguous, use the full type path");
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        // For new type, assuming that the full path cannot be duplicated.
        type_path_to_id.insert(ty.path(), ty.id());
    }

    // Returns `false` and leaves the table untouched if `type_id` is present.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Inserts `meta` unless its type is already present.
    ///
    /// Returns whether it was inserted.
    ///
    /// Superclass and interfaces are left alone, [`register`](Self::register) handles those.
    #[inline]
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        self.type_meta_table.try_insert(type_meta.type_id(), || {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            type_meta
        })
    }

    /// Registers `T` together with its superclass chain and interfaces, skipping what is already present.
    ///
    /// This will also recursively register any type dependencies as specified by
    /// [`GetTypeMeta::register_dependencies`]. Superclasses and interfaces named by
    /// the [`TypeInfo`] that are still missing afterwards get a plain [`TypeMeta`],
    /// so every ancestor can be found by name.
    ///
    /// If the meta for type `T` already exists, it will not be registered again
    /// and neither will its type dependencies.
    pub fn register<T: GetTypeMeta + ?Sized>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
            self.register_hierarchy(T::type_info());
        }
    }

    fn register_hierarchy(&mut self, info: &'static TypeInfo) {
        let parents = info.superclass().into_iter().chain(info.interfaces());
        for parent in parents {
            if self.try_insert_type_meta(TypeMeta::from_type_info(parent)) {
                self.register_hierarchy(parent);
            }
        }
    }

    /// [`register`](Self::register), with the type inferred from a value.
    #[inline]
    pub fn register_by_val<T: GetTypeMeta>(&mut self, _: &T) {
        self.register::<T>();
    }

    /// Registers every type submitted through [`auto_register!`](crate::auto_register).
    ///
    /// Calling it again registers nothing new. Returns `false` when the
    /// `auto_register` feature is off, in which case nothing happens.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;
            // Reduce the cost of duplicate registrations.
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Registers the type trait `D` for type `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` has not been registered.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => type_meta.insert_trait(D::from_type()),
            None => panic!(
                "Called `TypeRegistry::register_type_trait`, but the type `{}` of type_trait `{}` without registering",
                T::type_path(),
                core::any::type_name::<D>(),
            ),
        }
    }

    /// Whether `type_id` is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns a reference to the [`TypeMeta`] of the type with
    /// the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns a reference to the [`TypeMeta`] of the type with
    /// the given [type path].
    ///
    /// [type path]: crate::info::TypePath::type_path
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns a reference to the [`TypeMeta`] of the type with the given [type name].
    ///
    /// If the type name is ambiguous, or if no type with the given name
    /// has been registered, returns `None`.
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Whether several registered types share the simple [type name].
    ///
    /// [type name]: crate::info::TypePath::type_name
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the [`TypeInfo`] registered under a full type path.
    ///
    /// # Examples
    ///
    /// ```
    /// use arctos_reflect::{ReflectError, registry::TypeRegistry};
    ///
    /// let registry = TypeRegistry::new();
    /// assert_eq!(registry.for_name("bool").unwrap().type_name(), "bool");
    ///
    /// let err = registry.for_name("nowhere::Unknown").unwrap_err();
    /// assert!(matches!(err, ReflectError::ClassNotFound(name) if name == "nowhere::Unknown"));
    /// ```
    pub fn for_name(&self, type_path: &str) -> Result<&'static TypeInfo, ReflectError> {
        self.get_with_type_path(type_path)
            .map(TypeMeta::type_info)
            .ok_or_else(|| ReflectError::ClassNotFound(type_path.to_string()))
    }

    /// Resolves a [`Type`] by full type path, or by unambiguous short name.
    ///
    /// Useful for spelling parameter lists as strings.
    pub fn type_by_name(&self, name: &str) -> Option<Type> {
        self.get_with_type_path(name)
            .or_else(|| self.get_with_type_name(name))
            .map(|meta| *meta.ty())
    }

    /// Returns a reference to the [`TypeTrait`] of type `T` associated with the given [`TypeId`].
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    /// Returns the [`TypeInfo`] associated with the given [`TypeId`].
    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    /// Returns an iterator over the [`TypeMeta`]s of the registered types.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Iterates the registered types that carry the type-trait `T`.
    pub fn iter_with_trait<T: TypeTrait>(&self) -> impl Iterator<Item = (&TypeMeta, &T)> {
        self.type_meta_table.values().filter_map(|item| {
            let type_trait = item.get_trait::<T>();
            type_trait.map(|t| (item, t))
        })
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A shared [`TypeRegistry`].
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    /// The wrapped [`TypeRegistry`].
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    /// Locks the registry for reading, recovering from poison.
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the registry for writing, recovering from poison.
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.read().type_path_to_id.keys().fmt(f)
    }
}

// -----------------------------------------------------------------------------
// Tests
