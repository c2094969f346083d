use core::any::TypeId;
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// The names a type is known by at runtime.
///
/// - [`type_path`]: the canonical name, unique per registry.
/// - [`type_name`]: the simple name, several types may share it.
/// - [`type_ident`]: the bare identifier.
/// - [`module_path`]: the enclosing module, i.e. the package.
///
/// None of the names start with `::`.
///
/// # Implementing
///
/// Use [`impl_type_path!`](crate::impl_type_path) for named types:
///
/// ```
/// use arctos_reflect::{impl_type_path, info::TypePath};
///
/// struct Foo;
/// struct Bar;
///
/// impl_type_path!(Foo);
/// impl_type_path!((in my_crate::school) Bar);
///
/// assert_eq!(Foo::type_name(), "Foo");
/// assert_eq!(Bar::type_path(), "my_crate::school::Bar");
/// assert_eq!(Bar::module_path(), Some("my_crate::school"));
/// ```
///
/// Manually, for example for trait objects:
///
/// ```
/// use arctos_reflect::info::TypePath;
///
/// trait Walk {}
///
/// impl TypePath for dyn Walk {
///     fn type_path() -> &'static str { "my_crate::Walk" }
///     fn type_name() -> &'static str { "Walk" }
///     fn type_ident() -> &'static str { "Walk" }
///     fn module_path() -> Option<&'static str> { Some("my_crate") }
/// }
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Returns the canonical name, e.g. `arctos_sample::reflection::Master`.
    ///
    /// Two registered types must never share it.
    fn type_path() -> &'static str;

    /// Returns the simple name, e.g. `Master`.
    fn type_name() -> &'static str;

    /// Returns the short name of the type, without generics.
    fn type_ident() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive built-in types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// The [`TypePath`] functions of one type, callable without the type parameter.
///
/// # Examples
///
/// ```
/// use arctos_reflect::info::TypePathTable;
///
/// let x = TypePathTable::of::<String>();
/// assert_eq!(x.path(), "alloc::string::String");
/// assert_eq!(x.name(), "String");
/// assert_eq!(x.module_path(), Some("alloc::string"));
/// assert_eq!(x.crate_name(), Some("alloc"));
/// ```
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    /// Creates a new table from a type.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    /// See [`TypePath::type_path`]
    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`]
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// See [`TypePath::type_ident`]
    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    /// See [`TypePath::module_path`]
    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }

    /// Parse `crate_name` from `module_path`.
    #[inline]
    pub fn crate_name(&self) -> Option<&'static str> {
        let s = (self.module_path)()?;
        match s.find(':') {
            Some(index) => Some(&s[..index]),
            None => Some(s),
        }
    }
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("type_ident", &self.ident())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The base representation of a Rust type: a [`TypeId`] and its [`TypePathTable`].
///
/// Two `Type`s are equal when their ids are equal.
///
/// # Examples
///
/// ```
/// use arctos_reflect::info::Type;
///
/// let ty = Type::of::<bool>();
/// assert_eq!(ty.path(), "bool");
/// assert!(ty.is::<bool>());
/// assert_ne!(ty, Type::of::<String>());
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    /// Create a new [`Type`] from a type that implements [`TypePath`].
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub fn ident(&self) -> &'static str {
        self.type_path_table.ident()
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }

    /// See [`TypePathTable::crate_name`].
    #[inline]
    pub fn crate_name(&self) -> Option<&'static str> {
        self.type_path_table.crate_name()
    }

    /// Returns the [`TypePathTable`].
    #[inline]
    pub const fn type_path_table(&self) -> &TypePathTable {
        &self.type_path_table
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement type-path shortcut methods on a struct with a `ty` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the [`Type`](crate::info::Type).
        #[inline]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the [`TypeId`](core::any::TypeId).
        #[inline]
        pub const fn type_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ?Sized + 'static>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// Returns the fully qualified type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// Returns the short type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.$field.name()
        }

        /// Returns the type ident.
        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.$field.ident()
        }

        /// Returns the module path.
        #[inline]
        pub fn module_path(&self) -> Option<&'static str> {
            self.$field.module_path()
        }

        /// Returns the crate name.
        #[inline]
        pub fn crate_name(&self) -> Option<&'static str> {
            self.$field.crate_name()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Type, TypePathTable};

    #[test]
    fn primitive_has_no_crate() {
        let table = TypePathTable::of::<bool>();
        assert_eq!(table.crate_name(), None);
        assert_eq!(table.ident(), "bool");
    }

    #[test]
    fn type_equality_ignores_names() {
        assert_eq!(Type::of::<String>(), Type::of::<String>());
        assert_eq!(format!("{}", Type::of::<String>()), "String");
        assert_eq!(format!("{:?}", Type::of::<String>()), "alloc::string::String");
    }
}
