use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::ReflectError;
use crate::access::{Constructor, Field, Method};
use crate::info::{ConstructorInfo, FieldInfo, MethodInfo, Modifiers, Type, TypePath, Typed};
use crate::info::impl_type_fn;

// -----------------------------------------------------------------------------
// TypeKind

/// The kind of a reflected type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
        })
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// A container for the compile-time info of a class or an interface.
///
/// Only the members a type declares itself are stored,
/// inherited members are found by walking [`superclass`](Self::superclass)
/// and [`interfaces`](Self::interfaces).
///
/// Member queries come in two flavors:
///
/// - `declared_*`: members declared by this type, any visibility.
/// - `fields`, `methods`, `constructors`: public members,
///   fields and methods include inherited ones.
///
/// `TypeInfo` is stored in a static cell, so the queries take `&'static self`
/// and return handles that can outlive any borrow.
///
/// # Examples
///
/// ```
/// use arctos_reflect::info::{Modifiers, TypeInfo, TypeKind, Typed};
/// # use arctos_reflect::{impl_type_path, impls::NonGenericTypeInfoCell};
///
/// struct Shape;
/// # impl_type_path!((in geometry) Shape);
///
/// impl Typed for Shape {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::class::<Self>(Modifiers::PUBLIC | Modifiers::ABSTRACT))
///     }
/// }
///
/// let info = Shape::type_info();
/// assert_eq!(info.kind(), TypeKind::Class);
/// assert_eq!(info.type_path(), "geometry::Shape");
/// assert_eq!(info.module_path(), Some("geometry"));
/// assert!(info.modifiers().is_abstract());
/// assert!(info.superclass().is_none());
/// ```
pub struct TypeInfo {
    ty: Type,
    kind: TypeKind,
    modifiers: Modifiers,
    // `TypeInfo` of other types is created on first access; function pointers delay it.
    superclass: Option<fn() -> &'static TypeInfo>,
    interfaces: Box<[fn() -> &'static TypeInfo]>,
    constructors: Box<[ConstructorInfo]>,
    fields: Box<[FieldInfo]>,
    methods: Box<[MethodInfo]>,
}

impl TypeInfo {
    impl_type_fn!(ty);

    /// Create a new class descriptor without members.
    pub fn class<T: TypePath + ?Sized>(modifiers: Modifiers) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind: TypeKind::Class,
            modifiers: modifiers.difference(Modifiers::INTERFACE),
            superclass: None,
            interfaces: Box::new([]),
            constructors: Box::new([]),
            fields: Box::new([]),
            methods: Box::new([]),
        }
    }

    /// Create a new interface descriptor without members.
    ///
    /// Interfaces are always abstract.
    pub fn interface<T: TypePath + ?Sized>(modifiers: Modifiers) -> Self {
        Self {
            kind: TypeKind::Interface,
            modifiers: modifiers | Modifiers::INTERFACE | Modifiers::ABSTRACT,
            ..Self::class::<T>(Modifiers::empty())
        }
    }

    /// Sets the superclass.
    pub fn with_superclass<S: Typed + ?Sized>(self) -> Self {
        Self {
            superclass: Some(S::type_info),
            ..self
        }
    }

    /// Appends a directly implemented interface.
    pub fn with_interface<I: Typed + ?Sized>(self) -> Self {
        let mut interfaces = self.interfaces.into_vec();
        interfaces.push(I::type_info);
        Self {
            interfaces: interfaces.into_boxed_slice(),
            ..self
        }
    }

    /// Replaces the declared constructors, order is kept.
    pub fn with_constructors(self, constructors: impl IntoIterator<Item = ConstructorInfo>) -> Self {
        Self {
            constructors: constructors.into_iter().collect(),
            ..self
        }
    }

    /// Replaces the declared fields, order is kept.
    pub fn with_fields(self, fields: impl IntoIterator<Item = FieldInfo>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            ..self
        }
    }

    /// Replaces the declared methods, order is kept.
    pub fn with_methods(self, methods: impl IntoIterator<Item = MethodInfo>) -> Self {
        Self {
            methods: methods.into_iter().collect(),
            ..self
        }
    }

    #[inline]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    #[inline]
    pub const fn is_interface(&self) -> bool {
        matches!(self.kind, TypeKind::Interface)
    }

    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    // -------------------------------------------------------------------------
    // Hierarchy

    /// Returns the direct superclass, `None` at the root of a hierarchy.
    #[inline]
    pub fn superclass(&self) -> Option<&'static TypeInfo> {
        self.superclass.map(|f| f())
    }

    /// Returns the directly implemented interfaces in declaration order.
    ///
    /// Interfaces implemented by a superclass are not included.
    pub fn interfaces(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.interfaces.iter().map(|f| f())
    }

    /// Returns all superclasses, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'static TypeInfo> {
        core::iter::successors(self.superclass(), |class| class.superclass())
    }

    /// Whether a value of `other` can be used where `self` is expected:
    /// `other` is `self`, a subclass of it, or an implementor of it.
    pub fn is_assignable_from(&self, other: &TypeInfo) -> bool {
        if self.ty == other.ty {
            return true;
        }
        other
            .superclass()
            .is_some_and(|class| self.is_assignable_from(class))
            || other.interfaces().any(|iface| self.is_assignable_from(iface))
    }

    // -------------------------------------------------------------------------
    // Constructors

    /// Returns the declared constructors, any visibility.
    pub fn declared_constructors(&'static self) -> impl ExactSizeIterator<Item = Constructor> {
        self.constructors.iter().map(move |info| Constructor::new(self, info))
    }

    /// Returns the public constructors.
    pub fn constructors(&'static self) -> impl Iterator<Item = Constructor> {
        self.declared_constructors()
            .filter(|c| c.modifiers().is_public())
    }

    /// Returns the declared constructor with the given parameter types.
    pub fn declared_constructor(&'static self, params: &[Type]) -> Result<Constructor, ReflectError> {
        self.constructors
            .iter()
            .find(|info| info.matches(params))
            .map(|info| Constructor::new(self, info))
            .ok_or_else(|| self.no_such_constructor(params))
    }

    /// Returns the public constructor with the given parameter types.
    pub fn constructor(&'static self, params: &[Type]) -> Result<Constructor, ReflectError> {
        self.constructors()
            .find(|c| *c.params() == *params)
            .ok_or_else(|| self.no_such_constructor(params))
    }

    fn no_such_constructor(&self, params: &[Type]) -> ReflectError {
        ReflectError::NoSuchConstructor {
            class: self.type_path(),
            params: params.to_vec(),
        }
    }

    // -------------------------------------------------------------------------
    // Fields

    /// Returns the fields declared by this type, any visibility.
    pub fn declared_fields(&'static self) -> impl ExactSizeIterator<Item = Field> {
        self.fields.iter().map(move |info| Field::new(self, info))
    }

    /// Returns the declared field with the given name, any visibility.
    pub fn declared_field(&'static self, name: &str) -> Result<Field, ReflectError> {
        self.fields
            .iter()
            .find(|info| info.name() == name)
            .map(|info| Field::new(self, info))
            .ok_or_else(|| self.no_such_field(name))
    }

    /// Returns all public fields, declared and inherited.
    ///
    /// Own fields come first, then those of the interfaces, then those of the superclass.
    pub fn fields(&'static self) -> Vec<Field> {
        let mut out = Vec::new();
        self.collect_public_fields(&mut out);
        out
    }

    fn collect_public_fields(&'static self, out: &mut Vec<Field>) {
        for field in self.declared_fields() {
            if field.modifiers().is_public()
                && !out.iter().any(|f| core::ptr::eq(f.info(), field.info()))
            {
                out.push(field);
            }
        }
        for iface in self.interfaces() {
            iface.collect_public_fields(out);
        }
        if let Some(class) = self.superclass() {
            class.collect_public_fields(out);
        }
    }

    /// Returns the public field with the given name, declared or inherited.
    pub fn field(&'static self, name: &str) -> Result<Field, ReflectError> {
        self.fields()
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| self.no_such_field(name))
    }

    fn no_such_field(&self, name: &str) -> ReflectError {
        ReflectError::NoSuchField {
            class: self.type_path(),
            name: name.to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Methods

    /// Returns the methods declared by this type, any visibility, no inherited ones.
    pub fn declared_methods(&'static self) -> impl ExactSizeIterator<Item = Method> {
        self.methods.iter().map(move |info| Method::new(self, info))
    }

    /// Returns the declared method with the given signature, any visibility.
    pub fn declared_method(&'static self, name: &str, params: &[Type]) -> Result<Method, ReflectError> {
        self.methods
            .iter()
            .find(|info| info.matches(name, params))
            .map(|info| Method::new(self, info))
            .ok_or_else(|| self.no_such_method(name, params))
    }

    /// Returns all public methods, declared and inherited.
    ///
    /// An inherited method overridden by a nearer type is listed once,
    /// with its nearest declaration.
    pub fn methods(&'static self) -> Vec<Method> {
        let mut out = Vec::new();
        self.collect_public_methods(&mut out);
        out
    }

    fn collect_public_methods(&'static self, out: &mut Vec<Method>) {
        for method in self.declared_methods() {
            if method.modifiers().is_public()
                && !out.iter().any(|m| m.info().same_signature(method.info()))
            {
                out.push(method);
            }
        }
        if let Some(class) = self.superclass() {
            class.collect_public_methods(out);
        }
        for iface in self.interfaces() {
            iface.collect_public_methods(out);
        }
    }

    /// Returns the public method with the given signature, declared or inherited.
    pub fn method(&'static self, name: &str, params: &[Type]) -> Result<Method, ReflectError> {
        self.methods()
            .into_iter()
            .find(|m| m.info().matches(name, params))
            .ok_or_else(|| self.no_such_method(name, params))
    }

    fn no_such_method(&self, name: &str, params: &[Type]) -> ReflectError {
        ReflectError::NoSuchMethod {
            class: self.type_path(),
            name: name.to_string(),
            params: params.to_vec(),
        }
    }

    /// Finds the implementation of `method` for an object of this runtime type:
    /// the nearest non-private instance method with the same signature.
    pub fn dispatch(&'static self, method: &MethodInfo) -> Option<&'static MethodInfo> {
        core::iter::once(self)
            .chain(self.ancestors())
            .flat_map(|class| class.methods.iter())
            .find(|m| m.is_virtual() && !m.is_abstract() && m.same_signature(method))
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("ty", &self.ty)
            .field("kind", &self.kind)
            .field("modifiers", &self.modifiers)
            .field("superclass", &self.superclass().map(TypeInfo::type_path))
            .field(
                "interfaces",
                &self.interfaces().map(TypeInfo::type_path).collect::<Vec<_>>(),
            )
            .field("constructors", &self.constructors)
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .finish()
    }
}

impl fmt::Display for TypeInfo {
    /// Like `Class.toString()`: `class a::b::C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.type_path())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{FieldInfo, MethodInfo, Modifiers, TypeInfo, TypeKind, Typed};
    use crate::{Reflect, ReflectError, Value};

    trait Shape {}

    impl crate::info::TypePath for dyn Shape {
        fn type_path() -> &'static str {
            "geometry::Shape"
        }
        fn type_name() -> &'static str {
            "Shape"
        }
        fn type_ident() -> &'static str {
            "Shape"
        }
    }

    impl Typed for dyn Shape {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::interface::<Self>(Modifiers::PUBLIC).with_methods([
                    MethodInfo::new_abstract::<Self, i32>("area", Modifiers::PUBLIC, []),
                ])
            })
        }
    }

    struct Base {
        id: i32,
    }

    struct Square {
        base: Base,
        side: i32,
    }

    crate::impl_type_path!((in geometry) Base);
    crate::impl_type_path!((in geometry) Square);

    impl Typed for Base {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::class::<Self>(Modifiers::PUBLIC | Modifiers::ABSTRACT)
                    .with_interface::<dyn Shape>()
                    .with_fields([FieldInfo::instance::<Self, i32>(
                        "id",
                        Modifiers::PUBLIC,
                        |b| b.id,
                        |b, id| b.id = id,
                    )])
                    .with_methods([
                        MethodInfo::instance::<Self, i32>("area", Modifiers::PUBLIC, [], |_, _| Ok(0)),
                        MethodInfo::instance::<Self, i32>("id", Modifiers::PRIVATE, [], |b, _| Ok(b.id)),
                    ])
            })
        }
    }

    impl Typed for Square {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::class::<Self>(Modifiers::PUBLIC | Modifiers::FINAL)
                    .with_superclass::<Base>()
                    .with_fields([FieldInfo::instance::<Self, i32>(
                        "side",
                        Modifiers::PRIVATE,
                        |s| s.side,
                        |s, side| s.side = side,
                    )])
                    .with_methods([MethodInfo::instance::<Self, i32>(
                        "area",
                        Modifiers::PUBLIC,
                        [],
                        |s, _| Ok(s.side * s.side),
                    )])
            })
        }

        fn as_super(this: &Self) -> Option<&dyn Reflect> {
            Some(&this.base)
        }

        fn as_super_mut(this: &mut Self) -> Option<&mut dyn Reflect> {
            Some(&mut this.base)
        }
    }

    #[test]
    fn hierarchy_queries() {
        let square = Square::type_info();
        let base = Base::type_info();
        let shape = <dyn Shape>::type_info();

        assert_eq!(shape.kind(), TypeKind::Interface);
        assert!(shape.modifiers().is_interface());
        assert_eq!(square.ancestors().map(TypeInfo::type_name).collect::<Vec<_>>(), ["Base"]);
        assert!(base.is_assignable_from(square));
        assert!(shape.is_assignable_from(square));
        assert!(!square.is_assignable_from(base));
    }

    #[test]
    fn public_members_hide_overridden() {
        let square = Square::type_info();

        let fields: Vec<_> = square.fields().iter().map(|f| f.name()).collect();
        assert_eq!(fields, ["id"]);

        let methods = square.methods();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].declaring_type().type_name(), "Square");
        assert_eq!(square.declared_methods().len(), 1);
        assert_eq!(square.declared_fields().map(|f| f.name()).collect::<Vec<_>>(), ["side"]);
        assert_eq!(square.declared_constructors().len(), 0);
    }

    #[test]
    fn dispatch_picks_nearest_override() {
        let square = Square::type_info();
        let area = <dyn Shape>::type_info().method("area", &[]).unwrap();
        let resolved = square.dispatch(area.info()).unwrap();
        assert_eq!(resolved.owner().name(), "Square");

        let mut value = Square {
            base: Base { id: 3 },
            side: 4,
        };
        assert_eq!(area.invoke(Some(&mut value), vec![]).unwrap(), Value::I32(16));

        let base_area = Base::type_info().method("area", &[]).unwrap();
        assert_eq!(base_area.invoke(Some(&mut value), vec![]).unwrap(), Value::I32(16));

        let mut id = Base::type_info().declared_method("id", &[]).unwrap();
        id.set_accessible(true);
        assert_eq!(id.invoke(Some(&mut value), vec![]).unwrap(), Value::I32(3));
    }

    #[test]
    fn missing_members() {
        let square = Square::type_info();
        assert!(matches!(
            square.declared_field("id"),
            Err(ReflectError::NoSuchField { class: "geometry::Square", .. })
        ));
        assert!(matches!(
            square.constructor(&[]),
            Err(ReflectError::NoSuchConstructor { .. })
        ));
        assert!(square.field("id").is_ok());
    }
}
