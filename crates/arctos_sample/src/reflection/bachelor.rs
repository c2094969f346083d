use arctos_reflect::impls::NonGenericTypeInfoCell;
use arctos_reflect::info::{ConstructorInfo, FieldInfo, MethodInfo, Modifiers, Type, TypeInfo, Typed};
use arctos_reflect::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitDefault};
use arctos_reflect::{Reflect, impl_type_path};

use super::{ReflectStudying, Student, Studying};

// -----------------------------------------------------------------------------
// Bachelor

/// A [`Student`] working towards a first degree.
///
/// # Examples
///
/// ```
/// use arctos_sample::reflection::{Bachelor, Studying};
///
/// let mut bachelor = Bachelor::new();
/// assert_eq!(bachelor.student().name(), "unknown");
/// assert!(!bachelor.is_graduated());
///
/// bachelor.set_graduated(true);
/// assert!(bachelor.is_graduated());
/// assert_eq!(bachelor.study(), "I'm studying!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bachelor {
    base: Student,
    graduated: bool,
}

impl_type_path!((in arctos_sample::reflection) Bachelor);

impl Bachelor {
    /// A bachelor named `"unknown"`.
    pub fn new() -> Self {
        Self::with_name("unknown")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            base: Student::new(name),
            graduated: false,
        }
    }

    pub fn with_graduated(name: impl Into<String>, graduated: bool) -> Self {
        let mut this = Self::with_name(name);
        this.set_graduated(graduated);
        this
    }

    #[inline]
    pub fn student(&self) -> &Student {
        &self.base
    }

    #[inline]
    pub fn student_mut(&mut self) -> &mut Student {
        &mut self.base
    }

    #[inline]
    pub fn is_graduated(&self) -> bool {
        self.graduated
    }

    #[inline]
    pub fn set_graduated(&mut self, graduated: bool) {
        self.graduated = graduated;
    }

    fn is_bachelor() -> bool {
        true
    }

    fn degree_name() -> &'static str {
        "Bachelor"
    }

    fn study_string(&self) -> String {
        ["I'm ", "studying!"].concat()
    }
}

impl Default for Bachelor {
    fn default() -> Self {
        Self::new()
    }
}

impl Studying for Bachelor {
    fn study(&self) -> String {
        self.study_string()
    }
}

impl Typed for Bachelor {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            let string = Type::of::<String>();
            let boolean = Type::of::<bool>();

            TypeInfo::class::<Self>(Modifiers::PUBLIC)
                .with_superclass::<Student>()
                .with_constructors([
                    ConstructorInfo::new::<Self>(Modifiers::PUBLIC, [], |_| Ok(Bachelor::new())),
                    ConstructorInfo::new::<Self>(Modifiers::PUBLIC, [string], |args| {
                        Ok(Bachelor::with_name(args.take::<String>()?))
                    }),
                    ConstructorInfo::new::<Self>(Modifiers::PUBLIC, [string, boolean], |args| {
                        let name = args.take::<String>()?;
                        Ok(Bachelor::with_graduated(name, args.take::<bool>()?))
                    }),
                ])
                .with_fields([FieldInfo::instance::<Self, bool>(
                    "graduated",
                    Modifiers::PRIVATE,
                    |this| this.graduated,
                    |this, graduated| this.graduated = graduated,
                )])
                .with_methods([
                    MethodInfo::new_static::<Self, bool>(
                        "isBachelor",
                        Modifiers::PRIVATE,
                        [],
                        |_| Ok(Bachelor::is_bachelor()),
                    ),
                    MethodInfo::new_static::<Self, String>(
                        "degreeName",
                        Modifiers::PRIVATE,
                        [],
                        |_| Ok(Bachelor::degree_name().to_owned()),
                    ),
                    MethodInfo::instance::<Self, bool>("isGraduated", Modifiers::PUBLIC, [], |this, _| {
                        Ok(this.is_graduated())
                    }),
                    MethodInfo::instance::<Self, ()>(
                        "setGraduated",
                        Modifiers::PUBLIC,
                        [boolean],
                        |this, args| {
                            this.set_graduated(args.take::<bool>()?);
                            Ok(())
                        },
                    ),
                    MethodInfo::instance::<Self, String>("study", Modifiers::PUBLIC, [], |this, _| {
                        Ok(this.study())
                    }),
                    MethodInfo::instance::<Self, String>(
                        "getStudyString",
                        Modifiers::PRIVATE,
                        [],
                        |this, _| Ok(this.study_string()),
                    ),
                ])
        })
    }

    fn as_super(this: &Self) -> Option<&dyn Reflect> {
        Some(&this.base)
    }

    fn as_super_mut(this: &mut Self) -> Option<&mut dyn Reflect> {
        Some(&mut this.base)
    }
}

impl GetTypeMeta for Bachelor {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(2);
        meta.insert_trait::<TypeTraitDefault>(FromType::<Self>::from_type());
        meta.insert_trait::<ReflectStudying>(FromType::<Self>::from_type());
        meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<Student>();
    }
}
