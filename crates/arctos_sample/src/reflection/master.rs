use arctos_reflect::impls::NonGenericTypeInfoCell;
use arctos_reflect::info::{ConstructorInfo, MethodInfo, Modifiers, Type, TypeInfo, Typed};
use arctos_reflect::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry};
use arctos_reflect::{Reflect, impl_type_path};

use super::{Person, ReflectPerson, ReflectStudying, Student, Studying};

// -----------------------------------------------------------------------------
// Master

/// A [`Student`] who is also a [`Person`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Master {
    base: Student,
}

impl_type_path!((in arctos_sample::reflection) Master);

impl Master {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: Student::new(name),
        }
    }

    #[inline]
    pub fn student(&self) -> &Student {
        &self.base
    }

    #[inline]
    pub fn student_mut(&mut self) -> &mut Student {
        &mut self.base
    }

    /// Overrides [`Student`]'s protected name accessor.
    pub(crate) fn student_name(&self) -> &str {
        "arctos"
    }
}

impl Studying for Master {
    fn study(&self) -> String {
        "I'm studying!".to_owned()
    }
}

impl Person for Master {
    fn walk(&self) -> String {
        "I'm walking!".to_owned()
    }
}

impl Typed for Master {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::class::<Self>(Modifiers::PUBLIC)
                .with_superclass::<Student>()
                .with_interface::<dyn Person>()
                .with_constructors([ConstructorInfo::new::<Self>(
                    Modifiers::PUBLIC,
                    [Type::of::<String>()],
                    |args| Ok(Master::new(args.take::<String>()?)),
                )])
                .with_methods([
                    MethodInfo::instance::<Self, String>("walk", Modifiers::PUBLIC, [], |this, _| {
                        Ok(this.walk())
                    }),
                    MethodInfo::instance::<Self, String>(
                        "getStudentName",
                        Modifiers::PROTECTED,
                        [],
                        |this, _| Ok(this.student_name().to_owned()),
                    ),
                    MethodInfo::instance::<Self, String>("study", Modifiers::PUBLIC, [], |this, _| {
                        Ok(this.study())
                    }),
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

impl GetTypeMeta for Master {
    fn get_type_meta() -> TypeMeta {
        let mut meta = TypeMeta::with_capacity::<Self>(2);
        meta.insert_trait::<ReflectStudying>(FromType::<Self>::from_type());
        meta.insert_trait::<ReflectPerson>(FromType::<Self>::from_type());
        meta
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<Student>();
        registry.register::<dyn Person>();
    }
}
