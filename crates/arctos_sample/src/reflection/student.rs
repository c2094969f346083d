use alloc::borrow::Cow;
use std::sync::{PoisonError, RwLock};

use arctos_reflect::impls::NonGenericTypeInfoCell;
use arctos_reflect::info::{ConstructorInfo, FieldInfo, MethodInfo, Modifiers, Type, TypeInfo, Typed};
use arctos_reflect::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
use arctos_reflect::impl_type_path;

use super::Studying;

/// Shared by every student, initialized once and never reset.
static GENDER: RwLock<Cow<'static, str>> = RwLock::new(Cow::Borrowed("male"));

// -----------------------------------------------------------------------------
// Student

/// The abstract base of [`Bachelor`](super::Bachelor) and [`Master`](super::Master).
///
/// A `Student` value only exists as the embedded part of a subclass,
/// its public constructor fails when called reflectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
}

impl_type_path!((in arctos_sample::reflection) Student);

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The name as subclasses report it, overridden by [`Master`](super::Master).
    #[inline]
    pub(crate) fn student_name(&self) -> &str {
        &self.name
    }

    /// Reads the class-level `GENDER` attribute.
    pub fn gender() -> String {
        GENDER
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .into_owned()
    }

    /// Replaces the class-level `GENDER` attribute, visible to every later read.
    pub fn set_gender(gender: impl Into<Cow<'static, str>>) {
        let gender = gender.into();
        log::debug!("GENDER = {gender:?}");
        *GENDER.write().unwrap_or_else(PoisonError::into_inner) = gender;
    }
}

impl Typed for Student {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::class::<Self>(Modifiers::PUBLIC | Modifiers::ABSTRACT)
                .with_interface::<dyn Studying>()
                .with_constructors([ConstructorInfo::new::<Self>(
                    Modifiers::PUBLIC,
                    [Type::of::<String>()],
                    |args| Ok(Student::new(args.take::<String>()?)),
                )])
                .with_fields([
                    FieldInfo::new_static::<Self, String>(
                        "GENDER",
                        Modifiers::PUBLIC,
                        Student::gender,
                        |gender| Student::set_gender(gender),
                    ),
                    FieldInfo::instance::<Self, String>(
                        "name",
                        Modifiers::PRIVATE,
                        |this| this.name.clone(),
                        |this, name| this.name = name,
                    ),
                ])
                .with_methods([
                    MethodInfo::instance::<Self, String>("getName", Modifiers::PUBLIC, [], |this, _| {
                        Ok(this.name.clone())
                    }),
                    MethodInfo::instance::<Self, ()>(
                        "setName",
                        Modifiers::PUBLIC,
                        [Type::of::<String>()],
                        |this, args| {
                            this.set_name(args.take::<String>()?);
                            Ok(())
                        },
                    ),
                    MethodInfo::instance::<Self, String>(
                        "getStudentName",
                        Modifiers::PROTECTED,
                        [],
                        |this, _| Ok(this.student_name().to_owned()),
                    ),
                ])
        })
    }
}

impl GetTypeMeta for Student {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<dyn Studying>();
    }
}
