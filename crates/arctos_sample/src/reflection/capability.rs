use arctos_reflect::impls::NonGenericTypeInfoCell;
use arctos_reflect::info::{MethodInfo, Modifiers, TypeInfo, TypePath, Typed};
use arctos_reflect::reflect_trait;
use arctos_reflect::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// Studying

/// Something that studies.
pub trait Studying {
    fn study(&self) -> String;
}

reflect_trait!(
    /// Casts a reflected value to `&dyn Studying`.
    pub struct ReflectStudying for dyn Studying
);

impl TypePath for dyn Studying {
    fn type_path() -> &'static str {
        "arctos_sample::reflection::Studying"
    }

    fn type_name() -> &'static str {
        "Studying"
    }

    fn type_ident() -> &'static str {
        "Studying"
    }

    fn module_path() -> Option<&'static str> {
        Some("arctos_sample::reflection")
    }
}

impl Typed for dyn Studying {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::interface::<Self>(Modifiers::PUBLIC).with_methods([
                MethodInfo::new_abstract::<Self, String>("study", Modifiers::PUBLIC, []),
            ])
        })
    }
}

impl GetTypeMeta for dyn Studying {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

// -----------------------------------------------------------------------------
// Person

/// Something that walks.
pub trait Person {
    fn walk(&self) -> String;
}

reflect_trait!(
    /// Casts a reflected value to `&dyn Person`.
    pub struct ReflectPerson for dyn Person
);

impl TypePath for dyn Person {
    fn type_path() -> &'static str {
        "arctos_sample::reflection::Person"
    }

    fn type_name() -> &'static str {
        "Person"
    }

    fn type_ident() -> &'static str {
        "Person"
    }

    fn module_path() -> Option<&'static str> {
        Some("arctos_sample::reflection")
    }
}

impl Typed for dyn Person {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::interface::<Self>(Modifiers::PUBLIC).with_methods([
                MethodInfo::new_abstract::<Self, String>("walk", Modifiers::PUBLIC, []),
            ])
        })
    }
}

impl GetTypeMeta for dyn Person {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}
