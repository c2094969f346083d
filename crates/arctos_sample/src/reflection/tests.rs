use core::any::TypeId;

use arctos_reflect::info::{Type, TypeInfo, TypeKind, Typed};
use arctos_reflect::registry::{TypeRegistry, TypeTraitDefault};
use arctos_reflect::{Reflect, ReflectError, ResultExt, Value};

use super::{Bachelor, Master, ReflectPerson, ReflectStudying, Student, register_types};

const STUDENT: &str = "arctos_sample::reflection::Student";
const BACHELOR: &str = "arctos_sample::reflection::Bachelor";
const MASTER: &str = "arctos_sample::reflection::Master";

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    register_types(&mut registry);
    registry
}

fn class(path: &str) -> &'static TypeInfo {
    registry().for_name(path).unwrap()
}

// -----------------------------------------------------------------------------
// Class names

#[test]
fn class_names_from_object() {
    let master: Box<dyn Reflect> = Box::new(Master::new("arctos"));
    let class = master.reflect_type_info();

    assert_eq!(class.type_name(), "Master");
    assert_eq!(class.type_path(), MASTER);
    assert_eq!(class.to_string(), format!("class {MASTER}"));
}

#[test]
fn class_from_name() {
    let class = registry().for_name(MASTER).or_log("for_name");

    assert!(class.is_some_and(|class| class.type_name() == "Master"));
    assert!(core::ptr::eq(class.unwrap(), Master::type_info()));
}

#[test]
fn module_path_is_the_package() {
    let master: &dyn Reflect = &Master::new("arctos");
    assert_eq!(
        master.reflect_type_info().module_path(),
        Some("arctos_sample::reflection")
    );
    assert_eq!(master.reflect_type_info().crate_name(), Some("arctos_sample"));
}

#[test]
fn unknown_class_is_not_found() {
    let registry = registry();
    let err = registry.for_name("arctos_sample::reflection::Doctor").unwrap_err();
    assert!(matches!(err, ReflectError::ClassNotFound(ref name) if name.ends_with("Doctor")));

    // Lookups that fail are logged and swallowed.
    assert!(registry.for_name("Master").or_log("for_name").is_none());
    assert!(registry.get_with_type_name("Master").is_some());
}

// -----------------------------------------------------------------------------
// Modifiers, superclass and interfaces

#[test]
fn class_modifiers() {
    let master = class(MASTER).modifiers();
    let student = class(STUDENT).modifiers();

    assert!(master.is_public());
    assert!(!master.is_final());
    assert!(!master.is_abstract());
    assert!(student.is_abstract());
    assert!(student.is_public());
    assert_eq!(student.to_string(), "public abstract");
}

#[test]
fn superclass() {
    let superclass = class(MASTER).superclass().unwrap();
    assert_eq!(superclass.type_name(), "Student");
    assert_eq!(superclass.type_path(), STUDENT);
    assert!(superclass.superclass().is_none());

    assert_eq!(class(BACHELOR).superclass().map(TypeInfo::type_path), Some(STUDENT));
    assert_eq!(String::type_info().type_name(), "String");
    assert!(String::type_info().superclass().is_none());
}

#[test]
fn implemented_interfaces() {
    let master: Vec<_> = class(MASTER).interfaces().map(TypeInfo::type_name).collect();
    let student: Vec<_> = class(STUDENT).interfaces().map(TypeInfo::type_name).collect();

    assert_eq!(master, ["Person"]);
    assert_eq!(student, ["Studying"]);
    assert_eq!(class(BACHELOR).interfaces().len(), 0);

    let studying = class(STUDENT).interfaces().next().unwrap();
    assert_eq!(studying.kind(), TypeKind::Interface);
    assert!(studying.modifiers().is_abstract());
    assert!(studying.is_assignable_from(class(BACHELOR)));
    assert!(studying.is_assignable_from(class(MASTER)));
    assert!(!class(MASTER).interfaces().next().unwrap().is_assignable_from(class(BACHELOR)));
}

// -----------------------------------------------------------------------------
// Constructors

#[test]
fn all_constructors() {
    let constructors: Vec<_> = class(BACHELOR).constructors().collect();

    assert_eq!(constructors.len(), 3);
    for constructor in &constructors {
        assert_eq!(constructor.name(), BACHELOR);
    }
}

#[test]
fn constructors_by_param_types() {
    let bachelor = class(BACHELOR);
    let string = Type::of::<String>();
    let boolean = Type::of::<bool>();

    assert_eq!(bachelor.constructor(&[]).unwrap().params().len(), 0);
    assert_eq!(bachelor.constructor(&[string]).unwrap().params(), [string]);
    assert_eq!(bachelor.constructor(&[string, boolean]).unwrap().params(), [string, boolean]);

    let err = bachelor.constructor(&[boolean]).unwrap_err();
    assert!(matches!(err, ReflectError::NoSuchConstructor { class: BACHELOR, .. }));
}

#[test]
fn instantiate_at_runtime() {
    let bachelor = class(BACHELOR);
    let string = Type::of::<String>();
    let boolean = Type::of::<bool>();

    let first = bachelor.constructor(&[]).unwrap().new_instance(vec![]).unwrap();
    let second = bachelor
        .constructor(&[string])
        .unwrap()
        .new_instance(vec!["arctos".into()])
        .unwrap();
    let third = bachelor
        .constructor(&[string, boolean])
        .unwrap()
        .new_instance(vec!["arctos li".into(), true.into()])
        .unwrap();

    let first = first.take::<Bachelor>().unwrap();
    let second = second.take::<Bachelor>().unwrap();
    let third = third.take::<Bachelor>().unwrap();

    assert_eq!(first.student().name(), "unknown");
    assert!(!first.is_graduated());
    assert_eq!(second.student().name(), "arctos");
    assert!(!second.is_graduated());
    assert_eq!(third.student().name(), "arctos li");
    assert!(third.is_graduated());
}

#[test]
fn abstract_class_cannot_be_instantiated() {
    let student = class(STUDENT);
    let constructor = student.constructor(&[Type::of::<String>()]).unwrap();

    let err = constructor.new_instance(vec!["arctos".into()]).unwrap_err();
    assert!(matches!(err, ReflectError::Instantiation(STUDENT)));
}

#[test]
fn constructor_argument_mismatch() {
    let constructor = class(MASTER).constructor(&[Type::of::<String>()]).unwrap();

    let err = constructor.new_instance(vec![Value::I32(7)]).unwrap_err();
    assert!(matches!(err, ReflectError::ArgumentType { index: 0, .. }));

    let err = constructor.new_instance(vec![]).unwrap_err();
    assert!(matches!(err, ReflectError::ArgumentCount { expected: 1, found: 0 }));
}

// -----------------------------------------------------------------------------
// Fields

#[test]
fn public_fields() {
    let fields = class(BACHELOR).fields();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name(), "GENDER");
    assert_eq!(fields[0].declaring_type().type_path(), STUDENT);
    assert!(fields[0].modifiers().is_static());
}

#[test]
fn public_field_by_name() {
    let field = class(BACHELOR).field("GENDER").unwrap();
    assert_eq!(field.name(), "GENDER");

    let err = class(BACHELOR).field("graduated").unwrap_err();
    assert!(matches!(err, ReflectError::NoSuchField { class: BACHELOR, .. }));
}

#[test]
fn declared_fields() {
    let names: Vec<_> = class(BACHELOR).declared_fields().map(|f| f.name()).collect();
    assert_eq!(names, ["graduated"]);

    let names: Vec<_> = class(STUDENT).declared_fields().map(|f| f.name()).collect();
    assert_eq!(names, ["GENDER", "name"]);
}

#[test]
fn declared_field_by_name_and_type() {
    let field = class(BACHELOR).declared_field("graduated").unwrap();

    assert_eq!(field.name(), "graduated");
    assert_eq!(field.ty(), Type::of::<bool>());
    assert_eq!(field.ty().path(), "bool");
    assert!(field.modifiers().is_private());

    assert!(class(BACHELOR).declared_field("name").is_err());
}

#[test]
fn instance_field_set_and_get() {
    let bachelor = class(BACHELOR);
    let mut object = bachelor.constructor(&[]).unwrap().new_instance(vec![]).unwrap();
    let mut field = bachelor.declared_field("graduated").unwrap();

    let err = field.get(Some(&*object)).unwrap_err();
    assert!(matches!(err, ReflectError::IllegalAccess { member: "graduated", .. }));

    field.set_accessible(true);

    assert_eq!(field.get(Some(&*object)).unwrap(), Value::Bool(false));
    assert!(!field.get_as::<bool>(Some(&*object)).unwrap());
    assert!(!object.downcast_ref::<Bachelor>().unwrap().is_graduated());

    field.set(Some(&mut *object), Value::Bool(true)).unwrap();

    assert_eq!(field.get(Some(&*object)).unwrap(), Value::Bool(true));
    assert!(field.get_as::<bool>(Some(&*object)).unwrap());
    assert!(object.downcast_ref::<Bachelor>().unwrap().is_graduated());
}

#[test]
fn inherited_field_reaches_embedded_part() {
    let mut master = Master::new("arctos");
    let mut name = class(STUDENT).declared_field("name").unwrap();
    name.set_accessible(true);

    assert_eq!(name.get_as::<String>(Some(&master)).unwrap(), "arctos");
    name.set(Some(&mut master), "arctos li".into()).unwrap();
    assert_eq!(master.student().name(), "arctos li");

    let err = name.get(None).unwrap_err();
    assert!(matches!(err, ReflectError::NullTarget { member: "name" }));

    let err = name.get(Some(&true)).unwrap_err();
    assert!(matches!(err, ReflectError::TargetMismatch { found: "bool", .. }));

    let err = name.set(Some(&mut master), Value::I32(1)).unwrap_err();
    assert!(matches!(err, ReflectError::ArgumentType { index: 0, .. }));
}

/// Every read and write of `GENDER` stays in this test,
/// parallel tests would otherwise observe each other.
#[test]
fn shared_gender_field() {
    let registry = registry();
    let gender = registry.for_name(BACHELOR).unwrap().field("GENDER").unwrap();
    let bachelor = Bachelor::new();

    assert_eq!(gender.get(None).unwrap(), Value::from("male"));
    assert_eq!(Student::gender(), "male");

    gender.set(None, "female".into()).unwrap();

    assert_eq!(gender.get(None).unwrap(), Value::from("female"));
    assert_eq!(gender.get(Some(&bachelor)).unwrap(), Value::from("female"));
    assert_eq!(Student::gender(), "female");

    let through_master = registry.for_name(MASTER).unwrap().field("GENDER").unwrap();
    assert_eq!(through_master.get_as::<String>(None).unwrap(), "female");

    Student::set_gender("male");
    assert_eq!(gender.get_as::<String>(None).unwrap(), "male");

    let err = gender.set(None, Value::Bool(true)).unwrap_err();
    assert!(matches!(err, ReflectError::ArgumentType { .. }));
    assert_eq!(Student::gender(), "male");
}

// -----------------------------------------------------------------------------
// Methods

fn method_names(methods: impl IntoIterator<Item = arctos_reflect::access::Method>) -> Vec<&'static str> {
    methods.into_iter().map(|m| m.name()).collect()
}

#[test]
fn all_public_methods() {
    let names = method_names(class(BACHELOR).methods());

    for name in ["study", "isGraduated", "setGraduated", "getName", "setName"] {
        assert!(names.contains(&name), "missing {name}");
    }
    for name in ["getStudyString", "isBachelor", "degreeName", "getStudentName"] {
        assert!(!names.contains(&name), "unexpected {name}");
    }
    assert_eq!(names.iter().filter(|n| **n == "study").count(), 1);
}

#[test]
fn only_declared_methods() {
    let mut names = method_names(class(BACHELOR).declared_methods());
    names.sort_unstable();

    let mut expected = vec![
        "study",
        "isGraduated",
        "setGraduated",
        "getStudyString",
        "isBachelor",
        "degreeName",
    ];
    expected.sort_unstable();

    assert_eq!(names, expected);
}

#[test]
fn private_method_needs_accessible() {
    let mut bachelor = Bachelor::new();
    let mut method = bachelor
        .reflect_type_info()
        .declared_method("getStudyString", &[])
        .unwrap();

    assert!(!method.is_accessible());
    let err = method.invoke(Some(&mut bachelor), vec![]).unwrap_err();
    assert!(matches!(err, ReflectError::IllegalAccess { member: "getStudyString", .. }));

    method.set_accessible(true);

    assert!(method.is_accessible());
    assert_eq!(
        method.invoke(Some(&mut bachelor), vec![]).unwrap(),
        Value::from("I'm studying!")
    );
}

#[test]
fn invoke_instance_methods() {
    let bachelor = class(BACHELOR);
    let mut object = bachelor.constructor(&[]).unwrap().new_instance(vec![]).unwrap();
    let is_graduated = bachelor.declared_method("isGraduated", &[]).unwrap();
    let set_graduated = bachelor
        .declared_method("setGraduated", &[Type::of::<bool>()])
        .unwrap();

    assert_eq!(is_graduated.invoke(Some(&mut *object), vec![]).unwrap(), Value::Bool(false));
    assert!(!object.downcast_ref::<Bachelor>().unwrap().is_graduated());

    let ret = set_graduated.invoke(Some(&mut *object), vec![true.into()]).unwrap();
    assert!(ret.is_unit());

    assert_eq!(is_graduated.invoke(Some(&mut *object), vec![]).unwrap(), Value::Bool(true));
    assert!(object.downcast_ref::<Bachelor>().unwrap().is_graduated());

    let err = set_graduated.invoke(Some(&mut *object), vec!["yes".into()]).unwrap_err();
    assert!(matches!(err, ReflectError::ArgumentType { index: 0, .. }));

    let err = is_graduated.invoke(None, vec![]).unwrap_err();
    assert!(matches!(err, ReflectError::NullTarget { member: "isGraduated" }));
}

#[test]
fn invoke_static_methods_without_target() {
    let bachelor = class(BACHELOR);
    let mut is_bachelor = bachelor.declared_method("isBachelor", &[]).unwrap();
    let mut degree_name = bachelor.declared_method("degreeName", &[]).unwrap();

    is_bachelor.set_accessible(true);
    degree_name.set_accessible(true);

    assert_eq!(is_bachelor.invoke(None, vec![]).unwrap(), Value::Bool(true));
    assert_eq!(degree_name.invoke(None, vec![]).unwrap(), Value::from("Bachelor"));

    let mut graduated = Bachelor::with_graduated("arctos", true);
    assert_eq!(is_bachelor.invoke(Some(&mut graduated), vec![]).unwrap(), Value::Bool(true));
}

#[test]
fn inherited_methods_run_on_embedded_part() {
    let mut bachelor = Bachelor::with_name("arctos");
    let info = class(BACHELOR);

    let get_name = info.method("getName", &[]).unwrap();
    let set_name = info.method("setName", &[Type::of::<String>()]).unwrap();
    assert_eq!(get_name.declaring_type().type_path(), STUDENT);

    set_name.invoke(Some(&mut bachelor), vec!["arctos li".into()]).unwrap();
    assert_eq!(bachelor.student().name(), "arctos li");
    assert_eq!(get_name.invoke(Some(&mut bachelor), vec![]).unwrap(), Value::from("arctos li"));

    let err = info.method("getStudyString", &[]).unwrap_err();
    assert!(matches!(err, ReflectError::NoSuchMethod { class: BACHELOR, .. }));
}

#[test]
fn interface_methods_dispatch_to_overrides() {
    let registry = registry();
    let studying = registry.for_name("arctos_sample::reflection::Studying").unwrap();
    let person = registry.for_name("arctos_sample::reflection::Person").unwrap();
    let study = studying.method("study", &[]).unwrap();
    let walk = person.method("walk", &[]).unwrap();

    let mut bachelor = Bachelor::new();
    let mut master = Master::new("arctos");

    assert_eq!(study.invoke(Some(&mut bachelor), vec![]).unwrap(), Value::from("I'm studying!"));
    assert_eq!(study.invoke(Some(&mut master), vec![]).unwrap(), Value::from("I'm studying!"));
    assert_eq!(walk.invoke(Some(&mut master), vec![]).unwrap(), Value::from("I'm walking!"));

    let err = walk.invoke(Some(&mut bachelor), vec![]).unwrap_err();
    assert!(matches!(err, ReflectError::TargetMismatch { found: BACHELOR, .. }));
}

#[test]
fn protected_accessor_is_overridden() {
    let mut method = class(STUDENT).declared_method("getStudentName", &[]).unwrap();
    let mut master = Master::new("someone");
    let mut bachelor = Bachelor::with_name("someone");

    assert!(method.modifiers().is_protected());
    assert!(method.invoke(Some(&mut master), vec![]).is_err());

    method.set_accessible(true);

    assert_eq!(method.invoke(Some(&mut master), vec![]).unwrap(), Value::from("arctos"));
    assert_eq!(method.invoke(Some(&mut bachelor), vec![]).unwrap(), Value::from("someone"));
}

// -----------------------------------------------------------------------------
// Registry and type traits

#[test]
fn hierarchy_is_registered() {
    let registry = registry();

    for path in [STUDENT, BACHELOR, MASTER] {
        assert!(registry.for_name(path).is_ok(), "{path}");
    }
    assert!(registry.get_with_type_name("Studying").is_some());
    assert!(registry.get_with_type_name("Person").is_some());
    assert_eq!(registry.type_by_name("bool"), Some(Type::of::<bool>()));
}

#[test]
fn capability_casters() {
    let registry = registry();
    let bachelor: Box<dyn Reflect> = Box::new(Bachelor::new());
    let master: Box<dyn Reflect> = Box::new(Master::new("arctos"));

    let studying = registry
        .get_type_trait::<ReflectStudying>(TypeId::of::<Bachelor>())
        .unwrap();
    assert_eq!(studying.get(&*bachelor).unwrap().study(), "I'm studying!");
    assert!(studying.get(&*master).is_none());

    let person = registry.get_type_trait::<ReflectPerson>(TypeId::of::<Master>()).unwrap();
    assert_eq!(person.get(&*master).unwrap().walk(), "I'm walking!");
    assert!(registry.get_type_trait::<ReflectPerson>(TypeId::of::<Bachelor>()).is_none());

    assert_eq!(registry.iter_with_trait::<ReflectStudying>().count(), 2);
}

#[test]
fn capability_casters_by_mut_and_box() {
    let registry = registry();
    let studying = registry
        .get_type_trait::<ReflectStudying>(TypeId::of::<Bachelor>())
        .unwrap();

    let mut bachelor: Box<dyn Reflect> = Box::new(Bachelor::with_name("arctos"));
    assert_eq!(studying.get_mut(&mut *bachelor).unwrap().study(), "I'm studying!");

    let boxed = studying.get_boxed(bachelor).ok().unwrap();
    assert_eq!(boxed.study(), "I'm studying!");

    let student: Box<dyn Reflect> = Box::new(Student::new("arctos"));
    let back = studying.get_boxed(student).err().unwrap();
    assert!(back.is::<Student>());
}

#[test]
fn default_constructor_from_registry() {
    let registry = registry();
    let default = registry
        .get_with_type_path(BACHELOR)
        .and_then(|meta| meta.get_trait::<TypeTraitDefault>())
        .unwrap()
        .default();

    assert_eq!(default.take::<Bachelor>().unwrap(), Bachelor::new());
    assert!(registry.get_type_trait::<TypeTraitDefault>(TypeId::of::<Master>()).is_none());
}

#[cfg(feature = "auto_register")]
#[test]
fn auto_register_collects_sample_types() {
    let mut registry = TypeRegistry::empty();

    assert!(registry.auto_register());
    assert!(registry.contains(TypeId::of::<Bachelor>()));
    assert!(registry.contains(TypeId::of::<Master>()));
    assert!(registry.for_name(STUDENT).is_ok());
    assert!(registry.auto_register());
}

#[test]
fn values_serialize_for_logging() {
    let object = Value::from(Box::new(Master::new("arctos")) as Box<dyn Reflect>);

    assert_eq!(serde_json::to_string(&object).unwrap(), format!("\"{MASTER}\""));
    assert_eq!(serde_json::to_string(&Value::from("female")).unwrap(), "\"female\"");
    assert_eq!(serde_json::to_string(&Value::Unit).unwrap(), "null");
}
