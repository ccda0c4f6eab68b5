//! End-to-end declaration rendering through the public API

use script_describe::{
    max_common_prefix, method_declaration, signature, signature_of_types, signature_of_values,
    type_declaration, type_name, type_string, variable_declaration, DescribeError, HostField,
    HostMethod, ModifierSet, Primitive, PrimitiveKind, RuntimeValue, ScriptMethod, ScriptVariable,
    TypeInfo, TypeRef,
};

fn host_class(name: &str) -> TypeRef {
    TypeRef::native(TypeInfo::class(name).with_modifiers(ModifierSet::PUBLIC))
}

fn host_interface(name: &str) -> TypeRef {
    TypeRef::native(
        TypeInfo::interface(name)
            .with_modifiers(ModifierSet::PUBLIC | ModifierSet::ABSTRACT | ModifierSet::INTERFACE),
    )
}

#[test]
fn test_absent_type_is_object() {
    assert_eq!(type_name(None), "Object");
}

#[test]
fn test_signature_separator_count() {
    for n in 0..6 {
        let params: Vec<String> = (0..n).map(|i| format!("T{}", i)).collect();
        let rendered = signature("f", &params);
        assert_eq!(rendered.matches(", ").count(), n.max(1) - 1, "n = {}", n);
        assert_eq!(rendered.matches('(').count(), 1);
        assert_eq!(rendered.matches(')').count(), 1);
        assert!(rendered.starts_with("f("));
        assert!(rendered.ends_with(')'));
    }
    assert_eq!(signature("f", Vec::<String>::new()), "f()");
}

#[test]
fn test_signature_of_mixed_types() {
    let string = host_class("String");
    let int = PrimitiveKind::Int.type_ref();
    assert_eq!(
        signature_of_types("substring", [Some(&string), Some(&int), None]),
        "substring(String, int, Object)"
    );
}

#[test]
fn test_terminator_follows_abstract_keyword() {
    let all = [
        ModifierSet::empty(),
        ModifierSet::PUBLIC,
        ModifierSet::PUBLIC | ModifierSet::ABSTRACT,
        ModifierSet::PROTECTED | ModifierSet::ABSTRACT,
        ModifierSet::PRIVATE | ModifierSet::STATIC | ModifierSet::FINAL,
        ModifierSet::ABSTRACT | ModifierSet::SYNCHRONIZED,
    ];
    for mods in all {
        let method = ScriptMethod::new("m", mods).returning(PrimitiveKind::Void.type_ref());
        let rendered = method_declaration(&method).unwrap();
        if mods.to_string().contains("abstract") {
            assert!(rendered.ends_with("m();"), "{}", rendered);
        } else {
            assert!(rendered.ends_with("m() {}"), "{}", rendered);
        }
    }
}

#[test]
fn test_add_method_round_trip() {
    let int = PrimitiveKind::Int.type_ref();
    let add = ScriptMethod::new("add", ModifierSet::PUBLIC)
        .returning(int.clone())
        .with_parameter("a", int.clone())
        .with_parameter("b", int);
    assert_eq!(method_declaration(&add).unwrap(), "public int add(int a, int b) {}");
}

#[test]
fn test_host_and_script_methods_share_shape() {
    let int = PrimitiveKind::Int.type_ref();
    let host = HostMethod::new("add", 0x0001, int.clone())
        .with_parameter(int.clone())
        .with_parameter(int.clone());
    let script = ScriptMethod::new("add", ModifierSet::PUBLIC)
        .returning(int.clone())
        .with_parameter("a", int.clone())
        .with_parameter("b", int);

    assert_eq!(method_declaration(&host).unwrap(), "public int add(int, int) {}");
    assert_eq!(method_declaration(&script).unwrap(), "public int add(int a, int b) {}");
}

#[test]
fn test_mismatched_parameter_names() {
    let method = ScriptMethod {
        name: "swap".to_string(),
        modifiers: ModifierSet::PUBLIC,
        return_type: None,
        parameter_types: vec![None, None],
        parameter_names: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    };
    let err = method_declaration(&method).unwrap_err();
    assert_eq!(
        err,
        DescribeError::ParameterCountMismatch {
            method: "swap".to_string(),
            types: 2,
            names: 3,
        }
    );
    assert_eq!(
        err.to_string(),
        "Parameter count mismatch for 'swap': 2 types, 3 names"
    );
}

#[test]
fn test_field_declarations() {
    let count = HostField::new("count", 0x0002 | 0x0010, PrimitiveKind::Int.type_ref());
    assert_eq!(variable_declaration(&count), "private final int count;");

    let count = ScriptVariable::new("count", ModifierSet::PRIVATE | ModifierSet::FINAL)
        .typed(PrimitiveKind::Int.type_ref());
    assert_eq!(variable_declaration(&count), "private final int count;");
}

#[test]
fn test_class_declaration() {
    let foo = TypeRef::native(
        TypeInfo::class("Foo")
            .with_modifiers(ModifierSet::PUBLIC)
            .extends(host_class("Bar"))
            .implements(host_interface("Baz"))
            .implements(host_interface("Qux")),
    );
    assert_eq!(
        type_declaration(&foo),
        "public class Foo extends Bar implements Baz, Qux {"
    );
}

#[test]
fn test_interfaces_never_extend_a_class() {
    let base = host_interface("Base");
    let cases = [
        TypeRef::native(
            TypeInfo::interface("Derived")
                .with_modifiers(ModifierSet::PUBLIC | ModifierSet::ABSTRACT | ModifierSet::INTERFACE)
                .implements(base.clone()),
        ),
        TypeRef::generated(
            TypeInfo::interface("Derived")
                .with_modifiers(ModifierSet::PUBLIC)
                .implements(base),
        ),
    ];
    for ty in &cases {
        let rendered = type_declaration(ty);
        assert!(!rendered.contains("implements"), "{}", rendered);
        assert!(rendered.ends_with("Derived extends Base {"), "{}", rendered);
        assert_eq!(rendered.matches(" extends ").count(), 1);
    }
}

#[test]
fn test_type_keyword_follows_interface_flag() {
    let cases = [
        (
            TypeRef::native(TypeInfo::interface("Marker").with_modifiers(ModifierSet::PUBLIC)),
            "public interface Marker {",
        ),
        (TypeRef::native(TypeInfo::interface("Baz")), "interface Baz {"),
        (host_interface("Closeable"), "public abstract interface Closeable {"),
        (
            TypeRef::native(
                TypeInfo::class("Foo")
                    .with_modifiers(ModifierSet::PUBLIC | ModifierSet::INTERFACE),
            ),
            "public class Foo extends Object {",
        ),
        (
            TypeRef::generated(TypeInfo::class("Local").with_modifiers(ModifierSet::INTERFACE)),
            "class Local extends Object {",
        ),
    ];
    for (ty, expected) in &cases {
        let rendered = type_declaration(ty);
        assert_eq!(&rendered, expected);
        assert_eq!(
            rendered.matches("interface").count() + rendered.matches("class ").count(),
            1,
            "{}",
            rendered
        );
    }
}

#[test]
fn test_native_and_generated_inheritance_clauses_agree() {
    let build = |info: TypeInfo| {
        info.with_modifiers(ModifierSet::PUBLIC)
            .extends(host_class("AbstractList"))
            .implements(host_interface("RandomAccess"))
    };
    let native = TypeRef::native(build(TypeInfo::class("Rows")));
    let generated = TypeRef::generated(build(TypeInfo::class("Rows")));

    assert_eq!(type_declaration(&native), type_declaration(&generated));
    assert_eq!(
        type_declaration(&generated),
        "public class Rows extends AbstractList implements RandomAccess {"
    );
}

#[test]
fn test_generated_class_without_supertype() {
    let script = TypeRef::generated(TypeInfo::class("Script"));
    assert_eq!(type_declaration(&script), "class Script extends Object {");
}

#[test]
fn test_runtime_value_names() {
    assert_eq!(type_string(&RuntimeValue::Null), "null");
    assert_eq!(type_string(&Primitive::Float(1.5).into()), "float");
    assert_eq!(type_string(&RuntimeValue::Object(host_class("HashMap"))), "HashMap");
}

#[test]
fn test_call_site_signature() {
    let args = vec![
        RuntimeValue::from(Primitive::Boolean(true)),
        RuntimeValue::Null,
        RuntimeValue::Object(TypeRef::generated(TypeInfo::class("Point"))),
    ];
    assert_eq!(signature_of_values("move", &args), "move(boolean, Object, Point)");
}

#[test]
fn test_common_prefix_examples() {
    assert_eq!(max_common_prefix("hello", "help"), "hel");
    assert_eq!(max_common_prefix("abc", "abc"), "abc");
    assert_eq!(max_common_prefix("abc", "xyz"), "");
}

#[test]
fn test_common_prefix_is_prefix_of_both() {
    let words = ["getName", "getNames", "getter", "get", "set", "", "g"];
    for a in words {
        for b in words {
            let prefix = max_common_prefix(a, b);
            assert!(a.starts_with(prefix) && b.starts_with(prefix), "{} / {}", a, b);
            let next_a = a[prefix.len()..].chars().next();
            let next_b = b[prefix.len()..].chars().next();
            assert!(next_a.is_none() || next_b.is_none() || next_a != next_b);
        }
    }
}
