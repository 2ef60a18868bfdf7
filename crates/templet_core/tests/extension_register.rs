use templet_core::{
    Extension, MemoryRegistry, RegistrationScope, TemplateCallable, TemplateRegistry, Visibility,
};

fn constant(value: &'static str) -> TemplateCallable {
    TemplateCallable::new(move |_: &[String]| value.to_string())
}

/// Extension mirroring the canonical greeting scenario: two public behaviors,
/// a manual binding of `greet` under `hello`, and an internal alias
/// `salut -> hello` declared in the alias hook.
fn greeting_extension() -> Extension {
    Extension::builder()
        .public_behavior("greet", constant("hi"))
        .public_behavior("farewell", constant("bye"))
        .on_register(|scope: &mut RegistrationScope<'_>| scope.bind_declared("greet", "hello"))
        .on_declare_aliases(|scope: &mut RegistrationScope<'_>| scope.bind_alias("salut", "hello"))
        .build()
}

#[test]
fn registers_discovered_manual_and_alias_bindings() {
    let mut registry = MemoryRegistry::new();
    let mut extension = greeting_extension();

    extension
        .register(&mut registry)
        .expect("greeting extension should register");

    assert_eq!(
        registry.function_names(),
        vec!["farewell", "greet", "hello", "salut"]
    );
    for name in ["greet", "hello", "salut"] {
        let callable = registry.resolve(name).expect("binding should exist");
        assert_eq!(callable.invoke(&[]), "hi", "`{name}` should greet");
    }
    let farewell = registry
        .resolve("farewell")
        .expect("farewell should be bound");
    assert_eq!(farewell.invoke(&[]), "bye");
}

#[test]
fn alias_and_target_share_the_same_callable() {
    let mut registry = MemoryRegistry::new();
    let mut extension = greeting_extension();

    extension
        .register(&mut registry)
        .expect("greeting extension should register");

    let hello = registry.resolve("hello").expect("hello should be bound");
    let salut = registry.resolve("salut").expect("salut should be bound");
    assert!(salut.shares_function(&hello));

    let greet = registry.resolve("greet").expect("greet should be bound");
    assert!(hello.shares_function(&greet));
}

#[test]
fn discovery_never_publishes_reserved_or_non_public_behaviors() {
    let mut registry = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .public_behavior("greet", constant("hi"))
        .public_behavior("to_string", constant("leak"))
        .public_behavior("construct", constant("leak"))
        .public_behavior("invoke", constant("leak"))
        .behavior("helper", Visibility::Internal, constant("leak"))
        .build();

    extension
        .register(&mut registry)
        .expect("extension should register");

    assert_eq!(registry.function_names(), vec!["greet"]);
    for name in ["to_string", "construct", "invoke", "helper"] {
        assert!(!registry.exists(name), "`{name}` must not be published");
    }
}

#[test]
fn disabled_discovery_leaves_only_manual_bindings() {
    let mut registry = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .auto_discover(false)
        .public_behavior("greet", constant("hi"))
        .public_behavior("farewell", constant("bye"))
        .on_register(|scope: &mut RegistrationScope<'_>| scope.bind_declared("greet", "hello"))
        .build();

    extension
        .register(&mut registry)
        .expect("extension should register");

    assert_eq!(registry.function_names(), vec!["hello"]);
}

#[test]
fn re_registration_against_a_second_registry_is_equivalent() {
    let mut first = MemoryRegistry::new();
    let mut second = MemoryRegistry::new();
    let mut extension = greeting_extension();

    extension
        .register(&mut first)
        .expect("first registration should succeed");
    extension
        .register(&mut second)
        .expect("second registration should succeed");

    assert_eq!(first.function_names(), second.function_names());
    let greet = second
        .resolve("greet")
        .expect("greet should be bound in second registry");
    assert_eq!(greet.invoke(&[]), "hi");
}
