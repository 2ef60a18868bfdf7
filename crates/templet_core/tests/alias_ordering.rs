use templet_core::{
    Extension, MemoryRegistry, RegistrationError, RegistrationScope, TemplateCallable,
    TemplateRegistry,
};

fn constant(value: &'static str) -> TemplateCallable {
    TemplateCallable::new(move |_: &[String]| value.to_string())
}

#[test]
fn aliases_added_after_register_never_reach_that_registry() {
    let mut registry = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .public_behavior("greet", constant("hi"))
        .build();

    extension.add_alias("early", "greet");
    extension
        .register(&mut registry)
        .expect("extension should register");
    extension.add_alias("late", "greet");

    assert!(registry.exists("early"));
    assert!(!registry.exists("late"));
    // The table itself still records the late alias.
    let pending: Vec<(&str, &str)> = extension.aliases().collect();
    assert_eq!(pending, vec![("early", "greet"), ("late", "greet")]);
}

#[test]
fn late_aliases_apply_to_a_registry_registered_afterwards() {
    let mut first = MemoryRegistry::new();
    let mut second = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .public_behavior("greet", constant("hi"))
        .build();

    extension
        .register(&mut first)
        .expect("first registration should succeed");
    extension.add_alias("late", "greet");
    extension
        .register(&mut second)
        .expect("second registration should succeed");

    assert!(!first.exists("late"));
    assert!(second.exists("late"));
}

#[test]
fn external_alias_with_missing_target_is_skipped_silently() {
    let mut registry = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .public_behavior("greet", constant("hi"))
        .build();

    extension.add_alias("typo", "gret");
    extension
        .register(&mut registry)
        .expect("registration must stay total despite the typo");

    assert!(registry.exists("greet"));
    assert!(!registry.exists("typo"));
}

#[test]
fn external_alias_overwrite_uses_the_last_target() {
    let mut registry = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .public_behavior("greet", constant("hi"))
        .public_behavior("farewell", constant("bye"))
        .build();

    extension.add_alias("word", "greet");
    extension.add_alias("word", "farewell");
    extension
        .register(&mut registry)
        .expect("extension should register");

    let word = registry.resolve("word").expect("alias should be bound");
    assert_eq!(word.invoke(&[]), "bye");
}

#[test]
fn hook_internal_unchecked_alias_fails_fast_on_missing_target() {
    let mut registry = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .on_declare_aliases(|scope: &mut RegistrationScope<'_>| {
            scope.bind_alias("shortcut", "never_bound")
        })
        .build();

    let err = extension
        .register(&mut registry)
        .expect_err("unchecked alias must surface immediately");
    match err {
        RegistrationError::AliasTargetMissing { alias, .. } => assert_eq!(alias, "shortcut"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn hook_deferred_aliases_resolve_with_external_ones_in_the_final_step() {
    let mut registry = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .auto_discover(false)
        .on_register(|scope: &mut RegistrationScope<'_>| {
            scope.bind_function("shout", constant("HI"));
            Ok(())
        })
        .on_declare_aliases(|scope: &mut RegistrationScope<'_>| {
            scope.add_pending_alias("loud", "shout");
            Ok(())
        })
        .build();
    extension.add_alias("noisy", "shout");

    extension
        .register(&mut registry)
        .expect("extension should register");

    let shout = registry.resolve("shout").expect("shout should be bound");
    for name in ["loud", "noisy"] {
        let alias = registry.resolve(name).expect("alias should be bound");
        assert!(alias.shares_function(&shout), "`{name}` should alias shout");
    }
}

#[test]
fn checked_alias_in_hook_reports_whether_it_bound() {
    let mut registry = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .public_behavior("greet", constant("hi"))
        .on_declare_aliases(|scope: &mut RegistrationScope<'_>| {
            assert!(scope.bind_alias_checked("hey", "greet"));
            assert!(!scope.bind_alias_checked("oops", "missing"));
            Ok(())
        })
        .build();

    extension
        .register(&mut registry)
        .expect("extension should register");

    assert!(registry.exists("hey"));
    assert!(!registry.exists("oops"));
}
