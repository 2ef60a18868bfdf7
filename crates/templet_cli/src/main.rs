//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `templet_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use templet_core::{Extension, MemoryRegistry, TemplateCallable};

fn main() {
    let mut registry = MemoryRegistry::new();
    let mut extension = Extension::builder()
        .public_behavior(
            "upper",
            TemplateCallable::new(|args: &[String]| {
                args.first().map(|v| v.to_uppercase()).unwrap_or_default()
            }),
        )
        .build();
    extension.add_alias("uppercase", "upper");

    match extension.register(&mut registry) {
        Ok(()) => {
            println!("templet_core version={}", templet_core::core_version());
            println!("functions={}", registry.function_names().join(","));
        }
        Err(err) => eprintln!("registration failed: {err}"),
    }
}
