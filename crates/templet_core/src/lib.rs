//! Core registration protocol for exposing named template callables.
//! This crate is the single source of truth for the extension lifecycle.

pub mod extension;
pub mod logging;
pub mod registry;

pub use extension::callable::TemplateCallable;
pub use extension::discovery::{
    is_reserved_hook_name, ExposedBehavior, Visibility, RESERVED_HOOK_NAMES,
};
pub use extension::registration::{
    AliasDeclarationHook, Extension, ExtensionBuilder, ManualRegistrationHook, RegistrationError,
    RegistrationScope,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use registry::{MemoryRegistry, RegistryLookupError, TemplateRegistry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
