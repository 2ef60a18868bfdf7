//! In-memory reference registry for tests and smoke wiring.

use crate::extension::callable::TemplateCallable;
use crate::registry::{RegistryLookupError, TemplateRegistry};
use std::collections::BTreeMap;

/// Map-backed registry; duplicate `bind` overwrites the prior callable.
///
/// Production hosts bring their own registry; this one keeps the crate
/// exercisable without an engine.
#[derive(Default)]
pub struct MemoryRegistry {
    functions: BTreeMap<String, TemplateCallable>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Returns sorted bound function names.
    pub fn function_names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }
}

impl TemplateRegistry for MemoryRegistry {
    fn bind(&mut self, name: &str, callable: TemplateCallable) {
        self.functions.insert(name.to_string(), callable);
    }

    fn exists(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    fn resolve(&self, name: &str) -> Result<TemplateCallable, RegistryLookupError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryLookupError::NotFound(name.to_string()))
    }
}
