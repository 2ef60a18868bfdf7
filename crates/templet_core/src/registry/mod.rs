//! Host registry contract and lookup errors.
//!
//! # Responsibility
//! - Define the minimal capability set the lifecycle needs from a host
//!   registry: bind, exists, resolve.
//!
//! # Invariants
//! - Duplicate-name `bind` behavior is registry-defined, not specified here.
//! - `resolve` of an absent name is a lookup error surfaced at call time;
//!   the lifecycle never pre-validates that bound names will be invoked.

use crate::extension::callable::TemplateCallable;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;

pub use memory::MemoryRegistry;

/// Registry lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLookupError {
    NotFound(String),
}

impl Display for RegistryLookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "template function not found: {name}"),
        }
    }
}

impl Error for RegistryLookupError {}

/// Name-to-callable binding store owned by the host engine.
pub trait TemplateRegistry {
    /// Adds one name-to-callable binding.
    fn bind(&mut self, name: &str, callable: TemplateCallable);

    /// Reports whether a binding exists for `name`.
    fn exists(&self, name: &str) -> bool;

    /// Returns the callable currently bound under `name`.
    fn resolve(&self, name: &str) -> Result<TemplateCallable, RegistryLookupError>;
}
