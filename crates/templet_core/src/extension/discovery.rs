//! Declared behavior model and discovery eligibility filters.
//!
//! # Responsibility
//! - Hold the declared exposed-behavior data an extension publishes from.
//! - Keep the fixed exclusion lists that guard auto-discovery.
//!
//! # Invariants
//! - Exclusion lists are non-configurable constants; exhaustiveness is a
//!   correctness requirement, not an optimization.
//! - Only `Visibility::Public` behaviors are ever auto-published.

use crate::extension::callable::TemplateCallable;

/// External invocability of one declared behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Externally invocable; eligible for auto-discovery.
    Public,
    /// Usable through manual binding only; never auto-discovered.
    Internal,
}

/// One declared behavior an extension may expose to a registry.
#[derive(Debug, Clone)]
pub struct ExposedBehavior {
    name: String,
    visibility: Visibility,
    callable: TemplateCallable,
}

impl ExposedBehavior {
    pub fn new(name: &str, visibility: Visibility, callable: TemplateCallable) -> Self {
        Self {
            name: name.to_string(),
            visibility,
            callable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn callable(&self) -> &TemplateCallable {
        &self.callable
    }
}

/// Reserved object-lifecycle hook names, never published by auto-discovery
/// even when a concrete extension declares one as public.
///
/// Covers construction, destruction, dynamic dispatch, property interception,
/// serialization, stringification, invocation, cloning, and introspection
/// hooks in language-neutral form.
pub const RESERVED_HOOK_NAMES: &[&str] = &[
    "construct",
    "destruct",
    "call",
    "call_static",
    "get",
    "set",
    "isset",
    "unset",
    "sleep",
    "wakeup",
    "serialize",
    "unserialize",
    "to_string",
    "invoke",
    "set_state",
    "clone",
    "debug_info",
];

/// Identifiers of the extension plumbing surface itself. A declared behavior
/// shadowing one of these names is never auto-published, so lifecycle
/// plumbing cannot leak into a registry by accident.
const EXTENSION_BASE_NAMES: &[&str] = &[
    "register",
    "add_alias",
    "builder",
    "aliases",
    "bind_function",
    "bind_declared",
    "bind_alias",
    "bind_alias_checked",
];

/// Reports whether `name` is a reserved object-lifecycle hook.
pub fn is_reserved_hook_name(name: &str) -> bool {
    RESERVED_HOOK_NAMES.contains(&name)
}

pub(crate) fn is_extension_base_name(name: &str) -> bool {
    EXTENSION_BASE_NAMES.contains(&name)
}

/// Auto-discovery eligibility: public visibility, not extension plumbing,
/// not a reserved lifecycle hook.
pub(crate) fn is_discoverable(behavior: &ExposedBehavior) -> bool {
    behavior.visibility() == Visibility::Public
        && !is_extension_base_name(behavior.name())
        && !is_reserved_hook_name(behavior.name())
}
