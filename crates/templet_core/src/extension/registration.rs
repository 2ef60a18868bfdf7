//! Extension registration lifecycle and alias policy.
//!
//! # Responsibility
//! - Run the fixed discover -> manual-register -> declare-aliases -> resolve
//!   lifecycle against one registry at a time.
//! - Keep the externally fed alias table ordered with last-write-wins keys.
//!
//! # Invariants
//! - Auto-discovery publishes only public, non-reserved declared behaviors,
//!   each under its own name.
//! - Pending aliases are resolved with existence verification; a missing
//!   target skips the alias, it never fails `register`.
//! - `add_alias` after `register` mutates the table only; a registry that was
//!   already registered against is never touched again.

use crate::extension::callable::TemplateCallable;
use crate::extension::discovery::{is_discoverable, ExposedBehavior, Visibility};
use crate::registry::{RegistryLookupError, TemplateRegistry};
use indexmap::IndexMap;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Manual-registration hook injected at build time.
pub type ManualRegistrationHook =
    Box<dyn Fn(&mut RegistrationScope<'_>) -> Result<(), RegistrationError> + Send + Sync>;

/// Alias-declaration hook injected at build time.
pub type AliasDeclarationHook =
    Box<dyn Fn(&mut RegistrationScope<'_>) -> Result<(), RegistrationError> + Send + Sync>;

/// Registration lifecycle errors.
#[derive(Debug)]
pub enum RegistrationError {
    /// Unchecked alias primitive hit a target with no binding.
    AliasTargetMissing {
        alias: String,
        source: RegistryLookupError,
    },
    /// Manual binding referenced a behavior the extension never declared.
    UnknownBehavior(String),
}

impl Display for RegistrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AliasTargetMissing { alias, source } => {
                write!(f, "alias `{alias}` cannot bind: {source}")
            }
            Self::UnknownBehavior(name) => write!(f, "declared behavior not found: {name}"),
        }
    }
}

impl Error for RegistrationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AliasTargetMissing { source, .. } => Some(source),
            Self::UnknownBehavior(_) => None,
        }
    }
}

/// Mutation surface handed to registration hooks.
///
/// A scope is only ever alive inside one `register` call, so every binding it
/// makes lands in the registry currently being registered against.
pub struct RegistrationScope<'a> {
    registry: &'a mut dyn TemplateRegistry,
    behaviors: &'a [ExposedBehavior],
    pending: &'a mut IndexMap<String, String>,
}

impl<'a> RegistrationScope<'a> {
    fn new(
        registry: &'a mut dyn TemplateRegistry,
        behaviors: &'a [ExposedBehavior],
        pending: &'a mut IndexMap<String, String>,
    ) -> Self {
        Self {
            registry,
            behaviors,
            pending,
        }
    }

    /// Binds one callable under `name`.
    pub fn bind_function(&mut self, name: &str, callable: TemplateCallable) {
        self.registry.bind(name, callable);
    }

    /// Binds an already-declared behavior under a different function name.
    ///
    /// Manual registration is explicit intent, so visibility is not checked
    /// here; only auto-discovery filters on it.
    pub fn bind_declared(
        &mut self,
        behavior_name: &str,
        function_name: &str,
    ) -> Result<(), RegistrationError> {
        let behavior = self
            .behaviors
            .iter()
            .find(|behavior| behavior.name() == behavior_name)
            .ok_or_else(|| RegistrationError::UnknownBehavior(behavior_name.to_string()))?;
        self.registry
            .bind(function_name, behavior.callable().clone());
        Ok(())
    }

    /// Reports whether `name` is currently bound in the registry.
    pub fn exists(&self, name: &str) -> bool {
        self.registry.exists(name)
    }

    /// Unchecked alias primitive: binds `alias` to the callable currently
    /// bound under `target`.
    ///
    /// Intended for hook-internal aliases whose targets were just bound in an
    /// earlier lifecycle step. A missing target is a caller error and
    /// propagates the registry lookup failure.
    pub fn bind_alias(&mut self, alias: &str, target: &str) -> Result<(), RegistrationError> {
        let callable =
            self.registry
                .resolve(target)
                .map_err(|source| RegistrationError::AliasTargetMissing {
                    alias: alias.to_string(),
                    source,
                })?;
        self.registry.bind(alias, callable);
        Ok(())
    }

    /// Checked alias primitive: binds only when `target` exists.
    ///
    /// Returns whether a binding was made; a missing target is skipped
    /// silently so externally fed aliases cannot fail registration.
    pub fn bind_alias_checked(&mut self, alias: &str, target: &str) -> bool {
        match self.registry.resolve(target) {
            Ok(callable) => {
                self.registry.bind(alias, callable);
                true
            }
            Err(RegistryLookupError::NotFound(_)) => false,
        }
    }

    /// Appends one alias to the extension's pending table instead of binding
    /// it now.
    ///
    /// Deferred aliases are resolved in the final lifecycle step, verified,
    /// together with aliases added externally via `add_alias`; last write for
    /// an alias name wins there too.
    pub fn add_pending_alias(&mut self, alias: &str, target: &str) {
        self.pending.insert(alias.to_string(), target.to_string());
    }

    /// Final lifecycle step: resolves the combined pending table (hook-added
    /// plus externally added aliases) through the checked primitive.
    fn resolve_pending(&mut self) -> (usize, usize) {
        let pending: Vec<(String, String)> = self
            .pending
            .iter()
            .map(|(alias, target)| (alias.clone(), target.clone()))
            .collect();

        let mut resolved = 0usize;
        let mut skipped = 0usize;
        for (alias, target) in &pending {
            if self.bind_alias_checked(alias, target) {
                resolved += 1;
            } else {
                skipped += 1;
            }
        }
        (resolved, skipped)
    }
}

/// Builder collecting declared behaviors and lifecycle hooks.
///
/// Replaces subclass-override dispatch with explicit strategy injection: the
/// discovery set is data, the two hooks are callbacks, and the lifecycle
/// contract stays discover -> manual-register -> declare-aliases.
pub struct ExtensionBuilder {
    auto_discover: bool,
    behaviors: Vec<ExposedBehavior>,
    manual_hook: Option<ManualRegistrationHook>,
    alias_hook: Option<AliasDeclarationHook>,
}

impl ExtensionBuilder {
    pub fn new() -> Self {
        Self {
            auto_discover: true,
            behaviors: Vec::new(),
            manual_hook: None,
            alias_hook: None,
        }
    }

    /// Controls whether the discovery step runs. Enabled by default.
    pub fn auto_discover(mut self, enabled: bool) -> Self {
        self.auto_discover = enabled;
        self
    }

    /// Declares one behavior with explicit visibility.
    pub fn behavior(
        mut self,
        name: &str,
        visibility: Visibility,
        callable: TemplateCallable,
    ) -> Self {
        self.behaviors
            .push(ExposedBehavior::new(name, visibility, callable));
        self
    }

    /// Declares one public behavior.
    pub fn public_behavior(self, name: &str, callable: TemplateCallable) -> Self {
        self.behavior(name, Visibility::Public, callable)
    }

    /// Installs the manual-registration hook (lifecycle step 2).
    pub fn on_register(
        mut self,
        hook: impl Fn(&mut RegistrationScope<'_>) -> Result<(), RegistrationError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.manual_hook = Some(Box::new(hook));
        self
    }

    /// Installs the alias-declaration hook (lifecycle step 3).
    pub fn on_declare_aliases(
        mut self,
        hook: impl Fn(&mut RegistrationScope<'_>) -> Result<(), RegistrationError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.alias_hook = Some(Box::new(hook));
        self
    }

    pub fn build(self) -> Extension {
        Extension {
            auto_discover: self.auto_discover,
            behaviors: self.behaviors,
            manual_hook: self.manual_hook,
            alias_hook: self.alias_hook,
            aliases: IndexMap::new(),
            registered: false,
        }
    }
}

impl Default for ExtensionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One extension instance: a declared behavior set, two lifecycle hooks, and
/// a pending alias table.
pub struct Extension {
    auto_discover: bool,
    behaviors: Vec<ExposedBehavior>,
    manual_hook: Option<ManualRegistrationHook>,
    alias_hook: Option<AliasDeclarationHook>,
    aliases: IndexMap<String, String>,
    registered: bool,
}

impl Extension {
    pub fn builder() -> ExtensionBuilder {
        ExtensionBuilder::new()
    }

    /// Records one pending alias; last write for an alias name wins and the
    /// original insertion position is kept.
    ///
    /// Effective for a registry only when called before `register` runs for
    /// that registry. Later calls still mutate the table but are never
    /// re-resolved against a registry that was already registered. The call
    /// stays a silent no-op for that registry; a warning event makes the
    /// ordering hazard observable.
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        if self.registered {
            warn!(
                "event=alias_after_register module=extension status=inert \
                 alias={alias} target={target}"
            );
        }
        self.aliases.insert(alias.to_string(), target.to_string());
    }

    /// Returns pending aliases in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    /// Reports whether `register` has completed at least once.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Runs the full registration lifecycle against one registry.
    ///
    /// Safe to call again with a different registry; every step re-runs and
    /// produces an equivalent binding set there. Calling it twice against the
    /// same registry leaves duplicate-name handling to that registry.
    pub fn register(
        &mut self,
        registry: &mut dyn TemplateRegistry,
    ) -> Result<(), RegistrationError> {
        let mut scope = RegistrationScope::new(registry, &self.behaviors, &mut self.aliases);

        let mut discovered = 0usize;
        if self.auto_discover {
            for behavior in self.behaviors.iter().filter(|b| is_discoverable(b)) {
                scope.bind_function(behavior.name(), behavior.callable().clone());
                discovered += 1;
            }
        }

        if let Some(hook) = &self.manual_hook {
            hook(&mut scope)?;
        }
        if let Some(hook) = &self.alias_hook {
            hook(&mut scope)?;
        }

        let (resolved, skipped) = scope.resolve_pending();

        self.registered = true;
        debug!(
            "event=extension_register module=extension status=ok discovered={discovered} \
             aliases_resolved={resolved} aliases_skipped={skipped}"
        );
        Ok(())
    }
}
