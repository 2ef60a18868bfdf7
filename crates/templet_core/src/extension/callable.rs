//! First-class callable handle for host-invocable template functions.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Shared handle to one host-invocable template function.
///
/// The registration protocol never inspects arguments or return values; it
/// only moves handles between an extension and a registry. Cloning shares the
/// underlying function, so an alias binding and its target binding stay
/// interchangeable at call time.
#[derive(Clone)]
pub struct TemplateCallable {
    func: Arc<dyn Fn(&[String]) -> String + Send + Sync>,
}

impl TemplateCallable {
    /// Wraps one function taking zero or more positional arguments.
    pub fn new(func: impl Fn(&[String]) -> String + Send + Sync + 'static) -> Self {
        Self {
            func: Arc::new(func),
        }
    }

    /// Invokes the function with positional arguments.
    pub fn invoke(&self, args: &[String]) -> String {
        (self.func)(args)
    }

    /// Reports whether two handles share the same underlying function.
    pub fn shares_function(&self, other: &TemplateCallable) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Debug for TemplateCallable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("TemplateCallable")
    }
}
