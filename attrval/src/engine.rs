//! The validation engine: one ordered pass over a form's controls.

use crate::adapter::{FormAdapter, FormSnapshot};
use crate::annotation::{annotation_keys, is_truthy};
use crate::outcome::{Failure, Outcome};
use crate::registry::{SharedRegistry, global_registry, read_registry};

/// Runs validation passes against a shared rule registry.
///
/// Engines are cheap to construct; they hold nothing but a handle to their
/// registry, so rules registered after construction are still visible.
pub struct Engine {
    registry: SharedRegistry,
}

impl Engine {
    /// Create an engine backed by the process-wide default registry.
    pub fn new() -> Self {
        Self::with_registry(global_registry())
    }

    /// Create an engine backed by an explicit registry.
    pub fn with_registry(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// The registry this engine reads from.
    pub fn registry(&self) -> SharedRegistry {
        SharedRegistry::clone(&self.registry)
    }

    /// Validate a form and report the first failure in document order.
    ///
    /// For each control, in order: a control that is not marked required
    /// (`ruleRequired` truthy) and whose value is empty is exempt from every
    /// rule, not just `required`. Otherwise each registered rule whose
    /// parameter annotation is present on the control runs, and the first
    /// predicate returning false ends the whole pass. Rule order within a
    /// control is unspecified; control order is always document order.
    pub fn validate(&self, form: &impl FormAdapter) -> Outcome {
        let snapshot = FormSnapshot::capture(form);
        let registry = read_registry(&self.registry);
        let required_key = annotation_keys("required").param;

        for control in snapshot.controls() {
            let required = control
                .annotation(&required_key)
                .is_some_and(is_truthy);
            if !required && control.value.is_empty() {
                continue;
            }

            for rule in registry.rules() {
                let keys = annotation_keys(rule.name());
                // Presence of the parameter annotation triggers the rule,
                // even when its value is empty.
                let Some(param) = control.annotation(&keys.param) else {
                    continue;
                };
                if !rule.check(&control.value, param, control, &snapshot) {
                    let message = control
                        .annotation(&keys.message)
                        .unwrap_or_else(|| rule.message())
                        .to_string();
                    return Outcome::Fail(Failure {
                        message,
                        control: control.clone(),
                    });
                }
            }
        }

        Outcome::Pass
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
