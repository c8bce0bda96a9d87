//! Annotation-driven form validation.
//!
//! Controls carry `rule<Name>` parameter annotations and optional
//! `msg<Name>` message overrides; the engine runs the matching rules from a
//! shared registry against each control in document order and reports the
//! first failure. A control that is not marked required and has an empty
//! value is exempt from every rule, so optional fields cost nothing while
//! blank.
//!
//! # Example
//!
//! ```
//! use attrval::{ControlDescriptor, ControlKind, Engine};
//!
//! let form = vec![
//!     ControlDescriptor::new(ControlKind::Text, "phone")
//!         .text("13800138000")
//!         .annotate("ruleRequired", "1")
//!         .annotate("ruleMobile", "")
//!         .annotate("msgMobile", "Please enter a valid mobile number"),
//!     ControlDescriptor::new(ControlKind::Text, "nickname")
//!         .annotate("ruleRangelength", "2,20"),
//! ];
//!
//! // The nickname is optional and blank, so its length rule never runs.
//! let outcome = Engine::new().validate(&form);
//! assert!(outcome.is_pass());
//! ```
//!
//! Custom rules join the same registry:
//!
//! ```
//! use attrval::{ControlDescriptor, ControlKind, Engine, RuleRegistry};
//!
//! let mut registry = RuleRegistry::with_builtins();
//! registry
//!     .register(
//!         "even",
//!         |value, _param, _control, _form| {
//!             value.as_text().parse::<i64>().is_ok_and(|n| n % 2 == 0)
//!         },
//!         "Please enter an even number",
//!     )
//!     .unwrap();
//!
//! let engine = Engine::with_registry(registry.into_shared());
//! let form = vec![
//!     ControlDescriptor::new(ControlKind::Text, "count")
//!         .text("3")
//!         .annotate("ruleEven", ""),
//! ];
//! assert_eq!(engine.validate(&form).message(), "Please enter an even number");
//! ```

pub mod adapter;
pub mod annotation;
pub mod binding;
pub mod engine;
pub mod outcome;
pub mod registry;
mod rules;

pub use adapter::{ControlDescriptor, ControlKind, ControlValue, FormAdapter, FormSnapshot};
pub use annotation::{AnnotationKeys, annotation_keys, is_truthy};
pub use binding::{CallbackError, FormBinding};
pub use engine::Engine;
pub use outcome::{Failure, Outcome};
pub use registry::{
    Predicate, RegisterError, Rule, RuleRegistry, SharedRegistry, global_registry,
};
