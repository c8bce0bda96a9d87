//! Submission binding: wires an engine to success/error callbacks.
//!
//! Callback failures are logged and swallowed here; they never change the
//! computed outcome. Callers are expected to suppress the native submit
//! action regardless of the outcome and act on the callbacks instead.

use thiserror::Error;

use crate::adapter::{ControlDescriptor, FormAdapter};
use crate::engine::Engine;
use crate::outcome::Outcome;

/// Error a callback may report. Logged at the binding boundary, never
/// propagated to the submitter.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CallbackError {
    /// Human-readable description of what went wrong in the callback.
    pub message: String,
}

impl CallbackError {
    /// Create a callback error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

type SuccessHandler<A> = Box<dyn Fn(&A) -> Result<(), CallbackError> + Send + Sync>;
type ErrorHandler = Box<dyn Fn(&str, &ControlDescriptor) -> Result<(), CallbackError> + Send + Sync>;

/// Binds a form to validation callbacks.
///
/// # Example
///
/// ```
/// use attrval::{ControlDescriptor, ControlKind, FormBinding};
///
/// let form = vec![
///     ControlDescriptor::new(ControlKind::Text, "username")
///         .annotate("ruleRequired", "1"),
/// ];
///
/// let binding = FormBinding::new(form)
///     .on_success(|_form| Ok(()))
///     .on_error(|message, _control| {
///         eprintln!("validation failed: {message}");
///         Ok(())
///     });
///
/// let outcome = binding.submit();
/// assert!(outcome.is_fail());
/// ```
pub struct FormBinding<A: FormAdapter> {
    form: A,
    engine: Engine,
    on_success: Option<SuccessHandler<A>>,
    on_error: Option<ErrorHandler>,
}

impl<A: FormAdapter> FormBinding<A> {
    /// Bind a form to the default engine.
    pub fn new(form: A) -> Self {
        Self::with_engine(form, Engine::new())
    }

    /// Bind a form to a specific engine.
    pub fn with_engine(form: A, engine: Engine) -> Self {
        Self {
            form,
            engine,
            on_success: None,
            on_error: None,
        }
    }

    /// Set the callback invoked when the form validates.
    pub fn on_success<F>(mut self, handler: F) -> Self
    where
        F: Fn(&A) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(handler));
        self
    }

    /// Set the callback invoked with the failure message and failing control.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &ControlDescriptor) -> Result<(), CallbackError> + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(handler));
        self
    }

    /// The bound form.
    pub fn form(&self) -> &A {
        &self.form
    }

    /// The engine backing this binding.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Validate the form and dispatch exactly one callback.
    ///
    /// Returns the outcome unchanged, whether or not a callback failed.
    pub fn submit(&self) -> Outcome {
        let outcome = self.engine.validate(&self.form);
        match &outcome {
            Outcome::Pass => {
                if let Some(handler) = &self.on_success {
                    if let Err(err) = handler(&self.form) {
                        log::error!("success callback failed: {err}");
                    }
                }
            }
            Outcome::Fail(failure) => {
                if let Some(handler) = &self.on_error {
                    if let Err(err) = handler(&failure.message, &failure.control) {
                        log::error!("error callback failed: {err}");
                    }
                }
            }
        }
        outcome
    }
}
