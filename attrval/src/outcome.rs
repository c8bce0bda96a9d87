//! Result of one validation pass.

use crate::adapter::ControlDescriptor;

/// What a failing control looks like to the caller.
#[derive(Debug, Clone)]
pub struct Failure {
    /// Message to show: the control's `msg<Name>` annotation when present,
    /// otherwise the rule's default message.
    pub message: String,
    /// The first control that failed, in document order.
    pub control: ControlDescriptor,
}

/// Outcome of one validation pass.
///
/// At most one failure is reported per pass; the engine stops at the first
/// failing (control, rule) pair.
#[derive(Debug, Clone, Default)]
pub enum Outcome {
    /// Every applicable rule passed on every control.
    #[default]
    Pass,
    /// A control failed a rule.
    Fail(Failure),
}

impl Outcome {
    /// Whether the pass succeeded.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Whether the pass failed.
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// The failure message; empty on a passing outcome.
    pub fn message(&self) -> &str {
        match self {
            Self::Pass => "",
            Self::Fail(failure) => &failure.message,
        }
    }

    /// The failing control, if any.
    pub fn failing_control(&self) -> Option<&ControlDescriptor> {
        match self {
            Self::Pass => None,
            Self::Fail(failure) => Some(&failure.control),
        }
    }
}
