//! Form adapter seam between the engine and whatever renders the form.
//!
//! The engine never touches a UI surface directly. A [`FormAdapter`] hands it
//! an ordered list of [`ControlDescriptor`]s for one validation pass; the
//! descriptors carry everything a predicate may need (kind, name, value,
//! annotations).

use std::collections::HashMap;

/// Kind of a form control, decided once by the adapter.
///
/// Predicates dispatch on this variant instead of comparing type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Single-line text input.
    Text,
    /// Hidden input.
    Hidden,
    /// Single-choice select.
    SelectSingle,
    /// Multi-choice select.
    SelectMultiple,
    /// Radio button (grouped by `name`).
    Radio,
    /// Checkbox (grouped by `name`).
    Checkbox,
    /// Multi-line text area.
    TextArea,
    /// Anything else the adapter does not recognize.
    Other,
}

/// Current value of a control, as captured by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    /// Text-like value. Also used for a single-choice select, which carries
    /// its selected option value (empty string when nothing is selected).
    Text(String),
    /// Selected option values of a multi-choice select.
    Selected(Vec<String>),
    /// Checked state of a radio button or checkbox.
    Checked(bool),
}

impl ControlValue {
    /// Whether this value counts as empty for the required-exemption check.
    ///
    /// A toggle control always carries a value attribute, so `Checked` is
    /// never empty regardless of its state.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Selected(values) => values.is_empty(),
            Self::Checked(_) => false,
        }
    }

    /// The value as text; empty for non-text values.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            _ => "",
        }
    }
}

/// One form control as seen by the engine for a single validation pass.
///
/// Annotations are keyed by derived annotation keys (`ruleMobile`,
/// `msgMobile`, ...), exactly as the adapter read them off the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    /// Control kind.
    pub kind: ControlKind,
    /// Control name (groups radio buttons and checkboxes).
    pub name: String,
    /// Captured value.
    pub value: ControlValue,
    /// Annotation key to raw annotation value.
    pub annotations: HashMap<String, String>,
}

impl ControlDescriptor {
    /// Create a descriptor with the kind-appropriate empty value.
    pub fn new(kind: ControlKind, name: impl Into<String>) -> Self {
        let value = match kind {
            ControlKind::SelectMultiple => ControlValue::Selected(Vec::new()),
            ControlKind::Radio | ControlKind::Checkbox => ControlValue::Checked(false),
            _ => ControlValue::Text(String::new()),
        };
        Self {
            kind,
            name: name.into(),
            value,
            annotations: HashMap::new(),
        }
    }

    /// Set a text value.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.value = ControlValue::Text(value.into());
        self
    }

    /// Set the selected option values of a multi-choice select.
    pub fn selected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value = ControlValue::Selected(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the checked state of a toggle control.
    pub fn checked(mut self, checked: bool) -> Self {
        self.value = ControlValue::Checked(checked);
        self
    }

    /// Attach an annotation under its derived key, e.g. `ruleMobile`.
    pub fn annotate(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Look up an annotation by derived key.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}

/// Source of controls for one validation pass.
///
/// Implementations read a live form; the returned list is in document order
/// and is consumed within the pass.
pub trait FormAdapter {
    /// The ordered list of controls, captured fresh.
    fn controls(&self) -> Vec<ControlDescriptor>;
}

/// Plain fixtures and tests can use a vector directly.
impl FormAdapter for Vec<ControlDescriptor> {
    fn controls(&self) -> Vec<ControlDescriptor> {
        self.clone()
    }
}

/// The captured form for one validation pass.
///
/// Predicates that look across the whole form (radio/checkbox groups) go
/// through this handle rather than back to the adapter.
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    controls: Vec<ControlDescriptor>,
}

impl FormSnapshot {
    /// Capture the adapter's current controls.
    pub fn capture(form: &impl FormAdapter) -> Self {
        Self {
            controls: form.controls(),
        }
    }

    /// Controls in document order.
    pub fn controls(&self) -> &[ControlDescriptor] {
        &self.controls
    }

    /// Number of checked toggle controls sharing `name`.
    pub fn checked_in_group(&self, name: &str) -> usize {
        self.controls
            .iter()
            .filter(|control| {
                control.name == name && control.value == ControlValue::Checked(true)
            })
            .count()
    }
}
