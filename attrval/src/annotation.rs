//! Annotation key derivation.
//!
//! A rule named `mobile` is driven by two per-control annotations: the
//! parameter under `ruleMobile` and the optional message override under
//! `msgMobile`. Rule names are case-insensitive, so `Mobile` and `MOBILE`
//! derive the same keys.

/// The two derived annotation keys for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationKeys {
    /// Parameter key, e.g. `ruleMobile`. Presence of this annotation on a
    /// control is what triggers the rule for it.
    pub param: String,
    /// Message override key, e.g. `msgMobile`.
    pub message: String,
}

/// Derive the parameter and message keys for a rule name.
///
/// The name is lowercased, its first ASCII character uppercased, and the
/// result prefixed with `rule` and `msg`.
pub fn annotation_keys(rule_name: &str) -> AnnotationKeys {
    let lower = rule_name.to_ascii_lowercase();
    let mut capitalized = String::with_capacity(lower.len());
    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        capitalized.extend(first.to_uppercase());
        capitalized.push_str(chars.as_str());
    }
    AnnotationKeys {
        param: format!("rule{capitalized}"),
        message: format!("msg{capitalized}"),
    }
}

/// Whether an annotation value counts as a truthy flag.
///
/// Only `"1"` and case-insensitive `"true"` activate a flag annotation such
/// as `ruleRequired`.
pub fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
