//! Built-in validation rules.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::adapter::{ControlDescriptor, ControlKind, ControlValue, FormSnapshot};
use crate::annotation::is_truthy;
use crate::registry::{Predicate, RuleRegistry};

static MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^1[0-9]{10}$").expect("valid mobile regex"));
static IDCARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{17}[0-9xX]$").expect("valid idcard regex"));

pub(crate) fn install(registry: &mut RuleRegistry) {
    let builtins: [(&str, Predicate, &str); 7] = [
        ("required", Box::new(required), "This field is required"),
        (
            "mobile",
            Box::new(mobile),
            "Please enter a valid mobile number",
        ),
        (
            "idcard",
            Box::new(idcard),
            "Please enter a valid ID card number",
        ),
        (
            "rangelength",
            Box::new(rangelength),
            "Value length is out of range",
        ),
        ("range", Box::new(range), "Selection count is out of range"),
        (
            "pattern",
            Box::new(pattern),
            "Value does not match the expected format",
        ),
        (
            "email",
            Box::new(email),
            "Please enter a valid email address",
        ),
    ];
    for (name, predicate, message) in builtins {
        registry.insert(name.to_string(), predicate, message.to_string());
    }
}

/// Value must be present. Only active when the parameter is truthy.
///
/// Radio buttons and checkboxes are satisfied by any checked control sharing
/// the same name within the form.
fn required(
    value: &ControlValue,
    param: &str,
    control: &ControlDescriptor,
    form: &FormSnapshot,
) -> bool {
    if !is_truthy(param) {
        return true;
    }
    match control.kind {
        ControlKind::Text
        | ControlKind::Hidden
        | ControlKind::TextArea
        | ControlKind::SelectSingle => !value.as_text().is_empty(),
        ControlKind::SelectMultiple => match value {
            ControlValue::Selected(values) => !values.is_empty(),
            _ => false,
        },
        ControlKind::Radio | ControlKind::Checkbox => form.checked_in_group(&control.name) > 0,
        ControlKind::Other => !value.is_empty(),
    }
}

fn mobile(value: &ControlValue, _: &str, _: &ControlDescriptor, _: &FormSnapshot) -> bool {
    MOBILE.is_match(value.as_text())
}

fn idcard(value: &ControlValue, _: &str, _: &ControlDescriptor, _: &FormSnapshot) -> bool {
    IDCARD.is_match(value.as_text())
}

/// Character count must fall within the `"min,max"` parameter, inclusive.
fn rangelength(value: &ControlValue, param: &str, _: &ControlDescriptor, _: &FormSnapshot) -> bool {
    let Some((min, max)) = parse_bounds(param) else {
        log::warn!("malformed rangelength parameter {param:?}");
        return false;
    };
    let length = value.as_text().chars().count();
    length >= min && length <= max
}

/// Selection count must fall within the `"min,max"` parameter, inclusive.
///
/// Counts selected options for a multi-choice select, or checked siblings
/// sharing the control's name for a checkbox group.
fn range(
    value: &ControlValue,
    param: &str,
    control: &ControlDescriptor,
    form: &FormSnapshot,
) -> bool {
    let Some((min, max)) = parse_bounds(param) else {
        log::warn!("malformed range parameter {param:?}");
        return false;
    };
    let count = match control.kind {
        ControlKind::SelectMultiple => match value {
            ControlValue::Selected(values) => values.len(),
            _ => 0,
        },
        ControlKind::Checkbox => form.checked_in_group(&control.name),
        _ => 0,
    };
    count >= min && count <= max
}

/// Value must match the `"/regex/flags"` parameter.
///
/// A malformed parameter never fails the pass as a whole: it is logged and
/// the predicate reports no match.
fn pattern(value: &ControlValue, param: &str, _: &ControlDescriptor, _: &FormSnapshot) -> bool {
    match compile_pattern(param) {
        Some(regex) => regex.is_match(value.as_text()),
        None => false,
    }
}

/// Value must be a well-formed email address. An empty value passes;
/// combine with `required` to also demand presence.
fn email(value: &ControlValue, _: &str, _: &ControlDescriptor, _: &FormSnapshot) -> bool {
    let text = value.as_text();
    text.is_empty() || email_address::EmailAddress::is_valid(text)
}

fn parse_bounds(param: &str) -> Option<(usize, usize)> {
    let (min, max) = param.split_once(',')?;
    let min = min.trim().parse().ok()?;
    let max = max.trim().parse().ok()?;
    Some((min, max))
}

/// Compile a `/body/flags` parameter. The body must be non-empty and
/// slash-free; supported flags are `i`, `m` and `s`.
fn compile_pattern(param: &str) -> Option<Regex> {
    let Some((body, flags)) = param
        .strip_prefix('/')
        .and_then(|rest| rest.rsplit_once('/'))
        .filter(|(body, _)| !body.is_empty() && !body.contains('/'))
    else {
        log::warn!("malformed pattern parameter {param:?}");
        return None;
    };

    let mut builder = RegexBuilder::new(body);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            _ => {
                log::warn!("unsupported flag {flag:?} in pattern parameter {param:?}");
                return None;
            }
        };
    }

    match builder.build() {
        Ok(regex) => Some(regex),
        Err(err) => {
            log::warn!("invalid regular expression in pattern parameter {param:?}: {err}");
            None
        }
    }
}
