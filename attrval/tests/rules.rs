//! Tests for the built-in rules, run through a real validation pass.

use attrval::{ControlDescriptor, ControlKind, Engine, Outcome, RuleRegistry};

fn engine() -> Engine {
    Engine::with_registry(RuleRegistry::with_builtins().into_shared())
}

fn check(control: ControlDescriptor) -> Outcome {
    engine().validate(&vec![control])
}

fn text(value: &str) -> ControlDescriptor {
    ControlDescriptor::new(ControlKind::Text, "field").text(value)
}

#[test]
fn test_mobile_accepts_valid_number() {
    let outcome = check(text("13800138000").annotate("ruleMobile", ""));
    assert!(outcome.is_pass());
}

#[test]
fn test_mobile_rejects_wrong_prefix() {
    let outcome = check(text("23800138000").annotate("ruleMobile", ""));
    assert!(outcome.is_fail());
    assert_eq!(outcome.message(), "Please enter a valid mobile number");
}

#[test]
fn test_mobile_rejects_wrong_length() {
    assert!(check(text("1380013800").annotate("ruleMobile", "")).is_fail());
    assert!(check(text("138001380000").annotate("ruleMobile", "")).is_fail());
}

#[test]
fn test_idcard_accepts_digit_and_x_checksum() {
    assert!(check(text("110105194912310021").annotate("ruleIdcard", "")).is_pass());
    assert!(check(text("11010519491231002X").annotate("ruleIdcard", "")).is_pass());
    assert!(check(text("11010519491231002x").annotate("ruleIdcard", "")).is_pass());
}

#[test]
fn test_idcard_rejects_bad_shapes() {
    assert!(check(text("11010519491231002").annotate("ruleIdcard", "")).is_fail());
    assert!(check(text("1101051949123100211").annotate("ruleIdcard", "")).is_fail());
    assert!(check(text("11010519491231002a").annotate("ruleIdcard", "")).is_fail());
}

#[test]
fn test_rangelength_inclusive_bounds() {
    assert!(check(text("a").annotate("ruleRangelength", "2,5")).is_fail());
    assert!(check(text("ab").annotate("ruleRangelength", "2,5")).is_pass());
    assert!(check(text("abcde").annotate("ruleRangelength", "2,5")).is_pass());
    assert!(check(text("abcdef").annotate("ruleRangelength", "2,5")).is_fail());
}

#[test]
fn test_rangelength_trims_bounds() {
    assert!(check(text("ab").annotate("ruleRangelength", " 2 , 5 ")).is_pass());
}

#[test]
fn test_rangelength_counts_characters_not_bytes() {
    assert!(check(text("你好").annotate("ruleRangelength", "2,5")).is_pass());
}

#[test]
fn test_rangelength_malformed_parameter_fails_closed() {
    assert!(check(text("ab").annotate("ruleRangelength", "2")).is_fail());
    assert!(check(text("ab").annotate("ruleRangelength", "a,b")).is_fail());
}

fn checkbox_group(checked: usize, total: usize) -> Vec<ControlDescriptor> {
    (0..total)
        .map(|i| {
            let control = ControlDescriptor::new(ControlKind::Checkbox, "opt").checked(i < checked);
            if i == 0 {
                control.annotate("ruleRange", "1,2")
            } else {
                control
            }
        })
        .collect()
}

#[test]
fn test_range_checkbox_group() {
    assert!(engine().validate(&checkbox_group(0, 3)).is_fail());
    assert!(engine().validate(&checkbox_group(1, 3)).is_pass());
    assert!(engine().validate(&checkbox_group(2, 3)).is_pass());
    assert!(engine().validate(&checkbox_group(3, 3)).is_fail());
}

#[test]
fn test_range_select_multiple() {
    let select = |values: Vec<&str>| {
        ControlDescriptor::new(ControlKind::SelectMultiple, "tags")
            .selected(values)
            .annotate("ruleRange", "1,2")
    };
    assert!(check(select(vec!["a"])).is_pass());
    assert!(check(select(vec!["a", "b"])).is_pass());
    assert!(check(select(vec!["a", "b", "c"])).is_fail());
}

#[test]
fn test_pattern_with_flags() {
    let control = |value: &str| text(value).annotate("rulePattern", "/^[a-z]+$/i");
    assert!(check(control("ABC")).is_pass());
    assert!(check(control("abc1")).is_fail());
}

#[test]
fn test_pattern_is_a_search_like_the_annotation_implies() {
    // An unanchored pattern matches anywhere in the value.
    assert!(check(text("abc").annotate("rulePattern", "/b/")).is_pass());
}

#[test]
fn test_pattern_malformed_parameter_fails_without_panicking() {
    assert!(check(text("anything").annotate("rulePattern", "/[/")).is_fail());
    assert!(check(text("anything").annotate("rulePattern", "no-slashes")).is_fail());
    assert!(check(text("anything").annotate("rulePattern", "/a/q")).is_fail());
}

#[test]
fn test_email_rule() {
    assert!(check(text("user@example.com").annotate("ruleEmail", "")).is_pass());
    assert!(check(text("not-an-email").annotate("ruleEmail", "")).is_fail());
}

#[test]
fn test_required_text_and_textarea() {
    let empty = ControlDescriptor::new(ControlKind::Text, "field")
        .text("")
        .annotate("ruleRequired", "1");
    let outcome = check(empty);
    assert!(outcome.is_fail());
    assert_eq!(outcome.message(), "This field is required");

    let filled = ControlDescriptor::new(ControlKind::TextArea, "field")
        .text("hello")
        .annotate("ruleRequired", "1");
    assert!(check(filled).is_pass());
}

#[test]
fn test_required_with_falsy_parameter_is_inactive() {
    let control = ControlDescriptor::new(ControlKind::Text, "field")
        .text("anything")
        .annotate("ruleRequired", "0");
    assert!(check(control).is_pass());
}

#[test]
fn test_required_select() {
    let empty = ControlDescriptor::new(ControlKind::SelectSingle, "field")
        .text("")
        .annotate("ruleRequired", "1");
    assert!(check(empty).is_fail());

    let none_selected = ControlDescriptor::new(ControlKind::SelectMultiple, "field")
        .annotate("ruleRequired", "1");
    assert!(check(none_selected).is_fail());

    let selected = ControlDescriptor::new(ControlKind::SelectMultiple, "field")
        .selected(vec!["a"])
        .annotate("ruleRequired", "1");
    assert!(check(selected).is_pass());
}

#[test]
fn test_required_radio_group_checks_siblings() {
    let group = |checked: bool| {
        vec![
            ControlDescriptor::new(ControlKind::Radio, "gender").annotate("ruleRequired", "1"),
            ControlDescriptor::new(ControlKind::Radio, "gender").checked(checked),
        ]
    };
    assert!(engine().validate(&group(true)).is_pass());
    assert!(engine().validate(&group(false)).is_fail());
}
