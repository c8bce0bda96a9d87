//! A small signup form validated end to end, with diagnostics on stderr.
//!
//! Run with `cargo run --example signup`.

use attrval::{ControlDescriptor, ControlKind, FormBinding};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn signup_form(phone: &str, accepted_terms: bool) -> Vec<ControlDescriptor> {
    vec![
        ControlDescriptor::new(ControlKind::Text, "username")
            .text("lianer")
            .annotate("ruleRequired", "1")
            .annotate("ruleRangelength", "2,20")
            .annotate("msgRangelength", "Username must be 2 to 20 characters"),
        ControlDescriptor::new(ControlKind::Text, "phone")
            .text(phone)
            .annotate("ruleRequired", "1")
            .annotate("ruleMobile", "")
            .annotate("msgMobile", "That does not look like a mobile number"),
        ControlDescriptor::new(ControlKind::Text, "email")
            .annotate("ruleEmail", ""),
        ControlDescriptor::new(ControlKind::Checkbox, "terms")
            .checked(accepted_terms)
            .annotate("ruleRequired", "1")
            .annotate("msgRequired", "You must accept the terms"),
    ]
}

fn submit(label: &str, form: Vec<ControlDescriptor>) {
    let binding = FormBinding::new(form)
        .on_success(|_form| {
            println!("form accepted, submitting");
            Ok(())
        })
        .on_error(|message, control| {
            println!("{}: {message}", control.name);
            Ok(())
        });
    println!("--- {label}");
    binding.submit();
}

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger init");

    submit("bad phone number", signup_form("12345", true));
    submit("terms not accepted", signup_form("13800138000", false));
    submit("all good", signup_form("13800138000", true));
}
