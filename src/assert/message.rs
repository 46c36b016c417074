use crate::config::OutputConfig;
use console::Style;
use std::fmt::Debug;

/// Render a value the way failure messages show it
pub fn render<T: Debug + ?Sized>(value: &T, options: &OutputConfig) -> String {
    if options.pretty {
        format!("{:#?}", value)
    } else {
        format!("{:?}", value)
    }
}

/// Builds the failure text: a headline followed by both values, each
/// continuation line indented under its label.
pub fn failure_message(
    headline: &str,
    expected: &str,
    actual: &str,
    options: &OutputConfig,
) -> String {
    let (expected_label, actual_label) = if options.color {
        (
            Style::new().green().force_styling(true).apply_to("expected:").to_string(),
            Style::new().red().force_styling(true).apply_to("  actual:").to_string(),
        )
    } else {
        ("expected:".to_string(), "  actual:".to_string())
    };

    format!(
        "{}\n  {} {}\n  {} {}",
        headline,
        expected_label,
        indent(expected),
        actual_label,
        indent(actual)
    )
}

fn indent(text: &str) -> String {
    text.replace('\n', "\n            ")
}
