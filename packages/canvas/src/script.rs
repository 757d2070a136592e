//! Renders commands into JavaScript source.
//!
//! `%n` in a template is replaced with the JavaScript literal for the `n`th
//! argument (1-based) and `%%` with a literal `%`. A transport that executes
//! text on the client can forward the output of [`render_update`] as is.

use std::fmt::Write as _;

use crate::{Arg, CanvasUpdate, Command};

fn element(id: &str) -> String {
    format!(
        "document.getElementById({})",
        serde_json::Value::from(id)
    )
}

fn number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

/// The JavaScript literal for a single argument.
#[must_use]
pub fn render_arg(arg: &Arg) -> String {
    match arg {
        Arg::Canvas(handle) => element(handle.id()),
        Arg::Image(image) => element(image.id()),
        Arg::Number(value) => number(*value),
        Arg::Text(text) => serde_json::Value::from(text.as_str()).to_string(),
        Arg::Bool(value) => value.to_string(),
        Arg::Numbers(values) => values
            .iter()
            .map(|value| number(*value))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Substitutes the arguments of `command` into its template.
#[must_use]
pub fn render_command(command: &Command) -> String {
    let template = command.template();
    let args = command.args();
    let mut script = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            script.push(c);
            continue;
        }

        if chars.next_if_eq(&'%').is_some() {
            script.push('%');
            continue;
        }

        let mut index = 0usize;
        let mut has_digits = false;
        while let Some(digit) = chars.next_if(char::is_ascii_digit) {
            has_digits = true;
            index = index
                .saturating_mul(10)
                .saturating_add(digit.to_digit(10).map_or(0, |d| d as usize));
        }

        if !has_digits {
            script.push('%');
            continue;
        }

        match index.checked_sub(1).and_then(|i| args.get(i)) {
            Some(arg) => script.push_str(&render_arg(arg)),
            None => {
                log::warn!(
                    "render_command: {} has no argument %{index}",
                    command.name()
                );
                script.push_str("undefined");
            }
        }
    }

    script
}

/// Renders every command of `update` as one statement, in order.
///
/// The statements run inside their own function scope so client-side
/// variables such as the gradient under construction stay local to the
/// update. An empty update renders as an empty string.
#[must_use]
pub fn render_update(update: &CanvasUpdate) -> String {
    if update.is_empty() {
        return String::new();
    }

    let mut script = String::from("(() => {\n");

    for command in &update.commands {
        let _ = writeln!(script, "{};", render_command(command));
    }

    script.push_str("})();\n");

    script
}
