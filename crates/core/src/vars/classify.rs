//! Conversion of one placeholder expression into a typed [`Variable`].

use chrono::{Datelike, Local};

use super::types::{VarKind, Variable};

type AutoProvider = fn() -> String;

/// Reserved names that are replaced automatically instead of being offered
/// for input.
fn auto_provider(name: &str) -> Option<AutoProvider> {
    match name {
        "currentyear" => Some(current_year),
        _ => None,
    }
}

fn current_year() -> String {
    Local::now().year().to_string()
}

/// Classify one scanned expression.
///
/// Decision order: auto-provider names, then the `textarea:` prefix, then the
/// `boolean:` prefix, otherwise a plain variable. Malformed input degrades to
/// a variable with an empty or surprising name; classification never fails
/// and never aborts handling of the remaining expressions.
#[must_use]
pub fn classify(expression: &str) -> Variable {
    let inner = inner_text(expression);

    if let Some(provider) = auto_provider(inner) {
        return Variable {
            expression: expression.to_string(),
            name: inner.to_string(),
            value: String::new(),
            kind: VarKind::Auto { content: provider() },
        };
    }

    if let Some(name) = inner.strip_prefix("textarea:") {
        return Variable {
            expression: expression.to_string(),
            name: name.to_string(),
            value: String::new(),
            kind: VarKind::Textarea,
        };
    }

    if inner.starts_with("boolean:") {
        let (name, fixed_text) = parse_boolean(inner);
        return Variable {
            expression: expression.to_string(),
            name,
            value: String::new(),
            kind: VarKind::Boolean { fixed_text, checked: false },
        };
    }

    Variable {
        expression: expression.to_string(),
        name: inner.to_string(),
        value: String::new(),
        kind: VarKind::Plain,
    }
}

/// The expression minus its `«` and `»` delimiters.
pub(crate) fn inner_text(expression: &str) -> &str {
    let s = expression.strip_prefix('«').unwrap_or(expression);
    s.strip_suffix('»').unwrap_or(s)
}

/// Split `boolean:NAME:FIXEDTEXT` inner text into name and fixed text.
///
/// NAME sits between the first and second colon, FIXEDTEXT after the second
/// colon. A missing colon degrades to empty name and fixed text rather than
/// an error.
pub(crate) fn parse_boolean(inner: &str) -> (String, String) {
    let Some(first) = inner.find(':') else {
        return (String::new(), String::new());
    };
    let rest = &inner[first + 1..];
    match rest.find(':') {
        Some(second) => (rest[..second].to_string(), rest[second + 1..].to_string()),
        None => (String::new(), String::new()),
    }
}
