//! Output rendering by literal substitution.

use crate::vars::registry::VariableSet;

/// Replace every bound expression in `original` with its current content.
///
/// Substitution is a literal, global substring replacement keyed on the exact
/// scanned expression; no pattern matching happens here. Empty content
/// legitimately removes a placeholder without trace. Replacement order across
/// entries does not matter because scanned expressions are disjoint
/// substrings. Text with no expressions comes back unchanged.
#[must_use]
pub fn render(original: &str, variables: &VariableSet) -> String {
    let mut output = original.to_string();
    for binding in variables.bindings() {
        let content = variables.content_at(binding.index);
        output = output.replace(&binding.expression, &content);
    }
    output
}
