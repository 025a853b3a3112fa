//! Explicit per-template editing state.

use tracing::debug;

use crate::render::render;
use crate::scan::scan;
use crate::vars::registry::VariableSet;
use crate::vars::types::InputSpec;

/// Editing state for one loaded template text.
///
/// A session owns its variable list exclusively. Loading different text means
/// constructing a fresh session and dropping the old one wholesale; values
/// never survive a load. Every mutation re-renders synchronously before
/// returning, so `rendered()` is always current.
#[derive(Debug, Clone)]
pub struct TemplateSession {
    original_text: String,
    variables: VariableSet,
    rendered: String,
}

impl TemplateSession {
    /// Scan `text`, build its variable set and render once.
    #[must_use]
    pub fn load(text: &str) -> Self {
        let expressions = scan(text);
        let variables = VariableSet::build(&expressions);
        let rendered = render(text, &variables);
        debug!(
            expressions = expressions.len(),
            variables = variables.len(),
            "loaded template text"
        );
        Self { original_text: text.to_string(), variables, rendered }
    }

    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    #[must_use]
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// The substituted output for the current values.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Control descriptors for the enterable variables, in scan order.
    #[must_use]
    pub fn input_specs(&self) -> Vec<InputSpec> {
        self.variables.input_specs()
    }

    /// Set a text variable's value and re-render.
    pub fn set_value(&mut self, index: usize, value: &str) {
        self.variables.set_value(index, value);
        self.rendered = render(&self.original_text, &self.variables);
    }

    /// Check or uncheck a boolean variable and re-render.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        self.variables.set_checked(index, checked);
        self.rendered = render(&self.original_text, &self.variables);
    }
}
