//! Ordered, deduplicated variable registries.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::classify::{classify, inner_text, parse_boolean};
use super::types::{InputSpec, VarKind, Variable};

/// Maps one distinct scanned expression to the registry entry whose content
/// replaces it during rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub expression: String,
    pub index: usize,
}

/// The ordered variable list for one template text.
///
/// Entries keep scan order. Besides the entries themselves the set keeps a
/// binding per distinct scanned expression, so placeholders collapsed onto a
/// shared control still substitute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    vars: Vec<Variable>,
    bindings: Vec<Binding>,
}

impl VariableSet {
    /// Build the registry from scan-ordered expressions.
    ///
    /// Identical expressions share one entry. Distinct expressions sharing a
    /// name are resolved by the first-seen entry for that name: a boolean
    /// representative links the newcomer as a gated entry carrying its own
    /// fixed text, every other kind collapses the newcomer onto itself.
    #[must_use]
    pub fn build(expressions: &[String]) -> Self {
        let mut vars: Vec<Variable> = Vec::new();
        let mut bindings: Vec<Binding> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for expression in expressions {
            if !seen.insert(expression.as_str()) {
                continue;
            }

            let var = classify(expression);
            match by_name.get(&var.name) {
                None => {
                    by_name.insert(var.name.clone(), vars.len());
                    bindings
                        .push(Binding { expression: expression.clone(), index: vars.len() });
                    vars.push(var);
                }
                Some(&rep) => {
                    if let Some(linked) = handle_duplicate(&vars[rep], rep, var) {
                        bindings.push(Binding {
                            expression: expression.clone(),
                            index: vars.len(),
                        });
                        vars.push(linked);
                    } else {
                        bindings.push(Binding { expression: expression.clone(), index: rep });
                    }
                }
            }
        }

        Self { vars, bindings }
    }

    #[must_use]
    pub fn vars(&self) -> &[Variable] {
        &self.vars
    }

    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Variable> {
        self.vars.get(index)
    }

    /// Control descriptors for the enterable entries, in registry order.
    #[must_use]
    pub fn input_specs(&self) -> Vec<InputSpec> {
        self.vars
            .iter()
            .enumerate()
            .filter_map(|(index, var)| {
                var.input_kind().map(|kind| InputSpec {
                    index,
                    name: var.name.clone(),
                    kind,
                    span_class: var.span_class(),
                })
            })
            .collect()
    }

    /// Current substitution content of the entry at `index`.
    ///
    /// Plain and textarea entries fall back to their original expression while
    /// their value is empty, so unfilled placeholders stay visible in the
    /// output. Boolean entries contribute their fixed text only while checked.
    #[must_use]
    pub fn content_at(&self, index: usize) -> String {
        let Some(var) = self.vars.get(index) else {
            return String::new();
        };
        match &var.kind {
            VarKind::Plain | VarKind::Textarea => {
                if var.value.is_empty() {
                    var.expression.clone()
                } else {
                    var.value.clone()
                }
            }
            VarKind::Auto { content } => content.clone(),
            VarKind::Boolean { fixed_text, checked } => {
                if *checked {
                    fixed_text.clone()
                } else {
                    String::new()
                }
            }
            VarKind::LinkedBoolean { fixed_text, parent } => {
                if self.is_checked(*parent) {
                    fixed_text.clone()
                } else {
                    String::new()
                }
            }
        }
    }

    /// Set the text value of a plain or textarea entry.
    ///
    /// Any other kind (or an out-of-range index) is ignored.
    pub fn set_value(&mut self, index: usize, value: &str) {
        match self.vars.get_mut(index) {
            Some(var) if matches!(var.kind, VarKind::Plain | VarKind::Textarea) => {
                var.value = value.to_string();
            }
            _ => debug!(index, "ignoring value for non-text variable"),
        }
    }

    /// Check or uncheck a boolean entry.
    ///
    /// Any other kind (or an out-of-range index) is ignored.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        match self.vars.get_mut(index) {
            Some(Variable { kind: VarKind::Boolean { checked: state, .. }, .. }) => {
                *state = checked;
            }
            _ => debug!(index, "ignoring checkbox state for non-boolean variable"),
        }
    }

    fn is_checked(&self, index: usize) -> bool {
        matches!(
            self.vars.get(index),
            Some(Variable { kind: VarKind::Boolean { checked: true, .. }, .. })
        )
    }
}

/// Duplicate-name policy, dispatched on the representative's kind.
///
/// A boolean representative turns the newcomer into a linked entry whose fixed
/// text is parsed leniently from the newcomer's own expression. Every other
/// kind collapses the newcomer: it shares the representative's control and
/// content and gets no entry of its own.
fn handle_duplicate(representative: &Variable, rep_index: usize, new: Variable) -> Option<Variable> {
    match representative.kind {
        VarKind::Boolean { .. } => {
            let (_, fixed_text) = parse_boolean(inner_text(&new.expression));
            Some(Variable {
                expression: new.expression,
                name: new.name,
                value: String::new(),
                kind: VarKind::LinkedBoolean { fixed_text, parent: rep_index },
            })
        }
        _ => None,
    }
}
