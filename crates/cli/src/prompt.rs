//! Interactive collection of variable values for a template session.
//!
//! Values are applied one at a time and the session re-renders after each
//! change. Unanswered variables keep their defaults: text placeholders stay
//! visible in the output, checkboxes stay unchecked. Nothing here is ever a
//! hard requirement, so batch mode simply skips the prompts.

use std::collections::HashMap;
use std::io::{self, IsTerminal};

use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input};
use textblocks_core::session::TemplateSession;
use textblocks_core::vars::InputKind;

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt; only provided values are applied.
    pub batch_mode: bool,
}

/// Error type for value collection.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Apply provided values, then prompt for the remaining controls.
pub fn collect_values(
    session: &mut TemplateSession,
    provided: &HashMap<String, String>,
    options: &PromptOptions,
) -> Result<(), PromptError> {
    let is_interactive = io::stdin().is_terminal() && !options.batch_mode;
    let theme = ColorfulTheme::default();

    for spec in session.input_specs() {
        if let Some(value) = provided.get(&spec.name) {
            match spec.kind {
                InputKind::Checkbox => {
                    session.set_checked(spec.index, parse_checkbox(value));
                }
                InputKind::SingleLine | InputKind::MultiLine => {
                    session.set_value(spec.index, value);
                }
            }
            continue;
        }

        if !is_interactive {
            continue;
        }

        match spec.kind {
            InputKind::SingleLine => {
                let value = Input::<String>::with_theme(&theme)
                    .with_prompt(&spec.name)
                    .allow_empty(true)
                    .interact_text()
                    .map_err(dialoguer_error_to_prompt_error)?;
                session.set_value(spec.index, &value);
            }
            InputKind::MultiLine => {
                let value =
                    Editor::new().edit("").map_err(dialoguer_error_to_prompt_error)?;
                session.set_value(spec.index, value.as_deref().unwrap_or(""));
            }
            InputKind::Checkbox => {
                let checked = Confirm::with_theme(&theme)
                    .with_prompt(&spec.name)
                    .default(false)
                    .interact()
                    .map_err(dialoguer_error_to_prompt_error)?;
                session.set_checked(spec.index, checked);
            }
        }
    }

    Ok(())
}

/// Interpret a `--var` value for a checkbox variable.
pub fn parse_checkbox(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "on" | "1" | "checked")
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checkbox() {
        for yes in ["true", "TRUE", "yes", "on", "1", "checked"] {
            assert!(parse_checkbox(yes), "{yes} should check the box");
        }
        for no in ["false", "no", "off", "0", "", "anything else"] {
            assert!(!parse_checkbox(no), "{no} should leave the box unchecked");
        }
    }

    #[test]
    fn batch_mode_applies_provided_values_only() {
        let mut session =
            TemplateSession::load("«greeting» «name»! «boolean:PS:See you.»");
        let mut provided = HashMap::new();
        provided.insert("name".to_string(), "Ada".to_string());
        provided.insert("PS".to_string(), "yes".to_string());

        let options = PromptOptions { batch_mode: true };
        collect_values(&mut session, &provided, &options).unwrap();

        assert_eq!(session.rendered(), "«greeting» Ada! See you.");
    }
}
