//! Variable model types.

/// How an enterable variable is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    SingleLine,
    MultiLine,
    Checkbox,
}

impl InputKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::SingleLine => "single-line",
            InputKind::MultiLine => "multi-line",
            InputKind::Checkbox => "checkbox",
        }
    }
}

/// Control descriptor handed to a UI layer for one enterable variable.
///
/// `index` addresses the variable within its [`super::VariableSet`] for
/// [`super::VariableSet::set_value`] / [`super::VariableSet::set_checked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub index: usize,
    pub name: String,
    pub kind: InputKind,
    /// Styling hint for the control's label, if any.
    pub span_class: Option<&'static str>,
}

/// The closed set of variable behaviours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarKind {
    /// Free text edited in a single-line field.
    Plain,
    /// Resolved automatically at classification time; never edited.
    Auto { content: String },
    /// Free text edited in a multi-line field.
    Textarea,
    /// A fixed block of text gated behind a checkbox.
    Boolean { fixed_text: String, checked: bool },
    /// A later occurrence of a boolean name. Carries its own fixed text but
    /// is gated by the primary entry's checkbox, referenced by index.
    LinkedBoolean { fixed_text: String, parent: usize },
}

/// One placeholder site: the raw delimited expression (the exact substitution
/// key), the derived display name, the user-entered value and kind-specific
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub expression: String,
    pub name: String,
    pub value: String,
    pub kind: VarKind,
}

impl Variable {
    /// Whether a UI should offer a control for this variable.
    #[must_use]
    pub fn is_enterable(&self) -> bool {
        !matches!(self.kind, VarKind::Auto { .. } | VarKind::LinkedBoolean { .. })
    }

    /// The control to render for this variable, if it is enterable.
    #[must_use]
    pub fn input_kind(&self) -> Option<InputKind> {
        match self.kind {
            VarKind::Plain => Some(InputKind::SingleLine),
            VarKind::Textarea => Some(InputKind::MultiLine),
            VarKind::Boolean { .. } => Some(InputKind::Checkbox),
            VarKind::Auto { .. } | VarKind::LinkedBoolean { .. } => None,
        }
    }

    #[must_use]
    pub fn span_class(&self) -> Option<&'static str> {
        match self.kind {
            VarKind::Boolean { .. } => Some("checkbox-span"),
            _ => None,
        }
    }
}
