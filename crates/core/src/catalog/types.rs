//! Catalog record types.

use serde::Deserialize;

/// One entry of the template catalog.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TemplateRecord {
    pub category: String,
    pub template: String,
    /// Optional abbreviation for direct lookup and autocomplete.
    #[serde(default)]
    pub shortcut: Option<String>,
    /// The text fed to the expression scanner.
    pub content: String,
}

impl TemplateRecord {
    /// The record's shortcut, if one is set and non-empty.
    #[must_use]
    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref().filter(|s| !s.is_empty())
    }
}

/// On-disk shape of one catalog file.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub templates: Vec<TemplateRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_deserialize_from_toml() {
        let file: CatalogFile = toml::from_str(
            r#"
[[templates]]
category = "Mail"
template = "Signature"
shortcut = "sig"
content = "Best,\n«name»"

[[templates]]
category = "Mail"
template = "Reminder"
content = "Re: «topic»"
"#,
        )
        .unwrap();

        assert_eq!(file.templates.len(), 2);
        assert_eq!(file.templates[0].shortcut(), Some("sig"));
        assert_eq!(file.templates[1].shortcut(), None);
    }

    #[test]
    fn empty_shortcut_counts_as_absent() {
        let record = TemplateRecord {
            category: "c".to_string(),
            template: "t".to_string(),
            shortcut: Some(String::new()),
            content: String::new(),
        };
        assert_eq!(record.shortcut(), None);
    }
}
