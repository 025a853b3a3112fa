use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::discovery::{discover_catalog_files, CatalogDiscoveryError};
use super::types::{CatalogFile, TemplateRecord};

#[derive(Debug, Error)]
pub enum CatalogRepoError {
    #[error(transparent)]
    Discovery(#[from] CatalogDiscoveryError),

    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// All template records of one catalog directory, in file order.
#[derive(Debug)]
pub struct CatalogRepository {
    pub root: PathBuf,
    records: Vec<TemplateRecord>,
}

impl CatalogRepository {
    pub fn new(root: &Path) -> Result<Self, CatalogRepoError> {
        let mut records = Vec::new();
        for path in discover_catalog_files(root)? {
            let s = fs::read_to_string(&path)
                .map_err(|e| CatalogRepoError::Io { path: path.clone(), source: e })?;
            let file: CatalogFile = toml::from_str(&s)
                .map_err(|e| CatalogRepoError::Parse { path: path.clone(), source: e })?;
            records.extend(file.templates);
        }
        Ok(Self { root: root.to_path_buf(), records })
    }

    #[must_use]
    pub fn records(&self) -> &[TemplateRecord] {
        &self.records
    }

    /// Distinct categories, first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.as_str())
            .collect()
    }

    /// Distinct template names within `category`, first-seen order.
    #[must_use]
    pub fn templates_in(&self, category: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| r.category == category)
            .filter(|r| seen.insert(r.template.as_str()))
            .map(|r| r.template.as_str())
            .collect()
    }

    /// First record matching `category` and `template`.
    #[must_use]
    pub fn get(&self, category: &str, template: &str) -> Option<&TemplateRecord> {
        self.records.iter().find(|r| r.category == category && r.template == template)
    }

    /// First record whose shortcut matches exactly. Records without a
    /// shortcut never match.
    #[must_use]
    pub fn find_by_shortcut(&self, shortcut: &str) -> Option<&TemplateRecord> {
        self.records.iter().find(|r| r.shortcut() == Some(shortcut))
    }

    /// Every non-empty shortcut, in record order.
    #[must_use]
    pub fn shortcuts(&self) -> Vec<&str> {
        self.records.iter().filter_map(TemplateRecord::shortcut).collect()
    }
}
