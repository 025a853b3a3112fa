//! List command implementation.

use std::path::Path;

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use textblocks_core::catalog::{CatalogRepository, TemplateRecord};
use textblocks_core::config::{default_config_path, ConfigLoader};

use crate::logging;
use crate::ListArgs;

/// Formatted record for table and JSON output.
#[derive(Debug, Serialize, Tabled)]
struct RecordRow {
    category: String,
    template: String,
    shortcut: String,
}

impl From<&TemplateRecord> for RecordRow {
    fn from(record: &TemplateRecord) -> Self {
        Self {
            category: record.category.clone(),
            template: record.template.clone(),
            shortcut: record.shortcut().unwrap_or("").to_string(),
        }
    }
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ListArgs) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL tb list");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    logging::init(&rc);

    let repo = match CatalogRepository::new(&rc.catalog_dir) {
        Ok(repo) => repo,
        Err(e) => {
            println!("FAIL tb list");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let rows: Vec<RecordRow> = repo
        .records()
        .iter()
        .filter(|r| args.category.as_deref().map_or(true, |c| r.category == c))
        .map(RecordRow::from)
        .collect();

    if args.json {
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize records: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.quiet {
        for row in &rows {
            println!("{}/{}", row.category, row.template);
        }
        return;
    }

    if rows.is_empty() {
        println!("(no templates found)");
        return;
    }

    let mut table = Table::new(&rows);
    table.with(Style::sharp());
    println!("{table}");
    println!("-- {} templates --", rows.len());
}
