//! Show the input controls a template asks for.
//!
//! This is the boundary a UI consumes: the ordered, deduplicated list of
//! enterable variables with their control kinds.

use std::path::Path;

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use textblocks_core::config::{default_config_path, ConfigLoader};
use textblocks_core::catalog::CatalogRepository;
use textblocks_core::session::TemplateSession;
use textblocks_core::vars::InputSpec;

use crate::cmd::record_from_flags;
use crate::logging;
use crate::VarsArgs;

#[derive(Debug, Serialize, Tabled)]
struct ControlRow {
    name: String,
    input: String,
    #[tabled(rename = "span class")]
    span_class: String,
}

impl From<&InputSpec> for ControlRow {
    fn from(spec: &InputSpec) -> Self {
        Self {
            name: spec.name.clone(),
            input: spec.kind.as_str().to_string(),
            span_class: spec.span_class.unwrap_or("").to_string(),
        }
    }
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &VarsArgs) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL tb vars");
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
            println!("FAIL tb vars");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let record = match record_from_flags(&repo, &args.select) {
        Ok(Some(record)) => record,
        Ok(None) => {
            eprintln!("Error: provide --shortcut or --category and --template");
            std::process::exit(2);
        }
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    let session = TemplateSession::load(&record.content);
    let rows: Vec<ControlRow> =
        session.input_specs().iter().map(ControlRow::from).collect();

    if args.json {
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize controls: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if rows.is_empty() {
        println!("(no enterable variables)");
        return;
    }

    let mut table = Table::new(&rows);
    table.with(Style::sharp());
    println!("{table}");
}
