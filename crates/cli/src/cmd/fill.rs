//! Fill a template's placeholders and print the result.

use std::collections::HashMap;
use std::path::Path;

use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use textblocks_core::catalog::{CatalogRepository, TemplateRecord};
use textblocks_core::config::{default_config_path, ConfigLoader};
use textblocks_core::session::TemplateSession;
use tracing::{debug, warn};

use crate::clipboard;
use crate::cmd::record_from_flags;
use crate::logging;
use crate::prompt::{collect_values, PromptOptions};
use crate::FillArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &FillArgs) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL tb fill");
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
            println!("FAIL tb fill");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let record = match record_from_flags(&repo, &args.select) {
        Ok(Some(record)) => record.clone(),
        Ok(None) => {
            if args.batch {
                eprintln!(
                    "Error: --batch needs --shortcut or --category and --template"
                );
                std::process::exit(2);
            }
            match pick_record(&repo) {
                Some(record) => record,
                None => {
                    eprintln!("No template selected");
                    std::process::exit(1);
                }
            }
        }
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    debug!(category = %record.category, template = %record.template, "selected template");

    let mut session = TemplateSession::load(&record.content);
    let provided: HashMap<String, String> = args.vars.iter().cloned().collect();
    let options = PromptOptions { batch_mode: args.batch };

    if let Err(e) = collect_values(&mut session, &provided, &options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("{}", session.rendered());

    if !args.no_copy && !clipboard::copy(session.rendered()) {
        warn!("rendered text was not copied to the clipboard");
    }
}

/// Fuzzy picker over every record, searchable by category, template name and
/// shortcut. Returns None when the user cancels.
fn pick_record(repo: &CatalogRepository) -> Option<TemplateRecord> {
    let records = repo.records();
    if records.is_empty() {
        return None;
    }

    let items: Vec<String> = records
        .iter()
        .map(|r| match r.shortcut() {
            Some(shortcut) => {
                format!("{} / {}  [{}]", r.category, r.template, shortcut)
            }
            None => format!("{} / {}", r.category, r.template),
        })
        .collect();

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Template")
        .items(&items)
        .default(0)
        .interact_opt()
        .ok()?;

    selection.map(|idx| records[idx].clone())
}
