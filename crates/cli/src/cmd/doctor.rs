use std::path::Path;

use textblocks_core::catalog::CatalogRepository;
use textblocks_core::config::{default_config_path, ConfigLoader};

use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL tb doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    logging::init(&rc);

    match CatalogRepository::new(&rc.catalog_dir) {
        Ok(repo) => {
            println!("OK   tb doctor");
            println!("profile: {}", rc.active_profile);
            println!("catalog_dir: {}", rc.catalog_dir.display());
            println!("categories: {}", repo.categories().len());
            println!("templates:  {}", repo.records().len());
            println!("shortcuts:  {}", repo.shortcuts().len());
        }
        Err(e) => {
            println!("FAIL tb doctor");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
