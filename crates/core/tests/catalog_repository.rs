use std::fs;

use tempfile::tempdir;
use textblocks_core::catalog::{CatalogRepoError, CatalogRepository};

fn write_catalog(dir: &std::path::Path, name: &str, contents: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn records_from_multiple_files_keep_file_order() {
    let tmp = tempdir().unwrap();
    write_catalog(
        tmp.path(),
        "a-mail.toml",
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
    );
    write_catalog(
        tmp.path(),
        "b-legal.toml",
        r#"
[[templates]]
category = "Legal"
template = "Copyright"
shortcut = "cr"
content = "© «currentyear»"
"#,
    );

    let repo = CatalogRepository::new(tmp.path()).unwrap();
    assert_eq!(repo.records().len(), 3);
    assert_eq!(repo.categories(), vec!["Mail", "Legal"]);
    assert_eq!(repo.templates_in("Mail"), vec!["Signature", "Reminder"]);
    assert_eq!(repo.shortcuts(), vec!["sig", "cr"]);
}

#[test]
fn lookup_by_name_and_by_shortcut() {
    let tmp = tempdir().unwrap();
    write_catalog(
        tmp.path(),
        "catalog.toml",
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
    );

    let repo = CatalogRepository::new(tmp.path()).unwrap();

    let by_name = repo.get("Mail", "Signature").unwrap();
    assert_eq!(by_name.content, "Best,\n«name»");

    let by_shortcut = repo.find_by_shortcut("sig").unwrap();
    assert_eq!(by_shortcut.template, "Signature");

    assert!(repo.get("Mail", "Missing").is_none());
    assert!(repo.find_by_shortcut("nope").is_none());
}

#[test]
fn missing_directory_fails_with_discovery_error() {
    let tmp = tempdir().unwrap();
    let err = CatalogRepository::new(&tmp.path().join("missing")).unwrap_err();
    assert!(matches!(err, CatalogRepoError::Discovery(_)));
}

#[test]
fn broken_toml_reports_the_file() {
    let tmp = tempdir().unwrap();
    write_catalog(tmp.path(), "broken.toml", "[[templates]\ncategory = ");

    let err = CatalogRepository::new(tmp.path()).unwrap_err();
    match err {
        CatalogRepoError::Parse { path, .. } => {
            assert!(path.ends_with("broken.toml"));
        }
        other => panic!("expected a parse error, got {other}"),
    }
}
