use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_fixture(root: &Path) -> std::path::PathBuf {
    let catalog = root.join("catalog");
    fs::create_dir_all(&catalog).unwrap();
    fs::write(
        catalog.join("catalog.toml"),
        r#"
[[templates]]
category = "Mail"
template = "Signature"
shortcut = "sig"
content = "Best,\n«name»"

[[templates]]
category = "Legal"
template = "Copyright"
content = "© «currentyear»"
"#,
    )
    .unwrap();

    let cfg_path = root.join("config.toml");
    let toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
catalog_dir = "{}"
"#,
        catalog.display()
    );
    fs::write(&cfg_path, toml).unwrap();
    cfg_path
}

fn tb() -> std::process::Command {
    std::process::Command::new(assert_cmd::cargo::cargo_bin!("tb"))
}

#[test]
fn list_prints_every_record() {
    let tmp = tempdir().unwrap();
    let cfg_path = write_fixture(tmp.path());

    let mut cmd = tb();
    cmd.args(["--config", cfg_path.to_str().unwrap(), "list"]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Signature"))
        .stdout(predicates::str::contains("sig"))
        .stdout(predicates::str::contains("Copyright"))
        .stdout(predicates::str::contains("-- 2 templates --"));
}

#[test]
fn list_filters_by_category() {
    let tmp = tempdir().unwrap();
    let cfg_path = write_fixture(tmp.path());

    let mut cmd = tb();
    cmd.args([
        "--config",
        cfg_path.to_str().unwrap(),
        "list",
        "--category",
        "Legal",
        "--quiet",
    ]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Legal/Copyright"))
        .stdout(predicates::str::contains("Signature").not());
}

#[test]
fn list_json_is_machine_readable() {
    let tmp = tempdir().unwrap();
    let cfg_path = write_fixture(tmp.path());

    let mut cmd = tb();
    cmd.args(["--config", cfg_path.to_str().unwrap(), "list", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["category"], "Mail");
    assert_eq!(rows[0]["shortcut"], "sig");
    assert_eq!(rows[1]["shortcut"], "");
}
