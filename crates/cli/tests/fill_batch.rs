use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_fixture(root: &Path) -> std::path::PathBuf {
    let catalog = root.join("catalog");
    fs::create_dir_all(&catalog).unwrap();
    fs::write(
        catalog.join("mail.toml"),
        r#"
[[templates]]
category = "Mail"
template = "Signature"
shortcut = "sig"
content = "Best regards,\n«name»\n«boolean:PS:P.S. Write back!»"
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
fn fill_renders_with_provided_values() {
    let tmp = tempdir().unwrap();
    let cfg_path = write_fixture(tmp.path());

    let mut cmd = tb();
    cmd.env("NO_COLOR", "1");
    cmd.args([
        "--config",
        cfg_path.to_str().unwrap(),
        "fill",
        "--shortcut",
        "sig",
        "--batch",
        "--no-copy",
        "--var",
        "name=Ada",
        "--var",
        "PS=yes",
    ]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Best regards,\nAda\nP.S. Write back!"));
}

#[test]
fn fill_leaves_unanswered_placeholders_visible() {
    let tmp = tempdir().unwrap();
    let cfg_path = write_fixture(tmp.path());

    let mut cmd = tb();
    cmd.args([
        "--config",
        cfg_path.to_str().unwrap(),
        "fill",
        "--category",
        "Mail",
        "--template",
        "Signature",
        "--batch",
        "--no-copy",
    ]);

    // the text placeholder stays visible, the unchecked boolean is gone
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("«name»"))
        .stdout(predicates::str::contains("P.S.").not());
}

#[test]
fn fill_rejects_an_unknown_shortcut() {
    let tmp = tempdir().unwrap();
    let cfg_path = write_fixture(tmp.path());

    let mut cmd = tb();
    cmd.args([
        "--config",
        cfg_path.to_str().unwrap(),
        "fill",
        "--shortcut",
        "nope",
        "--batch",
        "--no-copy",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("no template with shortcut 'nope'"));
}

#[test]
fn batch_fill_requires_a_selection() {
    let tmp = tempdir().unwrap();
    let cfg_path = write_fixture(tmp.path());

    let mut cmd = tb();
    cmd.args(["--config", cfg_path.to_str().unwrap(), "fill", "--batch", "--no-copy"]);

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("--batch needs --shortcut"));
}
