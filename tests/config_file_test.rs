use assert_cmd::Command;
use indoc::formatdoc;
use std::fs;
use tempfile::TempDir;

#[test]
fn explicit_config_file_drives_the_run() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(root.path().join("notes.md"), "kept").unwrap();
    fs::write(root.path().join("app.js"), "dropped").unwrap();
    let output = out.path().join("bundle.txt");

    let config_path = out.path().join("assetcat.toml");
    fs::write(
        &config_path,
        formatdoc! {r#"
            output = "{}"
            extensions = ["md"]
        "#, output.display()},
    )
    .unwrap();

    Command::cargo_bin("assetcat")
        .unwrap()
        .arg("dump")
        .arg(root.path())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let artifact = fs::read_to_string(&output).unwrap();
    assert!(artifact.contains("notes.md]###"));
    assert!(!artifact.contains("app.js"));
}

#[test]
fn cli_flags_override_config_file() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(root.path().join("app.js"), "x=1").unwrap();
    let file_output = out.path().join("from_file.txt");
    let cli_output = out.path().join("from_cli.txt");

    let config_path = out.path().join("assetcat.toml");
    fs::write(
        &config_path,
        format!("output = \"{}\"\n", file_output.display()),
    )
    .unwrap();

    Command::cargo_bin("assetcat")
        .unwrap()
        .arg("dump")
        .arg(root.path())
        .arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg(&cli_output)
        .assert()
        .success();

    assert!(cli_output.exists());
    assert!(!file_output.exists());
}

#[test]
fn malformed_explicit_config_is_fatal() {
    let out = TempDir::new().unwrap();
    let config_path = out.path().join("assetcat.toml");
    fs::write(&config_path, "extensions = not-a-list\n").unwrap();

    Command::cargo_bin("assetcat")
        .unwrap()
        .arg("dump")
        .arg(out.path())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure();
}
