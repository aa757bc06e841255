//! End-to-end CLI tests against temporary Maven project trees.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SIMPLE_POM: &str = "<project>\n  <artifactId>demo</artifactId>\n  <build>\n    <plugins>\n    </plugins>\n  </build>\n</project>\n";

fn pomgraft() -> Command {
    Command::cargo_bin("pomgraft").expect("pomgraft binary")
}

fn create_temp_project() -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    let root = td.path();

    fs::write(root.join("pom.xml"), SIMPLE_POM).unwrap();
    fs::create_dir_all(root.join("module-a")).unwrap();
    fs::write(root.join("module-a/pom.xml"), SIMPLE_POM).unwrap();

    td
}

#[test]
fn integrate_mutates_every_matching_pom() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .arg("--server")
        .arg("https://collector.example.com")
        .arg("--customer-id")
        .arg("acme")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 integrated, 0 skipped, 0 failed"));

    for pom in ["pom.xml", "module-a/pom.xml"] {
        let text = fs::read_to_string(temp.path().join(pom)).unwrap();
        assert!(text.contains("pomgraft-maven-plugin"), "{pom} not mutated");
        assert!(text.contains("<customerId>acme</customerId>"));
    }
}

#[test]
fn integrate_is_idempotent_across_invocations() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .assert()
        .success();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 integrated, 2 skipped, 0 failed"))
        .stdout(predicate::str::contains("already integrated"));
}

#[test]
fn integrate_writes_backup_copies() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .assert()
        .success();

    let backup = fs::read_to_string(temp.path().join("pom.xml.slbak")).unwrap();
    assert_eq!(backup, SIMPLE_POM);
}

#[test]
fn no_backup_flag_suppresses_copies() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .arg("--no-backup")
        .assert()
        .success();

    assert!(!temp.path().join("pom.xml.slbak").exists());
}

#[test]
fn check_prints_a_diff_and_writes_nothing() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("would integrate"))
        .stdout(predicate::str::contains("+++"))
        .stdout(predicate::str::contains("pomgraft-maven-plugin"));

    assert_eq!(
        fs::read_to_string(temp.path().join("pom.xml")).unwrap(),
        SIMPLE_POM
    );
    assert!(!temp.path().join("pom.xml.slbak").exists());
}

#[test]
fn invalid_pom_is_reported_as_skipped_not_a_failure() {
    let temp = create_temp_project();
    fs::write(temp.path().join("module-a/pom.xml"), "<project><unclosed>").unwrap();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 integrated, 1 skipped, 0 failed"));
}

#[test]
fn config_file_is_discovered_in_the_search_folder() {
    let temp = create_temp_project();
    fs::write(
        temp.path().join("pomgraft.toml"),
        r#"
[agent]
server_url = "https://from-file.example.com"
app_name = "from-file"

[backups]
enabled = false
"#,
    )
    .unwrap();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("pom.xml")).unwrap();
    assert!(text.contains("<server>https://from-file.example.com</server>"));
    assert!(text.contains("<appName>from-file</appName>"));
    assert!(!temp.path().join("pom.xml.slbak").exists());
}

#[test]
fn flags_override_the_config_file() {
    let temp = create_temp_project();
    fs::write(
        temp.path().join("pomgraft.toml"),
        r#"
[agent]
server_url = "https://from-file.example.com"
"#,
    )
    .unwrap();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .arg("--server")
        .arg("https://from-flag.example.com")
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("pom.xml")).unwrap();
    assert!(text.contains("<server>https://from-flag.example.com</server>"));
    assert!(!text.contains("from-file.example.com"));
}

#[test]
fn plugin_version_flag_pins_the_rendered_version() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .arg("--plugin-version")
        .arg("3.1.4")
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("pom.xml")).unwrap();
    assert!(text.contains("<version>3.1.4</version>"));
}

#[test]
fn dry_run_flag_behaves_like_check() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("would integrate"));

    assert_eq!(
        fs::read_to_string(temp.path().join("pom.xml")).unwrap(),
        SIMPLE_POM
    );
}

#[test]
fn target_redirects_a_single_file() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .arg("--pattern")
        .arg("pom.xml")
        .arg("--target")
        .arg("pom.out.xml")
        .arg("--no-backup")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("pom.xml")).unwrap(),
        SIMPLE_POM
    );
    assert!(
        fs::read_to_string(temp.path().join("pom.out.xml"))
            .unwrap()
            .contains("pomgraft-maven-plugin")
    );
}

#[test]
fn target_rejects_multiple_matches() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .arg("--target")
        .arg("pom.out.xml")
        .assert()
        .failure();
}

#[test]
fn no_matches_is_a_clean_exit() {
    let td = tempfile::tempdir().expect("tempdir");

    pomgraft()
        .current_dir(td.path())
        .arg("integrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("no build files matched"));
}

#[test]
fn custom_pattern_narrows_discovery() {
    let temp = create_temp_project();

    pomgraft()
        .current_dir(temp.path())
        .arg("integrate")
        .arg("--pattern")
        .arg("pom.xml")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 integrated, 0 skipped, 0 failed"));

    // Only the top-level POM matched.
    let nested = fs::read_to_string(temp.path().join("module-a/pom.xml")).unwrap();
    assert_eq!(nested, SIMPLE_POM);
}

#[test]
fn unknown_subcommand_fails() {
    pomgraft()
        .arg("instrumentate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid").or(predicate::str::contains("unrecognized")));
}

#[test]
fn help_lists_the_subcommands() {
    pomgraft()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("integrate"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_flag_reports_the_binary_name() {
    pomgraft()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pomgraft"));
}
