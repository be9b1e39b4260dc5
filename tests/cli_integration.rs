use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

const TAXONOMY: &str = r#"{
    "root": { "parentId": "root", "name": "Everything" },
    "fruit": { "parentId": "root", "name": "Fruit", "container": true },
    "veg": { "parentId": "root", "name": "Vegetables" },
    "citrus": { "parentId": "fruit", "name": "Citrus" },
    "lime": { "parentId": "citrus", "name": "Lime & zest" }
}"#;

fn write_taxonomy(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("taxonomy.json");
    std::fs::write(&path, TAXONOMY).unwrap();
    path
}

fn stemma() -> Command {
    Command::cargo_bin("stemma").unwrap()
}

#[test]
fn test_tree_listing_is_indented_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_taxonomy(&dir);

    stemma()
        .arg("--file")
        .arg(&file)
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("Everything"))
        .stdout(predicate::str::contains("    Fruit"))
        .stdout(predicate::str::contains("        Citrus"))
        .stdout(predicate::str::contains("            Lime & zest"));
}

#[test]
fn test_children_default_to_root() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_taxonomy(&dir);

    stemma()
        .arg("--file")
        .arg(&file)
        .arg("children")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fruit"))
        .stdout(predicate::str::contains("Vegetables"))
        .stdout(predicate::str::contains("Citrus").not());
}

#[test]
fn test_ancestors_end_with_root() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_taxonomy(&dir);

    let output = stemma()
        .arg("--file")
        .arg(&file)
        .args(["ancestors", "lime"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, vec!["citrus", "fruit", "root"]);
}

#[test]
fn test_nearest_with_boolean_value() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_taxonomy(&dir);

    stemma()
        .arg("--file")
        .arg(&file)
        .args(["nearest", "lime", "container", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fruit"));
}

#[test]
fn test_nearest_reports_no_match() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_taxonomy(&dir);

    stemma()
        .arg("--file")
        .arg(&file)
        .args(["nearest", "lime", "container", "\"never\""])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching ancestor."));
}

#[test]
fn test_forced_root_restricts_tree() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_taxonomy(&dir);

    stemma()
        .arg("--file")
        .arg(&file)
        .args(["--root", "fruit", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fruit"))
        .stdout(predicate::str::contains("Vegetables").not());
}

#[test]
fn test_two_roots_fail_with_reason() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(
        &path,
        r#"{
            "a": { "parentId": "a" },
            "b": { "parentId": "a" },
            "a2": { "parentId": "a2" }
        }"#,
    )
    .unwrap();

    stemma()
        .arg("--file")
        .arg(&path)
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one self-referencing root"));
}

#[test]
fn test_dangling_parent_fails_naming_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dangling.json");
    std::fs::write(
        &path,
        r#"{
            "a": { "parentId": "a" },
            "x": { "parentId": "y" }
        }"#,
    )
    .unwrap();

    stemma()
        .arg("--file")
        .arg(&path)
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("record x references parent y"));
}

#[test]
fn test_non_mapping_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    stemma()
        .arg("--file")
        .arg(&path)
        .arg("tree")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a mapping"));
}

#[test]
fn test_html_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_taxonomy(&dir);

    stemma()
        .arg("--file")
        .arg(&file)
        .args([
            "html",
            "--link-base",
            "/taxa/",
            "--highlight",
            "lime",
            "--highlight-flag",
            "container",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("<ul class=\"hierarchicallisting\">"))
        .stdout(predicate::str::contains("href=\"/taxa/fruit/\""))
        .stdout(predicate::str::contains("<strong>Lime &amp; zest</strong>"))
        .stdout(predicate::str::contains("<strong>Fruit</strong>"));
}
