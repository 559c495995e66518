//! End-to-end runs of the `lsrs` binary against scratch directories.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// `sub/`, `a.txt` (10 bytes) and a hidden `.env`.
fn fixture() -> TempDir {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(tmp.path().join("sub")).expect("Failed to create dir");
    fs::write(tmp.path().join("a.txt"), b"0123456789").expect("Failed to write file");
    fs::write(tmp.path().join(".env"), b"KEY=1").expect("Failed to write file");
    tmp
}

fn stdout_of(args: &[&str], tmp: &TempDir) -> String {
    let output = cargo_bin_cmd!("lsrs")
        .args(args)
        .arg(tmp.path())
        .env_remove("LSRS_LOG_LEVEL")
        .output()
        .expect("Failed to run lsrs");

    assert!(output.status.success(), "lsrs {args:?} failed: {output:?}");
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

#[test]
fn default_listing_is_inline_with_directories_first() {
    let tmp = fixture();

    assert_eq!(stdout_of(&["--icons", "none"], &tmp), "sub/  a.txt\n");
    assert_eq!(stdout_of(&[], &tmp), "\u{e5ff} sub  \u{f15c} a.txt\n");
}

#[test]
fn all_flag_shows_hidden_entries() {
    let tmp = fixture();

    assert_eq!(
        stdout_of(&["-a", "-1", "--icons", "none"], &tmp),
        "sub\n.env\na.txt\n"
    );
}

#[test]
fn oneline_prints_glyph_and_name_per_line() {
    let tmp = fixture();

    assert_eq!(
        stdout_of(&["--oneline", "--icons", "emoji"], &tmp),
        "📁 sub\n📝 a.txt\n"
    );
}

#[test]
fn long_listing_has_one_line_per_entry() {
    let tmp = fixture();
    let out = stdout_of(&["-l", "--icons", "none"], &tmp);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2, "{out}");
    assert!(lines[0].starts_with('d') && lines[0].ends_with(" sub"), "{out}");
    assert!(lines[1].starts_with('-') && lines[1].ends_with(" a.txt"), "{out}");
    // Directories show a dash instead of a size; the file shows its bytes.
    assert!(lines[1].contains(" 10 "), "{out}");
}

#[test]
fn table_listing_has_summary_row() {
    let tmp = fixture();
    let out = stdout_of(&["--table"], &tmp);

    assert!(out.contains("Total Files"), "{out}");
    assert!(out.find("sub").expect("sub listed") < out.find("a.txt").expect("a.txt listed"));
    assert!(!out.contains(".env"));
}

#[test]
fn json_listing_is_sorted_and_schema_stable() {
    let tmp = fixture();
    let out = stdout_of(&["--json", "--table", "--long"], &tmp);

    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    let items = value.as_array().expect("array");

    let names: Vec<&str> = items.iter().filter_map(|i| i["name"].as_str()).collect();
    assert_eq!(names, ["sub", "a.txt"]);
    assert_eq!(items[0]["type"], "Dir");
    assert_eq!(items[1]["type"], "File");
    assert_eq!(items[1]["bytes"], 10);
    assert!(items[1]["modified"].is_string());
}

#[test]
fn color_always_highlights_directories() {
    let tmp = fixture();
    let out = stdout_of(&["--color", "always", "-1", "--icons", "none"], &tmp);

    let (first, second) = out.split_once('\n').expect("two lines");
    assert!(first.contains("\x1b[") && first.contains("sub"), "{out:?}");
    assert_eq!(second, "a.txt\n");
}

#[test]
fn relative_path_resolves_from_working_directory() {
    let tmp = fixture();

    cargo_bin_cmd!("lsrs")
        .current_dir(tmp.path())
        .args(["-1", "--icons", "none", "sub"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_path_fails_with_message() {
    let tmp = fixture();

    cargo_bin_cmd!("lsrs")
        .arg(tmp.path().join("nope"))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("path does not exist"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn file_path_fails_as_read_error() {
    let tmp = fixture();

    cargo_bin_cmd!("lsrs")
        .arg(tmp.path().join("a.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("lsrs: cannot read directory"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    cargo_bin_cmd!("lsrs")
        .arg("--recursive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--recursive"));
}
