use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn document(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write document");
    file
}

const ELSE_CHAIN: &str = "if x:\n    a\nelse:\n    b\nend\n";

#[test]
fn annotate_prints_tag_format_by_default() {
    let file = document(ELSE_CHAIN, ".txt");
    let mut cmd = cargo_bin_cmd!("cuddle");
    cmd.arg("annotate").arg(file.path());

    cmd.assert().success().stdout(
        predicate::str::contains("0:0..0:2 arm level=1")
            .and(predicate::str::contains("hover=\"Line 1: if x:\"")),
    );
}

#[test]
fn annotate_spans_in_lenient_mode() {
    let file = document("a:\n    b\n    c\nd\n", ".txt");
    let mut cmd = cargo_bin_cmd!("cuddle");
    cmd.args(["annotate", "--format", "spans", "--lenient"])
        .arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("lines 0..=2 column=0 splits=[]\n"));
}

#[test]
fn annotate_json_is_parseable() {
    let file = document(ELSE_CHAIN, ".txt");
    let mut cmd = cargo_bin_cmd!("cuddle");
    cmd.args(["annotate", "-f", "json"]).arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"splits\": [\n        2\n      ]"));
}

#[test]
fn unknown_format_fails() {
    let file = document(ELSE_CHAIN, ".txt");
    let mut cmd = cargo_bin_cmd!("cuddle");
    cmd.args(["annotate", "--format", "xml"]).arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: Format 'xml' not found"));
}

#[test]
fn missing_document_fails() {
    let mut cmd = cargo_bin_cmd!("cuddle");
    cmd.args(["annotate", "/nonexistent/cuddle-doc.txt"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: cannot read /nonexistent/cuddle-doc.txt"));
}

#[test]
fn config_file_applies_per_extension_overrides() {
    let config = document(
        "[overrides.py.detection]\nrequire_closing_text = false\n",
        ".toml",
    );
    let source = document("def f():\n    pass\nx = 1\n", ".py");
    let mut cmd = cargo_bin_cmd!("cuddle");
    cmd.args(["annotate", "--format", "spans", "--config"])
        .arg(config.path())
        .arg(source.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("lines 0..=1 column=0 splits=[]\n"));
}

#[test]
fn tab_size_option_changes_measurement() {
    let file = document("\tif x:\n      a\n    end", ".txt");

    let mut wide = cargo_bin_cmd!("cuddle");
    wide.args(["annotate", "--format", "spans"]).arg(file.path());
    wide.assert()
        .success()
        .stdout(predicate::str::diff("lines 0..=2 column=4 splits=[]\n"));

    let mut narrow = cargo_bin_cmd!("cuddle");
    narrow
        .args(["annotate", "--format", "spans", "--tab-size", "2"])
        .arg(file.path());
    narrow.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn show_draws_connectors() {
    let file = document(ELSE_CHAIN, ".txt");
    let mut cmd = cargo_bin_cmd!("cuddle");
    cmd.arg("show").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("│   a").and(predicate::str::contains("\u{1b}[38;2;")));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("cuddle");
    cmd.arg("list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("json")
            .and(predicate::str::contains("spans"))
            .and(predicate::str::contains("tag"))
            .and(predicate::str::contains("yaml")),
    );
}
