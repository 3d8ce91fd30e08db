use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn tree_from_file_as_json() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree")
        .arg(fixture_path("get_user_project.graphql"))
        .arg("--format")
        .arg("json");

    let output_pred = predicate::str::contains("\"name\": \"GetUserProject\"")
        .and(predicate::str::contains("\"name\": \"api_key\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn tree_from_stdin_uses_configured_default_format() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree")
        .write_stdin("query GetUser { username { id } }");

    cmd.assert()
        .success()
        .stdout("GetUser\n└─ username\n  └─ id\n");
}

#[test]
fn tree_keep_keyword_flag() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree").arg("--keep-keyword").write_stdin("GetUser { id }");

    cmd.assert().success().stdout("GetUser\n└─ id\n");
}

#[test]
fn tree_shorthand_query_roots_at_first_field() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree").write_stdin("{ users { id } }");

    cmd.assert().success().stdout("users\n└─ id\n");
}

#[test]
fn tree_reports_empty_selection() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree").write_stdin("query ping { }");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error: empty selection set at byte 11"));
}

#[test]
fn tree_flags_override_config_file() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(
        config,
        "[parser]\nmax_depth = 1\n[output]\nformat = \"yaml\""
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree")
        .arg("--config")
        .arg(config.path())
        .arg("--max-depth")
        .arg("4")
        .arg("--format")
        .arg("json")
        .write_stdin("query Q { a { b } }");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"b\""));
}

#[test]
fn tree_reads_config_file() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(config, "[output]\nformat = \"yaml\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree")
        .arg(fixture_path("create_user.graphql"))
        .arg("--config")
        .arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("name: CreateUser"));
}

#[test]
fn tree_reports_unmatched_brace() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree")
        .arg(fixture_path("unclosed_selection.graphql"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error: unmatched '{' at byte 40"));
}

#[test]
fn tree_respects_max_depth() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree")
        .arg("--max-depth")
        .arg("1")
        .write_stdin("query { a { b } }");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit of 1"));
}

#[test]
fn tree_rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tree")
        .arg("--format")
        .arg("xml")
        .write_stdin("query ping");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'xml' not found"));
}

#[test]
fn tokens_lists_classified_tokens() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("tokens").write_stdin("query Q { user(id: 1) { id } }");

    let output_pred = predicate::str::contains("# keyword: query")
        .and(predicate::str::contains("Identifier 10..21\tuser"))
        .and(predicate::str::contains("OpenBrace"))
        .and(predicate::str::contains("CloseBrace"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("kensa");
    cmd.arg("list-formats");

    let output_pred = predicate::str::contains("json")
        .and(predicate::str::contains("treeviz"))
        .and(predicate::str::contains("yaml"));

    cmd.assert().success().stdout(output_pred);
}
