#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the `lox` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn lox(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lox"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lox")
}

fn source_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn parse_file_prints_trees() {
    let file = source_file("print 1 + 2 * 3;\n\"s\";\n");
    let output = lox(&[file.path().to_str().unwrap()]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "(print (+ 1 (* 2 3)))\n(; s)\n");
}

#[test]
fn syntax_errors_exit_65() {
    let file = source_file("print (1;\n");
    let output = lox(&["--color=never", "parse", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(65));
    let err = stderr(&output);
    assert!(err.contains("error[E1002]: Expect ')' after expression"));
    assert!(!err.contains("\x1b["));
}

#[test]
fn lex_errors_exit_65() {
    let file = source_file("var a = 1;\nvar b = ~;\n");
    let output = lox(&["--color=never", "scan", file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains(":2:9"));
}

#[test]
fn scan_and_lex_commands() {
    let file = source_file("1 >= 2 // cmp");
    let path = file.path().to_str().unwrap();

    let output = lox(&["scan", path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n>=\n2\n");

    let output = lox(&["lex", path]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("   1 GreaterEqual >= null\n"));
}

#[test]
fn missing_file_exits_66() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.lox");
    let output = lox(&["parse", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(66));
    assert!(stderr(&output).contains("cannot find file"));
}

#[test]
fn bad_usage_exits_64() {
    assert_eq!(lox(&["a.lox", "b.lox"]).status.code(), Some(64));
    assert_eq!(lox(&["scan"]).status.code(), Some(64));
    assert_eq!(lox(&["--color=purple"]).status.code(), Some(64));
    assert_eq!(lox(&["--frobnicate"]).status.code(), Some(64));
}

#[test]
fn prompt_reads_stdin_until_eof() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lox"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"1 + 2\nprint ;\n!true;\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "> (+ 1 2)\n> > (; (! true))\n> \n");
    assert!(stderr(&output).contains("Expect expression."));
}
