//! End-to-end tests for the record filter, through the library and the binary.

use std::fs::File;
use std::io::{BufReader, Write};
use std::process::{Command, Stdio};

use iritool::app::{read_records, RecordWriter};
use iritool::config::{Config, OutputFormat, Terminator};
use iritool::run_filter;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

#[test]
fn test_nul_delimited_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_input(
        &temp_dir,
        "links.bin",
        b"https://a.example.com/x#frag\0\0https://b.example.org/?q\n2\0",
    );
    let reader = BufReader::new(File::open(&path).unwrap());

    let config = Config {
        null_input: true,
        ..Default::default()
    };
    let mut writer = RecordWriter::new(Vec::new(), OutputFormat::Plain, Terminator::Nul);
    let report = run_filter(&config, read_records(reader, config.input_delimiter()), &mut writer)
        .unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.emitted, 2);
    assert_eq!(
        writer.into_inner(),
        b"https://a.example.com/x\0https://b.example.org/?q\n2\0"
    );
}

#[test]
fn test_internal_links_as_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_input(
        &temp_dir,
        "links.txt",
        b"https://docs.example.com/guide\nhttps://elsewhere.net/\n\nhttp://user:pw@example.com:8080/a;p\n",
    );
    let reader = BufReader::new(File::open(&path).unwrap());

    let config = Config {
        internal_to: Some("https://example.com/".to_string()),
        format: OutputFormat::Json,
        ..Default::default()
    };
    let mut writer = RecordWriter::new(Vec::new(), config.format, Terminator::Newline);
    let report = run_filter(&config, read_records(reader, b'\n'), &mut writer).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.emitted, 2);
    assert_eq!(report.filtered, 1);

    let output = String::from_utf8(writer.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["host"], "docs.example.com");
    assert_eq!(lines[1]["username"], "user");
    assert_eq!(lines[1]["password"], "pw");
    assert_eq!(lines[1]["port"], 8080);
    assert_eq!(lines[1]["path"], "/a");
    assert_eq!(lines[1]["params"], "p");
    assert_eq!(lines[1]["domain_psl"], "example.com");
    assert_eq!(lines[1]["digest"].as_str().unwrap().len(), 64);
}

fn iritool() -> Command {
    Command::new(env!("CARGO_BIN_EXE_iritool"))
}

#[test]
fn test_binary_args_with_newline() {
    let output = iritool()
        .args(["--newline", "https://example.com/a#b", "http://x.org"])
        .output()
        .expect("Failed to run iritool");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"https://example.com/a\nhttp://x.org\n");
}

#[test]
fn test_binary_stdin_defaults_to_nul_when_piped() {
    let mut child = iritool()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn iritool");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"http://a.com/#x\nhttp://b.com/\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"http://a.com/\0http://b.com/\0");
}

#[test]
fn test_binary_missing_scheme_exits_nonzero() {
    let output = iritool()
        .args(["--newline", "http://ok.com/", "not-a-url"])
        .output()
        .expect("Failed to run iritool");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, b"http://ok.com/\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("iritool error"));
    assert!(stderr.contains("missing a scheme"));
}

#[test]
fn test_binary_keep_going() {
    let output = iritool()
        .args(["--newline", "--keep-going", "not-a-url", "http://ok.com/"])
        .output()
        .expect("Failed to run iritool");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"http://ok.com/\n");
}
