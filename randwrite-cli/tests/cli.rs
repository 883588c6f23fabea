use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn randwrite() -> Command {
	Command::cargo_bin("randwrite").expect("binary builds")
}

fn corpus_file(text: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().expect("create temp file");
	file.write_all(text.as_bytes()).expect("write corpus");
	file
}

#[test]
fn generates_exactly_the_requested_length_from_a_file() {
	let corpus = corpus_file("the quick brown fox jumps over the lazy dog");

	let output = randwrite()
		.arg("2")
		.arg("40")
		.arg(corpus.path())
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let text = String::from_utf8(output).expect("utf-8 output");
	assert_eq!(text.chars().count(), 40);
}

#[test]
fn reads_standard_input_when_no_files_are_given() {
	let output = randwrite()
		.arg("1")
		.arg("6")
		.write_stdin("abcabcabc")
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let text = String::from_utf8(output).expect("utf-8 output");
	assert_eq!(text.chars().count(), 6);
	assert!(text.chars().all(|c| matches!(c, 'a' | 'b' | 'c')));
}

#[test]
fn folds_multiple_files_into_one_model() {
	let first = corpus_file("ababab");
	let second = corpus_file("acacac");

	let output = randwrite()
		.arg("1")
		.arg("30")
		.arg(first.path())
		.arg(second.path())
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let text = String::from_utf8(output).expect("utf-8 output");
	assert_eq!(text.chars().count(), 30);
	assert!(text.chars().all(|c| matches!(c, 'a' | 'b' | 'c')));
}

#[test]
fn rejects_a_zero_seed_length() {
	randwrite()
		.arg("0")
		.arg("10")
		.write_stdin("abcabc")
		.assert()
		.failure()
		.stderr(predicate::str::contains("invalid value"));
}

#[test]
fn rejects_a_non_integer_output_length() {
	randwrite()
		.arg("2")
		.arg("ten")
		.write_stdin("abcabc")
		.assert()
		.failure();
}

#[test]
fn reports_a_missing_file() {
	randwrite()
		.arg("2")
		.arg("10")
		.arg("definitely/not/here.txt")
		.assert()
		.failure()
		.stderr(predicate::str::contains("file not found"));
}

#[test]
fn reports_input_shorter_than_the_seed_window() {
	randwrite()
		.arg("8")
		.arg("10")
		.write_stdin("short")
		.assert()
		.failure()
		.stderr(predicate::str::contains("too short"));
}
