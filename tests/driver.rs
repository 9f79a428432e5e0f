use std::{
    env, fs,
    io::{self, BufReader, Read, Write},
    path::PathBuf,
    process,
};

use roman_words::{RunSummary, error::StreamError, run, run_files};

fn scratch_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("roman-words-{}-{name}", process::id()))
}

fn run_to_string(input: &str) -> (String, RunSummary) {
    let mut output = Vec::new();
    let summary = run(input.as_bytes(), &mut output).expect("in-memory run failed");
    (String::from_utf8(output).expect("output is not UTF-8"), summary)
}

#[test]
fn last_line_without_terminator_is_processed() {
    let (output, summary) = run_to_string("I\nII");

    assert_eq!(output, "ONE\nTWO\n");
    assert_eq!(summary,
               RunSummary { lines:   2,
                            skipped: 0, });
}

#[test]
fn crlf_terminators_are_stripped() {
    let (output, _) = run_to_string("III + II\r\nX - V\r\n");
    assert_eq!(output, "FIVE\nFIVE\n");
}

#[test]
fn skipped_lines_are_counted() {
    let (output, summary) = run_to_string("ABC\nV\n\nMMM * MMM\n");

    assert_eq!(output,
               "Invalid Roman numeral(s). Skipping line.\nFIVE\nInvalid Roman numeral(s). \
                Skipping line.\nNINE MILLION\n");
    assert_eq!(summary.lines, 4);
    assert_eq!(summary.skipped, 2);
}

#[test]
fn empty_input_gives_empty_output() {
    let (output, summary) = run_to_string("");

    assert!(output.is_empty());
    assert_eq!(summary, RunSummary::default());
}

#[test]
fn files_are_read_and_written() {
    let input = scratch_path("input.txt");
    let output = scratch_path("output.txt");
    fs::write(&input, "IV * III\nV - X\nABC").unwrap();

    let summary = run_files(&input, &output).unwrap();
    let written = fs::read_to_string(&output).unwrap();

    assert_eq!(written, "TWELVE\nNEGATIVE FIVE\nInvalid Roman numeral(s). Skipping line.\n");
    assert_eq!(summary.lines, 3);
    assert_eq!(summary.skipped, 1);

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}

#[test]
fn missing_input_file_is_fatal() {
    let input = scratch_path("does-not-exist.txt");
    let output = scratch_path("unused-output.txt");

    let err = run_files(&input, &output).unwrap_err();

    assert!(matches!(&err, StreamError::Open { path, .. } if *path == input));
    assert_eq!(err.exit_code(), 1);
    assert!(!output.exists(), "Output must not be created when input is missing");
}

struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn unwritable_output_is_fatal() {
    let err = run("I\n".as_bytes(), BrokenWriter).unwrap_err();
    assert!(matches!(err, StreamError::Write { .. }));
}

#[test]
fn badly_encoded_line_is_skipped() {
    let invalid_utf8: &[u8] = &[b'I', b'\n', 0xFF, 0xFE, b'\n'];
    let mut output = Vec::new();

    let summary = run(invalid_utf8, &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(),
               "ONE\nInvalid Roman numeral(s). Skipping line.\n");
    assert_eq!(summary.lines, 2);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn latin1_line_does_not_stop_the_batch() {
    let input: &[u8] = b"III + II\ncaf\xE9\nX - V\n";
    let mut output = Vec::new();

    let summary = run(input, &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(),
               "FIVE\nInvalid Roman numeral(s). Skipping line.\nFIVE\n");
    assert_eq!(summary,
               RunSummary { lines:   3,
                            skipped: 1, });
}

struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("source closed"))
    }
}

#[test]
fn unreadable_input_is_fatal() {
    let mut output = Vec::new();

    let err = run(BufReader::new(BrokenReader), &mut output).unwrap_err();

    assert!(matches!(err, StreamError::Read { line: 1, .. }));
    assert!(output.is_empty());
}
