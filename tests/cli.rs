use std::{
    env, fs,
    path::PathBuf,
    process::{self, Command},
};

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_roman-words"))
}

fn scratch_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("roman-words-cli-{}-{name}", process::id()))
}

#[test]
fn expression_is_printed_to_stdout() {
    let output = binary().args(["-e", "MCMXCIV"]).output().expect("failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout),
               "ONE THOUSAND NINE HUNDRED NINETY FOUR\n");
}

#[test]
fn invalid_expression_prints_error_line() {
    let output = binary().args(["--expression", "ABC"]).output().expect("failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout),
               "Invalid Roman numeral(s). Skipping line.\n");
}

#[test]
fn batch_mode_writes_output_file() {
    let input = scratch_path("input.txt");
    let output_path = scratch_path("output.txt");
    fs::write(&input, "III + II\nV - X\n").unwrap();

    let output = binary().arg("-i")
                         .arg(&input)
                         .arg("-o")
                         .arg(&output_path)
                         .output()
                         .expect("failed to run binary");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Processing complete."));
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "FIVE\nNEGATIVE FIVE\n");

    fs::remove_file(&input).ok();
    fs::remove_file(&output_path).ok();
}

#[test]
fn missing_input_exits_with_status_one() {
    let input = scratch_path("missing.txt");
    let output_path = scratch_path("never-written.txt");

    let output = binary().arg("--input")
                         .arg(&input)
                         .arg("--output")
                         .arg(&output_path)
                         .output()
                         .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unable to open"));
    assert!(output.stdout.is_empty());
}
