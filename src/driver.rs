use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{
    error::StreamError,
    interpreter::line::{process_line, render_line, render_outcome},
};

/// Counts of what happened during a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of lines read and answered.
    pub lines:   usize,
    /// Number of lines answered with an error line.
    pub skipped: usize,
}

/// Processes a sequence of lines in memory.
///
/// Output line `i` always belongs to input line `i`; failed lines are
/// replaced by their error text rather than dropped.
///
/// # Example
/// ```
/// use roman_words::{driver::process_lines, error::INVALID_NUMERAL_LINE};
///
/// let output = process_lines(["III + II", "ABC", "X - V"]);
/// assert_eq!(output, vec!["FIVE", INVALID_NUMERAL_LINE, "FIVE"]);
/// ```
pub fn process_lines<I, S>(lines: I) -> Vec<String>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    lines.into_iter().map(|line| render_line(line.as_ref())).collect()
}

/// Streams lines from `input` to `output`, one output line per input line.
///
/// A final line without a terminator is still processed. Both `\n` and
/// `\r\n` terminators are accepted. Every output line ends with `\n`.
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// badly encoded line is answered with an error line like any other invalid
/// line.
///
/// # Parameters
/// - `input`: The line source.
/// - `output`: The line sink.
///
/// # Returns
/// A [`RunSummary`] of the batch.
///
/// # Errors
/// Returns a `StreamError` if reading, writing or flushing fails at the I/O
/// level. Lines written before the failure stay written.
///
/// # Example
/// ```
/// use roman_words::driver::run;
///
/// let mut output = Vec::new();
/// let summary = run("IV * III\nQ".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "TWELVE\nInvalid Roman numeral(s). Skipping line.\n");
/// assert_eq!(summary.lines, 2);
/// assert_eq!(summary.skipped, 1);
/// ```
pub fn run<R, W>(mut input: R, mut output: W) -> Result<RunSummary, StreamError>
    where R: BufRead,
          W: Write
{
    let mut summary = RunSummary::default();
    let mut buffer = Vec::new();

    loop {
        let line_number = summary.lines + 1;
        let Some(line) =
            read_line(&mut input, &mut buffer).map_err(|source| StreamError::Read { line: line_number,
                                                                                    source })?
        else {
            break;
        };

        let outcome = process_line(&line);
        if outcome.is_err() {
            summary.skipped += 1;
        }

        writeln!(output, "{}", render_outcome(&line, outcome)).map_err(|source| {
                                                                   StreamError::Write { source }
                                                               })?;
        summary.lines += 1;
    }

    output.flush().map_err(|source| StreamError::Write { source })?;

    info!("Processed {} line(s), skipped {}", summary.lines, summary.skipped);

    Ok(summary)
}

/// Reads the next line into `buffer` and decodes it, without its terminator.
///
/// Returns `Ok(None)` at end of input.
fn read_line<R: BufRead>(input: &mut R, buffer: &mut Vec<u8>) -> io::Result<Option<String>> {
    buffer.clear();
    if input.read_until(b'\n', buffer)? == 0 {
        return Ok(None);
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(buffer).into_owned()))
}

/// Runs a batch from the file at `input` into the file at `output`.
///
/// The output file is created or truncated.
///
/// # Errors
/// Returns `StreamError::Open` if either file cannot be opened, and any error
/// of [`run`] afterwards.
pub fn run_files(input: &Path, output: &Path) -> Result<RunSummary, StreamError> {
    let reader = File::open(input).map_err(|source| StreamError::Open { path: input.to_path_buf(),
                                                                       source })?;
    let writer = File::create(output).map_err(|source| StreamError::Open { path: output.to_path_buf(),
                                                                          source })?;

    info!("Reading '{}', writing '{}'", input.display(), output.display());

    run(BufReader::new(reader), BufWriter::new(writer))
}
