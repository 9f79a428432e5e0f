//! # roman-words
//!
//! roman-words evaluates arithmetic on Roman numerals and spells the results
//! in uppercase English words. Each input line holds one numeral, or two
//! numerals joined by `+`, `-`, `*` or `=`, and produces exactly one output
//! line.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of a parsed line.
///
/// This module declares the `Operator` enum and the `Expression` type built
/// by the parser and consumed by the line processor.
pub mod ast;
/// Reads lines from an input stream and writes answers to an output stream.
///
/// # Responsibilities
/// - Preserves line order: output line `i` answers input line `i`.
/// - Turns stream failures into fatal `StreamError`s.
/// - Summarises how many lines were skipped.
pub mod driver;
/// Provides the error types for line processing and stream handling.
///
/// Line errors are recovered by writing a fixed error line; stream errors
/// abort the run.
pub mod error;
/// Parses and evaluates a single line.
///
/// This module ties together lexing, parsing, evaluation and spelling to turn
/// one line of input into one line of output.
pub mod interpreter;
/// Roman numeral validation and conversion.
pub mod numeral;
/// Spells integers in English words.
///
/// # Responsibilities
/// - Splits a magnitude into thousand and million groups.
/// - Spells hundreds, teens and tens within a group.
/// - Rejects values beyond the millions.
pub mod words;

pub use driver::{RunSummary, process_lines, run, run_files};
pub use interpreter::line::{process_line, render_line};

/// Returns the output line for a single expression.
///
/// This is the entry point for evaluating one line: the result words on
/// success, otherwise the fixed error line for the failure.
///
/// # Examples
/// ```
/// use roman_words::get_result;
///
/// assert_eq!(get_result("MCMXCIV"), "ONE THOUSAND NINE HUNDRED NINETY FOUR");
/// assert_eq!(get_result("ABC"), "Invalid Roman numeral(s). Skipping line.");
/// ```
#[must_use]
pub fn get_result(source: &str) -> String {
    render_line(source)
}
