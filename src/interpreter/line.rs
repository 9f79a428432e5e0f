use log::{debug, warn};

use crate::{
    error::{LineError, LineResult},
    interpreter::{evaluator::evaluate, parser::parse_line},
    numeral::{is_valid_roman, roman_to_decimal},
    words::to_words,
};

/// Evaluates one input line and returns its words.
///
/// The line is parsed, every operand is validated and converted, the operator
/// is applied and the result is spelled. Nothing is carried over between
/// calls, so the same line always gives the same result.
///
/// # Parameters
/// - `line`: The input line, without its terminator.
///
/// # Returns
/// The uppercase words for the evaluated line.
///
/// # Errors
/// - `InvalidNumeral` if an operand is empty or not a Roman numeral.
/// - `TokenTooLong` if an operand is too long to parse.
/// - `RangeExceeded` if the result overflows or cannot be spelled.
///
/// # Example
/// ```
/// use roman_words::{error::LineError, interpreter::line::process_line};
///
/// assert_eq!(process_line("IV * III").unwrap(), "TWELVE");
/// assert_eq!(process_line("V - X").unwrap(), "NEGATIVE FIVE");
///
/// let err = process_line("ABC").unwrap_err();
/// assert!(matches!(err, LineError::InvalidNumeral { .. }));
/// ```
pub fn process_line(line: &str) -> LineResult<String> {
    let expression = parse_line(line)?;

    if let Some(bad) = expression.operands()
                                 .find(|operand| operand.is_empty() || !is_valid_roman(operand))
    {
        return Err(LineError::InvalidNumeral { token: bad.to_string() });
    }

    let first = roman_to_decimal(&expression.first)?;
    let operation = expression.operation
                              .as_ref()
                              .map(|(operator, second)| {
                                  roman_to_decimal(second).map(|value| (*operator, value))
                              })
                              .transpose()?;

    let value = evaluate(first, operation)?;
    debug!("'{expression}' evaluates to {value}");

    to_words(value)
}

/// Produces the output line for one input line.
///
/// Successful lines yield their words. A failed line yields the fixed error
/// text of its error, and the detailed reason is logged as a warning.
///
/// # Example
/// ```
/// use roman_words::{error::INVALID_NUMERAL_LINE, interpreter::line::render_line};
///
/// assert_eq!(render_line("III + II"), "FIVE");
/// assert_eq!(render_line("ABC"), INVALID_NUMERAL_LINE);
/// ```
#[must_use]
pub fn render_line(line: &str) -> String {
    render_outcome(line, process_line(line))
}

/// Turns the outcome of [`process_line`] into the text written for `line`.
#[must_use]
pub fn render_outcome(line: &str, outcome: LineResult<String>) -> String {
    outcome.unwrap_or_else(|e| {
               warn!("Skipping line '{line}': {e}");
               e.output_line().to_string()
           })
}
