use thiserror::Error;

/// Output line written in place of a line whose operands are not valid Roman
/// numerals.
pub const INVALID_NUMERAL_LINE: &str = "Invalid Roman numeral(s). Skipping line.";
/// Output line written in place of a line whose result cannot be spelled.
pub const OUT_OF_RANGE_LINE: &str = "Result out of range. Skipping line.";

/// Result type used by every stage of line processing.
pub type LineResult<T> = Result<T, LineError>;

/// Represents all errors that can occur while processing a single line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// An operand is empty or contains a character outside `I V X L C D M`.
    #[error("Invalid Roman numeral '{token}'.")]
    InvalidNumeral {
        /// The rejected operand.
        token: String,
    },
    /// An operand is longer than the parser accepts.
    #[error("Operand is {length} characters long, the maximum is {max}.")]
    TokenTooLong {
        /// Length of the rejected operand.
        length: usize,
        /// The maximum supported length.
        max:    usize,
    },
    /// The evaluated value overflowed or cannot be spelled.
    #[error("Result out of range: {details}.")]
    RangeExceeded {
        /// What went out of range.
        details: String,
    },
}

impl LineError {
    /// Returns the text written to the output stream in place of the failed
    /// line.
    ///
    /// `TokenTooLong` shares the invalid numeral line, so callers that match
    /// output byte for byte see the same text for both.
    ///
    /// # Example
    /// ```
    /// use roman_words::error::{INVALID_NUMERAL_LINE, LineError};
    ///
    /// let err = LineError::TokenTooLong { length: 60,
    ///                                     max:    49, };
    /// assert_eq!(err.output_line(), INVALID_NUMERAL_LINE);
    /// ```
    #[must_use]
    pub const fn output_line(&self) -> &'static str {
        match self {
            Self::InvalidNumeral { .. } | Self::TokenTooLong { .. } => INVALID_NUMERAL_LINE,
            Self::RangeExceeded { .. } => OUT_OF_RANGE_LINE,
        }
    }
}
