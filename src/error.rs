/// Per-line errors.
///
/// Defines every failure that can occur while turning a single input line
/// into its output line. A line error never aborts a batch: the offending line
/// is replaced by a fixed error line and processing moves on.
pub mod line_error;
/// Stream errors.
///
/// Contains the fatal errors raised when the input or output stream cannot be
/// opened, read or written. Without both streams no partial processing is
/// meaningful, so these abort the whole run.
pub mod stream_error;

pub use line_error::{INVALID_NUMERAL_LINE, LineError, LineResult, OUT_OF_RANGE_LINE};
pub use stream_error::StreamError;
