use std::{io, path::PathBuf};

use thiserror::Error;

/// Exit status used by the binary when a stream is unavailable.
pub const STREAM_UNAVAILABLE_EXIT_CODE: i32 = 1;

/// Represents a failure of the input or output stream.
///
/// Every variant is fatal to the batch.
#[derive(Error, Debug)]
pub enum StreamError {
    /// A file could not be opened or created.
    #[error("Unable to open '{}': {source}", .path.display())]
    Open {
        /// The path that failed to open.
        path:   PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading from the input stream failed.
    #[error("Unable to read input line {line}: {source}")]
    Read {
        /// The 1-based number of the line being read.
        line:   usize,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Writing to the output stream failed.
    #[error("Unable to write output: {source}")]
    Write {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl StreamError {
    /// Returns the process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        STREAM_UNAVAILABLE_EXIT_CODE
    }
}
