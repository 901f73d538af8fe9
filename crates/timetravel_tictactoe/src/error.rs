//! Error types for history navigation.

use derive_more::{Display, Error};

/// A requested history step does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StepError {
    /// The step is past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
