//! The errors aborting a simulation run.
use std::io;

use thiserror::Error;

/// An error, that aborts the simulation.
///
/// Failed allocations and releases of unknown processes are not errors: they
/// are silently dropped by the [`BlockTable`](crate::BlockTable).
#[derive(Error, Debug)]
pub enum Error {
    /// The command stream contains an action code, that is not understood.
    #[error("unable to proceed, I can do nothing with action code: {0}")]
    UnknownAction(String),
    /// A process id or memory amount is not an integer.
    #[error("invalid {field} `{token}` in record {record}")]
    InvalidNumber {
        /// The 1-based index of the offending record.
        record: usize,
        /// The name of the field, that could not be parsed.
        field: &'static str,
        /// The offending token.
        token: String,
    },
    /// The program was invoked with unexpected arguments.
    #[error("{0}")]
    Usage(String),
    /// Reading the commands or writing the listings failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
