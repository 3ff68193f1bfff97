use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = core::result::Result<T, GenerateError>;

/// Everything that can abort a generation pass.
///
/// None of these are recovered from: the pass stops and no output is written.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The input file does not exist or could not be read.
    #[error("could not read input file {}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input is not JSON, not an array of objects, or a field has the wrong type.
    #[error("malformed input file {}: {reason}", path.display())]
    InputMalformed { path: PathBuf, reason: String },
    /// A record lacks one of the required fields.
    #[error("user record #{index} in {} is missing required field `{field}`", path.display())]
    FieldMissing {
        path: PathBuf,
        index: usize,
        field: &'static str,
    },
    /// The output file could not be created or written.
    #[error("could not write output file {}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Check mode could not read an existing output file.
    #[error("could not read output file {}", path.display())]
    OutputReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Check mode found the output missing or different from what would be generated.
    #[error("{} is out of date, run without `--check` to regenerate it", path.display())]
    OutputOutOfDate { path: PathBuf },
}
