use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the conversion pipeline.
///
/// None of these are recovered from; they propagate to the caller and end the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read input file {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse submission XML")]
    Xml(#[from] quick_xml::DeError),

    #[error("paper {paper_id} in session {session} has non-numeric positionInSession {value:?}")]
    InvalidPosition {
        paper_id: String,
        session: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
