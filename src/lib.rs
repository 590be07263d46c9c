pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod models;
pub mod output;
pub mod pipeline;

// Re-export commonly used items
pub use config::{Args, Config};
pub use error::{PipelineError, Result};
pub use format::{format_row, format_session, format_sessions, SessionCsv, CSV_HEADER};
pub use models::{
    AuthorRecord, Authors,
    PaperRecord, RawPaper,
    Session, SessionMap, SessionRef, UNASSIGNED_SESSION,
};
pub use output::{write_merged_file, write_output, write_session_files, OutputMode};
pub use pipeline::{convert, group_sessions, order_sessions, run, RunSummary};
