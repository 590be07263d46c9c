//! Load → group → order → format → write.
//!
//! Each stage consumes the complete result of the previous one; nothing is
//! streamed and nothing runs concurrently.

pub mod group;
pub mod order;

pub use group::group_sessions;
pub use order::{order_sessions, parse_position};

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::format::format_sessions;
use crate::loader::{load_papers, parse_papers};
use crate::models::{PaperRecord, SessionMap};
use crate::output::write_output;

/// Counts reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub papers_loaded: usize,
    pub papers_retained: usize,
    pub sessions: usize,
    pub files: Vec<PathBuf>,
}

/// Group and order already adapted papers
pub fn build_sessions(papers: Vec<PaperRecord>) -> Result<SessionMap> {
    order_sessions(group_sessions(papers))
}

/// In-memory part of the pipeline: decode, adapt, group and order
pub fn convert(xml: &str) -> Result<SessionMap> {
    build_sessions(parse_papers(xml)?)
}

/// Run the whole pipeline for `config`
pub async fn run(config: &Config) -> Result<RunSummary> {
    info!("Generating include list for latex workflow");

    let papers = load_papers(&config.input).await?;
    let papers_loaded = papers.len();

    let sessions = build_sessions(papers)?;
    let blocks = format_sessions(&sessions);
    let files = write_output(config.mode, &config.output, &blocks).await?;

    Ok(RunSummary {
        papers_loaded,
        papers_retained: sessions.paper_count(),
        sessions: sessions.len(),
        files,
    })
}
