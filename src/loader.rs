//! Reading and decoding the submission export.

use std::path::Path;

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::models::{PaperRecord, PapersDocument};

/// Decode an export document into canonical paper records.
///
/// The root element name is not checked; every `<paper>` child is adapted
/// in document order. A document without papers yields an empty list.
pub fn parse_papers(xml: &str) -> Result<Vec<PaperRecord>> {
    let document: PapersDocument = quick_xml::de::from_str(xml)?;
    let papers: Vec<PaperRecord> = document
        .papers
        .into_iter()
        .map(PaperRecord::from)
        .collect();

    info!("Found {} papers", papers.len());
    Ok(papers)
}

/// Read the export at `path` and decode it
pub async fn load_papers(path: &Path) -> Result<Vec<PaperRecord>> {
    info!("Loading data from: {}", path.display());

    let xml = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PipelineError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

    parse_papers(&xml)
}
