//! Writing formatted sessions to disk.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::format::{SessionCsv, CSV_HEADER, NEW_LINE};

/// How formatted sessions are laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One `<key>.csv` per session inside the output directory
    #[default]
    PerSession,
    /// A single file with one shared header
    Merged,
}

/// Path of the per-session file for `key` inside `directory`
pub fn session_file_path(directory: &Path, key: &str) -> PathBuf {
    directory.join(format!("{key}.csv"))
}

/// Build the merged document: header, then each session's rows followed by a newline
pub fn merge_sessions(blocks: &[SessionCsv]) -> String {
    let mut merged = String::from(CSV_HEADER);
    merged.push_str(NEW_LINE);
    for block in blocks {
        merged.push_str(block.rows());
        merged.push_str(NEW_LINE);
    }
    merged
}

async fn create_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| PipelineError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    info!("Writing file: {}", path.display());
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| PipelineError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}

/// Write one file per session into `directory`, creating it if needed.
///
/// Files are written one after another; a failure leaves earlier files in
/// place and the failing one possibly truncated.
pub async fn write_session_files(directory: &Path, blocks: &[SessionCsv]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(blocks.len());
    if blocks.is_empty() {
        return Ok(written);
    }

    create_dir(directory).await?;
    for block in blocks {
        let path = session_file_path(directory, &block.key);
        write_file(&path, &block.content).await?;
        written.push(path);
    }
    Ok(written)
}

/// Write every session into the single file at `target`
pub async fn write_merged_file(target: &Path, blocks: &[SessionCsv]) -> Result<PathBuf> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent).await?;
    }
    write_file(target, &merge_sessions(blocks)).await?;
    Ok(target.to_path_buf())
}

/// Dispatch to the writer for `mode`, returning the paths written
pub async fn write_output(mode: OutputMode, output: &Path, blocks: &[SessionCsv]) -> Result<Vec<PathBuf>> {
    match mode {
        OutputMode::PerSession => write_session_files(output, blocks).await,
        OutputMode::Merged => Ok(vec![write_merged_file(output, blocks).await?]),
    }
}
