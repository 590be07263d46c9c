use tracing::info;

use crate::models::{PaperRecord, SessionMap, UNASSIGNED_SESSION};

/// Partition accepted papers into session buckets.
///
/// Rejected papers (`isAccepted` exactly `"false"`) are dropped. An empty
/// short title is rewritten to [`UNASSIGNED_SESSION`] on the record itself,
/// so the rewritten key is also what ends up in the `track` column.
pub fn group_sessions(papers: impl IntoIterator<Item = PaperRecord>) -> SessionMap {
    info!("Mapping papers to sessions");

    let mut sessions = SessionMap::new();
    for mut paper in papers {
        if !paper.is_retained() {
            continue;
        }
        if paper.session.is_unassigned() {
            paper.session.short_title = UNASSIGNED_SESSION.to_string();
        }
        let key = paper.session.short_title.clone();
        sessions.push(&key, paper);
    }

    info!(
        "Found {} sessions [{} papers remaining]",
        sessions.len(),
        sessions.paper_count()
    );
    sessions
}
