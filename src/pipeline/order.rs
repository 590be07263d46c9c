use tracing::info;

use crate::error::{PipelineError, Result};
use crate::models::{PaperRecord, SessionMap};

/// Integer value of a paper's `positionInSession`
pub fn parse_position(paper: &PaperRecord) -> Result<i64> {
    paper
        .position_in_session
        .trim()
        .parse::<i64>()
        .map_err(|source| PipelineError::InvalidPosition {
            paper_id: paper.id.clone(),
            session: paper.session.short_title.clone(),
            value: paper.position_in_session.clone(),
            source,
        })
}

/// Sort every session ascending by position.
///
/// The sort is stable: papers sharing a position keep their append order.
/// Positions are parsed once per paper before sorting, so the first
/// non-numeric value aborts the whole stage.
pub fn order_sessions(mut sessions: SessionMap) -> Result<SessionMap> {
    info!("Sorting papers in sessions");

    for session in sessions.iter_mut() {
        let mut keyed = std::mem::take(&mut session.papers)
            .into_iter()
            .map(|paper| parse_position(&paper).map(|position| (position, paper)))
            .collect::<Result<Vec<(i64, PaperRecord)>>>()?;

        keyed.sort_by_key(|(position, _)| *position);
        session.papers = keyed.into_iter().map(|(_, paper)| paper).collect();
    }

    Ok(sessions)
}
