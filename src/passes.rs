use serde::Serialize;

use crate::error::{Result, VizError};
use crate::event::Event;

/// One qualifying pass with both endpoints unpacked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassRecord {
    pub player: String,
    pub team: String,
    /// Absent on some unsuccessful passes (played into space).
    pub recipient: Option<String>,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub is_completed: bool,
}

/// Passes split by outcome. The two halves are disjoint and together cover
/// every qualifying pass; each preserves input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PassSelection {
    pub completed: Vec<PassRecord>,
    pub other: Vec<PassRecord>,
}

/// Open-play and goal-kick passes for exactly one of a team or a player.
/// Corners, free kicks, throw-ins and kick-offs are excluded via their
/// `pass_type` tag. A pass is completed iff it has no recorded outcome.
pub fn extract_passes(
    events: &[Event],
    team: Option<&str>,
    player: Option<&str>,
) -> Result<PassSelection> {
    let team = team.map(str::trim).filter(|s| !s.is_empty());
    let player = player.map(str::trim).filter(|s| !s.is_empty());
    let filter = match (team, player) {
        (Some(team), None) => PassFilter::Team(team),
        (None, Some(player)) => PassFilter::Player(player),
        (Some(_), Some(_)) => {
            return Err(VizError::InvalidArgument(
                "pass either a team or a player name, not both".to_string(),
            ));
        }
        (None, None) => {
            return Err(VizError::InvalidArgument(
                "either a team or a player name is required".to_string(),
            ));
        }
    };

    let mut selection = PassSelection::default();
    for event in events.iter().filter(|e| e.is_open_play_pass()) {
        let keep = match filter {
            PassFilter::Team(team) => event.team == team,
            PassFilter::Player(player) => event.player.as_deref() == Some(player),
        };
        if !keep {
            continue;
        }
        let record = pass_record(event)?;
        if record.is_completed {
            selection.completed.push(record);
        } else {
            selection.other.push(record);
        }
    }
    log::debug!(
        "extracted {} completed / {} other passes",
        selection.completed.len(),
        selection.other.len()
    );
    Ok(selection)
}

#[derive(Debug, Clone, Copy)]
enum PassFilter<'a> {
    Team(&'a str),
    Player(&'a str),
}

fn pass_record(event: &Event) -> Result<PassRecord> {
    let start = event.location.ok_or_else(|| VizError::SchemaMismatch {
        index: event.index,
        detail: "pass has no location".to_string(),
    })?;
    let end = event
        .pass_end_location
        .ok_or_else(|| VizError::SchemaMismatch {
            index: event.index,
            detail: "pass has no end location".to_string(),
        })?;
    let player = event
        .player
        .clone()
        .ok_or_else(|| VizError::SchemaMismatch {
            index: event.index,
            detail: "pass has no player".to_string(),
        })?;
    Ok(PassRecord {
        player,
        team: event.team.clone(),
        recipient: event.pass_recipient.clone(),
        start_x: start.x,
        start_y: start.y,
        end_x: end.x,
        end_y: end.y,
        is_completed: event.pass_outcome.is_none(),
    })
}
