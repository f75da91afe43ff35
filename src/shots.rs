use serde::Serialize;

use crate::error::{Result, VizError};
use crate::event::Event;
use crate::pitch::PitchSpec;

/// One qualifying shot, ready for plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotRecord {
    pub player: String,
    pub team: String,
    pub x: f64,
    pub y: f64,
    pub is_goal: bool,
}

/// All shots by `team`, in original event order.
pub fn extract_shots(events: &[Event], team: &str) -> Result<Vec<ShotRecord>> {
    let team = team.trim();
    if team.is_empty() {
        return Err(VizError::InvalidArgument(
            "team name must not be blank".to_string(),
        ));
    }

    let mut out = Vec::new();
    for event in events.iter().filter(|e| e.is_shot() && e.team == team) {
        out.push(shot_record(event)?);
    }
    log::debug!("extracted {} shots for {team}", out.len());
    Ok(out)
}

/// Shots by both teams on a shared pitch: the log must contain exactly two
/// distinct teams, and the second team's coordinates are mirrored so each
/// side's shots point at the end it attacked.
pub fn extract_shots_two_teams(events: &[Event], pitch: &PitchSpec) -> Result<Vec<ShotRecord>> {
    let [_, away] = discover_teams(events)?;
    let away = away.to_string();

    let mut out = Vec::new();
    for event in events.iter().filter(|e| e.is_shot()) {
        let mut record = shot_record(event)?;
        if record.team == away {
            let mirrored = pitch.mirror(crate::event::Location::new(record.x, record.y));
            record.x = mirrored.x;
            record.y = mirrored.y;
        }
        out.push(record);
    }
    Ok(out)
}

/// The two distinct team names in the log, in first-appearance order.
pub(crate) fn discover_teams(events: &[Event]) -> Result<[&str; 2]> {
    let mut teams: Vec<&str> = Vec::new();
    for event in events {
        if !teams.contains(&event.team.as_str()) {
            teams.push(&event.team);
        }
    }
    match teams[..] {
        [first, second] => Ok([first, second]),
        _ => Err(VizError::InvalidArgument(format!(
            "expected exactly 2 teams in the log, found {}",
            teams.len()
        ))),
    }
}

fn shot_record(event: &Event) -> Result<ShotRecord> {
    let location = event.location.ok_or_else(|| VizError::SchemaMismatch {
        index: event.index,
        detail: "shot has no location".to_string(),
    })?;
    let player = event
        .player
        .clone()
        .ok_or_else(|| VizError::SchemaMismatch {
            index: event.index,
            detail: "shot has no player".to_string(),
        })?;
    Ok(ShotRecord {
        player,
        team: event.team.clone(),
        x: location.x,
        y: location.y,
        is_goal: event.shot_outcome.as_deref() == Some("Goal"),
    })
}
