use serde::{Deserialize, Serialize};

/// A point on the pitch, decoded once at ingestion from the raw two-element
/// array and never re-derived downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One row of the match event log, flattened from the StatsBomb schema.
/// Only the columns the extractors read are kept; `pass_*` and
/// `shot_outcome` are populated for the corresponding event types only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Sequence position within the match; imposes the total temporal order.
    pub index: u32,
    pub event_type: String,
    pub team: String,
    pub player: Option<String>,
    pub location: Option<Location>,
    pub pass_end_location: Option<Location>,
    /// `None` means the pass was completed.
    pub pass_outcome: Option<String>,
    /// `None` or "Goal Kick" marks a pass eligible for network analysis;
    /// corners, free kicks and throw-ins carry other values.
    pub pass_type: Option<String>,
    pub pass_recipient: Option<String>,
    pub shot_outcome: Option<String>,
}

impl Event {
    pub fn is_shot(&self) -> bool {
        self.event_type == "Shot"
    }

    pub fn is_substitution(&self) -> bool {
        self.event_type == "Substitution"
    }

    /// True for passes that are open play or a goal kick, the only kinds the
    /// pass extractors consider.
    pub fn is_open_play_pass(&self) -> bool {
        self.event_type == "Pass"
            && match self.pass_type.as_deref() {
                None | Some("Goal Kick") => true,
                Some(_) => false,
            }
    }
}
