use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Result, VizError};
use crate::event::Event;

/// Marker size assigned to the player with the most passes.
pub const MAX_MARKER_SIZE: f64 = 1500.0;
/// Line width assigned to the pair with the most passes between them.
pub const MAX_LINE_WIDTH: f64 = 10.0;
/// Pairs must exchange strictly more passes than this to get an edge.
pub const EDGE_PASS_THRESHOLD: u32 = 2;

/// One starting-lineup player: average involvement position and a marker
/// size proportional to the passes they played.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerNode {
    pub player: String,
    pub x: f64,
    pub y: f64,
    /// Passes made; receptions count toward position but not size.
    pub pass_count: u32,
    pub marker_size: f64,
}

/// An unordered player pair and the passes exchanged in either direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassEdge {
    pub player_a: String,
    pub player_b: String,
    pub pass_count: u32,
    pub line_width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PassNetwork {
    pub nodes: Vec<PlayerNode>,
    pub edges: Vec<PassEdge>,
}

/// Build the pass network for `team` from completed open-play passes before
/// the team's first substitution, so the graph reflects the starting lineup
/// only. Node and edge order is first-appearance order in the log, making
/// repeated calls on the same input byte-identical.
pub fn build_pass_network(events: &[Event], team: &str) -> Result<PassNetwork> {
    let team = team.trim();
    if team.is_empty() {
        return Err(VizError::InvalidArgument(
            "team name must not be blank".to_string(),
        ));
    }

    let cutoff = events
        .iter()
        .filter(|e| e.is_substitution() && e.team == team)
        .map(|e| e.index)
        .min()
        .ok_or_else(|| VizError::SubstitutionNotFound {
            team: team.to_string(),
        })?;
    log::debug!("pass network cutoff for {team}: index {cutoff}");

    let mut eligible = Vec::new();
    for event in events.iter().filter(|e| {
        e.is_open_play_pass() && e.team == team && e.pass_outcome.is_none() && e.index < cutoff
    }) {
        eligible.push(EligiblePass::from_event(event)?);
    }
    if eligible.is_empty() {
        return Err(VizError::DegenerateAggregate(format!(
            "no completed passes for {team} before the first substitution"
        )));
    }

    let nodes = aggregate_nodes(&eligible)?;
    let edges = aggregate_edges(&eligible);
    Ok(PassNetwork { nodes, edges })
}

struct EligiblePass {
    passer: String,
    recipient: String,
    start: (f64, f64),
    end: (f64, f64),
}

impl EligiblePass {
    /// A completed pass must name both players and both endpoints.
    fn from_event(event: &Event) -> Result<Self> {
        let missing = |detail: &str| VizError::SchemaMismatch {
            index: event.index,
            detail: detail.to_string(),
        };
        let passer = event.player.clone().ok_or_else(|| missing("pass has no player"))?;
        let recipient = event
            .pass_recipient
            .clone()
            .ok_or_else(|| missing("completed pass has no recipient"))?;
        let start = event.location.ok_or_else(|| missing("pass has no location"))?;
        let end = event
            .pass_end_location
            .ok_or_else(|| missing("pass has no end location"))?;
        Ok(Self {
            passer,
            recipient,
            start: (start.x, start.y),
            end: (end.x, end.y),
        })
    }
}

#[derive(Default)]
struct NodeAcc {
    sum_x: f64,
    sum_y: f64,
    samples: u32,
    pass_count: u32,
}

/// Average each player's position over passes made and received, then scale
/// marker sizes so the busiest passer gets [`MAX_MARKER_SIZE`].
fn aggregate_nodes(eligible: &[EligiblePass]) -> Result<Vec<PlayerNode>> {
    fn touch(order: &mut Vec<String>, accs: &mut HashMap<String, NodeAcc>, name: &str) {
        if !accs.contains_key(name) {
            order.push(name.to_string());
            accs.insert(name.to_string(), NodeAcc::default());
        }
    }

    let mut order: Vec<String> = Vec::new();
    let mut accs: HashMap<String, NodeAcc> = HashMap::new();

    for pass in eligible {
        touch(&mut order, &mut accs, &pass.passer);
        touch(&mut order, &mut accs, &pass.recipient);
        if let Some(acc) = accs.get_mut(&pass.passer) {
            acc.sum_x += pass.start.0;
            acc.sum_y += pass.start.1;
            acc.samples += 1;
            acc.pass_count += 1;
        }
        if let Some(acc) = accs.get_mut(&pass.recipient) {
            acc.sum_x += pass.end.0;
            acc.sum_y += pass.end.1;
            acc.samples += 1;
        }
    }

    let max_count = order
        .iter()
        .filter_map(|name| accs.get(name))
        .map(|acc| acc.pass_count)
        .max()
        .unwrap_or(0);
    if max_count == 0 {
        return Err(VizError::DegenerateAggregate(
            "all pass counts are zero, marker scaling undefined".to_string(),
        ));
    }

    let mut nodes = Vec::with_capacity(order.len());
    for name in order {
        let Some(acc) = accs.remove(&name) else {
            continue;
        };
        // samples >= 1 by construction: membership requires appearing in at
        // least one eligible pass.
        let n = acc.samples as f64;
        nodes.push(PlayerNode {
            player: name,
            x: acc.sum_x / n,
            y: acc.sum_y / n,
            pass_count: acc.pass_count,
            marker_size: acc.pass_count as f64 / max_count as f64 * MAX_MARKER_SIZE,
        });
    }
    Ok(nodes)
}

/// Count passes per unordered pair and keep pairs above the threshold, with
/// line widths scaled so the busiest kept pair gets [`MAX_LINE_WIDTH`].
fn aggregate_edges(eligible: &[EligiblePass]) -> Vec<PassEdge> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut counts: HashMap<(String, String), u32> = HashMap::new();
    for pass in eligible {
        let key = pair_key(&pass.passer, &pass.recipient);
        if !counts.contains_key(&key) {
            order.push(key.clone());
        }
        *counts.entry(key).or_insert(0) += 1;
    }

    let kept: Vec<((String, String), u32)> = order
        .into_iter()
        .filter_map(|key| {
            let count = counts.get(&key).copied()?;
            (count > EDGE_PASS_THRESHOLD).then_some((key, count))
        })
        .collect();
    let Some(max_count) = kept.iter().map(|(_, count)| *count).max() else {
        return Vec::new();
    };

    kept.into_iter()
        .map(|((player_a, player_b), pass_count)| PassEdge {
            player_a,
            player_b,
            pass_count,
            line_width: pass_count as f64 / max_count as f64 * MAX_LINE_WIDTH,
        })
        .collect()
}

/// Canonical unordered pair: names sorted lexicographically.
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
