//! The four figures, expressed against any [`PitchRenderer`]. Each function
//! runs the matching extractor and issues draw calls; all styling constants
//! live here so backends stay color-agnostic.

use std::collections::HashMap;

use crate::error::Result;
use crate::event::{Event, Location};
use crate::network::build_pass_network;
use crate::passes::extract_passes;
use crate::pitch::PitchSpec;
use crate::render::PitchRenderer;
use crate::shots::{ShotRecord, discover_teams, extract_shots, extract_shots_two_teams};

pub const BACKGROUND_COLOR: &str = "#1b1b1b";
pub const TEXT_COLOR: &str = "white";
pub const TEAM1_COLOR: &str = "#f99f84";
pub const TEAM2_COLOR: &str = "#84def9";

const SHOT_MARKER_RADIUS: f64 = 2.0;
const COMPLETED_PASS_COLOR: &str = "green";
const OTHER_PASS_COLOR: &str = "red";

/// Shots by one team toward a single goal.
pub fn plot_shots(events: &[Event], team: &str, renderer: &mut dyn PitchRenderer) -> Result<()> {
    let shots = extract_shots(events, team)?;
    draw_shots(&shots, TEAM1_COLOR, renderer);
    Ok(())
}

/// Both teams' shots on a shared pitch, the second team mirrored toward the
/// opposite end and drawn in the away palette.
pub fn plot_shots_two_teams(
    events: &[Event],
    pitch: &PitchSpec,
    renderer: &mut dyn PitchRenderer,
) -> Result<()> {
    let [team1, _] = discover_teams(events)?;
    let team1 = team1.to_string();
    let shots = extract_shots_two_teams(events, pitch)?;
    let (home, away): (Vec<ShotRecord>, Vec<ShotRecord>) =
        shots.into_iter().partition(|s| s.team == team1);
    draw_shots(&home, TEAM1_COLOR, renderer);
    draw_shots(&away, TEAM2_COLOR, renderer);
    Ok(())
}

fn draw_shots(shots: &[ShotRecord], color: &str, renderer: &mut dyn PitchRenderer) {
    for shot in shots {
        let center = Location::new(shot.x, shot.y);
        if shot.is_goal {
            renderer.circle(center, SHOT_MARKER_RADIUS, color, 1.0);
            renderer.text(
                Location::new(shot.x + 1.0, shot.y - 2.0),
                last_name(&shot.player),
                8.0,
                TEXT_COLOR,
            );
        } else {
            renderer.circle(center, SHOT_MARKER_RADIUS, color, 0.5);
        }
    }
}

/// Pass arrows for a team or a player: completed passes green, the rest
/// red, plus a faint scatter of every start point.
pub fn plot_pass_arrows(
    events: &[Event],
    team: Option<&str>,
    player: Option<&str>,
    renderer: &mut dyn PitchRenderer,
) -> Result<()> {
    let selection = extract_passes(events, team, player)?;
    let mut starts = Vec::new();
    for (records, color) in [
        (&selection.completed, COMPLETED_PASS_COLOR),
        (&selection.other, OTHER_PASS_COLOR),
    ] {
        for pass in records {
            renderer.arrow(
                Location::new(pass.start_x, pass.start_y),
                Location::new(pass.end_x, pass.end_y),
                color,
                2.0,
                4.0,
                4.0,
            );
            starts.push(Location::new(pass.start_x, pass.start_y));
        }
    }
    let sizes = vec![100.0; starts.len()];
    renderer.scatter(&starts, &sizes, TEXT_COLOR, 0.2);
    Ok(())
}

/// Pass network for the starting lineup: pair lines underneath, player
/// markers on top, names centered on each marker.
pub fn plot_pass_network(
    events: &[Event],
    team: &str,
    renderer: &mut dyn PitchRenderer,
) -> Result<()> {
    let net = build_pass_network(events, team)?;

    let positions: HashMap<&str, Location> = net
        .nodes
        .iter()
        .map(|n| (n.player.as_str(), Location::new(n.x, n.y)))
        .collect();
    for edge in &net.edges {
        // Both endpoints have nodes by construction.
        let (Some(a), Some(b)) = (
            positions.get(edge.player_a.as_str()),
            positions.get(edge.player_b.as_str()),
        ) else {
            continue;
        };
        renderer.line(*a, *b, edge.line_width, TEAM1_COLOR, 1.0);
    }

    let points: Vec<Location> = net.nodes.iter().map(|n| Location::new(n.x, n.y)).collect();
    let sizes: Vec<f64> = net.nodes.iter().map(|n| n.marker_size).collect();
    renderer.scatter(&points, &sizes, TEAM1_COLOR, 1.0);
    for node in &net.nodes {
        renderer.annotate(Location::new(node.x, node.y), &node.player, 12.0, TEXT_COLOR);
    }
    Ok(())
}

fn last_name(full: &str) -> &str {
    full.split_whitespace().last().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_name_takes_final_token() {
        assert_eq!(last_name("Lionel Messi"), "Messi");
        assert_eq!(last_name("Neymar"), "Neymar");
        assert_eq!(last_name(""), "");
    }
}
