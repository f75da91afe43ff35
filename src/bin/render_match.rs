use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use matchviz::pitch::PitchSpec;
use matchviz::plot::{plot_pass_arrows, plot_pass_network, plot_shots_two_teams};
use matchviz::statsbomb::parse_events_json;
use matchviz::svg::SvgRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let events_path = args
        .next()
        .ok_or_else(|| anyhow!("usage: render_match <events.json> <team> [out_dir]"))?;
    let team = args
        .next()
        .ok_or_else(|| anyhow!("usage: render_match <events.json> <team> [out_dir]"))?;
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));

    let raw = fs::read_to_string(&events_path)
        .with_context(|| format!("unable to read {events_path}"))?;
    let events = parse_events_json(&raw).context("events file does not parse")?;
    println!("loaded {} events from {events_path}", events.len());

    let pitch = PitchSpec::default();
    fs::create_dir_all(&out_dir).context("unable to create output directory")?;

    let mut renderer = SvgRenderer::new(pitch);
    plot_shots_two_teams(&events, &pitch, &mut renderer)?;
    let path = out_dir.join("shots.svg");
    fs::write(&path, renderer.finish())?;
    println!("wrote {}", path.display());

    let mut renderer = SvgRenderer::new(pitch);
    plot_pass_arrows(&events, Some(&team), None, &mut renderer)?;
    let path = out_dir.join("passes.svg");
    fs::write(&path, renderer.finish())?;
    println!("wrote {}", path.display());

    let mut renderer = SvgRenderer::new(pitch);
    plot_pass_network(&events, &team, &mut renderer)?;
    let path = out_dir.join("pass_network.svg");
    fs::write(&path, renderer.finish())?;
    println!("wrote {}", path.display());

    Ok(())
}
