use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use matchviz::event::{Event, Location};
use matchviz::network::build_pass_network;
use matchviz::shots::extract_shots;
use matchviz::statsbomb::parse_events_json;

const PLAYERS: &[&str] = &[
    "Marc-Andre ter Stegen",
    "Jordi Alba",
    "Gerard Pique",
    "Sergio Busquets",
    "Xavi Hernandez",
    "Andres Iniesta",
    "Lionel Messi",
    "Pedro Rodriguez",
    "David Villa",
    "Dani Alves",
    "Carles Puyol",
];

/// A match-sized log: a block of completed passes around the lineup, a
/// substitution near the end, then a handful of shots.
fn sample_events(pass_count: usize) -> Vec<Event> {
    let mut events = Vec::with_capacity(pass_count + 8);
    for i in 0..pass_count {
        let passer = PLAYERS[i % PLAYERS.len()];
        let recipient = PLAYERS[(i + 3) % PLAYERS.len()];
        events.push(Event {
            index: i as u32 + 1,
            event_type: "Pass".to_string(),
            team: "Barcelona".to_string(),
            player: Some(passer.to_string()),
            location: Some(Location::new(20.0 + (i % 80) as f64, 10.0 + (i % 60) as f64)),
            pass_end_location: Some(Location::new(
                25.0 + (i % 80) as f64,
                12.0 + (i % 60) as f64,
            )),
            pass_outcome: (i % 7 == 0).then(|| "Incomplete".to_string()),
            pass_type: None,
            pass_recipient: Some(recipient.to_string()),
            shot_outcome: None,
        });
    }
    events.push(Event {
        index: pass_count as u32 + 1,
        event_type: "Substitution".to_string(),
        team: "Barcelona".to_string(),
        player: Some(PLAYERS[0].to_string()),
        location: None,
        pass_end_location: None,
        pass_outcome: None,
        pass_type: None,
        pass_recipient: None,
        shot_outcome: None,
    });
    for i in 0..5u32 {
        events.push(Event {
            index: pass_count as u32 + 2 + i,
            event_type: "Shot".to_string(),
            team: "Barcelona".to_string(),
            player: Some(PLAYERS[(i as usize) % PLAYERS.len()].to_string()),
            location: Some(Location::new(100.0 + i as f64, 30.0 + i as f64)),
            pass_end_location: None,
            pass_outcome: None,
            pass_type: None,
            pass_recipient: None,
            shot_outcome: (i == 0).then(|| "Goal".to_string()),
        });
    }
    events
}

fn sample_events_json(pass_count: usize) -> String {
    let mut rows = Vec::with_capacity(pass_count);
    for event in sample_events(pass_count) {
        let loc = event
            .location
            .map(|l| format!("[{}, {}]", l.x, l.y))
            .unwrap_or_else(|| "null".to_string());
        rows.push(format!(
            r#"{{"index": {}, "type": {{"name": "{}"}}, "team": {{"name": "{}"}}, "player": {{"name": "{}"}}, "location": {}}}"#,
            event.index,
            event.event_type,
            event.team,
            event.player.as_deref().unwrap_or(""),
            loc
        ));
    }
    format!("[{}]", rows.join(","))
}

fn bench_parse_events(c: &mut Criterion) {
    let raw = sample_events_json(2000);
    c.bench_function("parse_events_2000", |b| {
        b.iter(|| {
            let events = parse_events_json(black_box(&raw)).unwrap();
            black_box(events.len());
        })
    });
}

fn bench_pass_network(c: &mut Criterion) {
    let events = sample_events(2000);
    c.bench_function("pass_network_2000", |b| {
        b.iter(|| {
            let net = build_pass_network(black_box(&events), "Barcelona").unwrap();
            black_box(net.nodes.len());
        })
    });
}

fn bench_extract_shots(c: &mut Criterion) {
    let events = sample_events(2000);
    c.bench_function("extract_shots_2000", |b| {
        b.iter(|| {
            let shots = extract_shots(black_box(&events), "Barcelona").unwrap();
            black_box(shots.len());
        })
    });
}

criterion_group!(
    benches,
    bench_parse_events,
    bench_pass_network,
    bench_extract_shots
);
criterion_main!(benches);
