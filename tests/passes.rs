use std::fs;
use std::path::PathBuf;

use matchviz::VizError;
use matchviz::event::{Event, Location};
use matchviz::passes::extract_passes;
use matchviz::statsbomb::parse_events_json;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn fixture_events() -> Vec<Event> {
    parse_events_json(&read_fixture("events_sample.json")).expect("fixture parses")
}

#[test]
fn requires_exactly_one_of_team_or_player() {
    let events = fixture_events();
    assert!(matches!(
        extract_passes(&events, Some("Barcelona"), Some("Lionel Messi")),
        Err(VizError::InvalidArgument(_))
    ));
    assert!(matches!(
        extract_passes(&events, None, None),
        Err(VizError::InvalidArgument(_))
    ));
    // Blank strings count as not provided.
    assert!(matches!(
        extract_passes(&events, Some("  "), None),
        Err(VizError::InvalidArgument(_))
    ));
}

#[test]
fn team_filter_partitions_on_outcome_nullity() {
    let events = fixture_events();
    let selection = extract_passes(&events, Some("Barcelona"), None).unwrap();

    // Corner at index 2 is excluded by pass_type; the incomplete pass at
    // index 15 is the only "other" pass.
    assert_eq!(selection.completed.len(), 5);
    assert_eq!(selection.other.len(), 1);
    assert!(selection.completed.iter().all(|p| p.is_completed));
    assert!(selection.other.iter().all(|p| !p.is_completed));
    assert_eq!(selection.other[0].player, "Sergio Busquets");
    assert_eq!((selection.other[0].end_x, selection.other[0].end_y), (90.0, 20.0));

    // Input order is preserved within each half.
    assert_eq!(selection.completed[0].start_x, 50.0);
    assert_eq!(selection.completed.last().unwrap().player, "Xavi Hernandez");
}

#[test]
fn player_filter_selects_only_that_player() {
    let events = fixture_events();
    let selection = extract_passes(&events, None, Some("Sergio Busquets")).unwrap();
    assert_eq!(selection.completed.len(), 4);
    assert_eq!(selection.other.len(), 1);
    assert!(
        selection
            .completed
            .iter()
            .chain(selection.other.iter())
            .all(|p| p.player == "Sergio Busquets")
    );
}

#[test]
fn goal_kicks_qualify_but_set_pieces_do_not() {
    let events = fixture_events();
    let selection = extract_passes(&events, Some("Paris Saint-Germain"), None).unwrap();
    assert_eq!(selection.completed.len(), 2);
    assert!(
        selection
            .completed
            .iter()
            .any(|p| p.player == "Gianluigi Donnarumma")
    );

    // No corner from the Barcelona side sneaks through either.
    let barca = extract_passes(&events, None, Some("Lionel Messi")).unwrap();
    assert!(barca.completed.is_empty());
    assert!(barca.other.is_empty());
}

#[test]
fn pass_without_end_location_is_a_schema_mismatch() {
    let mut events = fixture_events();
    if let Some(e) = events.iter_mut().find(|e| e.index == 20) {
        e.pass_end_location = None;
    }
    assert!(matches!(
        extract_passes(&events, Some("Barcelona"), None),
        Err(VizError::SchemaMismatch { index: 20, .. })
    ));
}

#[test]
fn recipient_is_optional_on_unsuccessful_passes() {
    let events = vec![Event {
        index: 31,
        event_type: "Pass".to_string(),
        team: "Barcelona".to_string(),
        player: Some("Sergio Busquets".to_string()),
        location: Some(Location::new(50.0, 40.0)),
        pass_end_location: Some(Location::new(80.0, 10.0)),
        pass_outcome: Some("Out".to_string()),
        pass_type: None,
        pass_recipient: None,
        shot_outcome: None,
    }];
    let selection = extract_passes(&events, Some("Barcelona"), None).unwrap();
    assert_eq!(selection.other.len(), 1);
    assert!(selection.other[0].recipient.is_none());
}
