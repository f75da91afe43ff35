//! Decoding of raw StatsBomb `events/<match_id>.json` payloads into the flat
//! [`Event`](crate::event::Event) rows the extractors consume. Callers that
//! already hold events from another source can skip this module.

use serde_json::Value;

use crate::error::{Result, VizError};
use crate::event::{Event, Location};

/// Parse a raw StatsBomb events array. Rows are returned in file order.
pub fn parse_events_json(raw: &str) -> Result<Vec<Event>> {
    let v: Value = serde_json::from_str(raw.trim()).map_err(|e| VizError::SchemaMismatch {
        index: 0,
        detail: format!("invalid events json: {e}"),
    })?;
    let arr = v.as_array().ok_or_else(|| VizError::SchemaMismatch {
        index: 0,
        detail: "events payload is not an array".to_string(),
    })?;

    let mut out = Vec::with_capacity(arr.len());
    for (pos, item) in arr.iter().enumerate() {
        out.push(parse_event(item, pos)?);
    }
    log::debug!("parsed {} events", out.len());
    Ok(out)
}

fn parse_event(v: &Value, pos: usize) -> Result<Event> {
    let index = v
        .get("index")
        .and_then(|x| x.as_u64())
        .ok_or_else(|| VizError::SchemaMismatch {
            index: pos as u32,
            detail: "event has no index".to_string(),
        })? as u32;

    let event_type = name_of(v.get("type")).ok_or_else(|| VizError::SchemaMismatch {
        index,
        detail: "event has no type name".to_string(),
    })?;
    let team = name_of(v.get("team")).ok_or_else(|| VizError::SchemaMismatch {
        index,
        detail: "event has no team name".to_string(),
    })?;
    let player = name_of(v.get("player"));

    let location = parse_location(v.get("location"), index, "location")?;

    let pass = v.get("pass");
    let pass_end_location = parse_location(
        pass.and_then(|p| p.get("end_location")),
        index,
        "pass.end_location",
    )?;
    let pass_outcome = name_of(pass.and_then(|p| p.get("outcome")));
    let pass_type = name_of(pass.and_then(|p| p.get("type")));
    let pass_recipient = name_of(pass.and_then(|p| p.get("recipient")));

    let shot_outcome = name_of(v.get("shot").and_then(|s| s.get("outcome")));

    Ok(Event {
        index,
        event_type,
        team,
        player,
        location,
        pass_end_location,
        pass_outcome,
        pass_type,
        pass_recipient,
        shot_outcome,
    })
}

fn name_of(v: Option<&Value>) -> Option<String> {
    v.and_then(|x| x.get("name"))
        .and_then(|x| x.as_str())
        .map(|s| s.to_string())
}

/// A location, when present, must decompose into exactly two numbers.
fn parse_location(v: Option<&Value>, index: u32, field: &str) -> Result<Option<Location>> {
    let Some(v) = v else {
        return Ok(None);
    };
    if v.is_null() {
        return Ok(None);
    }
    let arr = v.as_array().ok_or_else(|| VizError::SchemaMismatch {
        index,
        detail: format!("{field} is not an array"),
    })?;
    // StatsBomb shot end locations carry a third z component; plain
    // locations never should.
    if arr.len() != 2 {
        return Err(VizError::SchemaMismatch {
            index,
            detail: format!("{field} has {} components, expected 2", arr.len()),
        });
    }
    let x = arr[0].as_f64().ok_or_else(|| VizError::SchemaMismatch {
        index,
        detail: format!("{field}[0] is not a number"),
    })?;
    let y = arr[1].as_f64().ok_or_else(|| VizError::SchemaMismatch {
        index,
        detail: format!("{field}[1] is not a number"),
    })?;
    Ok(Some(Location::new(x, y)))
}
