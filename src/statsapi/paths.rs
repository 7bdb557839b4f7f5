//! Request path construction for every Stats API operation.
//!
//! Paths are built with plain string formatting, never a URL encoder: game
//! pks, dates, and field names are inserted verbatim, and field lists keep
//! their literal commas. The exact strings produced here are the crate's
//! request contract and are asserted as such in `tests/paths_test.rs`.

use crate::core::fields::FieldFilter;
use crate::statsapi::types::{ApiDate, GamePk};

/// Fixed sport selector for schedule queries. 1 is MLB.
pub const SPORT_ID_MLB: u8 = 1;

/// `/game/{pk}/feed/live[?fields=...]`
pub fn game_feed_path(pk: &GamePk, fields: Option<&FieldFilter>) -> String {
    game_path(pk, "feed/live", fields)
}

/// `/game/{pk}/linescore[?fields=...]`
pub fn linescore_path(pk: &GamePk, fields: Option<&FieldFilter>) -> String {
    game_path(pk, "linescore", fields)
}

/// `/game/{pk}/playByPlay[?fields=...]`
pub fn play_by_play_path(pk: &GamePk, fields: Option<&FieldFilter>) -> String {
    game_path(pk, "playByPlay", fields)
}

/// `/schedule?sportId=1[&date=D][&fields=...]`
pub fn schedule_path(date: Option<&ApiDate>, fields: Option<&FieldFilter>) -> String {
    let mut path = format!("/schedule?sportId={}", SPORT_ID_MLB);
    if let Some(date) = date {
        path.push_str(&format!("&date={}", date));
    }
    push_fields(&mut path, '&', fields);
    path
}

/// `/schedule?sportId=1&startDate=S&endDate=E[&fields=...]`
pub fn schedule_range_path(
    start: &ApiDate,
    end: &ApiDate,
    fields: Option<&FieldFilter>,
) -> String {
    let mut path = format!(
        "/schedule?sportId={}&startDate={}&endDate={}",
        SPORT_ID_MLB, start, end
    );
    push_fields(&mut path, '&', fields);
    path
}

fn game_path(pk: &GamePk, resource: &str, fields: Option<&FieldFilter>) -> String {
    let mut path = format!("/game/{}/{}", pk, resource);
    push_fields(&mut path, '?', fields);
    path
}

/// Append `fields=...` behind `sep` when a filter was given.
///
/// An empty filter still appends an explicit `fields=`: the value is the
/// join of zero elements, not an omitted parameter.
fn push_fields(path: &mut String, sep: char, fields: Option<&FieldFilter>) {
    if let Some(fields) = fields {
        path.push(sep);
        path.push_str(&format!("fields={}", fields));
    }
}
