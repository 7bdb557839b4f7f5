//! HTTP operations against the MLB Stats API.
//!
//! One async function per query, each in a required-arguments-only form and a
//! `_with_fields` form. Every operation resolves to a single [`ApiResponse`]:
//! HTTP error statuses and transport timeouts come back as ordinary response
//! values, not as Rust errors. No retries, no backoff, and no timeout are
//! configured at this layer.

use serde_json::Value;

use crate::core::fields::FieldFilter;
use crate::core::http::{common_headers, CLIENT};
use crate::error::Result;
use crate::statsapi::paths;
use crate::statsapi::response::{ApiResponse, Outcome};
use crate::statsapi::types::{ApiDate, GamePk};


/// Base path for the MLB Stats v1 API.
pub const STATS_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

/// Fetch the live feed for a game.
pub async fn get_game_feed(pk: &GamePk) -> Result<ApiResponse> {
    game_feed_with_base_url(STATS_BASE_URL, pk, None).await
}

/// Fetch the live feed for a game, trimmed to the given fields.
pub async fn get_game_feed_with_fields(pk: &GamePk, fields: &FieldFilter) -> Result<ApiResponse> {
    game_feed_with_base_url(STATS_BASE_URL, pk, Some(fields)).await
}

/// Fetch the linescore for a game.
pub async fn get_linescore(pk: &GamePk) -> Result<ApiResponse> {
    linescore_with_base_url(STATS_BASE_URL, pk, None).await
}

/// Fetch the linescore for a game, trimmed to the given fields.
pub async fn get_linescore_with_fields(pk: &GamePk, fields: &FieldFilter) -> Result<ApiResponse> {
    linescore_with_base_url(STATS_BASE_URL, pk, Some(fields)).await
}

/// Fetch the play-by-play record for a game.
pub async fn get_play_by_play(pk: &GamePk) -> Result<ApiResponse> {
    play_by_play_with_base_url(STATS_BASE_URL, pk, None).await
}

/// Fetch the play-by-play record for a game, trimmed to the given fields.
pub async fn get_play_by_play_with_fields(
    pk: &GamePk,
    fields: &FieldFilter,
) -> Result<ApiResponse> {
    play_by_play_with_base_url(STATS_BASE_URL, pk, Some(fields)).await
}

/// Fetch today's MLB schedule.
pub async fn get_schedule() -> Result<ApiResponse> {
    schedule_with_base_url(STATS_BASE_URL, None, None).await
}

/// Fetch today's MLB schedule, trimmed to the given fields.
pub async fn get_schedule_with_fields(fields: &FieldFilter) -> Result<ApiResponse> {
    schedule_with_base_url(STATS_BASE_URL, None, Some(fields)).await
}

/// Fetch the MLB schedule for a `yyyy-mm-dd` date.
pub async fn get_schedule_for_date(date: &ApiDate) -> Result<ApiResponse> {
    schedule_with_base_url(STATS_BASE_URL, Some(date), None).await
}

/// Fetch the MLB schedule for a date, trimmed to the given fields.
pub async fn get_schedule_for_date_with_fields(
    date: &ApiDate,
    fields: &FieldFilter,
) -> Result<ApiResponse> {
    schedule_with_base_url(STATS_BASE_URL, Some(date), Some(fields)).await
}

/// Fetch the MLB schedule for an inclusive date range.
pub async fn get_schedule_for_range(start: &ApiDate, end: &ApiDate) -> Result<ApiResponse> {
    schedule_range_with_base_url(STATS_BASE_URL, start, end, None).await
}

/// Fetch the MLB schedule for a date range, trimmed to the given fields.
pub async fn get_schedule_for_range_with_fields(
    start: &ApiDate,
    end: &ApiDate,
    fields: &FieldFilter,
) -> Result<ApiResponse> {
    schedule_range_with_base_url(STATS_BASE_URL, start, end, Some(fields)).await
}

pub(crate) async fn game_feed_with_base_url(
    base_url: &str,
    pk: &GamePk,
    fields: Option<&FieldFilter>,
) -> Result<ApiResponse> {
    execute(&format!("{}{}", base_url, paths::game_feed_path(pk, fields))).await
}

pub(crate) async fn linescore_with_base_url(
    base_url: &str,
    pk: &GamePk,
    fields: Option<&FieldFilter>,
) -> Result<ApiResponse> {
    execute(&format!("{}{}", base_url, paths::linescore_path(pk, fields))).await
}

pub(crate) async fn play_by_play_with_base_url(
    base_url: &str,
    pk: &GamePk,
    fields: Option<&FieldFilter>,
) -> Result<ApiResponse> {
    execute(&format!(
        "{}{}",
        base_url,
        paths::play_by_play_path(pk, fields)
    ))
    .await
}

pub(crate) async fn schedule_with_base_url(
    base_url: &str,
    date: Option<&ApiDate>,
    fields: Option<&FieldFilter>,
) -> Result<ApiResponse> {
    execute(&format!("{}{}", base_url, paths::schedule_path(date, fields))).await
}

pub(crate) async fn schedule_range_with_base_url(
    base_url: &str,
    start: &ApiDate,
    end: &ApiDate,
    fields: Option<&FieldFilter>,
) -> Result<ApiResponse> {
    execute(&format!(
        "{}{}",
        base_url,
        paths::schedule_range_path(start, end, fields)
    ))
    .await
}

/// Issue the GET and collapse the transport outcome into one response shape.
///
/// 2xx statuses become `Outcome::Success`, every other status
/// `Outcome::Error`, and a transport timeout `Outcome::Timeout`; all three
/// unwrap identically. Only transport failures that produce no response at
/// all, and bodies that are not JSON, surface as `Err`.
async fn execute(url: &str) -> Result<ApiResponse> {
    let outcome = match CLIENT.get(url).headers(common_headers()).send().await {
        Ok(res) => {
            let status = res.status();
            let bytes = res.bytes().await?;
            let body: Value = serde_json::from_slice(&bytes)?;
            let response = ApiResponse::new(status.as_u16(), body);
            if status.is_success() {
                Outcome::Success(response)
            } else {
                Outcome::Error(response)
            }
        }
        Err(err) if err.is_timeout() => Outcome::Timeout(ApiResponse::timed_out()),
        Err(err) => return Err(err.into()),
    };

    Ok(outcome.into_response())
}
