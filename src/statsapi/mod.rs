//! MLB Stats API integration: request paths, transport, and response types.

pub mod http;
pub mod paths;
pub mod response;
pub mod types;

pub use http::{
    get_game_feed, get_game_feed_with_fields, get_linescore, get_linescore_with_fields,
    get_play_by_play, get_play_by_play_with_fields, get_schedule, get_schedule_for_date,
    get_schedule_for_date_with_fields, get_schedule_for_range,
    get_schedule_for_range_with_fields, get_schedule_with_fields, STATS_BASE_URL,
};
pub use response::{ApiResponse, Outcome};
pub use types::{ApiDate, GamePk};
