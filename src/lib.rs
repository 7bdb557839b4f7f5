//! MLB Stats API Client Library
//!
//! A Rust client for the MLB Stats web API, covering live game feeds,
//! linescores, play-by-play data, and schedules.
//!
//! ## Features
//!
//! - **Game Data Retrieval**: Fetch the live feed, linescore, or play-by-play
//!   for any game by its game pk
//! - **Schedules**: Fetch the daily schedule, the schedule for a given date,
//!   or a date range
//! - **Field Filtering**: Trim responses server-side with an ordered list of
//!   field names
//! - **Uniform Responses**: Every call returns a single [`ApiResponse`]
//!   carrying the HTTP status and decoded JSON body; callers inspect the
//!   status themselves
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_stats::{statsapi, GamePk};
//!
//! # async fn example() -> mlb_stats::Result<()> {
//! let game = GamePk::new("529572");
//! let res = statsapi::get_game_feed(&game).await?;
//!
//! if res.status == 200 {
//!     println!("{}", res.body["gameData"]["teams"]["home"]["name"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Response Handling
//!
//! This client does not raise HTTP error statuses as Rust errors. A 404 and a
//! 200 come back through the same [`ApiResponse`] shape; see
//! [`statsapi::response`] for the transport outcome contract.

pub mod core;
pub mod error;
pub mod statsapi;

// Re-export commonly used types
pub use crate::core::fields::FieldFilter;
pub use error::{Result, StatsError};
pub use statsapi::response::{ApiResponse, Outcome};
pub use statsapi::types::{ApiDate, GamePk};
