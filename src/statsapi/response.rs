//! Response shape and the transport outcome contract.
//!
//! Every call against the Stats API resolves to one of three transport
//! outcomes: success, error, or timeout. All three carry a response, and all
//! three are unwrapped identically into a single [`ApiResponse`] handed back
//! to the caller. This intentionally does not distinguish failure from
//! success: a 404 arrives through the same shape as a 200, and callers
//! inspect [`ApiResponse::status`] themselves.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A normalized Stats API response: HTTP status plus decoded JSON body.
///
/// The body is kept as raw JSON with key names preserved exactly as the API
/// sent them; no validation or transformation is applied. Each response is a
/// freshly constructed, independently owned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// The response stood in for a request that timed out before any
    /// response value existed: status 408, null body.
    pub fn timed_out() -> Self {
        Self {
            status: 408,
            body: Value::Null,
        }
    }
}

/// Three-way transport outcome for a single request attempt.
///
/// Each variant carries the response produced for that attempt. Timeouts,
/// which yield no response value from the transport, carry
/// [`ApiResponse::timed_out`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(ApiResponse),
    Error(ApiResponse),
    Timeout(ApiResponse),
}

impl Outcome {
    /// Unwrap the carried response, whichever the outcome.
    ///
    /// Identity on the carried value for all three variants.
    pub fn into_response(self) -> ApiResponse {
        match self {
            Outcome::Success(res) | Outcome::Error(res) | Outcome::Timeout(res) => res,
        }
    }
}
