//! HTTP utilities shared by every Stats API call

use once_cell::sync::Lazy;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

/// Process-wide HTTP client.
///
/// No timeout is configured here: whatever reqwest's transport defaults are
/// apply unmodified to every call.
pub static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!("mlb-stats/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Client build")
});

/// Headers sent with every request.
pub fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}
