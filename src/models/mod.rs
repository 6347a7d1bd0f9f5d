//! Data models mirroring the IdHub backend response bodies.
//!
//! These are transport-level records: no derived state, no client-side
//! invariants beyond field presence and typing. Authoritative validation
//! lives in the backend.

mod analytics;
mod group;
mod provider;
mod sync;
mod user;

pub use analytics::*;
pub use group::*;
pub use provider::*;
pub use sync::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Minimal `{message}` body several action endpoints answer with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// DRF page envelope, returned by the paginated listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub results: Vec<T>,
    pub count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}
