//! REST API modules, one per backend resource group.
//!
//! Each module is a flat set of typed functions following one contract:
//! build the fixed path, pick the verb matching the operation's semantics
//! (GET for reads, POST for creation and action endpoints, PATCH for partial
//! update, DELETE for removal), delegate to the request wrapper, and return
//! the typed future. No local transformation beyond the one form adapter in
//! [`sync`], no side effects beyond the network call.

pub mod sync;
pub mod users;

pub use sync::{
    convert_form_to_sync_config, AnalyticsApi, LdapConfigApi, LogDetailQuery, SyncConfigApi,
    SyncLogApi, SyncLogQuery,
};
pub use users::UserApi;

use serde::Serialize;

/// Page selection for paginated listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
