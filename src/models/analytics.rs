//! Aggregate analytics payloads for the dashboard.

use serde::{Deserialize, Serialize};

/// Window for the user trend query. Anything else is rejected by the
/// backend with a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendRange {
    Week,
    Month,
    Year,
}

impl TrendRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendRange::Week => "week",
            TrendRange::Month => "month",
            TrendRange::Year => "year",
        }
    }
}

/// Per-platform cumulative user counts over a date range.
///
/// All five vectors share one length; `dates` carries backend-formatted
/// labels (`%m-%d` for day granularity, `%Y-%m` for months).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTrend {
    pub dates: Vec<String>,
    pub wecom_users: Vec<i64>,
    pub feishu_users: Vec<i64>,
    pub dingtalk_users: Vec<i64>,
    pub ldap_users: Vec<i64>,
}

/// Current per-platform user totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub wecom_users: i64,
    pub feishu_users: i64,
    pub dingtalk_users: i64,
    pub ldap_users: i64,
}
