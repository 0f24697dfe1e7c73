//! Request options for follow listing and following

use serde::{Deserialize, Serialize};

/// Page size the API uses when `limit` is not sent
pub const DEFAULT_LIMIT: u32 = 25;

/// Largest page the API accepts
pub const MAX_LIMIT: u32 = 100;

/// Sort key for followed channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowSortBy {
    /// When the follow was created
    CreatedAt,
    /// When the channel last went live
    LastBroadcast,
    /// Channel login name
    Login,
}

impl FollowSortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::LastBroadcast => "last_broadcast",
            Self::Login => "login",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Options for listing a user's followed channels
///
/// Every field is optional. Fields left as `None` are not sent, so the API's
/// own defaults apply (first page, 25 results, newest follows first).
/// `page` is 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub order_by: Option<FollowSortBy>,
    pub direction: Option<SortDirection>,
}

impl FollowsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the 1-based page number
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size (clamped to 1..=100 when sent)
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn order_by(mut self, order_by: FollowSortBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Renders the query string parameters, without the leading `?`
    pub(crate) fn to_query_string(self) -> String {
        let limit = self.limit.map(|l| l.clamp(1, MAX_LIMIT));
        let mut params = Vec::new();

        if let Some(limit) = limit {
            params.push(format!("limit={}", limit));
        }

        if let Some(page) = self.page {
            let offset =
                u64::from(page.saturating_sub(1)) * u64::from(limit.unwrap_or(DEFAULT_LIMIT));
            if offset > 0 {
                params.push(format!("offset={}", offset));
            }
        }

        if let Some(order_by) = self.order_by {
            params.push(format!("sortby={}", order_by.as_str()));
        }

        if let Some(direction) = self.direction {
            params.push(format!("direction={}", direction.as_str()));
        }

        params.join("&")
    }
}

/// Options for following a channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowOptions {
    /// Receive email or push notifications when the channel goes live
    pub notifications: bool,
}
