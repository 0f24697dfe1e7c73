use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parses an API timestamp (RFC 3339) without touching the stored string
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// A user as returned by `GET /users/{id}`
///
/// Timestamps are kept exactly as the API sent them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub created_at: String,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(rename = "type")]
    pub user_type: String,
    pub updated_at: String,
}

impl UserRecord {
    /// Creation time, if it parses as RFC 3339
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Last update time, if it parses as RFC 3339
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

/// The user behind the access token, from `GET /user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUserRecord {
    #[serde(flatten)]
    pub user: UserRecord,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub partnered: bool,
}

/// A channel as returned by `GET /channels/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub broadcaster_language: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub partner: bool,
    #[serde(default)]
    pub mature: bool,
    #[serde(default)]
    pub broadcaster_type: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A live stream, the `stream` field of `GET /streams/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRecord {
    #[serde(rename = "_id")]
    pub id: u64,
    #[serde(default)]
    pub game: String,
    pub viewers: u64,
    #[serde(default)]
    pub stream_type: String,
    pub created_at: String,
    pub channel: ChannelRecord,
}

impl StreamRecord {
    /// Returns how long the stream has been live, if the start time parses
    pub fn uptime(&self) -> Option<chrono::Duration> {
        parse_timestamp(&self.created_at).map(|started| Utc::now().signed_duration_since(started))
    }
}

/// Stream lookup response; `stream` is null while the channel is offline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamResponse {
    #[serde(default)]
    pub stream: Option<StreamRecord>,
}

/// A user's subscription to a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: String,
    pub sub_plan: String,
    #[serde(default)]
    pub sub_plan_name: String,
    #[serde(default)]
    pub is_gift: bool,
    pub channel: ChannelRecord,
}

/// A follow relationship between a user and a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowRecord {
    pub created_at: String,
    #[serde(default)]
    pub notifications: bool,
    pub channel: ChannelRecord,
}

/// One page of followed channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowList {
    #[serde(rename = "_total")]
    pub total: u64,
    pub follows: Vec<FollowRecord>,
}

/// Response from a login lookup (`GET /users?login=...`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(rename = "_total")]
    pub total: u64,
    pub users: Vec<UserRecord>,
}
