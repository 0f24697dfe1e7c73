//! Typed user facade over the Twitch REST API
//!
//! Start from a [`TwitchClient`], then work with [`User`] facades:
//!
//! ```no_run
//! # async fn run() -> Result<(), twitch_users::ApiError> {
//! let client = twitch_users::TwitchClient::new("my_client_id".to_string());
//! client.set_access_token("my_token".to_string()).await;
//!
//! let user = client.user("44322889").await?;
//! if !user.follows("12826").await? {
//!     user.get_placeholder().get_stream().await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod placeholder;
pub mod query;
pub mod types;
pub mod user;

#[cfg(test)]
mod testutil;

pub use client::TwitchClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use placeholder::UserPlaceholder;
pub use query::{FollowOptions, FollowSortBy, FollowsQuery, SortDirection};
pub use types::*;
pub use user::{AuthenticatedUser, User};
