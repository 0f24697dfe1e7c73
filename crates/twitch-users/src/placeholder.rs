//! Identifier-only user handle
//!
//! A `UserPlaceholder` is what you get when all you know is a user ID. It
//! supports every operation that only needs the ID, so callers can skip the
//! user fetch entirely. `User` routes its own ID-scoped operations through
//! here.

use crate::client::TwitchClient;
use crate::error::ApiError;
use crate::http::{HttpClient, ReqwestClient};
use crate::query::{FollowOptions, FollowsQuery};
use crate::types::{ChannelRecord, FollowList, FollowRecord, StreamRecord, SubscriptionRecord};
use crate::user::User;

/// A user known only by ID
pub struct UserPlaceholder<H: HttpClient = ReqwestClient> {
    client: TwitchClient<H>,
    id: String,
}

impl<H: HttpClient> UserPlaceholder<H> {
    pub fn new(client: TwitchClient<H>, id: impl Into<String>) -> Self {
        Self {
            client,
            id: id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetches the full user record
    pub async fn fetch(&self) -> Result<User<H>, ApiError> {
        self.client.user(&self.id).await
    }

    pub async fn get_channel(&self) -> Result<ChannelRecord, ApiError> {
        self.client.get_channel(&self.id).await
    }

    /// Gets the user's live stream, `None` while offline
    pub async fn get_stream(&self) -> Result<Option<StreamRecord>, ApiError> {
        self.client.get_stream(&self.id).await
    }

    pub async fn get_subscription_to(
        &self,
        channel_id: &str,
    ) -> Result<SubscriptionRecord, ApiError> {
        self.client.get_subscription_data(&self.id, channel_id).await
    }

    /// Returns whether the user is subscribed to `channel_id`
    ///
    /// A channel without a subscription program counts as "not subscribed".
    /// Any other failure is returned as-is.
    pub async fn is_subscribed_to(&self, channel_id: &str) -> Result<bool, ApiError> {
        match self.get_subscription_to(channel_id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_subscribed() => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn get_follows(&self, query: FollowsQuery) -> Result<FollowList, ApiError> {
        self.client.get_followed_channels(&self.id, query).await
    }

    pub async fn get_follow_to(&self, channel_id: &str) -> Result<FollowRecord, ApiError> {
        self.client.get_followed_channel(&self.id, channel_id).await
    }

    /// Returns whether the user follows `channel_id`
    pub async fn follows(&self, channel_id: &str) -> Result<bool, ApiError> {
        match self.get_follow_to(channel_id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_following() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Makes the authenticated user follow this user's channel
    pub async fn follow(&self) -> Result<FollowRecord, ApiError> {
        let me = self.client.me().await?;
        me.follow_channel(&self.id, FollowOptions::default()).await
    }

    /// Makes the authenticated user unfollow this user's channel
    pub async fn unfollow(&self) -> Result<(), ApiError> {
        let me = self.client.me().await?;
        me.unfollow_channel(&self.id).await
    }
}

impl<H: HttpClient> Clone for UserPlaceholder<H> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            id: self.id.clone(),
        }
    }
}

impl<H: HttpClient> std::fmt::Debug for UserPlaceholder<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPlaceholder").field("id", &self.id).finish()
    }
}
