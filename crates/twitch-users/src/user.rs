//! User facades
//!
//! A `User` is an immutable snapshot of one fetched user record plus a handle
//! to the client that fetched it. Accessors read the snapshot; everything
//! else goes back to the API. To see newer remote state, fetch a new `User`.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::client::TwitchClient;
use crate::error::ApiError;
use crate::http::{HttpClient, ReqwestClient};
use crate::placeholder::UserPlaceholder;
use crate::query::{FollowOptions, FollowsQuery};
use crate::types::{
    AuthenticatedUserRecord, ChannelRecord, FollowList, FollowRecord, StreamRecord,
    SubscriptionRecord, UserRecord,
};

/// A fetched Twitch user
pub struct User<H: HttpClient = ReqwestClient> {
    client: TwitchClient<H>,
    record: UserRecord,
}

impl<H: HttpClient> User<H> {
    pub fn new(client: TwitchClient<H>, record: UserRecord) -> Self {
        Self { client, record }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Lowercase login name
    pub fn login(&self) -> &str {
        &self.record.name
    }

    pub fn display_name(&self) -> &str {
        &self.record.display_name
    }

    pub fn profile_image_url(&self) -> Option<&str> {
        self.record.logo.as_deref()
    }

    pub fn bio(&self) -> Option<&str> {
        self.record.bio.as_deref()
    }

    /// Account type, e.g. `user` or `staff`
    pub fn user_type(&self) -> &str {
        &self.record.user_type
    }

    pub fn created_at(&self) -> &str {
        &self.record.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.record.updated_at
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn into_record(self) -> UserRecord {
        self.record
    }

    /// Returns an ID-only handle for this user
    pub fn get_placeholder(&self) -> UserPlaceholder<H> {
        UserPlaceholder::new(self.client.clone(), self.record.id.clone())
    }

    /// Fetches the current state of this user as a new facade
    pub async fn refresh(&self) -> Result<User<H>, ApiError> {
        self.client.user(self.id()).await
    }

    pub async fn get_channel(&self) -> Result<ChannelRecord, ApiError> {
        self.client.get_channel(self.id()).await
    }

    /// Gets the user's live stream, `None` while offline
    pub async fn get_stream(&self) -> Result<Option<StreamRecord>, ApiError> {
        self.get_placeholder().get_stream().await
    }

    pub async fn get_subscription_to(
        &self,
        channel_id: &str,
    ) -> Result<SubscriptionRecord, ApiError> {
        self.get_placeholder().get_subscription_to(channel_id).await
    }

    /// Returns whether the user is subscribed to `channel_id`
    pub async fn is_subscribed_to(&self, channel_id: &str) -> Result<bool, ApiError> {
        self.get_placeholder().is_subscribed_to(channel_id).await
    }

    pub async fn get_follows(&self, query: FollowsQuery) -> Result<FollowList, ApiError> {
        self.get_placeholder().get_follows(query).await
    }

    pub async fn get_follow_to(&self, channel_id: &str) -> Result<FollowRecord, ApiError> {
        self.get_placeholder().get_follow_to(channel_id).await
    }

    /// Returns whether the user follows `channel_id`
    pub async fn follows(&self, channel_id: &str) -> Result<bool, ApiError> {
        self.get_placeholder().follows(channel_id).await
    }

    /// Makes the authenticated user follow this user
    pub async fn follow(&self) -> Result<FollowRecord, ApiError> {
        self.get_placeholder().follow().await
    }

    /// Makes the authenticated user unfollow this user
    pub async fn unfollow(&self) -> Result<(), ApiError> {
        self.get_placeholder().unfollow().await
    }
}

impl<H: HttpClient> Clone for User<H> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            record: self.record.clone(),
        }
    }
}

impl<H: HttpClient> fmt::Debug for User<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User").field("record", &self.record).finish()
    }
}

impl<H: HttpClient> fmt::Display for User<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// Only the record is serialized, never the client
impl<H: HttpClient> Serialize for User<H> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

/// The user the access token belongs to
pub struct AuthenticatedUser<H: HttpClient = ReqwestClient> {
    user: User<H>,
    email: Option<String>,
    email_verified: bool,
    partnered: bool,
}

impl<H: HttpClient> AuthenticatedUser<H> {
    pub fn new(client: TwitchClient<H>, record: AuthenticatedUserRecord) -> Self {
        Self {
            user: User::new(client, record.user),
            email: record.email,
            email_verified: record.email_verified,
            partnered: record.partnered,
        }
    }

    pub fn user(&self) -> &User<H> {
        &self.user
    }

    pub fn into_user(self) -> User<H> {
        self.user
    }

    pub fn id(&self) -> &str {
        self.user.id()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn partnered(&self) -> bool {
        self.partnered
    }

    pub async fn follow_channel(
        &self,
        channel_id: &str,
        options: FollowOptions,
    ) -> Result<FollowRecord, ApiError> {
        self.user
            .client
            .follow_channel(self.id(), channel_id, options)
            .await
    }

    pub async fn unfollow_channel(&self, channel_id: &str) -> Result<(), ApiError> {
        self.user.client.unfollow_channel(self.id(), channel_id).await
    }
}

impl<H: HttpClient> fmt::Debug for AuthenticatedUser<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("user", &self.user)
            .field("partnered", &self.partnered)
            .finish_non_exhaustive()
    }
}
