/// Errors returned by the Twitch API client and the facades built on it
///
/// Classification helpers such as `User::is_subscribed_to` match on the
/// variant tag; everything they don't name is handed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("No access token set")]
    MissingToken,

    #[error("Channel {channel_id} does not have a subscription program")]
    NoSubscriptionProgram { channel_id: String },

    #[error("User {user_id} is not subscribed to channel {channel_id}")]
    NotSubscribed { user_id: String, channel_id: String },

    #[error("User {user_id} does not follow channel {channel_id}")]
    NotFollowing { user_id: String, channel_id: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// Returns true if the error means "no active subscription"
    pub fn is_not_subscribed(&self) -> bool {
        matches!(
            self,
            Self::NoSubscriptionProgram { .. } | Self::NotSubscribed { .. }
        )
    }

    /// Returns true if the error means "no follow relationship"
    pub fn is_not_following(&self) -> bool {
        matches!(self, Self::NotFollowing { .. })
    }
}
