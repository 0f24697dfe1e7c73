//! Test data builders
//!
//! Provides builder patterns for creating test records with sensible defaults.

use crate::types::{AuthenticatedUserRecord, ChannelRecord, UserRecord};

/// Builder for creating test UserRecord objects
#[derive(Debug, Clone)]
pub struct UserRecordBuilder {
    id: String,
    bio: Option<String>,
    created_at: String,
    name: String,
    display_name: String,
    logo: Option<String>,
    user_type: String,
    updated_at: String,
}

impl Default for UserRecordBuilder {
    fn default() -> Self {
        Self {
            id: "user_456".to_string(),
            bio: Some("Test bio".to_string()),
            created_at: "2016-12-14T20:32:28.894263Z".to_string(),
            name: "testuser".to_string(),
            display_name: "TestUser".to_string(),
            logo: Some("https://example.com/logo.png".to_string()),
            user_type: "user".to_string(),
            updated_at: "2017-01-01T00:00:00.000000Z".to_string(),
        }
    }
}

impl UserRecordBuilder {
    /// Creates a new user builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user ID
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets both login (lowercase) and display name from a single name
    pub fn login(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = name.to_lowercase();
        self.display_name = name;
        self
    }

    /// Sets the bio
    pub fn bio(mut self, bio: Option<&str>) -> Self {
        self.bio = bio.map(str::to_string);
        self
    }

    /// Sets the profile image URL
    pub fn logo(mut self, logo: Option<&str>) -> Self {
        self.logo = logo.map(str::to_string);
        self
    }

    /// Sets the account type
    pub fn user_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = user_type.into();
        self
    }

    /// Sets the raw timestamps
    pub fn timestamps(mut self, created_at: impl Into<String>, updated_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self.updated_at = updated_at.into();
        self
    }

    /// Builds the UserRecord
    pub fn build(self) -> UserRecord {
        UserRecord {
            id: self.id,
            bio: self.bio,
            created_at: self.created_at,
            name: self.name,
            display_name: self.display_name,
            logo: self.logo,
            user_type: self.user_type,
            updated_at: self.updated_at,
        }
    }

    /// Builds the record `GET /user` would return for this user
    pub fn build_authenticated(self) -> AuthenticatedUserRecord {
        AuthenticatedUserRecord {
            user: self.build(),
            email: Some("me@example.com".to_string()),
            email_verified: true,
            partnered: false,
        }
    }
}

/// Builder for creating test ChannelRecord objects
#[derive(Debug, Clone)]
pub struct ChannelRecordBuilder {
    id: String,
    name: String,
    display_name: String,
    status: Option<String>,
    game: Option<String>,
    followers: u64,
    partner: bool,
}

impl Default for ChannelRecordBuilder {
    fn default() -> Self {
        Self {
            id: "channel_123".to_string(),
            name: "testchannel".to_string(),
            display_name: "TestChannel".to_string(),
            status: Some("Test Stream Title".to_string()),
            game: Some("Test Game".to_string()),
            followers: 100,
            partner: false,
        }
    }
}

impl ChannelRecordBuilder {
    /// Creates a new channel builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the channel ID
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets both name (lowercase) and display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = name.to_lowercase();
        self.display_name = name;
        self
    }

    /// Marks the channel as a partner
    pub fn partner(mut self) -> Self {
        self.partner = true;
        self
    }

    /// Builds the ChannelRecord
    pub fn build(self) -> ChannelRecord {
        ChannelRecord {
            url: format!("https://www.twitch.tv/{}", self.name),
            id: self.id,
            name: self.name,
            display_name: self.display_name,
            status: self.status,
            game: self.game,
            broadcaster_language: Some("en".to_string()),
            logo: None,
            followers: self.followers,
            views: self.followers * 10,
            partner: self.partner,
            mature: false,
            broadcaster_type: if self.partner { "partner" } else { "" }.to_string(),
            created_at: "2013-06-03T19:12:02Z".to_string(),
            updated_at: "2017-01-01T00:00:00Z".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_builder_defaults() {
        let user = UserRecordBuilder::new().build();
        assert_eq!(user.id, "user_456");
        assert_eq!(user.name, "testuser");
        assert_eq!(user.user_type, "user");
    }

    #[test]
    fn user_builder_login_sets_both_names() {
        let user = UserRecordBuilder::new().login("CoolStreamer").build();
        assert_eq!(user.name, "coolstreamer");
        assert_eq!(user.display_name, "CoolStreamer");
    }

    #[test]
    fn channel_builder_partner() {
        let channel = ChannelRecordBuilder::new().name("Big").partner().build();
        assert!(channel.partner);
        assert_eq!(channel.broadcaster_type, "partner");
        assert_eq!(channel.url, "https://www.twitch.tv/big");
    }
}
