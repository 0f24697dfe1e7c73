//! Test fixtures
//!
//! Pre-built test data for common testing scenarios.

use crate::types::{FollowRecord, StreamRecord, SubscriptionRecord, UserRecord};

use super::builders::{ChannelRecordBuilder, UserRecordBuilder};

/// The user from the API reference examples
pub fn sample_user() -> UserRecord {
    UserRecordBuilder::new()
        .id("44322889")
        .login("dallas")
        .bio(Some("Just a gamer playing games and chatting. :)"))
        .logo(Some(
            "https://static-cdn.jtvnw.net/jtv_user_pictures/dallas-profile_image-1a2c906ee2c35f12-300x300.png",
        ))
        .user_type("staff")
        .timestamps("2013-06-03T19:12:02.580593Z", "2016-12-13T16:31:55.958584Z")
        .build()
}

/// A live stream on the given channel
pub fn live_stream(channel_id: &str) -> StreamRecord {
    StreamRecord {
        id: 23366709968,
        game: "Overwatch".to_string(),
        viewers: 1500,
        stream_type: "live".to_string(),
        created_at: "2016-12-14T22:49:56Z".to_string(),
        channel: ChannelRecordBuilder::new().id(channel_id).build(),
    }
}

/// An active subscription to the given channel
pub fn subscription_to(channel_id: &str) -> SubscriptionRecord {
    SubscriptionRecord {
        id: format!("sub_{}", channel_id),
        created_at: "2017-04-08T19:54:24Z".to_string(),
        sub_plan: "1000".to_string(),
        sub_plan_name: "Channel Subscription".to_string(),
        is_gift: false,
        channel: ChannelRecordBuilder::new().id(channel_id).build(),
    }
}

/// A follow of the given channel
pub fn follow_of(channel_id: &str) -> FollowRecord {
    FollowRecord {
        created_at: "2016-09-16T20:37:39Z".to_string(),
        notifications: false,
        channel: ChannelRecordBuilder::new().id(channel_id).build(),
    }
}
