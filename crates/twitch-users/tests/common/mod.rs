//! Common test utilities for integration tests

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use twitch_users::{HttpClient, HttpResponse, TwitchClient, UserRecord};

pub const BASE: &str = "https://api.twitch.tv/kraken";

/// Scripted transport: replies by (method, path), fails for anything unscripted
#[derive(Clone, Default)]
pub struct ScriptedHttp {
    replies: Arc<Mutex<HashMap<(Method, String), (u16, String)>>>,
    log: Arc<Mutex<Vec<(Method, String)>>>,
}

impl ScriptedHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert((method, format!("{}{}", BASE, path)), (status, body.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn send(&self, method: Method, url: &str, _headers: &HeaderMap) -> Result<HttpResponse> {
        self.log.lock().unwrap().push((method.clone(), url.to_string()));

        let replies = self.replies.lock().unwrap();
        let (status, body) = replies
            .get(&(method, url.to_string()))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("connection timed out: {}", url))?;

        Ok(HttpResponse { status, body })
    }
}

pub async fn client(http: ScriptedHttp) -> TwitchClient<ScriptedHttp> {
    let client = TwitchClient::with_http_client("integration".to_string(), http);
    client.set_access_token("token".to_string()).await;
    client
}

pub fn user_json(id: &str, login: &str) -> String {
    format!(
        r#"{{"_id":"{id}","bio":null,"created_at":"2013-06-03T19:12:02.580593Z","display_name":"{login}","logo":null,"name":"{login}","type":"user","updated_at":"2016-12-13T16:31:55.958584Z"}}"#
    )
}

pub fn me_json(id: &str) -> String {
    format!(
        r#"{{"_id":"{id}","bio":null,"created_at":"2013-06-03T19:12:02Z","display_name":"Me","email":"me@example.com","email_verified":true,"logo":null,"name":"me","partnered":false,"type":"user","updated_at":"2013-06-03T19:12:02Z"}}"#
    )
}

pub fn channel_json(id: &str) -> String {
    format!(
        r#"{{"_id":"{id}","name":"chan{id}","display_name":"Chan{id}","status":null,"game":null,"url":"https://www.twitch.tv/chan{id}","followers":1,"views":1,"partner":false,"mature":false,"broadcaster_type":"","created_at":"2013-06-03T19:12:02Z","updated_at":"2013-06-03T19:12:02Z"}}"#
    )
}

pub fn follow_json(channel_id: &str) -> String {
    format!(
        r#"{{"created_at":"2016-09-16T20:37:39Z","notifications":false,"channel":{}}}"#,
        channel_json(channel_id)
    )
}

pub fn subscription_json(channel_id: &str) -> String {
    format!(
        r#"{{"_id":"sub","created_at":"2017-04-08T19:54:24Z","sub_plan":"1000","sub_plan_name":"Channel Subscription","is_gift":false,"channel":{}}}"#,
        channel_json(channel_id)
    )
}

pub fn parse_user(json: &str) -> UserRecord {
    serde_json::from_str(json).unwrap()
}
