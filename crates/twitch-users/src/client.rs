use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpClient, HttpResponse, ReqwestClient};
use crate::placeholder::UserPlaceholder;
use crate::query::{FollowOptions, FollowsQuery};
use crate::types::*;
use crate::user::{AuthenticatedUser, User};

const KRAKEN_BASE_URL: &str = "https://api.twitch.tv/kraken";
const KRAKEN_ACCEPT: &str = "application/vnd.twitchtv.v5+json";

/// Whether an endpoint can be called without a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Optional,
    Required,
}

/// Encodes an identifier for use as a path segment
fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Twitch API client
///
/// Generic over the HTTP client implementation for testability. Clones share
/// the transport and the token.
pub struct TwitchClient<H: HttpClient = ReqwestClient> {
    http: Arc<H>,
    base_url: String,
    client_id: String,
    access_token: Arc<RwLock<Option<String>>>,
}

impl TwitchClient<ReqwestClient> {
    /// Creates a new Twitch API client with the default HTTP implementation
    pub fn new(client_id: String) -> Self {
        Self::with_http_client(client_id, ReqwestClient::new())
    }

    /// Creates a client from configuration, applying its timeout and token
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        if config.client_id.is_empty() {
            anyhow::bail!("Client ID not configured");
        }

        let http = ReqwestClient::with_timeout(config.timeout())?;
        let client = Self {
            http: Arc::new(http),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            access_token: Arc::new(RwLock::new(config.access_token.clone())),
        };
        Ok(client)
    }
}

impl<H: HttpClient> TwitchClient<H> {
    /// Creates a new Twitch API client with a custom HTTP implementation
    pub fn with_http_client(client_id: String, http: H) -> Self {
        Self {
            http: Arc::new(http),
            base_url: KRAKEN_BASE_URL.to_string(),
            client_id,
            access_token: Arc::new(RwLock::new(None)),
        }
    }

    /// Points the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the access token for API requests
    pub async fn set_access_token(&self, token: String) {
        let mut guard = self.access_token.write().await;
        *guard = Some(token);
    }

    /// Gets the current access token
    pub async fn get_access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }

    /// Clears authentication state
    pub async fn clear_auth(&self) {
        *self.access_token.write().await = None;
    }

    /// Builds the headers for a request
    async fn build_headers(&self, auth: Auth) -> Result<HeaderMap, ApiError> {
        let token = self.access_token.read().await.clone();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(KRAKEN_ACCEPT));
        headers.insert(
            "Client-ID",
            HeaderValue::from_str(&self.client_id).context("Invalid client ID")?,
        );

        match token {
            Some(token) => {
                let value = HeaderValue::from_str(&format!("OAuth {}", token))
                    .context("Invalid access token")?;
                headers.insert(AUTHORIZATION, value);
            }
            None if auth == Auth::Required => return Err(ApiError::MissingToken),
            None => {}
        }

        Ok(headers)
    }

    /// Makes a request against the API root
    ///
    /// Returns `ApiError::Unauthorized` for 401 responses; every other status
    /// is left for the caller to interpret.
    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        auth: Auth,
    ) -> Result<HttpResponse, ApiError> {
        let headers = self.build_headers(auth).await?;
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("{} {}", method, url);
        let response = self.http.send(method, &url, &headers).await?;

        if response.is_unauthorized() {
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }

    /// Decodes a response with the default status mapping
    fn decode<T: DeserializeOwned>(endpoint: &str, response: HttpResponse) -> Result<T, ApiError> {
        Self::check_status(endpoint, &response)?;
        Ok(response.json()?)
    }

    fn check_status(endpoint: &str, response: &HttpResponse) -> Result<(), ApiError> {
        if response.is_not_found() {
            return Err(ApiError::NotFound(endpoint.to_string()));
        }

        if !response.is_success() {
            tracing::warn!("API error {} on {}: {}", response.status, endpoint, response.body);
            return Err(ApiError::Status {
                status: response.status,
                message: response.error_message(),
            });
        }

        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, auth: Auth) -> Result<T, ApiError> {
        let response = self.send(Method::GET, endpoint, auth).await?;
        Self::decode(endpoint, response)
    }
}

impl<H: HttpClient> Clone for TwitchClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            client_id: self.client_id.clone(),
            access_token: self.access_token.clone(),
        }
    }
}

// User-related methods
impl<H: HttpClient> TwitchClient<H> {
    /// Gets a user by ID
    pub async fn get_user(&self, user_id: &str) -> Result<UserRecord, ApiError> {
        let endpoint = format!("/users/{}", segment(user_id));
        self.get(&endpoint, Auth::Optional).await
    }

    /// Looks up users by login name
    ///
    /// Unknown logins are simply missing from the result.
    pub async fn get_users_by_login(&self, logins: &[&str]) -> Result<Vec<UserRecord>, ApiError> {
        if logins.is_empty() {
            return Ok(Vec::new());
        }

        let joined = logins
            .iter()
            .map(|login| urlencoding::encode(login))
            .collect::<Vec<_>>()
            .join(",");
        let endpoint = format!("/users?login={}", joined);
        let response: UsersResponse = self.get(&endpoint, Auth::Optional).await?;
        Ok(response.users)
    }

    /// Gets the user the access token belongs to
    ///
    /// Returns `ApiError::MissingToken` if no token is set.
    pub async fn get_me(&self) -> Result<AuthenticatedUserRecord, ApiError> {
        self.get("/user", Auth::Required).await
    }
}

// Channel and stream methods
impl<H: HttpClient> TwitchClient<H> {
    /// Gets the channel owned by a user
    pub async fn get_channel(&self, channel_id: &str) -> Result<ChannelRecord, ApiError> {
        let endpoint = format!("/channels/{}", segment(channel_id));
        self.get(&endpoint, Auth::Optional).await
    }

    /// Gets the live stream for a channel
    ///
    /// Returns `Ok(None)` while the channel is offline.
    pub async fn get_stream(&self, channel_id: &str) -> Result<Option<StreamRecord>, ApiError> {
        let endpoint = format!("/streams/{}", segment(channel_id));
        let response: StreamResponse = self.get(&endpoint, Auth::Optional).await?;
        Ok(response.stream)
    }
}

// Subscription methods
impl<H: HttpClient> TwitchClient<H> {
    /// Gets a user's subscription to a channel
    ///
    /// Returns `ApiError::NoSubscriptionProgram` (422) if the channel can't be
    /// subscribed to, and `ApiError::NotSubscribed` (404) if the user isn't.
    pub async fn get_subscription_data(
        &self,
        user_id: &str,
        channel_id: &str,
    ) -> Result<SubscriptionRecord, ApiError> {
        let endpoint = format!(
            "/users/{}/subscriptions/{}",
            segment(user_id),
            segment(channel_id)
        );
        let response = self.send(Method::GET, &endpoint, Auth::Required).await?;

        match response.status {
            422 => Err(ApiError::NoSubscriptionProgram {
                channel_id: channel_id.to_string(),
            }),
            404 => Err(ApiError::NotSubscribed {
                user_id: user_id.to_string(),
                channel_id: channel_id.to_string(),
            }),
            _ => Self::decode(&endpoint, response),
        }
    }
}

// Follow methods
impl<H: HttpClient> TwitchClient<H> {
    /// Gets one page of the channels a user follows
    pub async fn get_followed_channels(
        &self,
        user_id: &str,
        query: FollowsQuery,
    ) -> Result<FollowList, ApiError> {
        let params = query.to_query_string();
        let endpoint = if params.is_empty() {
            format!("/users/{}/follows/channels", segment(user_id))
        } else {
            format!("/users/{}/follows/channels?{}", segment(user_id), params)
        };
        self.get(&endpoint, Auth::Optional).await
    }

    /// Gets the follow relationship between a user and a channel
    ///
    /// Returns `ApiError::NotFollowing` (404) if there is none.
    pub async fn get_followed_channel(
        &self,
        user_id: &str,
        channel_id: &str,
    ) -> Result<FollowRecord, ApiError> {
        let endpoint = format!(
            "/users/{}/follows/channels/{}",
            segment(user_id),
            segment(channel_id)
        );
        let response = self.send(Method::GET, &endpoint, Auth::Optional).await?;

        if response.is_not_found() {
            return Err(ApiError::NotFollowing {
                user_id: user_id.to_string(),
                channel_id: channel_id.to_string(),
            });
        }

        Self::decode(&endpoint, response)
    }

    /// Makes `user_id` follow `channel_id`
    ///
    /// Only works for the user the token belongs to.
    pub async fn follow_channel(
        &self,
        user_id: &str,
        channel_id: &str,
        options: FollowOptions,
    ) -> Result<FollowRecord, ApiError> {
        let mut endpoint = format!(
            "/users/{}/follows/channels/{}",
            segment(user_id),
            segment(channel_id)
        );
        if options.notifications {
            endpoint.push_str("?notifications=true");
        }

        let response = self.send(Method::PUT, &endpoint, Auth::Required).await?;
        Self::decode(&endpoint, response)
    }

    /// Makes `user_id` stop following `channel_id`
    ///
    /// Returns `ApiError::NotFollowing` (404) if there was nothing to remove.
    pub async fn unfollow_channel(&self, user_id: &str, channel_id: &str) -> Result<(), ApiError> {
        let endpoint = format!(
            "/users/{}/follows/channels/{}",
            segment(user_id),
            segment(channel_id)
        );
        let response = self.send(Method::DELETE, &endpoint, Auth::Required).await?;

        if response.is_not_found() {
            return Err(ApiError::NotFollowing {
                user_id: user_id.to_string(),
                channel_id: channel_id.to_string(),
            });
        }

        Self::check_status(&endpoint, &response)
    }
}

// Facade constructors
impl<H: HttpClient> TwitchClient<H> {
    /// Fetches a user and wraps it in a facade
    pub async fn user(&self, user_id: &str) -> Result<User<H>, ApiError> {
        let record = self.get_user(user_id).await?;
        Ok(User::new(self.clone(), record))
    }

    /// Fetches a user by login name, if one exists
    pub async fn user_by_login(&self, login: &str) -> Result<Option<User<H>>, ApiError> {
        let records = self.get_users_by_login(&[login]).await?;
        Ok(records
            .into_iter()
            .next()
            .map(|record| User::new(self.clone(), record)))
    }

    /// Fetches the user the access token belongs to
    pub async fn me(&self) -> Result<AuthenticatedUser<H>, ApiError> {
        let record = self.get_me().await?;
        Ok(AuthenticatedUser::new(self.clone(), record))
    }

    /// Wraps a bare user ID without fetching anything
    pub fn placeholder(&self, user_id: impl Into<String>) -> UserPlaceholder<H> {
        UserPlaceholder::new(self.clone(), user_id)
    }
}
