//! HTTP API Client
//!
//! Functions for communicating with the stats backend. The backend owns the
//! Reddit OAuth2 integration; every request here carries only the opaque
//! session token.

use gloo_net::http::Request;

use crate::api::error::FetchError;
use crate::session::store::SessionToken;

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key for the backend URL override
const API_BASE_STORAGE_KEY: &str = "reddit_api_url";

/// Get the backend base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Set the backend base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_STORAGE_KEY, url);
        }
    }
}

/// Normalize a base URL: trim whitespace and any trailing slash
fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct LoginResponse {
    auth_url: String,
}

/// Aggregate statistics for the authenticated account. Fetched wholesale;
/// never updated field-by-field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserProfile {
    pub username: String,
    pub total_karma: u64,
    pub link_karma: u64,
    pub comment_karma: u64,
    pub account_created: String,
    pub total_posts: u64,
    pub total_comments: u64,
}

/// One submitted post
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub title: String,
    pub subreddit: String,
    pub score: i64,
    pub num_comments: u64,
    #[serde(default)]
    pub created_utc: i64,
    pub created_time: String,
    pub permalink: String,
    #[serde(default)]
    pub selftext: Option<String>,
}

/// One comment made by the account
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub post_title: String,
    pub subreddit: String,
    pub score: i64,
    #[serde(default)]
    pub created_utc: i64,
    pub created_time: String,
    pub permalink: String,
    pub body: String,
}

// ============ API Functions ============

/// Ask the backend for the OAuth2 authorization URL.
///
/// The caller is expected to navigate the browser to the returned URL,
/// which ends the current page lifecycle.
pub async fn fetch_login_url() -> Result<String, FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/auth/login", api_base))
        .send()
        .await
        .map_err(FetchError::network)?;

    if !response.ok() {
        return Err(FetchError::Transport(format!("HTTP {}", response.status())));
    }

    let login: LoginResponse = response.json().await.map_err(FetchError::parse)?;

    Ok(login.auth_url)
}

/// Fetch the profile for a session token.
///
/// A 401 maps to [`FetchError::Unauthorized`]; the caller must clear the
/// persisted session and return to the login screen. Any other failure is
/// [`FetchError::Transport`] and leaves the session intact.
pub async fn fetch_profile(token: &SessionToken) -> Result<UserProfile, FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/api/profile?session_id={}",
        api_base,
        token.as_str()
    ))
    .send()
    .await
    .map_err(FetchError::network)?;

    if !response.ok() {
        return Err(FetchError::from_status(response.status()));
    }

    response.json().await.map_err(FetchError::parse)
}

/// Best-effort backend session invalidation.
///
/// A courtesy call only: the local session is cleared regardless of the
/// outcome, so failures are swallowed.
pub async fn logout(token: &SessionToken) {
    let api_base = get_api_base();

    let result = Request::delete(&format!(
        "{}/auth/logout?session_id={}",
        api_base,
        token.as_str()
    ))
    .send()
    .await;

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Logout notification failed: {}", e).into());
    }
}

/// Fetch up to `limit` submitted posts
pub async fn fetch_posts(token: &SessionToken, limit: u32) -> Result<Vec<Post>, FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/api/posts?session_id={}&limit={}",
        api_base,
        token.as_str(),
        limit
    ))
    .send()
    .await
    .map_err(FetchError::network)?;

    if !response.ok() {
        return Err(FetchError::Transport(format!("HTTP {}", response.status())));
    }

    response.json().await.map_err(FetchError::parse)
}

/// Fetch up to `limit` comments
pub async fn fetch_comments(token: &SessionToken, limit: u32) -> Result<Vec<Comment>, FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/api/comments?session_id={}&limit={}",
        api_base,
        token.as_str(),
        limit
    ))
    .send()
    .await
    .map_err(FetchError::network)?;

    if !response.ok() {
        return Err(FetchError::Transport(format!("HTTP {}", response.status())));
    }

    response.json().await.map_err(FetchError::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base("http://localhost:8000"), "http://localhost:8000");
    }

    #[test]
    fn test_normalize_base_trims_whitespace() {
        assert_eq!(
            normalize_base("  https://api.example.com/ "),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_profile_deserializes_backend_shape() {
        let json = r#"{
            "username": "alice",
            "total_karma": 500,
            "link_karma": 300,
            "comment_karma": 200,
            "account_created": "2019-03-01",
            "total_posts": 42,
            "total_comments": 128
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.total_karma, 500);
        assert_eq!(profile.link_karma + profile.comment_karma, 500);
    }

    #[test]
    fn test_post_tolerates_missing_optional_fields() {
        let json = r#"{
            "title": "Hello",
            "subreddit": "rust",
            "score": 10,
            "num_comments": 3,
            "created_time": "2 days ago",
            "permalink": "https://reddit.com/r/rust/1"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.created_utc, 0);
        assert_eq!(post.selftext, None);
    }
}
