use leptos::prelude::*;

#[cfg(feature = "ssr")]
use std::sync::Arc;

use crate::dto::FeedNote;

// Simple error type for server functions
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ServerError(pub String);

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ServerError {}

impl std::str::FromStr for ServerError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ServerError(s.to_string()))
    }
}

// AppState structure that will be provided as context (SSR only)
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<Vec<FeedNote>>,
}

/// Notes to show, newest first.
#[server]
pub async fn get_feed_fn(limit: Option<usize>) -> Result<Vec<FeedNote>, ServerFnError> {
    let app_state = use_context::<AppState>()
        .ok_or_else(|| ServerError("Feed is not configured".to_string()))?;

    let mut notes = app_state.feed.as_ref().clone();
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    notes.truncate(limit.unwrap_or(50));

    Ok(notes)
}
