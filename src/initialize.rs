use std::path::Path;
use std::sync::Arc;

use crate::app::{shell, App};
use crate::dto::FeedNote;
use crate::errors::{AppError, Result as AppResult};
use crate::server::AppState;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding the notes to serve
    pub feed_path: Option<String>,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            feed_path: read_optional_env("FEED_PATH")?,
        })
    }
}

fn read_optional_env(name: &str) -> AppResult<Option<String>> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                Err(AppError::EmptyEnv(name.to_string()))
            } else {
                Ok(Some(trimmed))
            }
        }
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(AppError::InvalidEnv(name.to_string())),
    }
}

/// Load the feed named by the configuration. No feed configured means an
/// empty feed.
pub fn load_feed(config: &Config) -> AppResult<Vec<FeedNote>> {
    let Some(path) = config.feed_path.as_deref() else {
        tracing::warn!("FEED_PATH not set, serving an empty feed");
        return Ok(Vec::new());
    };

    let notes = read_feed(Path::new(path))?;
    tracing::info!(path, notes = notes.len(), "Loaded feed");
    Ok(notes)
}

fn read_feed(path: &Path) -> AppResult<Vec<FeedNote>> {
    let display = path.display().to_string();

    let raw = std::fs::read_to_string(path).map_err(|source| AppError::FeedRead {
        path: display.clone(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| AppError::FeedParse {
        path: display,
        source,
    })
}

/// Build the full Axum router (Leptos SSR + server functions)
pub fn build_router(feed: Vec<FeedNote>, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let app_state = AppState {
        feed: Arc::new(feed),
    };

    Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(app_state.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(
            shell,
        ))
        .with_state(leptos_options)
}
