#![recursion_limit = "512"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> noteinvoice::errors::Result<()> {
    use leptos::prelude::*;
    use noteinvoice::errors::AppError;
    use noteinvoice::initialize::{build_router, load_feed, Config};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "noteinvoice=info".into()),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let feed = load_feed(&config)?;

    // Get Leptos configuration
    let leptos_options = get_configuration(None)
        .map_err(|e| AppError::Server(format!("Failed to load Leptos configuration: {e}")))?
        .leptos_options;

    let addr = leptos_options.site_addr;

    // Build the application router
    let app = build_router(feed, leptos_options);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{addr}");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // client-only builds are mounted through `hydrate()` in lib.rs
}
