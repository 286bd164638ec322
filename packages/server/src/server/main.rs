// Main entry point for the directory API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::{
    kernel::{ServerDeps, SupabaseStore},
    server::build_app,
    Config,
};
use supabase_client::SupabaseClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PetSitter Network directory API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    if config.has_data_service() {
        tracing::info!(url = %config.supabase_url, "Data service configured");
    } else {
        tracing::warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set, serving fallback data only");
    }

    // Data service client, owned here and injected everywhere else
    let client = SupabaseClient::with_timeout(
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
        config.request_timeout,
    )
    .context("Failed to build data service client")?;
    let deps = ServerDeps::new(Arc::new(SupabaseStore::new(client)), config.query_stale_after);

    deps.queries.log_availability_changes();

    // Initial fetch runs in the background; reads show loading until it settles
    let queries = deps.queries.clone();
    tokio::spawn(async move {
        queries.fetch_all().await;
        tracing::info!("Initial directory fetch settled");
    });

    let app = build_app(deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
