use std::future::IntoFuture;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use hotel_concierge::config::AppConfig;
use hotel_concierge::handlers;
use hotel_concierge::services::dialogue::rest::RestDialogueEngine;
use hotel_concierge::services::recorder::BookingRecorder;
use hotel_concierge::services::sessions::{InMemorySessionStore, SessionStore, SqliteSessionStore};
use hotel_concierge::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let sessions: Box<dyn SessionStore> = match config.session_db.as_deref() {
        Some(path) => {
            tracing::info!("using SQLite session store at {path}");
            Box::new(SqliteSessionStore::open(path)?)
        }
        None => {
            tracing::info!("using in-memory session store");
            Box::new(InMemorySessionStore::new())
        }
    };

    let engine = RestDialogueEngine::new(
        config.rasa_url.clone(),
        config.request_timeout,
        config.status_timeout,
    )?;
    tracing::info!("dialogue engine at {}", config.rasa_url);

    let state = Arc::new(AppState {
        engine: Box::new(engine),
        sessions,
        recorder: BookingRecorder::new(&config.bookings_path),
    });

    let gateway = handlers::gateway_router(Arc::clone(&state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());
    let actions = handlers::action_router(state).layer(TraceLayer::new_for_http());

    let gateway_addr = format!("0.0.0.0:{}", config.port);
    let action_addr = format!("0.0.0.0:{}", config.action_port);
    tracing::info!("chat gateway listening on {gateway_addr}");
    tracing::info!("action server listening on {action_addr}");

    let gateway_listener = tokio::net::TcpListener::bind(&gateway_addr).await?;
    let action_listener = tokio::net::TcpListener::bind(&action_addr).await?;

    tokio::try_join!(
        axum::serve(gateway_listener, gateway).into_future(),
        axum::serve(action_listener, actions).into_future(),
    )?;

    Ok(())
}
