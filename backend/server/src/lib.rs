//! Backend of a butterfly identification quiz game.
//!
//! Stores a small catalog of butterfly species and serves random multiple
//! choice questions, plus admin CRUD over the catalog.
//!
//!
//!
//! # General Infrastructure
//! - Axum server, every route nested under an API root (`/api` by default)
//! - Catalog lives in Redis, see [`database`]
//! - Handlers only talk to the [`store::CatalogStore`] trait, injected through [`state::AppState`]
//! - Quiz questions are computed per request, nothing about them is stored
//!
//!
//!
//! # Routes
//!
//! | Method | Path | Notes |
//! |---|---|---|
//! | GET | `/` | banner |
//! | GET | `/butterflies` | whole catalog |
//! | GET | `/admin/butterflies` | same listing, admin screen |
//! | POST | `/admin/butterfly` | create |
//! | PUT | `/admin/butterfly/{id}` | full replace, 404 on unknown id |
//! | DELETE | `/admin/butterfly/{id}` | 404 on unknown id |
//! | GET | `/quiz/question` | 400 under 5 records |
//! | POST | `/init-butterflies` | seeds 30 species once |
//!
//!
//!
//! # Environment
//!
//! | Variable | Default |
//! |---|---|
//! | `RUST_PORT` | `8001` |
//! | `REDIS_URL` | `redis://127.0.0.1:6379` |
//! | `API_ROOT` | `/api` |
//! | `STORE_BACKEND` | `redis` (`memory` for a throwaway catalog) |
//!
//! Logging goes through `RUST_LOG`.
//! ```sh
//! RUST_LOG=info cargo run -p butterflies
//! ```
//!
//!
//!
//! # Notes
//!
//! ## Initialization race
//! `/init-butterflies` counts, then inserts. Two first calls landing together can both
//! see an empty catalog and both seed. Accepted, the endpoint is run by hand once per deploy.
//!
//! ## Smoke test
//! Against a running server.
//! ```sh
//! cargo run -p tester -- http://localhost:8001/api
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post, put},
};

use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod quiz;
pub mod routes;
pub mod state;
pub mod store;

use config::Config;
use routes::{
    butterflies_handler, create_handler, delete_handler, init_handler, quiz_handler, root_handler,
    update_handler,
};
use state::AppState;

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config).await?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    let router = app(state);

    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let root = state.config.api_root.clone();
    let path = |p: &str| format!("{root}{p}");

    let mut router = Router::new()
        .route(&path("/"), get(root_handler))
        .route(&path("/butterflies"), get(butterflies_handler))
        .route(&path("/admin/butterflies"), get(butterflies_handler))
        .route(&path("/admin/butterfly"), post(create_handler))
        .route(
            &path("/admin/butterfly/{id}"),
            put(update_handler).delete(delete_handler),
        )
        .route(&path("/quiz/question"), get(quiz_handler))
        .route(&path("/init-butterflies"), post(init_handler));

    if !root.is_empty() {
        router = router.route(&root, get(root_handler));
    }

    router.layer(cors).with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
