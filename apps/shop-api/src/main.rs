use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Connect to MongoDB with retry. A missing configuration or an
    // unreachable server never aborts startup: the app runs with no
    // store and data endpoints answer 503.
    let mongo_client = match config.mongodb {
        Some(ref mongodb) => {
            info!("Connecting to MongoDB at {}", mongodb.url());
            match database::mongodb::connect_from_config_with_retry(mongodb, None).await {
                Ok(client) => Some(client),
                Err(err) => {
                    warn!("MongoDB unreachable, data endpoints will answer 503: {err}");
                    None
                }
            }
        }
        None => {
            warn!("DATABASE_URL/DATABASE_NAME not set, data endpoints will answer 503");
            None
        }
    };

    let db = match (&mongo_client, &config.mongodb) {
        (Some(client), Some(mongodb)) => {
            info!(
                "Successfully connected to MongoDB database: {}",
                mongodb.database()
            );
            Some(client.database(mongodb.database()))
        }
        _ => None,
    };

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Root, diagnostics and health endpoints live outside /api
    let root_routes = health_router(state.config.app)
        .merge(api::health::router(state.clone()))
        .merge(api::diagnostics::router(state.clone()));

    // Create a router with OpenAPI docs; CORS and tracing cover the
    // whole surface, root routes included
    let app = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, root_routes).await?;

    info!("Starting Food Shop API with production-ready shutdown (30s timeout)");

    // The routers hold their own clones of the state
    let AppState {
        config,
        mongo_client,
        db: _,
    } = state;

    // Production-ready server with graceful shutdown
    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            // MongoDB client closes automatically on drop
            drop(mongo_client);
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Food Shop API shutdown complete");
    Ok(())
}
