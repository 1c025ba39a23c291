//! API routes module
//!
//! This module wires the product catalog routes plus the diagnostic
//! endpoints for the food shop backend.

pub mod diagnostics;
pub mod health;

use axum::Router;
use domain_products::{handlers, MongoProductRepository, ProductService, UnconfiguredRepository};

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    match state.db {
        Some(ref db) => handlers::router(ProductService::new(MongoProductRepository::new(db))),
        None => handlers::router(ProductService::new(UnconfiguredRepository)),
    }
}
