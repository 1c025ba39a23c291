//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.
//! The state contains:
//! - Configuration
//! - MongoDB client and database, when configured and reachable

use mongodb::{Client, Database};

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones).
/// Both MongoDB handles are `None` when the store is unconfigured or
/// unreachable at startup; the app serves diagnostics either way.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Option<Client>,
    /// MongoDB database instance
    pub db: Option<Database>,
}
