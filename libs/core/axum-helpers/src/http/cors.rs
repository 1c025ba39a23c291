use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, any method, and any header. This service is meant
/// to be called from arbitrary frontends, so the policy is wide open.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
