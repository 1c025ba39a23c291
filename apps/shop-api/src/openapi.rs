//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the food shop backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Food Shop API",
        version = "1.0.0",
        description = "MongoDB-backed REST API for the food shop product catalog"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Food shop product catalog endpoints")
    )
)]
pub struct ApiDoc;
