use std::collections::HashSet;
use std::sync::Arc;

use axum::Router;
use axum::middleware;
use http::header;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt,
    cors::{AllowOrigin, Any, CorsLayer},
    propagate_header::PropagateHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;
use crate::api_docs::ApiDoc;
use crate::config::APP_CONFIG;
use crate::middleware::auth::{authenticate, require_admin, require_superadmin};
use crate::middleware::http_logger::http_logger;
use crate::routes;

pub async fn create_app(state: AppState) -> anyhow::Result<Router> {
    // Reads for every authenticated role; writes behind the admin gate;
    // user administration behind the superadmin gate. The cookie check wraps
    // all of them.
    let protected = Router::new()
        .merge(routes::faculty_routes())
        .merge(routes::auth::protected_route())
        .merge(routes::admin_routes().route_layer(middleware::from_fn(require_admin)))
        .merge(routes::superadmin_routes().route_layer(middleware::from_fn(require_superadmin)))
        .layer(middleware::from_fn(authenticate));

    let mut router = Router::new()
        .merge(routes::health::create_route())
        .merge(routes::auth::public_route())
        .merge(protected);

    // Add Swagger UI
    if APP_CONFIG.swagger_enabled {
        let swagger_ui =
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());
        router = router.merge(swagger_ui);
    }

    let sensitive_headers: Arc<[_]> = vec![header::AUTHORIZATION, header::COOKIE].into();

    // Axum middleware (middleware::from_fn) must be applied separately from
    // ServiceBuilder, which only accepts Tower layers
    let router = router.layer(middleware::from_fn(http_logger));

    let allowed_headers = [
        header::CONTENT_TYPE,
        header::AUTHORIZATION,
        header::ACCEPT,
        header::ACCEPT_LANGUAGE,
    ];

    let allowed_methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::PATCH,
        http::Method::OPTIONS,
    ];

    let cors_layer = if APP_CONFIG.cors_allowed_origins == "*" {
        // Credentials cannot be combined with a wildcard origin (CORS spec
        // limitation); list origins explicitly when clients need the session
        // cookie
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_credentials(false)
    } else {
        let allowed_origins: HashSet<String> = APP_CONFIG
            .cors_allowed_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let origins: Vec<http::HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_credentials(true)
    };

    // Apply Tower middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(cors_layer)
        .layer(PropagateHeaderLayer::new(header::HeaderName::from_static(
            "x-request-id",
        )))
        .sensitive_request_headers(sensitive_headers.clone())
        .sensitive_response_headers(sensitive_headers)
        .compression();

    Ok(router.layer(middleware_stack).with_state(state))
}
