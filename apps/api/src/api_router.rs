use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use peopledesk_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let role_routes = Router::new()
        .route("/api/roles", get(handlers::roles::list_roles_handler))
        .route("/api/roles/{role}", get(handlers::roles::get_role_handler))
        .route(
            "/api/roles/{role}/level",
            get(handlers::roles::role_level_handler),
        );

    let access_routes = Router::new()
        .route(
            "/api/access/permission",
            post(handlers::access::permission_check_handler),
        )
        .route(
            "/api/access/permissions",
            post(handlers::access::permission_set_check_handler),
        )
        .route(
            "/api/access/route",
            post(handlers::access::route_access_handler),
        )
        .route(
            "/api/access/menu",
            post(handlers::access::menu_filter_handler),
        )
        .route(
            "/api/navigation",
            get(handlers::navigation::navigation_handler),
        );

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(role_routes)
        .merge(access_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
