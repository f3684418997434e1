//! PeopleDesk access-control API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dto;
mod error;
mod handlers;
mod navigation_menu;
mod route_guard;
mod state;

use std::sync::Arc;

use peopledesk_application::AccessEvaluator;
use peopledesk_core::AppError;
use peopledesk_domain::RolePermissionTable;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::api_router::build_router;
use crate::route_guard::RouteGuard;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let access_evaluator = AccessEvaluator::new(Arc::new(RolePermissionTable::standard()));
    let route_guard = RouteGuard::new(
        access_evaluator.clone(),
        config.login_path.clone(),
        config.fallback_path.clone(),
    );

    let navigation = navigation_menu::load_navigation(config.navigation_menu_path.as_deref())?;
    info!(
        sections = navigation.len(),
        custom = config.navigation_menu_path.is_some(),
        "navigation menu loaded"
    );

    let app_state = AppState {
        access_evaluator,
        route_guard,
        navigation: Arc::new(navigation),
    };

    let app = build_router(app_state, &config.frontend_url)?;
    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "peopledesk-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
