use std::sync::Arc;

use peopledesk_application::AccessEvaluator;
use peopledesk_domain::MenuSection;

use crate::route_guard::RouteGuard;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access_evaluator: AccessEvaluator,
    pub route_guard: RouteGuard,
    pub navigation: Arc<Vec<MenuSection>>,
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let access_evaluator = AccessEvaluator::standard();
    let navigation = crate::navigation_menu::default_navigation()
        .unwrap_or_else(|error| panic!("built-in menu should build: {error}"));

    AppState {
        route_guard: RouteGuard::new(access_evaluator.clone(), "/login", "/unauthorized"),
        access_evaluator,
        navigation: Arc::new(navigation),
    }
}
