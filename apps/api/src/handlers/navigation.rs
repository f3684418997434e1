use axum::Json;
use axum::extract::{Query, State};
use peopledesk_domain::{MenuSection, RoleTag};

use crate::dto::NavigationQuery;
use crate::state::AppState;

pub async fn navigation_handler(
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Json<Vec<MenuSection>> {
    let role = RoleTag::from_claim(query.role.as_deref());

    Json(
        state
            .access_evaluator
            .filter_menu_by_role(Some(state.navigation.as_slice()), role.as_ref()),
    )
}
