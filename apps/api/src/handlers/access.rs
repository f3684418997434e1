use axum::Json;
use axum::extract::State;
use peopledesk_domain::{MenuSection, Permission, PermissionTag, Role, RoleTag};

use crate::dto::{
    AccessDecisionResponse, MenuFilterRequest, PermissionCheckRequest, PermissionMatchMode,
    PermissionSetCheckRequest, RouteAccessRequest, RouteDecisionResponse,
};
use crate::state::AppState;

pub async fn permission_check_handler(
    State(state): State<AppState>,
    Json(payload): Json<PermissionCheckRequest>,
) -> Json<AccessDecisionResponse> {
    let role = Role::recognize(payload.role.as_deref());
    let permission = payload.permission.as_ref().and_then(PermissionTag::known);

    Json(AccessDecisionResponse {
        allowed: state.access_evaluator.has_permission(role, permission),
    })
}

pub async fn permission_set_check_handler(
    State(state): State<AppState>,
    Json(payload): Json<PermissionSetCheckRequest>,
) -> Json<AccessDecisionResponse> {
    let role = Role::recognize(payload.role.as_deref());
    let Some(tags) = payload.permissions else {
        return Json(AccessDecisionResponse { allowed: false });
    };

    let known: Vec<Permission> = tags.iter().filter_map(PermissionTag::known).collect();

    // Unrecognized and non-string tags are permissions nobody holds.
    let allowed = match payload.mode {
        PermissionMatchMode::Any => state.access_evaluator.has_any_permission(role, &known),
        PermissionMatchMode::All => {
            known.len() == tags.len() && state.access_evaluator.has_all_permissions(role, &known)
        }
    };

    Json(AccessDecisionResponse { allowed })
}

pub async fn route_access_handler(
    State(state): State<AppState>,
    Json(payload): Json<RouteAccessRequest>,
) -> Json<RouteDecisionResponse> {
    let role = RoleTag::from_claim(payload.role.as_deref());
    let decision = state
        .route_guard
        .decide(role.as_ref(), payload.required_permission.as_ref());

    Json(RouteDecisionResponse {
        allowed: decision.is_allowed(),
        redirect_to: decision.redirect_to().map(str::to_owned),
    })
}

pub async fn menu_filter_handler(
    State(state): State<AppState>,
    Json(payload): Json<MenuFilterRequest>,
) -> Json<Vec<MenuSection>> {
    let role = RoleTag::from_claim(payload.role.as_deref());

    Json(
        state
            .access_evaluator
            .filter_menu_by_role(payload.sections.as_deref(), role.as_ref()),
    )
}
