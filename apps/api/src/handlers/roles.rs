use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use peopledesk_core::AppError;
use peopledesk_domain::Role;

use crate::dto::{RoleLevelResponse, RoleResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_roles_handler(State(state): State<AppState>) -> Json<Vec<RoleResponse>> {
    let mut roles = Role::all().to_vec();
    roles.sort_by(|left, right| right.cmp(left));

    Json(
        roles
            .into_iter()
            .map(|role| {
                RoleResponse::new(role, state.access_evaluator.permissions_for(Some(role)))
            })
            .collect(),
    )
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> ApiResult<Json<RoleResponse>> {
    let role = Role::from_str(&role)
        .map_err(|_| AppError::NotFound(format!("role '{role}' does not exist")))?;

    Ok(Json(RoleResponse::new(
        role,
        state.access_evaluator.permissions_for(Some(role)),
    )))
}

pub async fn role_level_handler(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<RoleLevelResponse> {
    let level = state
        .access_evaluator
        .role_level(Role::recognize(Some(role.as_str())));

    Json(RoleLevelResponse { role, level })
}
