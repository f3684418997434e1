use peopledesk_domain::{Permission, Role};
use serde::Serialize;
use ts_rs::TS;

/// API representation of a role and its effective permissions.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub role: String,
    pub level: u8,
    pub permissions: Vec<String>,
}

impl RoleResponse {
    pub fn new(role: Role, permissions: Vec<Permission>) -> Self {
        Self {
            role: role.as_str().to_owned(),
            level: role.level(),
            permissions: permissions
                .iter()
                .map(|permission| permission.as_str().to_owned())
                .collect(),
        }
    }
}

/// API representation of a role's seniority level.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/role-level-response.ts"
)]
pub struct RoleLevelResponse {
    pub role: String,
    pub level: u8,
}
