use peopledesk_domain::{MenuSection, PermissionRequirement, PermissionTag};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for a single-permission check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/permission-check-request.ts"
)]
pub struct PermissionCheckRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub permission: Option<PermissionTag>,
}

/// How a permission list is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/permission-match-mode.ts"
)]
pub enum PermissionMatchMode {
    Any,
    All,
}

/// Incoming payload for a multi-permission check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/permission-set-check-request.ts"
)]
pub struct PermissionSetCheckRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    #[ts(type = "Array<string> | null")]
    pub permissions: Option<Vec<PermissionTag>>,
    pub mode: PermissionMatchMode,
}

/// Yes/no access decision.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/access-decision-response.ts"
)]
pub struct AccessDecisionResponse {
    pub allowed: bool,
}

/// Incoming payload for a route-guard decision.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAccessRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub required_permission: Option<PermissionRequirement>,
}

/// Route-guard decision with the location to redirect to when denied.
#[derive(Debug, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/route-decision-response.ts"
)]
pub struct RouteDecisionResponse {
    pub allowed: bool,
    pub redirect_to: Option<String>,
}

/// Incoming payload for filtering a UI-supplied menu.
#[derive(Debug, Deserialize)]
pub struct MenuFilterRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub sections: Option<Vec<MenuSection>>,
}

/// Query parameters for the configured navigation menu.
#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    pub role: Option<String>,
}
