mod access;
mod common;
mod roles;

pub use access::{
    AccessDecisionResponse, MenuFilterRequest, NavigationQuery, PermissionCheckRequest,
    PermissionMatchMode, PermissionSetCheckRequest, RouteAccessRequest, RouteDecisionResponse,
};
pub use common::HealthResponse;
pub use roles::{RoleLevelResponse, RoleResponse};

#[cfg(test)]
mod tests {
    use super::{
        AccessDecisionResponse, HealthResponse, PermissionCheckRequest, PermissionMatchMode,
        PermissionSetCheckRequest, RoleLevelResponse, RoleResponse, RouteDecisionResponse,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        HealthResponse::export(&config)?;
        ErrorResponse::export(&config)?;
        PermissionCheckRequest::export(&config)?;
        PermissionMatchMode::export(&config)?;
        PermissionSetCheckRequest::export(&config)?;
        AccessDecisionResponse::export(&config)?;
        RouteDecisionResponse::export(&config)?;
        RoleResponse::export(&config)?;
        RoleLevelResponse::export(&config)?;

        Ok(())
    }
}
