use peopledesk_application::AccessEvaluator;
use peopledesk_domain::{PermissionRequirement, RoleTag};
use tracing::{debug, info};

/// Outcome of guarding a page for a role claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The page may be rendered.
    Allow,
    /// No role claim was presented.
    RedirectToLogin(String),
    /// The role does not satisfy the page requirement.
    RedirectToFallback(String),
}

impl RouteDecision {
    /// Returns whether the page may be rendered.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the redirect target for denied decisions.
    #[must_use]
    pub fn redirect_to(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin(path) | Self::RedirectToFallback(path) => Some(path.as_str()),
        }
    }
}

/// Page guard that turns route checks into redirect decisions.
#[derive(Clone)]
pub struct RouteGuard {
    access_evaluator: AccessEvaluator,
    login_path: String,
    fallback_path: String,
}

impl RouteGuard {
    pub fn new(
        access_evaluator: AccessEvaluator,
        login_path: impl Into<String>,
        fallback_path: impl Into<String>,
    ) -> Self {
        Self {
            access_evaluator,
            login_path: login_path.into(),
            fallback_path: fallback_path.into(),
        }
    }

    pub fn decide(
        &self,
        role: Option<&RoleTag>,
        required_permission: Option<&PermissionRequirement>,
    ) -> RouteDecision {
        let Some(role) = role else {
            debug!("route requested without a role claim");
            return RouteDecision::RedirectToLogin(self.login_path.clone());
        };

        if self
            .access_evaluator
            .can_access_route(role.known(), required_permission)
        {
            return RouteDecision::Allow;
        }

        info!(
            role = role.as_str(),
            requirement = ?required_permission,
            "route access denied"
        );
        RouteDecision::RedirectToFallback(self.fallback_path.clone())
    }
}
