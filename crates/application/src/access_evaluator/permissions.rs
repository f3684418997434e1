use super::*;

impl AccessEvaluator {
    /// Returns whether the role holds the permission.
    ///
    /// Absent roles and absent permissions deny.
    #[must_use]
    pub fn has_permission(&self, role: Option<Role>, permission: Option<Permission>) -> bool {
        match (role, permission) {
            (Some(role), Some(permission)) => self.table.grants(role, permission),
            _ => false,
        }
    }

    /// Returns whether the role holds at least one of the permissions.
    ///
    /// An empty list denies.
    #[must_use]
    pub fn has_any_permission(&self, role: Option<Role>, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(role, Some(*permission)))
    }

    /// Returns whether the role holds every one of the permissions.
    ///
    /// An empty list is vacuously satisfied, even for an absent role.
    #[must_use]
    pub fn has_all_permissions(&self, role: Option<Role>, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .all(|permission| self.has_permission(role, Some(*permission)))
    }

    /// Returns whether the role may reach a route guarded by `required`.
    ///
    /// No requirement means the route is public. A single permission
    /// delegates to [`Self::has_permission`], a list uses ANY-of semantics and
    /// a malformed requirement denies.
    #[must_use]
    pub fn can_access_route(
        &self,
        role: Option<Role>,
        required: Option<&PermissionRequirement>,
    ) -> bool {
        match required {
            None => true,
            Some(requirement) => self.satisfies(role, requirement),
        }
    }

    /// Returns the role's effective permissions, or nothing for an absent role.
    #[must_use]
    pub fn permissions_for(&self, role: Option<Role>) -> Vec<Permission> {
        role.map(|role| self.table.permissions_for(role))
            .unwrap_or_default()
    }

    /// Returns the seniority level of a role, or zero when absent.
    #[must_use]
    pub fn role_level(&self, role: Option<Role>) -> u8 {
        peopledesk_domain::role_level(role)
    }

    fn satisfies(&self, role: Option<Role>, requirement: &PermissionRequirement) -> bool {
        match requirement {
            PermissionRequirement::Single(tag) => self.has_permission(role, tag.known()),
            PermissionRequirement::AnyOf(tags) => tags
                .iter()
                .any(|tag| self.has_permission(role, tag.known())),
            PermissionRequirement::Malformed(_) => false,
        }
    }
}
