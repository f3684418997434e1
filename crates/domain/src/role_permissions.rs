use std::collections::{BTreeMap, BTreeSet};

use peopledesk_core::{AppError, AppResult};

use crate::{Permission, Role};

/// Immutable mapping from every role to its permission set.
///
/// The mapping is total over [`Role`]. The `super_admin` entry is always the
/// full [`Permission::all`] universe and cannot be supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionTable {
    grants: BTreeMap<Role, BTreeSet<Permission>>,
}

impl RolePermissionTable {
    /// Builds the standard HR permission table.
    #[must_use]
    pub fn standard() -> Self {
        let grants = [
            (Role::HrManager, [SELF_SERVICE, HR_MANAGER].concat()),
            (Role::HrCoordinator, [SELF_SERVICE, HR_COORDINATOR].concat()),
            (Role::Manager, [SELF_SERVICE, MANAGER].concat()),
            (Role::Employee, SELF_SERVICE.to_vec()),
            (Role::Recruiter, [SELF_SERVICE, RECRUITER].concat()),
        ]
        .into_iter()
        .map(|(role, permissions)| (role, permissions.into_iter().collect()))
        .collect();

        Self::assemble(grants)
    }

    /// Builds a custom table from explicit grants.
    ///
    /// Every role except `super_admin` must appear exactly once. Duplicate
    /// permissions inside one entry are collapsed.
    pub fn from_grants<I, P>(grants: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (Role, P)>,
        P: IntoIterator<Item = Permission>,
    {
        let mut collected = BTreeMap::new();
        for (role, permissions) in grants {
            if role == Role::SuperAdmin {
                return Err(AppError::Validation(
                    "super_admin permissions are derived and must not be listed".to_owned(),
                ));
            }

            if collected
                .insert(role, permissions.into_iter().collect::<BTreeSet<_>>())
                .is_some()
            {
                return Err(AppError::Validation(format!(
                    "role '{}' is listed more than once",
                    role.as_str()
                )));
            }
        }

        let missing: Vec<&str> = Role::all()
            .iter()
            .filter(|role| **role != Role::SuperAdmin && !collected.contains_key(*role))
            .map(Role::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "permission table is missing roles: {}",
                missing.join(", ")
            )));
        }

        Ok(Self::assemble(collected))
    }

    /// Returns whether the role holds the permission.
    #[must_use]
    pub fn grants(&self, role: Role, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .map(|permissions| permissions.contains(&permission))
            .unwrap_or(false)
    }

    /// Returns the role's permissions in declaration order.
    #[must_use]
    pub fn permissions_for(&self, role: Role) -> Vec<Permission> {
        self.grants
            .get(&role)
            .map(|permissions| permissions.iter().copied().collect())
            .unwrap_or_default()
    }

    fn assemble(mut grants: BTreeMap<Role, BTreeSet<Permission>>) -> Self {
        grants.insert(Role::SuperAdmin, Permission::all().iter().copied().collect());
        for role in Role::all() {
            grants.entry(*role).or_default();
        }

        Self { grants }
    }
}

impl Default for RolePermissionTable {
    fn default() -> Self {
        Self::standard()
    }
}

const SELF_SERVICE: &[Permission] = &[
    Permission::ViewOwnProfile,
    Permission::EditOwnProfile,
    Permission::ViewDepartments,
    Permission::ViewOwnAttendance,
    Permission::ApplyLeave,
    Permission::ViewOwnLeaves,
    Permission::ViewOwnPayslip,
    Permission::ViewOwnPerformance,
    Permission::ViewOwnAssets,
    Permission::ViewTrainings,
    Permission::EnrollTraining,
    Permission::SubmitTimesheet,
    Permission::ViewProjects,
    Permission::ViewJobs,
    Permission::ViewOnboardingTasks,
];

const MANAGER: &[Permission] = &[
    Permission::ViewTeamEmployees,
    Permission::ViewTeamAttendance,
    Permission::ViewTeamLeaves,
    Permission::ApproveLeave,
    Permission::ViewTeamPerformance,
    Permission::ManagePerformanceReviews,
    Permission::ApproveTimesheets,
    Permission::ManageProjects,
    Permission::ViewCandidates,
    Permission::ScheduleInterviews,
    Permission::ViewReports,
];

const RECRUITER: &[Permission] = &[
    Permission::ManageJobs,
    Permission::ViewCandidates,
    Permission::ManageCandidates,
    Permission::ScheduleInterviews,
    Permission::ManageOnboarding,
    Permission::ViewReports,
];

const HR_COORDINATOR: &[Permission] = &[
    Permission::ViewAllEmployees,
    Permission::ViewTeamEmployees,
    Permission::CreateEmployee,
    Permission::EditEmployee,
    Permission::ViewTeamAttendance,
    Permission::ManageAttendance,
    Permission::ViewTeamLeaves,
    Permission::ApproveLeave,
    Permission::ViewCandidates,
    Permission::ScheduleInterviews,
    Permission::ManageTrainings,
    Permission::ManageAssets,
    Permission::ManageOnboarding,
    Permission::ManageOffboarding,
    Permission::ViewReports,
];

const HR_MANAGER: &[Permission] = &[
    Permission::ViewAllEmployees,
    Permission::ViewTeamEmployees,
    Permission::CreateEmployee,
    Permission::EditEmployee,
    Permission::DeleteEmployee,
    Permission::ManageDepartments,
    Permission::ViewTeamAttendance,
    Permission::ManageAttendance,
    Permission::ManageJobs,
    Permission::ViewCandidates,
    Permission::ManageCandidates,
    Permission::ScheduleInterviews,
    Permission::ViewPayroll,
    Permission::ManagePayroll,
    Permission::ViewTeamLeaves,
    Permission::ApproveLeave,
    Permission::ManageLeavePolicies,
    Permission::ViewTeamPerformance,
    Permission::ManagePerformanceReviews,
    Permission::ViewAnalytics,
    Permission::ViewReports,
    Permission::ExportReports,
    Permission::ManageAssets,
    Permission::ManageTrainings,
    Permission::ApproveTimesheets,
    Permission::ManageProjects,
    Permission::ViewAuditLog,
    Permission::ManageOnboarding,
    Permission::ManageOffboarding,
];

#[cfg(test)]
mod tests {
    use super::RolePermissionTable;
    use crate::{Permission, Role};

    #[test]
    fn standard_table_is_total_and_non_empty() {
        let table = RolePermissionTable::standard();
        for role in Role::all() {
            assert!(!table.permissions_for(*role).is_empty(), "{role} has no grants");
        }
    }

    #[test]
    fn super_admin_holds_every_permission() {
        let table = RolePermissionTable::standard();
        assert_eq!(
            table.permissions_for(Role::SuperAdmin),
            Permission::all().to_vec()
        );
    }

    #[test]
    fn employee_grants_match_self_service() {
        let table = RolePermissionTable::standard();
        assert!(table.grants(Role::Employee, Permission::ApplyLeave));
        assert!(!table.grants(Role::Employee, Permission::DeleteEmployee));
        assert!(!table.grants(Role::HrManager, Permission::ManageSettings));
    }

    #[test]
    fn custom_table_derives_super_admin_and_dedupes() {
        let table = RolePermissionTable::from_grants([
            (
                Role::HrManager,
                vec![Permission::ViewReports, Permission::ViewReports],
            ),
            (Role::HrCoordinator, vec![]),
            (Role::Manager, vec![Permission::ApproveLeave]),
            (Role::Employee, vec![Permission::ApplyLeave]),
            (Role::Recruiter, vec![Permission::ManageJobs]),
        ]);

        let table = table.unwrap_or_else(|error| panic!("table should build: {error}"));
        assert_eq!(
            table.permissions_for(Role::HrManager),
            vec![Permission::ViewReports]
        );
        assert!(table.permissions_for(Role::HrCoordinator).is_empty());
        assert!(table.grants(Role::SuperAdmin, Permission::ManageSettings));
    }

    #[test]
    fn custom_table_rejects_missing_roles() {
        let result = RolePermissionTable::from_grants([(Role::Employee, Vec::<Permission>::new())]);
        assert!(result.is_err());
    }

    #[test]
    fn custom_table_rejects_explicit_super_admin() {
        let result = RolePermissionTable::from_grants([(
            Role::SuperAdmin,
            vec![Permission::ManageSettings],
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn custom_table_rejects_duplicate_roles() {
        let result = RolePermissionTable::from_grants([
            (Role::Employee, vec![Permission::ApplyLeave]),
            (Role::Employee, vec![Permission::ViewOwnLeaves]),
        ]);
        assert!(result.is_err());
    }
}
