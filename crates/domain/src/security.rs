use std::fmt::{Display, Formatter};
use std::str::FromStr;

use peopledesk_core::AppError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Grantable capabilities checked by access policies.
///
/// The namespace is flat: scoped variants such as "team" versus "all"
/// employees are distinct permissions rather than parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows listing every employee in the organization.
    ViewAllEmployees,
    /// Allows listing direct reports.
    ViewTeamEmployees,
    /// Allows reading the caller's own profile.
    ViewOwnProfile,
    /// Allows editing the caller's own profile.
    EditOwnProfile,
    /// Allows creating employee records.
    CreateEmployee,
    /// Allows editing any employee record.
    EditEmployee,
    /// Allows deleting employee records.
    DeleteEmployee,
    /// Allows browsing departments.
    ViewDepartments,
    /// Allows creating and restructuring departments.
    ManageDepartments,
    /// Allows reading the caller's own attendance.
    ViewOwnAttendance,
    /// Allows reading attendance of direct reports.
    ViewTeamAttendance,
    /// Allows correcting and configuring attendance.
    ManageAttendance,
    /// Allows browsing job openings.
    ViewJobs,
    /// Allows creating and closing job openings.
    ManageJobs,
    /// Allows browsing candidates.
    ViewCandidates,
    /// Allows moving candidates through the hiring pipeline.
    ManageCandidates,
    /// Allows scheduling interviews.
    ScheduleInterviews,
    /// Allows reading payroll runs.
    ViewPayroll,
    /// Allows running and adjusting payroll.
    ManagePayroll,
    /// Allows downloading the caller's own payslips.
    ViewOwnPayslip,
    /// Allows submitting leave requests.
    ApplyLeave,
    /// Allows reading the caller's own leave history.
    ViewOwnLeaves,
    /// Allows reading leave requests of direct reports.
    ViewTeamLeaves,
    /// Allows approving or rejecting leave requests.
    ApproveLeave,
    /// Allows configuring leave types and accrual policies.
    ManageLeavePolicies,
    /// Allows reading the caller's own reviews and goals.
    ViewOwnPerformance,
    /// Allows reading reviews of direct reports.
    ViewTeamPerformance,
    /// Allows running review cycles.
    ManagePerformanceReviews,
    /// Allows opening workforce analytics dashboards.
    ViewAnalytics,
    /// Allows reading standard reports.
    ViewReports,
    /// Allows exporting report data.
    ExportReports,
    /// Allows reading assets assigned to the caller.
    ViewOwnAssets,
    /// Allows assigning and retiring company assets.
    ManageAssets,
    /// Allows browsing the training catalogue.
    ViewTrainings,
    /// Allows enrolling in trainings.
    EnrollTraining,
    /// Allows authoring trainings.
    ManageTrainings,
    /// Allows submitting timesheets.
    SubmitTimesheet,
    /// Allows approving timesheets.
    ApproveTimesheets,
    /// Allows browsing projects.
    ViewProjects,
    /// Allows creating projects and staffing them.
    ManageProjects,
    /// Allows changing organization settings.
    ManageSettings,
    /// Allows changing role assignments.
    ManageRoles,
    /// Allows reading the audit log.
    ViewAuditLog,
    /// Allows reading the caller's own onboarding checklist.
    ViewOnboardingTasks,
    /// Allows running onboarding for new hires.
    ManageOnboarding,
    /// Allows running offboarding for leavers.
    ManageOffboarding,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewAllEmployees => "view_all_employees",
            Self::ViewTeamEmployees => "view_team_employees",
            Self::ViewOwnProfile => "view_own_profile",
            Self::EditOwnProfile => "edit_own_profile",
            Self::CreateEmployee => "create_employee",
            Self::EditEmployee => "edit_employee",
            Self::DeleteEmployee => "delete_employee",
            Self::ViewDepartments => "view_departments",
            Self::ManageDepartments => "manage_departments",
            Self::ViewOwnAttendance => "view_own_attendance",
            Self::ViewTeamAttendance => "view_team_attendance",
            Self::ManageAttendance => "manage_attendance",
            Self::ViewJobs => "view_jobs",
            Self::ManageJobs => "manage_jobs",
            Self::ViewCandidates => "view_candidates",
            Self::ManageCandidates => "manage_candidates",
            Self::ScheduleInterviews => "schedule_interviews",
            Self::ViewPayroll => "view_payroll",
            Self::ManagePayroll => "manage_payroll",
            Self::ViewOwnPayslip => "view_own_payslip",
            Self::ApplyLeave => "apply_leave",
            Self::ViewOwnLeaves => "view_own_leaves",
            Self::ViewTeamLeaves => "view_team_leaves",
            Self::ApproveLeave => "approve_leave",
            Self::ManageLeavePolicies => "manage_leave_policies",
            Self::ViewOwnPerformance => "view_own_performance",
            Self::ViewTeamPerformance => "view_team_performance",
            Self::ManagePerformanceReviews => "manage_performance_reviews",
            Self::ViewAnalytics => "view_analytics",
            Self::ViewReports => "view_reports",
            Self::ExportReports => "export_reports",
            Self::ViewOwnAssets => "view_own_assets",
            Self::ManageAssets => "manage_assets",
            Self::ViewTrainings => "view_trainings",
            Self::EnrollTraining => "enroll_training",
            Self::ManageTrainings => "manage_trainings",
            Self::SubmitTimesheet => "submit_timesheet",
            Self::ApproveTimesheets => "approve_timesheets",
            Self::ViewProjects => "view_projects",
            Self::ManageProjects => "manage_projects",
            Self::ManageSettings => "manage_settings",
            Self::ManageRoles => "manage_roles",
            Self::ViewAuditLog => "view_audit_log",
            Self::ViewOnboardingTasks => "view_onboarding_tasks",
            Self::ManageOnboarding => "manage_onboarding",
            Self::ManageOffboarding => "manage_offboarding",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ViewAllEmployees,
            Permission::ViewTeamEmployees,
            Permission::ViewOwnProfile,
            Permission::EditOwnProfile,
            Permission::CreateEmployee,
            Permission::EditEmployee,
            Permission::DeleteEmployee,
            Permission::ViewDepartments,
            Permission::ManageDepartments,
            Permission::ViewOwnAttendance,
            Permission::ViewTeamAttendance,
            Permission::ManageAttendance,
            Permission::ViewJobs,
            Permission::ManageJobs,
            Permission::ViewCandidates,
            Permission::ManageCandidates,
            Permission::ScheduleInterviews,
            Permission::ViewPayroll,
            Permission::ManagePayroll,
            Permission::ViewOwnPayslip,
            Permission::ApplyLeave,
            Permission::ViewOwnLeaves,
            Permission::ViewTeamLeaves,
            Permission::ApproveLeave,
            Permission::ManageLeavePolicies,
            Permission::ViewOwnPerformance,
            Permission::ViewTeamPerformance,
            Permission::ManagePerformanceReviews,
            Permission::ViewAnalytics,
            Permission::ViewReports,
            Permission::ExportReports,
            Permission::ViewOwnAssets,
            Permission::ManageAssets,
            Permission::ViewTrainings,
            Permission::EnrollTraining,
            Permission::ManageTrainings,
            Permission::SubmitTimesheet,
            Permission::ApproveTimesheets,
            Permission::ViewProjects,
            Permission::ManageProjects,
            Permission::ManageSettings,
            Permission::ManageRoles,
            Permission::ViewAuditLog,
            Permission::ViewOnboardingTasks,
            Permission::ManageOnboarding,
            Permission::ManageOffboarding,
        ];

        ALL
    }

    /// Returns the functional area this permission belongs to.
    #[must_use]
    pub fn domain(&self) -> PermissionDomain {
        match self {
            Self::ViewAllEmployees
            | Self::ViewTeamEmployees
            | Self::ViewOwnProfile
            | Self::EditOwnProfile
            | Self::CreateEmployee
            | Self::EditEmployee
            | Self::DeleteEmployee => PermissionDomain::Employees,
            Self::ViewDepartments | Self::ManageDepartments => PermissionDomain::Departments,
            Self::ViewOwnAttendance | Self::ViewTeamAttendance | Self::ManageAttendance => {
                PermissionDomain::Attendance
            }
            Self::ViewJobs
            | Self::ManageJobs
            | Self::ViewCandidates
            | Self::ManageCandidates
            | Self::ScheduleInterviews => PermissionDomain::Recruitment,
            Self::ViewPayroll | Self::ManagePayroll | Self::ViewOwnPayslip => {
                PermissionDomain::Payroll
            }
            Self::ApplyLeave
            | Self::ViewOwnLeaves
            | Self::ViewTeamLeaves
            | Self::ApproveLeave
            | Self::ManageLeavePolicies => PermissionDomain::Leave,
            Self::ViewOwnPerformance
            | Self::ViewTeamPerformance
            | Self::ManagePerformanceReviews => PermissionDomain::Performance,
            Self::ViewAnalytics | Self::ViewReports | Self::ExportReports => {
                PermissionDomain::Analytics
            }
            Self::ViewOwnAssets | Self::ManageAssets => PermissionDomain::Assets,
            Self::ViewTrainings | Self::EnrollTraining | Self::ManageTrainings => {
                PermissionDomain::Training
            }
            Self::SubmitTimesheet
            | Self::ApproveTimesheets
            | Self::ViewProjects
            | Self::ManageProjects => PermissionDomain::Timesheets,
            Self::ManageSettings | Self::ManageRoles | Self::ViewAuditLog => {
                PermissionDomain::Settings
            }
            Self::ViewOnboardingTasks | Self::ManageOnboarding | Self::ManageOffboarding => {
                PermissionDomain::Onboarding
            }
        }
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl Display for Permission {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

/// Informal grouping of permissions by HR functional area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionDomain {
    /// Employee records and profiles.
    Employees,
    /// Department structure.
    Departments,
    /// Attendance tracking.
    Attendance,
    /// Jobs, candidates and interviews.
    Recruitment,
    /// Payroll and payslips.
    Payroll,
    /// Leave requests and policies.
    Leave,
    /// Reviews and goals.
    Performance,
    /// Dashboards and reports.
    Analytics,
    /// Company assets.
    Assets,
    /// Training catalogue.
    Training,
    /// Timesheets and projects.
    Timesheets,
    /// Organization settings and roles.
    Settings,
    /// Onboarding and offboarding.
    Onboarding,
}

impl PermissionDomain {
    /// Returns a stable storage value for this domain.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Departments => "departments",
            Self::Attendance => "attendance",
            Self::Recruitment => "recruitment",
            Self::Payroll => "payroll",
            Self::Leave => "leave",
            Self::Performance => "performance",
            Self::Analytics => "analytics",
            Self::Assets => "assets",
            Self::Training => "training",
            Self::Timesheets => "timesheets",
            Self::Settings => "settings",
            Self::Onboarding => "onboarding",
        }
    }
}

/// A permission value as it arrives from outside the type-checked boundary.
///
/// Unknown strings and non-string values are kept so that they deny access
/// instead of failing deserialization of the whole payload. Tags match
/// exactly; surrounding whitespace makes a tag unrecognized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PermissionTag {
    /// A permission from the closed set.
    Known(Permission),
    /// A string outside the closed set, preserved verbatim.
    Unrecognized(String),
    /// A non-string value, preserved verbatim.
    Malformed(Value),
}

impl PermissionTag {
    /// Parses a raw string tag, keeping unknown values as unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Permission::from_str(value)
            .map(Self::Known)
            .unwrap_or_else(|_| Self::Unrecognized(value.to_owned()))
    }

    /// Returns the permission when the tag is recognized.
    #[must_use]
    pub fn known(&self) -> Option<Permission> {
        match self {
            Self::Known(permission) => Some(*permission),
            Self::Unrecognized(_) | Self::Malformed(_) => None,
        }
    }
}

impl From<Value> for PermissionTag {
    fn from(value: Value) -> Self {
        match value {
            Value::String(tag) => Self::parse(&tag),
            other => Self::Malformed(other),
        }
    }
}

impl<'de> Deserialize<'de> for PermissionTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<Permission> for PermissionTag {
    fn from(value: Permission) -> Self {
        Self::Known(value)
    }
}
