use std::fs;
use std::path::Path;

use peopledesk_core::{AppError, AppResult};
use peopledesk_domain::{MenuItem, MenuSection, Permission, PermissionRequirement};

/// Loads the navigation menu from a JSON file, or the built-in menu when no
/// path is configured.
pub fn load_navigation(path: Option<&Path>) -> AppResult<Vec<MenuSection>> {
    let Some(path) = path else {
        return default_navigation();
    };

    let contents = fs::read_to_string(path).map_err(|error| {
        AppError::Internal(format!(
            "failed to read navigation menu '{}': {error}",
            path.display()
        ))
    })?;

    parse_navigation(&contents).map_err(|error| match error {
        AppError::Validation(message) => {
            AppError::Validation(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

pub fn parse_navigation(contents: &str) -> AppResult<Vec<MenuSection>> {
    serde_json::from_str(contents)
        .map_err(|error| AppError::Validation(format!("invalid navigation menu: {error}")))
}

/// Built-in HR navigation menu.
pub fn default_navigation() -> AppResult<Vec<MenuSection>> {
    use Permission as P;

    let single = |permission| Some(PermissionRequirement::single(permission));
    let any_of = |permissions: &[Permission]| {
        Some(PermissionRequirement::any_of(permissions.iter().copied()))
    };

    Ok(vec![
        MenuSection::new(
            "Overview",
            vec![
                MenuItem::new("Dashboard", "/dashboard", None)?.with_icon("home"),
                MenuItem::new("My Profile", "/profile", single(P::ViewOwnProfile))?
                    .with_icon("user"),
            ],
        )?,
        MenuSection::new(
            "People",
            vec![
                MenuItem::new(
                    "Employees",
                    "/employees",
                    any_of(&[P::ViewAllEmployees, P::ViewTeamEmployees]),
                )?
                .with_icon("users"),
                MenuItem::new("Departments", "/departments", single(P::ViewDepartments))?
                    .with_icon("building"),
                MenuItem::new("Onboarding", "/onboarding", single(P::ManageOnboarding))?,
                MenuItem::new("Offboarding", "/offboarding", single(P::ManageOffboarding))?,
            ],
        )?,
        MenuSection::new(
            "Time",
            vec![
                MenuItem::new(
                    "Attendance",
                    "/attendance",
                    any_of(&[P::ViewOwnAttendance, P::ViewTeamAttendance]),
                )?
                .with_icon("clock"),
                MenuItem::new("Leave", "/leave", single(P::ViewOwnLeaves))?.with_icon("calendar"),
                MenuItem::new("Leave Approvals", "/leave/approvals", single(P::ApproveLeave))?,
                MenuItem::new("Timesheets", "/timesheets", single(P::SubmitTimesheet))?,
            ],
        )?,
        MenuSection::new(
            "Recruitment",
            vec![
                MenuItem::new("Jobs", "/jobs", single(P::ViewJobs))?.with_icon("briefcase"),
                MenuItem::new("Candidates", "/candidates", single(P::ViewCandidates))?,
                MenuItem::new("Interviews", "/interviews", single(P::ScheduleInterviews))?,
            ],
        )?,
        MenuSection::new(
            "Compensation",
            vec![
                MenuItem::new("Payroll", "/payroll", single(P::ViewPayroll))?.with_icon("wallet"),
                MenuItem::new("My Payslips", "/payslips", single(P::ViewOwnPayslip))?,
            ],
        )?,
        MenuSection::new(
            "Growth",
            vec![
                MenuItem::new(
                    "Performance",
                    "/performance",
                    any_of(&[P::ViewOwnPerformance, P::ViewTeamPerformance]),
                )?,
                MenuItem::new("Trainings", "/trainings", single(P::ViewTrainings))?,
                MenuItem::new("Projects", "/projects", single(P::ViewProjects))?,
                MenuItem::new("Assets", "/assets", single(P::ViewOwnAssets))?,
            ],
        )?,
        MenuSection::new(
            "Insights",
            vec![
                MenuItem::new("Analytics", "/analytics", single(P::ViewAnalytics))?
                    .with_icon("chart"),
                MenuItem::new("Reports", "/reports", single(P::ViewReports))?,
            ],
        )?,
        MenuSection::new(
            "Administration",
            vec![
                MenuItem::new("Settings", "/settings", single(P::ManageSettings))?
                    .with_icon("settings"),
                MenuItem::new("Roles", "/settings/roles", single(P::ManageRoles))?,
                MenuItem::new("Audit Log", "/audit-log", single(P::ViewAuditLog))?,
            ],
        )?,
    ])
}
