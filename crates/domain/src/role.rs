use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use peopledesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Closed set of user roles known to the HR application.
///
/// Roles order by seniority: `SuperAdmin` is the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Unrestricted administrator.
    SuperAdmin,
    /// Head of HR.
    HrManager,
    /// HR operations staff.
    HrCoordinator,
    /// People manager with direct reports.
    Manager,
    /// Regular employee using self-service.
    Employee,
    /// Talent acquisition staff.
    Recruiter,
}

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::HrManager => "hr_manager",
            Self::HrCoordinator => "hr_coordinator",
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Recruiter => "recruiter",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::SuperAdmin,
            Role::HrManager,
            Role::HrCoordinator,
            Role::Manager,
            Role::Employee,
            Role::Recruiter,
        ];

        ALL
    }

    /// Returns the seniority weight of this role.
    ///
    /// Higher is more senior. Callers compare levels; no comparison policy
    /// lives here.
    #[must_use]
    pub fn level(&self) -> u8 {
        match self {
            Self::SuperAdmin => 6,
            Self::HrManager => 5,
            Self::HrCoordinator => 4,
            Self::Manager => 3,
            Self::Recruiter => 2,
            Self::Employee => 1,
        }
    }

    /// Parses a transport value into a role.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }

    /// Recognizes a role tag received from an untyped source.
    ///
    /// Absent, blank, and unknown tags all yield `None`.
    #[must_use]
    pub fn recognize(value: Option<&str>) -> Option<Self> {
        RoleTag::from_claim(value).and_then(|tag| tag.known())
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level().cmp(&other.level())
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "super_admin" => Ok(Self::SuperAdmin),
            "hr_manager" => Ok(Self::HrManager),
            "hr_coordinator" => Ok(Self::HrCoordinator),
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            "recruiter" => Ok(Self::Recruiter),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

/// A role claim as it arrives from outside the type-checked boundary.
///
/// Distinguishes an unrecognized but present claim from an absent one; both
/// hold no permissions, but only an absent claim counts as unauthenticated.
/// Built only through [`RoleTag::from_claim`] or from a [`Role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleTag {
    /// A role from the closed set.
    Known(Role),
    /// A non-blank tag outside the closed set.
    Unrecognized(String),
}

impl RoleTag {
    /// Interprets a raw claim. Absent and blank claims yield `None`.
    #[must_use]
    pub fn from_claim(value: Option<&str>) -> Option<Self> {
        let trimmed = value?.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(
            Role::from_str(trimmed)
                .map(Self::Known)
                .unwrap_or_else(|_| Self::Unrecognized(trimmed.to_owned())),
        )
    }

    /// Returns the role when the tag is recognized.
    #[must_use]
    pub fn known(&self) -> Option<Role> {
        match self {
            Self::Known(role) => Some(*role),
            Self::Unrecognized(_) => None,
        }
    }

    /// Returns the tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(role) => role.as_str(),
            Self::Unrecognized(value) => value.as_str(),
        }
    }
}

impl From<Role> for RoleTag {
    fn from(value: Role) -> Self {
        Self::Known(value)
    }
}

/// Returns the seniority weight for an optional role, or zero when absent.
#[must_use]
pub fn role_level(role: Option<Role>) -> u8 {
    role.map(|value| value.level()).unwrap_or(0)
}
