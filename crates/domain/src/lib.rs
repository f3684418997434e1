//! Domain entities and invariants for role-based access control.

#![forbid(unsafe_code)]

mod navigation;
mod role;
mod role_permissions;
mod security;

pub use navigation::{MenuItem, MenuSection, PermissionRequirement};
pub use role::{Role, RoleTag, role_level};
pub use role_permissions::RolePermissionTable;
pub use security::{Permission, PermissionDomain, PermissionTag};
