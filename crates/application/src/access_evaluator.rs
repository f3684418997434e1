use std::sync::Arc;

use peopledesk_domain::{
    MenuSection, Permission, PermissionRequirement, Role, RolePermissionTable, RoleTag,
};

mod navigation;
mod permissions;

#[cfg(test)]
mod tests;

/// Stateless access predicates over an injected role permission table.
///
/// Every query is pure. Absent or malformed input resolves to a deny or an
/// empty result; nothing here returns an error or panics.
#[derive(Debug, Clone)]
pub struct AccessEvaluator {
    table: Arc<RolePermissionTable>,
}

impl AccessEvaluator {
    /// Creates an evaluator reading from the given table.
    #[must_use]
    pub fn new(table: Arc<RolePermissionTable>) -> Self {
        Self { table }
    }

    /// Creates an evaluator over the standard HR table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(RolePermissionTable::standard()))
    }

    /// Returns the table backing this evaluator.
    #[must_use]
    pub fn table(&self) -> &RolePermissionTable {
        &self.table
    }
}
