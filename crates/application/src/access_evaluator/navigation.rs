use super::*;

impl AccessEvaluator {
    /// Returns the menu sections visible to a role.
    ///
    /// Items without a requirement are visible to any present role, including
    /// unrecognized ones. Ordering of sections and items is preserved and
    /// sections left without items are dropped. An absent role or menu yields
    /// no sections.
    #[must_use]
    pub fn filter_menu_by_role(
        &self,
        sections: Option<&[MenuSection]>,
        role: Option<&RoleTag>,
    ) -> Vec<MenuSection> {
        let (Some(sections), Some(role)) = (sections, role) else {
            return Vec::new();
        };
        let role = role.known();

        let mut filtered_sections = Vec::with_capacity(sections.len());
        for section in sections {
            let visible_items: Vec<_> = section
                .items()
                .iter()
                .filter(|item| self.can_access_route(role, item.required_permission()))
                .cloned()
                .collect();

            if !visible_items.is_empty() {
                filtered_sections.push(section.with_items(visible_items));
            }
        }

        filtered_sections
    }
}
