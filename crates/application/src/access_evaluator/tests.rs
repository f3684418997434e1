use std::sync::Arc;

use peopledesk_domain::{
    MenuItem, MenuSection, Permission, PermissionRequirement, PermissionTag, Role,
    RolePermissionTable, RoleTag,
};
use proptest::prelude::*;
use serde_json::json;

use super::AccessEvaluator;

fn menu_item(label: &str, required: Option<PermissionRequirement>) -> MenuItem {
    MenuItem::new(label, format!("/{}", label.to_lowercase()), required)
        .unwrap_or_else(|error| panic!("menu item '{label}' should build: {error}"))
}

fn menu_section(title: &str, items: Vec<MenuItem>) -> MenuSection {
    MenuSection::new(title, items)
        .unwrap_or_else(|error| panic!("menu section '{title}' should build: {error}"))
}

fn employee() -> RoleTag {
    RoleTag::Known(Role::Employee)
}

fn labels(sections: &[MenuSection]) -> Vec<Vec<String>> {
    sections
        .iter()
        .map(|section| {
            section
                .items()
                .iter()
                .map(|item| item.label().unwrap_or_default().to_owned())
                .collect()
        })
        .collect()
}

#[test]
fn employee_can_apply_leave_but_not_delete_employees() {
    let evaluator = AccessEvaluator::standard();

    assert!(evaluator.has_permission(Some(Role::Employee), Some(Permission::ApplyLeave)));
    assert!(!evaluator.has_permission(Some(Role::Employee), Some(Permission::DeleteEmployee)));
}

#[test]
fn role_permissions_match_table_exactly() {
    let evaluator = AccessEvaluator::standard();

    for role in Role::all() {
        let granted = evaluator.permissions_for(Some(*role));
        for permission in Permission::all() {
            assert_eq!(
                evaluator.has_permission(Some(*role), Some(*permission)),
                granted.contains(permission),
                "{role} / {permission}"
            );
        }
    }
}

#[test]
fn absent_or_unknown_inputs_deny() {
    let evaluator = AccessEvaluator::standard();

    for permission in Permission::all() {
        assert!(!evaluator.has_permission(None, Some(*permission)));
        assert!(!evaluator.has_permission(Role::recognize(Some("not_a_role")), Some(*permission)));
    }
    for role in Role::all() {
        assert!(!evaluator.has_permission(Some(*role), None));
    }
    assert!(evaluator.permissions_for(None).is_empty());
}

#[test]
fn vacuous_cases_keep_opposite_conventions() {
    let evaluator = AccessEvaluator::standard();

    for role in Role::all() {
        assert!(!evaluator.has_any_permission(Some(*role), &[]));
        assert!(evaluator.has_all_permissions(Some(*role), &[]));
    }
    assert!(!evaluator.has_any_permission(None, &[]));
    assert!(evaluator.has_all_permissions(None, &[]));
}

#[test]
fn super_admin_covers_every_permission_used_by_other_roles() {
    let evaluator = AccessEvaluator::standard();

    for role in Role::all().iter().filter(|role| **role != Role::SuperAdmin) {
        for permission in evaluator.permissions_for(Some(*role)) {
            assert!(evaluator.has_permission(Some(Role::SuperAdmin), Some(permission)));
        }
    }
    assert!(evaluator.has_all_permissions(Some(Role::SuperAdmin), Permission::all()));
}

#[test]
fn public_routes_admit_everyone() {
    let evaluator = AccessEvaluator::standard();

    assert!(evaluator.can_access_route(None, None));
    assert!(evaluator.can_access_route(Role::recognize(Some("contractor")), None));
    for role in Role::all() {
        assert!(evaluator.can_access_route(Some(*role), None));
    }
}

#[test]
fn route_requirements_use_any_of_semantics() {
    let evaluator = AccessEvaluator::standard();
    let payroll_or_leave =
        PermissionRequirement::any_of([Permission::ManagePayroll, Permission::ApproveLeave]);

    assert!(evaluator.can_access_route(Some(Role::Manager), Some(&payroll_or_leave)));
    assert!(!evaluator.can_access_route(Some(Role::Employee), Some(&payroll_or_leave)));
    assert!(!evaluator.can_access_route(
        Some(Role::Manager),
        Some(&PermissionRequirement::AnyOf(Vec::new()))
    ));
}

#[test]
fn unrecognized_permission_tags_deny_without_blocking_others() {
    let evaluator = AccessEvaluator::standard();
    let requirement = PermissionRequirement::AnyOf(vec![
        PermissionTag::Unrecognized("approve_everything".to_owned()),
        PermissionTag::Known(Permission::ApplyLeave),
    ]);

    assert!(evaluator.can_access_route(Some(Role::Employee), Some(&requirement)));
    assert!(!evaluator.can_access_route(
        Some(Role::SuperAdmin),
        Some(&PermissionRequirement::Single(PermissionTag::Unrecognized(
            "approve_everything".to_owned()
        )))
    ));
}

#[test]
fn non_string_list_entries_do_not_block_other_entries() {
    let evaluator = AccessEvaluator::standard();
    let leave: PermissionRequirement = serde_json::from_value(json!([null, "apply_leave"]))
        .unwrap_or_else(|error| panic!("requirement should parse: {error}"));
    let payroll: PermissionRequirement = serde_json::from_value(json!(["view_payroll", 1]))
        .unwrap_or_else(|error| panic!("requirement should parse: {error}"));

    assert!(evaluator.can_access_route(Some(Role::Employee), Some(&leave)));
    assert_eq!(
        evaluator.can_access_route(Some(Role::Employee), Some(&leave)),
        evaluator.has_any_permission(Some(Role::Employee), &[Permission::ApplyLeave])
    );
    assert!(evaluator.can_access_route(Some(Role::SuperAdmin), Some(&payroll)));
    assert!(!evaluator.can_access_route(Some(Role::Employee), Some(&payroll)));
    assert!(!evaluator.can_access_route(
        Some(Role::SuperAdmin),
        Some(&PermissionRequirement::AnyOf(vec![PermissionTag::Malformed(json!(null))]))
    ));
}

#[test]
fn malformed_requirements_deny_even_super_admin() {
    let evaluator = AccessEvaluator::standard();
    let requirement = PermissionRequirement::Malformed(json!({"permission": "apply_leave"}));

    assert!(!evaluator.can_access_route(Some(Role::SuperAdmin), Some(&requirement)));
}

#[test]
fn role_levels_follow_hierarchy() {
    let evaluator = AccessEvaluator::standard();
    let levels: Vec<u8> = [
        Some(Role::SuperAdmin),
        Some(Role::HrManager),
        Some(Role::HrCoordinator),
        Some(Role::Manager),
        Some(Role::Recruiter),
        Some(Role::Employee),
        Role::recognize(Some("unknown_role")),
    ]
    .into_iter()
    .map(|role| evaluator.role_level(role))
    .collect();

    assert_eq!(levels, vec![6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn employee_menu_keeps_only_unrestricted_item() {
    let evaluator = AccessEvaluator::standard();
    let menu = vec![menu_section(
        "Administration",
        vec![
            menu_item(
                "Settings",
                Some(PermissionRequirement::single(Permission::ManageSettings)),
            ),
            menu_item("Directory", None),
        ],
    )];

    let filtered = evaluator.filter_menu_by_role(Some(menu.as_slice()), Some(&employee()));

    assert_eq!(labels(&filtered), vec![vec!["Directory".to_owned()]]);
    assert_eq!(filtered[0].title(), Some("Administration"));
}

#[test]
fn menu_filter_drops_empty_sections_and_preserves_order() {
    let evaluator = AccessEvaluator::standard();
    let menu = vec![
        menu_section(
            "Self service",
            vec![
                menu_item("Leave", Some(PermissionRequirement::single(Permission::ApplyLeave))),
                menu_item("Payslips", Some(PermissionRequirement::single(Permission::ViewOwnPayslip))),
                menu_item("Home", None),
            ],
        ),
        menu_section(
            "Payroll",
            vec![menu_item(
                "Runs",
                Some(PermissionRequirement::any_of([
                    Permission::ViewPayroll,
                    Permission::ManagePayroll,
                ])),
            )],
        ),
        menu_section(
            "Team",
            vec![
                menu_item("Approvals", Some(PermissionRequirement::single(Permission::ApproveLeave))),
                menu_item(
                    "Timesheets",
                    Some(PermissionRequirement::any_of([
                        Permission::ApproveTimesheets,
                        Permission::ManagePayroll,
                    ])),
                ),
            ],
        ),
    ];
    let snapshot = menu.clone();

    let employee_menu = evaluator.filter_menu_by_role(Some(menu.as_slice()), Some(&employee()));
    assert_eq!(
        labels(&employee_menu),
        vec![vec!["Leave".to_owned(), "Payslips".to_owned(), "Home".to_owned()]]
    );

    let manager_menu =
        evaluator.filter_menu_by_role(Some(menu.as_slice()), Some(&RoleTag::Known(Role::Manager)));
    assert_eq!(
        manager_menu
            .iter()
            .map(|section| section.title().unwrap_or_default())
            .collect::<Vec<_>>(),
        vec!["Self service", "Team"]
    );
    assert_eq!(
        labels(&manager_menu)[1],
        vec!["Approvals".to_owned(), "Timesheets".to_owned()]
    );

    assert_eq!(menu, snapshot);
}

#[test]
fn menu_filter_requires_role_and_menu() {
    let evaluator = AccessEvaluator::standard();
    let menu = vec![menu_section("General", vec![menu_item("Home", None)])];

    assert!(evaluator.filter_menu_by_role(Some(menu.as_slice()), None).is_empty());
    assert!(evaluator.filter_menu_by_role(None, Some(&employee())).is_empty());
}

#[test]
fn unrecognized_role_sees_only_public_items() {
    let evaluator = AccessEvaluator::standard();
    let menu = vec![menu_section(
        "General",
        vec![
            menu_item("Home", None),
            menu_item("Leave", Some(PermissionRequirement::single(Permission::ApplyLeave))),
        ],
    )];
    let contractor = RoleTag::Unrecognized("contractor".to_owned());

    let filtered = evaluator.filter_menu_by_role(Some(menu.as_slice()), Some(&contractor));

    assert_eq!(labels(&filtered), vec![vec!["Home".to_owned()]]);
}

#[test]
fn menu_from_ui_json_is_filtered_with_wire_shapes() {
    let evaluator = AccessEvaluator::standard();
    let menu: Result<Vec<MenuSection>, _> = serde_json::from_value(json!([
        {
            "title": "Recruitment",
            "items": [
                {"label": "Jobs", "path": "/jobs", "requiredPermission": ["manage_jobs", "view_jobs"]},
                {"label": "Candidates", "path": "/candidates", "requiredPermission": "manage_candidates"},
                {"label": "Broken", "path": "/broken", "requiredPermission": {"any": ["view_jobs"]}}
            ]
        }
    ]));
    let menu = menu.unwrap_or_else(|error| panic!("menu should parse: {error}"));

    let employee_menu = evaluator.filter_menu_by_role(Some(menu.as_slice()), Some(&employee()));
    let recruiter_menu =
        evaluator.filter_menu_by_role(Some(menu.as_slice()), Some(&RoleTag::Known(Role::Recruiter)));

    assert_eq!(labels(&employee_menu), vec![vec!["Jobs".to_owned()]]);
    assert_eq!(
        labels(&recruiter_menu),
        vec![vec!["Jobs".to_owned(), "Candidates".to_owned()]]
    );
}

#[test]
fn injected_table_replaces_standard_grants() {
    let table = RolePermissionTable::from_grants([
        (Role::HrManager, vec![Permission::ViewReports]),
        (Role::HrCoordinator, vec![Permission::ViewReports]),
        (Role::Manager, vec![Permission::ViewReports]),
        (Role::Employee, vec![Permission::ViewReports]),
        (Role::Recruiter, vec![Permission::ViewReports]),
    ])
    .unwrap_or_else(|error| panic!("table should build: {error}"));
    let evaluator = AccessEvaluator::new(Arc::new(table));

    assert!(evaluator.has_permission(Some(Role::Employee), Some(Permission::ViewReports)));
    assert!(!evaluator.has_permission(Some(Role::Employee), Some(Permission::ApplyLeave)));
    assert!(evaluator.has_permission(Some(Role::SuperAdmin), Some(Permission::ApplyLeave)));
}

#[test]
fn evaluator_is_shared_across_threads() {
    let evaluator = AccessEvaluator::standard();

    std::thread::scope(|scope| {
        for role in Role::all() {
            let evaluator = evaluator.clone();
            scope.spawn(move || {
                assert!(evaluator.has_permission(Some(*role), Some(Permission::ViewOwnProfile)));
            });
        }
    });
}

fn any_role() -> impl Strategy<Value = Option<Role>> {
    prop::option::of(prop::sample::select(Role::all()))
}

fn any_permissions() -> impl Strategy<Value = Vec<Permission>> {
    prop::collection::vec(prop::sample::select(Permission::all()), 0..6)
}

fn any_requirement() -> impl Strategy<Value = Option<PermissionRequirement>> {
    prop_oneof![
        Just(None),
        prop::sample::select(Permission::all())
            .prop_map(|permission| Some(PermissionRequirement::single(permission))),
        any_permissions().prop_map(|permissions| Some(PermissionRequirement::any_of(permissions))),
    ]
}

proptest! {
    #[test]
    fn all_implies_any_for_non_empty_lists(role in any_role(), permissions in any_permissions()) {
        let evaluator = AccessEvaluator::standard();
        if !permissions.is_empty() && evaluator.has_all_permissions(role, &permissions) {
            prop_assert!(evaluator.has_any_permission(role, &permissions));
        }
    }

    #[test]
    fn route_access_delegates_to_permission_checks(
        role in any_role(),
        permission in prop::sample::select(Permission::all()),
        permissions in any_permissions(),
    ) {
        let evaluator = AccessEvaluator::standard();

        prop_assert_eq!(
            evaluator.can_access_route(role, Some(&PermissionRequirement::single(permission))),
            evaluator.has_permission(role, Some(permission))
        );
        prop_assert_eq!(
            evaluator.can_access_route(
                role,
                Some(&PermissionRequirement::any_of(permissions.iter().copied()))
            ),
            evaluator.has_any_permission(role, &permissions)
        );
    }

    #[test]
    fn menu_filter_never_emits_empty_sections_or_reorders(
        role in prop::sample::select(Role::all()),
        shape in prop::collection::vec(prop::collection::vec(any_requirement(), 0..5), 0..5),
    ) {
        let evaluator = AccessEvaluator::standard();
        let menu: Vec<MenuSection> = shape
            .into_iter()
            .enumerate()
            .map(|(section_index, requirements)| {
                let items = requirements
                    .into_iter()
                    .enumerate()
                    .map(|(item_index, required)| {
                        menu_item(&format!("Item{section_index}x{item_index}"), required)
                    })
                    .collect();
                menu_section(&format!("Section{section_index}"), items)
            })
            .collect();
        let snapshot = menu.clone();

        let filtered = evaluator.filter_menu_by_role(Some(menu.as_slice()), Some(&RoleTag::Known(role)));

        prop_assert_eq!(&menu, &snapshot);
        let mut cursor = 0;
        for section in &filtered {
            prop_assert!(!section.items().is_empty());
            let source_index = menu[cursor..]
                .iter()
                .position(|candidate| candidate.title() == section.title())
                .map(|offset| cursor + offset);
            prop_assert!(source_index.is_some());
            let source = &menu[source_index.unwrap_or_default()];
            cursor = source_index.unwrap_or_default() + 1;

            let mut item_cursor = 0;
            for item in section.items() {
                let offset = source.items()[item_cursor..]
                    .iter()
                    .position(|candidate| candidate == item);
                prop_assert!(offset.is_some());
                item_cursor += offset.unwrap_or_default() + 1;
                prop_assert!(evaluator.can_access_route(Some(role), item.required_permission()));
            }
        }
    }
}
