//! Menu visibility resolution.
//!
//! [`is_menu_item_visible`] and [`visible_submenu_items`] are the plain rules
//! over a permission set. [`resolve_navigation`] is the entry point callers
//! use: it layers the [`AccessPolicy`] bypass in front of those rules.

use serde::Serialize;

use crate::models::Permission;
use crate::permissions::{AccessPolicy, PermissionSet};

use super::item::MenuItem;

/// Whether `item` should render for a caller holding `permissions`.
///
/// A leaf needs its own permission. A group is also visible when any direct
/// child's permission is held, so it can expose that child.
pub fn is_menu_item_visible(item: &MenuItem, permissions: &PermissionSet) -> bool {
    permissions.contains(&item.permission)
        || item
            .children
            .iter()
            .any(|child| permissions.contains(&child.permission))
}

/// The children whose own permission is held, in source order.
pub fn visible_submenu_items<'a>(
    children: &'a [MenuItem],
    permissions: &PermissionSet,
) -> Vec<&'a MenuItem> {
    children
        .iter()
        .filter(|child| permissions.contains(&child.permission))
        .collect()
}

/// Filtered, owned view of a menu item for one caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    pub permission: Permission,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    fn unfiltered(item: &MenuItem) -> Self {
        Self {
            label: item.label.clone(),
            path: item.path.clone(),
            permission: item.permission,
            children: item.children.iter().map(Self::unfiltered).collect(),
        }
    }

    /// Copy `item`, keeping only the held children at every depth.
    fn filtered(item: &MenuItem, permissions: &PermissionSet) -> Self {
        Self {
            label: item.label.clone(),
            path: item.path.clone(),
            permission: item.permission,
            children: visible_submenu_items(&item.children, permissions)
                .into_iter()
                .map(|child| Self::filtered(child, permissions))
                .collect(),
        }
    }
}

/// Whether `item` renders for `policy`, bypass included.
pub fn is_visible_for(policy: &AccessPolicy, item: &MenuItem) -> bool {
    policy.bypasses_checks() || is_menu_item_visible(item, policy.permissions())
}

/// The children of `item` that render for `policy`, bypass included.
pub fn visible_children_for<'a>(policy: &AccessPolicy, item: &'a MenuItem) -> Vec<&'a MenuItem> {
    if policy.bypasses_checks() {
        item.children.iter().collect()
    } else {
        visible_submenu_items(&item.children, policy.permissions())
    }
}

/// The part of `tree` that renders for `policy`, in source order.
pub fn resolve_navigation(policy: &AccessPolicy, tree: &[MenuItem]) -> Vec<NavItem> {
    if policy.bypasses_checks() {
        return tree.iter().map(NavItem::unfiltered).collect();
    }

    let permissions = policy.permissions();
    tree.iter()
        .filter(|item| is_menu_item_visible(item, permissions))
        .map(|item| NavItem::filtered(item, permissions))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::menu_tree;
    use crate::models::Role;
    use crate::permissions::{SUPER_ROLE, get_role_permissions};

    fn calibrations_item() -> MenuItem {
        MenuItem::group(
            "Calibrations",
            Permission::Calibrations,
            vec![MenuItem::leaf(
                "Requests",
                "/calibrations/requests",
                Permission::Calibrations,
            )],
        )
    }

    fn company_item() -> MenuItem {
        MenuItem::group(
            "Companies",
            Permission::CompanyManagement,
            vec![
                MenuItem::leaf("Users", "/admin/users", Permission::UserManagement),
                MenuItem::leaf("Settings", "/admin/settings", Permission::Settings),
            ],
        )
    }

    /// Every node of the shipped tree at every depth.
    fn all_items() -> Vec<&'static MenuItem> {
        fn walk<'a>(items: &'a [MenuItem], out: &mut Vec<&'a MenuItem>) {
            for item in items {
                out.push(item);
                walk(&item.children, out);
            }
        }
        let mut out = Vec::new();
        walk(menu_tree(), &mut out);
        out
    }

    #[test]
    fn operator_klien_does_not_see_calibrations() {
        let permissions = get_role_permissions(Role::OperatorKlien);
        assert!(!is_menu_item_visible(&calibrations_item(), &permissions));
    }

    #[test]
    fn parent_visible_through_child() {
        let permissions: PermissionSet = [Permission::Dashboard, Permission::UserManagement]
            .into_iter()
            .collect();
        let item = company_item();

        assert!(is_menu_item_visible(&item, &permissions));
        let children = visible_submenu_items(&item.children, &permissions);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].permission, Permission::UserManagement);
    }

    #[test]
    fn admin_klien_sees_company_parent_through_user_management() {
        let permissions = get_role_permissions(Role::AdminKlien);
        let item = company_item();

        assert!(!permissions.contains(&Permission::CompanyManagement));
        assert!(is_menu_item_visible(&item, &permissions));

        let labels: Vec<_> = visible_submenu_items(&item.children, &permissions)
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Users"]);
    }

    #[test]
    fn leaf_visibility_is_own_permission() {
        let leaf = MenuItem::leaf("Monitoring", "/monitoring", Permission::Monitoring);
        for &role in Role::ALL {
            let permissions = get_role_permissions(role);
            assert_eq!(
                is_menu_item_visible(&leaf, &permissions),
                permissions.contains(&Permission::Monitoring)
            );
        }
    }

    #[test]
    fn empty_submenu_behaves_as_leaf() {
        let item = MenuItem::group("Empty", Permission::Tools, Vec::new());
        let without: PermissionSet = [Permission::Dashboard].into_iter().collect();
        let with: PermissionSet = [Permission::Tools].into_iter().collect();
        assert!(!is_menu_item_visible(&item, &without));
        assert!(is_menu_item_visible(&item, &with));
    }

    #[test]
    fn parent_visibility_law_holds_for_every_role() {
        for &role in Role::ALL {
            let permissions = get_role_permissions(role);
            for item in all_items() {
                let expected = permissions.contains(&item.permission)
                    || item.children.iter().any(|c| permissions.contains(&c.permission));
                assert_eq!(
                    is_menu_item_visible(item, &permissions),
                    expected,
                    "role '{role}', item '{}'",
                    item.label
                );
            }
        }
    }

    #[test]
    fn submenu_filter_law_holds_for_every_role() {
        for &role in Role::ALL {
            let permissions = get_role_permissions(role);
            for item in all_items() {
                let filtered = visible_submenu_items(&item.children, &permissions);
                let expected: Vec<&MenuItem> = item
                    .children
                    .iter()
                    .filter(|c| permissions.contains(&c.permission))
                    .collect();
                assert_eq!(filtered, expected);
            }
        }
    }

    #[test]
    fn submenu_filter_preserves_order() {
        let children = vec![
            MenuItem::leaf("C", "/c", Permission::Tasks),
            MenuItem::leaf("A", "/a", Permission::Reports),
            MenuItem::leaf("B", "/b", Permission::Tasks),
            MenuItem::leaf("D", "/d", Permission::Dashboard),
        ];
        let permissions: PermissionSet = [Permission::Tasks, Permission::Dashboard]
            .into_iter()
            .collect();

        let labels: Vec<_> = visible_submenu_items(&children, &permissions)
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["C", "B", "D"]);
    }

    #[test]
    fn empty_permission_set_hides_everything() {
        let permissions = PermissionSet::new();
        for item in all_items() {
            assert!(!is_menu_item_visible(item, &permissions));
            assert!(visible_submenu_items(&item.children, &permissions).is_empty());
        }
    }

    #[test]
    fn super_role_sees_full_tree() {
        let policy = AccessPolicy::for_role(SUPER_ROLE);
        for item in all_items() {
            assert!(is_visible_for(&policy, item));
            assert_eq!(visible_children_for(&policy, item).len(), item.children.len());
        }

        let nav = resolve_navigation(&policy, menu_tree());
        let full: Vec<NavItem> = menu_tree().iter().map(NavItem::unfiltered).collect();
        assert_eq!(nav, full);
    }

    #[test]
    fn bypass_ignores_permission_set() {
        // global reports belong to the super role alone
        let item = MenuItem::leaf("Hidden", "/hidden", Permission::GlobalReports);
        let policy = AccessPolicy::for_role(SUPER_ROLE);
        assert!(is_visible_for(&policy, &item));

        for &role in Role::ALL.iter().filter(|&&r| r != SUPER_ROLE) {
            let policy = AccessPolicy::for_role(role);
            assert!(!is_visible_for(&policy, &item), "'{role}' sees global reports");
        }
    }

    #[test]
    fn resolve_navigation_for_teknisi() {
        let nav = resolve_navigation(&AccessPolicy::for_role(Role::Teknisi), menu_tree());
        let labels: Vec<_> = nav.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Dashboard", "Equipment", "Maintenance"]);

        let maintenance = &nav[2];
        let children: Vec<_> = maintenance.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(children, vec!["Schedules", "Inspections", "Tasks"]);
    }

    #[test]
    fn resolve_navigation_for_admin_klien() {
        let nav = resolve_navigation(&AccessPolicy::for_role(Role::AdminKlien), menu_tree());
        let admin = nav
            .iter()
            .find(|n| n.label == "Administration")
            .expect("administration group");
        let children: Vec<_> = admin.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(children, vec!["Users"]);

        let reports = nav.iter().find(|n| n.label == "Reports").expect("reports group");
        assert_eq!(reports.children.len(), 1);
        assert_eq!(reports.children[0].path, "/reports");
    }

    fn nested_tools_tree() -> Vec<MenuItem> {
        vec![MenuItem::group(
            "Tools",
            Permission::Tools,
            vec![
                MenuItem::leaf("Codes", "/tools/codes", Permission::Tools),
                MenuItem::group(
                    "Downloads",
                    Permission::Download,
                    vec![
                        MenuItem::leaf("Exports", "/tools/downloads/exports", Permission::Download),
                        MenuItem::leaf("Global", "/tools/downloads/global", Permission::GlobalReports),
                    ],
                ),
            ],
        )]
    }

    fn contains_permission(items: &[NavItem], permission: Permission) -> bool {
        items
            .iter()
            .any(|n| n.permission == permission || contains_permission(&n.children, permission))
    }

    #[test]
    fn nested_children_are_filtered_at_every_depth() {
        let tree = nested_tools_tree();
        let nav = resolve_navigation(&AccessPolicy::for_role(Role::AdminKlien), &tree);

        assert_eq!(nav.len(), 1);
        let downloads = &nav[0].children;
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].label, "Downloads");
        let leaves: Vec<_> = downloads[0].children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(leaves, vec!["Exports"]);
        assert!(!contains_permission(&nav, Permission::GlobalReports));

        let full = resolve_navigation(&AccessPolicy::for_role(SUPER_ROLE), &tree);
        assert!(contains_permission(&full, Permission::GlobalReports));
    }

    #[test]
    fn resolved_tree_holds_only_granted_permissions() {
        for &role in Role::ALL.iter().filter(|&&r| r != SUPER_ROLE) {
            let policy = AccessPolicy::for_role(role);
            let nav = resolve_navigation(&policy, menu_tree());
            for item in nav.iter().flat_map(|n| n.children.iter()) {
                assert!(
                    policy.permits(item.permission),
                    "role '{role}' sees '{}'",
                    item.label
                );
            }
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        for &role in Role::ALL {
            let policy = AccessPolicy::for_role(role);
            assert_eq!(
                resolve_navigation(&policy, menu_tree()),
                resolve_navigation(&policy, menu_tree())
            );
            for item in all_items() {
                let permissions = policy.permissions();
                assert_eq!(
                    is_menu_item_visible(item, permissions),
                    is_menu_item_visible(item, permissions)
                );
                assert_eq!(
                    visible_submenu_items(&item.children, permissions),
                    visible_submenu_items(&item.children, permissions)
                );
            }
        }
    }
}
