//! The dashboard navigation tree.
//!
//! The tree is the same for every user. Only its filtered view differs by
//! role (see [`super::resolve_navigation`]).

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::AccessError;
use crate::models::Permission;
use crate::permissions::RolePermissionMap;

use super::item::{MenuItem, PLACEHOLDER_PATH};

static MENU_TREE: LazyLock<Vec<MenuItem>> = LazyLock::new(build);

fn build() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("Dashboard", "/dashboard", Permission::Dashboard),
        MenuItem::leaf("Equipment", "/equipment", Permission::Equipment),
        MenuItem::group(
            "Maintenance",
            Permission::Maintenance,
            vec![
                MenuItem::leaf("Schedules", "/maintenance/schedules", Permission::Maintenance),
                MenuItem::leaf("Inspections", "/maintenance/inspections", Permission::Inspections),
                MenuItem::leaf("Tasks", "/maintenance/tasks", Permission::Tasks),
            ],
        ),
        MenuItem::group(
            "Calibrations",
            Permission::Calibrations,
            vec![
                MenuItem::leaf("Requests", "/calibrations/requests", Permission::Calibrations),
                MenuItem::leaf(
                    "Certificates",
                    "/calibrations/certificates",
                    Permission::Calibrations,
                ),
            ],
        ),
        MenuItem::group(
            "Reports",
            Permission::Reports,
            vec![
                MenuItem::leaf("Reports", "/reports", Permission::Reports),
                MenuItem::leaf("Global Reports", "/reports/global", Permission::GlobalReports),
            ],
        ),
        MenuItem::leaf("Monitoring", "/monitoring", Permission::Monitoring),
        MenuItem::group(
            "Tools",
            Permission::Tools,
            vec![
                MenuItem::leaf("QR & Barcode", "/tools/codes", Permission::Tools),
                MenuItem::leaf("Downloads", "/tools/downloads", Permission::Download),
            ],
        ),
        MenuItem::group(
            "Administration",
            Permission::CompanyManagement,
            vec![
                MenuItem::leaf("Companies", "/admin/companies", Permission::CompanyManagement),
                MenuItem::leaf("Users", "/admin/users", Permission::UserManagement),
                MenuItem::leaf("Settings", "/admin/settings", Permission::Settings),
            ],
        ),
    ]
}

/// The static navigation tree.
pub fn menu_tree() -> &'static [MenuItem] {
    &MENU_TREE
}

/// Check `items` against the registry.
///
/// - groups use the placeholder path; leaves have a label and a real path
/// - leaf paths are unique
/// - every referenced permission is granted to an ordinary role, or is one of
///   the [`SUPER_ROLE_ONLY`](crate::permissions::SUPER_ROLE_ONLY) permissions
pub fn validate_tree(items: &[MenuItem], registry: &RolePermissionMap) -> Result<(), AccessError> {
    let mut seen_paths = HashSet::new();
    validate_level(items, registry, &mut seen_paths)
}

fn validate_level<'a>(
    items: &'a [MenuItem],
    registry: &RolePermissionMap,
    seen_paths: &mut HashSet<&'a str>,
) -> Result<(), AccessError> {
    for item in items {
        if item.label.trim().is_empty() {
            return Err(AccessError::Defect(format!(
                "menu item at '{}' has no label",
                item.path
            )));
        }

        if !registry.is_reachable(item.permission) {
            return Err(AccessError::Defect(format!(
                "menu item '{}' requires '{}', which only the super role can reach",
                item.label, item.permission
            )));
        }

        if item.is_leaf() {
            if item.path.is_empty() || item.path == PLACEHOLDER_PATH {
                return Err(AccessError::Defect(format!(
                    "leaf menu item '{}' has no target path",
                    item.label
                )));
            }
            if !seen_paths.insert(item.path.as_str()) {
                return Err(AccessError::Defect(format!(
                    "menu path '{}' is used more than once",
                    item.path
                )));
            }
        } else {
            if item.path != PLACEHOLDER_PATH {
                return Err(AccessError::Defect(format!(
                    "menu group '{}' links to '{}' instead of its children",
                    item.label, item.path
                )));
            }
            validate_level(&item.children, registry, seen_paths)?;
        }
    }
    Ok(())
}
