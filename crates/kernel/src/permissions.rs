//! Role permission registry and access policy.
//!
//! The registry is a process-wide constant built on first use. It maps every
//! [`Role`] to the set of [`Permission`]s it is granted and exposes no
//! mutation API.
//!
//! The super-admin bypass is deliberately not folded into the table. It lives
//! in [`AccessPolicy`], which is the only place that decides who skips
//! permission checks.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use tracing::debug;

use crate::error::AccessError;
use crate::models::{Permission, Role};

/// Set of permissions granted to a role.
pub type PermissionSet = HashSet<Permission>;

/// The role that bypasses every permission check.
pub const SUPER_ROLE: Role = Role::SuperAdmin;

/// Permissions only the super role holds.
///
/// Menu items may require these even though no ordinary role is granted
/// them; any other permission granted to no ordinary role is a dead entry.
pub const SUPER_ROLE_ONLY: &[Permission] =
    &[Permission::GlobalReports, Permission::CompanyManagement];

/// Permissions granted to each role.
///
/// The match is exhaustive, so adding a role without deciding its grants does
/// not compile.
fn role_grants(role: Role) -> &'static [Permission] {
    use Permission::*;

    match role {
        Role::SuperAdmin => Permission::ALL,
        Role::AdminMitra => &[
            Dashboard,
            Equipment,
            Maintenance,
            Inspections,
            Calibrations,
            Reports,
            Monitoring,
            Tools,
            Download,
            UserManagement,
            Settings,
            Tasks,
        ],
        Role::AdminKalibrasi => &[
            Dashboard,
            Equipment,
            Calibrations,
            Reports,
            Monitoring,
            Download,
            UserManagement,
            Tasks,
        ],
        Role::AdminPenyedia => &[
            Dashboard,
            Equipment,
            Maintenance,
            Inspections,
            Reports,
            Download,
            UserManagement,
            Settings,
        ],
        Role::AdminKlien => &[
            Dashboard,
            Equipment,
            Maintenance,
            Calibrations,
            Reports,
            Download,
            UserManagement,
        ],
        Role::OperatorKlien => &[Dashboard, Equipment],
        Role::TeknisiMitra => &[Dashboard, Equipment, Maintenance, Inspections, Tools, Tasks],
        Role::Kalibrator => &[Dashboard, Equipment, Calibrations, Tools, Tasks],
        Role::Teknisi => &[Dashboard, Equipment, Maintenance, Inspections, Tasks],
        Role::Operator => &[Dashboard, Equipment, Monitoring],
        Role::Spv => &[
            Dashboard,
            Equipment,
            Maintenance,
            Inspections,
            Calibrations,
            Reports,
            Monitoring,
            Download,
            Tasks,
        ],
    }
}

static REGISTRY: LazyLock<RolePermissionMap> = LazyLock::new(RolePermissionMap::build);

/// Immutable role → permission-set table.
#[derive(Debug)]
pub struct RolePermissionMap {
    grants: HashMap<Role, PermissionSet>,
}

impl RolePermissionMap {
    fn build() -> Self {
        let grants = Role::ALL
            .iter()
            .map(|&role| (role, role_grants(role).iter().copied().collect()))
            .collect();

        Self { grants }
    }

    /// Build a table from explicit grants.
    pub fn from_grants(grants: HashMap<Role, PermissionSet>) -> Self {
        Self { grants }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Permissions granted to `role`.
    ///
    /// Returns the empty set for a role with no entry, which cannot happen
    /// for a registry that passes [`validate`](Self::validate).
    pub fn permissions(&self, role: Role) -> PermissionSet {
        self.grants.get(&role).cloned().unwrap_or_default()
    }

    /// Whether `role` is granted `permission`.
    pub fn grants(&self, role: Role, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .is_some_and(|set| set.contains(&permission))
    }

    /// Whether a role other than [`SUPER_ROLE`] is granted `permission`.
    ///
    /// The super role's entry is ignored so it cannot mask dead permissions.
    pub fn is_granted_to_ordinary_role(&self, permission: Permission) -> bool {
        self.grants
            .iter()
            .any(|(&role, set)| role != SUPER_ROLE && set.contains(&permission))
    }

    /// Whether a menu item may require `permission`.
    ///
    /// True when an ordinary role holds it or it is listed in
    /// [`SUPER_ROLE_ONLY`].
    pub fn is_reachable(&self, permission: Permission) -> bool {
        SUPER_ROLE_ONLY.contains(&permission) || self.is_granted_to_ordinary_role(permission)
    }

    /// Check the table for defects.
    ///
    /// - every role has an entry and a display name
    /// - the super role holds every [`SUPER_ROLE_ONLY`] permission
    /// - no ordinary role holds a [`SUPER_ROLE_ONLY`] permission
    pub fn validate(&self) -> Result<(), AccessError> {
        for &role in Role::ALL {
            if !self.grants.contains_key(&role) {
                return Err(AccessError::Defect(format!(
                    "role '{role}' has no permission entry"
                )));
            }
            if role.display_name().trim().is_empty() {
                return Err(AccessError::Defect(format!(
                    "role '{role}' has no display name"
                )));
            }
        }

        for &permission in SUPER_ROLE_ONLY {
            if !self.grants(SUPER_ROLE, permission) {
                return Err(AccessError::Defect(format!(
                    "super role is missing '{permission}'"
                )));
            }
            if self.is_granted_to_ordinary_role(permission) {
                return Err(AccessError::Defect(format!(
                    "'{permission}' is listed as super-role only but an ordinary role holds it"
                )));
            }
        }
        Ok(())
    }
}

/// Permissions granted to `role`.
pub fn get_role_permissions(role: Role) -> PermissionSet {
    RolePermissionMap::global().permissions(role)
}

/// Permissions for a role given by machine name.
///
/// Unrecognized names resolve to the empty set so callers can still render a
/// "no access" view.
pub fn role_permissions_by_name(name: &str) -> PermissionSet {
    match name.parse::<Role>() {
        Ok(role) => get_role_permissions(role),
        Err(e) => {
            debug!(error = %e, "resolving unknown role to empty permission set");
            PermissionSet::new()
        }
    }
}

/// Whether `role` is granted `permission` by the registry.
///
/// Does not apply the super-role bypass; use [`AccessPolicy::permits`] at
/// call sites that gate pages or actions.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    RolePermissionMap::global().grants(role, permission)
}

/// Presentation label for `role`.
pub fn display_name(role: Role) -> &'static str {
    role.display_name()
}

/// Resolved access decision-maker for one caller.
///
/// Built once per request from the caller's role. The super role bypasses
/// every check; all other roles consult the registry.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    role: Role,
    permissions: PermissionSet,
}

impl AccessPolicy {
    /// Build the policy for `role`.
    pub fn for_role(role: Role) -> Self {
        Self {
            role,
            permissions: get_role_permissions(role),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The role's granted permissions, without the bypass.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Whether this caller skips permission checks entirely.
    pub fn bypasses_checks(&self) -> bool {
        self.role == SUPER_ROLE
    }

    /// Whether this caller may use a page or action requiring `permission`.
    pub fn permits(&self, permission: Permission) -> bool {
        self.bypasses_checks() || self.permissions.contains(&permission)
    }
}
