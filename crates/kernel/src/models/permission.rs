//! Permission model.
//!
//! A permission names one functional area of the dashboard. Menu items and
//! page guards require exactly one permission each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// A capability tag for one functional area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Dashboard,
    Equipment,
    Maintenance,
    Inspections,
    Calibrations,
    Reports,
    /// Cross-tenant reporting.
    GlobalReports,
    Monitoring,
    Tools,
    Download,
    CompanyManagement,
    UserManagement,
    Settings,
    Tasks,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: &'static [Permission] = &[
        Permission::Dashboard,
        Permission::Equipment,
        Permission::Maintenance,
        Permission::Inspections,
        Permission::Calibrations,
        Permission::Reports,
        Permission::GlobalReports,
        Permission::Monitoring,
        Permission::Tools,
        Permission::Download,
        Permission::CompanyManagement,
        Permission::UserManagement,
        Permission::Settings,
        Permission::Tasks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Dashboard => "dashboard",
            Permission::Equipment => "equipment",
            Permission::Maintenance => "maintenance",
            Permission::Inspections => "inspections",
            Permission::Calibrations => "calibrations",
            Permission::Reports => "reports",
            Permission::GlobalReports => "global_reports",
            Permission::Monitoring => "monitoring",
            Permission::Tools => "tools",
            Permission::Download => "download",
            Permission::CompanyManagement => "company_management",
            Permission::UserManagement => "user_management",
            Permission::Settings => "settings",
            Permission::Tasks => "tasks",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AccessError::UnknownPermission(value.to_string()))
    }
}
