//! Role model.
//!
//! Roles are a closed set compiled into the kernel. Which role a given user
//! holds is data owned by user administration; what a role may do is owned by
//! [`crate::permissions`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// A system actor's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator; bypasses every permission check.
    SuperAdmin,
    /// Administrator of a partner (service) company.
    AdminMitra,
    /// Administrator of a calibration lab.
    AdminKalibrasi,
    /// Administrator of an equipment provider.
    AdminPenyedia,
    /// Administrator of a client facility.
    AdminKlien,
    /// Client-side equipment operator.
    OperatorKlien,
    /// Technician employed by a partner company.
    TeknisiMitra,
    /// Calibration technician.
    Kalibrator,
    Teknisi,
    Operator,
    /// Supervisor.
    Spv,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: &'static [Role] = &[
        Role::SuperAdmin,
        Role::AdminMitra,
        Role::AdminKalibrasi,
        Role::AdminPenyedia,
        Role::AdminKlien,
        Role::OperatorKlien,
        Role::TeknisiMitra,
        Role::Kalibrator,
        Role::Teknisi,
        Role::Operator,
        Role::Spv,
    ];

    /// Machine name, as stored on user records and sent in headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::AdminMitra => "admin_mitra",
            Role::AdminKalibrasi => "admin_kalibrasi",
            Role::AdminPenyedia => "admin_penyedia",
            Role::AdminKlien => "admin_klien",
            Role::OperatorKlien => "operator_klien",
            Role::TeknisiMitra => "teknisi_mitra",
            Role::Kalibrator => "kalibrator",
            Role::Teknisi => "teknisi",
            Role::Operator => "operator",
            Role::Spv => "spv",
        }
    }

    /// Human-readable label for presentation.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::AdminMitra => "Admin Mitra",
            Role::AdminKalibrasi => "Admin Kalibrasi",
            Role::AdminPenyedia => "Admin Penyedia",
            Role::AdminKlien => "Admin Klien",
            Role::OperatorKlien => "Operator Klien",
            Role::TeknisiMitra => "Teknisi Mitra",
            Role::Kalibrator => "Kalibrator",
            Role::Teknisi => "Teknisi",
            Role::Operator => "Operator",
            Role::Spv => "Supervisor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AccessError::UnknownRole(value.to_string()))
    }
}
