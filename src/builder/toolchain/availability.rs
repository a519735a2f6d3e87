//! Tool chain availability verdicts.

use std::fmt;

use serde::Serialize;

use crate::core::tool::ToolRole;

/// Why a tool chain cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum UnavailableReason {
    /// The executable for a role could not be found.
    Missing { role: ToolRole },
    /// The primary compiler did not report a usable version.
    VersionUndetermined,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::Missing { role } => {
                write!(f, "{} cannot be found", role.display_name())
            }
            UnavailableReason::VersionUndetermined => f.write_str("could not determine G++ version"),
        }
    }
}

/// Outcome of checking every tool role plus version determination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Available,
    Unavailable(Vec<UnavailableReason>),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    /// Reasons for unavailability, empty when available.
    pub fn reasons(&self) -> &[UnavailableReason] {
        match self {
            Availability::Available => &[],
            Availability::Unavailable(reasons) => reasons,
        }
    }

    /// Roles reported as missing, in role order.
    pub fn missing_roles(&self) -> Vec<ToolRole> {
        self.reasons()
            .iter()
            .filter_map(|r| match r {
                UnavailableReason::Missing { role } => Some(*role),
                UnavailableReason::VersionUndetermined => None,
            })
            .collect()
    }
}

/// Accumulates reasons while a check runs.
#[derive(Debug, Default)]
pub(crate) struct AvailabilityBuilder {
    reasons: Vec<UnavailableReason>,
}

impl AvailabilityBuilder {
    pub(crate) fn must_exist<T>(&mut self, role: ToolRole, found: Option<&T>) {
        if found.is_none() {
            self.reasons.push(UnavailableReason::Missing { role });
        }
    }

    pub(crate) fn unavailable(&mut self, reason: UnavailableReason) {
        self.reasons.push(reason);
    }

    pub(crate) fn build(self) -> Availability {
        if self.reasons.is_empty() {
            Availability::Available
        } else {
            Availability::Unavailable(self.reasons)
        }
    }
}
