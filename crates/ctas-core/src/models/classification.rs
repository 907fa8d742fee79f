use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::vitals::VitalName;

/// Where a vital reading falls against its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalStatus {
    Normal,
    /// Plausible but outside the normal band.
    Abnormal,
    /// Clinically implausible; likely a data-entry error.
    OutOfRange,
    Missing,
}

/// Advisory per-vital status. Never consulted by rule evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct VitalClassification {
    pub statuses: BTreeMap<VitalName, VitalStatus>,
}

impl VitalClassification {
    pub fn get(&self, name: VitalName) -> Option<VitalStatus> {
        self.statuses.get(&name).copied()
    }

    /// Vitals that are not `Normal`, in name order.
    pub fn flagged(&self) -> impl Iterator<Item = (VitalName, VitalStatus)> + '_ {
        self.statuses
            .iter()
            .filter(|(_, status)| **status != VitalStatus::Normal)
            .map(|(name, status)| (*name, *status))
    }
}
