use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Canadian Triage and Acuity Scale level. 1 is the most urgent, 5 the least.
///
/// Ordering follows the numeric value, so `min` over a set of levels picks
/// the most urgent one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct CtasLevel(u8);

impl CtasLevel {
    pub const RESUSCITATION: Self = Self(1);
    pub const EMERGENT: Self = Self(2);
    pub const URGENT: Self = Self(3);
    pub const LESS_URGENT: Self = Self(4);
    pub const NON_URGENT: Self = Self(5);

    /// Every level, most urgent first.
    pub const ALL: [Self; 5] = [
        Self::RESUSCITATION,
        Self::EMERGENT,
        Self::URGENT,
        Self::LESS_URGENT,
        Self::NON_URGENT,
    ];

    pub fn new(value: u8) -> Result<Self, CoreError> {
        match value {
            1..=5 => Ok(Self(value)),
            other => Err(CoreError::InvalidLevel(i64::from(other))),
        }
    }

    /// Build a level from any integer, rejecting values outside 1–5.
    pub fn from_i64(value: i64) -> Result<Self, CoreError> {
        u8::try_from(value)
            .map_err(|_| CoreError::InvalidLevel(value))
            .and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in [`CtasLevel::ALL`].
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for CtasLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CtasLevel> for u8 {
    fn from(level: CtasLevel) -> Self {
        level.0
    }
}

impl fmt::Display for CtasLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CTAS {}", self.0)
    }
}
