//! Common ID Types
//!
//! Vehicles are keyed by the integer `id` carried in the hand-edited
//! catalog file. The same identifier travels through detail-page URLs,
//! the hidden-car session cookie and the lead log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Vehicle identifier
///
/// Usage:
/// ```
/// use kernel::id::VehicleId;
/// let id: VehicleId = "3".parse().unwrap();
/// assert_eq!(id.as_i64(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(i64);

impl VehicleId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VehicleId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

impl From<i64> for VehicleId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<VehicleId> for i64 {
    fn from(id: VehicleId) -> Self {
        id.0
    }
}
