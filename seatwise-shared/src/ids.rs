use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a passenger, unique across one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerId(pub u32);

/// Identifier of a family group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyId(pub u32);

impl From<u32> for PassengerId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<u32> for FamilyId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
