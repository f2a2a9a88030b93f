use crate::ids::{FamilyId, PassengerId};

/// How a family ended up seated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FamilyPlacement {
    SingleRow,
    SplitAcrossRows,
    TwoChildrenSplit,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct PassengerSeatedEvent {
    pub passenger_id: PassengerId,
    pub seats: Vec<String>, // Seat labels, e.g. "12C"
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct PassengerUnseatedEvent {
    pub passenger_id: PassengerId,
    pub seats_required: usize,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct FamilySeatedEvent {
    pub family_id: FamilyId,
    pub placement: FamilyPlacement,
    pub rows: Vec<usize>,
    pub seats: Vec<String>,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct FamilyUnseatedEvent {
    pub family_id: FamilyId,
    pub seats_required: usize,
    pub timestamp: i64,
}

/// Outcome of one entity in an allocation run, in processing order.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationEvent {
    PassengerSeated(PassengerSeatedEvent),
    PassengerUnseated(PassengerUnseatedEvent),
    FamilySeated(FamilySeatedEvent),
    FamilyUnseated(FamilyUnseatedEvent),
}

impl AllocationEvent {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            AllocationEvent::PassengerUnseated(_) | AllocationEvent::FamilyUnseated(_)
        )
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            AllocationEvent::PassengerSeated(e) => e.timestamp,
            AllocationEvent::PassengerUnseated(e) => e.timestamp,
            AllocationEvent::FamilySeated(e) => e.timestamp,
            AllocationEvent::FamilyUnseated(e) => e.timestamp,
        }
    }
}
