use serde::{Deserialize, Serialize};
use seatwise_shared::{FamilyId, PassengerId};
use crate::seat::SeatId;

/// Passenger categories. Seat demand and cohesion rules hang off this enum;
/// a new category means a new variant here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerType {
    Adult,
    Child,
    AdultRequiringTwoSeats,
}

impl PassengerType {
    pub fn seats_required(self) -> usize {
        match self {
            PassengerType::Adult | PassengerType::Child => 1,
            PassengerType::AdultRequiringTwoSeats => 2,
        }
    }

    /// Can accompany a child.
    pub fn is_adult(self) -> bool {
        matches!(self, PassengerType::Adult | PassengerType::AdultRequiringTwoSeats)
    }

    pub fn is_child(self) -> bool {
        self == PassengerType::Child
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub id: PassengerId,
    pub name: String,
    pub passenger_type: PassengerType,
    pub age: u8,
    #[serde(default)]
    pub family_id: Option<FamilyId>,
    #[serde(default)]
    pub seats: Vec<SeatId>,
}

impl Passenger {
    /// An unattached passenger.
    pub fn new(
        id: impl Into<PassengerId>,
        name: impl Into<String>,
        passenger_type: PassengerType,
        age: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            passenger_type,
            age,
            family_id: None,
            seats: Vec::new(),
        }
    }

    pub fn family_member(
        id: impl Into<PassengerId>,
        name: impl Into<String>,
        passenger_type: PassengerType,
        age: u8,
        family_id: impl Into<FamilyId>,
    ) -> Self {
        Self {
            family_id: Some(family_id.into()),
            ..Self::new(id, name, passenger_type, age)
        }
    }

    pub fn seats_required(&self) -> usize {
        self.passenger_type.seats_required()
    }

    pub fn is_adult(&self) -> bool {
        self.passenger_type.is_adult()
    }

    pub fn is_child(&self) -> bool {
        self.passenger_type.is_child()
    }

    pub fn is_seated(&self) -> bool {
        !self.seats.is_empty()
    }
}
