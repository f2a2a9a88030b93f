use serde::{Deserialize, Serialize};
use seatwise_shared::PassengerId;
use std::fmt;
use crate::{CoreError, CoreResult};

/// Zero-based position of a seat in the seat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId {
    pub row: usize,
    pub column: usize,
}

impl SeatId {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for SeatId {
    /// Boarding-pass style label: 1-based row, lettered column ("1A", "12F").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column < 26 {
            write!(f, "{}{}", self.row + 1, (b'A' + self.column as u8) as char)
        } else {
            write!(f, "{}-{}", self.row + 1, self.column + 1)
        }
    }
}

/// A single seat slot. `is_occupied` is authoritative; `occupant` is absent
/// for seats blocked before allocation started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub is_occupied: bool,
    pub occupant: Option<PassengerId>,
}

impl Seat {
    pub fn new(row: usize, column: usize) -> Self {
        Self {
            id: SeatId::new(row, column),
            is_occupied: false,
            occupant: None,
        }
    }

    /// A seat that is unavailable before allocation (crew rest, broken, pre-sold).
    pub fn blocked(row: usize, column: usize) -> Self {
        Self {
            is_occupied: true,
            ..Self::new(row, column)
        }
    }

    pub fn is_free(&self) -> bool {
        !self.is_occupied
    }

    /// Mark the seat as held by `passenger`. Never overwrites an occupied seat.
    pub fn occupy(&mut self, passenger: PassengerId) -> CoreResult<()> {
        if self.is_occupied {
            return Err(CoreError::SeatConflict { seat: self.id });
        }

        self.is_occupied = true;
        self.occupant = Some(passenger);
        Ok(())
    }
}
