pub mod family;
pub mod passenger;
pub mod seat;
pub mod seat_map;
pub mod validation;

pub use family::Family;
pub use passenger::{Passenger, PassengerType};
pub use seat::{Seat, SeatId};
pub use seat_map::{SeatMap, STANDARD_ROW_COUNT, STANDARD_ROW_WIDTH};
pub use seatwise_shared::{FamilyId, PassengerId};
pub use validation::validate_population;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Seat {seat} is already occupied")]
    SeatConflict { seat: SeatId },
    #[error("Seat {seat} is outside the seat map")]
    SeatOutOfRange { seat: SeatId },
}

pub type CoreResult<T> = Result<T, CoreError>;
