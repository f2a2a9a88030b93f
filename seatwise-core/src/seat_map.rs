use serde::{Deserialize, Serialize};
use seatwise_shared::PassengerId;
use crate::seat::{Seat, SeatId};
use crate::{CoreError, CoreResult};

pub const STANDARD_ROW_WIDTH: usize = 6;
pub const STANDARD_ROW_COUNT: usize = 50;

/// The aircraft cabin: ordered rows of fixed-width seat slots.
///
/// This is the only place occupancy lives. Passenger and family seat lists
/// are copies made for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap {
    rows: Vec<Vec<Seat>>,
}

impl SeatMap {
    pub fn new(row_count: usize, seats_per_row: usize) -> Self {
        let rows = (0..row_count)
            .map(|row| (0..seats_per_row).map(|column| Seat::new(row, column)).collect())
            .collect();
        Self { rows }
    }

    /// 50 rows of 6 seats, 300 seats in total.
    pub fn standard() -> Self {
        Self::new(STANDARD_ROW_COUNT, STANDARD_ROW_WIDTH)
    }

    pub fn from_rows(rows: Vec<Vec<Seat>>) -> Self {
        Self { rows }
    }

    /// Block the given seats before allocation starts.
    pub fn with_blocked(mut self, seats: &[SeatId]) -> CoreResult<Self> {
        for id in seats {
            let seat = self
                .seat_mut(*id)
                .ok_or(CoreError::SeatOutOfRange { seat: *id })?;
            seat.is_occupied = true;
        }
        Ok(self)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn capacity(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn free_seat_count(&self) -> usize {
        self.seats().filter(|seat| seat.is_free()).count()
    }

    pub fn rows(&self) -> &[Vec<Seat>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Seat]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut [Seat]> {
        self.rows.get_mut(index).map(Vec::as_mut_slice)
    }

    /// Row `index` and row `index + 1`, both mutably borrowed.
    pub fn adjacent_rows_mut(&mut self, index: usize) -> Option<(&mut [Seat], &mut [Seat])> {
        if index + 1 >= self.rows.len() {
            return None;
        }

        let (head, tail) = self.rows.split_at_mut(index + 1);
        Some((head[index].as_mut_slice(), tail[0].as_mut_slice()))
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.rows
            .get(id.row)?
            .iter()
            .find(|seat| seat.id.column == id.column)
    }

    fn seat_mut(&mut self, id: SeatId) -> Option<&mut Seat> {
        self.rows
            .get_mut(id.row)?
            .iter_mut()
            .find(|seat| seat.id.column == id.column)
    }

    pub fn occupant(&self, id: SeatId) -> Option<PassengerId> {
        self.seat(id).and_then(|seat| seat.occupant)
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flatten()
    }

    /// Seats currently credited to `passenger`, in map order.
    pub fn seats_of(&self, passenger: PassengerId) -> Vec<SeatId> {
        self.seats()
            .filter(|seat| seat.occupant == Some(passenger))
            .map(|seat| seat.id)
            .collect()
    }
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::standard()
    }
}
