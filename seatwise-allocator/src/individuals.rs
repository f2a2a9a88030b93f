use seatwise_core::{Passenger, SeatId, SeatMap};
use seatwise_shared::Masked;
use tracing::{debug, error, warn};
use crate::allocator::SeatAllocator;
use crate::claims::{commit_rows, RowClaims};
use crate::runs::leftmost_run;

impl SeatAllocator {
    /// Sequential fill for passengers travelling alone: each takes the first
    /// free seat (or first adjacent free pair) in row-major order.
    ///
    /// Returns how many passengers were seated. Anyone left over keeps an
    /// empty seat list.
    pub fn allocate_individuals(seat_map: &mut SeatMap, passengers: &mut [Passenger]) -> usize {
        let mut seated = 0;

        for passenger in passengers.iter_mut() {
            match Self::seat_individual(seat_map, passenger) {
                Some(seats) => {
                    debug!(passenger = %passenger.id, seats = seats.len(), "individual seated");
                    passenger.seats = seats;
                    seated += 1;
                }
                None => {
                    warn!(
                        passenger = %passenger.id,
                        name = %Masked(&passenger.name),
                        seats_required = passenger.seats_required(),
                        "no seat left for individual"
                    );
                }
            }
        }

        seated
    }

    fn seat_individual(seat_map: &mut SeatMap, passenger: &Passenger) -> Option<Vec<SeatId>> {
        let demand = passenger.seats_required();

        for row_index in 0..seat_map.row_count() {
            let row = seat_map.row_mut(row_index)?;
            let Some(run) = leftmost_run(row, demand) else {
                continue;
            };

            let claims = RowClaims::for_passenger(run, demand, 0, passenger.id);
            return match commit_rows(vec![(claims, row)]) {
                Ok(assignments) => Some(assignments.into_iter().map(|a| a.seat).collect()),
                Err(e) => {
                    error!(passenger = %passenger.id, "individual commit rejected: {}", e);
                    None
                }
            };
        }

        None
    }
}
