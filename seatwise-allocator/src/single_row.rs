use seatwise_core::{Family, Seat, SeatId};
use tracing::{debug, error};
use crate::allocator::SeatAllocator;
use crate::claims::{commit_rows, record_on_family, stage_group};
use crate::runs::longest_free_run;

impl SeatAllocator {
    /// Whether the whole family fits in one contiguous free run of `row_seats`.
    pub fn can_family_fit_in_single_row(family: &Family, row_seats: &[Seat]) -> bool {
        let demand = family.total_seats_required();
        demand == 0 || longest_free_run(row_seats) >= demand
    }

    /// Seat the whole family in the leftmost free run of `row_seats` that can
    /// hold it.
    ///
    /// Returns the claimed seats, or `None` with the row untouched when the
    /// family does not fit.
    pub fn allocate_family_seats_in_row(
        family: &mut Family,
        row_seats: &mut [Seat],
    ) -> Option<Vec<SeatId>> {
        if !Self::can_family_fit_in_single_row(family, row_seats) {
            debug!(
                family = %family.id,
                demand = family.total_seats_required(),
                "no contiguous run for family"
            );
            return None;
        }

        let members: Vec<usize> = (0..family.members.len()).collect();
        let staged = stage_group(family, &members, row_seats)?;

        match commit_rows(vec![(staged, row_seats)]) {
            Ok(assignments) => Some(record_on_family(family, &assignments)),
            Err(e) => {
                error!(family = %family.id, "single-row commit rejected: {}", e);
                None
            }
        }
    }
}
