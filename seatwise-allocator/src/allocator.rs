use seatwise_core::{validate_population, Family, Passenger, SeatMap};
use seatwise_shared::FamilyPlacement;
use tracing::{debug, info, warn};
use crate::report::AllocationReport;
use crate::AllocationError;

/// Family-aware seat assignment over a seat map.
///
/// Stateless: the seat map is the only resource and is borrowed mutably for
/// the duration of each call.
pub struct SeatAllocator;

impl SeatAllocator {
    /// Seat `passengers` (travelling alone) and then each family in input
    /// order.
    ///
    /// Individuals fill the map row by row. Each family then tries a single
    /// row, then every adjacent pair of rows. A family that fits nowhere is
    /// reported as unseated and the run continues. Only malformed input is an
    /// error, and it is rejected before any seat is touched.
    pub fn assign_seats(
        seat_map: &mut SeatMap,
        passengers: &mut [Passenger],
        families: &mut [Family],
    ) -> Result<AllocationReport, AllocationError> {
        validate_population(passengers, families).map_err(AllocationError::InvalidInput)?;
        for family in families.iter_mut() {
            family.link_members();
        }

        let mut report = AllocationReport::new();

        Self::allocate_individuals(seat_map, passengers);
        for passenger in passengers.iter() {
            report.record_passenger(passenger);
        }

        for family in families.iter_mut() {
            let placement = Self::place_family(seat_map, family);
            match placement {
                Some(placement) => {
                    debug!(
                        family = %family.id,
                        ?placement,
                        seats = family.allocated_seats.len(),
                        "family seated"
                    );
                }
                None => {
                    warn!(
                        family = %family.id,
                        members = family.members.len(),
                        seats_required = family.total_seats_required(),
                        "family could not be seated"
                    );
                }
            }
            report.record_family(family, placement);
        }

        let report = report.finish(seat_map);
        info!(
            report_id = %report.id,
            passengers_seated = report.seated_passengers.len(),
            passengers_unseated = report.unseated_passengers.len(),
            families_seated = report.seated_families.len(),
            families_unseated = report.unseated_families.len(),
            families_split = report.split_families.len(),
            seats_free = report.seats_free,
            "seat assignment finished"
        );

        Ok(report)
    }

    fn place_family(seat_map: &mut SeatMap, family: &mut Family) -> Option<FamilyPlacement> {
        if family.members.is_empty() {
            return Some(FamilyPlacement::SingleRow);
        }

        for row_index in 0..seat_map.row_count() {
            let row = seat_map.row_mut(row_index)?;
            if Self::allocate_family_seats_in_row(family, row).is_some() {
                return Some(FamilyPlacement::SingleRow);
            }
        }

        let two_children = family.child_count() == 2 && family.adult_count() >= 2;

        for row_index in 0..seat_map.row_count().saturating_sub(1) {
            let (current, next) = seat_map.adjacent_rows_mut(row_index)?;

            if two_children && Self::allocate_two_children(family, current, next).is_some() {
                return Some(FamilyPlacement::TwoChildrenSplit);
            }

            if Self::allocate_family_members_across_rows(family, current, next).is_some() {
                return Some(FamilyPlacement::SplitAcrossRows);
            }
        }

        None
    }
}
