use seatwise_core::{Family, Passenger, PassengerId, Seat, SeatId};
use crate::runs::{leftmost_run, FreeRun};
use crate::AllocationError;

/// One seat staged for one passenger. `member` is the passenger's position
/// in the slice the claim was planned from (family members or individuals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Claim {
    pub index: usize,
    pub member: usize,
    pub passenger: PassengerId,
}

/// A committed claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Assignment {
    pub member: usize,
    pub seat: SeatId,
}

/// Seats staged in one row. Nothing is written to the row until commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RowClaims {
    claims: Vec<Claim>,
}

impl RowClaims {
    /// `count` consecutive seats from `run` for a single passenger.
    pub fn for_passenger(
        run: FreeRun,
        count: usize,
        member: usize,
        passenger: PassengerId,
    ) -> Self {
        let claims = (run.start..run.start + count)
            .map(|index| Claim { index, member, passenger })
            .collect();
        Self { claims }
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Every staged seat exists and is still free.
    fn verify(&self, row: &[Seat]) -> Result<(), AllocationError> {
        for claim in &self.claims {
            let seat = row.get(claim.index).ok_or(AllocationError::StaleClaim {
                index: claim.index,
            })?;
            if !seat.is_free() {
                return Err(AllocationError::SeatConflict { seat: seat.id });
            }
        }
        Ok(())
    }

    fn apply(self, row: &mut [Seat]) -> Result<Vec<Assignment>, AllocationError> {
        let mut assignments = Vec::with_capacity(self.claims.len());
        for claim in self.claims {
            let seat = &mut row[claim.index];
            seat.occupy(claim.passenger)?;
            assignments.push(Assignment {
                member: claim.member,
                seat: seat.id,
            });
        }
        Ok(assignments)
    }
}

/// Stage `members` of `family` into the leftmost run of `row` that can hold
/// all of them. Two-seat passengers take the front of the run so their pair
/// is adjacent; everyone else follows in member order.
pub(crate) fn stage_group(family: &Family, members: &[usize], row: &[Seat]) -> Option<RowClaims> {
    let demand = group_demand(family, members);
    if demand == 0 {
        return Some(RowClaims::default());
    }

    let run = leftmost_run(row, demand)?;

    let (two_seat, single_seat): (Vec<usize>, Vec<usize>) = members
        .iter()
        .copied()
        .partition(|&m| family.members[m].seats_required() > 1);

    let mut claims = Vec::with_capacity(demand);
    let mut cursor = run.start;
    for member in two_seat.into_iter().chain(single_seat) {
        let passenger: &Passenger = &family.members[member];
        for _ in 0..passenger.seats_required() {
            claims.push(Claim {
                index: cursor,
                member,
                passenger: passenger.id,
            });
            cursor += 1;
        }
    }

    Some(RowClaims { claims })
}

pub(crate) fn group_demand(family: &Family, members: &[usize]) -> usize {
    members.iter().map(|&m| family.members[m].seats_required()).sum()
}

/// Every group containing a child also contains an adult.
pub(crate) fn is_cohesive(family: &Family, members: &[usize]) -> bool {
    let has_child = members.iter().any(|&m| family.members[m].is_child());
    !has_child || members.iter().any(|&m| family.members[m].is_adult())
}

/// Write staged claims into their rows, all or nothing: every row is checked
/// before any seat is marked.
pub(crate) fn commit_rows(
    staged: Vec<(RowClaims, &mut [Seat])>,
) -> Result<Vec<Assignment>, AllocationError> {
    for (claims, row) in &staged {
        claims.verify(row)?;
    }

    let mut assignments = Vec::with_capacity(staged.iter().map(|(claims, _)| claims.len()).sum());
    for (claims, row) in staged.into_iter().filter(|(claims, _)| !claims.is_empty()) {
        assignments.extend(claims.apply(row)?);
    }
    Ok(assignments)
}

/// Copy committed seats onto the family and its members.
pub(crate) fn record_on_family(family: &mut Family, assignments: &[Assignment]) -> Vec<SeatId> {
    for assignment in assignments {
        family.members[assignment.member].seats.push(assignment.seat);
        family.allocated_seats.push(assignment.seat);
    }
    assignments.iter().map(|a| a.seat).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runs::tests::full_row;
    use seatwise_core::PassengerType;

    fn family() -> Family {
        let mut family = Family::new(1);
        family.add_member(Passenger::new(1, "Adult 1", PassengerType::Adult, 30));
        family.add_member(Passenger::new(2, "Adult 2", PassengerType::AdultRequiringTwoSeats, 35));
        family.add_member(Passenger::new(3, "Child 1", PassengerType::Child, 8));
        family
    }

    #[test]
    fn test_two_seat_passengers_take_front_of_run() {
        let family = family();
        let row = full_row(0, 6, &[0]);

        let staged = stage_group(&family, &[0, 1, 2], &row).unwrap();
        let order: Vec<(usize, usize)> =
            staged.claims.iter().map(|c| (c.index, c.member)).collect();
        assert_eq!(order, vec![(1, 1), (2, 1), (3, 0), (4, 2)]);
    }

    #[test]
    fn test_cohesion() {
        let family = family();
        assert!(is_cohesive(&family, &[0, 2]));
        assert!(is_cohesive(&family, &[1]));
        assert!(is_cohesive(&family, &[]));
        assert!(!is_cohesive(&family, &[2]));
    }

    #[test]
    fn test_commit_is_all_or_nothing() {
        let family = family();
        let mut current = full_row(0, 4, &[]);
        let mut next = full_row(1, 4, &[]);

        let first = stage_group(&family, &[0, 2], &current).unwrap();
        let second = stage_group(&family, &[1], &next).unwrap();

        // Someone else grabs a staged seat in the second row.
        next[0].occupy(PassengerId(99)).unwrap();

        let result =
            commit_rows(vec![(first, current.as_mut_slice()), (second, next.as_mut_slice())]);
        assert!(matches!(result, Err(AllocationError::SeatConflict { .. })));
        assert!(current.iter().all(Seat::is_free));
        assert_eq!(next.iter().filter(|s| !s.is_free()).count(), 1);
    }
}
