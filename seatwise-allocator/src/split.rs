//! Seating one family across two physically adjacent rows.
//!
//! Whether a division of the members is valid, and how it ranks, depends
//! only on how many members of each passenger type sit in each row. Planning
//! therefore walks those head counts instead of every subset of members; for
//! a given count the earliest members of each type go to the current row,
//! which is also the best choice under [`SplitRank`]'s final tie-break.

use std::cmp::Reverse;
use seatwise_core::{Family, PassengerType, Seat, SeatId};
use tracing::{debug, error};
use crate::allocator::SeatAllocator;
use crate::claims::{
    commit_rows, group_demand, is_cohesive, record_on_family, stage_group, RowClaims,
};
use crate::runs::longest_free_run;

/// Preference order between valid divisions, compared field by field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct SplitRank {
    /// Adults on the smaller side: keep as many adults together as possible.
    adults_split_off: usize,
    /// Members on the smaller side: children follow the bulk of the family.
    members_split_off: usize,
    /// The larger group sits in the next row rather than the current one.
    larger_group_behind: bool,
    /// Earlier members go to the current row first.
    member_order: Reverse<Vec<bool>>,
}

/// Member indices for each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitGroups {
    pub current: Vec<usize>,
    pub next: Vec<usize>,
}

impl SplitGroups {
    /// Groups keep family member order so seating within a run is stable.
    pub fn new(mut current: Vec<usize>, mut next: Vec<usize>) -> Self {
        current.sort_unstable();
        next.sort_unstable();
        Self { current, next }
    }

    /// The first `counts[k]` members of `by_type[k]` go to the current row.
    fn from_counts(by_type: &[Vec<usize>], counts: &[usize]) -> Self {
        let mut current = Vec::new();
        let mut next = Vec::new();
        for (members, &count) in by_type.iter().zip(counts) {
            current.extend_from_slice(&members[..count]);
            next.extend_from_slice(&members[count..]);
        }
        Self::new(current, next)
    }

    fn rank(&self, family: &Family) -> SplitRank {
        let adults = |members: &[usize]| {
            members.iter().filter(|&&m| family.members[m].is_adult()).count()
        };
        let adults_current = adults(self.current.as_slice());
        let adults_next = adults(self.next.as_slice());

        let mut in_current = vec![false; family.members.len()];
        for &m in &self.current {
            in_current[m] = true;
        }

        SplitRank {
            adults_split_off: adults_current.min(adults_next),
            members_split_off: self.current.len().min(self.next.len()),
            larger_group_behind: self.next.len() > self.current.len(),
            member_order: Reverse(in_current),
        }
    }

    /// Both sides cohesive and each fits the longest free run of its row.
    pub fn is_valid(&self, family: &Family, current_capacity: usize, next_capacity: usize) -> bool {
        is_cohesive(family, &self.current)
            && is_cohesive(family, &self.next)
            && group_demand(family, &self.current) <= current_capacity
            && group_demand(family, &self.next) <= next_capacity
    }

    /// Stage both sides with the same leftmost-run selection as single rows.
    pub fn stage(
        &self,
        family: &Family,
        current_row: &[Seat],
        next_row: &[Seat],
    ) -> Option<(RowClaims, RowClaims)> {
        let current = stage_group(family, &self.current, current_row)?;
        let next = stage_group(family, &self.next, next_row)?;
        Some((current, next))
    }
}

/// Member indices grouped by passenger type, each group in member order.
fn members_by_type(family: &Family) -> Vec<Vec<usize>> {
    [PassengerType::AdultRequiringTwoSeats, PassengerType::Adult, PassengerType::Child]
        .into_iter()
        .map(|passenger_type| {
            (0..family.members.len())
                .filter(|&m| family.members[m].passenger_type == passenger_type)
                .collect::<Vec<usize>>()
        })
        .filter(|members| !members.is_empty())
        .collect()
}

/// Every combination of per-type head counts for the current row.
fn head_counts(by_type: &[Vec<usize>]) -> Vec<Vec<usize>> {
    by_type.iter().fold(vec![Vec::new()], |combinations, members| {
        combinations
            .iter()
            .flat_map(|prefix| {
                (0..=members.len()).map(move |count| {
                    let mut counts = prefix.clone();
                    counts.push(count);
                    counts
                })
            })
            .collect()
    })
}

/// The preferred valid division of `family` over the two rows, if any.
pub(crate) fn plan_split(
    family: &Family,
    current_row: &[Seat],
    next_row: &[Seat],
) -> Option<SplitGroups> {
    let current_capacity = longest_free_run(current_row);
    let next_capacity = longest_free_run(next_row);

    if family.total_seats_required() > current_capacity + next_capacity {
        return None;
    }
    // Children can only be split off together with an adult.
    if family.child_count() > 0 && family.adult_count() == 0 {
        debug!(family = %family.id, "family without adults cannot be split");
        return None;
    }

    let by_type = members_by_type(family);
    head_counts(&by_type)
        .iter()
        .map(|counts| SplitGroups::from_counts(&by_type, counts))
        .filter(|groups| groups.is_valid(family, current_capacity, next_capacity))
        .min_by_key(|groups| groups.rank(family))
}

/// Stage and commit `groups` into both rows, all or nothing.
pub(crate) fn commit_split(
    family: &mut Family,
    groups: &SplitGroups,
    current_row: &mut [Seat],
    next_row: &mut [Seat],
) -> Option<Vec<SeatId>> {
    let (current, next) = groups.stage(family, current_row, next_row)?;

    match commit_rows(vec![(current, current_row), (next, next_row)]) {
        Ok(assignments) => Some(record_on_family(family, &assignments)),
        Err(e) => {
            error!(family = %family.id, "split commit rejected: {}", e);
            None
        }
    }
}

impl SeatAllocator {
    /// Whether the family can be divided over the two rows with each part
    /// contiguous in its row and every child next to an adult of the family.
    pub fn can_family_be_split_across_rows(
        family: &Family,
        current_row_seats: &[Seat],
        next_row_seats: &[Seat],
    ) -> bool {
        plan_split(family, current_row_seats, next_row_seats).is_some()
    }

    /// Seat the family over the two rows using the preferred division.
    ///
    /// Returns every claimed seat (current row first), or `None` with both
    /// rows untouched.
    pub fn allocate_family_members_across_rows(
        family: &mut Family,
        current_row_seats: &mut [Seat],
        next_row_seats: &mut [Seat],
    ) -> Option<Vec<SeatId>> {
        let Some(groups) = plan_split(family, current_row_seats, next_row_seats) else {
            debug!(family = %family.id, "no valid split across rows");
            return None;
        };

        commit_split(family, &groups, current_row_seats, next_row_seats)
    }
}
