use seatwise_core::{Family, Seat, SeatId};
use tracing::debug;
use crate::allocator::SeatAllocator;
use crate::runs::longest_free_run;
use crate::split::{commit_split, SplitGroups};

/// Candidate divisions for a family with exactly two children, best first.
///
/// Balanced pairings (one child and one adult per row) come first, trying
/// both adult pairings and both homes for any further adults. After that,
/// both children go with one adult into the roomier row.
fn two_children_candidates(
    children: &[usize],
    adults: &[usize],
    current_is_roomier: bool,
) -> Vec<SplitGroups> {
    let (first_child, second_child) = (children[0], children[1]);
    let extra_adults = &adults[2..];
    let mut candidates = Vec::new();

    for (lead, partner) in [(adults[0], adults[1]), (adults[1], adults[0])] {
        for extras_in_current in [true, false] {
            if extra_adults.is_empty() && !extras_in_current {
                continue;
            }

            let mut current = vec![first_child, lead];
            let mut next = vec![second_child, partner];
            if extras_in_current {
                current.extend_from_slice(extra_adults);
            } else {
                next.extend_from_slice(extra_adults);
            }
            candidates.push(SplitGroups::new(current, next));
        }
    }

    for &escort in adults {
        let together = vec![first_child, second_child, escort];
        let rest: Vec<usize> = adults.iter().copied().filter(|&a| a != escort).collect();
        candidates.push(if current_is_roomier {
            SplitGroups::new(together, rest)
        } else {
            SplitGroups::new(rest, together)
        });
    }

    candidates
}

impl SeatAllocator {
    /// Split a family of two children and at least two adults over two rows
    /// so that each child sits in a row with an adult of the family.
    ///
    /// Returns every claimed seat, or `None` with both rows untouched when
    /// the family does not have that shape or no candidate fits.
    pub fn allocate_two_children(
        family: &mut Family,
        current_row_seats: &mut [Seat],
        next_row_seats: &mut [Seat],
    ) -> Option<Vec<SeatId>> {
        let children = family.child_indices();
        let adults = family.adult_indices();
        if children.len() != 2 || adults.len() < 2 {
            return None;
        }

        let current_capacity = longest_free_run(current_row_seats);
        let next_capacity = longest_free_run(next_row_seats);

        let current_is_roomier = current_capacity >= next_capacity;
        let Some(groups) = two_children_candidates(&children, &adults, current_is_roomier)
            .into_iter()
            .find(|groups| groups.is_valid(family, current_capacity, next_capacity))
        else {
            debug!(
                family = %family.id,
                current_capacity,
                next_capacity,
                "no two-children split fits"
            );
            return None;
        };

        commit_split(family, &groups, current_row_seats, next_row_seats)
    }
}
