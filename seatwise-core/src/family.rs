use serde::{Deserialize, Serialize};
use seatwise_shared::FamilyId;
use std::collections::HashSet;
use crate::passenger::Passenger;
use crate::seat::SeatId;
use crate::{CoreError, CoreResult};

/// A group travelling together. Seat demand and head counts are always
/// derived from `members`, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    pub id: FamilyId,
    pub members: Vec<Passenger>,
    #[serde(default)]
    pub allocated_seats: Vec<SeatId>,
}

impl Family {
    pub fn new(id: impl Into<FamilyId>) -> Self {
        Self {
            id: id.into(),
            members: Vec::new(),
            allocated_seats: Vec::new(),
        }
    }

    /// Add a member; its family reference is pointed at this family.
    pub fn add_member(&mut self, mut passenger: Passenger) {
        passenger.family_id = Some(self.id);
        self.members.push(passenger);
    }

    /// Point members that arrived without a family reference at this family.
    pub fn link_members(&mut self) {
        for member in &mut self.members {
            if member.family_id.is_none() {
                member.family_id = Some(self.id);
            }
        }
    }

    pub fn total_seats_required(&self) -> usize {
        self.members.iter().map(Passenger::seats_required).sum()
    }

    pub fn adult_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_adult()).count()
    }

    pub fn child_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_child()).count()
    }

    /// Positions of adult members in `members`.
    pub fn adult_indices(&self) -> Vec<usize> {
        self.member_indices(Passenger::is_adult)
    }

    /// Positions of child members in `members`.
    pub fn child_indices(&self) -> Vec<usize> {
        self.member_indices(Passenger::is_child)
    }

    fn member_indices(&self, predicate: impl Fn(&Passenger) -> bool) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| predicate(*member))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_seated(&self) -> bool {
        !self.allocated_seats.is_empty()
    }

    /// Booking rules: at least one adult, and two adults once there are
    /// three or more children.
    pub fn satisfies_composition_rules(&self) -> bool {
        let adults = self.adult_count();
        adults >= 1 && (self.child_count() < 3 || adults >= 2)
    }

    /// Structural checks that must hold before allocation.
    pub fn validate(&self) -> CoreResult<()> {
        let mut seen = HashSet::new();
        for member in &self.members {
            if !seen.insert(member.id) {
                return Err(CoreError::ValidationError(format!(
                    "family {} lists passenger {} more than once",
                    self.id, member.id
                )));
            }
            if let Some(other) = member.family_id {
                if other != self.id {
                    return Err(CoreError::ValidationError(format!(
                        "passenger {} in family {} references family {}",
                        member.id, self.id, other
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::PassengerType;

    fn family_of(types: &[PassengerType]) -> Family {
        let mut family = Family::new(1);
        for (i, passenger_type) in types.iter().enumerate() {
            family.add_member(Passenger::new(
                i as u32 + 1,
                format!("Member {}", i + 1),
                *passenger_type,
                30,
            ));
        }
        family
    }

    #[test]
    fn test_derived_counts() {
        let family = family_of(&[
            PassengerType::Adult,
            PassengerType::AdultRequiringTwoSeats,
            PassengerType::Child,
            PassengerType::Child,
        ]);
        assert_eq!(family.total_seats_required(), 5);
        assert_eq!(family.adult_count(), 2);
        assert_eq!(family.child_count(), 2);
        assert_eq!(family.adult_indices(), vec![0, 1]);
        assert_eq!(family.child_indices(), vec![2, 3]);
        assert!(family.members.iter().all(|m| m.family_id == Some(FamilyId(1))));
    }

    #[test]
    fn test_composition_rules() {
        let family = family_of(&[PassengerType::Adult, PassengerType::Child]);
        assert!(family.satisfies_composition_rules());
        assert!(!family_of(&[PassengerType::Child]).satisfies_composition_rules());
        assert!(!family_of(&[
            PassengerType::Adult,
            PassengerType::Child,
            PassengerType::Child,
            PassengerType::Child,
        ])
        .satisfies_composition_rules());
    }

    #[test]
    fn test_duplicate_members_rejected() {
        let mut family = Family::new(3);
        family.add_member(Passenger::new(1, "Adult 1", PassengerType::Adult, 30));
        family.add_member(Passenger::new(1, "Adult 1", PassengerType::Adult, 30));

        let result = family.validate();
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn test_foreign_member_rejected() {
        let mut family = Family::new(3);
        family.members.push(Passenger::family_member(1, "Adult 1", PassengerType::Adult, 30, 4));
        assert!(family.validate().is_err());
    }

    #[test]
    fn test_link_members_fills_missing_reference() {
        let mut family = Family::new(5);
        family.members.push(Passenger::new(1, "Adult 1", PassengerType::Adult, 30));
        family.add_member(Passenger::new(2, "Child 1", PassengerType::Child, 6));

        family.link_members();

        assert!(family.members.iter().all(|m| m.family_id == Some(FamilyId(5))));
    }
}
