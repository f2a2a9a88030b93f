use std::collections::HashSet;
use crate::family::Family;
use crate::passenger::Passenger;
use crate::{CoreError, CoreResult};

/// Reject input that breaks the data model before any seat is touched:
/// duplicate passenger or family ids, individuals carrying a family
/// reference, and passengers that already hold seats.
pub fn validate_population(passengers: &[Passenger], families: &[Family]) -> CoreResult<()> {
    let mut passenger_ids = HashSet::new();
    let mut family_ids = HashSet::new();

    for passenger in passengers {
        if let Some(family_id) = passenger.family_id {
            return Err(CoreError::ValidationError(format!(
                "individual passenger {} references family {}",
                passenger.id, family_id
            )));
        }
        check_unassigned(passenger)?;
        if !passenger_ids.insert(passenger.id) {
            return Err(duplicate_passenger(passenger));
        }
    }

    for family in families {
        if !family_ids.insert(family.id) {
            return Err(CoreError::ValidationError(format!(
                "family {} appears more than once",
                family.id
            )));
        }
        if !family.allocated_seats.is_empty() {
            return Err(CoreError::ValidationError(format!(
                "family {} already holds seats",
                family.id
            )));
        }
        family.validate()?;
        for member in &family.members {
            check_unassigned(member)?;
            if !passenger_ids.insert(member.id) {
                return Err(duplicate_passenger(member));
            }
        }
    }

    Ok(())
}

fn check_unassigned(passenger: &Passenger) -> CoreResult<()> {
    if passenger.is_seated() {
        return Err(CoreError::ValidationError(format!(
            "passenger {} already holds seats",
            passenger.id
        )));
    }
    Ok(())
}

fn duplicate_passenger(passenger: &Passenger) -> CoreError {
    CoreError::ValidationError(format!("passenger {} appears more than once", passenger.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passenger::PassengerType;
    use crate::seat::SeatId;

    #[test]
    fn test_valid_population() {
        let passengers = vec![Passenger::new(1, "Passenger A", PassengerType::Adult, 30)];
        let mut family = Family::new(1);
        family.add_member(Passenger::new(2, "Family1 Member1", PassengerType::Adult, 40));
        family.add_member(Passenger::new(3, "Family1 Member2", PassengerType::Child, 12));

        assert!(validate_population(&passengers, &[family]).is_ok());
    }

    #[test]
    fn test_id_shared_between_individual_and_family() {
        let passengers = vec![Passenger::new(2, "Passenger A", PassengerType::Adult, 30)];
        let mut family = Family::new(1);
        family.add_member(Passenger::new(2, "Family1 Member1", PassengerType::Adult, 40));

        assert!(validate_population(&passengers, &[family]).is_err());
    }

    #[test]
    fn test_individual_with_family_reference() {
        let passengers =
            vec![Passenger::family_member(1, "Passenger A", PassengerType::Adult, 30, 9)];
        assert!(validate_population(&passengers, &[]).is_err());
    }

    #[test]
    fn test_preassigned_passenger() {
        let mut passenger = Passenger::new(1, "Passenger A", PassengerType::Adult, 30);
        passenger.seats.push(SeatId::new(0, 0));
        assert!(validate_population(&[passenger], &[]).is_err());
    }

    #[test]
    fn test_duplicate_family_ids() {
        let mut first = Family::new(1);
        first.add_member(Passenger::new(1, "A", PassengerType::Adult, 30));
        let mut second = Family::new(1);
        second.add_member(Passenger::new(2, "B", PassengerType::Adult, 30));

        assert!(validate_population(&[], &[first, second]).is_err());
    }
}
