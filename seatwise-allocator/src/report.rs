use chrono::{DateTime, Utc};
use seatwise_core::{Family, FamilyId, Passenger, PassengerId, SeatId, SeatMap};
use seatwise_shared::models::events::{
    FamilySeatedEvent, FamilyUnseatedEvent, PassengerSeatedEvent, PassengerUnseatedEvent,
};
use seatwise_shared::{AllocationEvent, FamilyPlacement};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of one `assign_seats` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationReport {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub seated_passengers: Vec<PassengerId>,
    pub unseated_passengers: Vec<PassengerId>,
    pub seated_families: Vec<FamilyId>,
    pub unseated_families: Vec<FamilyId>,
    /// Families seated over two rows.
    pub split_families: Vec<FamilyId>,
    pub seats_claimed: usize,
    pub seats_free: usize,
    pub events: Vec<AllocationEvent>,
}

impl AllocationReport {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            completed_at: Utc::now(),
            seated_passengers: Vec::new(),
            unseated_passengers: Vec::new(),
            seated_families: Vec::new(),
            unseated_families: Vec::new(),
            split_families: Vec::new(),
            seats_claimed: 0,
            seats_free: 0,
            events: Vec::new(),
        }
    }

    pub fn record_passenger(&mut self, passenger: &Passenger) {
        let timestamp = Utc::now().timestamp();

        if passenger.is_seated() {
            self.seated_passengers.push(passenger.id);
            self.seats_claimed += passenger.seats.len();
            self.events.push(AllocationEvent::PassengerSeated(PassengerSeatedEvent {
                passenger_id: passenger.id,
                seats: labels(&passenger.seats),
                timestamp,
            }));
        } else {
            self.unseated_passengers.push(passenger.id);
            self.events.push(AllocationEvent::PassengerUnseated(PassengerUnseatedEvent {
                passenger_id: passenger.id,
                seats_required: passenger.seats_required(),
                timestamp,
            }));
        }
    }

    /// `placement` is `None` when the family could not be seated.
    pub fn record_family(&mut self, family: &Family, placement: Option<FamilyPlacement>) {
        let timestamp = Utc::now().timestamp();

        let Some(placement) = placement else {
            self.unseated_families.push(family.id);
            self.events.push(AllocationEvent::FamilyUnseated(FamilyUnseatedEvent {
                family_id: family.id,
                seats_required: family.total_seats_required(),
                timestamp,
            }));
            return;
        };

        let mut rows: Vec<usize> = family.allocated_seats.iter().map(|seat| seat.row).collect();
        rows.sort_unstable();
        rows.dedup();

        self.seated_families.push(family.id);
        if rows.len() > 1 {
            self.split_families.push(family.id);
        }
        self.seats_claimed += family.allocated_seats.len();
        self.events.push(AllocationEvent::FamilySeated(FamilySeatedEvent {
            family_id: family.id,
            placement,
            rows,
            seats: labels(&family.allocated_seats),
            timestamp,
        }));
    }

    /// Stamp the completion time and the seats left over in `seat_map`.
    pub fn finish(mut self, seat_map: &SeatMap) -> Self {
        self.completed_at = Utc::now();
        self.seats_free = seat_map.free_seat_count();
        self
    }

    /// Every passenger and every family got seats.
    pub fn is_complete(&self) -> bool {
        self.unseated_passengers.is_empty() && self.unseated_families.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &AllocationEvent> {
        self.events.iter().filter(|event| event.is_failure())
    }
}

impl Default for AllocationReport {
    fn default() -> Self {
        Self::new()
    }
}

fn labels(seats: &[SeatId]) -> Vec<String> {
    seats.iter().map(ToString::to_string).collect()
}
