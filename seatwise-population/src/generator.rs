use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seatwise_core::{Family, Passenger, PassengerType};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::PopulationError;

const ADULT_AGES: std::ops::RangeInclusive<u8> = 18..=80;
const CHILD_AGES: std::ops::RangeInclusive<u8> = 2..=17;

/// Knobs for a generated passenger list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Fixed seed for reproducible runs; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Seats available on the aircraft. Total demand never exceeds it.
    pub capacity: usize,
    pub family_count: usize,
    pub max_adults_per_family: usize,
    pub max_children_per_family: usize,
    /// Chance that any adult needs two seats.
    pub two_seat_probability: f64,
    /// Share of `capacity` to fill with demand, in `(0, 1]`.
    pub fill_ratio: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            capacity: 300,
            family_count: 30,
            max_adults_per_family: 2,
            max_children_per_family: 3,
            two_seat_probability: 0.1,
            fill_ratio: 1.0,
        }
    }
}

impl PopulationConfig {
    pub fn validate(&self) -> Result<(), PopulationError> {
        if self.capacity == 0 {
            return Err(PopulationError::InvalidConfig("capacity must be positive".to_string()));
        }
        if self.max_adults_per_family == 0 {
            return Err(PopulationError::InvalidConfig(
                "families need room for at least one adult".to_string(),
            ));
        }
        if self.max_children_per_family >= 3 && self.max_adults_per_family < 2 {
            return Err(PopulationError::InvalidConfig(
                "families with three children need two adults".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.two_seat_probability) {
            return Err(PopulationError::InvalidConfig(format!(
                "two_seat_probability {} is not a probability",
                self.two_seat_probability
            )));
        }
        if !(self.fill_ratio > 0.0 && self.fill_ratio <= 1.0) {
            return Err(PopulationError::InvalidConfig(format!(
                "fill_ratio {} must be in (0, 1]",
                self.fill_ratio
            )));
        }
        Ok(())
    }

    /// Seats to fill, rounded down.
    pub fn target_demand(&self) -> usize {
        (self.capacity as f64 * self.fill_ratio).floor() as usize
    }
}

/// Individuals and families ready for seat assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    pub passengers: Vec<Passenger>,
    pub families: Vec<Family>,
}

impl Population {
    pub fn total_seats_required(&self) -> usize {
        self.passengers.iter().map(Passenger::seats_required).sum::<usize>()
            + self.families.iter().map(Family::total_seats_required).sum::<usize>()
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len() + self.families.iter().map(|f| f.members.len()).sum::<usize>()
    }
}

/// Random passenger lists that respect the booking rules: every family has
/// an adult, three or more children come with two adults, and demand stays
/// within capacity.
pub struct PopulationGenerator {
    config: PopulationConfig,
    rng: ChaCha8Rng,
    next_passenger_id: u32,
}

impl PopulationGenerator {
    pub fn new(config: PopulationConfig) -> Result<Self, PopulationError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            next_passenger_id: 1,
        })
    }

    /// Families first, then individuals until the target demand is met.
    pub fn generate(&mut self) -> Population {
        let target = self.config.target_demand();
        let mut population = Population::default();
        let mut demand = 0;

        for family_id in 1..=self.config.family_count as u32 {
            let family = self.generate_family(family_id);
            let family_demand = family.total_seats_required();
            if demand + family_demand > target {
                debug!(
                    family = %family.id,
                    family_demand,
                    demand,
                    target,
                    "family would exceed capacity"
                );
                break;
            }
            demand += family_demand;
            population.families.push(family);
        }

        while demand < target {
            let passenger = self.generate_individual(target - demand);
            demand += passenger.seats_required();
            population.passengers.push(passenger);
        }

        debug!(
            families = population.families.len(),
            individuals = population.passengers.len(),
            demand,
            "population generated"
        );
        population
    }

    fn generate_family(&mut self, family_id: u32) -> Family {
        let mut adults = self.rng.gen_range(1..=self.config.max_adults_per_family);
        let children = self.rng.gen_range(0..=self.config.max_children_per_family);
        if children >= 3 {
            adults = adults.max(2);
        }

        let mut family = Family::new(family_id);
        for member in 1..=adults + children {
            let passenger_type = if member > adults {
                PassengerType::Child
            } else if self.rng.gen_bool(self.config.two_seat_probability) {
                PassengerType::AdultRequiringTwoSeats
            } else {
                PassengerType::Adult
            };
            let age = self.age_for(passenger_type);
            let id = self.take_passenger_id();
            family.add_member(Passenger::family_member(
                id,
                format!("Family{} Member{}", family_id, member),
                passenger_type,
                age,
                family_id,
            ));
        }
        family
    }

    /// An adult travelling alone; needs two seats only if `room` allows.
    fn generate_individual(&mut self, room: usize) -> Passenger {
        let passenger_type = if room >= 2 && self.rng.gen_bool(self.config.two_seat_probability) {
            PassengerType::AdultRequiringTwoSeats
        } else {
            PassengerType::Adult
        };
        let age = self.age_for(passenger_type);
        let id = self.take_passenger_id();
        Passenger::new(id, format!("Passenger {}", id), passenger_type, age)
    }

    fn age_for(&mut self, passenger_type: PassengerType) -> u8 {
        if passenger_type.is_child() {
            self.rng.gen_range(CHILD_AGES)
        } else {
            self.rng.gen_range(ADULT_AGES)
        }
    }

    fn take_passenger_id(&mut self) -> u32 {
        let id = self.next_passenger_id;
        self.next_passenger_id += 1;
        id
    }
}
