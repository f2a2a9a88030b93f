use seatwise_core::SeatMap;
use seatwise_population::PopulationConfig;
use serde::Deserialize;
use std::env;

const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub seat_map: SeatMapConfig,
    #[serde(default)]
    pub population: PopulationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Cabin layout used for simulations and for allocation requests that do
/// not bring their own seat map.
#[derive(Debug, Deserialize, Clone)]
pub struct SeatMapConfig {
    pub rows: usize,
    pub seats_per_row: usize,
}

impl SeatMapConfig {
    pub fn build(&self) -> SeatMap {
        SeatMap::new(self.rows, self.seats_per_row)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `SEATWISE__SEAT_MAP__ROWS=30`
            .add_source(config::Environment::with_prefix("SEATWISE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// The checked-in defaults, compiled into the binary.
    pub fn defaults() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
