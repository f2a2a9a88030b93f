pub mod generator;

pub use generator::{Population, PopulationConfig, PopulationGenerator};

#[derive(Debug, thiserror::Error)]
pub enum PopulationError {
    #[error("Invalid population config: {0}")]
    InvalidConfig(String),
}
