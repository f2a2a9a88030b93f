use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use seatwise_population::{Population, PopulationConfig, PopulationGenerator};
use serde::Deserialize;
use tracing::info;
use crate::{error::AppError, state::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct PopulationRequest {
    /// Overrides the configured seed for a reproducible population.
    pub seed: Option<u64>,
}

impl PopulationRequest {
    /// The configured generator settings with this request's seed applied.
    pub fn config(&self, state: &AppState) -> PopulationConfig {
        let mut config = state.config.population.clone();
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/populations", post(create_population))
}

/// POST /v1/populations
/// Generate a random passenger list
async fn create_population(
    State(state): State<AppState>,
    payload: Result<Json<PopulationRequest>, JsonRejection>,
) -> Result<Json<Population>, AppError> {
    let Json(req) = payload.map_err(AppError::from_rejection)?;

    let population = PopulationGenerator::new(req.config(&state))?.generate();
    info!(
        passengers = population.passenger_count(),
        families = population.families.len(),
        seats_required = population.total_seats_required(),
        "population generated"
    );

    Ok(Json(population))
}
