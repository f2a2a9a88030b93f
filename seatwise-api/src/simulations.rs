use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use seatwise_allocator::{AllocationError, AllocationReport, SeatAllocator};
use seatwise_population::{Population, PopulationGenerator};
use serde::Serialize;
use tracing::info;
use crate::{error::AppError, populations::PopulationRequest, state::AppState};

#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub population: Population,
    pub report: AllocationReport,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/simulations", post(run_simulation))
}

/// POST /v1/simulations
/// Generate a population sized to the configured cabin and seat it
async fn run_simulation(
    State(state): State<AppState>,
    payload: Result<Json<PopulationRequest>, JsonRejection>,
) -> Result<Json<SimulationResponse>, AppError> {
    let Json(req) = payload.map_err(AppError::from_rejection)?;

    let mut seat_map = state.config.seat_map.build();
    let mut config = req.config(&state);
    config.capacity = seat_map.capacity();

    let mut population = PopulationGenerator::new(config)?.generate();
    let (population, report) = tokio::task::spawn_blocking(move || {
        let report = SeatAllocator::assign_seats(
            &mut seat_map,
            &mut population.passengers,
            &mut population.families,
        )?;
        Ok::<_, AllocationError>((population, report))
    })
    .await?
    .map_err(AppError::from_allocation)?;

    info!(
        report_id = %report.id,
        complete = report.is_complete(),
        seats_free = report.seats_free,
        "simulation finished"
    );

    Ok(Json(SimulationResponse { population, report }))
}
