use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use seatwise_allocator::{AllocationError, AllocationReport, SeatAllocator};
use seatwise_core::{Family, Passenger, SeatId, SeatMap};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::{error::AppError, state::AppState};

/// Upper bound on request-supplied seat maps.
pub const MAX_SEATS: usize = 10_000;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SeatMapRequest {
    pub rows: usize,
    pub seats_per_row: usize,
    /// Seats taken before allocation starts.
    #[serde(default)]
    pub occupied: Vec<SeatId>,
}

#[derive(Debug, Deserialize)]
pub struct AllocationRequest {
    pub seat_map: Option<SeatMapRequest>,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
    #[serde(default)]
    pub families: Vec<Family>,
}

#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    pub report: AllocationReport,
    pub passengers: Vec<Passenger>,
    pub families: Vec<Family>,
}

impl SeatMapRequest {
    fn build(&self) -> Result<SeatMap, AppError> {
        if self.rows == 0 || self.seats_per_row == 0 {
            return Err(AppError::ValidationError(
                "seat map needs at least one row and one seat per row".to_string(),
            ));
        }

        let seats = self.rows.checked_mul(self.seats_per_row);
        if seats.map_or(true, |seats| seats > MAX_SEATS) {
            return Err(AppError::ValidationError(format!(
                "seat map of {} x {} seats exceeds the limit of {}",
                self.rows, self.seats_per_row, MAX_SEATS
            )));
        }

        SeatMap::new(self.rows, self.seats_per_row)
            .with_blocked(&self.occupied)
            .map_err(|e| AppError::ValidationError(e.to_string()))
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/allocations", post(create_allocation))
}

/// POST /v1/allocations
/// Seat the given individuals and families on a fresh seat map
async fn create_allocation(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> Result<Json<AllocationResponse>, AppError> {
    let Json(req) = payload.map_err(AppError::from_rejection)?;

    let mut seat_map = match &req.seat_map {
        Some(layout) => layout.build()?,
        None => state.config.seat_map.build(),
    };
    let mut passengers = req.passengers;
    let mut families = req.families;

    info!(
        individuals = passengers.len(),
        families = families.len(),
        seats = seat_map.capacity(),
        "allocation requested"
    );

    // CPU-bound; keep it off the async workers.
    let response = tokio::task::spawn_blocking(move || {
        let report = SeatAllocator::assign_seats(&mut seat_map, &mut passengers, &mut families)?;
        Ok::<_, AllocationError>(AllocationResponse {
            report,
            passengers,
            families,
        })
    })
    .await?
    .map_err(AppError::from_allocation)?;

    Ok(Json(response))
}
