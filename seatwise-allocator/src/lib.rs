pub mod allocator;
pub mod individuals;
pub mod report;
pub mod runs;
pub mod single_row;
pub mod split;
pub mod two_children;

mod claims;

pub use allocator::SeatAllocator;
pub use report::AllocationReport;
pub use runs::{free_runs, leftmost_run, longest_free_run, FreeRun};

use seatwise_core::{CoreError, SeatId};

#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// Input breaks the data model; nothing was allocated.
    #[error("Invalid allocation input: {0}")]
    InvalidInput(#[source] CoreError),

    #[error("Seat {seat} was taken between planning and commit")]
    SeatConflict { seat: SeatId },

    #[error("Staged seat index {index} is outside the row")]
    StaleClaim { index: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}
