//! Free-run scanning over a single row.
//!
//! A run is a maximal stretch of free seats that are next to each other both
//! in the row slice and physically (consecutive column numbers). A gap in
//! the column numbering breaks a run even when no occupied seat sits there.

use seatwise_core::Seat;

/// `len` free seats starting at slice position `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeRun {
    pub start: usize,
    pub len: usize,
}

impl FreeRun {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// All maximal free runs, left to right.
pub fn free_runs(row: &[Seat]) -> Vec<FreeRun> {
    let mut runs = Vec::new();
    let mut current: Option<FreeRun> = None;

    for (index, seat) in row.iter().enumerate() {
        if !seat.is_free() {
            runs.extend(current.take());
            continue;
        }

        current = match current {
            Some(mut run) if row[index - 1].id.column + 1 == seat.id.column => {
                run.len += 1;
                Some(run)
            }
            Some(run) => {
                runs.push(run);
                Some(FreeRun { start: index, len: 1 })
            }
            None => Some(FreeRun { start: index, len: 1 }),
        };
    }

    runs.extend(current);
    runs
}

pub fn longest_free_run(row: &[Seat]) -> usize {
    free_runs(row).iter().map(|run| run.len).max().unwrap_or(0)
}

/// First run (scanning left to right) long enough for `demand` seats.
pub fn leftmost_run(row: &[Seat], demand: usize) -> Option<FreeRun> {
    free_runs(row).into_iter().find(|run| run.len >= demand)
}
