//! Overlap scoring between two schedules.
//!
//! Both policies return hours as a non-negative multiple of 0.5. Cumulative
//! counts every shared half-hour; consecutive measures the longest unbroken
//! same-day run of shared half-hours.

use crate::schedule::Schedule;
use crate::timegrid::{Slot, DAY_COUNT};

/// How two schedules are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Total shared free time.
    Cumulative,
    /// Longest unbroken shared run within one day.
    Consecutive,
}

pub fn score(policy: Policy, subject: &Schedule, other: &Schedule) -> f64 {
    match policy {
        Policy::Cumulative => cumulative(subject, other),
        Policy::Consecutive => consecutive(subject, other),
    }
}

/// Shared half-hours, in hours: `0.5 × |intersection|`.
pub fn cumulative(subject: &Schedule, other: &Schedule) -> f64 {
    subject.intersect(other).len() as f64 * 0.5
}

/// Longest run of half-hours free in both schedules that are consecutive
/// within a single day, in hours.
///
/// Walks the grid in its fixed day-major order keeping a running chain
/// length. A slot missing from either schedule closes the chain, and the
/// chain is closed again at the end of every day, so runs never span days
/// and a run reaching the final slot of the walk is still counted.
pub fn consecutive(subject: &Schedule, other: &Schedule) -> f64 {
    let mut best: u32 = 0;
    for day in 0..DAY_COUNT {
        let mut run: u32 = 0;
        for slot in Slot::day_slots(day) {
            if subject.contains(slot) && other.contains(slot) {
                run += 1;
            } else {
                best = best.max(run);
                run = 0;
            }
        }
        // day boundary: flush the open chain
        best = best.max(run);
    }
    f64::from(best) * 0.5
}
