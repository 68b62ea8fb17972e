//! Roster query: score every classmate against a subject and rank them.

use serde::Serialize;
use thiserror::Error;

use crate::models::Section;
use crate::overlap::{self, Policy};
use crate::ranking;

/// The subject position does not index a roster member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no student at position {position}")]
pub struct UnknownMember {
    pub position: usize,
}

/// One scored classmate. Built fresh per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatch {
    pub display_name: String,
    pub score: f64,
    pub contact_details: String,
    pub position: usize,
}

/// Scores every member other than the subject under the given policy and
/// returns them ranked, best overlap first.
///
/// The subject is excluded by roster position, not value equality: two
/// members with identical name, contact and schedule are distinct
/// candidates and each must appear in the other's results. Pure function
/// of its inputs; safe to run concurrently on a roster snapshot.
pub fn rank_by_overlap(
    section: &Section,
    subject: usize,
    policy: Policy,
) -> Result<Vec<RankedMatch>, UnknownMember> {
    let subject_schedule = &section
        .students
        .get(subject)
        .ok_or(UnknownMember { position: subject })?
        .schedule;

    let candidates = section
        .students
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != subject)
        .map(|(position, student)| RankedMatch {
            display_name: student.display_name.clone(),
            score: overlap::score(policy, subject_schedule, &student.schedule),
            contact_details: student.contact_details.clone(),
            position,
        })
        .collect();

    Ok(ranking::rank(candidates))
}
