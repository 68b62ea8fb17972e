use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::Schedule;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Service limits, loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Roster size used when a section is created without an explicit one.
    #[serde(default = "default_roster_size")]
    pub default_max_size: usize,
    /// Hard cap; client-supplied sizes above this are clamped.
    #[serde(default = "default_roster_cap")]
    pub max_section_size: usize,
    /// Length of generated passcodes.
    #[serde(default = "default_passcode_length")]
    pub passcode_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_max_size: default_roster_size(),
            max_section_size: default_roster_cap(),
            passcode_length: default_passcode_length(),
        }
    }
}

fn default_roster_size() -> usize {
    8
}

fn default_roster_cap() -> usize {
    64
}

fn default_passcode_length() -> usize {
    6
}

/// One roster member. Identity within a section is the member's position
/// in the roster, assigned at join time and never reassigned.
#[derive(Debug, Clone)]
pub struct Student {
    pub display_name: String,
    pub contact_details: String,
    pub schedule: Schedule,
}

/// A class roster behind a passcode. Append-only; members are never
/// removed and only their schedule is ever mutated.
#[derive(Debug, Clone)]
pub struct Section {
    pub section_name: String,
    pub section_details: String,
    pub max_size: usize,
    pub created_at: DateTime<Utc>,
    pub students: Vec<Student>,
}

impl Section {
    pub fn new(section_name: String, section_details: String, max_size: usize) -> Self {
        Self {
            section_name,
            section_details,
            max_size,
            created_at: Utc::now(),
            students: Vec::new(),
        }
    }

    pub fn with_students(mut self, students: Vec<Student>) -> Self {
        self.students = students;
        self
    }
}

// Request bodies

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSection {
    pub section_name: String,
    #[serde(default)]
    pub section_details: String,
    /// Zero or absent means "use the configured default".
    #[serde(default)]
    pub max_size: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub display_name: String,
    #[serde(default)]
    pub contact_details: String,
    #[serde(default)]
    pub schedule: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleUpdate {
    pub schedule: Vec<String>,
}

// Response bodies

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub section_name: String,
    pub section_details: String,
    pub max_size: usize,
    pub student_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&Section> for SectionView {
    fn from(section: &Section) -> Self {
        Self {
            section_name: section.section_name.clone(),
            section_details: section.section_details.clone(),
            max_size: section.max_size,
            student_count: section.students.len(),
            created_at: section.created_at,
        }
    }
}
