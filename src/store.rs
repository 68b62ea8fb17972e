//! Section repository.
//!
//! The ranking engine never touches shared state; everything mutable lives
//! behind the [`SectionStore`] seam. The in-memory implementation locks per
//! section, so joins and schedule updates for one roster serialize (keeping
//! the max-size check race-free) while queries for different sections run
//! in parallel. Ranking reads take a cloned snapshot under the per-section
//! lock and compute outside it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use thiserror::Error;
use tracing::debug;

use crate::models::{NewSection, Section, ServiceConfig, Student};
use crate::passcode;
use crate::schedule::InvalidSlot;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown section passcode '{0}'")]
    UnknownSection(String),
    #[error("no student at position {0}")]
    UnknownStudent(usize),
    #[error("section is full ({max} students)")]
    SectionFull { max: usize },
    #[error(transparent)]
    InvalidSlot(#[from] InvalidSlot),
}

/// Read/write operations on stored sections.
pub trait SectionStore: Send + Sync {
    /// Creates a section and returns its fresh passcode.
    fn create(&self, new: NewSection) -> String;

    /// Whether a passcode names a stored section.
    fn verify(&self, passcode: &str) -> bool;

    /// A consistent clone of one section, for read-only queries.
    fn snapshot(&self, passcode: &str) -> Option<Section>;

    /// Appends a member and returns its roster position.
    fn join(&self, passcode: &str, student: Student) -> Result<usize, StoreError>;

    /// Wholesale schedule overwrite for one member. The schedule is left
    /// unchanged when any token is invalid.
    fn replace_schedule(
        &self,
        passcode: &str,
        position: usize,
        tokens: &[String],
    ) -> Result<(), StoreError>;
}

pub struct MemoryStore {
    limits: ServiceConfig,
    sections: RwLock<HashMap<String, Arc<Mutex<Section>>>>,
}

impl MemoryStore {
    pub fn new(limits: ServiceConfig) -> Self {
        Self {
            limits,
            sections: RwLock::new(HashMap::new()),
        }
    }

    fn section(&self, passcode: &str) -> Option<Arc<Mutex<Section>>> {
        self.sections.read().unwrap().get(passcode).cloned()
    }
}

impl SectionStore for MemoryStore {
    fn create(&self, new: NewSection) -> String {
        let max_size = if new.max_size == 0 {
            self.limits.default_max_size
        } else {
            new.max_size.min(self.limits.max_section_size)
        };
        let section = Section::new(new.section_name, new.section_details, max_size);

        let mut sections = self.sections.write().unwrap();
        // regenerate on collision; the write lock makes check-and-insert atomic
        let passcode = loop {
            let candidate = passcode::generate(self.limits.passcode_length);
            if !sections.contains_key(&candidate) {
                break candidate;
            }
            debug!("Passcode collision on '{}', regenerating", candidate);
        };
        sections.insert(passcode.clone(), Arc::new(Mutex::new(section)));
        passcode
    }

    fn verify(&self, passcode: &str) -> bool {
        self.sections.read().unwrap().contains_key(passcode)
    }

    fn snapshot(&self, passcode: &str) -> Option<Section> {
        self.section(passcode).map(|s| s.lock().unwrap().clone())
    }

    fn join(&self, passcode: &str, student: Student) -> Result<usize, StoreError> {
        let section = self
            .section(passcode)
            .ok_or_else(|| StoreError::UnknownSection(passcode.to_string()))?;
        let mut section = section.lock().unwrap();
        if section.students.len() >= section.max_size {
            return Err(StoreError::SectionFull {
                max: section.max_size,
            });
        }
        section.students.push(student);
        Ok(section.students.len() - 1)
    }

    fn replace_schedule(
        &self,
        passcode: &str,
        position: usize,
        tokens: &[String],
    ) -> Result<(), StoreError> {
        let section = self
            .section(passcode)
            .ok_or_else(|| StoreError::UnknownSection(passcode.to_string()))?;
        let mut section = section.lock().unwrap();
        let student = section
            .students
            .get_mut(position)
            .ok_or(StoreError::UnknownStudent(position))?;
        student.schedule.replace(tokens)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Schedule;

    fn store() -> MemoryStore {
        MemoryStore::new(ServiceConfig::default())
    }

    fn new_section(name: &str, max_size: usize) -> NewSection {
        NewSection {
            section_name: name.to_string(),
            section_details: String::new(),
            max_size,
        }
    }

    fn student(name: &str) -> Student {
        Student {
            display_name: name.to_string(),
            contact_details: String::new(),
            schedule: Schedule::new(),
        }
    }

    #[test]
    fn test_create_and_verify() {
        let store = store();
        let passcode = store.create(new_section("CIS 350", 4));
        assert_eq!(passcode.len(), 6);
        assert!(store.verify(&passcode));
        assert!(!store.verify("NOPE00"));
    }

    #[test]
    fn test_max_size_defaults_and_clamping() {
        let store = store();

        let defaulted = store.create(new_section("a", 0));
        assert_eq!(store.snapshot(&defaulted).unwrap().max_size, 8);

        let clamped = store.create(new_section("b", 1000));
        assert_eq!(store.snapshot(&clamped).unwrap().max_size, 64);

        let explicit = store.create(new_section("c", 12));
        assert_eq!(store.snapshot(&explicit).unwrap().max_size, 12);
    }

    #[test]
    fn test_join_assigns_stable_positions() {
        let store = store();
        let passcode = store.create(new_section("CIS 350", 3));
        assert_eq!(store.join(&passcode, student("a")).unwrap(), 0);
        assert_eq!(store.join(&passcode, student("b")).unwrap(), 1);
        assert_eq!(store.join(&passcode, student("c")).unwrap(), 2);
    }

    #[test]
    fn test_join_full_section() {
        let store = store();
        let passcode = store.create(new_section("tiny", 1));
        store.join(&passcode, student("a")).unwrap();
        let err = store.join(&passcode, student("b")).unwrap_err();
        assert!(matches!(err, StoreError::SectionFull { max: 1 }));
        assert_eq!(store.snapshot(&passcode).unwrap().students.len(), 1);
    }

    #[test]
    fn test_join_unknown_section() {
        let err = store().join("XXXXXX", student("a")).unwrap_err();
        assert!(matches!(err, StoreError::UnknownSection(_)));
    }

    #[test]
    fn test_replace_schedule() {
        let store = store();
        let passcode = store.create(new_section("CIS 350", 2));
        store.join(&passcode, student("a")).unwrap();

        store
            .replace_schedule(&passcode, 0, &["0-0800-0830".to_string()])
            .unwrap();
        let snapshot = store.snapshot(&passcode).unwrap();
        assert_eq!(snapshot.students[0].schedule.to_tokens(), vec!["0-0800-0830"]);
    }

    #[test]
    fn test_replace_schedule_invalid_token_leaves_schedule() {
        let store = store();
        let passcode = store.create(new_section("CIS 350", 2));
        store.join(&passcode, student("a")).unwrap();
        store
            .replace_schedule(&passcode, 0, &["1-0900-0930".to_string()])
            .unwrap();

        let err = store
            .replace_schedule(&passcode, 0, &["garbage".to_string()])
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidSlot(_)));
        let snapshot = store.snapshot(&passcode).unwrap();
        assert_eq!(snapshot.students[0].schedule.to_tokens(), vec!["1-0900-0930"]);
    }

    #[test]
    fn test_replace_schedule_unknown_student() {
        let store = store();
        let passcode = store.create(new_section("CIS 350", 2));
        let err = store
            .replace_schedule(&passcode, 5, &[])
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownStudent(5)));
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let store = store();
        let passcode = store.create(new_section("CIS 350", 4));
        store.join(&passcode, student("a")).unwrap();

        let mut snapshot = store.snapshot(&passcode).unwrap();
        snapshot.students.clear();

        assert_eq!(store.snapshot(&passcode).unwrap().students.len(), 1);
    }
}
