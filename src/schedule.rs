//! A member's declared free time: a set of grid slots.
//!
//! Schedules are replaced wholesale, never patched. Construction is strict
//! (a token outside the grid is an error and leaves the schedule untouched);
//! once built, a schedule only ever contains valid slots, so comparisons
//! never have to consider foreign tokens.

use std::collections::HashSet;

use thiserror::Error;

use crate::timegrid::Slot;

/// A supplied slot token is not part of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown slot token '{token}'")]
pub struct InvalidSlot {
    pub token: String,
}

/// Set of half-hour slots a member is free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    slots: HashSet<Slot>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from slot tokens, rejecting any token outside the
    /// grid universe.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, InvalidSlot>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slots = HashSet::new();
        for token in tokens {
            let token = token.as_ref();
            match Slot::parse(token) {
                Some(slot) => {
                    slots.insert(slot);
                }
                None => {
                    return Err(InvalidSlot {
                        token: token.to_string(),
                    })
                }
            }
        }
        Ok(Self { slots })
    }

    /// Total overwrite. On an invalid token the error names the offending
    /// token and the existing schedule is left unchanged.
    pub fn replace<I, S>(&mut self, tokens: I) -> Result<(), InvalidSlot>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        *self = Self::from_tokens(tokens)?;
        Ok(())
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots present in both schedules.
    pub fn intersect(&self, other: &Schedule) -> HashSet<Slot> {
        self.slots.intersection(&other.slots).copied().collect()
    }

    /// Slots present in `self` but not in `other`.
    pub fn difference(&self, other: &Schedule) -> HashSet<Slot> {
        self.slots.difference(&other.slots).copied().collect()
    }

    /// Tokens in grid order (day-major, time-ascending).
    pub fn to_tokens(&self) -> Vec<String> {
        let mut slots: Vec<Slot> = self.slots.iter().copied().collect();
        slots.sort();
        slots.into_iter().map(|s| s.token()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(tokens: &[&str]) -> Schedule {
        Schedule::from_tokens(tokens).unwrap()
    }

    #[test]
    fn test_from_tokens_dedupes() {
        let s = schedule(&["0-0800-0830", "0-0800-0830", "0-0830-0900"]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_from_tokens_rejects_unknown() {
        let err = Schedule::from_tokens(["0-0800-0830", "9-0800-0830"]).unwrap_err();
        assert_eq!(err.token, "9-0800-0830");
    }

    #[test]
    fn test_replace_is_total_overwrite() {
        let mut s = schedule(&["0-0800-0830"]);
        s.replace(["3-1400-1430", "3-1430-1500"]).unwrap();
        assert_eq!(s.to_tokens(), vec!["3-1400-1430", "3-1430-1500"]);
    }

    #[test]
    fn test_replace_failure_leaves_schedule_unchanged() {
        let mut s = schedule(&["0-0800-0830"]);
        let err = s.replace(["1-0900-0930", "bogus"]).unwrap_err();
        assert_eq!(err.token, "bogus");
        assert_eq!(s.to_tokens(), vec!["0-0800-0830"]);
    }

    #[test]
    fn test_intersect_and_difference() {
        let a = schedule(&["0-0800-0830", "0-0830-0900", "4-1000-1030"]);
        let b = schedule(&["0-0830-0900", "4-1000-1030", "5-1100-1130"]);

        let common = a.intersect(&b);
        assert_eq!(common.len(), 2);
        assert!(common.contains(&crate::timegrid::Slot::parse("0-0830-0900").unwrap()));

        let only_a = a.difference(&b);
        assert_eq!(only_a.len(), 1);
        assert!(only_a.contains(&crate::timegrid::Slot::parse("0-0800-0830").unwrap()));
    }

    #[test]
    fn test_to_tokens_sorted_in_grid_order() {
        let s = schedule(&["6-1930-2000", "0-0800-0830", "3-1200-1230"]);
        assert_eq!(
            s.to_tokens(),
            vec!["0-0800-0830", "3-1200-1230", "6-1930-2000"]
        );
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert!(s.to_tokens().is_empty());
        assert!(s.intersect(&schedule(&["0-0800-0830"])).is_empty());
    }
}
