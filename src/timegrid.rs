//! The fixed weekly time grid.
//!
//! Seven days of 24 half-hour slots between 08:00 and 20:00. Every slot has
//! a stable string token of the form `D-HHMM-HHMM` (day 0..6, start, end);
//! the 168-token universe is compiled in and never changes at runtime.

use std::fmt;

pub const DAY_COUNT: u8 = 7;
pub const SLOTS_PER_DAY: u8 = 24;
pub const GRID_SIZE: usize = DAY_COUNT as usize * SLOTS_PER_DAY as usize;

/// First slot of the day starts at 08:00.
const OPENING_MINUTES: u16 = 8 * 60;
const SLOT_MINUTES: u16 = 30;

/// One half-hour interval on a fixed weekday.
///
/// Slots are indexed, not parsed: `day` is the weekday (0..7) and `index`
/// is the slot-of-day (0..24). The derived ordering is day-major then
/// time-ascending, which the consecutive-overlap scan relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    day: u8,
    index: u8,
}

impl Slot {
    /// Builds a slot if `day` and `index` are inside the grid.
    pub fn new(day: u8, index: u8) -> Option<Self> {
        (day < DAY_COUNT && index < SLOTS_PER_DAY).then_some(Self { day, index })
    }

    pub fn day(self) -> u8 {
        self.day
    }

    pub fn index(self) -> u8 {
        self.index
    }

    /// Minutes after midnight at which this slot starts.
    pub fn start_minutes(self) -> u16 {
        OPENING_MINUTES + u16::from(self.index) * SLOT_MINUTES
    }

    /// Parses a `D-HHMM-HHMM` token. Anything outside the 168-slot universe
    /// (unknown day, unaligned start, wrong span, malformed digits) yields
    /// `None`, so foreign tokens simply never match a grid slot.
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.split('-');
        let day_part = parts.next()?;
        let start = parse_hhmm(parts.next()?)?;
        let end = parse_hhmm(parts.next()?)?;
        if parts.next().is_some() || day_part.len() != 1 {
            return None;
        }
        let day: u8 = day_part.parse().ok()?;
        if end != start.checked_add(SLOT_MINUTES)? {
            return None;
        }
        let offset = start.checked_sub(OPENING_MINUTES)?;
        if offset % SLOT_MINUTES != 0 {
            return None;
        }
        Self::new(day, (offset / SLOT_MINUTES) as u8)
    }

    /// The canonical `D-HHMM-HHMM` token for this slot.
    pub fn token(self) -> String {
        let start = self.start_minutes();
        let end = start + SLOT_MINUTES;
        format!(
            "{}-{:02}{:02}-{:02}{:02}",
            self.day,
            start / 60,
            start % 60,
            end / 60,
            end % 60
        )
    }

    /// All 168 slots in day-major, time-ascending order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..DAY_COUNT).flat_map(Self::day_slots)
    }

    /// The 24 slots of one day, time-ascending.
    pub fn day_slots(day: u8) -> impl Iterator<Item = Slot> {
        debug_assert!(day < DAY_COUNT);
        (0..SLOTS_PER_DAY).map(move |index| Slot { day, index })
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

fn parse_hhmm(s: &str) -> Option<u16> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hh: u16 = s[..2].parse().ok()?;
    let mm: u16 = s[2..].parse().ok()?;
    if hh > 23 || mm > 59 {
        return None;
    }
    Some(hh * 60 + mm)
}
