//! groupmatch — section rosters with schedule-overlap ranking.
//!
//! An instructor creates a *section* (a roster behind a short passcode),
//! students join with their weekly availability, and any student can ask for
//! classmates ranked by shared free time: total half-hours in common
//! (cumulative) or the longest unbroken same-day run (consecutive).
//!
//! The ranking engine is pure and synchronous: [`timegrid`] defines the
//! fixed weekly grid, [`schedule`] the per-member slot sets, [`overlap`] the
//! two scoring policies, [`ranking`] the stable sort, and [`matcher`] the
//! roster query tying them together. [`store`] and [`web`] wrap the engine
//! in an axum service with an in-memory section repository.

pub mod config;
pub mod matcher;
pub mod models;
pub mod overlap;
pub mod passcode;
pub mod ranking;
pub mod schedule;
pub mod store;
pub mod timegrid;
pub mod web;
