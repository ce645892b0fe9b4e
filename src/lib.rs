//! Questline - gamified personal task tracker
//!
//! Tasks earn XP when completed. XP drives a quadratic level curve,
//! daily completion streaks and a small set of achievements. One
//! system-generated bonus task appears per day. Everything lives in a
//! local SQLite database under `~/.questline/`.
//!
//! The crate splits into a pure [`engine`] (levels, streaks,
//! achievement checks - no I/O), a [`store`] for persistence, and a
//! [`tracker`] that ties the two together.

pub mod config;
pub mod domain;
pub mod engine;
pub mod store;
pub mod tracker;

pub use domain::*;
