//! Pure gamification engine
//!
//! Every function in here is deterministic given its inputs. Time and
//! randomness are passed in from the caller, which keeps the whole
//! module trivially testable.

pub mod achievements;
pub mod encouragement;
pub mod levels;
pub mod random;
pub mod streaks;
