//! Achievement system
//!
//! Static definitions plus pure check functions. Unlocks are recorded
//! by the tracker; nothing in here touches storage.

mod checker;
mod definitions;

pub use checker::{
    check_daily_volume_achievements, check_level_achievements, check_milestone_achievements,
    check_streak_achievements, check_voice_achievements, evaluate,
};
pub use definitions::{Achievement, AchievementId, ACHIEVEMENTS};
