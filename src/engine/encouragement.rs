//! Encouragement messages shown after a completion

use super::random::RandomSource;

/// The fixed pool of encouragement messages
pub static MESSAGES: &[&str] = &[
    "Boom! Another one down! \u{1F4A5}",
    "You're unstoppable! \u{1F680}",
    "Task crushed! Keep going! \u{26A1}",
    "Productivity level: LEGENDARY! \u{1F3C6}",
    "You're on fire! \u{1F525}",
    "Mission accomplished! \u{1F3AF}",
    "Level up your life! \u{2B50}",
    "Crushing it! \u{1F4AA}",
    "Task master in action! \u{1F3AE}",
    "Victory achieved! \u{1F389}",
];

/// Pick a uniformly random encouragement message
pub fn pick_encouragement(rng: &mut dyn RandomSource) -> &'static str {
    MESSAGES[rng.next_below(MESSAGES.len())]
}
