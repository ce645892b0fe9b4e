//! Voice command implementation

use anyhow::{bail, Result};

use questline::tracker::Tracker;

/// Add a task from a dictated transcript
pub fn voice_command(tracker: &Tracker, transcript: &str) -> Result<()> {
    if transcript.trim().is_empty() {
        bail!("transcript is empty");
    }

    let task = tracker.add_voice_task(transcript)?;

    println!(
        "Added \"{}\" from voice input ({} XP on completion)",
        task.title, task.xp_reward
    );
    println!("  id: {}", task.id);

    Ok(())
}
