//! XP command implementation

use anyhow::Result;
use std::path::Path;

use shotlog::TrainingType;
use shotlog::stats::achievements::{PlayerLevel, XpInput, calculate_session_xp, total_xp};

use super::input::load_sessions;

/// Score a single session from raw numbers
pub fn session_xp_command(attempts: i64, made: i64, training_type: &str) {
    let input = XpInput::new(attempts, made, TrainingType::parse(training_type));
    let result = calculate_session_xp(&input);
    let b = &result.breakdown;

    println!("Drill:          {}", input.training_type.label());
    println!("Volume XP:      {}", b.volume_xp);
    println!("Accuracy:       {}%", b.accuracy_pct);
    println!("Accuracy bonus: +{}", b.accuracy_bonus);
    println!("Multiplier:     x{:.2}", b.multiplier);
    println!("XP:             {}", result.xp);
}

/// Total XP of a session file and the resulting level
pub fn total_xp_command(sessions_path: &Path) -> Result<()> {
    let sessions = load_sessions(sessions_path)?;
    let player = PlayerLevel::new(total_xp(&sessions));

    println!("Total XP: {}", player.total_xp);
    if player.is_max_level() {
        println!("Level {} (max)", player.level);
    } else {
        println!(
            "Level {}: {}% to level {} ({} XP to go)",
            player.level,
            player.progress_percent(),
            player.level + 1,
            player.xp_to_next()
        );
    }
    Ok(())
}
