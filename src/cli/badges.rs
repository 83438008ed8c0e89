//! Badges command implementation

use anyhow::{Context, Result, bail};
use std::path::Path;

use shotlog::config::Config;
use shotlog::stats::SqliteAchievementStore;
use shotlog::stats::achievements::{
    AchievementStore, UnlockedAchievement, evaluate_and_award,
};

use super::input::load_sessions;

fn print_badge(unlocked: &UnlockedAchievement) {
    let a = unlocked.achievement;
    println!(
        "  {} {:<14} {}  ({})",
        a.icon,
        a.name,
        a.description,
        unlocked.unlocked_at.format("%Y-%m-%d")
    );
}

/// Evaluate the session history and record new badges, or list unlocked ones
pub async fn badges_command(
    config: &Config,
    sessions_path: Option<&Path>,
    user: Option<String>,
    list: bool,
) -> Result<()> {
    let uid = user.unwrap_or_else(|| config.settings.user_id.clone());
    let db_path = config.database_path();
    let store = SqliteAchievementStore::open(&db_path)?;

    if list {
        let unlocked = store
            .list(&uid)
            .await
            .with_context(|| format!("Failed to list badges for {}", uid))?;
        if unlocked.is_empty() {
            println!("No badges unlocked yet.");
            return Ok(());
        }
        println!("Badges ({}):", unlocked.len());
        for badge in &unlocked {
            print_badge(badge);
        }
        return Ok(());
    }

    let Some(sessions_path) = sessions_path else {
        bail!("--sessions is required unless --list is given");
    };
    let sessions = load_sessions(sessions_path)?;
    let awarded = evaluate_and_award(&uid, &sessions, &store).await?;

    if awarded.is_empty() {
        println!("No new badges.");
    } else {
        println!("New badges ({}):", awarded.len());
        for badge in &awarded {
            print_badge(badge);
        }
    }
    Ok(())
}
