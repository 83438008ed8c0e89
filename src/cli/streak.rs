//! Streak command implementation

use anyhow::Result;
use std::path::Path;

use shotlog::config::Config;
use shotlog::stats::achievements::{
    DayIntensity, IntensityTier, StreakSummary, build_day_intensity_map, heatmap_window,
    trained_day_counts, week_columns,
};
use shotlog::stats::dates::today;

use super::input::load_sessions;

fn cell(day: &DayIntensity) -> char {
    match day.tier() {
        IntensityTier::Rest => '·',
        IntensityTier::Light => '░',
        IntensityTier::Solid => '▒',
        IntensityTier::Heavy => '█',
    }
}

/// Print streaks and a GitHub-style grid (one column per week, Mon at top)
pub fn streak_command(config: &Config, sessions_path: &Path, weeks: Option<u32>) -> Result<()> {
    let sessions = load_sessions(sessions_path)?;
    let today = today();

    let summary = StreakSummary::from_sessions(&sessions, today);
    println!("Current streak: {} day(s)", summary.current);
    println!("Longest streak: {} day(s)", summary.longest);
    println!("Active days:    {}", summary.active_days);

    let weeks = weeks.unwrap_or(config.settings.heatmap_weeks).max(1);
    let (start, end) = heatmap_window(today, weeks);
    let cells = build_day_intensity_map(start, end, &trained_day_counts(&sessions));
    let columns = week_columns(&cells);

    println!();
    for (weekday, label) in ["Mon", "", "Wed", "", "Fri", "", "Sun"].iter().enumerate() {
        let row: String = columns
            .iter()
            .map(|column| column.get(weekday).map(cell).unwrap_or(' '))
            .collect();
        println!("{:>3} {}", label, row);
    }
    println!(
        "    · {}  ░ {}  ▒ {}  █ {}",
        IntensityTier::Rest.legend(),
        IntensityTier::Light.legend(),
        IntensityTier::Solid.legend(),
        IntensityTier::Heavy.legend()
    );

    Ok(())
}
