//! Summary command implementation

use anyhow::Result;
use std::path::Path;

use shotlog::TrainingType;
use shotlog::config::Config;
use shotlog::stats::dates::{add_days, today};
use shotlog::stats::{Dashboard, SessionFilter, ZoneFilter, range_summary_line};

use super::input::{load_sessions, parse_day};

pub struct SummaryArgs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub types: Vec<String>,
    pub direction: Option<String>,
    pub range: Option<String>,
    pub all_time: bool,
}

fn session_filter(config: &Config, args: &SummaryArgs) -> Result<SessionFilter> {
    let mut filter = SessionFilter::new().types(
        args.types
            .iter()
            .filter(|t| !t.trim().is_empty())
            .map(|t| TrainingType::parse(t)),
    );

    if let Some(to) = &args.to {
        filter = filter.to(parse_day(to, "--to")?);
    }
    match &args.from {
        Some(from) => filter = filter.from(parse_day(from, "--from")?),
        None if !args.all_time => {
            let end = filter.to.unwrap_or_else(today);
            let window = config.settings.default_window_days.max(1) as i64;
            filter = filter.from(add_days(end, -(window - 1)));
        }
        None => {}
    }
    Ok(filter)
}

/// Print KPIs and every breakdown for the selected window
pub fn summary_command(config: &Config, sessions_path: &Path, args: &SummaryArgs) -> Result<()> {
    let sessions = load_sessions(sessions_path)?;
    let filter = session_filter(config, args)?;
    let zones = ZoneFilter::from_raw(args.direction.as_deref(), args.range.as_deref());

    let dashboard = Dashboard::build(&sessions, &filter, &zones);

    println!("Sessions: {}", dashboard.sessions);
    println!("Accuracy: {}%", dashboard.kpis.accuracy);
    println!("Volume:   {} shots", dashboard.kpis.volume);
    match &dashboard.kpis.best_zone {
        Some(best) => println!("Best zone: {} ({}%)", best.label, best.acc),
        None => println!("Best zone: -"),
    }

    if !dashboard.by_position.is_empty() {
        println!("\nBy position:");
        for (position, zone) in &dashboard.by_position {
            println!(
                "  {:<14} {:>4}/{:<4} {:>3}%",
                position.label(),
                zone.made,
                zone.attempts,
                zone.acc
            );
        }
    }

    if !dashboard.by_date.is_empty() {
        println!("\nBy date:");
        for point in &dashboard.by_date {
            println!("  {}  {:>3}%", point.date, point.acc);
        }
    }

    println!("\nBy drill type:");
    for row in &dashboard.by_type {
        println!(
            "  {:<16} {:>4}/{:<4}",
            row.training_type.label(),
            row.made,
            row.attempts
        );
    }

    if !dashboard.by_range.is_empty() {
        println!("\nBy range: {}", range_summary_line(&dashboard.by_range));
    }

    Ok(())
}
