use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shotlog::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "shotlog")]
#[command(about = "Shooting practice analytics: accuracy, streaks, XP and badges")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to .shotlog/config.toml, then ~/.shotlog/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show KPIs and accuracy breakdowns for a date window
    Summary {
        /// JSON file with an array of sessions
        #[arg(short, long)]
        sessions: PathBuf,

        /// First day to include (YYYY-MM-DD); defaults to the configured window
        #[arg(long)]
        from: Option<String>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Comma-separated drill types (empty means all)
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,

        /// Only rounds shot in this direction ("all" for no filter)
        #[arg(long)]
        direction: Option<String>,

        /// Only zones at this range (paint, midrange, 3pt)
        #[arg(long)]
        range: Option<String>,

        /// Include every session regardless of date
        #[arg(long)]
        all_time: bool,
    },

    /// Show current and longest training streak with the day heatmap
    Streak {
        #[arg(short, long)]
        sessions: PathBuf,

        /// Heatmap width in weeks (defaults to the configured value)
        #[arg(long)]
        weeks: Option<u32>,
    },

    /// Score one session, or total the XP of a session file
    Xp {
        /// Sessions file; prints total XP and level progress
        #[arg(short, long, conflicts_with_all = ["attempts", "made"])]
        sessions: Option<PathBuf>,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        attempts: i64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        made: i64,

        /// Drill type (spot, catch_shoot, off_dribble, run_half)
        #[arg(short = 't', long = "type", default_value = "spot")]
        training_type: String,
    },

    /// Evaluate badges and record new unlocks
    Badges {
        #[arg(short, long, required_unless_present = "list")]
        sessions: Option<PathBuf>,

        /// User id (defaults to the configured user)
        #[arg(short, long)]
        user: Option<String>,

        /// Only list badges already unlocked
        #[arg(long)]
        list: bool,
    },

    /// Write the session log as CSV
    Export {
        #[arg(short, long)]
        sessions: PathBuf,

        /// Output file (defaults to training_log_<today>.csv; "-" for stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Init { force } = cli.command {
        return cli::init::init_command(cli.config, force);
    }

    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(cli.config.as_deref(), &work_dir)?;

    match cli.command {
        Commands::Summary {
            sessions,
            from,
            to,
            types,
            direction,
            range,
            all_time,
        } => {
            let args = cli::summary::SummaryArgs {
                from,
                to,
                types,
                direction,
                range,
                all_time,
            };
            cli::summary::summary_command(&config, &sessions, &args)?;
        }
        Commands::Streak { sessions, weeks } => {
            cli::streak::streak_command(&config, &sessions, weeks)?;
        }
        Commands::Xp {
            sessions,
            attempts,
            made,
            training_type,
        } => match sessions {
            Some(path) => cli::xp::total_xp_command(&path)?,
            None => cli::xp::session_xp_command(attempts, made, &training_type),
        },
        Commands::Badges {
            sessions,
            user,
            list,
        } => {
            cli::badges::badges_command(&config, sessions.as_deref(), user, list).await?;
        }
        Commands::Export { sessions, out } => {
            cli::export::export_command(&sessions, out)?;
        }
        Commands::Init { .. } => {}
    }

    Ok(())
}
