mod cli;
mod clock;
mod config;
mod display;
mod error;
mod models;
mod player;
mod prompt;
mod scheduler;
mod store;

use clap::{value_parser, Parser, Subcommand};
use std::path::PathBuf;

use cli::Context;
use models::Weekday;

#[derive(Parser)]
#[command(name = "chime")]
#[command(about = "Weekly alarms with automatic snoozing", long_about = None)]
struct Cli {
    /// Path to config file (defaults to chime.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Alarm file to use instead of the configured one
    #[arg(long, global = true)]
    alarms: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shows current time in DD Mon YYYY HH:MM:SS
    ShowTime,
    /// Sets an alarm for given time
    SetAlarm {
        /// Day of the week, e.g. Monday
        #[arg(long)]
        weekday: Option<Weekday>,

        /// Hour of the day (0-23)
        #[arg(long, value_parser = value_parser!(u8).range(0..=23))]
        hour: Option<u8>,

        /// Minute of the hour (0-59)
        #[arg(long, value_parser = value_parser!(u8).range(0..=59))]
        minute: Option<u8>,

        /// Keep running and ring alarms once the alarm is set
        #[arg(long)]
        watch: bool,
    },
    /// Lists all the alarms
    List,
    /// Deletes alarm for given id
    Delete {
        /// Alarm id as shown by 'list'
        #[arg(value_parser = value_parser!(u64).range(1..))]
        id: Option<u64>,
    },
    /// Snoozes an alarm by a number of minutes
    Snooze {
        /// Alarm id as shown by 'list'
        #[arg(value_parser = value_parser!(u64).range(1..))]
        id: Option<u64>,

        /// Minutes to push the alarm back by
        #[arg(long, value_parser = value_parser!(u32).range(1..))]
        minutes: Option<u32>,
    },
    /// Rings alarms when they are due
    Watch {
        /// Scan once and exit instead of running forever
        #[arg(long)]
        once: bool,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize chime.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Watch { .. } | Commands::SetAlarm { watch: true, .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let context = || Context::load(cli.config.as_deref(), cli.alarms.clone());

    match cli.command {
        Commands::ShowTime => cli::time::show(),
        Commands::SetAlarm {
            weekday,
            hour,
            minute,
            watch,
        } => {
            let ctx = context()?;
            cli::alarm::set(&ctx, weekday, hour, minute)?;
            if watch {
                cli::watch::run(&ctx, false)?;
            }
            Ok(())
        }
        Commands::List => cli::alarm::list(&context()?),
        Commands::Delete { id } => cli::alarm::delete(&context()?, id),
        Commands::Snooze { id, minutes } => cli::alarm::snooze(&context()?, id, minutes),
        Commands::Watch { once } => cli::watch::run(&context()?, once),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    }
}
