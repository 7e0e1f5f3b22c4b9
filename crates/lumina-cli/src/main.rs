//! Lumina CLI - headless runner and inspection tools for the greeting card

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{config, play, shape};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "lumina")]
#[command(about = "Animated greeting card: gift, particle tree, explosion, message", long_about = None)]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the card headless with scripted taps and print what happens
    Play {
        /// TOML file overriding the device preset
        #[arg(long)]
        config: Option<String>,

        /// Use the mobile preset
        #[arg(long)]
        mobile: bool,

        /// Pick the preset from a browser user agent string
        #[arg(long)]
        user_agent: Option<String>,

        /// Simulated display frame rate
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Seconds until the gift box is tapped
        #[arg(long, default_value = "1.0")]
        open_at: f64,

        /// Seconds until the tree is tapped
        #[arg(long, default_value = "4.0")]
        ignite_at: f64,

        /// Total simulated seconds
        #[arg(long, default_value = "8.0")]
        duration: f64,

        /// Override the particle seed
        #[arg(long)]
        seed: Option<u32>,

        /// Pace frames against the wall clock instead of stepping instantly
        #[arg(long)]
        realtime: bool,
    },

    /// Print the resolved scene configuration
    Config {
        /// TOML file overriding the device preset
        #[arg(long)]
        config: Option<String>,

        /// Use the mobile preset
        #[arg(long)]
        mobile: bool,

        /// Pick the preset from a browser user agent string
        #[arg(long)]
        user_agent: Option<String>,

        /// Output format (toml or json)
        #[arg(long, default_value = "toml", value_parser = parse_format)]
        format: String,
    },

    /// Export the generated tree targets and launch velocities as JSON
    Shape {
        /// TOML file overriding the device preset
        #[arg(long)]
        config: Option<String>,

        /// Use the mobile preset
        #[arg(long)]
        mobile: bool,

        /// Pick the preset from a browser user agent string
        #[arg(long)]
        user_agent: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "toml" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: toml, json", s)),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play {
            config,
            mobile,
            user_agent,
            fps,
            open_at,
            ignite_at,
            duration,
            seed,
            realtime,
        } => play::run(play::PlayArgs {
            source: commands::ConfigSource {
                path: config,
                mobile,
                user_agent,
            },
            fps,
            open_at,
            ignite_at,
            duration,
            seed,
            realtime,
        }),
        Commands::Config {
            config,
            mobile,
            user_agent,
            format,
        } => config::run(
            commands::ConfigSource {
                path: config,
                mobile,
                user_agent,
            },
            &format,
        ),
        Commands::Shape {
            config,
            mobile,
            user_agent,
            output,
        } => shape::run(
            commands::ConfigSource {
                path: config,
                mobile,
                user_agent,
            },
            output.as_deref(),
        ),
    }
}
