//! scriptcut CLI entry point.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scriptcut::Config;

#[derive(Parser)]
#[command(
    name = "scriptcut",
    version,
    about = "Transcript-driven video cut editor",
    long_about = "Edit a video by editing its transcript: blank a line's text to cut its \
                  span from playback. Playback, seeking, and exports all follow the \
                  resulting gap-free timeline."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the included segments and display timeline for a transcript
    Info {
        /// Transcript file in the editable line format
        transcript: PathBuf,
    },

    /// Play a transcript against a simulated media clock
    Play {
        /// Transcript file in the editable line format
        transcript: PathBuf,
        /// Media duration in seconds (defaults to the last item's end)
        #[arg(long)]
        duration: Option<f64>,
    },

    /// Exclude a time range from playback by blanking it in the transcript
    Trim {
        /// Transcript file in the editable line format
        transcript: PathBuf,
        /// Range start as HH:MM:SS.mmm
        from: String,
        /// Range end as HH:MM:SS.mmm
        to: String,
        /// Write the edited transcript here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the transcript or a (simulated) rendered video
    Export {
        #[command(subcommand)]
        what: ExportCommand,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ExportCommand {
    /// Write the transcript as a JSON document with HH:MM:SS.mmm timecodes
    Transcript {
        /// Transcript file in the editable line format
        transcript: PathBuf,
        /// Output path (default: transcript.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Simulated video render: fixed delay, placeholder MP4
    Video {
        /// Transcript file in the editable line format
        transcript: PathBuf,
        /// Output path (default: output.mp4)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Print the effective configuration as TOML
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SCRIPTCUT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Info { transcript } => commands::info::handle_info(&transcript),
        Command::Play {
            transcript,
            duration,
        } => commands::play::handle_play(&transcript, duration, &config),
        Command::Trim {
            transcript,
            from,
            to,
            output,
        } => commands::trim::handle_trim(&transcript, &from, &to, output.as_deref()),
        Command::Export { what } => match what {
            ExportCommand::Transcript { transcript, output } => {
                commands::export::handle_export_transcript(&transcript, output.as_deref())
            }
            ExportCommand::Video { transcript, output } => {
                commands::export::handle_export_video(&transcript, output.as_deref(), &config)
            }
        },
        Command::Config { action } => match action {
            ConfigCommand::Path => commands::config::handle_path(),
            ConfigCommand::Show => commands::config::handle_show(&config),
        },
    }
}
