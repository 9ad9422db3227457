use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages (default for verbose)
    Debug,
    /// Trace-level messages, including one event per rendered frame
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// When to emit ANSI escape sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Always emit escape sequences
    Always,
    /// Never emit escape sequences
    Never,
}

/// On-disk encoding of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

#[derive(Parser)]
#[command(name = "anticipate")]
#[command(about = "anticipate - render autocomplete prompt frames from snapshot files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses RUST_LOG or defaults to 'off'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Theme file (TOML) overriding the default colors and glyphs
    #[arg(short = 't', long, global = true, value_name = "PATH")]
    pub theme: Option<PathBuf>,

    /// When to color the output
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Terminal width to fit frames to (defaults to the detected width)
    #[arg(short = 'w', long, global = true)]
    pub width: Option<u16>,
}

impl Cli {
    /// Level requested on the command line, if any. `--log-level` wins over
    /// `--verbose`.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level.into()),
            (None, true) => Some(LevelFilter::DEBUG),
            (None, false) => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one snapshot file and print the frame
    Render {
        /// Snapshot file (.json or .toml), or '-' for stdin
        #[arg(value_name = "SNAPSHOT")]
        path: PathBuf,

        /// Snapshot encoding (defaults to the file extension; JSON for stdin)
        #[arg(short = 'f', long, value_enum)]
        format: Option<SnapshotFormat>,

        /// Scroll the window so the highlighted candidate is visible
        #[arg(long)]
        follow: bool,
    },

    /// Render a scripted walk through every prompt state
    Demo {
        /// Rows in the candidate window
        #[arg(long, default_value = "5")]
        scroll: usize,
    },

    /// Print the theme in effect (defaults, --theme and width fitting) as TOML
    Theme,
}
