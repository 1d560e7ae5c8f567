//! BaseLingo command line: the deposit vault and the daily lesson.

mod commands;
mod config;

use clap::Parser;
use std::path::PathBuf;

use baselingo_utils::LogFormat;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "baselingo",
    version,
    about = "Learn languages and earn (mock) yield while you study"
)]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long, env = "BASELINGO_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory for the local store.
    #[arg(long, env = "BASELINGO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Signing key file (defaults to <data-dir>/key.json).
    #[arg(long, env = "BASELINGO_KEY_FILE")]
    key_file: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BASELINGO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BASELINGO_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Show the current deposit and what could be withdrawn.
    Status,

    /// Sign and record a deposit.
    Deposit {
        /// Amount in euros.
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        amount: f64,
    },

    /// Sign and withdraw the current deposit plus yield.
    Withdraw,

    /// Create a signing key file.
    Keygen {
        /// Replace an existing key file.
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML.
    Config,

    /// The daily lesson.
    Lesson {
        #[command(subcommand)]
        action: LessonAction,
    },
}

#[derive(clap::Subcommand)]
enum LessonAction {
    /// Print today's question.
    Show,

    /// Check an answer.
    Answer { option: String },

    /// Answer and post proof of the lesson.
    Share {
        /// The answer to today's question.
        #[arg(long)]
        answer: String,

        /// Proof sentence (defaults to the lesson's example).
        #[arg(long)]
        sentence: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => AppConfig::from_toml_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(key_file) = cli.key_file {
        config.key_file = Some(key_file);
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }

    baselingo_utils::init_logging(config.log_format, &config.log_level);
    if let Some(ref path) = cli.config {
        tracing::debug!("loaded config from {}", path.display());
    }

    match cli.command {
        Command::Status => commands::status(&config),
        Command::Deposit { amount } => commands::deposit(&config, amount).await,
        Command::Withdraw => commands::withdraw(&config).await,
        Command::Keygen { force } => commands::keygen(&config, force),
        Command::Config => commands::show_config(&config),
        Command::Lesson { action } => match action {
            LessonAction::Show => commands::lesson_show(),
            LessonAction::Answer { option } => commands::lesson_answer(&option),
            LessonAction::Share { answer, sentence } => {
                commands::lesson_share(&answer, sentence.as_deref()).await
            }
        },
    }
}
