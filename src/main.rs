// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use polymsg::app_config::{self, Config};
use polymsg::app_controller::{Command, Controller};
use polymsg::database::models::MessageStatus;
use polymsg::search::SearchRequest;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a message
    Create {
        /// Message text
        message: String,

        /// Initial status (defaults to pending)
        #[arg(short, long)]
        status: Option<MessageStatus>,

        /// Translation as LANG=TEXT, repeatable (e.g. -t fr=Bonjour)
        #[arg(short, long = "translation", value_parser = parse_translation)]
        translations: Vec<(String, String)>,
    },

    /// Show a message without its translations
    Get {
        /// Message id
        id: i64,
    },

    /// Show one translation of a message
    Translation {
        /// Message id
        id: i64,

        /// Two-letter language code (e.g. 'fr')
        language: String,
    },

    /// Change a message's status
    SetStatus {
        /// Message id
        id: i64,

        /// New status: active, pending, spam or deleted
        status: MessageStatus,
    },

    /// Search messages
    Search {
        /// Text to look for, ignoring case
        #[arg(short, long)]
        query: Option<String>,

        /// Only messages with this status
        #[arg(short, long)]
        status: Option<String>,

        /// createdAt, updatedAt or message
        #[arg(long)]
        sort_by: Option<String>,

        /// ASC or DESC
        #[arg(long)]
        sort_order: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Messages per page
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Generate shell completions for polymsg
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// polymsg - message store with translations and search
#[derive(Parser, Debug)]
#[command(name = "polymsg")]
#[command(version)]
#[command(about = "Store, translate and search short messages")]
#[command(long_about = "polymsg stores short messages with per-language translations and searches them.

EXAMPLES:
    polymsg create \"Hello, I'm a message\" -t fr=\"Bonjour, je suis un message\"
    polymsg get 1
    polymsg translation 1 fr
    polymsg set-status 1 active
    polymsg search -q hello -s active --sort-by createdAt --sort-order desc -p 1 -l 10
    polymsg completions bash > polymsg.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

fn parse_translation(value: &str) -> Result<(String, String), String> {
    let (language, text) = value
        .split_once('=')
        .ok_or_else(|| format!("expected LANG=TEXT, got '{}'", value))?;
    Ok((language.trim().to_string(), text.to_string()))
}

// @struct: Custom logger implementation; filtering is left to log::max_level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let command = match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "polymsg", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Create {
            message,
            status,
            translations,
        } => Command::Create {
            message,
            status,
            translations,
        },
        Commands::Get { id } => Command::Get { id },
        Commands::Translation { id, language } => Command::Translation { id, language },
        Commands::SetStatus { id, status } => Command::SetStatus { id, status },
        Commands::Search {
            query,
            status,
            sort_by,
            sort_order,
            page,
            limit,
        } => Command::Search(SearchRequest {
            query,
            status,
            sort_by,
            sort_order,
            page,
            limit,
        }),
    };

    let mut config = Config::load_or_create(&cli.config_path)?;

    match &cli.log_level {
        Some(level) => config.log_level = level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    let controller = Controller::with_config(config)?;
    let output = controller
        .run(command)
        .await
        .map_err(|e| anyhow!("{:#}", e))?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
