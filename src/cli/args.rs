//! CLI argument definitions for `studentdata`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use student_data::catalog::LoadPolicy;
use student_data::config::ConfigOverrides;
use student_data::logger::Level;
use student_data::models::StudentType;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI catalogue load policy argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LoadPolicyArg {
    /// Keep records read before the first bad line
    Stop,
    /// Skip bad lines
    Skip,
    /// Refuse to start on a bad line or missing file
    Fail,
}

impl From<LoadPolicyArg> for LoadPolicy {
    fn from(arg: LoadPolicyArg) -> Self {
        match arg {
            LoadPolicyArg::Stop => Self::Stop,
            LoadPolicyArg::Skip => Self::Skip,
            LoadPolicyArg::Fail => Self::Fail,
        }
    }
}

/// CLI student category argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StudentKindArg {
    /// Undergraduate (120 credits, minimum age 17)
    Undergraduate,
    /// Postgraduate taught (180 credits, minimum age 20)
    PostgraduateTaught,
    /// Postgraduate research (supervised, minimum age 20)
    PostgraduateResearch,
}

impl From<StudentKindArg> for StudentType {
    fn from(arg: StudentKindArg) -> Self {
        match arg {
            StudentKindArg::Undergraduate => Self::Undergraduate,
            StudentKindArg::PostgraduateTaught => Self::PostgraduateTaught,
            StudentKindArg::PostgraduateResearch => Self::PostgraduateResearch,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `modules_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Student details for the `register` subcommand
#[derive(Debug, clap::Args)]
pub struct RegisterArgs {
    /// Student category
    #[arg(long, value_enum)]
    pub kind: StudentKindArg,

    /// First name
    #[arg(long)]
    pub first: String,

    /// Last name
    #[arg(long)]
    pub last: String,

    /// Middle names
    #[arg(long, default_value = "")]
    pub middle: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub dob: String,

    /// Module code to enrol on (repeatable; credited students only)
    #[arg(long = "module", value_name = "CODE")]
    pub modules: Vec<String>,

    /// Supervisor full name (research students only)
    #[arg(long, value_name = "NAME")]
    pub supervisor: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List the module catalogue.
    Modules,
    /// List the supervisor catalogue.
    Supervisors,
    /// Register a student and print the issued id and smartcard.
    Register(RegisterArgs),
}

#[derive(Parser, Debug)]
#[command(
    name = "studentdata",
    about = "Student registration and smartcard issuance",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the module catalogue file
    #[arg(long = "modules-file", value_name = "PATH")]
    pub modules_file: Option<PathBuf>,

    /// Override the supervisor catalogue file
    #[arg(long = "supervisors-file", value_name = "PATH")]
    pub supervisors_file: Option<PathBuf>,

    /// Override how malformed catalogue lines are handled
    #[arg(long = "load-policy", value_enum)]
    pub load_policy: Option<LoadPolicyArg>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override for that value.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: None,
            verbose: self.config_verbose,
            modules_file: self
                .modules_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            supervisors_file: self
                .supervisors_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            load_policy: self
                .load_policy
                .map(|policy| LoadPolicy::from(policy).to_string()),
        }
    }
}
