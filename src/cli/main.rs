//! Command-line interface entry point for `studentdata`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;
use student_data::config::Config;
use student_data::info;
use student_data::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = Some(config.logging.file.as_str())
        .filter(|file| !file.is_empty())
        .map(PathBuf::from);

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if init_file_logging(log_path) {
            info!("File logging initialized at: {}", log_path.display());
        } else {
            eprintln!("✗ Failed to initialize file logging at: {}", log_path.display());
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Modules => commands::catalog::run_modules(&config),
        Command::Supervisors => commands::catalog::run_supervisors(&config),
        Command::Register(register) => commands::register::run(&register, &config),
    }
}
