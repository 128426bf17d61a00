//! Command-line interface entry point for `CurricuForge`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use curricu_forge::config::Config;
use curricu_forge::info;
use curricu_forge::logger::{enable_debug, enable_verbose, init_file_logging, set_level, LogLevel};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(LogLevel::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(LogLevel::Warn);

    if args.debug_flag || level == LogLevel::Debug {
        level = LogLevel::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Generate(generate_args) => commands::generate::run(&generate_args, &config),
        Command::Levels => commands::levels::run(),
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
    }
}
