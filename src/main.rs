//! Input Wizard - configure form inputs step by step in the terminal

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use input_wizard::{Cli, Config, TuiApp, init_locale, print_catalog, print_configuration};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exe_dir = get_executable_dir()?;
    if cli.is_print_only() {
        return run_print_mode(&cli, &exe_dir);
    }

    let config = load_config(&cli, &exe_dir)?;
    let language = init_locale(config.locale.as_deref());

    run_interactive_mode(&cli, &config, &exe_dir, language.locale())
}

/// `--sample-config` / `--list-types`: print and exit without a terminal UI
fn run_print_mode(cli: &Cli, exe_dir: &Path) -> Result<()> {
    if cli.sample_config {
        print!("{}", Config::sample_config());
        return Ok(());
    }

    let config = load_config(cli, exe_dir)?;
    init_locale(config.locale.as_deref());
    print_catalog(&config.catalog()?);
    Ok(())
}

/// Run the wizard in the ratatui TUI
fn run_interactive_mode(cli: &Cli, config: &Config, exe_dir: &Path, locale: &str) -> Result<()> {
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| exe_dir.join("Log"));
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("Interactive_{}.log", timestamp));

    // The TUI owns the terminal, so logs only go to the file
    let _guard = setup_file_only_logging(cli, &log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        locale,
        types = config.types.len(),
        "Input Wizard starting in interactive mode"
    );
    if cli.verbose {
        info!(?config, "Configuration loaded");
    }

    let wizard = config.build_controller()?;
    let finished = TuiApp::new(wizard).run()?;

    print_configuration(finished.last(), &config.empty_value_text, cli.json)?;
    info!(log_file = %log_path.display(), "Log saved to");

    Ok(())
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Resolve config path - supports shorthand syntax
///
/// `-C forms` finds `forms`, `forms.toml`, or `Config/forms.toml` next to
/// the executable, in that order.
fn resolve_config_path(exe_dir: &Path, config_path: &Path) -> PathBuf {
    if config_path.exists() {
        return config_path.to_path_buf();
    }

    let with_extension = if config_path.extension().is_none() {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    if with_extension.exists() {
        return with_extension;
    }

    let filename = config_path.file_name().unwrap_or(config_path.as_os_str());
    let mut in_config_dir = exe_dir.join("Config").join(filename);
    if in_config_dir.extension().is_none() {
        in_config_dir = in_config_dir.with_extension("toml");
    }

    if in_config_dir.exists() {
        return in_config_dir;
    }

    config_path.to_path_buf()
}

/// Load configuration from file or CLI arguments
fn load_config(cli: &Cli, exe_dir: &Path) -> Result<Config> {
    let config = match cli.config {
        Some(ref config_path) => {
            let resolved_path = resolve_config_path(exe_dir, config_path);
            let file_config = Config::load_from_file(&resolved_path)?;
            cli.merge_with_config(file_config)
        }
        None => cli.to_config(),
    };

    // CLI types bypass the file-level check
    config.catalog()?;

    Ok(config)
}

/// Setup logging for interactive mode (file only, no console)
fn setup_file_only_logging(cli: &Cli, log_path: &Path) -> Result<WorkerGuard> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    Ok(guard)
}
