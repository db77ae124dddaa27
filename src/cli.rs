//! CLI argument parsing with clap

use crate::catalog::InputKind;
use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Input Wizard - configure form inputs step by step
///
/// Pick an input type, fill in its properties and preview the result
/// in a terminal dialog.
#[derive(Parser, Debug)]
#[command(name = "input-wizard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// When specified, settings from the config file are used as defaults.
    /// CLI arguments will override config file settings.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Input types to offer, in display order (first is preselected)
    #[arg(short, long, value_enum, num_args = 1..)]
    pub types: Option<Vec<InputKind>>,

    /// UI language (en, zh-CN)
    #[arg(long)]
    pub locale: Option<String>,

    /// Print the finished configuration as JSON when exiting
    #[arg(long)]
    pub json: bool,

    /// Print the available input types and exit
    #[arg(long)]
    pub list_types: bool,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub sample_config: bool,

    /// Directory for log files (defaults to "Log" next to the executable)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if let Some(ref types) = self.types {
            config.types = types.clone();
        }
        if let Some(ref locale) = self.locale {
            config.locale = Some(locale.clone());
        }

        config
    }

    /// Convert CLI arguments to Config (when no config file is used)
    pub fn to_config(&self) -> Config {
        self.merge_with_config(Config::default())
    }

    /// Whether the run only prints something and exits
    pub fn is_print_only(&self) -> bool {
        self.list_types || self.sample_config
    }
}
