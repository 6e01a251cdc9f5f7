//! Command-line interface.
//!
//! Without a subcommand the wizard is launched; the subcommands cover
//! scripting use (`validate`) and setup helpers.

mod common;
pub mod completions;
pub mod validate;

pub use common::*;

use crate::form::Step;
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// A multi-step form in your terminal
#[derive(Parser, Debug)]
#[command(name = "slider", version, about = "A multi-step form in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of ~/.config/slider/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a JSON document of form values, step by step
    Validate {
        /// Path to the JSON file (`-` reads stdin)
        file: PathBuf,
        /// Only check this step (1-3)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
        step: Option<u8>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell (detected from the environment when omitted)
        shell: Option<Shell>,
    },
    /// Configuration file location
    Config,
    /// Log file location
    Logs,
}

impl Cli {
    /// Config file in effect for this invocation
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Execute a subcommand. Returns false when nothing was run and the TUI
    /// should start.
    pub fn execute(&self) -> Result<bool> {
        let Some(command) = &self.command else {
            return Ok(false);
        };
        match command {
            Commands::Validate { file, step } => {
                let step = step.and_then(|n| Step::from_index(n as usize));
                if !validate::run(file, step)? {
                    std::process::exit(1);
                }
            }
            Commands::Completions { shell } => completions::generate(*shell)?,
            Commands::Config => println!("{}", self.config_path().display()),
            Commands::Logs => println!("{}", log_file_path().display()),
        }
        Ok(true)
    }
}
