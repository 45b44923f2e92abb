//! Init-config command implementation.
//!
//! Writes a default `clext.toml` into a directory.

use std::path::PathBuf;

use crate::commands::common::error_messages;
use crate::commands::traits::{self, Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{ClextError, Result};

/// Arguments for the init-config command.
#[derive(Debug, Clone, Default)]
pub struct InitConfigArgs {
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Init-config command handler.
pub struct InitConfigCommand {
    args: InitConfigArgs,
}

impl InitConfigCommand {
    /// Get the configuration file path to write.
    fn target_file(&self) -> Result<PathBuf> {
        let dir = self.args.path.clone().unwrap_or_else(|| PathBuf::from("."));
        if dir.exists() && !dir.is_dir() {
            return Err(ClextError::Validation(format!(
                "{}: {}",
                error_messages::TARGET_NOT_DIR,
                dir.display()
            )));
        }
        Ok(dir.join(CONFIG_FILE_NAME))
    }
}

impl Command for InitConfigCommand {
    type Args = InitConfigArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let target = self.target_file()?;
        if target.exists() && !self.args.force {
            return Err(ClextError::Validation(format!(
                "{}: {}",
                error_messages::OUTPUT_FILE_EXISTS,
                target.display()
            )));
        }

        Config::default().save_to_path(&target)?;
        if self.args.verbose {
            eprintln!("Created file: {}", target.display());
        }
        Ok(target)
    }

    fn name() -> &'static str {
        "init-config"
    }
}

impl CommandDescription for InitConfigCommand {
    fn description() -> &'static str {
        "Write a default configuration file"
    }

    fn help() -> &'static str {
        "Creates clext.toml with the default settings in DIR (or the current \
         directory). Refuses to overwrite an existing file unless --force is given."
    }
}

/// Run the init-config command.
pub fn run_init_config(args: InitConfigArgs) -> Result<()> {
    traits::execute::<InitConfigCommand>(args).map(|_| ())
}
