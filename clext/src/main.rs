//! Clext CLI - A command-line tool for inspecting clex token streams.
//!
//! This is the main entry point for the clext CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs, CheckCommand},
    common::OutputFormat,
    init_config::{run_init_config, InitConfigArgs, InitConfigCommand},
    keywords::{run_keywords, KeywordsArgs, KeywordsCommand},
    tokens::{run_tokens, TokensArgs, TokensCommand},
    traits::CommandDescription,
};
use config::Config;
use error::{ClextError, Result};

/// Clext - A CLI tool for inspecting clex token streams
///
/// Clext tokenizes C-style sources with the clex tokenizer, lists keyword
/// sets and checks files for lexical errors.
#[derive(Parser, Debug)]
#[command(name = "clext")]
#[command(author = "Clex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for inspecting clex token streams", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CLEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CLEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CLEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the clext CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = TokensCommand::description(), long_about = TokensCommand::help())]
    Tokens(TokensCli),

    #[command(about = KeywordsCommand::description(), long_about = KeywordsCommand::help())]
    Keywords(KeywordsCli),

    #[command(about = CheckCommand::description(), long_about = CheckCommand::help())]
    Check(CheckCli),

    #[command(about = InitConfigCommand::description(), long_about = InitConfigCommand::help())]
    InitConfig(InitConfigCli),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCli {
    /// Source file to tokenize
    input: PathBuf,

    /// Keyword list to load (default: from config)
    #[arg(short, long)]
    keywords: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Omit line and column numbers
    #[arg(long)]
    no_positions: bool,
}

/// Arguments for the keywords subcommand.
#[derive(Parser, Debug)]
struct KeywordsCli {
    /// Keyword list file
    list: PathBuf,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCli {
    /// Source files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Keyword list to load (default: from config)
    #[arg(short, long)]
    keywords: Option<PathBuf>,
}

/// Arguments for the init-config subcommand.
#[derive(Parser, Debug)]
struct InitConfigCli {
    /// Directory to write clext.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the clext CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref()).context("could not load configuration")?;

    execute_command(cli.command, cli.verbose, config)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Log output goes to stderr so token dumps on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ClextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Keywords(args) => run_keywords(KeywordsArgs { list: args.list }),
        Commands::Check(args) => execute_check(args, verbose, config),
        Commands::InitConfig(args) => run_init_config(InitConfigArgs {
            path: args.path,
            force: args.force,
            verbose,
        }),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCli, config: Config) -> Result<()> {
    let format = args.format.unwrap_or_else(|| config.output.format.clone());
    let tokens_args = TokensArgs {
        keywords: commands::common::resolve_keywords(args.keywords, &config),
        input: args.input,
        format: OutputFormat::parse(&format)?,
        positions: config.output.positions && !args.no_positions,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCli, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        keywords: commands::common::resolve_keywords(args.keywords, &config),
        inputs: args.inputs,
        verbose,
    };
    run_check(check_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["clext", "tokens", "main.c"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("main.c"));
            assert!(args.format.is_none());
            assert!(!args.no_positions);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_options() {
        let cli = Cli::parse_from([
            "clext",
            "tokens",
            "main.c",
            "--keywords",
            "c.kw",
            "--format",
            "json",
            "--no-positions",
        ]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.keywords, Some(PathBuf::from("c.kw")));
            assert_eq!(args.format, Some("json".to_string()));
            assert!(args.no_positions);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_keywords() {
        let cli = Cli::parse_from(["clext", "keywords", "c.kw"]);
        assert!(matches!(cli.command, Commands::Keywords(_)));
    }

    #[test]
    fn test_cli_parse_check_multiple() {
        let cli = Cli::parse_from(["clext", "check", "a.c", "b.c", "-k", "c.kw"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.inputs.len(), 2);
            assert_eq!(args.keywords, Some(PathBuf::from("c.kw")));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_input() {
        assert!(Cli::try_parse_from(["clext", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_init_config() {
        let cli = Cli::parse_from(["clext", "init-config", "--path", "/tmp/x", "--force"]);
        if let Commands::InitConfig(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/x")));
            assert!(args.force);
        } else {
            panic!("Expected InitConfig command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "clext",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/clext.toml",
            "keywords",
            "c.kw",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/clext.toml")));
    }
}
