//! Check command implementation.
//!
//! Tokenizes each input file and reports its token count, or the first
//! lexical error found in it.

use std::path::PathBuf;

use clex_util::Handler;

use crate::commands::common::{build_tokenizer, lex_file, validate_input_file};
use crate::commands::traits::{self, Command, CommandDescription};
use crate::error::{ClextError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub inputs: Vec<PathBuf>,
    /// Keyword list to load first.
    pub keywords: Option<PathBuf>,
    /// Print a line for files that lex cleanly.
    pub verbose: bool,
}

/// Outcome of checking a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Token count per clean file, including the end token.
    pub passed: Vec<(PathBuf, usize)>,
    /// Files with a lexical error.
    pub failed: Vec<PathBuf>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Lex every input with one tokenizer.
    pub fn check_all(&self) -> Result<CheckSummary> {
        for input in &self.args.inputs {
            validate_input_file(input)?;
        }

        let handler = Handler::new();
        let mut tokenizer = build_tokenizer(self.args.keywords.as_deref(), &handler)?;
        let mut summary = CheckSummary::default();

        for input in &self.args.inputs {
            match lex_file(&mut tokenizer, input, &handler)? {
                Some(tokens) => summary.passed.push((input.clone(), tokens.len())),
                None => summary.failed.push(input.clone()),
            }
        }

        tracing::debug!(errors = handler.error_count(), "check finished");
        Ok(summary)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let summary = self.check_all()?;

        for (path, count) in &summary.passed {
            if self.args.verbose {
                println!("ok {} ({} tokens)", path.display(), count);
            }
        }
        println!(
            "{} file(s) checked, {} failed",
            summary.passed.len() + summary.failed.len(),
            summary.failed.len()
        );

        if summary.failed.is_empty() {
            Ok(summary)
        } else {
            Err(ClextError::Lexical {
                failed: summary.failed.len(),
            })
        }
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Check that source files tokenize"
    }

    fn help() -> &'static str {
        "Tokenizes every FILE and prints a diagnostic for the first lexical error \
         in each. Exits with a non-zero status if any file failed."
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    traits::execute::<CheckCommand>(args).map(|_| ())
}
