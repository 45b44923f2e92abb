//! Keywords command implementation.
//!
//! Loads a keyword word list through the tokenizer and prints the words it
//! stored, sorted and one per line.

use std::io::Write;
use std::path::PathBuf;

use clex_util::Handler;

use crate::commands::common::{build_tokenizer, validate_input_file};
use crate::commands::traits::{self, Command, CommandDescription};
use crate::error::Result;

/// Arguments for the keywords command.
#[derive(Debug, Clone)]
pub struct KeywordsArgs {
    /// Keyword list file.
    pub list: PathBuf,
}

/// Keywords command handler.
pub struct KeywordsCommand {
    args: KeywordsArgs,
}

impl KeywordsCommand {
    /// Load the list and return its words sorted.
    pub fn load(&self) -> Result<Vec<String>> {
        validate_input_file(&self.args.list)?;

        let handler = Handler::new();
        let tokenizer = build_tokenizer(Some(&self.args.list), &handler)?;
        let mut words: Vec<String> = tokenizer
            .keywords()
            .map(|set| {
                set.iter()
                    .map(|word| String::from_utf8_lossy(word).into_owned())
                    .collect()
            })
            .unwrap_or_default();
        words.sort();
        Ok(words)
    }
}

impl Command for KeywordsCommand {
    type Args = KeywordsArgs;
    type Output = Vec<String>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let words = self.load()?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for word in &words {
            writeln!(out, "{}", word)?;
        }
        Ok(words)
    }

    fn name() -> &'static str {
        "keywords"
    }
}

impl CommandDescription for KeywordsCommand {
    fn description() -> &'static str {
        "List the keywords stored from a word list"
    }

    fn help() -> &'static str {
        "Tokenizes LIST as whitespace-separated lexemes and prints the distinct \
         keywords in sorted order."
    }
}

/// Run the keywords command.
pub fn run_keywords(args: KeywordsArgs) -> Result<()> {
    let words = traits::execute::<KeywordsCommand>(args)?;
    tracing::debug!(count = words.len(), "listed keywords");
    Ok(())
}
