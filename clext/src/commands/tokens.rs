//! Tokens command implementation.
//!
//! Tokenizes one file and prints every token up to and including the end
//! token, as text lines or as a JSON array.

use std::io::Write;
use std::path::PathBuf;

use clex_lex::Token;
use clex_util::Handler;
use serde::Serialize;

use crate::commands::common::{build_tokenizer, lex_file, validate_input_file, OutputFormat};
use crate::commands::traits::{self, Command, CommandDescription};
use crate::error::{ClextError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source file to tokenize.
    pub input: PathBuf,
    /// Keyword list to load first.
    pub keywords: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Print line and column for each token.
    pub positions: bool,
}

/// Serialized form of a token in JSON output.
#[derive(Debug, Serialize)]
pub struct TokenRecord {
    /// Token kind name.
    pub kind: String,
    /// Lexeme text, with invalid UTF-8 replaced.
    pub lexeme: String,
    /// Line of the first byte.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Column of the first byte.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

impl TokenRecord {
    fn new(token: &Token, positions: bool) -> Self {
        Self {
            kind: token.kind.to_string(),
            lexeme: token.lexeme_str().into_owned(),
            line: positions.then_some(token.line),
            col: positions.then_some(token.col),
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Tokenize the input and write the rendered tokens to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<usize> {
        validate_input_file(&self.args.input)?;

        let handler = Handler::new();
        let mut tokenizer = build_tokenizer(self.args.keywords.as_deref(), &handler)?;
        let tokens = lex_file(&mut tokenizer, &self.args.input, &handler)?
            .ok_or(ClextError::Lexical { failed: 1 })?;

        self.render(&tokens, out)?;
        Ok(tokens.len())
    }

    /// Render tokens in the selected format.
    fn render(&self, tokens: &[Token], out: &mut impl Write) -> Result<()> {
        match self.args.format {
            OutputFormat::Text => {
                for token in tokens {
                    if self.args.positions {
                        writeln!(out, "{}", token)?;
                    } else {
                        writeln!(out, "{} {:?}", token.kind, token.lexeme_str())?;
                    }
                }
            },
            OutputFormat::Json => {
                let records: Vec<TokenRecord> = tokens
                    .iter()
                    .map(|token| TokenRecord::new(token, self.args.positions))
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = usize;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the token stream of a source file"
    }

    fn help() -> &'static str {
        "Tokenizes FILE and prints one token per line as `line:col Kind \"lexeme\"`, \
         ending with the End token. Use --format json for machine-readable output."
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let count = traits::execute::<TokensCommand>(args)?;
    tracing::debug!(count, "printed tokens");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(source: &str, format: OutputFormat, positions: bool) -> String {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.c");
        std::fs::write(&path, source).unwrap();

        let command = TokensCommand::new(TokensArgs {
            input: path,
            keywords: None,
            format,
            positions,
        });
        let mut out = Vec::new();
        command.run_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = run("x = 42;", OutputFormat::Text, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1:1 Identifier \"x\"");
        assert_eq!(lines[1], "1:3 Operator \"=\"");
        assert_eq!(lines[2], "1:5 IntegerConstant \"42\"");
        assert_eq!(lines[4], "1:8 End \"\"");
    }

    #[test]
    fn test_text_output_without_positions() {
        let text = run("'a'", OutputFormat::Text, false);
        assert_eq!(text, "CharConstant \"'a'\"\nEnd \"\"\n");
    }

    #[test]
    fn test_json_output() {
        let text = run("3.5f", OutputFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["kind"], "FloatingConstant");
        assert_eq!(value[0]["lexeme"], "3.5f");
        assert_eq!(value[0]["line"], 1);
        assert_eq!(value[1]["kind"], "End");
    }

    #[test]
    fn test_json_output_without_positions() {
        let text = run("y", OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value[0].get("line").is_none());
    }

    #[test]
    fn test_lexical_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.c");
        std::fs::write(&path, "\"open").unwrap();

        let command = TokensCommand::new(TokensArgs {
            input: path,
            keywords: None,
            format: OutputFormat::Text,
            positions: true,
        });
        let err = command.run_to(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, ClextError::Lexical { failed: 1 }));
    }

    #[test]
    fn test_missing_input() {
        let command = TokensCommand::new(TokensArgs {
            input: PathBuf::from("/nonexistent/input.c"),
            keywords: None,
            format: OutputFormat::Text,
            positions: true,
        });
        assert!(matches!(
            command.run_to(&mut Vec::new()),
            Err(ClextError::Validation(_))
        ));
    }
}
