//! Command traits for the clext CLI.
//!
//! Every subcommand implements [`Command`] and [`CommandDescription`] and is
//! started through [`execute`], so each run is logged the same way.

use tracing::debug;

use crate::error::Result;

/// Standard command trait that all clext commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name as typed on the command line.
    fn name() -> &'static str;
}

/// Trait for providing command descriptions and help text.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;

    /// Get detailed help text for the command.
    fn help() -> &'static str;
}

/// Build a command from its arguments and run it.
pub fn execute<C>(args: C::Args) -> Result<C::Output>
where
    C: Command + CommandDescription,
{
    debug!(command = C::name(), "{}", C::description());
    C::new(args).execute()
}
