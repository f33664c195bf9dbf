use crate::io_adapters::LineSource;
use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Object-safe trait for any command that can be picked from the menu.
///
/// This is implemented by the built-in menu commands via a blanket impl.
pub trait MenuCommand {
    /// Executes the command, prompting for any further input it needs.
    fn execute(
        self: Box<Self>,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        session: &mut Session,
    ) -> Result<()>;
}

/// Factory that tries to create a command from the key the user typed.
///
/// Returns `None` when the factory doesn't recognize `key`. Each factory also
/// contributes one line to the menu.
pub trait CommandFactory {
    /// The exact input that selects this command.
    fn key(&self) -> &'static str;

    /// Short description shown next to the key in the menu.
    fn summary(&self) -> &'static str;

    /// Attempt to create a command instance for the provided key.
    fn try_create(&self, key: &str) -> Option<Box<dyn MenuCommand>>;
}
