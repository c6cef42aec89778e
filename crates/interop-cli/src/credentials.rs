//! Credential acquisition.
//!
//! The interactive prompt sits behind a trait so resolution can be tested
//! with a fixed value instead of a terminal.

use std::io;

/// Source of an interactively-entered password.
pub trait PasswordPrompt {
    /// Ask the operator for the password once, without echoing it.
    fn read_password(&mut self) -> io::Result<String>;
}

/// Masked prompt on the controlling terminal.
pub struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn read_password(&mut self) -> io::Result<String> {
        rpassword::prompt_password("Interoperability password: ")
    }
}

/// Resolve the password: a command-line value wins; otherwise the prompt is
/// consulted exactly once.
pub fn resolve(flag: Option<String>, prompt: &mut dyn PasswordPrompt) -> io::Result<String> {
    match flag {
        Some(password) => Ok(password),
        None => prompt.read_password(),
    }
}
