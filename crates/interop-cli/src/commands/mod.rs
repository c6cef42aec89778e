// Subcommand handlers. main.rs parses and dispatches; each module owns one
// subcommand's behavior.

pub mod missions;
pub mod probe;
pub mod targets;
