//! The single `<action>|<payload>` input of an invocation.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move; the payload may be empty, which is a no-op.
    Move(String),
    Reset,
    /// Anything else. Re-renders the current state without touching it.
    Other(String),
}

impl Command {
    /// Split at `|`: the first field is the action, the second the payload,
    /// and any further fields are ignored. Actions are case-insensitive and
    /// move payloads are lower-cased, so `MOVE|E2E4` is the same command as
    /// `move|e2e4`.
    pub fn parse(input: &str) -> Self {
        let mut fields = input.split('|');
        let action = fields.next().unwrap_or_default();
        let payload = fields.next().unwrap_or_default();

        match action.trim().to_ascii_lowercase().as_str() {
            "move" => Command::Move(payload.trim().to_ascii_lowercase()),
            "reset" => Command::Reset,
            _ => Command::Other(input.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(notation) => write!(f, "move|{notation}"),
            Command::Reset => f.write_str("reset|"),
            Command::Other(raw) => f.write_str(raw),
        }
    }
}
