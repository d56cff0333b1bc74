//! Legal moves as clickable issue links, grouped by origin square.
//!
//! Each link opens a new issue whose title is the next invocation's command,
//! so the table doubles as the game's input channel.

use std::collections::BTreeMap;

use chess_core::LegalMove;
use url::form_urlencoded;

use crate::command::Command;

/// One actionable reference: what to show and what it sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub label: String,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveGroup {
    /// Upper-cased origin square, e.g. `E2`.
    pub origin: String,
    pub destinations: Vec<Affordance>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTable {
    Moves(Vec<MoveGroup>),
    /// The game is over; the only thing left to do is start another.
    Reset(Affordance),
}

/// Group `moves` by origin, sorted by origin then destination.
pub fn build_move_table(moves: &[LegalMove], game_over: bool) -> MoveTable {
    if game_over {
        return MoveTable::Reset(Affordance {
            label: "Click here to reset the game".to_string(),
            command: Command::Reset,
        });
    }

    let mut by_origin: BTreeMap<String, Vec<Affordance>> = BTreeMap::new();
    for mv in moves {
        // Destination plus promotion suffix: "E4", "E8Q"
        let label = mv
            .notation
            .get(mv.from.len()..)
            .unwrap_or(mv.to.as_str())
            .to_ascii_uppercase();

        by_origin
            .entry(mv.from.to_ascii_uppercase())
            .or_default()
            .push(Affordance {
                label,
                command: Command::Move(mv.notation.clone()),
            });
    }

    MoveTable::Moves(
        by_origin
            .into_iter()
            .map(|(origin, mut destinations)| {
                destinations.sort_by(|a, b| a.label.cmp(&b.label));
                MoveGroup { origin, destinations }
            })
            .collect(),
    )
}

/// Builds "new issue" URLs for a GitHub repository.
#[derive(Debug, Clone)]
pub struct IssueLinker {
    repo: String,
    body: String,
}

impl IssueLinker {
    pub fn new(repo: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            body: body.into(),
        }
    }

    pub fn url(&self, command: &Command) -> String {
        format!(
            "https://github.com/{}/issues/new?title={}&body={}",
            self.repo,
            encode(&command.to_string()),
            encode(&self.body)
        )
    }

    pub fn link(&self, affordance: &Affordance) -> String {
        format!("[{}]({})", affordance.label, self.url(&affordance.command))
    }

    /// Markdown for the "Valid Moves" section body.
    pub fn render(&self, table: &MoveTable) -> String {
        match table {
            MoveTable::Reset(affordance) => format!("{}\n", self.link(affordance)),
            MoveTable::Moves(groups) => {
                let mut out = String::from("| Move From | Move To (Click One) |\n| --- | --- |\n");
                for group in groups {
                    let links: Vec<String> =
                        group.destinations.iter().map(|a| self.link(a)).collect();
                    out.push_str(&format!("| {} | {} |\n", group.origin, links.join(", ")));
                }
                out
            }
        }
    }
}

fn encode(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}
