//! Movetext (game log) tokenizer and writer. Parsing is regex-based and
//! rejects a truncated log.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RulesError;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("tag pair regex"));
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}|;[^\n]*").expect("comment regex"));
static VARIATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("variation regex"));
static MOVE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.+").expect("move number regex"));

const RESULT_TOKENS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Tokens of a stored game: SAN moves in order, plus the termination marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movetext {
    pub moves: Vec<String>,
    pub result: Option<String>,
}

/// Split movetext into SAN tokens.
///
/// Tag pairs, comments and variations are dropped. Empty input is a fresh
/// game. Any non-empty movetext must end with a result token; a missing one
/// means the file was cut short while being written.
pub fn parse_movetext(text: &str) -> Result<Movetext, RulesError> {
    let no_tags = TAG_RE.replace_all(text, "");
    let no_comments = COMMENT_RE.replace_all(&no_tags, "");
    let body = VARIATION_RE.replace_all(&no_comments, "");

    let mut parsed = Movetext::default();

    for raw in body.split_whitespace() {
        if let Some(result) = &parsed.result {
            return Err(RulesError::CorruptMovetext(format!(
                "token {raw:?} after result {result}"
            )));
        }

        if RESULT_TOKENS.contains(&raw) {
            parsed.result = Some(raw.to_string());
            continue;
        }

        // "12." and "12...e5" both appear in the wild
        let token = MOVE_NUMBER_RE.replace(raw, "");
        let token = token.trim_end_matches(['!', '?']);
        if token.is_empty() {
            continue;
        }
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(RulesError::CorruptMovetext(format!("unexpected token {raw:?}")));
        }
        parsed.moves.push(token.to_string());
    }

    if !parsed.moves.is_empty() && parsed.result.is_none() {
        return Err(RulesError::CorruptMovetext(
            "missing result token, the log looks truncated".into(),
        ));
    }

    Ok(parsed)
}

/// Write SAN moves as numbered movetext ending in `result`.
pub fn write_movetext(moves: &[String], result: &str) -> String {
    let mut out = String::new();
    for (ply, san) in moves.iter().enumerate() {
        if ply % 2 == 0 {
            out.push_str(&format!("{}. ", ply / 2 + 1));
        }
        out.push_str(san);
        out.push(' ');
    }
    out.push_str(result);
    out.push('\n');
    out
}
