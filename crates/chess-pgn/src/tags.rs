//! Tag pairs (`[Key "Value"]`) and the starting position they describe.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PgnError;
use crate::position::Position;

static TAG_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[\s*([A-Za-z0-9_]+)\s+"((?:[^"\\]|\\.)*)"\s*\]"#)
        .expect("tag pair pattern is valid")
});

/// Well-known tags, in the order they are written out.
pub const CANONICAL_ORDER: [&str; 15] = [
    "Event",
    "Site",
    "Date",
    "Round",
    "White",
    "Black",
    "Result",
    "Annotator",
    "PlyCount",
    "TimeControl",
    "Time",
    "Termination",
    "Mode",
    "SetUp",
    "FEN",
];

/// The tag section of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags {
    pairs: BTreeMap<String, String>,
}

impl Tags {
    /// An empty tag section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every tag pair found on the given lines.
    ///
    /// A line may hold several pairs; a line holding none is an error.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, PgnError> {
        let mut tags = Tags::new();
        for line in lines {
            let mut found = false;
            for captures in TAG_PAIR.captures_iter(line) {
                found = true;
                tags.insert(&captures[1], unescape(&captures[2]));
            }
            if !found {
                return Err(PgnError::InvalidTag(line.trim().to_string()));
            }
        }
        Ok(tags)
    }

    /// The value of tag `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    /// Sets tag `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.insert(key.into(), value.into());
    }

    /// Removes tag `key` and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.pairs.remove(key)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when the section holds no tags.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The position the game starts from.
    ///
    /// `SetUp "1"` requires a valid `FEN` tag; `SetUp "0"` or no `SetUp`
    /// requires that there is no `FEN` tag. Anything else is an error.
    pub fn starting_position(&self) -> Result<Position, PgnError> {
        match (self.get("SetUp"), self.get("FEN")) {
            (Some("1"), Some(fen)) => {
                Position::from_fen(fen).ok_or_else(|| PgnError::InvalidFen(fen.to_string()))
            }
            (Some("0") | None, None) => Ok(Position::standard()),
            (setup, fen) => Err(PgnError::SetUpMismatch {
                setup: setup.map(str::to_string),
                fen: fen.map(str::to_string),
            }),
        }
    }

    /// Pairs in output order: well-known tags first, then the rest by key.
    pub fn canonical_order(&self) -> Vec<(&str, &str)> {
        let known = CANONICAL_ORDER
            .iter()
            .filter_map(|&key| self.get(key).map(|value| (key, value)));
        let rest = self
            .pairs
            .iter()
            .filter(|(key, _)| !CANONICAL_ORDER.contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value.as_str()));
        known.chain(rest).collect()
    }
}

/// Escapes a tag value for output.
pub(crate) fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
                continue;
            }
        }
        out.push(c);
    }
    out
}
