//! Splitting PGN text into games and parsing them.

use tracing::{debug, warn};

use crate::error::PgnError;
use crate::game::{Game, Outcome};
use crate::merge::{merge_all, MergedGames};
use crate::parser::parse_movetext;
use crate::tags::Tags;

/// The lines of one game: its tag section and its movetext.
#[derive(Debug, Default)]
struct Segment<'a> {
    tag_lines: Vec<&'a str>,
    movetext: Vec<&'a str>,
}

impl Segment<'_> {
    fn has_movetext(&self) -> bool {
        self.movetext.iter().any(|line| !line.trim().is_empty())
    }

    fn is_empty(&self) -> bool {
        self.tag_lines.is_empty() && !self.has_movetext()
    }
}

/// Splits the input at tag sections and after game termination markers.
/// Lines inside a brace comment are movetext even when they start with `[`
/// or are blank, and a marker inside a comment ends nothing.
fn split(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut current = Segment::default();
    let mut depth = 0usize;

    for line in text.lines() {
        if depth == 0 && line.trim_start().starts_with('[') {
            if current.has_movetext() {
                segments.push(std::mem::take(&mut current));
            }
            current.tag_lines.push(line);
            continue;
        }
        let mut rest = line;
        while let Some(end) = result_end(rest, &mut depth) {
            current.movetext.push(&rest[..end]);
            segments.push(std::mem::take(&mut current));
            rest = &rest[end..];
        }
        current.movetext.push(rest);
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Finds the first termination marker of `line` outside comments and
/// returns the byte offset just past it. `depth` tracks the brace depth of
/// the part scanned.
fn result_end(line: &str, depth: &mut usize) -> Option<usize> {
    let mut word_start = None;
    for (at, c) in line.char_indices() {
        let boundary = c.is_whitespace() || matches!(c, '{' | '}' | '(' | ')');
        if boundary {
            if let Some(start) = word_start.take() {
                if Outcome::from_token(&line[start..at]).is_some() {
                    return Some(at);
                }
            }
        }
        match c {
            '{' => *depth += 1,
            '}' => *depth = depth.saturating_sub(1),
            _ if !boundary && *depth == 0 && word_start.is_none() => word_start = Some(at),
            _ => {}
        }
    }
    let start = word_start?;
    Outcome::from_token(&line[start..])
        .is_some()
        .then_some(line.len())
}

fn parse_segment(segment: &Segment<'_>) -> Result<Game, PgnError> {
    let tags = Tags::from_lines(segment.tag_lines.iter().copied())?;
    let mut game = Game::from_position(tags.starting_position()?);
    // A termination marker in the movetext overrides the tag.
    if let Some(outcome) = tags.get("Result").and_then(Outcome::from_token) {
        game.set_outcome(outcome);
    }
    *game.tags_mut() = tags;

    parse_movetext(&mut game, &segment.movetext.join("\n"))?;
    Ok(game)
}

/// Parses every game in `text`. A game that fails to parse does not stop
/// the others.
pub fn parse_games(text: &str) -> Vec<Result<Game, PgnError>> {
    let segments = split(text);
    debug!(games = segments.len(), "split PGN input");
    segments.iter().map(parse_segment).collect()
}

/// Parses exactly one game. Empty input gives an empty game.
pub fn parse_game(text: &str) -> Result<Game, PgnError> {
    let segments = split(text);
    match segments.as_slice() {
        [] => Ok(Game::new()),
        [segment] => parse_segment(segment),
        _ => Err(PgnError::MultipleGames(segments.len())),
    }
}

/// Parses every game in `text` and merges them, see [`merge_all`].
///
/// Games that fail to parse are logged and returned in
/// [`MergedGames::rejected`]. Fails only when no game parsed at all.
pub fn parse_and_merge(text: &str) -> Result<MergedGames, PgnError> {
    let mut games = Vec::new();
    let mut rejected = Vec::new();
    for (n, result) in parse_games(text).into_iter().enumerate() {
        match result {
            Ok(game) => games.push(game),
            Err(err) => {
                warn!(game = n + 1, error = %err, "skipping game");
                rejected.push(err);
            }
        }
    }

    let Some(mut merged) = merge_all(games) else {
        return Err(rejected.into_iter().next().unwrap_or(PgnError::NoGames));
    };
    merged.rejected = rejected;
    Ok(merged)
}
