//! Content errors: malformed text, unresolvable moves, bad tags.
//!
//! Broken tree invariants are not represented here; they panic.

use chess_movetree::Index;
use thiserror::Error;

/// Errors raised while lexing movetext.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated comment: {0:?}")]
    UnterminatedComment(String),

    #[error("invalid result token: {0}")]
    InvalidResult(String),
}

/// Errors raised while turning PGN text into games.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PgnError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error("invalid move {san} in position {fen} (after: {})", .moves.join(" "))]
    InvalidMove {
        san: String,
        fen: String,
        moves: Vec<String>,
    },

    #[error("no move number follows {0}")]
    MoveNumberOverflow(Index),

    #[error("invalid annotation: {0}")]
    InvalidAnnotation(String),

    #[error("unpaired variation delimiter '{0}'")]
    UnpairedDelimiter(char),

    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("invalid tag pair: {0}")]
    InvalidTag(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("SetUp tag {setup:?} does not agree with FEN tag {fen:?}")]
    SetUpMismatch {
        setup: Option<String>,
        fen: Option<String>,
    },

    #[error("expected a single game, found {0}")]
    MultipleGames(usize),

    #[error("no game could be parsed")]
    NoGames,
}
