//! Portable Game Notation on top of [`chess_movetree`].
//!
//! This crate provides:
//! - [`tokenize`] and [`parse_movetext`] - movetext lexing and parsing into a [`Game`]
//! - [`parse_game`] / [`parse_games`] - single and multi-game entry points
//! - [`merge`] / [`merge_all`] / [`parse_and_merge`] - folding many games
//!   into one tree of variations
//! - [`serialize`] - PGN output with canonical tag order
//!
//! Chess rules (SAN resolution, FEN, board comparison) come from
//! `shakmaty` behind [`Position`].
//!
//! # Example
//!
//! ```
//! use chess_pgn::{parse_and_merge, serialize};
//!
//! let text = "1. e4 e5 2. Nf3 *\n\n[Event \"Other\"]\n\n1. e4 e5 2. Bc4 *";
//! let merged = parse_and_merge(text).unwrap();
//!
//! assert!(merged.leftovers.is_empty());
//! assert_eq!(serialize(&merged.primary), "1. e4 e5 2. Nf3 (2. Bc4) *");
//! ```

mod collection;
mod error;
mod game;
mod merge;
mod parser;
mod position;
mod serializer;
mod tags;
mod tokenizer;

pub use collection::{parse_and_merge, parse_game, parse_games};
pub use error::{PgnError, TokenizeError};
pub use game::{Game, Outcome};
pub use merge::{merge, merge_all, merge_until_fixpoint, MergeOutcome, MergedGames};
pub use parser::parse_movetext;
pub use position::Position;
pub use serializer::{movetext, serialize, serialize_all};
pub use tags::{Tags, CANONICAL_ORDER};
pub use tokenizer::{tokenize, Token};

pub use chess_movetree::{
    Annotation, Color, Index, Move, MoveAssessment, MoveTree, PositionAssessment,
};
