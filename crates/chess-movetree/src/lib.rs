//! Indexed move tree for chess notation.
//!
//! This crate provides:
//! - [`Index`] - dense positional address of a ply: move number, side, variation
//! - [`Move`] and [`Node`] - recorded moves and the arena entries holding them
//! - [`MoveTree`] - mainline plus arbitrarily nested variations, with history,
//!   future, path and line queries
//! - [`PgnElement`] - the tree flattened into PGN order
//! - [`SharedMoveTree`] - a lock-guarded handle for multi-threaded owners
//!
//! # Example
//!
//! ```
//! use chess_movetree::{Color, Move, MoveTree};
//!
//! let mut tree = MoveTree::new();
//! let e4 = tree.add(Move::new(Color::White, "e4", "e2e4"), tree.sentinel());
//! let e5 = tree.add(Move::new(Color::Black, "e5", "e7e5"), e4);
//! let c5 = tree.add(Move::new(Color::Black, "c5", "c7c5"), e4);
//!
//! assert_eq!(tree.variations(e4), vec![e5, c5]);
//! assert_eq!(tree.all_lines().len(), 2);
//! ```

mod assessment;
mod element;
mod error;
mod index;
mod node;
mod persist;
mod shared;
mod tree;

pub use assessment::{MoveAssessment, PositionAssessment};
pub use element::PgnElement;
pub use error::TreeError;
pub use index::{Color, Index};
pub use node::{Annotation, Move, Node};
pub use shared::SharedMoveTree;
pub use tree::{Direction, MoveTree};
