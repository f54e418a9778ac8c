//! A game: starting position, tags, move tree and the positions it reaches.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chess_movetree::{Annotation, Index, Move, MoveTree};

use crate::error::PgnError;
use crate::position::Position;
use crate::tags::Tags;

/// The game termination marker closing the movetext.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
    #[default]
    Unknown,
}

impl Outcome {
    /// Parses a termination marker: `1-0`, `0-1`, `1/2-1/2` or `*`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1-0" => Some(Outcome::WhiteWins),
            "0-1" => Some(Outcome::BlackWins),
            "1/2-1/2" => Some(Outcome::Draw),
            "*" => Some(Outcome::Unknown),
            _ => None,
        }
    }

    /// The marker as written in PGN.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::Unknown => "*",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One game of chess with its annotated variations.
///
/// Every index in the tree, the sentinel included, has its position cached
/// in `positions`. A missing entry is a broken invariant and panics.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    start: Position,
    tree: MoveTree,
    tags: Tags,
    root_comment: String,
    outcome: Outcome,
    positions: HashMap<Index, Position>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::standard())
    }

    /// A game from an arbitrary position. The tree's sentinel sits just
    /// before the position's fullmove number and side to move.
    pub fn from_position(start: Position) -> Self {
        let sentinel = Index::sentinel_for(start.fullmove_number(), start.side_to_move());
        let mut positions = HashMap::new();
        positions.insert(sentinel, start.clone());
        Game {
            start,
            tree: MoveTree::with_sentinel(sentinel),
            tags: Tags::new(),
            root_comment: String::new(),
            outcome: Outcome::Unknown,
            positions,
        }
    }

    /// A game starting from `fen`.
    pub fn from_fen(fen: &str) -> Result<Self, PgnError> {
        Position::from_fen(fen)
            .map(Self::from_position)
            .ok_or_else(|| PgnError::InvalidFen(fen.to_string()))
    }

    /// The position before the first move.
    pub fn start_position(&self) -> &Position {
        &self.start
    }

    /// The moves of the game.
    pub fn tree(&self) -> &MoveTree {
        &self.tree
    }

    /// The tag section.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Mutable access to the tag section.
    pub fn tags_mut(&mut self) -> &mut Tags {
        &mut self.tags
    }

    /// The comment placed before the first move.
    pub fn root_comment(&self) -> &str {
        &self.root_comment
    }

    /// Replaces the comment placed before the first move.
    pub fn set_root_comment(&mut self, comment: impl Into<String>) {
        self.root_comment = comment.into();
    }

    /// The game termination marker.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Sets the game termination marker.
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    /// The position after the move at `index`; the start position for the
    /// sentinel.
    pub fn position_at(&self, index: Index) -> Option<&Position> {
        self.positions.get(&index)
    }

    /// Every cached position, in index order.
    pub fn positions(&self) -> impl Iterator<Item = (Index, &Position)> + '_ {
        self.tree
            .nodes()
            .filter_map(|node| self.positions.get(&node.index).map(|p| (node.index, p)))
    }

    /// Moves the sentinel while the tree holds no moves yet.
    ///
    /// Returns `false` and leaves the game alone once moves were added.
    pub fn set_sentinel(&mut self, sentinel: Index) -> bool {
        if !self.tree.is_empty() {
            return false;
        }
        self.tree = MoveTree::with_sentinel(sentinel);
        self.positions.clear();
        self.positions.insert(sentinel, self.start.clone());
        true
    }

    /// Resolves `san` in the position at `parent` and adds it to the tree.
    ///
    /// Fails with [`PgnError::MoveNumberOverflow`] when `parent` carries the
    /// last representable move number.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not in the tree.
    pub fn make_move(&mut self, san: &str, parent: Index) -> Result<Index, PgnError> {
        let Some(position) = self.positions.get(&parent) else {
            panic!("no position recorded for {parent:?}");
        };
        if parent.checked_next().is_none() {
            return Err(PgnError::MoveNumberOverflow(parent));
        }
        match position.play_san(san) {
            Some((mv, after)) => {
                let index = self.tree.add(mv, parent);
                self.positions.insert(index, after);
                Ok(index)
            }
            None => Err(PgnError::InvalidMove {
                san: san.to_string(),
                fen: position.fen(),
                moves: self.line(parent),
            }),
        }
    }

    /// Adds an already resolved move whose resulting position is known.
    /// Returns `None` when no move number follows `parent`.
    pub(crate) fn graft(&mut self, mv: Move, parent: Index, position: Position) -> Option<Index> {
        parent.checked_next()?;
        let index = self.tree.add(mv, parent);
        self.positions.insert(index, position);
        Some(index)
    }

    /// Annotates the move at `index`, see [`MoveTree::annotate`].
    pub fn annotate(&mut self, index: Index, annotation: Annotation) {
        self.tree.annotate(index, annotation);
    }

    /// Removes `index` and everything after it, see [`MoveTree::remove`].
    pub fn remove_move(&mut self, index: Index) -> Vec<Index> {
        let removed = self.tree.remove(index);
        for index in &removed {
            self.positions.remove(index);
        }
        removed
    }

    /// SAN of every move leading up to and including `index`.
    pub fn line(&self, index: Index) -> Vec<String> {
        self.tree
            .history(index)
            .into_iter()
            .filter_map(|index| self.tree.move_at(index).map(|mv| mv.san.clone()))
            .collect()
    }
}

impl FromStr for Game {
    type Err = PgnError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        crate::collection::parse_game(text)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::serialize(self))
    }
}
