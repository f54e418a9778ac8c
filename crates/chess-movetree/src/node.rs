//! Moves and the nodes that hold them.

use serde::{Deserialize, Serialize};

use crate::assessment::{MoveAssessment, PositionAssessment};
use crate::index::{Color, Index};

/// A move as recorded in a game.
///
/// The tree treats moves as opaque values: `san` and `uci` come from
/// whatever resolved the move against a position. Equality compares the
/// move itself and ignores annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Move {
    /// Side that played the move.
    pub color: Color,
    /// Standard Algebraic Notation, including any check suffix.
    pub san: String,
    /// Origin, destination and promotion squares (e.g. `e7e8q`).
    pub uci: String,
    /// Free-text comment.
    #[serde(default)]
    pub comment: String,
    /// Move assessment glyph.
    #[serde(default)]
    pub assessment: MoveAssessment,
}

impl Move {
    /// A move with no comment and no assessment.
    pub fn new(color: Color, san: impl Into<String>, uci: impl Into<String>) -> Self {
        Move {
            color,
            san: san.into(),
            uci: uci.into(),
            comment: String::new(),
            assessment: MoveAssessment::Null,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.san == other.san && self.uci == other.uci
    }
}

impl Eq for Move {}

/// In-place edits applied by [`MoveTree::annotate`](crate::MoveTree::annotate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Replaces the move comment.
    Comment(String),
    /// Replaces the move assessment.
    MoveAssessment(MoveAssessment),
    /// Replaces the assessment of the position after the move.
    PositionAssessment(PositionAssessment),
}

/// One entry of the tree arena. All links are indices into the same arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub index: Index,
    /// `None` only for the sentinel.
    pub mv: Option<Move>,
    #[serde(default)]
    pub position_assessment: PositionAssessment,
    pub parent: Option<Index>,
    /// First continuation from this node.
    pub mainline: Option<Index>,
    /// Alternative continuations, in insertion order.
    #[serde(default)]
    pub variations: Vec<Index>,
}

impl Node {
    pub(crate) fn sentinel(index: Index) -> Self {
        Node {
            index,
            mv: None,
            position_assessment: PositionAssessment::Null,
            parent: None,
            mainline: None,
            variations: Vec::new(),
        }
    }

    pub(crate) fn with_move(index: Index, mv: Move, parent: Index) -> Self {
        Node {
            index,
            mv: Some(mv),
            position_assessment: PositionAssessment::Null,
            parent: Some(parent),
            mainline: None,
            variations: Vec::new(),
        }
    }

    /// True when nothing continues from this node.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.mainline.is_none() && self.variations.is_empty()
    }

    /// Iterates over every child, mainline first.
    pub fn children(&self) -> impl Iterator<Item = Index> + '_ {
        self.mainline.into_iter().chain(self.variations.iter().copied())
    }
}
