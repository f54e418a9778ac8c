//! Flattened, PGN-ordered view of a move tree.

use crate::assessment::PositionAssessment;
use crate::index::Index;
use crate::node::Move;

/// One element of [`MoveTree::pgn_representation`](crate::MoveTree::pgn_representation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PgnElement {
    /// `N.` before a White move.
    WhiteNumber(u32),
    /// `N...` before a Black move that starts a line or resumes one.
    BlackNumber(u32),
    /// A move and where it lives in the tree.
    Move(Move, Index),
    /// Assessment of the position after the preceding move.
    PositionAssessment(PositionAssessment),
    /// `(`
    VariationStart,
    /// `)`
    VariationEnd,
}
