//! Positional addressing for nodes in a [`MoveTree`](crate::MoveTree).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The side that plays a given ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Identifies one location in a move tree.
///
/// Indices sort chronologically by move number and side, and then by
/// variation among siblings that share the same ply. Variation `0` is the
/// first continuation ever attached at that ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Index {
    /// Full move number, as printed in PGN.
    pub number: u32,
    /// Side that plays this ply.
    pub color: Color,
    /// Variation id; `0` for the first continuation from the parent.
    pub variation: u32,
}

impl Index {
    /// The default sentinel: the position before White's first move.
    pub const MINIMUM: Index = Index {
        number: 0,
        color: Color::Black,
        variation: 0,
    };

    /// Creates an index on variation `0`.
    #[inline]
    pub const fn new(number: u32, color: Color) -> Self {
        Index {
            number,
            color,
            variation: 0,
        }
    }

    /// Returns the same ply on another variation.
    #[inline]
    pub const fn with_variation(self, variation: u32) -> Self {
        Index { variation, ..self }
    }

    /// Returns the sentinel for a game whose first ply is played by
    /// `side_to_move` at `fullmove_number`.
    pub const fn sentinel_for(fullmove_number: u32, side_to_move: Color) -> Self {
        match side_to_move {
            Color::White => Index::new(fullmove_number.saturating_sub(1), Color::Black),
            Color::Black => Index::new(fullmove_number, Color::White),
        }
    }

    /// The ply that follows this one, on variation `0`.
    ///
    /// # Panics
    ///
    /// Panics if the move number overflows; see [`Index::checked_next`].
    pub const fn next(self) -> Self {
        match self.checked_next() {
            Some(next) => next,
            None => panic!("move number overflow"),
        }
    }

    /// The ply that follows this one, or `None` once move numbers run out.
    pub const fn checked_next(self) -> Option<Self> {
        match self.color {
            Color::White => Some(Index::new(self.number, Color::Black)),
            Color::Black => match self.number.checked_add(1) {
                Some(number) => Some(Index::new(number, Color::White)),
                None => None,
            },
        }
    }

    /// The ply that precedes this one, on variation `0`.
    pub const fn previous(self) -> Self {
        match self.color {
            Color::White => Index::new(self.number.saturating_sub(1), Color::Black),
            Color::Black => Index::new(self.number, Color::White),
        }
    }
}

impl Default for Index {
    fn default() -> Self {
        Index::MINIMUM
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Color::White => write!(f, "{}.", self.number)?,
            Color::Black => write!(f, "{}...", self.number)?,
        }
        if self.variation != 0 {
            write!(f, "#{}", self.variation)?;
        }
        Ok(())
    }
}
