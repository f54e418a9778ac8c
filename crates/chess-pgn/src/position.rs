//! Board positions, backed by `shakmaty`.
//!
//! Chess rules are an outside concern of this crate: the rest of the code
//! only resolves SAN against a position, compares board states and reads
//! FEN through this type.

use std::fmt;

use chess_movetree::{Color, Move};
use shakmaty::fen::Fen;
use shakmaty::san::{San, SanPlus};
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position as _};

/// A legal chess position.
#[derive(Debug, Clone, Default)]
pub struct Position {
    chess: Chess,
}

impl Position {
    /// The standard starting position.
    pub fn standard() -> Self {
        Position {
            chess: Chess::default(),
        }
    }

    /// Parses a FEN string, returning `None` for malformed or illegal setups.
    pub fn from_fen(fen: &str) -> Option<Self> {
        let fen: Fen = fen.trim().parse().ok()?;
        let chess: Chess = fen.into_position(CastlingMode::Standard).ok()?;
        Some(Position { chess })
    }

    /// The position as FEN. The en passant square is kept whenever a
    /// double pawn push made one, so FEN read from a tag comes back unchanged.
    pub fn fen(&self) -> String {
        Fen::from_position(&self.chess, EnPassantMode::Always).to_string()
    }

    /// The side whose turn it is.
    pub fn side_to_move(&self) -> Color {
        match self.chess.turn() {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        }
    }

    /// The fullmove number, starting at 1.
    pub fn fullmove_number(&self) -> u32 {
        self.chess.fullmoves().get()
    }

    /// Compares piece placement, side to move, castling rights and the en
    /// passant square, ignoring the move clocks.
    pub fn has_same_board_state(&self, other: &Position) -> bool {
        self.board_state() == other.board_state()
    }

    /// Resolves a SAN string to a legal move in this position.
    pub fn resolve_move(&self, san: &str) -> Option<Move> {
        self.play_san(san).map(|(mv, _)| mv)
    }

    /// The position after playing `mv`.
    pub fn play(&self, mv: &Move) -> Option<Position> {
        self.play_san(&mv.san).map(|(_, after)| after)
    }

    /// Resolves `san` and plays it, returning the canonical move and the
    /// position it leads to.
    pub(crate) fn play_san(&self, san: &str) -> Option<(Move, Position)> {
        let san_plus: SanPlus = san.parse().ok()?;
        let m = san_plus.san.to_move(&self.chess).ok()?;

        let canonical = San::from_move(&self.chess, m.clone());
        let mut after = self.chess.clone();
        after.play_unchecked(m.clone());

        let suffix = if after.is_checkmate() {
            "#"
        } else if after.is_check() {
            "+"
        } else {
            ""
        };

        let mut uci = String::new();
        if let Some(from) = m.from() {
            uci.push_str(&from.to_string());
        }
        uci.push_str(&m.to().to_string());
        if let Some(role) = m.promotion() {
            uci.push(role.char());
        }

        let mv = Move::new(self.side_to_move(), format!("{canonical}{suffix}"), uci);
        Some((mv, Position { chess: after }))
    }

    /// FEN without the move clocks. Only a capturable en passant square
    /// counts, so transpositions compare equal.
    fn board_state(&self) -> String {
        let fen = Fen::from_position(&self.chess, EnPassantMode::Legal).to_string();
        fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.fen() == other.fen()
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen())
    }
}
