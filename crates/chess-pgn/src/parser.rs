//! Movetext parser: turns tokens into moves of a [`Game`].

use chess_movetree::{Annotation, Color, Index, MoveAssessment, PositionAssessment};

use crate::error::PgnError;
use crate::game::Game;
use crate::tokenizer::{tokenize, Token};

/// Parses `movetext` into `game`, which should hold no moves yet.
pub fn parse_movetext(game: &mut Game, movetext: &str) -> Result<(), PgnError> {
    let tokens = tokenize(movetext)?;
    MoveTextParser::new(game).run(tokens)
}

struct MoveTextParser<'a> {
    game: &'a mut Game,
    cursor: Index,
    /// Where each open variation resumes once it is closed.
    stack: Vec<Index>,
    seen_move: bool,
    /// Comments read after `(` and before the variation's first move.
    pending_comment: Option<String>,
    at_variation_start: bool,
}

impl<'a> MoveTextParser<'a> {
    fn new(game: &'a mut Game) -> Self {
        let cursor = game.tree().sentinel();
        MoveTextParser {
            game,
            cursor,
            stack: Vec::new(),
            seen_move: false,
            pending_comment: None,
            at_variation_start: false,
        }
    }

    fn run(mut self, tokens: Vec<Token>) -> Result<(), PgnError> {
        for token in tokens {
            match token {
                Token::MoveNumber(text) => {
                    if !self.seen_move {
                        self.leading_number(&text)?;
                    }
                }
                Token::San(san) => {
                    self.cursor = self.game.make_move(&san, self.cursor)?;
                    self.seen_move = true;
                    self.at_variation_start = false;
                    if let Some(text) = self.pending_comment.take() {
                        self.comment(&text);
                    }
                }
                Token::Annotation(text) => self.annotation(&text)?,
                Token::Comment(text) => self.comment(&text),
                Token::VariationStart => self.open_variation()?,
                Token::VariationEnd => {
                    self.at_variation_start = false;
                    if let Some(text) = self.pending_comment.take() {
                        self.comment(&text);
                    }
                    self.cursor = self.stack.pop().ok_or(PgnError::UnpairedDelimiter(')'))?;
                }
                Token::Result(outcome) => self.game.set_outcome(outcome),
            }
        }
        if !self.stack.is_empty() {
            return Err(PgnError::UnpairedDelimiter('('));
        }
        Ok(())
    }

    /// A number before the first move fixes where the game starts:
    /// `N...` means Black plays move `N` first, which the start position
    /// must agree with.
    fn leading_number(&mut self, text: &str) -> Result<(), PgnError> {
        let Ok(number) = text.trim_end_matches('.').parse::<u32>() else {
            return Ok(());
        };
        let to_move = self.game.start_position().side_to_move();
        if text.ends_with("...") && to_move != Color::Black {
            return Err(PgnError::UnexpectedToken(text.to_string()));
        }
        if self.game.set_sentinel(Index::sentinel_for(number, to_move)) {
            self.cursor = self.game.tree().sentinel();
        }
        Ok(())
    }

    fn annotation(&mut self, text: &str) -> Result<(), PgnError> {
        if self.cursor == self.game.tree().sentinel() {
            return Err(PgnError::UnexpectedToken(text.to_string()));
        }
        let annotation = classify_annotation(text)?;
        self.game.annotate(self.cursor, annotation);
        Ok(())
    }

    fn comment(&mut self, text: &str) {
        if self.at_variation_start {
            let joined = join(self.pending_comment.as_deref().unwrap_or_default(), text);
            self.pending_comment = Some(joined);
            return;
        }
        if self.cursor == self.game.tree().sentinel() {
            let joined = join(self.game.root_comment(), text);
            self.game.set_root_comment(joined);
            return;
        }
        let existing = self
            .game
            .tree()
            .move_at(self.cursor)
            .map(|mv| mv.comment.as_str())
            .unwrap_or_default();
        let joined = join(existing, text);
        self.game.annotate(self.cursor, Annotation::Comment(joined));
    }

    /// A variation replaces the move just played, so it continues from that
    /// move's parent.
    fn open_variation(&mut self) -> Result<(), PgnError> {
        let Some(parent) = self.game.tree().parent(self.cursor) else {
            return Err(PgnError::UnexpectedToken("(".to_string()));
        };
        self.stack.push(self.cursor);
        self.cursor = parent;
        self.at_variation_start = true;
        Ok(())
    }
}

fn join(existing: &str, text: &str) -> String {
    if existing.is_empty() {
        text.to_string()
    } else {
        format!("{existing} {text}")
    }
}

/// Classifies an annotation token.
///
/// `$N` and traditional glyphs assess the move; `$NN` and `$NNN` assess the
/// position after it.
pub(crate) fn classify_annotation(text: &str) -> Result<Annotation, PgnError> {
    let invalid = || PgnError::InvalidAnnotation(text.to_string());

    if let Some(digits) = text.strip_prefix('$') {
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let nag: u8 = digits.parse().map_err(|_| invalid())?;
        return match digits.len() {
            1 => MoveAssessment::from_nag(nag).map(Annotation::MoveAssessment),
            2 | 3 => PositionAssessment::from_nag(nag).map(Annotation::PositionAssessment),
            _ => None,
        }
        .ok_or_else(invalid);
    }

    MoveAssessment::from_glyph(text)
        .map(Annotation::MoveAssessment)
        .ok_or_else(invalid)
}
