//! PGN output.

use std::fmt::Write;

use chess_movetree::PgnElement;

use crate::game::Game;
use crate::tags::escape;

/// Renders a game as PGN: tag pairs, a blank line, then the movetext.
pub fn serialize(game: &Game) -> String {
    let mut out = String::new();
    for (key, value) in game.tags().canonical_order() {
        let _ = writeln!(out, "[{key} \"{}\"]", escape(value));
    }
    out.push('\n');
    out.push_str(&movetext(game));
    out.trim().to_string()
}

/// Renders several games, separated by blank lines.
pub fn serialize_all<'a>(games: impl IntoIterator<Item = &'a Game>) -> String {
    games
        .into_iter()
        .map(serialize)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders only the movetext, closed by the game's result token.
pub fn movetext(game: &Game) -> String {
    let mut text = String::new();
    if !game.root_comment().is_empty() {
        let _ = write!(text, "{{{}}} ", game.root_comment());
    }

    for element in game.tree().pgn_representation() {
        match element {
            PgnElement::WhiteNumber(number) => {
                let _ = write!(text, "{number}. ");
            }
            PgnElement::BlackNumber(number) => {
                let _ = write!(text, "{number}... ");
            }
            PgnElement::Move(mv, _) => {
                text.push_str(&mv.san);
                let _ = write!(text, "{}", mv.assessment);
                if !mv.comment.is_empty() {
                    let _ = write!(text, " {{{}}}", mv.comment);
                }
                text.push(' ');
            }
            PgnElement::PositionAssessment(assessment) => {
                let _ = write!(text, "{assessment} ");
            }
            PgnElement::VariationStart => text.push('('),
            PgnElement::VariationEnd => {
                text.truncate(text.trim_end().len());
                text.push_str(") ");
            }
        }
    }

    text.push_str(game.outcome().as_str());
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::parse_game;

    #[test]
    fn renders_tags_then_movetext() {
        let mut game = parse_game("1. e4 e5 2. Nf3 1-0").unwrap();
        game.tags_mut().insert("White", "Morphy");
        game.tags_mut().insert("Event", "Opera \"Game\"");
        game.tags_mut().insert("ECO", "C41");

        assert_eq!(
            serialize(&game),
            "[Event \"Opera \\\"Game\\\"\"]\n[White \"Morphy\"]\n[ECO \"C41\"]\n\n1. e4 e5 2. Nf3 1-0"
        );
    }

    #[test]
    fn renders_variations_and_annotations() {
        let game = parse_game(
            "{Start} 1. e4!? {Kings pawn} $14 (1. d4 d5) 1... e5 (1... c5 $10) 2. Nf3 *",
        )
        .unwrap();
        assert_eq!(
            movetext(&game),
            "{Start} 1. e4!? {Kings pawn} $14 (1. d4 d5) 1... e5 (1... c5 $10) 2. Nf3 *"
        );
    }

    #[test]
    fn variation_comment_follows_its_first_move() {
        let game = parse_game("1. e4 ({Alt} 1. d4) 1... e5 *").unwrap();
        assert_eq!(movetext(&game), "1. e4 (1. d4 {Alt}) 1... e5 *");
    }

    #[test]
    fn nested_variation_closing() {
        let game = parse_game("1. e4 e5 (1... c5 2. Nf3 (2. c3)) 2. Nf3").unwrap();
        assert_eq!(
            movetext(&game),
            "1. e4 e5 (1... c5 2. Nf3 (2. c3)) 2. Nf3 *"
        );
    }

    #[test]
    fn empty_game() {
        assert_eq!(serialize(&Game::new()), "*");
    }

    #[test]
    fn several_games() {
        let a = parse_game("1. e4 1-0").unwrap();
        let b = parse_game("1. d4 0-1").unwrap();
        assert_eq!(serialize_all([&a, &b]), "1. e4 1-0\n\n1. d4 0-1");
    }
}
