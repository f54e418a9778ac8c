//! Merging games into one tree of variations.

use chess_movetree::{Annotation, Index};
use tracing::{debug, warn};

use crate::game::Game;
use crate::position::Position;

const COMMENT_SEPARATOR: &str = " ";

/// Result of one [`merge`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MergeOutcome {
    /// The source was merged; its first moves hang below `at`.
    Merged { at: Index },
    /// The destination never reaches the source's starting position yet.
    /// Retry after other games have been merged.
    NoMergePoint,
}

/// Output of [`merge_all`].
#[derive(Debug, Clone)]
pub struct MergedGames {
    /// The first game with every mergeable game folded in.
    pub primary: Game,
    /// Games that could not reach `primary`, consolidated among themselves.
    pub leftovers: Vec<Game>,
    /// Segments that failed to parse, when produced by
    /// [`parse_and_merge`](crate::parse_and_merge).
    pub rejected: Vec<crate::PgnError>,
}

/// Merges `source` into `destination`.
///
/// When both start from the same board state the move trees are merged from
/// their roots. Otherwise the destination is searched, in index order, for a
/// position with the source's starting board state and the source is grafted
/// there.
pub fn merge(source: &Game, destination: &mut Game) -> MergeOutcome {
    let at = if source
        .start_position()
        .has_same_board_state(destination.start_position())
    {
        let mut comment = destination.root_comment().to_string();
        union_comment(&mut comment, source.root_comment());
        destination.set_root_comment(comment);
        destination.tree().sentinel()
    } else {
        let Some(at) = find_merge_point(source.start_position(), destination) else {
            return MergeOutcome::NoMergePoint;
        };
        if let Some(mv) = destination.tree().move_at(at) {
            let mut comment = mv.comment.clone();
            union_comment(&mut comment, source.root_comment());
            destination.annotate(at, Annotation::Comment(comment));
        }
        at
    };

    debug!(%at, "merging game");
    merge_moves(source, source.tree().sentinel(), destination, at);
    MergeOutcome::Merged { at }
}

fn find_merge_point(start: &Position, destination: &Game) -> Option<Index> {
    destination
        .positions()
        .find(|(_, position)| position.has_same_board_state(start))
        .map(|(index, _)| index)
}

fn merge_moves(source: &Game, from: Index, destination: &mut Game, onto: Index) {
    for child in source.tree().variations(from) {
        let Some(node) = source.tree().get(child) else {
            panic!("variation {child:?} missing from source tree");
        };
        let Some(mv) = &node.mv else {
            continue;
        };

        let target = match destination.tree().next_index(mv, onto) {
            Some(existing) => {
                reconcile(source, child, destination, existing);
                existing
            }
            None => {
                let Some(position) = source.position_at(child) else {
                    panic!("no position recorded for {child:?}");
                };
                let Some(index) = destination.graft(mv.clone(), onto, position.clone()) else {
                    warn!(%onto, san = %mv.san, "no move number left to graft onto");
                    continue;
                };
                if !node.position_assessment.is_null() {
                    destination.annotate(
                        index,
                        Annotation::PositionAssessment(node.position_assessment),
                    );
                }
                index
            }
        };
        merge_moves(source, child, destination, target);
    }
}

/// Folds the source's comment and assessments into an identical move of the
/// destination. Conflicting assessments are kept as bracketed comment tags.
fn reconcile(source: &Game, from: Index, destination: &mut Game, into: Index) {
    let (Some(theirs), Some(ours)) = (source.tree().get(from), destination.tree().get(into))
    else {
        panic!("reconciling {from:?} into {into:?} with a missing node");
    };
    let (Some(their_move), Some(our_move)) = (&theirs.mv, &ours.mv) else {
        return;
    };

    let mut comment = our_move.comment.clone();
    union_comment(&mut comment, &their_move.comment);

    let mut assessment = our_move.assessment;
    if assessment.is_null() {
        assessment = their_move.assessment;
    } else if !their_move.assessment.is_null() && their_move.assessment != assessment {
        union_comment(&mut comment, &format!("[{}]", their_move.assessment));
    }

    let mut position_assessment = ours.position_assessment;
    if position_assessment.is_null() {
        position_assessment = theirs.position_assessment;
    } else if !theirs.position_assessment.is_null()
        && theirs.position_assessment != position_assessment
    {
        union_comment(&mut comment, &format!("[{}]", theirs.position_assessment));
    }

    destination.annotate(into, Annotation::Comment(comment));
    destination.annotate(into, Annotation::MoveAssessment(assessment));
    destination.annotate(into, Annotation::PositionAssessment(position_assessment));
}

fn union_comment(into: &mut String, extra: &str) {
    let extra = extra.trim();
    if extra.is_empty() || into.contains(extra) {
        return;
    }
    if !into.is_empty() {
        into.push_str(COMMENT_SEPARATOR);
    }
    into.push_str(extra);
}

/// Merges every game of `queue` into `destination` that can be merged,
/// retrying deferred games until a full pass merges nothing.
///
/// Returns the games that never found a merge point, in their original order.
pub fn merge_until_fixpoint(destination: &mut Game, mut queue: Vec<Game>) -> Vec<Game> {
    let mut pass = 0;
    while !queue.is_empty() {
        pass += 1;
        let before = queue.len();
        let mut deferred = Vec::new();
        for game in queue {
            match merge(&game, destination) {
                MergeOutcome::Merged { .. } => {}
                MergeOutcome::NoMergePoint => deferred.push(game),
            }
        }
        debug!(
            pass,
            merged = before - deferred.len(),
            deferred = deferred.len(),
            "merge pass finished"
        );
        let progressed = deferred.len() < before;
        queue = deferred;
        if !progressed {
            break;
        }
    }
    queue
}

/// Merges as many games as possible into the first one.
///
/// Games that cannot be merged are consolidated among themselves the same
/// way, leaving as few independent trees as possible. Returns `None` for an
/// empty input.
pub fn merge_all(games: Vec<Game>) -> Option<MergedGames> {
    let mut games = games.into_iter();
    let mut primary = games.next()?;
    let leftovers = merge_until_fixpoint(&mut primary, games.collect());
    let leftovers = consolidate(leftovers);
    if !leftovers.is_empty() {
        debug!(trees = leftovers.len(), "games left unmerged");
    }
    Some(MergedGames {
        primary,
        leftovers,
        rejected: Vec::new(),
    })
}

fn consolidate(mut remaining: Vec<Game>) -> Vec<Game> {
    let mut trees = Vec::new();
    while !remaining.is_empty() {
        let mut seed = remaining.remove(0);
        remaining = merge_until_fixpoint(&mut seed, remaining);
        trees.push(seed);
    }
    trees
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_movetext;
    use chess_movetree::{MoveAssessment, PositionAssessment};

    fn game(movetext: &str) -> Game {
        let mut game = Game::new();
        parse_movetext(&mut game, movetext).unwrap();
        game
    }

    fn game_from(fen: &str, movetext: &str) -> Game {
        let mut game = Game::from_fen(fen).unwrap();
        parse_movetext(&mut game, movetext).unwrap();
        game
    }

    fn mainline(game: &Game) -> Vec<String> {
        let tree = game.tree();
        tree.future(tree.sentinel())
            .into_iter()
            .map(|i| tree.move_at(i).unwrap().san.clone())
            .collect()
    }

    // Position after 1. e4 e5 2. Nf3 Nc6.
    const AFTER_NC6: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";

    #[test]
    fn shared_prefix_becomes_variation() {
        let mut destination = game("1. e4 e5 2. Nf3");
        let source = game("1. e4 e5 2. Bc4");
        assert_eq!(
            merge(&source, &mut destination),
            MergeOutcome::Merged {
                at: destination.tree().sentinel()
            }
        );

        let tree = destination.tree();
        let line = tree.future(tree.sentinel());
        assert_eq!(line.len(), 3);
        assert_eq!(tree.variations(line[1]).len(), 2);
        assert_eq!(tree.all_lines().len(), 2);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut destination = game("1. e4 {center} e5 2. Nf3");
        let source = destination.clone();
        let _ = merge(&source, &mut destination);
        assert_eq!(destination, source);
        let first = destination.tree().future(destination.tree().sentinel())[0];
        assert_eq!(destination.tree().move_at(first).unwrap().comment, "center");
    }

    #[test]
    fn comments_and_assessments_are_reconciled() {
        let mut destination = game("{Intro} 1. e4! {main} e5");
        let source = game("{Notes} 1. e4?! {alt} $14 e5!");
        let _ = merge(&source, &mut destination);

        let tree = destination.tree();
        let line = tree.future(tree.sentinel());
        let e4 = tree.get(line[0]).unwrap();
        let e4_move = e4.mv.as_ref().unwrap();
        assert_eq!(destination.root_comment(), "Intro Notes");
        assert_eq!(e4_move.assessment, MoveAssessment::Good);
        assert_eq!(e4_move.comment, "main alt [?!]");
        assert_eq!(
            e4.position_assessment,
            PositionAssessment::WhiteSlightAdvantage
        );
        assert_eq!(
            tree.move_at(line[1]).unwrap().assessment,
            MoveAssessment::Good
        );
    }

    #[test]
    fn grafts_at_matching_position() {
        let mut destination = game("{Start} 1. e4 e5 2. Nf3 Nc6 3. Bb5");
        let source = game_from(AFTER_NC6, "{Italian} 3. Bc4 Bc5");
        let outcome = merge(&source, &mut destination);

        let tree = destination.tree();
        let nc6 = tree.future(tree.sentinel())[3];
        assert_eq!(outcome, MergeOutcome::Merged { at: nc6 });
        assert_eq!(tree.move_at(nc6).unwrap().comment, "Italian");
        assert_eq!(destination.root_comment(), "Start");
        assert_eq!(tree.variations(nc6).len(), 2);
        assert_eq!(mainline(&destination), vec!["e4", "e5", "Nf3", "Nc6", "Bb5"]);
    }

    #[test]
    fn transposed_position_still_merges() {
        let mut destination = game("1. Nf3 Nc6 2. e4 e5");
        let source = game_from(AFTER_NC6, "3. Bb5");
        let outcome = merge(&source, &mut destination);
        assert!(matches!(outcome, MergeOutcome::Merged { .. }));
        assert_eq!(mainline(&destination), vec!["Nf3", "Nc6", "e4", "e5", "Bb5"]);
    }

    #[test]
    fn unreachable_start_is_reported() {
        let mut destination = game("1. d4 d5");
        let before = destination.clone();
        let source = game_from(AFTER_NC6, "3. Bb5");
        assert_eq!(merge(&source, &mut destination), MergeOutcome::NoMergePoint);
        assert_eq!(destination, before);
    }

    #[test]
    fn fixpoint_retries_deferred_games() {
        // The fragment only becomes reachable after the second game is merged.
        let primary = game("1. d4 d5");
        let fragment = game_from(AFTER_NC6, "3. Bb5 a6");
        let bridge = game("1. e4 e5 2. Nf3 Nc6");
        let merged = merge_all(vec![primary, fragment, bridge]).unwrap();

        assert!(merged.leftovers.is_empty());
        let tree = merged.primary.tree();
        assert_eq!(tree.variations(tree.sentinel()).len(), 2);
        assert_eq!(tree.all_lines().len(), 2);
    }

    #[test]
    fn leftovers_are_consolidated() {
        let primary = game("1. d4 d5");
        let a = game_from(AFTER_NC6, "3. Bb5");
        let b = game_from(AFTER_NC6, "3. Bc4");
        let c = game_from(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
            "1. a4",
        );
        let merged = merge_all(vec![primary, a, b, c]).unwrap();

        assert_eq!(merged.leftovers.len(), 2);
        let ruy = &merged.leftovers[0];
        assert_eq!(ruy.tree().variations(ruy.tree().sentinel()).len(), 2);
        assert!(merged.rejected.is_empty());
    }

    #[test]
    fn merge_all_of_nothing() {
        assert!(merge_all(Vec::new()).is_none());
    }
}
