//! The work behind each subcommand. Every command takes PGN (or JSON) text
//! and returns the text to print.

use anyhow::{bail, Context, Result};
use chess_movetree::{Color, Index, MoveTree};
use chess_pgn::{
    merge_until_fixpoint, movetext, parse_and_merge, parse_game, parse_games, serialize, Game,
    Tags,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ToolConfig;

fn render(game: &Game, config: &ToolConfig) -> String {
    if config.output.include_tags {
        serialize(game)
    } else {
        movetext(game)
    }
}

/// Re-emits every game in canonical form. Games that fail to parse are
/// reported and skipped.
pub fn format(text: &str, config: &ToolConfig) -> Result<String> {
    let mut rendered = Vec::new();
    let mut failures = 0;
    for (n, result) in parse_games(text).into_iter().enumerate() {
        match result {
            Ok(game) => rendered.push(render(&game, config)),
            Err(err) => {
                warn!(game = n + 1, error = %err, "skipping game");
                failures += 1;
            }
        }
    }
    if rendered.is_empty() && failures > 0 {
        bail!("none of {failures} game(s) could be parsed");
    }
    Ok(rendered.join("\n\n"))
}

/// Merges every game into as few trees as possible; the first tree printed
/// is the one seeded by the first game.
pub fn merge(text: &str, config: &ToolConfig) -> Result<String> {
    let (primary, leftovers, rejected) = if config.merge.consolidate_leftovers {
        let merged = parse_and_merge(text)?;
        (merged.primary, merged.leftovers, merged.rejected.len())
    } else {
        let mut games = Vec::new();
        let mut rejected = 0;
        for result in parse_games(text) {
            match result {
                Ok(game) => games.push(game),
                Err(err) => {
                    warn!(error = %err, "skipping game");
                    rejected += 1;
                }
            }
        }
        if games.is_empty() {
            bail!("no game could be parsed");
        }
        let mut primary = games.remove(0);
        let leftovers = merge_until_fixpoint(&mut primary, games);
        (primary, leftovers, rejected)
    };

    info!(leftovers = leftovers.len(), rejected, "merge finished");
    let trees: Vec<String> = std::iter::once(&primary)
        .chain(&leftovers)
        .map(|game| render(game, config))
        .collect();
    Ok(trees.join("\n\n"))
}

/// Lists every line of a single game, one per output line.
pub fn lines(text: &str) -> Result<String> {
    let game = parse_game(text)?;
    Ok(tree_lines(game.tree()))
}

#[derive(Serialize)]
struct GameDump<'a> {
    tags: &'a Tags,
    root_comment: &'a str,
    outcome: &'static str,
    tree: &'a MoveTree,
}

/// Prints a single game with its move tree as JSON.
pub fn dump_tree(text: &str) -> Result<String> {
    let game = parse_game(text)?;
    let dump = GameDump {
        tags: game.tags(),
        root_comment: game.root_comment(),
        outcome: game.outcome().as_str(),
        tree: game.tree(),
    };
    Ok(serde_json::to_string_pretty(&dump)?)
}

/// Lists the lines of a move tree stored as JSON.
pub fn show_tree(json: &str) -> Result<String> {
    let tree = MoveTree::from_json(json).context("Failed to load move tree")?;
    Ok(tree_lines(&tree))
}

fn tree_lines(tree: &MoveTree) -> String {
    tree.all_lines()
        .iter()
        .map(|line| render_line(tree, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(tree: &MoveTree, line: &[Index]) -> String {
    let mut parts = Vec::new();
    for (n, &index) in line.iter().enumerate() {
        let Some(mv) = tree.move_at(index) else {
            continue;
        };
        match index.color {
            Color::White => parts.push(format!("{}. {}", index.number, mv.san)),
            Color::Black if n == 0 => parts.push(format!("{}... {}", index.number, mv.san)),
            Color::Black => parts.push(mv.san.clone()),
        }
    }
    parts.join(" ")
}
