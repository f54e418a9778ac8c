//! The move tree: an arena of nodes addressed by [`Index`].

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::element::PgnElement;
use crate::index::{Color, Index};
use crate::node::{Annotation, Move, Node};
use crate::persist::PersistedTree;

/// Which way a single hop of a [`MoveTree::path`] travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Play the move at the index.
    Forward,
    /// Take back the move at the index.
    Reverse,
}

/// A game's moves with a mainline and arbitrarily nested variations.
///
/// The tree owns every [`Node`] in a single `Index → Node` map. A sentinel
/// node at [`MoveTree::sentinel`] stands for the starting position and never
/// holds a move. Parent, mainline and variation links are plain indices into
/// the same map.
///
/// Two caches are maintained on every mutation:
/// - `last_main_variation_index`, the final ply of the current mainline;
/// - `leaf_node_indices`, every index with neither a mainline child nor
///   variation children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PersistedTree", try_from = "PersistedTree")]
pub struct MoveTree {
    pub(crate) nodes: BTreeMap<Index, Node>,
    pub(crate) sentinel: Index,
    pub(crate) last_main_variation_index: Index,
    pub(crate) leaf_node_indices: BTreeSet<Index>,
}

impl Default for MoveTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTree {
    /// Creates an empty tree whose sentinel is [`Index::MINIMUM`].
    pub fn new() -> Self {
        Self::with_sentinel(Index::MINIMUM)
    }

    /// Creates an empty tree with a custom sentinel, for games that start
    /// after move one or with Black to move.
    pub fn with_sentinel(sentinel: Index) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(sentinel, Node::sentinel(sentinel));
        MoveTree {
            nodes,
            sentinel,
            last_main_variation_index: sentinel,
            leaf_node_indices: BTreeSet::from([sentinel]),
        }
    }

    /// The index standing for the starting position.
    #[inline]
    pub fn sentinel(&self) -> Index {
        self.sentinel
    }

    /// The last ply of the mainline, or the sentinel for an empty tree.
    #[inline]
    pub fn last_main_variation_index(&self) -> Index {
        self.last_main_variation_index
    }

    /// Indices with no continuation.
    #[inline]
    pub fn leaf_node_indices(&self) -> &BTreeSet<Index> {
        &self.leaf_node_indices
    }

    /// Number of moves, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// True when the tree holds no moves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `index` names a node, the sentinel included.
    pub fn contains(&self, index: Index) -> bool {
        self.nodes.contains_key(&index)
    }

    /// The node at `index`.
    pub fn get(&self, index: Index) -> Option<&Node> {
        self.nodes.get(&index)
    }

    /// The move stored at `index`; `None` for the sentinel or an unknown index.
    pub fn move_at(&self, index: Index) -> Option<&Move> {
        self.nodes.get(&index).and_then(|node| node.mv.as_ref())
    }

    /// The node `index` continues from; `None` for the sentinel.
    pub fn parent(&self, index: Index) -> Option<Index> {
        self.nodes.get(&index).and_then(|node| node.parent)
    }

    /// The mainline continuation of `index`.
    pub fn mainline_child(&self, index: Index) -> Option<Index> {
        self.nodes.get(&index).and_then(|node| node.mainline)
    }

    /// Every index holding a move, in index order.
    pub fn indices(&self) -> impl Iterator<Item = Index> + '_ {
        let sentinel = self.sentinel;
        self.nodes.keys().copied().filter(move |&index| index != sentinel)
    }

    /// Every node including the sentinel, in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Adds `mv` as a continuation of `parent` and returns its index.
    ///
    /// The first continuation of a node becomes its mainline child, later
    /// ones are appended as variations. The index is `parent.next()`, with
    /// the variation number probed upward until it is free.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not in the tree, or if `parent` already carries
    /// the last representable move number.
    pub fn add(&mut self, mv: Move, parent: Index) -> Index {
        if !self.nodes.contains_key(&parent) {
            missing(parent);
        }

        let mut index = parent.next();
        while self.nodes.contains_key(&index) {
            index.variation += 1;
        }

        self.nodes.insert(index, Node::with_move(index, mv, parent));

        let parent_node = self.node_mut(parent);
        let is_mainline_child = parent_node.mainline.is_none();
        if is_mainline_child {
            parent_node.mainline = Some(index);
        } else {
            parent_node.variations.push(index);
        }
        if is_mainline_child && parent == self.last_main_variation_index {
            self.last_main_variation_index = index;
        }

        self.leaf_node_indices.remove(&parent);
        self.leaf_node_indices.insert(index);
        index
    }

    /// Removes the node at `index` together with everything that follows it,
    /// and returns the removed indices.
    ///
    /// When the removed node was its parent's mainline child, the parent's
    /// first variation is promoted to mainline. Removing the sentinel or an
    /// unknown index does nothing.
    pub fn remove(&mut self, index: Index) -> Vec<Index> {
        if index == self.sentinel {
            return Vec::new();
        }
        let Some(parent) = self.parent(index) else {
            return Vec::new();
        };

        let mut removed = Vec::new();
        let mut queue = VecDeque::from([index]);
        while let Some(current) = queue.pop_front() {
            if let Some(node) = self.nodes.remove(&current) {
                queue.extend(node.children());
                removed.push(current);
            }
        }

        let parent_node = self.node_mut(parent);
        if parent_node.mainline == Some(index) {
            parent_node.mainline = if parent_node.variations.is_empty() {
                None
            } else {
                Some(parent_node.variations.remove(0))
            };
        } else {
            parent_node.variations.retain(|&variation| variation != index);
        }
        let parent_is_leaf = parent_node.is_leaf();

        for index in &removed {
            self.leaf_node_indices.remove(index);
        }
        if parent_is_leaf {
            self.leaf_node_indices.insert(parent);
        }
        self.last_main_variation_index = self.mainline_end();
        removed
    }

    /// Indices from the first move up to and including `index`.
    ///
    /// Empty for the sentinel and for unknown indices.
    pub fn history(&self, index: Index) -> Vec<Index> {
        let mut history = Vec::new();
        let mut current = Some(index);
        while let Some(idx) = current {
            if idx == self.sentinel {
                break;
            }
            let Some(node) = self.nodes.get(&idx) else {
                break;
            };
            history.push(idx);
            current = node.parent;
        }
        history.reverse();
        history
    }

    /// Indices following `index` along mainline links, excluding `index`.
    pub fn future(&self, index: Index) -> Vec<Index> {
        let mut future = Vec::new();
        let mut current = self.mainline_child(index);
        while let Some(idx) = current {
            future.push(idx);
            current = self.mainline_child(idx);
        }
        future
    }

    /// The whole line through `index`: its history followed by its future.
    pub fn full_variation(&self, index: Index) -> Vec<Index> {
        let mut line = self.history(index);
        line.extend(self.future(index));
        line
    }

    /// Every continuation from `parent`, mainline first, then the
    /// variations in index order.
    pub fn variations(&self, parent: Index) -> Vec<Index> {
        let Some(node) = self.nodes.get(&parent) else {
            return Vec::new();
        };
        let mut variations = node.variations.clone();
        variations.sort_unstable();
        node.mainline.into_iter().chain(variations).collect()
    }

    /// The continuation of `index` whose move equals `mv`, if any.
    pub fn next_index(&self, mv: &Move, index: Index) -> Option<Index> {
        self.variations(index)
            .into_iter()
            .find(|child| self.move_at(*child) == Some(mv))
    }

    /// The deepest index shared by the histories of `a` and `b`.
    ///
    /// Histories are compared element by element from the start; this is
    /// only correct because branches never rejoin once they diverge.
    pub fn lowest_common_ancestor(&self, a: Index, b: Index) -> Option<Index> {
        let history_a = self.history(a);
        let history_b = self.history(b);
        let shared = shared_prefix_len(&history_a, &history_b);
        shared.checked_sub(1).map(|last| history_a[last])
    }

    /// Hops that lead from `from` to `to`.
    ///
    /// Applied in order starting at `from`, a `Reverse` hop takes back the
    /// move at its index and a `Forward` hop plays it.
    pub fn path(&self, from: Index, to: Index) -> Vec<(Direction, Index)> {
        if from == to {
            return Vec::new();
        }
        if from == self.sentinel {
            return forward(&self.history(to));
        }
        if to == self.sentinel {
            return reverse(&self.history(from));
        }

        let start = self.history(from);
        let end = self.history(to);

        if let Some(position) = end.iter().position(|&idx| idx == from) {
            return forward(&end[position + 1..]);
        }
        if let Some(position) = start.iter().position(|&idx| idx == to) {
            return reverse(&start[position + 1..]);
        }

        // Without a common ancestor the prefix is empty and this degrades to
        // taking back the whole start line, then playing the whole end line.
        let shared = shared_prefix_len(&start, &end);
        let mut path = reverse(&start[shared..]);
        path.extend(forward(&end[shared..]));
        path
    }

    /// Every line from the first move to a leaf, ordered by leaf index.
    pub fn all_lines(&self) -> Vec<Vec<Index>> {
        self.leaf_node_indices
            .iter()
            .filter(|&&leaf| leaf != self.sentinel)
            .map(|&leaf| self.history(leaf))
            .collect()
    }

    /// Applies an in-place edit to the node at `index`.
    ///
    /// Does nothing for the sentinel or an unknown index.
    pub fn annotate(&mut self, index: Index, annotation: Annotation) {
        if index == self.sentinel {
            return;
        }
        let Some(node) = self.nodes.get_mut(&index) else {
            return;
        };
        match annotation {
            Annotation::PositionAssessment(assessment) => node.position_assessment = assessment,
            Annotation::Comment(comment) => {
                if let Some(mv) = node.mv.as_mut() {
                    mv.comment = comment;
                }
            }
            Annotation::MoveAssessment(assessment) => {
                if let Some(mv) = node.mv.as_mut() {
                    mv.assessment = assessment;
                }
            }
        }
    }

    /// Flattens the tree into PGN order.
    ///
    /// Variations branching from a node are emitted right after that node's
    /// mainline continuation, so alternatives to the first move of the game
    /// follow the first move.
    pub fn pgn_representation(&self) -> Vec<PgnElement> {
        let mut elements = Vec::new();
        if let Some(first) = self.mainline_child(self.sentinel) {
            self.push_line(first, &mut elements);
        }
        elements
    }

    fn push_line(&self, first: Index, elements: &mut Vec<PgnElement>) {
        let mut current = Some(first);
        let mut needs_number = true;

        while let Some(index) = current {
            let node = self.node(index);
            let Some(mv) = &node.mv else {
                break;
            };

            match index.color {
                Color::White => elements.push(PgnElement::WhiteNumber(index.number)),
                Color::Black if needs_number => {
                    elements.push(PgnElement::BlackNumber(index.number))
                }
                Color::Black => {}
            }
            elements.push(PgnElement::Move(mv.clone(), index));
            if !node.position_assessment.is_null() {
                elements.push(PgnElement::PositionAssessment(node.position_assessment));
            }
            needs_number = false;

            if let Some(parent) = node.parent.map(|parent| self.node(parent)) {
                if parent.mainline == Some(index) {
                    for &variation in &parent.variations {
                        elements.push(PgnElement::VariationStart);
                        self.push_line(variation, elements);
                        elements.push(PgnElement::VariationEnd);
                        needs_number = true;
                    }
                }
            }

            current = node.mainline;
        }
    }

    /// Follows mainline links from the sentinel to the end.
    pub(crate) fn mainline_end(&self) -> Index {
        self.future(self.sentinel)
            .last()
            .copied()
            .unwrap_or(self.sentinel)
    }

    fn node(&self, index: Index) -> &Node {
        match self.nodes.get(&index) {
            Some(node) => node,
            None => missing(index),
        }
    }

    fn node_mut(&mut self, index: Index) -> &mut Node {
        match self.nodes.get_mut(&index) {
            Some(node) => node,
            None => missing(index),
        }
    }
}

/// An index the tree handed out is gone: the arena is corrupt.
#[cold]
fn missing(index: Index) -> ! {
    panic!("move tree has no node at {index:?}")
}

fn shared_prefix_len(a: &[Index], b: &[Index]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn forward(indices: &[Index]) -> Vec<(Direction, Index)> {
    indices.iter().map(|&idx| (Direction::Forward, idx)).collect()
}

fn reverse(indices: &[Index]) -> Vec<(Direction, Index)> {
    indices.iter().rev().map(|&idx| (Direction::Reverse, idx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{MoveAssessment, PositionAssessment};

    fn mv(color: Color, san: &str) -> Move {
        Move::new(color, san, san)
    }

    /// 1. e4 e5 2. Nf3 Nc6, with 2. Bc4 and 1... c5 as variations.
    fn sample() -> (MoveTree, [Index; 6]) {
        let mut tree = MoveTree::new();
        let e4 = tree.add(mv(Color::White, "e4"), tree.sentinel());
        let e5 = tree.add(mv(Color::Black, "e5"), e4);
        let nf3 = tree.add(mv(Color::White, "Nf3"), e5);
        let nc6 = tree.add(mv(Color::Black, "Nc6"), nf3);
        let bc4 = tree.add(mv(Color::White, "Bc4"), e5);
        let c5 = tree.add(mv(Color::Black, "c5"), e4);
        (tree, [e4, e5, nf3, nc6, bc4, c5])
    }

    fn computed_leaves(tree: &MoveTree) -> BTreeSet<Index> {
        tree.nodes()
            .filter(|node| node.is_leaf())
            .map(|node| node.index)
            .collect()
    }

    #[test]
    fn new_tree_has_only_sentinel() {
        let tree = MoveTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.sentinel(), Index::MINIMUM);
        assert_eq!(tree.last_main_variation_index(), Index::MINIMUM);
        assert_eq!(tree.leaf_node_indices(), &BTreeSet::from([Index::MINIMUM]));
        assert!(tree.all_lines().is_empty());
        assert!(tree.pgn_representation().is_empty());
    }

    #[test]
    fn add_assigns_indices_with_linear_probing() {
        let (tree, [e4, e5, nf3, nc6, bc4, c5]) = sample();
        assert_eq!(e4, Index::new(1, Color::White));
        assert_eq!(e5, Index::new(1, Color::Black));
        assert_eq!(nf3, Index::new(2, Color::White));
        assert_eq!(nc6, Index::new(2, Color::Black));
        assert_eq!(bc4, Index::new(2, Color::White).with_variation(1));
        assert_eq!(c5, Index::new(1, Color::Black).with_variation(1));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn first_continuation_becomes_mainline() {
        let (tree, [e4, e5, nf3, _, bc4, c5]) = sample();
        assert_eq!(tree.mainline_child(e4), Some(e5));
        assert_eq!(tree.get(e4).unwrap().variations, vec![c5]);
        assert_eq!(tree.mainline_child(e5), Some(nf3));
        assert_eq!(tree.get(e5).unwrap().variations, vec![bc4]);
    }

    #[test]
    fn probing_skips_indices_taken_by_other_branches() {
        let (mut tree, [_, _, _, _, _, c5]) = sample();
        // 2. Nf3 after 1... c5 wants (2, White) which 2. Nf3 after e5 holds.
        let nf3 = tree.add(mv(Color::White, "Nf3"), c5);
        assert_eq!(nf3, Index::new(2, Color::White).with_variation(2));
        assert_eq!(tree.mainline_child(c5), Some(nf3));
    }

    #[test]
    fn last_main_variation_index_tracks_mainline_only() {
        let (mut tree, [_, _, _, nc6, bc4, _]) = sample();
        assert_eq!(tree.last_main_variation_index(), nc6);
        tree.add(mv(Color::Black, "Nf6"), bc4);
        assert_eq!(tree.last_main_variation_index(), nc6);
        let bb5 = tree.add(mv(Color::White, "Bb5"), nc6);
        assert_eq!(tree.last_main_variation_index(), bb5);
    }

    #[test]
    #[should_panic(expected = "move tree has no node")]
    fn add_to_missing_parent_panics() {
        let mut tree = MoveTree::new();
        tree.add(mv(Color::White, "e4"), Index::new(5, Color::White));
    }

    #[test]
    fn leaf_cache_follows_adds() {
        let (tree, [_, _, _, nc6, bc4, c5]) = sample();
        assert_eq!(tree.leaf_node_indices(), &BTreeSet::from([nc6, bc4, c5]));
        assert_eq!(tree.leaf_node_indices(), &computed_leaves(&tree));
    }

    #[test]
    fn history_and_future() {
        let (tree, [e4, e5, nf3, nc6, bc4, _]) = sample();
        assert_eq!(tree.history(nf3), vec![e4, e5, nf3]);
        assert_eq!(tree.future(e5), vec![nf3, nc6]);
        assert_eq!(tree.future(bc4), Vec::<Index>::new());
        assert_eq!(tree.full_variation(e5), vec![e4, e5, nf3, nc6]);
        assert_eq!(tree.history(tree.sentinel()), Vec::<Index>::new());
        assert_eq!(tree.history(Index::new(40, Color::White)), Vec::<Index>::new());
    }

    #[test]
    fn variations_lists_mainline_first() {
        let (tree, [e4, e5, nf3, _, bc4, c5]) = sample();
        assert_eq!(tree.variations(e5), vec![nf3, bc4]);
        assert_eq!(tree.variations(e4), vec![e5, c5]);
        assert_eq!(tree.variations(tree.sentinel()), vec![e4]);
    }

    #[test]
    fn next_index_matches_by_move() {
        let (tree, [_, e5, nf3, _, bc4, _]) = sample();
        assert_eq!(tree.next_index(&mv(Color::White, "Bc4"), e5), Some(bc4));
        assert_eq!(tree.next_index(&mv(Color::White, "Nf3"), e5), Some(nf3));
        assert_eq!(tree.next_index(&mv(Color::White, "d4"), e5), None);
    }

    #[test]
    fn remove_mainline_node_promotes_first_variation() {
        let (mut tree, [e4, e5, nf3, nc6, bc4, _]) = sample();
        let removed = tree.remove(nf3);
        assert_eq!(removed, vec![nf3, nc6]);
        assert_eq!(tree.mainline_child(e5), Some(bc4));
        assert!(tree.get(e5).unwrap().variations.is_empty());
        assert_eq!(tree.last_main_variation_index(), bc4);
        assert_eq!(tree.full_variation(e4), vec![e4, e5, bc4]);
        assert_eq!(tree.leaf_node_indices(), &computed_leaves(&tree));
    }

    #[test]
    fn remove_variation_keeps_mainline() {
        let (mut tree, [e4, _, _, nc6, _, c5]) = sample();
        tree.remove(c5);
        assert!(tree.get(e4).unwrap().variations.is_empty());
        assert_eq!(tree.last_main_variation_index(), nc6);
        assert!(!tree.contains(c5));
        assert_eq!(tree.leaf_node_indices(), &computed_leaves(&tree));
    }

    #[test]
    fn remove_whole_game_restores_sentinel_leaf() {
        let (mut tree, [e4, ..]) = sample();
        let removed = tree.remove(e4);
        assert_eq!(removed.len(), 6);
        assert!(tree.is_empty());
        assert_eq!(tree.leaf_node_indices(), &BTreeSet::from([tree.sentinel()]));
        assert_eq!(tree.last_main_variation_index(), tree.sentinel());
    }

    #[test]
    fn remove_sentinel_or_unknown_is_noop() {
        let (mut tree, _) = sample();
        let before = tree.clone();
        assert!(tree.remove(tree.sentinel()).is_empty());
        assert!(tree.remove(Index::new(9, Color::Black)).is_empty());
        assert_eq!(tree, before);
    }

    #[test]
    fn path_between_branches_goes_through_common_ancestor() {
        let (tree, [_, e5, nf3, nc6, bc4, _]) = sample();
        assert_eq!(tree.lowest_common_ancestor(nc6, bc4), Some(e5));
        assert_eq!(
            tree.path(nc6, bc4),
            vec![
                (Direction::Reverse, nc6),
                (Direction::Reverse, nf3),
                (Direction::Forward, bc4),
            ]
        );
    }

    #[test]
    fn path_degenerate_cases() {
        let (tree, [e4, e5, nf3, nc6, _, c5]) = sample();
        let sentinel = tree.sentinel();
        assert!(tree.path(nf3, nf3).is_empty());
        assert_eq!(
            tree.path(sentinel, nf3),
            vec![
                (Direction::Forward, e4),
                (Direction::Forward, e5),
                (Direction::Forward, nf3),
            ]
        );
        assert_eq!(
            tree.path(e5, sentinel),
            vec![(Direction::Reverse, e5), (Direction::Reverse, e4)]
        );
        assert_eq!(
            tree.path(e4, nc6),
            vec![
                (Direction::Forward, e5),
                (Direction::Forward, nf3),
                (Direction::Forward, nc6),
            ]
        );
        assert_eq!(
            tree.path(nf3, e4),
            vec![(Direction::Reverse, nf3), (Direction::Reverse, e5)]
        );
        assert_eq!(
            tree.path(c5, e5),
            vec![(Direction::Reverse, c5), (Direction::Forward, e5)]
        );
    }

    #[test]
    fn path_without_common_ancestor_crosses_the_root() {
        let (mut tree, [e4, e5, ..]) = sample();
        let d4 = tree.add(mv(Color::White, "d4"), tree.sentinel());
        let d5 = tree.add(mv(Color::Black, "d5"), d4);
        assert_eq!(tree.lowest_common_ancestor(e5, d5), None);
        assert_eq!(
            tree.path(e5, d5),
            vec![
                (Direction::Reverse, e5),
                (Direction::Reverse, e4),
                (Direction::Forward, d4),
                (Direction::Forward, d5),
            ]
        );
    }

    #[test]
    fn all_lines_one_per_leaf() {
        let (tree, [e4, e5, nf3, nc6, bc4, c5]) = sample();
        let lines = tree.all_lines();
        assert_eq!(lines.len(), 3);
        // Leaves in index order: 1...c5#1, 2.Bc4#1, 2...Nc6.
        assert_eq!(lines[0], vec![e4, c5]);
        assert_eq!(lines[1], vec![e4, e5, bc4]);
        assert_eq!(lines[2], vec![e4, e5, nf3, nc6]);
        for line in &lines {
            assert_eq!(line[0], e4);
        }
    }

    #[test]
    fn annotate_updates_fields() {
        let (mut tree, [e4, ..]) = sample();
        tree.annotate(e4, Annotation::Comment("king's pawn".to_string()));
        tree.annotate(e4, Annotation::MoveAssessment(MoveAssessment::Good));
        tree.annotate(
            e4,
            Annotation::PositionAssessment(PositionAssessment::WhiteSlightAdvantage),
        );
        let node = tree.get(e4).unwrap();
        let mv = node.mv.as_ref().unwrap();
        assert_eq!(mv.comment, "king's pawn");
        assert_eq!(mv.assessment, MoveAssessment::Good);
        assert_eq!(node.position_assessment, PositionAssessment::WhiteSlightAdvantage);

        let before = tree.clone();
        tree.annotate(tree.sentinel(), Annotation::Comment("ignored".to_string()));
        tree.annotate(Index::new(30, Color::White), Annotation::Comment("x".to_string()));
        assert_eq!(tree, before);
    }

    #[test]
    fn pgn_representation_orders_variations() {
        let (mut tree, [e4, e5, nf3, nc6, bc4, c5]) = sample();
        let d4 = tree.add(mv(Color::White, "d4"), tree.sentinel());
        tree.annotate(
            e4,
            Annotation::PositionAssessment(PositionAssessment::Unclear),
        );

        let elements = tree.pgn_representation();
        let m = |san: &str, color: Color, index: Index| PgnElement::Move(mv(color, san), index);
        assert_eq!(
            elements,
            vec![
                PgnElement::WhiteNumber(1),
                m("e4", Color::White, e4),
                PgnElement::PositionAssessment(PositionAssessment::Unclear),
                PgnElement::VariationStart,
                PgnElement::WhiteNumber(1),
                m("d4", Color::White, d4),
                PgnElement::VariationEnd,
                PgnElement::BlackNumber(1),
                m("e5", Color::Black, e5),
                PgnElement::VariationStart,
                PgnElement::BlackNumber(1),
                m("c5", Color::Black, c5),
                PgnElement::VariationEnd,
                PgnElement::WhiteNumber(2),
                m("Nf3", Color::White, nf3),
                PgnElement::VariationStart,
                PgnElement::WhiteNumber(2),
                m("Bc4", Color::White, bc4),
                PgnElement::VariationEnd,
                PgnElement::BlackNumber(2),
                m("Nc6", Color::Black, nc6),
            ]
        );
    }
}
