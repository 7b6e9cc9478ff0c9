//! Branching game history.
//!
//! Nodes live in an arena owned by `GameHistory` and refer to one another by
//! `NodeId`. Each node keeps one main-line child and an ordered list of
//! variant children; the parent link is a plain index used for walking back
//! up. Whether a node is "main line" or "variant" is not stored on the node:
//! it follows from which slot of its parent refers to it, so after a
//! promotion or deletion callers should ask again.
//!
//! Deleted slots are recycled, but every reuse bumps the slot's generation
//! and a `NodeId` carries the generation it was issued with, so a stale id
//! reports `UnknownHistoryNode` instead of pointing at the new occupant.

use std::fmt;

use tracing::{debug, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::position::Position;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::move_notation::{move_to_notation, NotationStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "#{}", self.index)
        } else {
            write!(f, "#{}.{}", self.index, self.generation)
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<HistoryNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNode {
    position: Position,
    parent: Option<NodeId>,
    move_fan: Option<String>,
    main_line: Option<NodeId>,
    variants: Vec<NodeId>,
}

impl HistoryNode {
    fn new(position: Position, parent: Option<NodeId>, move_fan: Option<String>) -> Self {
        Self {
            position,
            parent,
            move_fan,
            main_line: None,
            variants: Vec::new(),
        }
    }

    #[inline]
    pub fn related_position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn parent_node(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn main_line(&self) -> Option<NodeId> {
        self.main_line
    }

    #[inline]
    pub fn variants(&self) -> &[NodeId] {
        &self.variants
    }

    /// Notation of the move played from the parent; `None` only at the root.
    #[inline]
    pub fn move_leading_to_this_node_fan(&self) -> Option<&str> {
        self.move_fan.as_deref()
    }

    /// Main line first, then variants in insertion order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.main_line.into_iter().chain(self.variants.iter().copied())
    }
}

/// Where the line containing a node branches off.
///
/// `node` is the nearest ancestor at which the path down to the queried node
/// leaves through a variant slot, and `branch` is that variant child. When
/// the path only ever follows main-line links, `node` is the tree root and
/// `branch` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRoot {
    pub node: NodeId,
    pub branch: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct GameHistory {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
    root: NodeId,
    notation: NotationStyle,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl GameHistory {
    pub fn new(position: Position) -> Self {
        Self::with_notation(position, NotationStyle::default())
    }

    pub fn with_notation(position: Position, notation: NotationStyle) -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(HistoryNode::new(position, None, None)),
            }],
            free: Vec::new(),
            live: 1,
            root: NodeId {
                index: 0,
                generation: 0,
            },
            notation,
        }
    }

    pub fn starting_position() -> Self {
        Self::new(Position::starting_position())
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn notation(&self) -> NotationStyle {
        self.notation
    }

    /// Number of live nodes, the root included.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Always false: the root cannot be deleted.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    pub fn node(&self, id: NodeId) -> ChessResult<&HistoryNode> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(ChessErrors::UnknownHistoryNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> ChessResult<&mut HistoryNode> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(ChessErrors::UnknownHistoryNode(id))
    }

    /// Store `node` in a free slot, or a new one, and hand out its id.
    fn allocate(&mut self, node: HistoryNode) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    pub fn position(&self, id: NodeId) -> ChessResult<&Position> {
        Ok(self.node(id)?.related_position())
    }

    /// Attach `position`, reached by the move written `notation`, under
    /// `parent`.
    ///
    /// The first child becomes the main line. Later children become variants
    /// unless a sibling with the same notation already exists, in which case
    /// that sibling's id is returned and nothing is inserted.
    pub fn add_child(&mut self, parent: NodeId, position: Position, notation: String) -> ChessResult<NodeId> {
        let parent_node = self.node(parent)?;

        if let Some(existing) = parent_node
            .children()
            .find(|child| self.node_notation(*child) == Some(notation.as_str()))
        {
            trace!(%parent, %existing, %notation, "duplicate move, reusing existing child");
            return Ok(existing);
        }

        let has_main_line = parent_node.main_line.is_some();
        let id = self.allocate(HistoryNode::new(position, Some(parent), Some(notation)));

        let parent_node = self.node_mut(parent)?;
        if has_main_line {
            parent_node.variants.push(id);
            debug!(%parent, child = %id, "added variant");
        } else {
            parent_node.main_line = Some(id);
            debug!(%parent, child = %id, "added main line");
        }

        Ok(id)
    }

    /// Play `mv` from the position at `node` and attach the result.
    ///
    /// A rejected move leaves the tree untouched.
    pub fn play_move(&mut self, node: NodeId, mv: &ChessMove) -> ChessResult<NodeId> {
        let position = *self.position(node)?;
        let next = position.apply_move(mv)?;
        let notation = move_to_notation(&position, mv, self.notation)?;
        self.add_child(node, next, notation)
    }

    pub fn is_main_line(&self, id: NodeId) -> ChessResult<bool> {
        match self.node(id)?.parent {
            None => Ok(true),
            Some(parent) => Ok(self.node(parent)?.main_line == Some(id)),
        }
    }

    pub fn find_line_root(&self, id: NodeId) -> ChessResult<LineRoot> {
        let mut current = id;

        loop {
            match self.node(current)?.parent {
                None => {
                    return Ok(LineRoot {
                        node: current,
                        branch: None,
                    })
                }
                Some(parent) => {
                    if self.node(parent)?.main_line == Some(current) {
                        current = parent;
                    } else {
                        return Ok(LineRoot {
                            node: parent,
                            branch: Some(current),
                        });
                    }
                }
            }
        }
    }

    /// Delete the line `id` belongs to and return the line root, which is
    /// the natural place for a caller's cursor to land.
    ///
    /// On the principal line every child of the root goes, main line and
    /// variants alike. Inside a variant only that variant's subtree goes.
    pub fn delete_this_line(&mut self, id: NodeId) -> ChessResult<NodeId> {
        let line_root = self.find_line_root(id)?;

        match line_root.branch {
            None => {
                let root = self.node_mut(line_root.node)?;
                let removed: Vec<NodeId> = root.main_line.take().into_iter().chain(root.variants.drain(..)).collect();
                for child in removed {
                    self.free_subtree(child);
                }
                debug!(root = %line_root.node, "deleted principal line");
            }
            Some(branch) => {
                self.node_mut(line_root.node)?
                    .variants
                    .retain(|variant| *variant != branch);
                self.free_subtree(branch);
                debug!(line_root = %line_root.node, %branch, "deleted variant");
            }
        }

        Ok(line_root.node)
    }

    /// Make the variant containing `id` the main line at its line root.
    /// Nothing happens for nodes already on the principal line.
    pub fn promote_this_line(&mut self, id: NodeId) -> ChessResult<()> {
        let line_root = self.find_line_root(id)?;
        let Some(branch) = line_root.branch else {
            return Ok(());
        };

        let index = self
            .node(line_root.node)?
            .variants
            .iter()
            .position(|variant| *variant == branch)
            .ok_or(ChessErrors::UnknownHistoryNode(branch))?;

        self.promote_line(line_root.node, index)
    }

    /// Swap variant `index` of `parent` with its main line.
    pub fn promote_line(&mut self, parent: NodeId, index: usize) -> ChessResult<()> {
        let node = self.node_mut(parent)?;
        let Some(main_line) = node.main_line else {
            return Err(ChessErrors::NoMainVariation(parent));
        };
        let len = node.variants.len();
        let Some(slot) = node.variants.get_mut(index) else {
            return Err(ChessErrors::VariationIndexOutOfRange { index, len });
        };

        let promoted = std::mem::replace(slot, main_line);
        node.main_line = Some(promoted);
        debug!(%parent, %promoted, demoted = %main_line, "promoted variant");
        Ok(())
    }

    /// Ids from the root down to `id`, both included.
    pub fn path_from_root(&self, id: NodeId) -> ChessResult<Vec<NodeId>> {
        let mut path = vec![id];
        let mut current = self.node(id)?.parent;

        while let Some(parent) = current {
            path.push(parent);
            current = self.node(parent)?.parent;
        }

        path.reverse();
        Ok(path)
    }

    pub fn moves_from_root(&self, id: NodeId) -> ChessResult<Vec<String>> {
        let mut moves = Vec::new();
        for node in self.path_from_root(id)? {
            if let Some(notation) = self.node(node)?.move_leading_to_this_node_fan() {
                moves.push(notation.to_owned());
            }
        }
        Ok(moves)
    }

    /// Follow main-line links from `id` to the last node.
    pub fn main_line_end(&self, id: NodeId) -> ChessResult<NodeId> {
        let mut current = id;
        while let Some(next) = self.node(current)?.main_line {
            current = next;
        }
        Ok(current)
    }

    fn node_notation(&self, id: NodeId) -> Option<&str> {
        self.node(id).ok()?.move_leading_to_this_node_fan()
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(slot) = self
                .slots
                .get_mut(current.index)
                .filter(|slot| slot.generation == current.generation)
            else {
                continue;
            };
            let Some(node) = slot.node.take() else {
                continue;
            };

            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(current.index);
            self.live -= 1;
            stack.extend(node.children());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GameHistory, LineRoot, NodeId};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Square;
    use crate::moves::move_descriptions::ChessMove;
    use crate::utils::move_notation::NotationStyle;

    fn mv(from: &str, to: &str) -> ChessMove {
        let from: Square = from.parse().expect("from square");
        let to: Square = to.parse().expect("to square");
        ChessMove::new(from, to)
    }

    fn play(history: &mut GameHistory, node: NodeId, from: &str, to: &str) -> NodeId {
        history.play_move(node, &mv(from, to)).expect("move should play")
    }

    #[test]
    fn first_child_is_main_line_then_variants() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        let e4 = play(&mut history, root, "e2", "e4");
        let d4 = play(&mut history, root, "d2", "d4");
        let nf3 = play(&mut history, root, "g1", "f3");

        let root_node = history.node(root).expect("root");
        assert_eq!(root_node.main_line(), Some(e4));
        assert_eq!(root_node.variants(), &[d4, nf3]);
        assert_eq!(root_node.move_leading_to_this_node_fan(), None);
        assert_eq!(history.node(nf3).expect("nf3").move_leading_to_this_node_fan(), Some("♘f3"));
        assert_eq!(history.node(d4).expect("d4").parent_node(), Some(root));
        assert!(history.is_main_line(e4).expect("e4"));
        assert!(!history.is_main_line(d4).expect("d4"));
    }

    #[test]
    fn repeated_moves_reuse_the_existing_child() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        let e4 = play(&mut history, root, "e2", "e4");
        let d4 = play(&mut history, root, "d2", "d4");

        assert_eq!(play(&mut history, root, "e2", "e4"), e4);
        assert_eq!(play(&mut history, root, "d2", "d4"), d4);
        assert_eq!(history.node(root).expect("root").variants().len(), 1);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn rejected_moves_leave_the_tree_alone() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        let err = history.play_move(root, &mv("e2", "e5")).expect_err("illegal");
        assert!(matches!(err, ChessErrors::IllegalMove { .. }));
        let err = history.play_move(root, &mv("e4", "e5")).expect_err("empty square");
        assert!(matches!(err, ChessErrors::NoPieceAtStart(_)));
        assert_eq!(history.len(), 1);
        assert_eq!(history.node(root).expect("root").main_line(), None);
    }

    #[test]
    fn line_root_of_nested_variant() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        let e4 = play(&mut history, root, "e2", "e4");
        let e5 = play(&mut history, e4, "e7", "e5");
        let c5 = play(&mut history, e4, "c7", "c5");
        let nf3 = play(&mut history, c5, "g1", "f3");

        assert_eq!(
            history.find_line_root(e5).expect("e5"),
            LineRoot { node: root, branch: None }
        );
        assert_eq!(
            history.find_line_root(nf3).expect("nf3"),
            LineRoot { node: e4, branch: Some(c5) }
        );
        assert_eq!(
            history.find_line_root(root).expect("root"),
            LineRoot { node: root, branch: None }
        );
    }

    #[test]
    fn promote_twice_restores_the_original_order() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        let e4 = play(&mut history, root, "e2", "e4");
        let d4 = play(&mut history, root, "d2", "d4");
        let d5 = play(&mut history, d4, "d7", "d5");

        history.promote_this_line(d5).expect("promote d4 line");
        assert_eq!(history.node(root).expect("root").main_line(), Some(d4));
        assert_eq!(history.node(root).expect("root").variants(), &[e4]);
        assert!(history.is_main_line(d4).expect("d4"));

        history.promote_this_line(e4).expect("promote e4 line");
        assert_eq!(history.node(root).expect("root").main_line(), Some(e4));
        assert_eq!(history.node(root).expect("root").variants(), &[d4]);
    }

    #[test]
    fn promoting_the_principal_line_is_a_no_op() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        let e4 = play(&mut history, root, "e2", "e4");
        history.promote_this_line(e4).expect("no-op");
        history.promote_this_line(root).expect("no-op");
        assert_eq!(history.node(root).expect("root").main_line(), Some(e4));
    }

    #[test]
    fn promote_line_errors() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        assert_eq!(history.promote_line(root, 0), Err(ChessErrors::NoMainVariation(root)));

        play(&mut history, root, "e2", "e4");
        assert_eq!(
            history.promote_line(root, 0),
            Err(ChessErrors::VariationIndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn deleting_a_variant_drops_only_its_subtree() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        let e4 = play(&mut history, root, "e2", "e4");
        let e5 = play(&mut history, e4, "e7", "e5");
        let c5 = play(&mut history, e4, "c7", "c5");
        let nf3 = play(&mut history, c5, "g1", "f3");

        assert_eq!(history.delete_this_line(nf3), Ok(e4));
        assert!(!history.contains(c5));
        assert!(!history.contains(nf3));
        assert_eq!(history.node(e4).expect("e4").main_line(), Some(e5));
        assert!(history.node(e4).expect("e4").variants().is_empty());
        assert_eq!(history.node(nf3), Err(ChessErrors::UnknownHistoryNode(nf3)));
    }

    #[test]
    fn deleting_the_principal_line_clears_the_root() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        let e4 = play(&mut history, root, "e2", "e4");
        let e5 = play(&mut history, e4, "e7", "e5");
        let d4 = play(&mut history, root, "d2", "d4");

        assert_eq!(history.delete_this_line(e5), Ok(root));
        assert_eq!(history.len(), 1);
        assert_eq!(history.node(root).expect("root").main_line(), None);
        assert!(!history.contains(d4));

        let again = play(&mut history, root, "e2", "e4");
        assert_ne!(again, e4);
        assert_eq!(history.node(root).expect("root").main_line(), Some(again));
    }

    #[test]
    fn freed_slots_are_reused_without_reviving_stale_ids() {
        let mut history = GameHistory::starting_position();
        let root = history.root();
        let e4 = play(&mut history, root, "e2", "e4");
        let e5 = play(&mut history, e4, "e7", "e5");

        history.delete_this_line(e5).expect("clear the tree");
        let d4 = play(&mut history, root, "d2", "d4");
        let d5 = play(&mut history, d4, "d7", "d5");

        let reused: Vec<usize> = vec![d4.index(), d5.index()];
        assert!(reused.contains(&e4.index()));
        assert!(reused.contains(&e5.index()));
        assert_eq!(history.len(), 3);

        assert_eq!(history.node(e4), Err(ChessErrors::UnknownHistoryNode(e4)));
        assert_eq!(history.node(e5), Err(ChessErrors::UnknownHistoryNode(e5)));
        assert_eq!(history.play_move(e4, &mv("d7", "d5")), Err(ChessErrors::UnknownHistoryNode(e4)));
        assert_eq!(history.moves_from_root(d5).expect("moves"), vec!["d4", "d5"]);
    }

    #[test]
    fn paths_and_main_line_end() {
        let mut history = GameHistory::with_notation(
            crate::game_state::position::Position::starting_position(),
            NotationStyle::Letters,
        );
        let root = history.root();
        let e4 = play(&mut history, root, "e2", "e4");
        let e5 = play(&mut history, e4, "e7", "e5");
        let nf3 = play(&mut history, e5, "g1", "f3");

        assert_eq!(history.path_from_root(nf3).expect("path"), vec![root, e4, e5, nf3]);
        assert_eq!(history.moves_from_root(nf3).expect("moves"), vec!["e4", "e5", "Nf3"]);
        assert_eq!(history.main_line_end(root).expect("end"), nf3);
        assert_eq!(history.main_line_end(nf3).expect("end"), nf3);
    }
}
