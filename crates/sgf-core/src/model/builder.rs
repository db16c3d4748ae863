//! Structural mutation of a [`GameTree`].
//!
//! Every operation validates all of its preconditions before touching the
//! tree. A rejected operation returns a [`TreeError`] and leaves the tree
//! exactly as it was. A node that already sits somewhere in the tree is moved
//! together with its subtree, never copied.
//!
//! # Example
//!
//! ```rust
//! use sgf_core::model::Game;
//!
//! let mut game = Game::new();
//! let root = game.tree_mut().create_node();
//! game.set_root(Some(root)).unwrap();
//!
//! let mv = game.tree_mut().create_node();
//! let variation = game.tree_mut().create_node();
//! let mut builder = game.tree_builder();
//! builder.append_child(mv, root).unwrap();
//! builder.insert_child(variation, root, Some(mv)).unwrap();
//! assert_eq!(game.tree().children(root).unwrap(), &[variation, mv]);
//! ```

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::model::{GameTree, NodeId};

/// Mutation API bound to one tree.
#[derive(Debug)]
pub struct TreeBuilder<'a> {
    tree: &'a mut GameTree,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(tree: &'a mut GameTree) -> Self {
        Self { tree }
    }

    /// Read access to the tree being built.
    pub fn tree(&self) -> &GameTree {
        &*self.tree
    }

    /// Replaces all children of `node` with `child`, or removes them all when
    /// `child` is None. The former children stay detached.
    pub fn set_first_child(&mut self, child: Option<NodeId>, node: NodeId) -> Result<(), TreeError> {
        let result = self.try_set_first_child(child, node);
        rejected("set_first_child", result)
    }

    /// Appends `child` as the last child of `node`.
    pub fn append_child(&mut self, child: NodeId, node: NodeId) -> Result<(), TreeError> {
        let result = self.try_insert_child(child, node, None);
        rejected("append_child", result)
    }

    /// Inserts `child` right before `before`, which must be a child of
    /// `node`. Without `before` this appends.
    pub fn insert_child(
        &mut self,
        child: NodeId,
        node: NodeId,
        before: Option<NodeId>,
    ) -> Result<(), TreeError> {
        let result = self.try_insert_child(child, node, before);
        rejected("insert_child", result)
    }

    /// Detaches `child`, which must be a child of `node`.
    pub fn remove_child(&mut self, child: NodeId, node: NodeId) -> Result<(), TreeError> {
        let result = self.try_remove_child(child, node);
        rejected("remove_child", result)
    }

    /// Puts `new_child` at the position of `old_child`, which is detached.
    pub fn replace_child(
        &mut self,
        old_child: NodeId,
        new_child: NodeId,
        node: NodeId,
    ) -> Result<(), TreeError> {
        let result = self.try_replace_child(old_child, new_child, node);
        rejected("replace_child", result)
    }

    /// Replaces every sibling after `node` with `next`, or drops them all
    /// when `next` is None. `node` must have a parent.
    pub fn set_next_sibling(&mut self, next: Option<NodeId>, node: NodeId) -> Result<(), TreeError> {
        let result = self.try_set_next_sibling(next, node);
        rejected("set_next_sibling", result)
    }

    /// Appends `node` to `parent` unless it already is its child; with None
    /// detaches `node` from its current parent.
    pub fn set_parent(&mut self, parent: Option<NodeId>, node: NodeId) -> Result<(), TreeError> {
        let result = self.try_set_parent(parent, node);
        rejected("set_parent", result)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Checks that `child` may be linked anywhere below `node`.
    fn check_attach(&self, child: NodeId, node: NodeId) -> Result<(), TreeError> {
        self.tree.check(node)?;
        self.tree.check(child)?;
        if child == node {
            return Err(TreeError::SameNode { node });
        }
        if self.tree.is_ancestor_of(child, node)? {
            return Err(TreeError::WouldCreateCycle { child, node });
        }
        if self.tree.is_game_root(child) {
            return Err(TreeError::NodeIsGameRoot { node: child });
        }
        Ok(())
    }

    fn check_child(&self, child: NodeId, node: NodeId) -> Result<usize, TreeError> {
        self.tree.check(node)?;
        if self.tree.parent(child)? != Some(node) {
            return Err(TreeError::NotAChild { child, node });
        }
        self.tree
            .child_index(child)?
            .ok_or(TreeError::NotAChild { child, node })
    }

    /// Unlinks an attached node before it is linked elsewhere.
    fn relocate(&mut self, node: NodeId) -> Result<(), TreeError> {
        if let Some(from) = self.tree.unlink(node)? {
            trace!(node = %node, from = %from, "relocating subtree");
        }
        Ok(())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn try_set_first_child(&mut self, child: Option<NodeId>, node: NodeId) -> Result<(), TreeError> {
        self.tree.check(node)?;
        let Some(child) = child else {
            return self.tree.truncate_children(node, 0);
        };
        self.check_attach(child, node)?;
        self.relocate(child)?;
        self.tree.truncate_children(node, 0)?;
        self.tree.link(child, node, 0)
    }

    fn try_insert_child(
        &mut self,
        child: NodeId,
        node: NodeId,
        before: Option<NodeId>,
    ) -> Result<(), TreeError> {
        self.check_attach(child, node)?;
        if let Some(before) = before {
            self.check_child(before, node)?;
            if before == child {
                return Ok(());
            }
        }
        self.relocate(child)?;
        let index = match before {
            Some(before) => self
                .tree
                .child_index(before)?
                .ok_or(TreeError::NotAChild { child: before, node })?,
            None => usize::MAX,
        };
        self.tree.link(child, node, index)
    }

    fn try_remove_child(&mut self, child: NodeId, node: NodeId) -> Result<(), TreeError> {
        self.check_child(child, node)?;
        self.tree.unlink(child)?;
        Ok(())
    }

    fn try_replace_child(
        &mut self,
        old_child: NodeId,
        new_child: NodeId,
        node: NodeId,
    ) -> Result<(), TreeError> {
        self.check_child(old_child, node)?;
        if old_child == new_child {
            return Ok(());
        }
        self.check_attach(new_child, node)?;
        self.relocate(new_child)?;
        let index = self
            .tree
            .child_index(old_child)?
            .ok_or(TreeError::NotAChild { child: old_child, node })?;
        self.tree.unlink(old_child)?;
        self.tree.link(new_child, node, index)
    }

    fn try_set_next_sibling(&mut self, next: Option<NodeId>, node: NodeId) -> Result<(), TreeError> {
        let parent = self.tree.parent(node)?.ok_or(TreeError::NotAttached { node })?;
        if let Some(next) = next {
            if next == node {
                return Err(TreeError::SameNode { node });
            }
            if self.tree.is_ancestor_of(next, node)? {
                return Err(TreeError::WouldCreateCycle { child: next, node });
            }
            self.check_attach(next, parent)?;
        }
        if let Some(next) = next {
            self.relocate(next)?;
        }
        let index = self
            .tree
            .child_index(node)?
            .ok_or(TreeError::NotAttached { node })?;
        self.tree.truncate_children(parent, index + 1)?;
        match next {
            Some(next) => self.tree.link(next, parent, index + 1),
            None => Ok(()),
        }
    }

    fn try_set_parent(&mut self, parent: Option<NodeId>, node: NodeId) -> Result<(), TreeError> {
        match parent {
            Some(parent) => {
                self.check_attach(node, parent)?;
                if self.tree.parent(node)? == Some(parent) {
                    return Ok(());
                }
                self.relocate(node)?;
                self.tree.link(node, parent, usize::MAX)
            }
            None => {
                self.tree.unlink(node)?;
                Ok(())
            }
        }
    }
}

fn rejected(operation: &'static str, result: Result<(), TreeError>) -> Result<(), TreeError> {
    if let Err(error) = &result {
        debug!(operation, %error, "tree operation rejected");
    }
    result
}

impl GameTree {
    /// A builder bound to this tree.
    pub fn builder(&mut self) -> TreeBuilder<'_> {
        TreeBuilder::new(self)
    }
}
