//! Node storage and navigation.
//!
//! A [`GameTree`] owns every node of one game in a slot arena. Callers hold
//! [`NodeId`] handles: small `Copy` values naming a tree, a slot and the
//! slot's generation. Two handles are equal exactly when they denote the same
//! stored node, so comparing or hashing nodes never touches the subtree.
//!
//! Nodes are created detached. Structure changes go through
//! [`TreeBuilder`](crate::model::TreeBuilder); this module only offers
//! read access to the structure plus node properties. A detached subtree
//! stays in the arena until [`GameTree::discard`] frees it, after which every
//! handle into it is stale.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::trace;

use crate::error::TreeError;
use crate::model::{Property, PropertyCategory, PropertyType};

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(1);

/// Handle to a node of a [`GameTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    tree: u32,
    index: u32,
    generation: u32,
}

impl NodeId {
    /// The id of the tree the node belongs to.
    pub fn tree_id(&self) -> u32 {
        self.tree
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}.{}", self.tree, self.index)
    }
}

#[derive(Debug, Clone, Default)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    properties: Vec<Property>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<NodeData>,
}

/// Arena owning the nodes of one game.
#[derive(Debug)]
pub struct GameTree {
    id: u32,
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: Option<NodeId>,
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTree {
    /// Creates an empty tree with a process-unique id.
    pub fn new() -> Self {
        Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Number of live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Creates a detached node without properties.
    pub fn create_node(&mut self) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(NodeData::default());
            return NodeId {
                tree: self.id,
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(NodeData::default()),
        });
        NodeId {
            tree: self.id,
            index,
            generation: 0,
        }
    }

    /// Returns true if the handle denotes a live node of this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        self.check(node).is_ok()
    }

    pub(crate) fn check(&self, node: NodeId) -> Result<(), TreeError> {
        self.data(node).map(|_| ())
    }

    fn data(&self, node: NodeId) -> Result<&NodeData, TreeError> {
        if node.tree != self.id {
            return Err(TreeError::ForeignNode { node });
        }
        self.slots
            .get(node.index as usize)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(TreeError::UnknownNode { node })
    }

    fn data_mut(&mut self, node: NodeId) -> Result<&mut NodeData, TreeError> {
        if node.tree != self.id {
            return Err(TreeError::ForeignNode { node });
        }
        self.slots
            .get_mut(node.index as usize)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(TreeError::UnknownNode { node })
    }

    // =========================================================================
    // Game root
    // =========================================================================

    /// The root node of the game, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Makes a detached node the game's root. The previous root's subtree
    /// stays in the arena, detached.
    pub fn set_root(&mut self, root: Option<NodeId>) -> Result<(), TreeError> {
        if let Some(node) = root {
            if self.data(node)?.parent.is_some() {
                return Err(TreeError::NodeIsAttached { node });
            }
        }
        self.root = root;
        Ok(())
    }

    /// Creates a node and makes it the root.
    pub(crate) fn create_root(&mut self) -> NodeId {
        let root = self.create_node();
        self.root = Some(root);
        root
    }

    /// Returns true if the node is the game's root node.
    pub fn is_game_root(&self, node: NodeId) -> bool {
        self.root == Some(node)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.data(node)?.parent)
    }

    /// The children in order.
    pub fn children(&self, node: NodeId) -> Result<&[NodeId], TreeError> {
        Ok(&self.data(node)?.children)
    }

    pub fn first_child(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.data(node)?.children.first().copied())
    }

    pub fn last_child(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.data(node)?.children.last().copied())
    }

    pub fn child_count(&self, node: NodeId) -> Result<usize, TreeError> {
        Ok(self.data(node)?.children.len())
    }

    pub fn has_children(&self, node: NodeId) -> Result<bool, TreeError> {
        Ok(!self.data(node)?.children.is_empty())
    }

    /// Position of the node among its parent's children.
    pub fn child_index(&self, node: NodeId) -> Result<Option<usize>, TreeError> {
        match self.data(node)?.parent {
            Some(parent) => Ok(self.children(parent)?.iter().position(|c| *c == node)),
            None => Ok(None),
        }
    }

    pub fn next_sibling(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.sibling_at(node, 1)
    }

    pub fn previous_sibling(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.sibling_at(node, -1)
    }

    fn sibling_at(&self, node: NodeId, offset: isize) -> Result<Option<NodeId>, TreeError> {
        let Some(parent) = self.data(node)?.parent else {
            return Ok(None);
        };
        let siblings = self.children(parent)?;
        let sibling = siblings
            .iter()
            .position(|c| *c == node)
            .and_then(|i| i.checked_add_signed(offset))
            .and_then(|i| siblings.get(i).copied());
        Ok(sibling)
    }

    /// Returns true if the node has no parent. Detached nodes are roots of
    /// their own subtree.
    pub fn is_root(&self, node: NodeId) -> Result<bool, TreeError> {
        Ok(self.data(node)?.parent.is_none())
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(&self, node: NodeId) -> Result<Vec<NodeId>, TreeError> {
        let mut out = Vec::new();
        let mut current = self.data(node)?.parent;
        while let Some(n) = current {
            out.push(n);
            current = self.data(n)?.parent;
        }
        Ok(out)
    }

    /// Returns true if `ancestor` lies strictly above `node`.
    pub fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> Result<bool, TreeError> {
        self.check(ancestor)?;
        let mut current = self.data(node)?.parent;
        while let Some(n) = current {
            if n == ancestor {
                return Ok(true);
            }
            current = self.data(n)?.parent;
        }
        Ok(false)
    }

    /// Returns true if `descendant` lies strictly below `node`.
    pub fn is_descendant_of(&self, descendant: NodeId, node: NodeId) -> Result<bool, TreeError> {
        self.is_ancestor_of(node, descendant)
    }

    /// The topmost ancestor, or the node itself when it has no parent.
    pub fn root_of(&self, node: NodeId) -> Result<NodeId, TreeError> {
        Ok(self.ancestors(node)?.last().copied().unwrap_or(node))
    }

    /// Number of ancestors.
    pub fn depth(&self, node: NodeId) -> Result<usize, TreeError> {
        Ok(self.ancestors(node)?.len())
    }

    /// The node and all nodes below it in preorder.
    pub fn descendants(&self, node: NodeId) -> Result<Vec<NodeId>, TreeError> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.data(n)?.children.iter().rev());
        }
        Ok(out)
    }

    /// The node followed by the chain of first children.
    pub fn main_variation(&self, node: NodeId) -> Result<Vec<NodeId>, TreeError> {
        let mut out = vec![node];
        let mut current = self.first_child(node)?;
        while let Some(n) = current {
            out.push(n);
            current = self.first_child(n)?;
        }
        Ok(out)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn properties(&self, node: NodeId) -> Result<&[Property], TreeError> {
        Ok(&self.data(node)?.properties)
    }

    /// The property of the given type. For `Unknown` this is the first
    /// unknown property; use [`Self::property_by_name`] to pick one.
    pub fn property(
        &self,
        node: NodeId,
        property_type: PropertyType,
    ) -> Result<Option<&Property>, TreeError> {
        Ok(self
            .data(node)?
            .properties
            .iter()
            .find(|p| p.property_type() == property_type))
    }

    pub fn property_by_name(&self, node: NodeId, name: &str) -> Result<Option<&Property>, TreeError> {
        Ok(self.data(node)?.properties.iter().find(|p| p.name() == name))
    }

    /// Adds a property, replacing one of the same type (or, for unknown
    /// properties, of the same name). Returns the replaced property.
    pub fn set_property(&mut self, node: NodeId, property: Property) -> Result<Option<Property>, TreeError> {
        let properties = &mut self.data_mut(node)?.properties;
        let existing = properties.iter().position(|p| {
            p.property_type() == property.property_type()
                && (!p.is_unknown() || p.name() == property.name())
        });
        Ok(match existing {
            Some(i) => Some(std::mem::replace(&mut properties[i], property)),
            None => {
                properties.push(property);
                None
            }
        })
    }

    /// Removes the property of the given type (the first one for `Unknown`).
    pub fn remove_property(
        &mut self,
        node: NodeId,
        property_type: PropertyType,
    ) -> Result<Option<Property>, TreeError> {
        let properties = &mut self.data_mut(node)?.properties;
        Ok(properties
            .iter()
            .position(|p| p.property_type() == property_type)
            .map(|i| properties.remove(i)))
    }

    pub fn remove_property_by_name(&mut self, node: NodeId, name: &str) -> Result<Option<Property>, TreeError> {
        let properties = &mut self.data_mut(node)?.properties;
        Ok(properties
            .iter()
            .position(|p| p.name() == name)
            .map(|i| properties.remove(i)))
    }

    pub fn clear_properties(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.data_mut(node)?.properties.clear();
        Ok(())
    }

    pub fn has_property_of_category(
        &self,
        node: NodeId,
        category: PropertyCategory,
    ) -> Result<bool, TreeError> {
        Ok(self
            .data(node)?
            .properties
            .iter()
            .any(|p| p.category() == category))
    }

    // =========================================================================
    // Freeing
    // =========================================================================

    /// Frees a detached node and its whole subtree. Returns the number of
    /// freed nodes. Handles into the subtree become stale.
    pub fn discard(&mut self, node: NodeId) -> Result<usize, TreeError> {
        if self.data(node)?.parent.is_some() {
            return Err(TreeError::NodeIsAttached { node });
        }
        if self.is_game_root(node) {
            return Err(TreeError::NodeIsGameRoot { node });
        }
        let doomed = self.descendants(node)?;
        for n in &doomed {
            let slot = &mut self.slots[n.index as usize];
            slot.node = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(n.index);
        }
        trace!(node = %node, count = doomed.len(), "discarded subtree");
        Ok(doomed.len())
    }

    // =========================================================================
    // Linking primitives for TreeBuilder. Callers validate first.
    // =========================================================================

    /// Detaches the node from its parent, returning the former parent.
    pub(crate) fn unlink(&mut self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        let Some(parent) = self.data_mut(node)?.parent.take() else {
            return Ok(None);
        };
        self.data_mut(parent)?.children.retain(|c| *c != node);
        Ok(Some(parent))
    }

    /// Inserts a detached node into the parent's children at `index`
    /// (clamped to the end).
    pub(crate) fn link(&mut self, node: NodeId, parent: NodeId, index: usize) -> Result<(), TreeError> {
        let children = &mut self.data_mut(parent)?.children;
        let index = index.min(children.len());
        children.insert(index, node);
        self.data_mut(node)?.parent = Some(parent);
        Ok(())
    }

    /// Detaches every child of `parent` from position `from` on.
    pub(crate) fn truncate_children(&mut self, parent: NodeId, from: usize) -> Result<(), TreeError> {
        let children = &mut self.data_mut(parent)?.children;
        let removed: Vec<NodeId> = children.drain(from.min(children.len())..).collect();
        for child in removed {
            self.data_mut(child)?.parent = None;
        }
        Ok(())
    }
}
