//! Whole-tree consistency checks.
//!
//! The tree builder keeps the structure sound, but says nothing about where
//! properties sit. These checks report SGF placement rules a tree violates.
//! They are advisory: nothing is rejected or repaired, callers decide what
//! to do with the issues.

use std::fmt;

use crate::model::{Game, GameTree, NodeId, PropertyCategory, PropertyValue};

/// A placement or value problem found in a game tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeIssue {
    /// A root property (GM, SZ, FF, ...) on a node other than the root.
    RootPropertyOutsideRoot { node: NodeId, property: String },
    /// Game-info properties on `node` while `ancestor` on the same path
    /// already has some.
    NestedGameInfo { ancestor: NodeId, node: NodeId },
    /// Move and setup properties on the same node.
    MixedMoveAndSetup { node: NodeId },
    /// A property value that did not convert to its typed form.
    UnconvertedValue {
        node: NodeId,
        property: String,
        message: String,
    },
}

impl fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeIssue::RootPropertyOutsideRoot { node, property } => {
                write!(f, "{}: root property {} outside the root node", node, property)
            }
            TreeIssue::NestedGameInfo { ancestor, node } => {
                write!(f, "{}: game info already given by ancestor {}", node, ancestor)
            }
            TreeIssue::MixedMoveAndSetup { node } => {
                write!(f, "{}: move and setup properties on the same node", node)
            }
            TreeIssue::UnconvertedValue {
                node,
                property,
                message,
            } => write!(f, "{}: {}: {}", node, property, message),
        }
    }
}

/// Checks the game's tree, starting at its root. A game without root has
/// no issues.
pub fn validate_tree(game: &Game) -> Vec<TreeIssue> {
    let mut issues = Vec::new();
    let Some(root) = game.root() else {
        return issues;
    };
    let tree = game.tree();

    // (node, closest game-info node above it)
    let mut stack: Vec<(NodeId, Option<NodeId>)> = vec![(root, None)];
    while let Some((node, info_above)) = stack.pop() {
        let has_info = check_node(tree, node, node == root, &mut issues);
        if has_info {
            if let Some(ancestor) = info_above {
                issues.push(TreeIssue::NestedGameInfo { ancestor, node });
            }
        }
        let info_below = if has_info { Some(node) } else { info_above };
        if let Ok(children) = tree.children(node) {
            stack.extend(children.iter().rev().map(|c| (*c, info_below)));
        }
    }
    issues
}

/// Checks one node's properties. Returns true if the node carries game
/// info.
fn check_node(tree: &GameTree, node: NodeId, is_root: bool, issues: &mut Vec<TreeIssue>) -> bool {
    let Ok(properties) = tree.properties(node) else {
        return false;
    };
    let mut has_move = false;
    let mut has_setup = false;
    let mut has_info = false;

    for property in properties {
        match property.category() {
            PropertyCategory::Root if !is_root => {
                issues.push(TreeIssue::RootPropertyOutsideRoot {
                    node,
                    property: property.name().to_string(),
                });
            }
            PropertyCategory::Move => has_move = true,
            PropertyCategory::Setup => has_setup = true,
            PropertyCategory::GameInfo => has_info = true,
            _ => {}
        }
        if property.is_unknown() {
            continue;
        }
        for value in property.values() {
            let singles = match value {
                PropertyValue::Single(v) => [Some(v), None],
                PropertyValue::Composed(v) => [Some(v.first()), Some(v.second())],
            };
            for single in singles.into_iter().flatten() {
                if let Some(error) = single.conversion_error() {
                    issues.push(TreeIssue::UnconvertedValue {
                        node,
                        property: property.name().to_string(),
                        message: error.to_string(),
                    });
                }
            }
        }
    }

    if has_move && has_setup {
        issues.push(TreeIssue::MixedMoveAndSetup { node });
    }
    has_info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoardSize, GameType, Property};

    fn set(game: &mut Game, node: NodeId, name: &str, value: &str) {
        let property = Property::from_raw(name, &[value], GameType::Go, BoardSize::DEFAULT_GO);
        game.tree_mut().set_property(node, property).unwrap();
    }

    fn chain(game: &mut Game, len: usize) -> Vec<NodeId> {
        let mut nodes = vec![game.root().unwrap()];
        for _ in 0..len {
            let node = game.tree_mut().create_node();
            let parent = *nodes.last().unwrap();
            game.tree_builder().append_child(node, parent).unwrap();
            nodes.push(node);
        }
        nodes
    }

    #[test]
    fn test_clean_tree() {
        let mut game = Game::with_root();
        let nodes = chain(&mut game, 2);
        set(&mut game, nodes[0], "SZ", "19");
        set(&mut game, nodes[0], "PB", "Black");
        set(&mut game, nodes[1], "B", "pd");
        set(&mut game, nodes[2], "W", "dp");
        assert!(validate_tree(&game).is_empty());
        assert!(validate_tree(&Game::new()).is_empty());
    }

    #[test]
    fn test_root_property_outside_root() {
        let mut game = Game::with_root();
        let nodes = chain(&mut game, 1);
        set(&mut game, nodes[1], "SZ", "9");
        assert_eq!(
            validate_tree(&game),
            vec![TreeIssue::RootPropertyOutsideRoot {
                node: nodes[1],
                property: "SZ".to_string()
            }]
        );
    }

    #[test]
    fn test_nested_game_info() {
        let mut game = Game::with_root();
        let nodes = chain(&mut game, 2);
        set(&mut game, nodes[0], "EV", "one");
        set(&mut game, nodes[2], "EV", "two");
        assert_eq!(
            validate_tree(&game),
            vec![TreeIssue::NestedGameInfo {
                ancestor: nodes[0],
                node: nodes[2]
            }]
        );
    }

    #[test]
    fn test_sibling_game_info_is_fine() {
        let mut game = Game::with_root();
        let root = game.root().unwrap();
        let a = game.tree_mut().create_node();
        let b = game.tree_mut().create_node();
        game.tree_builder().append_child(a, root).unwrap();
        game.tree_builder().append_child(b, root).unwrap();
        set(&mut game, a, "GN", "first");
        set(&mut game, b, "GN", "second");
        assert!(validate_tree(&game).is_empty());
    }

    #[test]
    fn test_mixed_move_and_setup() {
        let mut game = Game::with_root();
        let nodes = chain(&mut game, 1);
        set(&mut game, nodes[1], "B", "aa");
        set(&mut game, nodes[1], "AW", "bb");
        assert_eq!(
            validate_tree(&game),
            vec![TreeIssue::MixedMoveAndSetup { node: nodes[1] }]
        );
    }

    #[test]
    fn test_unconverted_value() {
        let mut game = Game::with_root();
        let root = game.root().unwrap();
        set(&mut game, root, "HA", "two");
        let issues = validate_tree(&game);
        assert_eq!(issues.len(), 1);
        assert!(matches!(&issues[0], TreeIssue::UnconvertedValue { property, .. } if property == "HA"));
        assert!(issues[0].to_string().contains("two"));
    }
}
