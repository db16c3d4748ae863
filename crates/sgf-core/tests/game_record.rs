//! Builds a small Go record the way a parser would and edits it.

use sgf_core::codec::{GameResultType, Notation};
use sgf_core::model::{Game, GameInfo, NodeId, Property, PropertyType};
use sgf_core::{validate_tree, BoardSize, GameType, TreeError, TreeIssue};

fn add_move(game: &mut Game, parent: NodeId, name: &str, point: &str) -> NodeId {
    let board_size = game.board_size();
    let node = game.tree_mut().create_node();
    let property = Property::from_raw(name, &[point], GameType::Go, board_size);
    game.tree_mut().set_property(node, property).unwrap();
    game.tree_builder().append_child(node, parent).unwrap();
    node
}

fn set_root_properties(game: &mut Game, properties: &[(&str, &str)]) {
    let root = game.root().unwrap();
    for (name, value) in properties {
        let property = Property::from_raw(name, &[*value], GameType::Go, BoardSize::DEFAULT_GO);
        game.tree_mut().set_property(root, property).unwrap();
    }
}

#[test]
fn test_record_with_variations() {
    let mut game = Game::with_root();
    set_root_properties(
        &mut game,
        &[("GM", "1"), ("FF", "4"), ("SZ", "9"), ("PB", "Black"), ("RE", "W+R")],
    );
    assert_eq!(game.board_size(), BoardSize::square(9));

    let root = game.root().unwrap();
    let b1 = add_move(&mut game, root, "B", "ee");
    let w2 = add_move(&mut game, b1, "W", "cc");
    let w2_alt = add_move(&mut game, b1, "W", "gc");
    let b3 = add_move(&mut game, w2, "B", "tt");

    let tree = game.tree();
    assert_eq!(tree.main_variation(root).unwrap(), vec![root, b1, w2, b3]);
    assert_eq!(tree.next_sibling(w2).unwrap(), Some(w2_alt));

    let mv = tree
        .property(w2_alt, PropertyType::WhiteMove)
        .unwrap()
        .and_then(Property::first_single)
        .and_then(|v| v.as_go_move())
        .unwrap();
    assert_eq!(mv.point.and_then(|p| p.position(Notation::Hybrid)).as_deref(), Some("G7"));

    // tt is a pass on boards up to 19x19.
    let pass = tree.property(b3, PropertyType::BlackMove).unwrap().unwrap();
    assert_eq!(pass.first_single().unwrap().raw_value(), "");
    assert!(pass.first_single().unwrap().as_go_move().unwrap().is_pass());

    let info = game.create_game_info().unwrap().unwrap();
    assert!(matches!(info, GameInfo::Go(_)));
    assert_eq!(info.base().game_result().result_type, GameResultType::WhiteWin);

    assert!(validate_tree(&game).is_empty());
}

#[test]
fn test_promote_variation() {
    let mut game = Game::with_root();
    let root = game.root().unwrap();
    let b1 = add_move(&mut game, root, "B", "ee");
    let w2 = add_move(&mut game, b1, "W", "cc");
    let w2_alt = add_move(&mut game, b1, "W", "gc");
    let b3_alt = add_move(&mut game, w2_alt, "B", "gg");

    // Move the alternative in front of the main line, subtree included.
    game.tree_builder().insert_child(w2_alt, b1, Some(w2)).unwrap();
    let tree = game.tree();
    assert_eq!(tree.children(b1).unwrap(), &[w2_alt, w2]);
    assert_eq!(tree.main_variation(root).unwrap(), vec![root, b1, w2_alt, b3_alt]);

    // Cut the old main line and free it.
    let mut builder = game.tree_builder();
    builder.remove_child(w2, b1).unwrap();
    assert_eq!(game.tree_mut().discard(w2).unwrap(), 1);
    assert_eq!(
        game.tree_builder().append_child(w2, b1),
        Err(TreeError::UnknownNode { node: w2 })
    );
    assert_eq!(game.tree().node_count(), 4);
}

#[test]
fn test_misplaced_properties_are_reported() {
    let mut game = Game::with_root();
    let root = game.root().unwrap();
    let b1 = add_move(&mut game, root, "B", "ee");
    let size = Property::from_raw("SZ", &["13"], GameType::Go, BoardSize::DEFAULT_GO);
    game.tree_mut().set_property(b1, size).unwrap();

    let issues = validate_tree(&game);
    assert_eq!(
        issues,
        vec![TreeIssue::RootPropertyOutsideRoot {
            node: b1,
            property: "SZ".to_string()
        }]
    );
}
