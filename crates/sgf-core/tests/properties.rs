use proptest::prelude::*;

use sgf_core::codec::{
    compose_date, decode_position, decompose_date, decompose_game_result,
    decompose_go_player_rank, decompose_go_ruleset, decompose_round_information, encode_position,
    Date, GoPoint, Notation,
};
use sgf_core::model::{BoardSize, GameTree, GameType, NodeId, Property};
use sgf_core::util::days_in_month;
use sgf_core::TreeError;

fn calendar_date() -> impl Strategy<Value = Date> {
    (1i32..=9999, 1u32..=12)
        .prop_flat_map(|(year, month)| (Just(year), Just(month), 1..=days_in_month(year, month)))
        .prop_map(|(year, month, day)| Date { year, month, day })
}

fn board_and_point() -> impl Strategy<Value = (i64, i64, i64)> {
    (1i64..=52).prop_flat_map(|edge| (Just(edge), 1..=edge, 1..=edge))
}

/// A root with a chain of `depth` nodes below it; returns the chain,
/// root first.
fn chain(tree: &mut GameTree, depth: usize) -> Vec<NodeId> {
    let mut nodes = vec![tree.create_node()];
    for _ in 0..depth {
        let node = tree.create_node();
        let parent = nodes[nodes.len() - 1];
        tree.builder().append_child(node, parent).unwrap();
        nodes.push(node);
    }
    nodes
}

proptest! {
    #[test]
    fn date_compose_decompose(date in calendar_date()) {
        let raw = compose_date(&[date]);
        prop_assert_eq!(decompose_date(&raw), vec![date]);
    }

    #[test]
    fn date_list_round_trips(first in calendar_date(), second in calendar_date()) {
        prop_assume!(first != second);
        let raw = compose_date(&[first, second]);
        prop_assert_eq!(decompose_date(&raw), vec![first, second]);
    }

    #[test]
    fn date_compose_rejects_invalid(
        good in calendar_date(),
        month in 13u32..100,
        put_first in any::<bool>(),
    ) {
        let bad = Date { year: good.year, month, day: 1 };
        let dates = if put_first { [bad, good] } else { [good, bad] };
        prop_assert_eq!(compose_date(&dates), "");
    }

    #[test]
    fn sgf_and_figure_notation_round_trip((edge, x, y) in board_and_point()) {
        let board = BoardSize::square(edge);
        for notation in [Notation::Sgf, Notation::Figure] {
            let text = encode_position(x, y, notation, board).unwrap();
            prop_assert_eq!(decode_position(&text, notation, board), Some((x, y)));
        }
    }

    #[test]
    fn hybrid_notation_round_trip((edge, x, y) in board_and_point()) {
        let board = BoardSize::square(edge);
        let point = GoPoint::new(x, y, board).unwrap();
        if edge <= 25 {
            let text = point.position(Notation::Hybrid).unwrap();
            prop_assert_eq!(decode_position(&text, Notation::Hybrid, board), Some((x, y)));
            prop_assert_eq!(GoPoint::parse(&text, board), Some(point));
        } else {
            prop_assert!(!point.has_position_in_notation(Notation::Hybrid));
            prop_assert_eq!(point.position(Notation::Hybrid), None);
        }
    }

    #[test]
    fn append_then_remove_restores_children(siblings in 0usize..8) {
        let mut tree = GameTree::new();
        let parent = tree.create_node();
        for _ in 0..siblings {
            let node = tree.create_node();
            tree.builder().append_child(node, parent).unwrap();
        }
        let before = tree.children(parent).unwrap().to_vec();

        let child = tree.create_node();
        let mut builder = tree.builder();
        builder.append_child(child, parent).unwrap();
        builder.remove_child(child, parent).unwrap();
        prop_assert_eq!(tree.children(parent).unwrap(), &before[..]);
    }

    #[test]
    fn linking_an_ancestor_below_fails(depth in 1usize..10, pick in any::<prop::sample::Index>()) {
        let mut tree = GameTree::new();
        let nodes = chain(&mut tree, depth);
        let node = nodes[depth];
        let ancestor = nodes[pick.index(depth + 1)];
        let outsider = tree.create_node();
        let shape: Vec<Vec<NodeId>> =
            nodes.iter().map(|n| tree.children(*n).unwrap().to_vec()).collect();

        let mut builder = tree.builder();
        let as_child = builder.insert_child(ancestor, node, None);
        let expected = if ancestor == node {
            TreeError::SameNode { node }
        } else {
            TreeError::WouldCreateCycle { child: ancestor, node }
        };
        prop_assert_eq!(as_child, Err(expected));
        prop_assert_eq!(
            builder.insert_child(outsider, node, Some(ancestor)),
            Err(TreeError::NotAChild { child: ancestor, node })
        );

        let after: Vec<Vec<NodeId>> =
            nodes.iter().map(|n| tree.children(*n).unwrap().to_vec()).collect();
        prop_assert_eq!(after, shape);
        prop_assert!(tree.is_root(outsider).unwrap());
    }

    #[test]
    fn codecs_never_panic(raw in ".{0,24}") {
        let _ = decompose_date(&raw);
        let _ = decompose_game_result(&raw);
        let _ = decompose_go_player_rank(&raw);
        let _ = decompose_go_ruleset(&raw);
        let _ = decompose_round_information(&raw);
        for notation in [Notation::Sgf, Notation::Figure, Notation::Hybrid] {
            let _ = decode_position(&raw, notation, BoardSize::DEFAULT_GO);
        }
    }

    #[test]
    fn raw_properties_keep_their_values(
        name in "[A-Z]{1,2}",
        values in prop::collection::vec("[ -~]{0,12}", 1..4),
    ) {
        let property = Property::from_raw(&name, &values, GameType::Go, BoardSize::DEFAULT_GO);
        prop_assert_eq!(property.name(), name.as_str());
        prop_assert!(property.values().len() <= values.len());
    }
}
