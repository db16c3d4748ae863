//! Builds a short Go record and prints its tree, values and game info.
//!
//! Extra arguments are treated as points and shown in every notation:
//!
//! ```text
//! cargo run --example inspect_game -- dp 4-4 Q16
//! ```

use sgf_core::codec::{GoPoint, Notation};
use sgf_core::model::{Game, GameTree, NodeId, Property, PropertyValue};
use sgf_core::{validate_tree, BoardSize, GameType};

const RECORD: &[&[(&str, &[&str])]] = &[
    &[
        ("GM", &["1"]),
        ("FF", &["4"]),
        ("SZ", &["19"]),
        ("PB", &["Honinbo Shusaku"]),
        ("PW", &["Gennan Inseki"]),
        ("BR", &["4d"]),
        ("WR", &["8d"]),
        ("DT", &["1846-09-11,12,14,15"]),
        ("RE", &["B+2"]),
        ("KM", &["0"]),
    ],
    &[("B", &["qd"])],
    &[("W", &["dc"])],
    &[("B", &["pq"]), ("C", &["Black plays\nthe lower right."])],
    &[("W", &["oc"]), ("LB", &["oc:A", "md:B"])],
];

fn build(record: &[&[(&str, &[&str])]]) -> Game {
    let mut game = Game::with_root();
    let mut parent: Option<NodeId> = None;
    for properties in record {
        let node = match parent {
            None => game.root().expect("game has a root"),
            Some(p) => {
                let node = game.tree_mut().create_node();
                game.tree_builder()
                    .append_child(node, p)
                    .expect("fresh node can be appended");
                node
            }
        };
        let (game_type, board_size) = (game.game_type(), game.board_size());
        for &(name, values) in properties.iter() {
            let property = Property::from_raw(name, values, game_type, board_size);
            game.tree_mut().set_property(node, property).expect("node exists");
        }
        parent = Some(node);
    }
    game
}

fn format_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Single(v) => {
            if let Some(mv) = v.as_go_move() {
                format!("{}", mv)
            } else if let Some(point) = v.as_go_point() {
                format!("{} ({})", v.raw_value(), point.position(Notation::Hybrid).unwrap_or_default())
            } else if let Some(text) = v.as_any_text() {
                format!("{:?}", text)
            } else if v.has_typed_value() {
                v.raw_value().to_string()
            } else {
                format!("{} <{}>", v.raw_value(), v.conversion_error_message())
            }
        }
        PropertyValue::Composed(v) => format!(
            "{} : {}",
            format_value(&PropertyValue::Single(v.first().clone())),
            format_value(&PropertyValue::Single(v.second().clone()))
        ),
    }
}

fn print_tree(tree: &GameTree, root: NodeId) {
    for node in tree.descendants(root).expect("root exists") {
        let depth = tree.depth(node).expect("node exists");
        println!("{}{}", "  ".repeat(depth), node);
        for property in tree.properties(node).expect("node exists") {
            let values: Vec<String> = property.values().iter().map(format_value).collect();
            println!(
                "{}  {} ({:?}): {}",
                "  ".repeat(depth),
                property.name(),
                property.category(),
                values.join(", ")
            );
        }
    }
}

fn main() {
    let game = build(RECORD);
    let root = game.root().expect("game has a root");

    println!("=== Tree ===");
    println!("Game type: {}, board: {}", game.game_type(), game.board_size());
    print_tree(game.tree(), root);

    println!("\n=== Game Info ===");
    let info = game.create_game_info().expect("root exists").expect("game has a root");
    let base = info.base();
    println!("Black: {} ({})", base.black_player, base.black_rank);
    println!("White: {} ({})", base.white_player, base.white_rank);
    for date in base.dates() {
        println!("Played: {}", date);
    }
    println!("Result: {:?}", base.game_result());
    if let Some(go) = info.as_go() {
        println!("Komi: {:?}, black rank: {:?}", go.komi, go.black_player_rank());
    }

    println!("\n=== Issues ===");
    let issues = validate_tree(&game);
    if issues.is_empty() {
        println!("none");
    }
    for issue in issues {
        println!("{}", issue);
    }

    let board = BoardSize::DEFAULT_GO;
    for arg in std::env::args().skip(1) {
        match GoPoint::parse(&arg, board) {
            Some(point) => {
                let forms: Vec<String> = Notation::ALL
                    .iter()
                    .map(|n| format!("{:?}={}", n, point.position(*n).unwrap_or_default()))
                    .collect();
                println!("{}: {}", arg, forms.join(" "));
            }
            None => println!("{}: not a point on a {} {} board", arg, board, GameType::Go),
        }
    }
}
