//! SGF game-tree core.
//!
//! This crate models documents in the Smart Game Format: trees of nodes
//! carrying typed properties, used to record board games (principally Go).
//! It provides the node tree and its invariant-preserving mutation API, the
//! typed property-value model, and the codecs that turn raw SGF value
//! strings into structured values and back. Lexing and writing SGF files
//! is left to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use sgf_core::model::{BoardSize, Game, GameType, Property, PropertyType};
//! use sgf_core::codec::{decompose_date, Notation};
//!
//! let mut game = Game::with_root();
//! let root = game.root().unwrap();
//! let mv = game.tree_mut().create_node();
//! game.tree_builder().append_child(mv, root).unwrap();
//!
//! // A parser hands over raw values; conversion never fails.
//! let b = Property::from_raw("B", &["pd"], GameType::Go, BoardSize::DEFAULT_GO);
//! game.tree_mut().set_property(mv, b).unwrap();
//!
//! let stored = game.tree().property(mv, PropertyType::BlackMove).unwrap().unwrap();
//! let point = stored.first_single().unwrap().as_go_move().unwrap().point.unwrap();
//! assert_eq!(point.position(Notation::Hybrid).as_deref(), Some("Q16"));
//!
//! assert_eq!(decompose_date("2024-05-01,02").len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Node tree, properties, values, games and game information
//! - [`codec`]: Coordinate notations and structured value codecs
//! - [`validate`]: Advisory whole-tree checks
//! - [`error`]: Error types
//! - [`limits`]: Board and notation limits
//! - [`util`]: Calendar, number and text helpers
//!
//! # Errors
//!
//! Structural misuse of the tree (cycles, stale handles, non-children) is
//! rejected with a [`TreeError`] and leaves the tree unchanged. Malformed SGF
//! data is never an error: values keep their raw text and report why they
//! did not convert, codecs return records with a validity flag.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::{ConversionError, PropertyError, TreeError};
pub use model::{
    BoardSize, Color, Document, Game, GameInfo, GameTree, GameType, NodeId, Property,
    PropertyType, PropertyValue, SingleValue, TreeBuilder, ValueKind,
};
pub use validate::{validate_tree, TreeIssue};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
