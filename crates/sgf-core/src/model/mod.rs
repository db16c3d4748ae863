//! Data model for SGF game trees.
//!
//! - Board geometry and game types ([`BoardSize`], [`GameType`])
//! - The property-type registry ([`PropertyType`])
//! - Property values ([`SingleValue`], [`ComposedValue`], [`PropertyValue`])
//! - Properties ([`Property`])
//! - Node arena and navigation ([`GameTree`], [`NodeId`])
//! - Structural mutation ([`TreeBuilder`])
//! - Games, documents and game information

pub mod board;
pub mod builder;
pub mod game;
pub mod game_info;
pub mod go;
pub mod property;
pub mod property_type;
pub mod tree;
pub mod value;

pub use board::{BoardSize, GameType};
pub use builder::TreeBuilder;
pub use game::{Document, Game};
pub use game_info::{GameInfo, GameInfoBase, GoGameInfo};
pub use go::{GoMove, GoStone};
pub use property::{board_size_of, game_type_of, Property};
pub use property_type::{Multiplicity, PropertyCategory, PropertyType, ValueDescriptor, ValueForm};
pub use tree::{GameTree, NodeId};
pub use value::{Color, ComposedValue, Double, PropertyValue, SingleValue, ValueContext, ValueKind};
