//! Error types for tree building, property construction and value conversion.
//!
//! Two regimes exist. [`TreeError`] and [`PropertyError`] report rejected
//! operations: the caller passed arguments that violate a precondition and
//! nothing was changed. [`ConversionError`] describes malformed SGF data; it
//! is never returned as `Err` from value construction but carried by the
//! value itself.

use thiserror::Error;

use crate::model::{BoardSize, NodeId, ValueKind};

/// A TreeBuilder or tree operation was rejected. The tree is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("{node} cannot be linked to itself")]
    SameNode { node: NodeId },

    #[error("linking {child} below {node} would create a cycle")]
    WouldCreateCycle { child: NodeId, node: NodeId },

    #[error("{child} is not a child of {node}")]
    NotAChild { child: NodeId, node: NodeId },

    #[error("{node} has no parent and therefore no siblings")]
    NotAttached { node: NodeId },

    #[error("{node} is a stale or freed node handle")]
    UnknownNode { node: NodeId },

    #[error("{node} belongs to a different tree")]
    ForeignNode { node: NodeId },

    #[error("{node} is the game's root node and cannot be moved below another node")]
    NodeIsGameRoot { node: NodeId },

    #[error("{node} is attached to a parent; detach it first")]
    NodeIsAttached { node: NodeId },
}

/// A property could not be constructed from the given values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("property {property} does not accept composed values {first:?}:{second:?}")]
    IllegalComposition {
        property: String,
        first: ValueKind,
        second: ValueKind,
    },

    #[error("property {property} does not accept single values of kind {kind:?}")]
    IllegalSingleValue { property: String, kind: ValueKind },

    #[error("property {property} accepts one value, got {count}")]
    TooManyValues { property: String, count: usize },

    #[error("property {property} requires at least one value")]
    MissingValue { property: String },

    #[error("{name} is a standard property name and cannot be used for an unknown property")]
    StandardName { name: String },

    #[error("property name must not be empty")]
    EmptyName,

    #[error("unknown property types need a name, see Property::new_unknown")]
    UnknownType,
}

/// Why a raw SGF value could not be converted to its typed representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("{raw:?} is not a valid SGF Number")]
    InvalidNumber { raw: String },

    #[error("{raw:?} does not fit into a 64-bit signed integer")]
    NumberOutOfRange { raw: String },

    #[error("{raw:?} is not a valid SGF Real")]
    InvalidReal { raw: String },

    #[error("{raw:?} is not a valid SGF Double (expected 1 or 2)")]
    InvalidDouble { raw: String },

    #[error("{raw:?} is not a valid SGF Color (expected B or W)")]
    InvalidColor { raw: String },

    #[error("{raw:?} is not a valid Go point in SGF notation")]
    InvalidPoint { raw: String },

    #[error("{raw:?} lies outside the {board} board")]
    PointOutsideBoard { raw: String, board: BoardSize },

    #[error("{raw:?} must be a composed value")]
    ExpectedComposedValue { raw: String },

    #[error("{raw:?} given where no value is expected")]
    UnexpectedValue { raw: String },
}
