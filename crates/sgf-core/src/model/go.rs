//! Go stones and moves.

use std::fmt;

use crate::codec::coord::{GoPoint, Notation};
use crate::model::Color;

/// A stone of a given color on a point, as carried by AB and AW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoStone {
    pub color: Color,
    pub point: GoPoint,
}

impl GoStone {
    pub fn new(color: Color, point: GoPoint) -> Self {
        Self { color, point }
    }
}

/// A move of a given color, as carried by B and W. A move without a point
/// is a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoMove {
    pub color: Color,
    pub point: Option<GoPoint>,
}

impl GoMove {
    /// A move placing a stone.
    pub fn play(color: Color, point: GoPoint) -> Self {
        Self {
            color,
            point: Some(point),
        }
    }

    /// A pass.
    pub fn pass(color: Color) -> Self {
        Self { color, point: None }
    }

    pub fn is_pass(&self) -> bool {
        self.point.is_none()
    }

    /// The stone this move places, or None for a pass.
    pub fn stone(&self) -> Option<GoStone> {
        self.point.map(|p| GoStone::new(self.color, p))
    }

    /// Formats the move's point, or "pass".
    pub fn position(&self, notation: Notation) -> Option<String> {
        match self.point {
            Some(p) => p.position(notation),
            None => Some("pass".to_string()),
        }
    }
}

impl fmt::Display for GoMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.point {
            Some(p) => write!(f, "{} {}", self.color, p),
            None => write!(f, "{} pass", self.color),
        }
    }
}
