//! Board-size and notation limits.
//!
//! These constants are the only tunables of the crate. They encode the
//! constraints SGF places on board sizes and on the three Go coordinate
//! notations.

/// Smallest board edge for any game type.
pub const MIN_BOARD_SIZE: i64 = 1;

/// Largest board edge for Go (SGF letters `a`-`z` then `A`-`Z`).
pub const MAX_BOARD_SIZE_GO: i64 = 52;

/// Number of positions per axis representable in SGF notation.
pub const MAX_SGF_AXIS: i64 = 52;

/// Number of positions per axis representable in Figure notation.
///
/// Figure notation is unbounded in principle; it is capped at the SGF limit.
pub const MAX_FIGURE_AXIS: i64 = 52;

/// Number of positions per axis representable in Hybrid notation
/// (letters `A`-`Z` without `I`).
pub const MAX_HYBRID_AXIS: i64 = 25;

/// Largest board on which the legacy `tt` move denotes a pass.
pub const MAX_PASS_TT_BOARD: i64 = 19;

/// Default board edge for Go when SZ is absent.
pub const DEFAULT_BOARD_SIZE_GO: i64 = 19;

/// Default board edge for Chess when SZ is absent.
pub const DEFAULT_BOARD_SIZE_CHESS: i64 = 8;

/// Smallest year a DT value may carry.
pub const MIN_YEAR: i32 = 1;

/// Largest year a DT value may carry (four digits).
pub const MAX_YEAR: i32 = 9999;
