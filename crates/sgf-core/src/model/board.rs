//! Game types (GM) and board sizes (SZ).

use std::fmt;

use crate::limits::{
    DEFAULT_BOARD_SIZE_CHESS, DEFAULT_BOARD_SIZE_GO, MAX_BOARD_SIZE_GO, MIN_BOARD_SIZE,
};

/// Game types as numbered by the GM property.
///
/// `Unknown` stands for a GM value that is present but either unparseable or
/// outside the table; `None` for "no game type applies".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameType {
    Go,
    Othello,
    Chess,
    GomokuAndRenju,
    NineMensMorris,
    Backgammon,
    ChineseChess,
    Shogi,
    LinesOfAction,
    Ataxx,
    Hex,
    Jungle,
    Neutron,
    PhilosophersFootball,
    Quadrature,
    Trax,
    Tantrix,
    Amazons,
    Octi,
    Gess,
    Twixt,
    Zertz,
    Plateau,
    Yinsh,
    Punct,
    Gobblet,
    Hive,
    Exxit,
    Hnefatal,
    Kuba,
    Tripples,
    Chase,
    TumblingDown,
    Sahara,
    Byte,
    Focus,
    Dvonn,
    Tamsk,
    Gipf,
    Kropki,
    Unknown,
    None,
}

/// Table order equals GM number minus one.
const NUMBERED: [GameType; 40] = [
    GameType::Go,
    GameType::Othello,
    GameType::Chess,
    GameType::GomokuAndRenju,
    GameType::NineMensMorris,
    GameType::Backgammon,
    GameType::ChineseChess,
    GameType::Shogi,
    GameType::LinesOfAction,
    GameType::Ataxx,
    GameType::Hex,
    GameType::Jungle,
    GameType::Neutron,
    GameType::PhilosophersFootball,
    GameType::Quadrature,
    GameType::Trax,
    GameType::Tantrix,
    GameType::Amazons,
    GameType::Octi,
    GameType::Gess,
    GameType::Twixt,
    GameType::Zertz,
    GameType::Plateau,
    GameType::Yinsh,
    GameType::Punct,
    GameType::Gobblet,
    GameType::Hive,
    GameType::Exxit,
    GameType::Hnefatal,
    GameType::Kuba,
    GameType::Tripples,
    GameType::Chase,
    GameType::TumblingDown,
    GameType::Sahara,
    GameType::Byte,
    GameType::Focus,
    GameType::Dvonn,
    GameType::Tamsk,
    GameType::Gipf,
    GameType::Kropki,
];

impl GameType {
    /// Game type assumed when a game tree has no GM property.
    pub const DEFAULT: GameType = GameType::Go;

    /// Creates a GameType from its GM number. Numbers outside the table map
    /// to `Unknown`.
    pub fn from_number(n: i64) -> GameType {
        if n < 1 {
            return GameType::Unknown;
        }
        usize::try_from(n - 1)
            .ok()
            .and_then(|i| NUMBERED.get(i).copied())
            .unwrap_or(GameType::Unknown)
    }

    /// Returns the GM number, or None for `Unknown` and `None`.
    pub fn to_number(self) -> Option<i64> {
        NUMBERED
            .iter()
            .position(|g| *g == self)
            .map(|i| i as i64 + 1)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A board size as carried by SZ: columns by rows.
///
/// Two sentinel values exist besides concrete sizes: [`BoardSize::NONE`]
/// (absent or not applicable) and [`BoardSize::INVALID`] (present but
/// violating SGF constraints).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    pub columns: i64,
    pub rows: i64,
}

impl BoardSize {
    /// No board size applies.
    pub const NONE: BoardSize = BoardSize { columns: -1, rows: -1 };
    /// The board size violates SGF constraints.
    pub const INVALID: BoardSize = BoardSize { columns: -2, rows: -2 };
    /// Default board size for Go.
    pub const DEFAULT_GO: BoardSize = BoardSize {
        columns: DEFAULT_BOARD_SIZE_GO,
        rows: DEFAULT_BOARD_SIZE_GO,
    };
    /// Default board size for Chess.
    pub const DEFAULT_CHESS: BoardSize = BoardSize {
        columns: DEFAULT_BOARD_SIZE_CHESS,
        rows: DEFAULT_BOARD_SIZE_CHESS,
    };

    /// Creates a board size. No validation happens here; see [`Self::is_valid`].
    pub const fn new(columns: i64, rows: i64) -> Self {
        Self { columns, rows }
    }

    /// Creates a square board size.
    pub const fn square(edge: i64) -> Self {
        Self { columns: edge, rows: edge }
    }

    /// Returns the board size an absent SZ implies for the game type.
    pub fn default_for(game_type: GameType) -> BoardSize {
        match game_type {
            GameType::Go => BoardSize::DEFAULT_GO,
            GameType::Chess => BoardSize::DEFAULT_CHESS,
            _ => BoardSize::NONE,
        }
    }

    /// Returns true if columns equal rows.
    pub fn is_square(&self) -> bool {
        self.columns == self.rows
    }

    /// Returns true if this is neither of the sentinels.
    pub fn is_concrete(&self) -> bool {
        *self != BoardSize::NONE && *self != BoardSize::INVALID
    }

    /// Returns true if the size satisfies the constraints of the game type:
    /// at least 1x1 for every game; square and at most 52x52 for Go.
    pub fn is_valid(&self, game_type: GameType) -> bool {
        if self.columns < MIN_BOARD_SIZE || self.rows < MIN_BOARD_SIZE {
            return false;
        }
        if game_type == GameType::Go {
            return self.is_square() && self.columns <= MAX_BOARD_SIZE_GO;
        }
        true
    }

    /// Returns self when valid for the game type, [`BoardSize::INVALID`]
    /// otherwise.
    pub fn validated(self, game_type: GameType) -> BoardSize {
        if self.is_valid(game_type) {
            self
        } else {
            BoardSize::INVALID
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BoardSize::NONE => write!(f, "none"),
            BoardSize::INVALID => write!(f, "invalid"),
            BoardSize { columns, rows } => write!(f, "{}x{}", columns, rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_type_numbers() {
        assert_eq!(GameType::from_number(1), GameType::Go);
        assert_eq!(GameType::from_number(3), GameType::Chess);
        assert_eq!(GameType::from_number(40), GameType::Kropki);
        assert_eq!(GameType::from_number(41), GameType::Unknown);
        assert_eq!(GameType::from_number(0), GameType::Unknown);
        assert_eq!(GameType::from_number(-5), GameType::Unknown);
        assert_eq!(GameType::Go.to_number(), Some(1));
        assert_eq!(GameType::Kropki.to_number(), Some(40));
        assert_eq!(GameType::Unknown.to_number(), None);
        assert_eq!(GameType::None.to_number(), None);
    }

    #[test]
    fn test_go_board_sizes() {
        assert!(!BoardSize::square(60).is_valid(GameType::Go));
        assert!(!BoardSize::new(19, 20).is_valid(GameType::Go));
        assert!(BoardSize::square(19).is_valid(GameType::Go));
        assert_eq!(BoardSize::square(19), BoardSize::DEFAULT_GO);
        assert!(BoardSize::square(52).is_valid(GameType::Go));
        assert!(BoardSize::square(1).is_valid(GameType::Go));
        assert!(!BoardSize::square(0).is_valid(GameType::Go));
    }

    #[test]
    fn test_other_board_sizes() {
        assert!(BoardSize::new(19, 20).is_valid(GameType::Othello));
        assert!(BoardSize::square(60).is_valid(GameType::Hex));
        assert!(!BoardSize::new(0, 8).is_valid(GameType::Chess));
        assert_eq!(BoardSize::new(19, 20).validated(GameType::Go), BoardSize::INVALID);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(BoardSize::default_for(GameType::Go), BoardSize::DEFAULT_GO);
        assert_eq!(BoardSize::default_for(GameType::Chess), BoardSize::DEFAULT_CHESS);
        assert_eq!(BoardSize::default_for(GameType::Shogi), BoardSize::NONE);
        assert!(!BoardSize::NONE.is_valid(GameType::Shogi));
        assert!(!BoardSize::INVALID.is_concrete());
    }
}
