//! RE values: game results.
//!
//! ```text
//! "0" | "Draw"                  draw
//! "B+" | "W+"                   win, no score given
//! "B+" Real | "W+" Real         win by score
//! "B+R" | "B+Resign" | ...      win by resignation
//! "B+T" | "B+Time" | ...        win on time
//! "B+F" | "B+Forfeit" | ...     win by forfeit
//! "Void"                        no result / suspended
//! "?"                           unknown result
//! ```

use crate::util::number::{format_real, parse_real};

/// Outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResultType {
    BlackWin,
    WhiteWin,
    Draw,
    NoResult,
    UnknownResult,
}

/// How a game was won. Meaningful only for `BlackWin` and `WhiteWin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinType {
    WinWithScore,
    WinWithoutScore,
    WinByResignation,
    WinByTime,
    WinByForfeit,
}

/// A decomposed RE value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameResult {
    pub result_type: GameResultType,
    pub win_type: WinType,
    /// Meaningful only for `WinWithScore`.
    pub score: f64,
    pub is_valid: bool,
}

impl Default for GameResult {
    fn default() -> Self {
        Self {
            result_type: GameResultType::UnknownResult,
            win_type: WinType::WinWithoutScore,
            score: 0.0,
            is_valid: false,
        }
    }
}

impl GameResult {
    /// A valid win record.
    pub fn win(result_type: GameResultType, win_type: WinType, score: f64) -> Self {
        Self {
            result_type,
            win_type,
            score,
            is_valid: true,
        }
    }

    /// A valid record for an outcome that is not a win.
    pub fn outcome(result_type: GameResultType) -> Self {
        Self {
            result_type,
            is_valid: true,
            ..Self::default()
        }
    }

    /// Returns true for `BlackWin` and `WhiteWin`.
    pub fn is_win(&self) -> bool {
        matches!(self.result_type, GameResultType::BlackWin | GameResultType::WhiteWin)
    }
}

/// Decomposes a raw RE value. Never fails: an unrecognized value yields a
/// record with `is_valid == false`.
pub fn decompose_game_result(raw: &str) -> GameResult {
    match raw {
        "0" | "Draw" => return GameResult::outcome(GameResultType::Draw),
        "Void" => return GameResult::outcome(GameResultType::NoResult),
        "?" => return GameResult::outcome(GameResultType::UnknownResult),
        _ => {}
    }

    let (result_type, rest) = if let Some(rest) = raw.strip_prefix("B+") {
        (GameResultType::BlackWin, rest)
    } else if let Some(rest) = raw.strip_prefix("W+") {
        (GameResultType::WhiteWin, rest)
    } else {
        return GameResult::default();
    };

    match rest {
        "" => GameResult::win(result_type, WinType::WinWithoutScore, 0.0),
        "R" | "Resign" => GameResult::win(result_type, WinType::WinByResignation, 0.0),
        "T" | "Time" => GameResult::win(result_type, WinType::WinByTime, 0.0),
        "F" | "Forfeit" => GameResult::win(result_type, WinType::WinByForfeit, 0.0),
        // The winner's color gives the direction; a signed score is invalid.
        score if score.starts_with(['+', '-']) => GameResult::default(),
        score => match parse_real(score) {
            Some(s) if s >= 0.0 => GameResult::win(result_type, WinType::WinWithScore, s),
            _ => GameResult::default(),
        },
    }
}

/// Composes a raw RE value. An invalid record yields the empty string.
pub fn compose_game_result(result: &GameResult) -> String {
    if !result.is_valid {
        return String::new();
    }
    let winner = match result.result_type {
        GameResultType::Draw => return "Draw".to_string(),
        GameResultType::NoResult => return "Void".to_string(),
        GameResultType::UnknownResult => return "?".to_string(),
        GameResultType::BlackWin => "B+",
        GameResultType::WhiteWin => "W+",
    };
    match result.win_type {
        WinType::WinWithScore => {
            if !result.score.is_finite() || result.score.is_sign_negative() {
                return String::new();
            }
            format!("{}{}", winner, format_real(result.score))
        }
        WinType::WinWithoutScore => winner.to_string(),
        WinType::WinByResignation => format!("{}R", winner),
        WinType::WinByTime => format!("{}T", winner),
        WinType::WinByForfeit => format!("{}F", winner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_wins() {
        let r = decompose_game_result("B+R");
        assert!(r.is_valid);
        assert_eq!(r.result_type, GameResultType::BlackWin);
        assert_eq!(r.win_type, WinType::WinByResignation);

        let r = decompose_game_result("W+6.5");
        assert_eq!(r.result_type, GameResultType::WhiteWin);
        assert_eq!(r.win_type, WinType::WinWithScore);
        assert_eq!(r.score, 6.5);

        assert_eq!(decompose_game_result("W+Time").win_type, WinType::WinByTime);
        assert_eq!(decompose_game_result("B+Forfeit").win_type, WinType::WinByForfeit);
        assert_eq!(decompose_game_result("B+").win_type, WinType::WinWithoutScore);
    }

    #[test]
    fn test_decompose_other_outcomes() {
        assert_eq!(decompose_game_result("0").result_type, GameResultType::Draw);
        assert_eq!(decompose_game_result("Draw").result_type, GameResultType::Draw);
        assert_eq!(decompose_game_result("Void").result_type, GameResultType::NoResult);
        assert_eq!(
            decompose_game_result("?").result_type,
            GameResultType::UnknownResult
        );
        assert!(decompose_game_result("?").is_valid);
    }

    #[test]
    fn test_decompose_invalid() {
        for raw in ["", "B", "B+X", "B+-3", "b+R", "W+3.", "Jigo", "B+R "] {
            assert!(!decompose_game_result(raw).is_valid, "{:?} should be invalid", raw);
        }
    }

    #[test]
    fn test_decompose_rejects_signed_score() {
        for raw in ["B+-0", "W+-0.5", "B++5", "W++0"] {
            assert!(!decompose_game_result(raw).is_valid, "{:?} should be invalid", raw);
        }
        let negative_zero = GameResult::win(GameResultType::BlackWin, WinType::WinWithScore, -0.0);
        assert_eq!(compose_game_result(&negative_zero), "");
        assert!(decompose_game_result("B+0").is_valid);
    }

    #[test]
    fn test_compose() {
        let cases = [
            (GameResult::win(GameResultType::BlackWin, WinType::WinByResignation, 0.0), "B+R"),
            (GameResult::win(GameResultType::WhiteWin, WinType::WinWithScore, 0.5), "W+0.5"),
            (GameResult::win(GameResultType::WhiteWin, WinType::WinWithScore, 12.0), "W+12"),
            (GameResult::win(GameResultType::BlackWin, WinType::WinByTime, 0.0), "B+T"),
            (GameResult::win(GameResultType::BlackWin, WinType::WinByForfeit, 0.0), "B+F"),
            (GameResult::win(GameResultType::WhiteWin, WinType::WinWithoutScore, 0.0), "W+"),
            (GameResult::outcome(GameResultType::Draw), "Draw"),
            (GameResult::outcome(GameResultType::NoResult), "Void"),
            (GameResult::outcome(GameResultType::UnknownResult), "?"),
        ];
        for (result, expected) in cases {
            assert_eq!(compose_game_result(&result), expected);
            assert_eq!(decompose_game_result(expected), result);
        }
    }

    #[test]
    fn test_compose_invalid() {
        assert_eq!(compose_game_result(&GameResult::default()), "");
        let negative = GameResult::win(GameResultType::BlackWin, WinType::WinWithScore, -1.0);
        assert_eq!(compose_game_result(&negative), "");
    }
}
