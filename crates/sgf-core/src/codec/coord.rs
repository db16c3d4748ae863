//! Go coordinate notations.
//!
//! A board position is normalized to 1-based `(x, y)` with the origin in the
//! upper-left corner. Three textual notations map onto it:
//!
//! | Notation | Example | Origin | x axis | y axis |
//! |----------|---------|--------|--------|--------|
//! | SGF      | `fq`    | upper-left | `a`-`z`, `A`-`Z` | `a`-`z`, `A`-`Z` |
//! | Figure   | `6-17`  | upper-left | 1-based number | 1-based number |
//! | Hybrid   | `F3`    | lower-left | `A`-`Z` without `I` | 1-based number |
//!
//! Hybrid is the notation GTP engines and most Go software display. It
//! cannot represent boards with more than 25 columns or rows.

use std::fmt;

use crate::limits::{MAX_FIGURE_AXIS, MAX_HYBRID_AXIS, MAX_SGF_AXIS};
use crate::model::BoardSize;

/// A textual coordinate notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    Sgf,
    Figure,
    Hybrid,
}

impl Notation {
    /// All notations, in the order [`GoPoint::parse`] tries them.
    pub const ALL: [Notation; 3] = [Notation::Sgf, Notation::Figure, Notation::Hybrid];

    fn max_axis(self) -> i64 {
        match self {
            Notation::Sgf => MAX_SGF_AXIS,
            Notation::Figure => MAX_FIGURE_AXIS,
            Notation::Hybrid => MAX_HYBRID_AXIS,
        }
    }
}

/// Returns true if the board can carry coordinates at all.
fn is_usable_board(board: BoardSize) -> bool {
    (1..=MAX_SGF_AXIS).contains(&board.columns) && (1..=MAX_SGF_AXIS).contains(&board.rows)
}

/// Returns true if `(x, y)` lies on the board.
fn on_board(x: i64, y: i64, board: BoardSize) -> bool {
    is_usable_board(board) && (1..=board.columns).contains(&x) && (1..=board.rows).contains(&y)
}

/// Returns true if every position of the board is representable in the
/// notation.
pub fn board_fits_notation(notation: Notation, board: BoardSize) -> bool {
    is_usable_board(board)
        && board.columns <= notation.max_axis()
        && board.rows <= notation.max_axis()
}

fn sgf_axis_value(c: char) -> Option<i64> {
    match c {
        'a'..='z' => Some(c as i64 - 'a' as i64 + 1),
        'A'..='Z' => Some(c as i64 - 'A' as i64 + 27),
        _ => None,
    }
}

fn sgf_axis_char(v: i64) -> Option<char> {
    match v {
        1..=26 => char::from_u32(('a' as i64 + v - 1) as u32),
        27..=52 => char::from_u32(('A' as i64 + v - 27) as u32),
        _ => None,
    }
}

fn hybrid_column_value(c: char) -> Option<i64> {
    let upper = c.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() || upper == 'I' {
        return None;
    }
    let mut v = upper as i64 - 'A' as i64 + 1;
    // There is no 'I' column.
    if upper > 'I' {
        v -= 1;
    }
    Some(v)
}

fn hybrid_column_char(v: i64) -> Option<char> {
    if !(1..=MAX_HYBRID_AXIS).contains(&v) {
        return None;
    }
    let mut c = 'A' as i64 + v - 1;
    if c >= 'I' as i64 {
        c += 1;
    }
    char::from_u32(c as u32)
}

/// Parses a strictly positive decimal without sign or leading zeros.
fn parse_axis_number(s: &str) -> Option<i64> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) || s.starts_with('0')
    {
        return None;
    }
    s.parse().ok()
}

/// Decodes a position in the given notation to normalized `(x, y)`.
///
/// Returns None if the text is malformed, the board cannot carry
/// coordinates, or the position lies outside the board.
pub fn decode_position(text: &str, notation: Notation, board: BoardSize) -> Option<(i64, i64)> {
    if notation == Notation::Hybrid && !board_fits_notation(notation, board) {
        return None;
    }
    let (x, y) = match notation {
        Notation::Sgf => {
            let mut chars = text.chars();
            let x = sgf_axis_value(chars.next()?)?;
            let y = sgf_axis_value(chars.next()?)?;
            if chars.next().is_some() {
                return None;
            }
            (x, y)
        }
        Notation::Figure => {
            let (xs, ys) = text.split_once('-')?;
            (parse_axis_number(xs)?, parse_axis_number(ys)?)
        }
        Notation::Hybrid => {
            let mut chars = text.chars();
            let x = hybrid_column_value(chars.next()?)?;
            let row = parse_axis_number(chars.as_str())?;
            if row > MAX_HYBRID_AXIS || row > board.rows {
                return None;
            }
            (x, board.rows - row + 1)
        }
    };
    if on_board(x, y, board) { Some((x, y)) } else { None }
}

/// Encodes normalized `(x, y)` in the given notation.
///
/// Returns None if the position lies outside the board or the notation
/// cannot represent it.
pub fn encode_position(x: i64, y: i64, notation: Notation, board: BoardSize) -> Option<String> {
    let xs = encode_x(x, notation, board)?;
    let ys = encode_y(y, notation, board)?;
    Some(match notation {
        Notation::Figure => format!("{}-{}", xs, ys),
        Notation::Sgf | Notation::Hybrid => format!("{}{}", xs, ys),
    })
}

fn encode_x(x: i64, notation: Notation, board: BoardSize) -> Option<String> {
    if !is_usable_board(board) || !(1..=board.columns).contains(&x) {
        return None;
    }
    match notation {
        Notation::Sgf => sgf_axis_char(x).map(String::from),
        Notation::Figure => Some(x.to_string()),
        Notation::Hybrid => {
            if !board_fits_notation(notation, board) {
                return None;
            }
            hybrid_column_char(x).map(String::from)
        }
    }
}

fn encode_y(y: i64, notation: Notation, board: BoardSize) -> Option<String> {
    if !is_usable_board(board) || !(1..=board.rows).contains(&y) {
        return None;
    }
    match notation {
        Notation::Sgf => sgf_axis_char(y).map(String::from),
        Notation::Figure => Some(y.to_string()),
        Notation::Hybrid => {
            if !board_fits_notation(notation, board) {
                return None;
            }
            Some((board.rows - y + 1).to_string())
        }
    }
}

/// A position on a Go board of a known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoPoint {
    x: i64,
    y: i64,
    board_size: BoardSize,
}

impl GoPoint {
    /// Creates a point from normalized 1-based coordinates, origin upper-left.
    pub fn new(x: i64, y: i64, board_size: BoardSize) -> Option<GoPoint> {
        if on_board(x, y, board_size) {
            Some(GoPoint { x, y, board_size })
        } else {
            None
        }
    }

    /// Parses a point in a specific notation.
    pub fn parse_in(text: &str, notation: Notation, board_size: BoardSize) -> Option<GoPoint> {
        decode_position(text, notation, board_size).map(|(x, y)| GoPoint { x, y, board_size })
    }

    /// Parses a point in whichever notation matches. The notations do not
    /// overlap syntactically, so at most one can succeed.
    pub fn parse(text: &str, board_size: BoardSize) -> Option<GoPoint> {
        Notation::ALL
            .iter()
            .find_map(|n| GoPoint::parse_in(text, *n, board_size))
    }

    /// Normalized x, 1-based from the left edge.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Normalized y, 1-based from the top edge.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// The board this point lies on.
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Returns true if the point can be written in the notation.
    pub fn has_position_in_notation(&self, notation: Notation) -> bool {
        board_fits_notation(notation, self.board_size)
    }

    /// Formats the point, or None if the notation cannot represent it.
    pub fn position(&self, notation: Notation) -> Option<String> {
        encode_position(self.x, self.y, notation, self.board_size)
    }

    /// Formats only the x compound.
    pub fn x_position(&self, notation: Notation) -> Option<String> {
        encode_x(self.x, notation, self.board_size)
    }

    /// Formats only the y compound.
    pub fn y_position(&self, notation: Notation) -> Option<String> {
        encode_y(self.y, notation, self.board_size)
    }
}

impl fmt::Display for GoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position(Notation::Sgf) {
            Some(p) => write!(f, "{}", p),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B19: BoardSize = BoardSize::DEFAULT_GO;

    #[test]
    fn test_corner_in_all_notations() {
        let sgf = GoPoint::parse_in("aa", Notation::Sgf, B19).unwrap();
        let fig = GoPoint::parse_in("1-1", Notation::Figure, B19).unwrap();
        let hyb = GoPoint::parse_in("A19", Notation::Hybrid, B19).unwrap();
        assert_eq!(sgf, fig);
        assert_eq!(sgf, hyb);
        assert_eq!((sgf.x(), sgf.y()), (1, 1));
        assert_eq!(sgf.position(Notation::Hybrid).as_deref(), Some("A19"));
    }

    #[test]
    fn test_lower_left_origin_for_hybrid() {
        let p = GoPoint::parse_in("as", Notation::Sgf, B19).unwrap();
        assert_eq!(p.position(Notation::Hybrid).as_deref(), Some("A1"));
        assert_eq!(p.position(Notation::Figure).as_deref(), Some("1-19"));

        let fq = GoPoint::parse_in("fq", Notation::Sgf, B19).unwrap();
        assert_eq!((fq.x(), fq.y()), (6, 17));
        assert_eq!(fq.position(Notation::Figure).as_deref(), Some("6-17"));
        assert_eq!(fq.position(Notation::Hybrid).as_deref(), Some("F3"));
    }

    #[test]
    fn test_hybrid_skips_i() {
        let p = GoPoint::new(9, 19, B19).unwrap();
        assert_eq!(p.position(Notation::Hybrid).as_deref(), Some("J1"));
        assert_eq!(p.x_position(Notation::Hybrid).as_deref(), Some("J"));
        assert_eq!(p.y_position(Notation::Hybrid).as_deref(), Some("1"));
        assert!(GoPoint::parse_in("I5", Notation::Hybrid, B19).is_none());
        assert_eq!(
            GoPoint::parse_in("h1", Notation::Hybrid, B19).map(|p| p.x()),
            Some(8)
        );
    }

    #[test]
    fn test_upper_case_sgf_letters() {
        let board = BoardSize::square(52);
        let p = GoPoint::parse_in("AZ", Notation::Sgf, board).unwrap();
        assert_eq!((p.x(), p.y()), (27, 52));
        assert_eq!(p.position(Notation::Sgf).as_deref(), Some("AZ"));
        assert!(!p.has_position_in_notation(Notation::Hybrid));
        assert_eq!(p.position(Notation::Hybrid), None);
        assert_eq!(p.position(Notation::Figure).as_deref(), Some("27-52"));
    }

    #[test]
    fn test_outside_board() {
        let board = BoardSize::square(9);
        assert!(GoPoint::parse_in("jj", Notation::Sgf, board).is_none());
        assert!(GoPoint::parse_in("10-1", Notation::Figure, board).is_none());
        assert!(GoPoint::parse_in("0-1", Notation::Figure, board).is_none());
        assert!(GoPoint::parse_in("A10", Notation::Hybrid, board).is_none());
        assert!(GoPoint::new(0, 1, board).is_none());
        assert!(GoPoint::new(1, 1, BoardSize::NONE).is_none());
        assert!(GoPoint::new(1, 1, BoardSize::INVALID).is_none());
    }

    #[test]
    fn test_malformed_text() {
        assert!(GoPoint::parse_in("a", Notation::Sgf, B19).is_none());
        assert!(GoPoint::parse_in("abc", Notation::Sgf, B19).is_none());
        assert!(GoPoint::parse_in("a1", Notation::Sgf, B19).is_none());
        assert!(GoPoint::parse_in("1-", Notation::Figure, B19).is_none());
        assert!(GoPoint::parse_in("01-1", Notation::Figure, B19).is_none());
        assert!(GoPoint::parse_in("A", Notation::Hybrid, B19).is_none());
        assert!(GoPoint::parse_in("A01", Notation::Hybrid, B19).is_none());
    }

    #[test]
    fn test_auto_detect() {
        assert_eq!(GoPoint::parse("dd", B19), GoPoint::new(4, 4, B19));
        assert_eq!(GoPoint::parse("4-4", B19), GoPoint::new(4, 4, B19));
        assert_eq!(GoPoint::parse("D16", B19), GoPoint::new(4, 4, B19));
        assert_eq!(GoPoint::parse("zz", B19), None);
    }

    #[test]
    fn test_hybrid_limit_on_large_boards() {
        let board = BoardSize::square(26);
        let p = GoPoint::new(1, 1, board).unwrap();
        assert!(p.has_position_in_notation(Notation::Sgf));
        assert!(p.has_position_in_notation(Notation::Figure));
        assert!(!p.has_position_in_notation(Notation::Hybrid));
        assert!(GoPoint::new(1, 1, BoardSize::square(25))
            .unwrap()
            .has_position_in_notation(Notation::Hybrid));
    }
}
