//! Property values.
//!
//! A [`PropertyValue`] is either a [`SingleValue`] or a [`ComposedValue`] of
//! two single values. Single values always keep their normalized raw string;
//! the typed representation is attached when conversion succeeds and a
//! [`ConversionError`] describes why it did not otherwise. Values are
//! immutable once constructed.

use std::fmt;

use crate::codec::coord::{GoPoint, Notation};
use crate::error::ConversionError;
use crate::limits::MAX_PASS_TT_BOARD;
use crate::model::{BoardSize, GameType, GoMove, GoStone};
use crate::util::number::{format_real, parse_number, parse_real, NumberError};
use crate::util::text::{escape, normalize_simple_text, normalize_text, strip_escapes, unescape};

/// The kind of a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// The empty value `[]`.
    None,
    Number,
    Real,
    Double,
    Color,
    SimpleText,
    Text,
    Point,
    Move,
    Stone,
    /// Value of a property the registry does not know.
    Unknown,
}

/// Player color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "B"),
            Color::White => write!(f, "W"),
        }
    }
}

/// SGF Double: normal (`1`) or emphasized (`2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Double {
    Normal,
    Emphasized,
}

/// Context needed to resolve game-specific values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueContext {
    pub game_type: GameType,
    pub board_size: BoardSize,
    /// Color of the stones or moves the owning property carries, if any.
    pub color: Option<Color>,
}

impl ValueContext {
    /// Context without any game information: values stay generic.
    pub const GENERIC: ValueContext = ValueContext {
        game_type: GameType::None,
        board_size: BoardSize::NONE,
        color: None,
    };

    pub fn new(game_type: GameType, board_size: BoardSize) -> Self {
        Self {
            game_type,
            board_size,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Returns true if Go point, move and stone values can be resolved.
    fn resolves_go(&self) -> bool {
        self.game_type == GameType::Go && self.board_size.is_valid(GameType::Go)
    }
}

impl Default for ValueContext {
    fn default() -> Self {
        Self::GENERIC
    }
}

/// The typed representation of a single value.
#[derive(Debug, Clone, PartialEq)]
enum TypedValue {
    None,
    Number(i64),
    Real(f64),
    Double(Double),
    Color(Color),
    SimpleText(String),
    Text(String),
    /// Point, Move and Stone in SGF notation, game-agnostic.
    Position(String),
}

/// Go-specific resolution of Point, Move and Stone values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GoValue {
    Point(GoPoint),
    Move(GoMove),
    Stone(GoStone),
}

/// A single property value.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleValue {
    kind: ValueKind,
    raw: String,
    typed: Option<TypedValue>,
    go: Option<GoValue>,
    error: Option<ConversionError>,
}

impl SingleValue {
    /// Creates a value from a raw SGF string without game context.
    pub fn from_raw(kind: ValueKind, raw: &str) -> SingleValue {
        SingleValue::from_raw_in_context(kind, raw, &ValueContext::GENERIC)
    }

    /// Creates a value from a raw SGF string for a game, without a color.
    pub fn from_raw_for_game(
        kind: ValueKind,
        raw: &str,
        game_type: GameType,
        board_size: BoardSize,
    ) -> SingleValue {
        SingleValue::from_raw_in_context(kind, raw, &ValueContext::new(game_type, board_size))
    }

    /// Creates a value from a raw SGF string. Never fails: if the raw string
    /// cannot be converted, it is kept and [`Self::conversion_error`]
    /// describes the problem.
    pub fn from_raw_in_context(kind: ValueKind, raw: &str, ctx: &ValueContext) -> SingleValue {
        let normalized = match kind {
            ValueKind::SimpleText => normalize_simple_text(raw),
            ValueKind::Text => normalize_text(raw),
            ValueKind::Move
                if ctx.game_type == GameType::Go
                    && ctx.board_size.is_valid(GameType::Go)
                    && ctx.board_size.columns <= MAX_PASS_TT_BOARD
                    && strip_escapes(raw) == "tt" =>
            {
                String::new()
            }
            _ => strip_escapes(raw),
        };

        let mut value = SingleValue {
            kind,
            raw: normalized,
            typed: None,
            go: None,
            error: None,
        };
        match value.convert(ctx) {
            Ok(typed) => value.typed = typed,
            Err(e) => value.error = Some(e),
        }
        value
    }

    fn convert(&mut self, ctx: &ValueContext) -> Result<Option<TypedValue>, ConversionError> {
        let raw = self.raw.as_str();
        let typed = match self.kind {
            ValueKind::None => {
                if !raw.is_empty() {
                    return Err(ConversionError::UnexpectedValue { raw: raw.to_string() });
                }
                TypedValue::None
            }
            ValueKind::Number => TypedValue::Number(parse_number(raw).map_err(|e| match e {
                NumberError::Syntax => ConversionError::InvalidNumber { raw: raw.to_string() },
                NumberError::Overflow => {
                    ConversionError::NumberOutOfRange { raw: raw.to_string() }
                }
            })?),
            ValueKind::Real => TypedValue::Real(
                parse_real(raw).ok_or_else(|| ConversionError::InvalidReal { raw: raw.to_string() })?,
            ),
            ValueKind::Double => match raw {
                "1" => TypedValue::Double(Double::Normal),
                "2" => TypedValue::Double(Double::Emphasized),
                _ => return Err(ConversionError::InvalidDouble { raw: raw.to_string() }),
            },
            ValueKind::Color => match raw {
                "B" => TypedValue::Color(Color::Black),
                "W" => TypedValue::Color(Color::White),
                _ => return Err(ConversionError::InvalidColor { raw: raw.to_string() }),
            },
            ValueKind::SimpleText => TypedValue::SimpleText(unescape(raw)),
            ValueKind::Text => TypedValue::Text(unescape(raw)),
            ValueKind::Point | ValueKind::Move | ValueKind::Stone => {
                if ctx.resolves_go() {
                    self.go = resolve_go(self.kind, raw, ctx)?;
                }
                TypedValue::Position(raw.to_string())
            }
            ValueKind::Unknown => return Ok(None),
        };
        Ok(Some(typed))
    }

    /// A value whose raw text does not fit the property's value shape.
    pub(crate) fn malformed(raw: &str, error: ConversionError) -> SingleValue {
        SingleValue {
            kind: ValueKind::Unknown,
            raw: strip_escapes(raw),
            typed: None,
            go: None,
            error: Some(error),
        }
    }

    /// A Number value.
    pub fn number(n: i64) -> SingleValue {
        SingleValue::from_raw(ValueKind::Number, &n.to_string())
    }

    /// A Real value.
    pub fn real(r: f64) -> SingleValue {
        SingleValue::from_raw(ValueKind::Real, &format_real(r))
    }

    /// A Double value.
    pub fn double(d: Double) -> SingleValue {
        let raw = match d {
            Double::Normal => "1",
            Double::Emphasized => "2",
        };
        SingleValue::from_raw(ValueKind::Double, raw)
    }

    /// A Color value.
    pub fn color(c: Color) -> SingleValue {
        SingleValue::from_raw(ValueKind::Color, &c.to_string())
    }

    /// A SimpleText value from display text; SGF escapes are added.
    pub fn simple_text(text: &str) -> SingleValue {
        SingleValue::from_raw(ValueKind::SimpleText, &escape(text, false))
    }

    /// A Text value from display text; SGF escapes are added.
    pub fn text(text: &str) -> SingleValue {
        SingleValue::from_raw(ValueKind::Text, &escape(text, false))
    }

    /// The empty value.
    pub fn none() -> SingleValue {
        SingleValue::from_raw(ValueKind::None, "")
    }

    /// A Go point value.
    pub fn go_point(point: GoPoint) -> SingleValue {
        SingleValue::go_position(ValueKind::Point, Some(point), None, point.board_size())
    }

    /// A Go stone value.
    pub fn go_stone(stone: GoStone) -> SingleValue {
        SingleValue::go_position(
            ValueKind::Stone,
            Some(stone.point),
            Some(stone.color),
            stone.point.board_size(),
        )
    }

    /// A Go move value. A pass is written as the empty value.
    pub fn go_move(mv: GoMove, board_size: BoardSize) -> SingleValue {
        SingleValue::go_position(ValueKind::Move, mv.point, Some(mv.color), board_size)
    }

    fn go_position(
        kind: ValueKind,
        point: Option<GoPoint>,
        color: Option<Color>,
        board_size: BoardSize,
    ) -> SingleValue {
        let raw = point
            .and_then(|p| p.position(Notation::Sgf))
            .unwrap_or_default();
        let ctx = ValueContext::new(GameType::Go, board_size).with_color(color);
        SingleValue::from_raw_in_context(kind, &raw, &ctx)
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The normalized raw value. Escapes for `\` and `]` are kept.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// Returns true if the raw value was converted to its typed form.
    pub fn has_typed_value(&self) -> bool {
        self.typed.is_some()
    }

    /// Why conversion failed, if it did.
    pub fn conversion_error(&self) -> Option<&ConversionError> {
        self.error.as_ref()
    }

    /// Descriptive conversion-error message, empty if conversion succeeded.
    pub fn conversion_error_message(&self) -> String {
        self.error.as_ref().map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn as_number(&self) -> Option<i64> {
        match self.typed {
            Some(TypedValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self.typed {
            Some(TypedValue::Real(r)) => Some(r),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<Double> {
        match self.typed {
            Some(TypedValue::Double(d)) => Some(d),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self.typed {
            Some(TypedValue::Color(c)) => Some(c),
            _ => None,
        }
    }

    /// Unescaped SimpleText.
    pub fn as_simple_text(&self) -> Option<&str> {
        match &self.typed {
            Some(TypedValue::SimpleText(s)) => Some(s),
            _ => None,
        }
    }

    /// Unescaped Text.
    pub fn as_text(&self) -> Option<&str> {
        match &self.typed {
            Some(TypedValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Either text kind, unescaped.
    pub fn as_any_text(&self) -> Option<&str> {
        self.as_simple_text().or_else(|| self.as_text())
    }

    /// Point, Move or Stone in SGF notation, game-agnostic.
    pub fn as_position(&self) -> Option<&str> {
        match &self.typed {
            Some(TypedValue::Position(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns true if a Point, Move or Stone value was resolved for Go.
    pub fn is_go_value(&self) -> bool {
        self.go.is_some()
    }

    pub fn as_go_point(&self) -> Option<GoPoint> {
        match self.go {
            Some(GoValue::Point(p)) => Some(p),
            Some(GoValue::Stone(s)) => Some(s.point),
            Some(GoValue::Move(m)) => m.point,
            None => None,
        }
    }

    pub fn as_go_stone(&self) -> Option<GoStone> {
        match self.go {
            Some(GoValue::Stone(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_go_move(&self) -> Option<GoMove> {
        match self.go {
            Some(GoValue::Move(m)) => Some(m),
            _ => None,
        }
    }
}

fn resolve_go(kind: ValueKind, raw: &str, ctx: &ValueContext) -> Result<Option<GoValue>, ConversionError> {
    if kind == ValueKind::Move && raw.is_empty() {
        return Ok(ctx.color.map(|c| GoValue::Move(GoMove::pass(c))));
    }
    let point = GoPoint::parse_in(raw, Notation::Sgf, ctx.board_size).ok_or_else(|| {
        if raw.chars().count() == 2 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            ConversionError::PointOutsideBoard {
                raw: raw.to_string(),
                board: ctx.board_size,
            }
        } else {
            ConversionError::InvalidPoint { raw: raw.to_string() }
        }
    })?;
    Ok(match (kind, ctx.color) {
        (ValueKind::Point, _) => Some(GoValue::Point(point)),
        (ValueKind::Stone, Some(c)) => Some(GoValue::Stone(GoStone::new(c, point))),
        (ValueKind::Move, Some(c)) => Some(GoValue::Move(GoMove::play(c, point))),
        // Stones and moves of unknown color resolve to a bare point.
        _ => Some(GoValue::Point(point)),
    })
}

impl fmt::Display for SingleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Two single values written `value1:value2`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedValue {
    first: SingleValue,
    second: SingleValue,
}

impl ComposedValue {
    /// Pairs two values. Which kind pairs a property accepts is checked when
    /// the value is attached to a [`Property`](crate::model::Property).
    pub fn new(first: SingleValue, second: SingleValue) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &SingleValue {
        &self.first
    }

    pub fn second(&self) -> &SingleValue {
        &self.second
    }

    pub fn kinds(&self) -> (ValueKind, ValueKind) {
        (self.first.kind, self.second.kind)
    }

    /// Returns true if both halves converted to their typed form.
    pub fn has_typed_values(&self) -> bool {
        self.first.has_typed_value() && self.second.has_typed_value()
    }
}

impl fmt::Display for ComposedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.second)
    }
}

/// A property value: single or composed.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Single(SingleValue),
    Composed(ComposedValue),
}

impl PropertyValue {
    pub fn is_composed(&self) -> bool {
        matches!(self, PropertyValue::Composed(_))
    }

    pub fn as_single(&self) -> Option<&SingleValue> {
        match self {
            PropertyValue::Single(v) => Some(v),
            PropertyValue::Composed(_) => None,
        }
    }

    pub fn as_composed(&self) -> Option<&ComposedValue> {
        match self {
            PropertyValue::Composed(v) => Some(v),
            PropertyValue::Single(_) => None,
        }
    }

    /// Returns true if every contained single value converted.
    pub fn has_typed_value(&self) -> bool {
        match self {
            PropertyValue::Single(v) => v.has_typed_value(),
            PropertyValue::Composed(v) => v.has_typed_values(),
        }
    }
}

impl From<SingleValue> for PropertyValue {
    fn from(v: SingleValue) -> Self {
        PropertyValue::Single(v)
    }
}

impl From<ComposedValue> for PropertyValue {
    fn from(v: ComposedValue) -> Self {
        PropertyValue::Composed(v)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Single(v) => v.fmt(f),
            PropertyValue::Composed(v) => v.fmt(f),
        }
    }
}
