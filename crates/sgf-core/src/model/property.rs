//! Properties: a typed, named list of values attached to a node.

use std::fmt;

use crate::error::{ConversionError, PropertyError};
use crate::model::{
    BoardSize, Color, ComposedValue, GameType, Multiplicity, PropertyCategory, PropertyType,
    PropertyValue, SingleValue, ValueContext, ValueKind,
};
use crate::util::text::find_composed_separator;

/// A property of a node.
///
/// SGF requires at least one value per property; "no value" (`KO[]`, an
/// empty `DD[]`) is stored as an empty value list.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    property_type: PropertyType,
    name: String,
    values: Vec<PropertyValue>,
}

impl Property {
    /// Builds a property from raw SGF value strings, the way a parser sees
    /// them. Never fails on data: values that do not convert keep their raw
    /// string and a conversion error.
    pub fn from_raw<S: AsRef<str>>(
        name: &str,
        raw_values: &[S],
        game_type: GameType,
        board_size: BoardSize,
    ) -> Property {
        let property_type = PropertyType::from_name(name);
        let ctx = ValueContext::new(game_type, board_size).with_color(implied_color(property_type));

        let values = match raw_values {
            [only] if only.as_ref().is_empty()
                && property_type != PropertyType::Unknown
                && property_type.value_descriptor().accepts_none() =>
            {
                Vec::new()
            }
            _ => raw_values
                .iter()
                .map(|raw| raw_to_value(property_type, raw.as_ref(), &ctx))
                .collect(),
        };

        Property {
            property_type,
            name: name.to_string(),
            values,
        }
    }

    /// Builds a standard property from already constructed values.
    ///
    /// A lone [`ValueKind::None`] value is accepted by properties that allow
    /// an empty value and becomes the empty value list.
    pub fn new(property_type: PropertyType, values: Vec<PropertyValue>) -> Result<Property, PropertyError> {
        let name = property_type.name().ok_or(PropertyError::UnknownType)?;
        let descriptor = property_type.value_descriptor();

        let mut kept = Vec::with_capacity(values.len());
        for value in values {
            let keep = match &value {
                PropertyValue::Single(v) if v.kind() == ValueKind::None => {
                    if !descriptor.accepts_none() {
                        return Err(PropertyError::IllegalSingleValue {
                            property: name.to_string(),
                            kind: ValueKind::None,
                        });
                    }
                    false
                }
                PropertyValue::Single(v) => {
                    if !descriptor.accepts_single(v.kind()) {
                        return Err(PropertyError::IllegalSingleValue {
                            property: name.to_string(),
                            kind: v.kind(),
                        });
                    }
                    true
                }
                PropertyValue::Composed(v) => {
                    let (first, second) = v.kinds();
                    if !descriptor.accepts_composed(first, second) {
                        return Err(PropertyError::IllegalComposition {
                            property: name.to_string(),
                            first,
                            second,
                        });
                    }
                    true
                }
            };
            if keep {
                kept.push(value);
            }
        }

        if kept.is_empty() && !descriptor.accepts_none() {
            return Err(PropertyError::MissingValue {
                property: name.to_string(),
            });
        }
        if kept.len() > 1 && descriptor.multiplicity == Multiplicity::One {
            return Err(PropertyError::TooManyValues {
                property: name.to_string(),
                count: kept.len(),
            });
        }

        Ok(Property {
            property_type,
            name: name.to_string(),
            values: kept,
        })
    }

    /// Builds a property the registry does not know. Any values are accepted.
    pub fn new_unknown(name: &str, values: Vec<PropertyValue>) -> Result<Property, PropertyError> {
        if name.is_empty() {
            return Err(PropertyError::EmptyName);
        }
        if PropertyType::from_name(name) != PropertyType::Unknown {
            return Err(PropertyError::StandardName {
                name: name.to_string(),
            });
        }
        Ok(Property {
            property_type: PropertyType::Unknown,
            name: name.to_string(),
            values,
        })
    }

    /// Shorthand for a property with one single value.
    pub fn single(property_type: PropertyType, value: SingleValue) -> Result<Property, PropertyError> {
        Property::new(property_type, vec![PropertyValue::Single(value)])
    }

    /// A GM property for the game type. Fails for `Unknown` and `None`, which
    /// have no number.
    pub fn for_game_type(game_type: GameType) -> Result<Property, PropertyError> {
        let number = game_type.to_number().ok_or(PropertyError::MissingValue {
            property: "GM".to_string(),
        })?;
        Property::single(PropertyType::Game, SingleValue::number(number))
    }

    /// An SZ property for the board size; square boards use the short form.
    pub fn for_board_size(size: BoardSize) -> Result<Property, PropertyError> {
        if !size.is_concrete() {
            return Err(PropertyError::MissingValue {
                property: "SZ".to_string(),
            });
        }
        let value = if size.is_square() {
            PropertyValue::Single(SingleValue::number(size.columns))
        } else {
            PropertyValue::Composed(ComposedValue::new(
                SingleValue::number(size.columns),
                SingleValue::number(size.rows),
            ))
        };
        Property::new(PropertyType::Size, vec![value])
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// The two-letter name, or the name an unknown property was read with.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> PropertyCategory {
        self.property_type.category()
    }

    pub fn is_unknown(&self) -> bool {
        self.property_type == PropertyType::Unknown
    }

    /// The values. Empty when the property has "no value".
    pub fn values(&self) -> &[PropertyValue] {
        &self.values
    }

    /// The first value if it is a single value.
    pub fn first_single(&self) -> Option<&SingleValue> {
        self.values.first().and_then(PropertyValue::as_single)
    }

    /// Returns true if every value converted to its typed form.
    pub fn has_typed_values(&self) -> bool {
        self.values.iter().all(PropertyValue::has_typed_value)
    }

    /// GM reinterpreted as a game type. None for every other property;
    /// `GameType::Unknown` if the value does not parse.
    pub fn as_game_type(&self) -> Option<GameType> {
        if self.property_type != PropertyType::Game {
            return None;
        }
        let number = self.first_single().and_then(SingleValue::as_number);
        Some(number.map_or(GameType::Unknown, GameType::from_number))
    }

    /// SZ reinterpreted as a board size for the game type. None for every
    /// other property; `BoardSize::INVALID` if the value does not parse or
    /// violates the game's constraints.
    pub fn as_board_size(&self, game_type: GameType) -> Option<BoardSize> {
        if self.property_type != PropertyType::Size {
            return None;
        }
        let size = match self.values.first() {
            Some(PropertyValue::Single(v)) => v.as_number().map(BoardSize::square),
            Some(PropertyValue::Composed(v)) => v
                .first()
                .as_number()
                .zip(v.second().as_number())
                .map(|(columns, rows)| BoardSize::new(columns, rows)),
            None => None,
        };
        Some(size.map_or(BoardSize::INVALID, |s| s.validated(game_type)))
    }
}

/// The game type a GM property implies; an absent GM means Go.
pub fn game_type_of(gm: Option<&Property>) -> GameType {
    gm.and_then(Property::as_game_type).unwrap_or(GameType::DEFAULT)
}

/// The board size an SZ property implies for a game type; an absent SZ
/// means the game's default.
pub fn board_size_of(sz: Option<&Property>, game_type: GameType) -> BoardSize {
    sz.and_then(|p| p.as_board_size(game_type))
        .unwrap_or_else(|| BoardSize::default_for(game_type))
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.values.is_empty() {
            return write!(f, "[]");
        }
        for value in &self.values {
            write!(f, "[{}]", value)?;
        }
        Ok(())
    }
}

/// The stone color B, W, AB and AW carry.
fn implied_color(property_type: PropertyType) -> Option<Color> {
    match property_type {
        PropertyType::BlackMove | PropertyType::AddBlack => Some(Color::Black),
        PropertyType::WhiteMove | PropertyType::AddWhite => Some(Color::White),
        _ => None,
    }
}

fn raw_to_value(property_type: PropertyType, raw: &str, ctx: &ValueContext) -> PropertyValue {
    if property_type == PropertyType::Unknown {
        return SingleValue::from_raw(ValueKind::Unknown, raw).into();
    }
    let descriptor = property_type.value_descriptor();

    if let (Some(at), Some((first, second))) =
        (find_composed_separator(raw), descriptor.composed_kinds())
    {
        return ComposedValue::new(
            SingleValue::from_raw_in_context(first, &raw[..at], ctx),
            SingleValue::from_raw_in_context(second, &raw[at + 1..], ctx),
        )
        .into();
    }

    match descriptor.single_kind() {
        Some(kind) => SingleValue::from_raw_in_context(kind, raw, ctx).into(),
        None if descriptor.composed_kinds().is_some() => SingleValue::malformed(
            raw,
            ConversionError::ExpectedComposedValue { raw: raw.to_string() },
        )
        .into(),
        None => SingleValue::from_raw(ValueKind::None, raw).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{GoPoint, Notation};
    use crate::model::GoStone;

    fn raw(name: &str, values: &[&str]) -> Property {
        Property::from_raw(name, values, GameType::Go, BoardSize::DEFAULT_GO)
    }

    #[test]
    fn test_from_raw_single() {
        let p = raw("C", &["nice \\] move"]);
        assert_eq!(p.property_type(), PropertyType::Comment);
        assert_eq!(p.values().len(), 1);
        assert_eq!(p.first_single().unwrap().as_text(), Some("nice ] move"));
    }

    #[test]
    fn test_from_raw_empty_value() {
        assert!(raw("KO", &[""]).values().is_empty());
        assert!(raw("DD", &[""]).values().is_empty());
        // B[] is a pass, not "no value".
        let pass = raw("B", &[""]);
        assert_eq!(pass.values().len(), 1);
        assert!(pass.first_single().unwrap().as_go_move().unwrap().is_pass());
    }

    #[test]
    fn test_from_raw_composed() {
        let p = raw("LB", &["dd:A", "pd:x\\:y"]);
        assert_eq!(p.values().len(), 2);
        let lb = p.values()[1].as_composed().unwrap();
        assert_eq!(lb.first().raw_value(), "pd");
        assert_eq!(lb.second().as_simple_text(), Some("x:y"));
        assert!(lb.first().as_go_point().is_some());

        let bad = raw("LB", &["dd"]);
        let v = bad.first_single().unwrap();
        assert!(!v.has_typed_value());
        assert!(matches!(
            v.conversion_error(),
            Some(ConversionError::ExpectedComposedValue { .. })
        ));
    }

    #[test]
    fn test_from_raw_stones_have_color() {
        let p = raw("AW", &["aa", "bb"]);
        let stone = p.values()[1].as_single().unwrap().as_go_stone().unwrap();
        assert_eq!(stone.color, Color::White);
        assert_eq!((stone.point.x(), stone.point.y()), (2, 2));
    }

    #[test]
    fn test_from_raw_unknown() {
        let p = raw("XX", &["foo:bar"]);
        assert!(p.is_unknown());
        assert_eq!(p.name(), "XX");
        assert_eq!(p.first_single().unwrap().raw_value(), "foo:bar");
        assert_eq!(p.category(), PropertyCategory::Unknown);
    }

    #[test]
    fn test_new_checks_values() {
        assert!(Property::single(PropertyType::Komi, SingleValue::real(6.5)).is_ok());
        assert!(matches!(
            Property::single(PropertyType::Komi, SingleValue::number(6)),
            Err(PropertyError::IllegalSingleValue { .. })
        ));
        assert!(matches!(
            Property::new(
                PropertyType::Komi,
                vec![SingleValue::real(1.0).into(), SingleValue::real(2.0).into()]
            ),
            Err(PropertyError::TooManyValues { count: 2, .. })
        ));
        assert!(matches!(
            Property::new(PropertyType::Comment, vec![]),
            Err(PropertyError::MissingValue { .. })
        ));
        assert!(matches!(
            Property::new(
                PropertyType::Label,
                vec![ComposedValue::new(SingleValue::number(1), SingleValue::number(2)).into()]
            ),
            Err(PropertyError::IllegalComposition { .. })
        ));
        let ko = Property::single(PropertyType::Ko, SingleValue::none()).unwrap();
        assert!(ko.values().is_empty());
        assert_eq!(ko.to_string(), "KO[]");
        assert_eq!(Property::new(PropertyType::Unknown, vec![]), Err(PropertyError::UnknownType));
    }

    #[test]
    fn test_new_unknown() {
        assert!(Property::new_unknown("XY", vec![]).is_ok());
        assert_eq!(Property::new_unknown("", vec![]), Err(PropertyError::EmptyName));
        assert!(matches!(
            Property::new_unknown("SZ", vec![]),
            Err(PropertyError::StandardName { .. })
        ));
    }

    #[test]
    fn test_game_type_specialization() {
        assert_eq!(game_type_of(None), GameType::Go);
        let gm = Property::from_raw("GM", &["2"], GameType::None, BoardSize::NONE);
        assert_eq!(game_type_of(Some(&gm)), GameType::Othello);
        let gm = Property::from_raw("GM", &["x"], GameType::None, BoardSize::NONE);
        assert_eq!(gm.as_game_type(), Some(GameType::Unknown));
        assert_eq!(raw("C", &["2"]).as_game_type(), None);
    }

    #[test]
    fn test_board_size_specialization() {
        assert_eq!(board_size_of(None, GameType::Go), BoardSize::DEFAULT_GO);
        assert_eq!(board_size_of(None, GameType::Chess), BoardSize::DEFAULT_CHESS);
        assert_eq!(board_size_of(None, GameType::Othello), BoardSize::NONE);

        let sz = raw("SZ", &["13"]);
        assert_eq!(sz.as_board_size(GameType::Go), Some(BoardSize::square(13)));
        let sz = raw("SZ", &["19:20"]);
        assert_eq!(sz.as_board_size(GameType::Go), Some(BoardSize::INVALID));
        assert_eq!(sz.as_board_size(GameType::Othello), Some(BoardSize::new(19, 20)));
        let sz = raw("SZ", &["big"]);
        assert_eq!(sz.as_board_size(GameType::Go), Some(BoardSize::INVALID));
    }

    #[test]
    fn test_from_raw_compressed_point_lists() {
        let ab = raw("AB", &["aa:cc", "pd"]);
        assert_eq!(ab.values().len(), 2);
        assert!(ab.has_typed_values());
        let rect = ab.values()[0].as_composed().unwrap();
        let corner = rect.first().as_go_stone().unwrap();
        assert_eq!(corner.color, Color::Black);
        assert_eq!(rect.second().kind(), ValueKind::Point);
        assert_eq!(rect.second().as_go_point(), GoPoint::parse_in("cc", Notation::Sgf, BoardSize::DEFAULT_GO));
        assert!(ab.values()[1].as_single().unwrap().as_go_stone().is_some());
        assert_eq!(ab.to_string(), "AB[aa:cc][pd]");

        let aw = raw("AW", &["dd:ee"]);
        assert_eq!(aw.values()[0].as_composed().unwrap().first().as_go_stone().unwrap().color, Color::White);

        for name in ["AE", "MA", "TR", "CR", "SQ", "SL", "DD", "VW", "TB", "TW"] {
            let p = raw(name, &["aa:bb"]);
            let pair = p.values()[0].as_composed().unwrap();
            assert_eq!(pair.kinds(), (ValueKind::Point, ValueKind::Point), "{}", name);
            assert!(p.has_typed_values(), "{}", name);
        }
    }

    #[test]
    fn test_new_compressed_point_lists() {
        let board = BoardSize::DEFAULT_GO;
        let aa = GoPoint::parse_in("aa", Notation::Sgf, board).unwrap();
        let cc = GoPoint::parse_in("cc", Notation::Sgf, board).unwrap();

        let ab = Property::new(
            PropertyType::AddBlack,
            vec![ComposedValue::new(
                SingleValue::go_stone(GoStone::new(Color::Black, aa)),
                SingleValue::go_point(cc),
            )
            .into()],
        )
        .unwrap();
        assert_eq!(ab.to_string(), "AB[aa:cc]");

        let ae = Property::new(
            PropertyType::AddEmpty,
            vec![
                ComposedValue::new(SingleValue::go_point(aa), SingleValue::go_point(cc)).into(),
                SingleValue::go_point(cc).into(),
            ],
        )
        .unwrap();
        assert_eq!(ae.values().len(), 2);

        // The stone must come first.
        assert!(matches!(
            Property::new(
                PropertyType::AddWhite,
                vec![ComposedValue::new(
                    SingleValue::go_point(aa),
                    SingleValue::go_stone(GoStone::new(Color::White, cc)),
                )
                .into()]
            ),
            Err(PropertyError::IllegalComposition { .. })
        ));
    }

    #[test]
    fn test_write_back_constructors() {
        assert_eq!(Property::for_game_type(GameType::Go).unwrap().to_string(), "GM[1]");
        assert_eq!(
            Property::for_board_size(BoardSize::new(8, 10)).unwrap().to_string(),
            "SZ[8:10]"
        );
        assert!(Property::for_game_type(GameType::Unknown).is_err());
        assert!(Property::for_board_size(BoardSize::NONE).is_err());
    }
}
