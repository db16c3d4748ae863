//! The registry of SGF property types.
//!
//! Covers every property of SGF FF4, the Go-specific properties, and the
//! FF1-FF3 properties that FF4 dropped. Anything else is `Unknown` and keeps
//! its name on the [`Property`](crate::model::Property).

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::model::ValueKind;

/// What a property is used for. Root and game-info properties feed
/// [`GameInfo`](crate::model::GameInfo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyCategory {
    Move,
    Setup,
    NodeAnnotation,
    MoveAnnotation,
    Markup,
    Root,
    GameInfo,
    Timing,
    Miscellaneous,
    Unknown,
}

/// One shape a value of a property may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueForm {
    /// The empty value, `[]`.
    None,
    Single(ValueKind),
    Composed(ValueKind, ValueKind),
}

/// How many values a property carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    /// Exactly one value.
    One,
    /// One or more values.
    List,
    /// Zero or more values; zero is written as a single empty value.
    EList,
}

/// The values a property type accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueDescriptor {
    pub forms: &'static [ValueForm],
    pub multiplicity: Multiplicity,
}

impl ValueDescriptor {
    /// Returns true if the property may have no value at all.
    pub fn accepts_none(&self) -> bool {
        self.multiplicity == Multiplicity::EList || self.forms.contains(&ValueForm::None)
    }

    /// Returns true if the single kind is accepted.
    pub fn accepts_single(&self, kind: ValueKind) -> bool {
        self.forms.contains(&ValueForm::Single(kind))
    }

    /// Returns true if the composed kind pair is accepted.
    pub fn accepts_composed(&self, first: ValueKind, second: ValueKind) -> bool {
        self.forms.contains(&ValueForm::Composed(first, second))
    }

    /// The single kind accepted, if any.
    pub fn single_kind(&self) -> Option<ValueKind> {
        self.forms.iter().find_map(|f| match f {
            ValueForm::Single(k) => Some(*k),
            _ => None,
        })
    }

    /// The composed kind pair accepted, if any.
    pub fn composed_kinds(&self) -> Option<(ValueKind, ValueKind)> {
        self.forms.iter().find_map(|f| match f {
            ValueForm::Composed(a, b) => Some((*a, *b)),
            _ => None,
        })
    }
}

/// Static facts about one property type.
#[derive(Debug)]
struct PropertyInfo {
    name: &'static str,
    category: PropertyCategory,
    descriptor: ValueDescriptor,
    go_specific: bool,
    inheritable: bool,
    dropped_in_ff4: bool,
    description: &'static str,
}

/// Every property type SGF defines, plus `Unknown` for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// `B`: Black move.
    BlackMove,
    /// `KO`: Execute a move even if illegal.
    Ko,
    /// `MN`: Move number.
    MoveNumber,
    /// `W`: White move.
    WhiteMove,
    /// `AB`: Add black stones.
    AddBlack,
    /// `AE`: Clear points.
    AddEmpty,
    /// `AW`: Add white stones.
    AddWhite,
    /// `PL`: Player to move next.
    PlayerToPlay,
    /// `C`: Comment.
    Comment,
    /// `DM`: Even position.
    EvenPosition,
    /// `GB`: Good for black.
    GoodForBlack,
    /// `GW`: Good for white.
    GoodForWhite,
    /// `HO`: Hotspot.
    Hotspot,
    /// `N`: Node name.
    NodeName,
    /// `UC`: Unclear position.
    UnclearPosition,
    /// `V`: Estimated score.
    Value,
    /// `BM`: Bad move.
    BadMove,
    /// `DO`: Doubtful move.
    DoubtfulMove,
    /// `IT`: Interesting move.
    InterestingMove,
    /// `TE`: Good move.
    Tesuji,
    /// `AR`: Arrows.
    Arrow,
    /// `CR`: Circle markers.
    Circle,
    /// `DD`: Dimmed points.
    DimPoints,
    /// `LB`: Labels.
    Label,
    /// `LN`: Lines.
    Line,
    /// `MA`: X markers.
    Mark,
    /// `SL`: Selected points.
    Selected,
    /// `SQ`: Square markers.
    Square,
    /// `TR`: Triangle markers.
    Triangle,
    /// `AP`: Application name and version.
    Application,
    /// `CA`: Character set.
    Charset,
    /// `FF`: File format version.
    FileFormat,
    /// `GM`: Game type.
    Game,
    /// `ST`: Variation display style.
    Style,
    /// `SZ`: Board size.
    Size,
    /// `AN`: Annotator.
    Annotator,
    /// `BR`: Black player rank.
    BlackRank,
    /// `BT`: Black team.
    BlackTeam,
    /// `CP`: Copyright.
    Copyright,
    /// `DT`: Dates the game was played.
    Date,
    /// `EV`: Event.
    Event,
    /// `GN`: Game name.
    GameName,
    /// `GC`: Game comment.
    GameComment,
    /// `ON`: Opening.
    Opening,
    /// `OT`: Overtime method.
    Overtime,
    /// `PB`: Black player name.
    PlayerBlack,
    /// `PC`: Place.
    Place,
    /// `PW`: White player name.
    PlayerWhite,
    /// `RE`: Result.
    Result,
    /// `RO`: Round.
    Round,
    /// `RU`: Rules.
    Rules,
    /// `SO`: Source.
    Source,
    /// `TM`: Time limit in seconds.
    TimeLimit,
    /// `US`: Person or program that entered the game.
    User,
    /// `WR`: White player rank.
    WhiteRank,
    /// `WT`: White team.
    WhiteTeam,
    /// `BL`: Black time left.
    BlackTimeLeft,
    /// `OB`: Black moves left in byo-yomi.
    OtherMovesBlack,
    /// `OW`: White moves left in byo-yomi.
    OtherMovesWhite,
    /// `WL`: White time left.
    WhiteTimeLeft,
    /// `FG`: Figure.
    Figure,
    /// `PM`: Move number print mode.
    PrintMoveMode,
    /// `VW`: Visible board area.
    View,
    /// `HA`: Handicap stones.
    Handicap,
    /// `KM`: Komi.
    Komi,
    /// `TB`: Black territory.
    TerritoryBlack,
    /// `TW`: White territory.
    TerritoryWhite,
    /// `BS`: Black species.
    BlackSpecies,
    /// `CH`: Check mark.
    Check,
    /// `EL`: Evaluation.
    Evaluation,
    /// `EX`: Expected next move.
    ExpectedMove,
    /// `ID`: Game identifier.
    Identifier,
    /// `L`: Letter labels.
    Letters,
    /// `LT`: Lose on time enforced.
    LoseOnTime,
    /// `M`: Marks.
    Marks,
    /// `OM`: Moves per overtime period.
    OvertimeMoves,
    /// `OP`: Overtime period length.
    OvertimeLength,
    /// `OV`: Operator overhead.
    OperatorOverhead,
    /// `RG`: Region.
    Region,
    /// `SC`: Secure stones.
    SecureStones,
    /// `SE`: Self-test move.
    SelfTest,
    /// `SI`: Sigma.
    Sigma,
    /// `TC`: Territory count.
    TerritoryCount,
    /// `WS`: White species.
    WhiteSpecies,
    /// A custom or non-standard property.
    Unknown,
}

static STANDARD: [PropertyType; 84] = [
    PropertyType::BlackMove,
    PropertyType::Ko,
    PropertyType::MoveNumber,
    PropertyType::WhiteMove,
    PropertyType::AddBlack,
    PropertyType::AddEmpty,
    PropertyType::AddWhite,
    PropertyType::PlayerToPlay,
    PropertyType::Comment,
    PropertyType::EvenPosition,
    PropertyType::GoodForBlack,
    PropertyType::GoodForWhite,
    PropertyType::Hotspot,
    PropertyType::NodeName,
    PropertyType::UnclearPosition,
    PropertyType::Value,
    PropertyType::BadMove,
    PropertyType::DoubtfulMove,
    PropertyType::InterestingMove,
    PropertyType::Tesuji,
    PropertyType::Arrow,
    PropertyType::Circle,
    PropertyType::DimPoints,
    PropertyType::Label,
    PropertyType::Line,
    PropertyType::Mark,
    PropertyType::Selected,
    PropertyType::Square,
    PropertyType::Triangle,
    PropertyType::Application,
    PropertyType::Charset,
    PropertyType::FileFormat,
    PropertyType::Game,
    PropertyType::Style,
    PropertyType::Size,
    PropertyType::Annotator,
    PropertyType::BlackRank,
    PropertyType::BlackTeam,
    PropertyType::Copyright,
    PropertyType::Date,
    PropertyType::Event,
    PropertyType::GameName,
    PropertyType::GameComment,
    PropertyType::Opening,
    PropertyType::Overtime,
    PropertyType::PlayerBlack,
    PropertyType::Place,
    PropertyType::PlayerWhite,
    PropertyType::Result,
    PropertyType::Round,
    PropertyType::Rules,
    PropertyType::Source,
    PropertyType::TimeLimit,
    PropertyType::User,
    PropertyType::WhiteRank,
    PropertyType::WhiteTeam,
    PropertyType::BlackTimeLeft,
    PropertyType::OtherMovesBlack,
    PropertyType::OtherMovesWhite,
    PropertyType::WhiteTimeLeft,
    PropertyType::Figure,
    PropertyType::PrintMoveMode,
    PropertyType::View,
    PropertyType::Handicap,
    PropertyType::Komi,
    PropertyType::TerritoryBlack,
    PropertyType::TerritoryWhite,
    PropertyType::BlackSpecies,
    PropertyType::Check,
    PropertyType::Evaluation,
    PropertyType::ExpectedMove,
    PropertyType::Identifier,
    PropertyType::Letters,
    PropertyType::LoseOnTime,
    PropertyType::Marks,
    PropertyType::OvertimeMoves,
    PropertyType::OvertimeLength,
    PropertyType::OperatorOverhead,
    PropertyType::Region,
    PropertyType::SecureStones,
    PropertyType::SelfTest,
    PropertyType::Sigma,
    PropertyType::TerritoryCount,
    PropertyType::WhiteSpecies,
];

static UNKNOWN_INFO: PropertyInfo = PropertyInfo {
    name: "",
    category: PropertyCategory::Unknown,
    descriptor: ValueDescriptor {
        forms: &[ValueForm::Single(ValueKind::Unknown)],
        multiplicity: Multiplicity::EList,
    },
    go_specific: false,
    inheritable: false,
    dropped_in_ff4: false,
    description: "Unknown property",
};

/// Indexed by [`PropertyType`] discriminant; `Unknown` is not in the table.
static INFO: [PropertyInfo; 84] = [
    PropertyInfo {
        name: "B",
        category: PropertyCategory::Move,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Move)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Black move",
    },
    PropertyInfo {
        name: "KO",
        category: PropertyCategory::Move,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::None],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Execute a move even if illegal",
    },
    PropertyInfo {
        name: "MN",
        category: PropertyCategory::Move,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Move number",
    },
    PropertyInfo {
        name: "W",
        category: PropertyCategory::Move,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Move)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "White move",
    },
    PropertyInfo {
        name: "AB",
        category: PropertyCategory::Setup,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Stone),
                ValueForm::Composed(ValueKind::Stone, ValueKind::Point),
            ],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Add black stones",
    },
    PropertyInfo {
        name: "AE",
        category: PropertyCategory::Setup,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Clear points",
    },
    PropertyInfo {
        name: "AW",
        category: PropertyCategory::Setup,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Stone),
                ValueForm::Composed(ValueKind::Stone, ValueKind::Point),
            ],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Add white stones",
    },
    PropertyInfo {
        name: "PL",
        category: PropertyCategory::Setup,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Color)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Player to move next",
    },
    PropertyInfo {
        name: "C",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Text)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Comment",
    },
    PropertyInfo {
        name: "DM",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Double)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Even position",
    },
    PropertyInfo {
        name: "GB",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Double)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Good for black",
    },
    PropertyInfo {
        name: "GW",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Double)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Good for white",
    },
    PropertyInfo {
        name: "HO",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Double)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Hotspot",
    },
    PropertyInfo {
        name: "N",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Node name",
    },
    PropertyInfo {
        name: "UC",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Double)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Unclear position",
    },
    PropertyInfo {
        name: "V",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Real)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Estimated score",
    },
    PropertyInfo {
        name: "BM",
        category: PropertyCategory::MoveAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Double)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Bad move",
    },
    PropertyInfo {
        name: "DO",
        category: PropertyCategory::MoveAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::None],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Doubtful move",
    },
    PropertyInfo {
        name: "IT",
        category: PropertyCategory::MoveAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::None],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Interesting move",
    },
    PropertyInfo {
        name: "TE",
        category: PropertyCategory::MoveAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Double)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Good move",
    },
    PropertyInfo {
        name: "AR",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Composed(ValueKind::Point, ValueKind::Point)],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Arrows",
    },
    PropertyInfo {
        name: "CR",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Circle markers",
    },
    PropertyInfo {
        name: "DD",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::EList,
        },
        go_specific: false,
        inheritable: true,
        dropped_in_ff4: false,
        description: "Dimmed points",
    },
    PropertyInfo {
        name: "LB",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Composed(ValueKind::Point, ValueKind::SimpleText)],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Labels",
    },
    PropertyInfo {
        name: "LN",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Composed(ValueKind::Point, ValueKind::Point)],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Lines",
    },
    PropertyInfo {
        name: "MA",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "X markers",
    },
    PropertyInfo {
        name: "SL",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Selected points",
    },
    PropertyInfo {
        name: "SQ",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Square markers",
    },
    PropertyInfo {
        name: "TR",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Triangle markers",
    },
    PropertyInfo {
        name: "AP",
        category: PropertyCategory::Root,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Composed(ValueKind::SimpleText, ValueKind::SimpleText),
            ],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Application name and version",
    },
    PropertyInfo {
        name: "CA",
        category: PropertyCategory::Root,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Character set",
    },
    PropertyInfo {
        name: "FF",
        category: PropertyCategory::Root,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "File format version",
    },
    PropertyInfo {
        name: "GM",
        category: PropertyCategory::Root,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Game type",
    },
    PropertyInfo {
        name: "ST",
        category: PropertyCategory::Root,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Variation display style",
    },
    PropertyInfo {
        name: "SZ",
        category: PropertyCategory::Root,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Number),
                ValueForm::Composed(ValueKind::Number, ValueKind::Number),
            ],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Board size",
    },
    PropertyInfo {
        name: "AN",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Annotator",
    },
    PropertyInfo {
        name: "BR",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Black player rank",
    },
    PropertyInfo {
        name: "BT",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Black team",
    },
    PropertyInfo {
        name: "CP",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Copyright",
    },
    PropertyInfo {
        name: "DT",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Dates the game was played",
    },
    PropertyInfo {
        name: "EV",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Event",
    },
    PropertyInfo {
        name: "GN",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Game name",
    },
    PropertyInfo {
        name: "GC",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Text)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Game comment",
    },
    PropertyInfo {
        name: "ON",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Opening",
    },
    PropertyInfo {
        name: "OT",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Overtime method",
    },
    PropertyInfo {
        name: "PB",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Black player name",
    },
    PropertyInfo {
        name: "PC",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Place",
    },
    PropertyInfo {
        name: "PW",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "White player name",
    },
    PropertyInfo {
        name: "RE",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Result",
    },
    PropertyInfo {
        name: "RO",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Round",
    },
    PropertyInfo {
        name: "RU",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Rules",
    },
    PropertyInfo {
        name: "SO",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Source",
    },
    PropertyInfo {
        name: "TM",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Real)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Time limit in seconds",
    },
    PropertyInfo {
        name: "US",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Person or program that entered the game",
    },
    PropertyInfo {
        name: "WR",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "White player rank",
    },
    PropertyInfo {
        name: "WT",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "White team",
    },
    PropertyInfo {
        name: "BL",
        category: PropertyCategory::Timing,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Real)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Black time left",
    },
    PropertyInfo {
        name: "OB",
        category: PropertyCategory::Timing,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Black moves left in byo-yomi",
    },
    PropertyInfo {
        name: "OW",
        category: PropertyCategory::Timing,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "White moves left in byo-yomi",
    },
    PropertyInfo {
        name: "WL",
        category: PropertyCategory::Timing,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Real)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "White time left",
    },
    PropertyInfo {
        name: "FG",
        category: PropertyCategory::Miscellaneous,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::None,
                ValueForm::Composed(ValueKind::Number, ValueKind::SimpleText),
            ],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Figure",
    },
    PropertyInfo {
        name: "PM",
        category: PropertyCategory::Miscellaneous,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: true,
        dropped_in_ff4: false,
        description: "Move number print mode",
    },
    PropertyInfo {
        name: "VW",
        category: PropertyCategory::Miscellaneous,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::EList,
        },
        go_specific: false,
        inheritable: true,
        dropped_in_ff4: false,
        description: "Visible board area",
    },
    PropertyInfo {
        name: "HA",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: true,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Handicap stones",
    },
    PropertyInfo {
        name: "KM",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Real)],
            multiplicity: Multiplicity::One,
        },
        go_specific: true,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Komi",
    },
    PropertyInfo {
        name: "TB",
        category: PropertyCategory::Miscellaneous,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::EList,
        },
        go_specific: true,
        inheritable: false,
        dropped_in_ff4: false,
        description: "Black territory",
    },
    PropertyInfo {
        name: "TW",
        category: PropertyCategory::Miscellaneous,
        descriptor: ValueDescriptor {
            forms: &[
                ValueForm::Single(ValueKind::Point),
                ValueForm::Composed(ValueKind::Point, ValueKind::Point),
            ],
            multiplicity: Multiplicity::EList,
        },
        go_specific: true,
        inheritable: false,
        dropped_in_ff4: false,
        description: "White territory",
    },
    PropertyInfo {
        name: "BS",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Black species",
    },
    PropertyInfo {
        name: "CH",
        category: PropertyCategory::MoveAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Double)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Check mark",
    },
    PropertyInfo {
        name: "EL",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Evaluation",
    },
    PropertyInfo {
        name: "EX",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Move)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Expected next move",
    },
    PropertyInfo {
        name: "ID",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::SimpleText)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Game identifier",
    },
    PropertyInfo {
        name: "L",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Point)],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Letter labels",
    },
    PropertyInfo {
        name: "LT",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::None],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Lose on time enforced",
    },
    PropertyInfo {
        name: "M",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Point)],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Marks",
    },
    PropertyInfo {
        name: "OM",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Moves per overtime period",
    },
    PropertyInfo {
        name: "OP",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Real)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Overtime period length",
    },
    PropertyInfo {
        name: "OV",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Real)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Operator overhead",
    },
    PropertyInfo {
        name: "RG",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Point)],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Region",
    },
    PropertyInfo {
        name: "SC",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Point)],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Secure stones",
    },
    PropertyInfo {
        name: "SE",
        category: PropertyCategory::Markup,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Point)],
            multiplicity: Multiplicity::List,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Self-test move",
    },
    PropertyInfo {
        name: "SI",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Double)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Sigma",
    },
    PropertyInfo {
        name: "TC",
        category: PropertyCategory::NodeAnnotation,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "Territory count",
    },
    PropertyInfo {
        name: "WS",
        category: PropertyCategory::GameInfo,
        descriptor: ValueDescriptor {
            forms: &[ValueForm::Single(ValueKind::Number)],
            multiplicity: Multiplicity::One,
        },
        go_specific: false,
        inheritable: false,
        dropped_in_ff4: true,
        description: "White species",
    },
];

lazy_static! {
    static ref BY_NAME: FxHashMap<&'static str, PropertyType> =
        STANDARD.iter().map(|t| (t.info().name, *t)).collect();
}

impl PropertyType {
    /// All standard property types, in declaration order.
    pub fn standard() -> &'static [PropertyType] {
        &STANDARD
    }

    /// Looks up a property type by its name. Names are case-sensitive;
    /// anything not in the registry maps to `Unknown`.
    pub fn from_name(name: &str) -> PropertyType {
        BY_NAME.get(name).copied().unwrap_or(PropertyType::Unknown)
    }

    fn info(self) -> &'static PropertyInfo {
        match self {
            PropertyType::Unknown => &UNKNOWN_INFO,
            other => &INFO[other as usize],
        }
    }

    /// The standard name, or None for `Unknown`.
    pub fn name(self) -> Option<&'static str> {
        match self {
            PropertyType::Unknown => None,
            other => Some(other.info().name),
        }
    }

    pub fn category(self) -> PropertyCategory {
        self.info().category
    }

    pub fn value_descriptor(self) -> ValueDescriptor {
        self.info().descriptor
    }

    /// Returns true for properties only defined for Go (HA, KM, TB, TW).
    pub fn is_go_specific(self) -> bool {
        self.info().go_specific
    }

    /// Returns true for properties whose value applies to the whole subtree
    /// (DD, PM, VW).
    pub fn is_inheritable(self) -> bool {
        self.info().inheritable
    }

    /// Returns true for FF1-FF3 properties that FF4 no longer defines.
    pub fn is_dropped_in_ff4(self) -> bool {
        self.info().dropped_in_ff4
    }

    /// Short human-readable description.
    pub fn description(self) -> &'static str {
        self.info().description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_enum_order() {
        for (i, t) in STANDARD.iter().enumerate() {
            assert_eq!(*t as usize, i);
            assert_eq!(PropertyType::from_name(INFO[i].name), *t);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(PropertyType::from_name("B"), PropertyType::BlackMove);
        assert_eq!(PropertyType::from_name("SZ"), PropertyType::Size);
        assert_eq!(PropertyType::from_name("KM"), PropertyType::Komi);
        assert_eq!(PropertyType::from_name("XY"), PropertyType::Unknown);
        assert_eq!(PropertyType::from_name("sz"), PropertyType::Unknown);
        assert_eq!(PropertyType::Unknown.name(), None);
        assert_eq!(PropertyType::Comment.name(), Some("C"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(PropertyType::Game.category(), PropertyCategory::Root);
        assert_eq!(PropertyType::Date.category(), PropertyCategory::GameInfo);
        assert_eq!(PropertyType::Handicap.category(), PropertyCategory::GameInfo);
        assert_eq!(PropertyType::AddBlack.category(), PropertyCategory::Setup);
        assert_eq!(PropertyType::Unknown.category(), PropertyCategory::Unknown);
    }

    #[test]
    fn test_descriptors() {
        let sz = PropertyType::Size.value_descriptor();
        assert!(sz.accepts_single(ValueKind::Number));
        assert!(sz.accepts_composed(ValueKind::Number, ValueKind::Number));
        assert!(!sz.accepts_none());

        let lb = PropertyType::Label.value_descriptor();
        assert_eq!(lb.composed_kinds(), Some((ValueKind::Point, ValueKind::SimpleText)));
        assert_eq!(lb.single_kind(), None);

        let ab = PropertyType::AddBlack.value_descriptor();
        assert!(ab.accepts_single(ValueKind::Stone));
        assert!(ab.accepts_composed(ValueKind::Stone, ValueKind::Point));
        assert!(!ab.accepts_composed(ValueKind::Point, ValueKind::Stone));
        for t in [PropertyType::AddEmpty, PropertyType::Triangle, PropertyType::DimPoints, PropertyType::TerritoryBlack] {
            assert!(t.value_descriptor().accepts_composed(ValueKind::Point, ValueKind::Point), "{:?}", t);
        }

        assert!(PropertyType::View.value_descriptor().accepts_none());
        assert!(PropertyType::Ko.value_descriptor().accepts_none());
        assert!(PropertyType::Figure.value_descriptor().accepts_none());
        assert!(!PropertyType::BlackMove.value_descriptor().accepts_none());
    }

    #[test]
    fn test_traits() {
        assert!(PropertyType::Komi.is_go_specific());
        assert!(!PropertyType::Comment.is_go_specific());
        assert!(PropertyType::PrintMoveMode.is_inheritable());
        assert!(PropertyType::Letters.is_dropped_in_ff4());
        assert!(!PropertyType::Label.is_dropped_in_ff4());
    }
}
