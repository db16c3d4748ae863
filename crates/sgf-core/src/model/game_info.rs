//! Game information: a detached snapshot of root and game-info properties.
//!
//! [`GameInfo::from_nodes`] copies the values out of the tree; edits to the
//! snapshot do not touch the tree until [`GameInfo::write_to`] writes them
//! back. Text fields hold display text (unescaped). Fields with a structured
//! codec (DT, RE, RO, and for Go BR, WR, RU) keep their text so that values
//! the codec rejects survive a read/write cycle; typed views decompose and
//! compose on demand.

use tracing::debug;

use crate::codec::{
    compose_date, compose_game_result, compose_go_player_rank, compose_go_ruleset,
    compose_round_information, decompose_date, decompose_game_result, decompose_go_player_rank,
    decompose_go_ruleset, decompose_round_information, Date, GameResult, GoPlayerRank, GoRuleset,
    RoundInformation,
};
use crate::error::TreeError;
use crate::model::property::{board_size_of, game_type_of};
use crate::model::{BoardSize, GameTree, GameType, NodeId, Property, PropertyType, SingleValue};
use crate::util::number::format_real;
use crate::util::text::escape;

/// Game-info properties stored as text, in SGF name order.
static TEXT_PROPERTIES: [PropertyType; 20] = [
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
    PropertyType::User,
    PropertyType::WhiteRank,
    PropertyType::WhiteTeam,
];

/// Fields every game type has.
#[derive(Debug, Clone, PartialEq)]
pub struct GameInfoBase {
    /// GM, from the root node.
    pub game_type: GameType,
    /// SZ, from the root node.
    pub board_size: BoardSize,

    pub annotator: String,
    pub black_rank: String,
    pub black_team: String,
    pub copyright: String,
    /// DT as text; see [`Self::dates`].
    pub date: String,
    pub event: String,
    pub game_name: String,
    pub game_comment: String,
    pub opening: String,
    pub overtime: String,
    pub black_player: String,
    pub place: String,
    pub white_player: String,
    /// RE as text; see [`Self::game_result`].
    pub result: String,
    /// RO as text; see [`Self::round_information`].
    pub round: String,
    pub rules: String,
    pub source: String,
    pub user: String,
    pub white_rank: String,
    pub white_team: String,
    /// TM, in seconds.
    pub time_limit: Option<f64>,
}

impl GameInfoBase {
    /// Empty game information with the game type's default board size.
    pub fn new(game_type: GameType) -> Self {
        Self {
            game_type,
            board_size: BoardSize::default_for(game_type),
            annotator: String::new(),
            black_rank: String::new(),
            black_team: String::new(),
            copyright: String::new(),
            date: String::new(),
            event: String::new(),
            game_name: String::new(),
            game_comment: String::new(),
            opening: String::new(),
            overtime: String::new(),
            black_player: String::new(),
            place: String::new(),
            white_player: String::new(),
            result: String::new(),
            round: String::new(),
            rules: String::new(),
            source: String::new(),
            user: String::new(),
            white_rank: String::new(),
            white_team: String::new(),
            time_limit: None,
        }
    }

    /// The dates DT lists. Empty if DT is empty or invalid.
    pub fn dates(&self) -> Vec<Date> {
        decompose_date(&self.date)
    }

    /// Sets DT, abbreviating where SGF allows. Invalid dates clear DT.
    pub fn set_dates(&mut self, dates: &[Date]) {
        self.date = compose_date(dates);
    }

    pub fn game_result(&self) -> GameResult {
        decompose_game_result(&self.result)
    }

    pub fn set_game_result(&mut self, result: &GameResult) {
        self.result = compose_game_result(result);
    }

    pub fn round_information(&self) -> RoundInformation {
        decompose_round_information(&self.round)
    }

    pub fn set_round_information(&mut self, info: &RoundInformation) {
        self.round = compose_round_information(info);
    }

    fn text_field(&self, property_type: PropertyType) -> Option<&String> {
        let field = match property_type {
            PropertyType::Annotator => &self.annotator,
            PropertyType::BlackRank => &self.black_rank,
            PropertyType::BlackTeam => &self.black_team,
            PropertyType::Copyright => &self.copyright,
            PropertyType::Date => &self.date,
            PropertyType::Event => &self.event,
            PropertyType::GameName => &self.game_name,
            PropertyType::GameComment => &self.game_comment,
            PropertyType::Opening => &self.opening,
            PropertyType::Overtime => &self.overtime,
            PropertyType::PlayerBlack => &self.black_player,
            PropertyType::Place => &self.place,
            PropertyType::PlayerWhite => &self.white_player,
            PropertyType::Result => &self.result,
            PropertyType::Round => &self.round,
            PropertyType::Rules => &self.rules,
            PropertyType::Source => &self.source,
            PropertyType::User => &self.user,
            PropertyType::WhiteRank => &self.white_rank,
            PropertyType::WhiteTeam => &self.white_team,
            _ => return None,
        };
        Some(field)
    }

    fn text_field_mut(&mut self, property_type: PropertyType) -> Option<&mut String> {
        let field = match property_type {
            PropertyType::Annotator => &mut self.annotator,
            PropertyType::BlackRank => &mut self.black_rank,
            PropertyType::BlackTeam => &mut self.black_team,
            PropertyType::Copyright => &mut self.copyright,
            PropertyType::Date => &mut self.date,
            PropertyType::Event => &mut self.event,
            PropertyType::GameName => &mut self.game_name,
            PropertyType::GameComment => &mut self.game_comment,
            PropertyType::Opening => &mut self.opening,
            PropertyType::Overtime => &mut self.overtime,
            PropertyType::PlayerBlack => &mut self.black_player,
            PropertyType::Place => &mut self.place,
            PropertyType::PlayerWhite => &mut self.white_player,
            PropertyType::Result => &mut self.result,
            PropertyType::Round => &mut self.round,
            PropertyType::Rules => &mut self.rules,
            PropertyType::Source => &mut self.source,
            PropertyType::User => &mut self.user,
            PropertyType::WhiteRank => &mut self.white_rank,
            PropertyType::WhiteTeam => &mut self.white_team,
            _ => return None,
        };
        Some(field)
    }
}

/// Go game information: handicap, komi and typed views on ruleset and ranks.
#[derive(Debug, Clone, PartialEq)]
pub struct GoGameInfo {
    pub base: GameInfoBase,
    /// HA.
    pub handicap: Option<i64>,
    /// KM.
    pub komi: Option<f64>,
}

impl GoGameInfo {
    pub fn new() -> Self {
        Self {
            base: GameInfoBase::new(GameType::Go),
            handicap: None,
            komi: None,
        }
    }

    pub fn ruleset(&self) -> GoRuleset {
        decompose_go_ruleset(&self.base.rules)
    }

    pub fn set_ruleset(&mut self, ruleset: &GoRuleset) {
        self.base.rules = compose_go_ruleset(ruleset);
    }

    pub fn black_player_rank(&self) -> GoPlayerRank {
        decompose_go_player_rank(&self.base.black_rank)
    }

    pub fn set_black_player_rank(&mut self, rank: &GoPlayerRank) {
        self.base.black_rank = compose_go_player_rank(rank);
    }

    pub fn white_player_rank(&self) -> GoPlayerRank {
        decompose_go_player_rank(&self.base.white_rank)
    }

    pub fn set_white_player_rank(&mut self, rank: &GoPlayerRank) {
        self.base.white_rank = compose_go_player_rank(rank);
    }
}

impl Default for GoGameInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Game information, Go-specific when the game is Go.
#[derive(Debug, Clone, PartialEq)]
pub enum GameInfo {
    Generic(GameInfoBase),
    Go(GoGameInfo),
}

impl GameInfo {
    /// Empty game information for the game type.
    pub fn new(game_type: GameType) -> GameInfo {
        match game_type {
            GameType::Go => GameInfo::Go(GoGameInfo::new()),
            other => GameInfo::Generic(GameInfoBase::new(other)),
        }
    }

    /// Reads GM and SZ from `root` and the game-info properties from
    /// `game_info_node`, or from `root` when there is no such node.
    pub fn from_nodes(
        tree: &GameTree,
        root: NodeId,
        game_info_node: Option<NodeId>,
    ) -> Result<GameInfo, TreeError> {
        let game_type = game_type_of(tree.property(root, PropertyType::Game)?);
        let board_size = board_size_of(tree.property(root, PropertyType::Size)?, game_type);
        let source = game_info_node.unwrap_or(root);

        let mut info = GameInfo::new(game_type);
        let base = info.base_mut();
        base.board_size = board_size;
        for property_type in TEXT_PROPERTIES {
            if let (Some(property), Some(field)) =
                (tree.property(source, property_type)?, base.text_field_mut(property_type))
            {
                *field = text_of(property);
            }
        }
        base.time_limit = tree
            .property(source, PropertyType::TimeLimit)?
            .and_then(Property::first_single)
            .and_then(SingleValue::as_real);

        if let GameInfo::Go(go) = &mut info {
            go.handicap = tree
                .property(source, PropertyType::Handicap)?
                .and_then(Property::first_single)
                .and_then(SingleValue::as_number);
            go.komi = tree
                .property(source, PropertyType::Komi)?
                .and_then(Property::first_single)
                .and_then(SingleValue::as_real);
        }

        info.report_invalid_values();
        Ok(info)
    }

    fn report_invalid_values(&self) {
        let base = self.base();
        report("DT", &base.date, !base.dates().is_empty());
        report("RE", &base.result, base.game_result().is_valid);
        report("RO", &base.round, base.round_information().is_valid);
        if let GameInfo::Go(go) = self {
            report("RU", &base.rules, go.ruleset().is_valid);
            report("BR", &base.black_rank, go.black_player_rank().is_valid);
            report("WR", &base.white_rank, go.white_player_rank().is_valid);
        }
    }

    pub fn base(&self) -> &GameInfoBase {
        match self {
            GameInfo::Generic(base) => base,
            GameInfo::Go(go) => &go.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut GameInfoBase {
        match self {
            GameInfo::Generic(base) => base,
            GameInfo::Go(go) => &mut go.base,
        }
    }

    pub fn as_go(&self) -> Option<&GoGameInfo> {
        match self {
            GameInfo::Go(go) => Some(go),
            GameInfo::Generic(_) => None,
        }
    }

    pub fn as_go_mut(&mut self) -> Option<&mut GoGameInfo> {
        match self {
            GameInfo::Go(go) => Some(go),
            GameInfo::Generic(_) => None,
        }
    }

    pub fn game_type(&self) -> GameType {
        self.base().game_type
    }

    pub fn board_size(&self) -> BoardSize {
        self.base().board_size
    }

    /// Writes GM and SZ to `root` and the game-info properties to
    /// `game_info_node`, or to `root` when there is no such node. Empty
    /// fields remove their property.
    pub fn write_to(
        &self,
        tree: &mut GameTree,
        root: NodeId,
        game_info_node: Option<NodeId>,
    ) -> Result<(), TreeError> {
        let target = game_info_node.unwrap_or(root);
        tree.check(root)?;
        tree.check(target)?;
        debug!(root = %root, node = %target, game_type = %self.game_type(), "writing game info");

        let base = self.base();
        let context = (base.game_type, base.board_size);
        match Property::for_game_type(base.game_type) {
            Ok(gm) => tree.set_property(root, gm)?,
            Err(_) => tree.remove_property(root, PropertyType::Game)?,
        };
        match Property::for_board_size(base.board_size) {
            Ok(sz) if base.board_size != BoardSize::default_for(base.game_type) => {
                tree.set_property(root, sz)?
            }
            _ => tree.remove_property(root, PropertyType::Size)?,
        };

        for property_type in TEXT_PROPERTIES {
            let text = base.text_field(property_type).map(|t| escape(t, false));
            write_raw(tree, target, property_type, text, context)?;
        }
        let time_limit = base.time_limit.map(format_real);
        write_raw(tree, target, PropertyType::TimeLimit, time_limit, context)?;

        if let GameInfo::Go(go) = self {
            let handicap = go.handicap.map(|h| h.to_string());
            write_raw(tree, target, PropertyType::Handicap, handicap, context)?;
            let komi = go.komi.map(format_real);
            write_raw(tree, target, PropertyType::Komi, komi, context)?;
        }
        Ok(())
    }
}

fn report(name: &str, text: &str, valid: bool) {
    if !text.is_empty() && !valid {
        debug!(property = name, value = text, "game info value does not decompose");
    }
}

fn text_of(property: &Property) -> String {
    property
        .first_single()
        .and_then(SingleValue::as_any_text)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Sets the property to the raw value, or removes it when the value is
/// absent or empty.
fn write_raw(
    tree: &mut GameTree,
    node: NodeId,
    property_type: PropertyType,
    raw: Option<String>,
    (game_type, board_size): (GameType, BoardSize),
) -> Result<(), TreeError> {
    match (raw, property_type.name()) {
        (Some(raw), Some(name)) if !raw.is_empty() => {
            let property = Property::from_raw(name, &[raw], game_type, board_size);
            tree.set_property(node, property)?;
        }
        _ => {
            tree.remove_property(node, property_type)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{GameResultType, GoRankType, GoRatingType, GoRulesetType, WinType};

    fn set(tree: &mut GameTree, node: NodeId, name: &str, value: &str) {
        let property = Property::from_raw(name, &[value], GameType::Go, BoardSize::DEFAULT_GO);
        tree.set_property(node, property).unwrap();
    }

    #[test]
    fn test_read_go_info_from_root() {
        let mut tree = GameTree::new();
        let root = tree.create_node();
        set(&mut tree, root, "GM", "1");
        set(&mut tree, root, "SZ", "13");
        set(&mut tree, root, "PB", "Honinbo\\] Shusaku");
        set(&mut tree, root, "DT", "1846-09-11,12");
        set(&mut tree, root, "RE", "B+2");
        set(&mut tree, root, "KM", "6.5");
        set(&mut tree, root, "HA", "2");
        set(&mut tree, root, "BR", "4d");
        set(&mut tree, root, "RU", "Japanese");

        let info = GameInfo::from_nodes(&tree, root, None).unwrap();
        assert_eq!(info.board_size(), BoardSize::square(13));
        let go = info.as_go().unwrap();
        assert_eq!(go.base.black_player, "Honinbo] Shusaku");
        assert_eq!(go.base.dates().len(), 2);
        let result = go.base.game_result();
        assert_eq!(result.result_type, GameResultType::BlackWin);
        assert_eq!(result.win_type, WinType::WinWithScore);
        assert_eq!(go.komi, Some(6.5));
        assert_eq!(go.handicap, Some(2));
        assert_eq!(go.black_player_rank().rank_type, GoRankType::Dan);
        assert_eq!(go.ruleset().ruleset_type, GoRulesetType::Japanese);
    }

    #[test]
    fn test_generic_variant_for_other_games() {
        let mut tree = GameTree::new();
        let root = tree.create_node();
        set(&mut tree, root, "GM", "3");
        let info = GameInfo::from_nodes(&tree, root, None).unwrap();
        assert!(info.as_go().is_none());
        assert_eq!(info.game_type(), GameType::Chess);
        assert_eq!(info.board_size(), BoardSize::DEFAULT_CHESS);
    }

    #[test]
    fn test_invalid_values_keep_text() {
        let mut tree = GameTree::new();
        let root = tree.create_node();
        set(&mut tree, root, "DT", "last tuesday");
        let info = GameInfo::from_nodes(&tree, root, None).unwrap();
        assert_eq!(info.base().date, "last tuesday");
        assert!(info.base().dates().is_empty());
    }

    #[test]
    fn test_game_info_node() {
        let mut tree = GameTree::new();
        let root = tree.create_node();
        let info_node = tree.create_node();
        tree.builder().append_child(info_node, root).unwrap();
        set(&mut tree, root, "PW", "ignored");
        set(&mut tree, info_node, "PW", "Genan Inseki");

        let info = GameInfo::from_nodes(&tree, root, Some(info_node)).unwrap();
        assert_eq!(info.base().white_player, "Genan Inseki");
    }

    #[test]
    fn test_write_back() {
        let mut tree = GameTree::new();
        let root = tree.create_node();
        let info_node = tree.create_node();
        tree.builder().append_child(info_node, root).unwrap();
        set(&mut tree, info_node, "EV", "old event");

        let mut info = GameInfo::new(GameType::Go);
        info.base_mut().board_size = BoardSize::square(9);
        info.base_mut().game_name = "a]b".to_string();
        info.base_mut().set_dates(&[
            Date { year: 2020, month: 2, day: 28 },
            Date { year: 2020, month: 2, day: 29 },
        ]);
        let go = info.as_go_mut().unwrap();
        go.komi = Some(0.5);
        go.set_black_player_rank(&GoPlayerRank::new(3, GoRankType::Kyu, GoRatingType::Established));
        info.write_to(&mut tree, root, Some(info_node)).unwrap();

        let gm = tree.property(root, PropertyType::Game).unwrap().unwrap();
        assert_eq!(gm.to_string(), "GM[1]");
        let sz = tree.property(root, PropertyType::Size).unwrap().unwrap();
        assert_eq!(sz.to_string(), "SZ[9]");
        let gn = tree.property(info_node, PropertyType::GameName).unwrap().unwrap();
        assert_eq!(gn.to_string(), "GN[a\\]b]");
        let dt = tree.property(info_node, PropertyType::Date).unwrap().unwrap();
        assert_eq!(dt.to_string(), "DT[2020-02-28,29]");
        let br = tree.property(info_node, PropertyType::BlackRank).unwrap().unwrap();
        assert_eq!(br.to_string(), "BR[3k*]");
        let km = tree.property(info_node, PropertyType::Komi).unwrap().unwrap();
        assert_eq!(km.to_string(), "KM[0.5]");
        // Empty fields remove what was there.
        assert!(tree.property(info_node, PropertyType::Event).unwrap().is_none());
        assert!(tree.property(info_node, PropertyType::Handicap).unwrap().is_none());

        let read = GameInfo::from_nodes(&tree, root, Some(info_node)).unwrap();
        assert_eq!(read, info);
    }

    #[test]
    fn test_default_board_size_is_not_written() {
        let mut tree = GameTree::new();
        let root = tree.create_node();
        set(&mut tree, root, "SZ", "13");
        GameInfo::new(GameType::Go).write_to(&mut tree, root, None).unwrap();
        assert!(tree.property(root, PropertyType::Size).unwrap().is_none());
    }
}
