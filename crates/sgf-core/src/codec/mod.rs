//! Codecs between raw SGF value strings and structured values.
//!
//! Every codec is a pure pair of functions. Decomposition never fails:
//! malformed input is reported through a validity flag (or an empty date
//! list). Composition of an invalid record yields the empty string, which is
//! SGF's "None" value.

pub mod coord;
pub mod date;
pub mod rank;
pub mod result;
pub mod round;
pub mod ruleset;

pub use coord::{board_fits_notation, decode_position, encode_position, GoPoint, Notation};
pub use date::{compose_date, decompose_date, Date};
pub use rank::{
    compose_go_player_rank, decompose_go_player_rank, GoPlayerRank, GoRankType, GoRatingType,
};
pub use result::{
    compose_game_result, decompose_game_result, GameResult, GameResultType, WinType,
};
pub use round::{compose_round_information, decompose_round_information, RoundInformation};
pub use ruleset::{compose_go_ruleset, decompose_go_ruleset, GoRuleset, GoRulesetType};
