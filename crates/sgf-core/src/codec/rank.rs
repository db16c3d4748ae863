//! BR/WR values for Go: player ranks.
//!
//! The suggested form is a number followed by `k`/`kyu` or `d`/`dan`; the
//! professional-dan shorthand is `p`/`pro`. Either may be followed by `?`
//! (uncertain) or `*` (established). Whitespace between number and rank
//! type and upper-case letters are tolerated on input; output always uses
//! the compact form.

/// Kyu: 1..=30, dan and professional dan: 1..=9.
const MAX_KYU: i64 = 30;
const MAX_DAN: i64 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoRankType {
    Kyu,
    Dan,
    ProfessionalDan,
}

impl GoRankType {
    fn max_rank(self) -> i64 {
        match self {
            GoRankType::Kyu => MAX_KYU,
            GoRankType::Dan | GoRankType::ProfessionalDan => MAX_DAN,
        }
    }

    fn suffix(self) -> char {
        match self {
            GoRankType::Kyu => 'k',
            GoRankType::Dan => 'd',
            GoRankType::ProfessionalDan => 'p',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoRatingType {
    /// `?`
    Uncertain,
    /// `*`
    Established,
    Unspecified,
}

/// A decomposed Go player rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoPlayerRank {
    pub rank: i64,
    pub rank_type: GoRankType,
    pub rating_type: GoRatingType,
    pub is_valid: bool,
}

impl Default for GoPlayerRank {
    fn default() -> Self {
        Self {
            rank: 0,
            rank_type: GoRankType::Kyu,
            rating_type: GoRatingType::Unspecified,
            is_valid: false,
        }
    }
}

impl GoPlayerRank {
    /// Creates a rank, valid if `rank` is in range for `rank_type`.
    pub fn new(rank: i64, rank_type: GoRankType, rating_type: GoRatingType) -> Self {
        Self {
            rank,
            rank_type,
            rating_type,
            is_valid: (1..=rank_type.max_rank()).contains(&rank),
        }
    }
}

/// Decomposes a raw BR or WR value. Never fails: an unrecognized value
/// yields a record with `is_valid == false`.
pub fn decompose_go_player_rank(raw: &str) -> GoPlayerRank {
    let (body, rating_type) = if let Some(body) = raw.strip_suffix('?') {
        (body, GoRatingType::Uncertain)
    } else if let Some(body) = raw.strip_suffix('*') {
        (body, GoRatingType::Established)
    } else {
        (raw, GoRatingType::Unspecified)
    };

    let digit_count = body.bytes().take_while(|b| b.is_ascii_digit()).count();
    let (digits, token) = body.split_at(digit_count);
    if digits.is_empty() || digits.len() > 2 {
        return GoPlayerRank::default();
    }
    let rank_type = match token.trim().to_ascii_lowercase().as_str() {
        "k" | "kyu" => GoRankType::Kyu,
        "d" | "dan" => GoRankType::Dan,
        "p" | "pro" => GoRankType::ProfessionalDan,
        _ => return GoPlayerRank::default(),
    };
    match digits.parse::<i64>() {
        Ok(rank) => {
            let parsed = GoPlayerRank::new(rank, rank_type, rating_type);
            if parsed.is_valid { parsed } else { GoPlayerRank::default() }
        }
        Err(_) => GoPlayerRank::default(),
    }
}

/// Composes a raw BR or WR value. An invalid record yields the empty string.
pub fn compose_go_player_rank(rank: &GoPlayerRank) -> String {
    if !rank.is_valid || !(1..=rank.rank_type.max_rank()).contains(&rank.rank) {
        return String::new();
    }
    let rating = match rank.rating_type {
        GoRatingType::Uncertain => "?",
        GoRatingType::Established => "*",
        GoRatingType::Unspecified => "",
    };
    format!("{}{}{}", rank.rank, rank.rank_type.suffix(), rating)
}
