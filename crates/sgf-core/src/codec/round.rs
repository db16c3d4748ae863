//! RO values: round number and type.
//!
//! The suggested form is `number (type)`, e.g. `5 (final)`, `3 (playoff)`.
//! A bare number is accepted too.

/// A decomposed RO value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RoundInformation {
    pub round_number: String,
    pub round_type: String,
    pub is_valid: bool,
}

impl RoundInformation {
    /// Creates a record, valid if the round number is a non-empty run of
    /// digits and the round type contains no parentheses.
    pub fn new(round_number: impl Into<String>, round_type: impl Into<String>) -> Self {
        let round_number = round_number.into();
        let round_type = round_type.into();
        let is_valid = is_round_number(&round_number)
            && !round_type.contains(['(', ')'])
            && round_type.trim() == round_type;
        Self {
            round_number,
            round_type,
            is_valid,
        }
    }
}

fn is_round_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Decomposes a raw RO value. Never fails: a value not in the suggested
/// form yields a record with `is_valid == false`.
pub fn decompose_round_information(raw: &str) -> RoundInformation {
    let parsed = match raw.split_once(' ') {
        Some((number, rest)) => rest
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .filter(|t| !t.is_empty())
            .map(|t| RoundInformation::new(number, t)),
        None => Some(RoundInformation::new(raw, "")),
    };
    match parsed {
        Some(info) if info.is_valid => info,
        _ => RoundInformation::default(),
    }
}

/// Composes a raw RO value. An invalid record yields the empty string.
pub fn compose_round_information(info: &RoundInformation) -> String {
    if !info.is_valid || !is_round_number(&info.round_number) {
        return String::new();
    }
    if info.round_type.is_empty() {
        info.round_number.clone()
    } else {
        format!("{} ({})", info.round_number, info.round_type)
    }
}
