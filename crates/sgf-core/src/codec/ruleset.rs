//! RU values for Go: the rule sets SGF names.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoRulesetType {
    /// American Go Association rules, `AGA`.
    Aga,
    /// Ing's Goe rules, `GOE`.
    Ing,
    /// Nihon Ki-in rules, `Japanese`.
    Japanese,
    /// New Zealand rules, `NZ`.
    NewZealand,
}

impl GoRulesetType {
    /// The identifier SGF uses for the rule set.
    pub fn identifier(self) -> &'static str {
        match self {
            GoRulesetType::Aga => "AGA",
            GoRulesetType::Ing => "GOE",
            GoRulesetType::Japanese => "Japanese",
            GoRulesetType::NewZealand => "NZ",
        }
    }

    const ALL: [GoRulesetType; 4] = [
        GoRulesetType::Aga,
        GoRulesetType::Ing,
        GoRulesetType::Japanese,
        GoRulesetType::NewZealand,
    ];
}

/// A decomposed RU value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GoRuleset {
    pub ruleset_type: GoRulesetType,
    pub is_valid: bool,
}

impl Default for GoRuleset {
    fn default() -> Self {
        Self {
            ruleset_type: GoRulesetType::Aga,
            is_valid: false,
        }
    }
}

impl GoRuleset {
    pub fn new(ruleset_type: GoRulesetType) -> Self {
        Self {
            ruleset_type,
            is_valid: true,
        }
    }
}

/// Decomposes a raw RU value. Anything but one of the four identifiers
/// yields a record with `is_valid == false`.
pub fn decompose_go_ruleset(raw: &str) -> GoRuleset {
    GoRulesetType::ALL
        .iter()
        .find(|t| t.identifier() == raw)
        .map(|t| GoRuleset::new(*t))
        .unwrap_or_default()
}

/// Composes a raw RU value. An invalid record yields the empty string.
pub fn compose_go_ruleset(ruleset: &GoRuleset) -> String {
    if ruleset.is_valid {
        ruleset.ruleset_type.identifier().to_string()
    } else {
        String::new()
    }
}
