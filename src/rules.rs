use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TieBreakTarget {
    Seven,
    Ten,  // super tie-break, typically replacing a third set
}

impl TieBreakTarget {
    pub fn points(self) -> u32 {
        match self {
            TieBreakTarget::Seven => 7,
            TieBreakTarget::Ten => 10,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MatchRules {
    // Golden point: 40-40 is decided by the next point instead of advantage play.
    pub golden_point: bool,
    pub tie_break: TieBreakTarget,
}

impl MatchRules {
    pub fn padel_default() -> Self {
        Self {
            golden_point: true,
            tie_break: TieBreakTarget::Seven,
        }
    }

    pub fn classic_tennis() -> Self {
        Self {
            golden_point: false,
            tie_break: TieBreakTarget::Seven,
        }
    }
}
