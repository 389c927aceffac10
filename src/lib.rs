#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod rules;
pub mod score;
pub mod side;
pub mod snapshot;

pub use rules::{MatchRules, TieBreakTarget};
pub use score::{GamePoint, MatchScore};
pub use side::Side;
pub use snapshot::{CourtColor, DisplayPrefs, MatchSnapshot};
