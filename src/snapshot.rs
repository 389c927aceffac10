use enum_map::{Enum, enum_map};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rules::{MatchRules, TieBreakTarget};
use crate::score::{GamePoint, MatchScore};
use crate::side::Side;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CourtColor {
    Blue,
    Orange,
    Green,
    Purple,
}

// Presentation preferences carried next to the score. The engine never reads
// them; they ride along so that a reset or a restart preserves them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DisplayPrefs {
    pub keep_screen_on: bool,
    pub court_color: CourtColor,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        DisplayPrefs {
            keep_screen_on: true,
            court_color: CourtColor::Blue,
        }
    }
}

// The durable form of a match: a flat record where every field falls back to
// a default independently, so a partially written or outdated snapshot still
// loads instead of wiping the match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct MatchSnapshot {
    pub sets_a: u32,
    pub sets_b: u32,
    pub games_a: u32,
    pub games_b: u32,
    pub points_a: u32,
    pub points_b: u32,
    pub tb_points_a: u32,
    pub tb_points_b: u32,
    pub in_tie_break: bool,
    pub golden_point: bool,
    pub tie_break_target: TieBreakTarget,
    pub keep_screen_on: bool,
    pub court_color: CourtColor,
}

impl Default for MatchSnapshot {
    fn default() -> Self {
        MatchSnapshot::from_state(&MatchScore::new(MatchRules::padel_default()), DisplayPrefs::default())
    }
}

impl MatchSnapshot {
    pub fn from_state(score: &MatchScore, prefs: DisplayPrefs) -> Self {
        let tb = score.tie_break.unwrap_or(enum_map! { _ => 0 });
        MatchSnapshot {
            sets_a: score.sets[Side::A],
            sets_b: score.sets[Side::B],
            games_a: score.games[Side::A],
            games_b: score.games[Side::B],
            points_a: score.points[Side::A].into_usize() as u32,
            points_b: score.points[Side::B].into_usize() as u32,
            tb_points_a: tb[Side::A],
            tb_points_b: tb[Side::B],
            in_tie_break: score.in_tie_break(),
            golden_point: score.rules.golden_point,
            tie_break_target: score.rules.tie_break,
            keep_screen_on: prefs.keep_screen_on,
            court_color: prefs.court_color,
        }
    }

    pub fn to_state(&self) -> (MatchScore, DisplayPrefs) {
        let score = MatchScore {
            rules: MatchRules {
                golden_point: self.golden_point,
                tie_break: self.tie_break_target,
            },
            sets: enum_map! { Side::A => self.sets_a, Side::B => self.sets_b },
            games: enum_map! { Side::A => self.games_a, Side::B => self.games_b },
            points: enum_map! {
                Side::A => point_from_index(self.points_a),
                Side::B => point_from_index(self.points_b),
            },
            tie_break: self
                .in_tie_break
                .then(|| enum_map! { Side::A => self.tb_points_a, Side::B => self.tb_points_b }),
        };
        let prefs = DisplayPrefs {
            keep_screen_on: self.keep_screen_on,
            court_color: self.court_color,
        };
        (score, prefs)
    }

    // Reads a snapshot the way it was persisted: key by key, substituting the
    // default for everything missing or unreadable. There is no failure mode;
    // the worst corruption costs the affected fields, not the match.
    pub fn from_json(value: &Value) -> Self {
        let mut snapshot = MatchSnapshot::default();
        let Some(fields) = value.as_object() else {
            if !value.is_null() {
                warn!("Snapshot is not an object; starting from defaults");
            }
            return snapshot;
        };
        read_field(fields, "sets_a", &mut snapshot.sets_a);
        read_field(fields, "sets_b", &mut snapshot.sets_b);
        read_field(fields, "games_a", &mut snapshot.games_a);
        read_field(fields, "games_b", &mut snapshot.games_b);
        read_field(fields, "points_a", &mut snapshot.points_a);
        read_field(fields, "points_b", &mut snapshot.points_b);
        read_field(fields, "tb_points_a", &mut snapshot.tb_points_a);
        read_field(fields, "tb_points_b", &mut snapshot.tb_points_b);
        read_field(fields, "in_tie_break", &mut snapshot.in_tie_break);
        read_field(fields, "golden_point", &mut snapshot.golden_point);
        read_field(fields, "tie_break_target", &mut snapshot.tie_break_target);
        read_field(fields, "keep_screen_on", &mut snapshot.keep_screen_on);
        read_field(fields, "court_color", &mut snapshot.court_color);
        snapshot
    }
}

fn point_from_index(index: u32) -> GamePoint {
    match usize::try_from(index) {
        Ok(index) if index < GamePoint::LENGTH => GamePoint::from_usize(index),
        _ => {
            warn!("Ignoring out-of-range point index {index}");
            GamePoint::Love
        }
    }
}

fn read_field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str, target: &mut T) {
    let Some(value) = fields.get(key) else {
        return;
    };
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => *target = parsed,
        Err(_) => warn!("Ignoring unreadable snapshot field '{key}': {value}"),
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn default_snapshot_is_a_fresh_padel_match() {
        let snapshot = MatchSnapshot::default();
        let (score, prefs) = snapshot.to_state();
        assert_eq!(score, MatchScore::new(MatchRules::padel_default()));
        assert_eq!(prefs, DisplayPrefs::default());
    }

    #[test]
    fn state_round_trip() {
        let score = MatchScore {
            rules: MatchRules { golden_point: false, tie_break: TieBreakTarget::Ten },
            sets: enum_map! { Side::A => 1, Side::B => 2 },
            games: enum_map! { Side::A => 4, Side::B => 5 },
            points: enum_map! { Side::A => GamePoint::Advantage, Side::B => GamePoint::Forty },
            tie_break: None,
        };
        let prefs = DisplayPrefs { keep_screen_on: false, court_color: CourtColor::Green };
        assert_eq!(MatchSnapshot::from_state(&score, prefs).to_state(), (score, prefs));
    }

    #[test]
    fn tie_break_round_trip() {
        let score = MatchScore {
            games: enum_map! { _ => 6 },
            tie_break: Some(enum_map! { Side::A => 8, Side::B => 7 }),
            ..MatchScore::new(MatchRules::padel_default())
        };
        let prefs = DisplayPrefs::default();
        let snapshot = MatchSnapshot::from_state(&score, prefs);
        assert!(snapshot.in_tie_break);
        assert_eq!(snapshot.tb_points_a, 8);
        assert_eq!(snapshot.to_state(), (score, prefs));
    }

    #[test]
    fn stale_tie_break_counters_are_dropped() {
        let snapshot = MatchSnapshot {
            in_tie_break: false,
            tb_points_a: 3,
            tb_points_b: 1,
            ..MatchSnapshot::default()
        };
        let (score, _) = snapshot.to_state();
        assert_eq!(score.tie_break, None);
    }

    #[test]
    fn json_round_trip() {
        let snapshot = MatchSnapshot {
            sets_a: 2,
            games_b: 3,
            points_a: 4,
            golden_point: false,
            tie_break_target: TieBreakTarget::Ten,
            court_color: CourtColor::Purple,
            ..MatchSnapshot::default()
        };
        let value = serde_json::to_value(snapshot).unwrap();
        assert_eq!(MatchSnapshot::from_json(&value), snapshot);
    }

    #[test]
    fn empty_record_loads_as_defaults() {
        assert_eq!(MatchSnapshot::from_json(&json!({})), MatchSnapshot::default());
        assert_eq!(MatchSnapshot::from_json(&Value::Null), MatchSnapshot::default());
    }

    #[test]
    fn unreadable_fields_fall_back_independently() {
        let value = json!({
            "sets_a": "three",
            "games_a": -2,
            "points_b": 2,
            "golden_point": false,
            "tie_break_target": "Eleven",
            "court_color": "Orange",
        });
        let snapshot = MatchSnapshot::from_json(&value);
        assert_eq!(snapshot.sets_a, 0);
        assert_eq!(snapshot.games_a, 0);
        assert_eq!(snapshot.points_b, 2);
        assert!(!snapshot.golden_point);
        assert_eq!(snapshot.tie_break_target, TieBreakTarget::Seven);
        assert_eq!(snapshot.court_color, CourtColor::Orange);
    }

    #[test]
    fn out_of_range_point_index_loads_as_love() {
        let snapshot = MatchSnapshot { points_a: 9, ..MatchSnapshot::default() };
        let (score, _) = snapshot.to_state();
        assert_eq!(score.points[Side::A], GamePoint::Love);
    }
}
