use enum_map::enum_map;
use padel_counter::{
    CourtColor, DisplayPrefs, MatchRules, MatchScore, MatchSnapshot, Side, TieBreakTarget,
};
use pretty_assertions::assert_eq;


// The on-disk key set is a contract with older snapshots; a rename here is a
// data-loss bug, not a refactoring.
#[test]
fn documented_key_set_loads() {
    let text = r#"{
        "sets_a": 1, "sets_b": 0,
        "games_a": 6, "games_b": 6,
        "points_a": 0, "points_b": 0,
        "tb_points_a": 3, "tb_points_b": 5,
        "in_tie_break": true,
        "golden_point": false,
        "tie_break_target": "Ten",
        "keep_screen_on": false,
        "court_color": "Green"
    }"#;
    let value = serde_json::from_str(text).unwrap();
    let (score, prefs) = MatchSnapshot::from_json(&value).to_state();
    assert_eq!(score.sets[Side::A], 1);
    assert_eq!(score.tie_break, Some(enum_map! { Side::A => 3, Side::B => 5 }));
    assert_eq!(score.rules.tie_break, TieBreakTarget::Ten);
    assert!(!score.rules.golden_point);
    assert_eq!(prefs.court_color, CourtColor::Green);
    assert!(!prefs.keep_screen_on);
}

#[test]
fn played_state_survives_a_text_round_trip() {
    let mut score = MatchScore::new(MatchRules::classic_tennis());
    for _ in 0..3 {
        score = score.add_point(Side::A);
    }
    score = score.add_point(Side::B);
    let prefs = DisplayPrefs { keep_screen_on: false, court_color: CourtColor::Orange };

    let snapshot = MatchSnapshot::from_state(&score, prefs);
    let text = serde_json::to_string(&snapshot).unwrap();
    let value = serde_json::from_str(&text).unwrap();
    assert_eq!(MatchSnapshot::from_json(&value), snapshot);
    assert_eq!(MatchSnapshot::from_json(&value).to_state(), (score, prefs));
}

#[test]
fn snapshot_of_defaults_matches_a_new_default_match() {
    let (score, prefs) = MatchSnapshot::default().to_state();
    assert_eq!(score, MatchScore::new(MatchRules::padel_default()));
    assert_eq!(prefs, DisplayPrefs::default());
}
