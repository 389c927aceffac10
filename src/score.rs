use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::rules::MatchRules;
use crate::side::Side;


// Position on the point ladder of a regular game. `Advantage` is reachable
// only when the match is played without golden point.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum GamePoint {
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
}

impl GamePoint {
    pub fn label(self) -> &'static str {
        match self {
            GamePoint::Love => "0",
            GamePoint::Fifteen => "15",
            GamePoint::Thirty => "30",
            GamePoint::Forty => "40",
            GamePoint::Advantage => "AD",
        }
    }

    fn next(self) -> Self {
        match self {
            GamePoint::Love => GamePoint::Fifteen,
            GamePoint::Fifteen => GamePoint::Thirty,
            _ => GamePoint::Forty,
        }
    }

    fn prev(self) -> Self {
        match self {
            GamePoint::Advantage => GamePoint::Forty,
            GamePoint::Forty => GamePoint::Thirty,
            GamePoint::Thirty => GamePoint::Fifteen,
            _ => GamePoint::Love,
        }
    }
}

// Full score of a match in progress. An immutable value: every transition
// consumes the old score and returns a new one.
//
// Sets accumulate without an upper bound: the counter has no notion of a
// match being over. Ending the match is the caller's decision.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MatchScore {
    pub rules: MatchRules,
    pub sets: EnumMap<Side, u32>,
    pub games: EnumMap<Side, u32>,
    pub points: EnumMap<Side, GamePoint>,
    // `Some` exactly while a 6-6 tie-break game is in progress.
    pub tie_break: Option<EnumMap<Side, u32>>,
}

impl MatchScore {
    pub fn new(rules: MatchRules) -> Self {
        MatchScore {
            rules,
            sets: enum_map! { _ => 0 },
            games: enum_map! { _ => 0 },
            points: enum_map! { _ => GamePoint::Love },
            tie_break: None,
        }
    }

    pub fn in_tie_break(&self) -> bool { self.tie_break.is_some() }

    // What the scoreboard shows for `side` in the points position: the raw
    // counter during a tie-break, the ladder label otherwise.
    pub fn point_label(&self, side: Side) -> String {
        match self.tie_break {
            Some(tb) => tb[side].to_string(),
            None => self.points[side].label().to_owned(),
        }
    }

    pub fn add_point(self, side: Side) -> Self {
        match self.tie_break {
            Some(tb) => self.add_tie_break_point(side, tb),
            None => self.add_game_point(side),
        }
    }

    // Takes back the last point of `side`: one step down the ladder (AD -> 40,
    // ..., 15 -> 0) or one off the tie-break counter, clamped at zero. Not an
    // inverse of winning a game: game and set counters are never decremented.
    pub fn subtract_point(mut self, side: Side) -> Self {
        match self.tie_break.as_mut() {
            Some(tb) => tb[side] = tb[side].saturating_sub(1),
            None => self.points[side] = self.points[side].prev(),
        }
        self
    }

    fn add_game_point(mut self, side: Side) -> Self {
        let my = self.points[side];
        let opp = self.points[side.other()];

        if self.rules.golden_point {
            // No advantage state: 40 wins the game outright, 40-40 included.
            if my == GamePoint::Forty {
                return self.win_game(side);
            }
            self.points[side] = my.next();
            return self;
        }

        match (my, opp) {
            (GamePoint::Forty, GamePoint::Forty) => {
                self.points[side] = GamePoint::Advantage;
                self
            }
            (GamePoint::Advantage, _) => self.win_game(side),
            (_, GamePoint::Advantage) => {
                // Scoring against an advantage returns the game to deuce. The
                // only transition where one side's point touches the other
                // side's score.
                self.points[side] = GamePoint::Forty;
                self.points[side.other()] = GamePoint::Forty;
                self
            }
            (GamePoint::Forty, _) => self.win_game(side),
            _ => {
                self.points[side] = my.next();
                self
            }
        }
    }

    fn add_tie_break_point(mut self, side: Side, mut tb: EnumMap<Side, u32>) -> Self {
        tb[side] += 1;
        self.tie_break = Some(tb);
        let target = self.rules.tie_break.points();
        if tb[side] >= target && tb[side] >= tb[side.other()] + 2 {
            return self.win_tie_break(side);
        }
        self
    }

    fn win_game(mut self, side: Side) -> Self {
        self.games[side] += 1;
        self.points = enum_map! { _ => GamePoint::Love };
        if self.games.values().all(|&games| games == 6) {
            // 6-6: the set is decided by a tie-break game.
            self.tie_break = Some(enum_map! { _ => 0 });
            return self;
        }
        self.check_set_win()
    }

    fn win_tie_break(mut self, side: Side) -> Self {
        // Tie-breaks start from 6-6, so the winner takes the set 7-6.
        self.games[side] = 7;
        self.games[side.other()] = 6;
        self.points = enum_map! { _ => GamePoint::Love };
        self.tie_break = None;
        self.check_set_win()
    }

    fn check_set_win(self) -> Self {
        let set_won = |side: Side| {
            let my = self.games[side];
            let opp = self.games[side.other()];
            (my >= 6 && my >= opp + 2) || (my == 7 && (opp == 5 || opp == 6))
        };
        match Side::iter().find(|&side| set_won(side)) {
            Some(side) => self.win_set(side),
            None => self,
        }
    }

    fn win_set(mut self, side: Side) -> Self {
        self.sets[side] += 1;
        self.games = enum_map! { _ => 0 };
        self.points = enum_map! { _ => GamePoint::Love };
        self.tie_break = None;
        self
    }
}
