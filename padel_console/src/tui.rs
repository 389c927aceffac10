use console::Style;
use itertools::Itertools;
use strum::IntoEnumIterator;

use padel_counter::{CourtColor, DisplayPrefs, MatchScore, Side};


const CELL_WIDTH: usize = 7;

fn court_style(color: CourtColor) -> Style {
    match color {
        CourtColor::Blue => Style::new().white().on_blue(),
        CourtColor::Orange => Style::new().black().on_color256(208),
        CourtColor::Green => Style::new().black().on_green(),
        CourtColor::Purple => Style::new().white().on_color256(99),
    }
}

pub fn render_scoreboard(score: &MatchScore, prefs: DisplayPrefs) -> String {
    let header = row("", "SETS", "GAMES", "POINTS");
    let mut lines = vec![court_style(prefs.court_color).apply_to(header).to_string()];
    for side in Side::iter() {
        lines.push(row(
            &format!("{side:?}"),
            &score.sets[side].to_string(),
            &score.games[side].to_string(),
            &score.point_label(side),
        ));
    }
    lines.push(render_mode_line(score));
    lines.iter().join("\n")
}

fn row(label: &str, sets: &str, games: &str, points: &str) -> String {
    format!(
        "{:<4}{:>width$}{:>width$}{:>width$}",
        label,
        sets,
        games,
        points,
        width = CELL_WIDTH
    )
}

fn render_mode_line(score: &MatchScore) -> String {
    let scoring = if score.rules.golden_point { "golden point" } else { "advantage" };
    let tie_break = format!("tie-break to {}", score.rules.tie_break.points());
    if score.in_tie_break() {
        // The tie-break decides the set; make its state hard to miss.
        Style::new().reverse().apply_to(format!("{scoring} | {tie_break} IN PROGRESS")).to_string()
    } else {
        Style::new().dim().apply_to(format!("{scoring} | {tie_break}")).to_string()
    }
}


#[cfg(test)]
mod tests {
    use padel_counter::MatchRules;

    use super::*;

    #[test]
    fn scoreboard_shows_all_counters() {
        let score = MatchScore::new(MatchRules::padel_default())
            .add_point(Side::A)
            .add_point(Side::A)
            .add_point(Side::B);
        let rendered = render_scoreboard(&score, DisplayPrefs::default());
        assert!(rendered.contains("SETS"));
        assert!(rendered.contains("30"));
        assert!(rendered.contains("15"));
        assert!(rendered.contains("golden point"));
    }
}
