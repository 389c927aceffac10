use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, event, execute, terminal};
use padel_counter::{CourtColor, MatchScore, MatchSnapshot, Side};
use scopeguard::defer;

use crate::persistence::SnapshotStore;
use crate::tui;


pub struct CounterConfig {
    pub snapshot_path: PathBuf,
}

const KEY_HELP: &str = "\
a/b: point for A/B   z/x: take back a point
n: restart match     c: court color     q: quit";

pub fn run(config: CounterConfig) -> anyhow::Result<()> {
    let store = SnapshotStore::new(config.snapshot_path);
    let (mut score, mut prefs) = store.load().to_state();

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
    defer! {
        execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen).unwrap();
        terminal::disable_raw_mode().unwrap();
    };

    loop {
        execute!(stdout, cursor::MoveTo(0, 0), terminal::Clear(terminal::ClearType::All))?;
        let screen = format!("{}\n\n{}", tui::render_scoreboard(&score, prefs), KEY_HELP);
        for (index, line) in screen.lines().enumerate() {
            execute!(stdout, cursor::MoveTo(0, index as u16))?;
            write!(stdout, "{line}")?;
        }
        stdout.flush()?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }
        let updated = match key.code {
            KeyCode::Char('a') => Some(score.add_point(Side::A)),
            KeyCode::Char('b') => Some(score.add_point(Side::B)),
            KeyCode::Char('z') => Some(score.subtract_point(Side::A)),
            KeyCode::Char('x') => Some(score.subtract_point(Side::B)),
            KeyCode::Char('n') => Some(MatchScore::new(score.rules)),
            KeyCode::Char('c') => {
                prefs.court_color = next_court_color(prefs.court_color);
                Some(score)
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => None,
        };
        if let Some(updated) = updated {
            score = updated;
            // The point only counts once it is on disk.
            store.save(&MatchSnapshot::from_state(&score, prefs))?;
        }
    }
    Ok(())
}

fn next_court_color(color: CourtColor) -> CourtColor {
    match color {
        CourtColor::Blue => CourtColor::Orange,
        CourtColor::Orange => CourtColor::Green,
        CourtColor::Green => CourtColor::Purple,
        CourtColor::Purple => CourtColor::Blue,
    }
}
