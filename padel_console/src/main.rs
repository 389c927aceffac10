#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod counter_main;
mod persistence;
mod tui;

use std::path::PathBuf;

use clap::{Arg, Command, arg};
use padel_counter::{CourtColor, MatchRules, MatchScore, MatchSnapshot, TieBreakTarget};

use crate::persistence::SnapshotStore;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let snapshot_arg = || -> Arg {
        arg!(--snapshot <file> "Path to the snapshot file").default_value("padel_counter.json")
    };

    let matches = Command::new("Padel counter")
        .version(clap::crate_version!())
        .about("Padel/tennis scoreboard console app")
        .subcommand_required(true)
        .subcommand(Command::new("run").about("Run the interactive counter").arg(snapshot_arg()))
        .subcommand(
            Command::new("show").about("Print the current score and exit").arg(snapshot_arg()),
        )
        .subcommand(
            Command::new("new")
                .about("Start a new match with the given rule variants")
                .arg(snapshot_arg())
                .arg(
                    arg!(--"tie-break" <target> "Points needed to win the deciding tie-break")
                        .value_parser(["7", "10"])
                        .default_value("7"),
                )
                .arg(arg!(--"ad-scoring" "Advantage scoring instead of golden point"))
                .arg(
                    arg!(--court <color> "Court color")
                        .value_parser(["blue", "orange", "green", "purple"]),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("run", sub_matches)) => counter_main::run(counter_main::CounterConfig {
            snapshot_path: snapshot_path(sub_matches),
        }),
        Some(("show", sub_matches)) => {
            let store = SnapshotStore::new(snapshot_path(sub_matches));
            let (score, prefs) = store.load().to_state();
            println!("{}", tui::render_scoreboard(&score, prefs));
            Ok(())
        }
        Some(("new", sub_matches)) => {
            let store = SnapshotStore::new(snapshot_path(sub_matches));
            // Rule variants are chosen per match; display preferences survive
            // the reset unless overridden.
            let (_, mut prefs) = store.load().to_state();
            let rules = MatchRules {
                golden_point: !sub_matches.get_flag("ad-scoring"),
                tie_break: match sub_matches.get_one::<String>("tie-break").unwrap().as_str() {
                    "7" => TieBreakTarget::Seven,
                    "10" => TieBreakTarget::Ten,
                    _ => unreachable!("Guaranteed by the value parser"),
                },
            };
            if let Some(court) = sub_matches.get_one::<String>("court") {
                prefs.court_color = match court.as_str() {
                    "blue" => CourtColor::Blue,
                    "orange" => CourtColor::Orange,
                    "green" => CourtColor::Green,
                    "purple" => CourtColor::Purple,
                    _ => unreachable!("Guaranteed by the value parser"),
                };
            }
            let score = MatchScore::new(rules);
            store.save(&MatchSnapshot::from_state(&score, prefs))?;
            println!("{}", tui::render_scoreboard(&score, prefs));
            Ok(())
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}

fn snapshot_path(sub_matches: &clap::ArgMatches) -> PathBuf {
    PathBuf::from(sub_matches.get_one::<String>("snapshot").unwrap())
}
