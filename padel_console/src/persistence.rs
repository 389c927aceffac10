use std::path::{Path, PathBuf};
use std::{fs, io};

use anyhow::Context;
use log::warn;
use serde_json::Value;

use padel_counter::MatchSnapshot;


// File-backed store for the match snapshot. One match, one flat JSON file.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: PathBuf) -> Self { SnapshotStore { path } }

    pub fn path(&self) -> &Path { &self.path }

    // A missing or unreadable file is not an error: the match simply starts
    // from scratch.
    pub fn load(&self) -> MatchSnapshot {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return MatchSnapshot::default(),
            Err(err) => {
                warn!(
                    "Cannot read snapshot file {}: {}; starting from defaults",
                    self.path.display(),
                    err
                );
                return MatchSnapshot::default();
            }
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => MatchSnapshot::from_json(&value),
            Err(err) => {
                warn!(
                    "Snapshot file {} is not valid JSON: {}; starting from defaults",
                    self.path.display(),
                    err
                );
                MatchSnapshot::default()
            }
        }
    }

    // Writes the full record through a temp file, so a crash mid-write leaves
    // the previous snapshot intact.
    pub fn save(&self, snapshot: &MatchSnapshot) -> anyhow::Result<()> {
        let text = serde_json::to_string_pretty(snapshot)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, text).with_context(|| format!("Writing {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Replacing {}", self.path.display()))?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use padel_counter::{DisplayPrefs, MatchRules, MatchScore, Side};

    use super::*;

    fn test_store(name: &str) -> SnapshotStore {
        let path = std::env::temp_dir().join(format!("{}_{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        SnapshotStore::new(path)
    }

    #[test]
    fn missing_file_loads_as_defaults() {
        let store = test_store("padel_snapshot_missing");
        assert_eq!(store.load(), MatchSnapshot::default());
    }

    #[test]
    fn save_load_round_trip() {
        let store = test_store("padel_snapshot_round_trip");
        let score = MatchScore::new(MatchRules::classic_tennis())
            .add_point(Side::A)
            .add_point(Side::B);
        let snapshot = MatchSnapshot::from_state(&score, DisplayPrefs::default());
        store.save(&snapshot).unwrap();
        assert_eq!(store.load(), snapshot);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn corrupt_file_loads_as_defaults() {
        let store = test_store("padel_snapshot_corrupt");
        fs::write(store.path(), "not json at all {").unwrap();
        assert_eq!(store.load(), MatchSnapshot::default());
        let _ = fs::remove_file(store.path());
    }
}
