//! Persistent per-level leaderboard.
//!
//! Each level keeps its top scores as a JSON array under the key
//! `scores-level-{id}`. Storage trouble never reaches gameplay: unreadable or
//! corrupt data is logged and treated as an empty board.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use serde::{Deserialize, Serialize};

use robowave_core::constants::LEADERBOARD_CAPACITY;
use robowave_core::error::PersistenceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub timestamp: String,
}

/// Keyed text storage.
pub trait ScoreStore {
    /// `Ok(None)` when nothing was ever stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// In-process storage, lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    entries: HashMap<String, String>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per level inside a directory.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    dir: PathBuf,
}

impl FileScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }
}

/// Insert `entry` at its rank: after every entry with a greater or equal
/// score, so ties keep insertion order. Returns the 0-based rank, or `None`
/// when the board is full and the entry ranks below all of it.
pub fn insert_ranked(entries: &mut Vec<ScoreEntry>, entry: ScoreEntry) -> Option<usize> {
    let rank = entries
        .iter()
        .position(|e| e.score < entry.score)
        .unwrap_or(entries.len());
    if rank >= LEADERBOARD_CAPACITY {
        return None;
    }
    entries.insert(rank, entry);
    entries.truncate(LEADERBOARD_CAPACITY);
    Some(rank)
}

pub fn storage_key(level: u32) -> String {
    format!("scores-level-{level}")
}

/// Seconds since the Unix epoch, as stored in score entries.
pub fn now_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        .to_string()
}

pub struct Leaderboard {
    store: Box<dyn ScoreStore>,
}

impl Leaderboard {
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryScoreStore::new()))
    }

    /// Top scores of `level`, best first. Empty on any storage failure.
    pub fn load_top_scores(&self, level: u32) -> Vec<ScoreEntry> {
        let key = storage_key(level);
        let parsed = self.store.read(&key).and_then(|text| match text {
            Some(text) => Ok(serde_json::from_str::<Vec<ScoreEntry>>(&text)?),
            None => Ok(Vec::new()),
        });
        match parsed {
            Ok(mut entries) => {
                // Stored lists are trusted for order only after a stable re-sort.
                entries.sort_by(|a, b| b.score.cmp(&a.score));
                entries.truncate(LEADERBOARD_CAPACITY);
                entries
            }
            Err(e) => {
                warn!("leaderboard `{key}` unreadable, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Record a run. Returns the 0-based rank reached, `None` if it did not
    /// make the board.
    pub fn save_top_score(&mut self, level: u32, score: u32, timestamp: String) -> Option<usize> {
        let mut entries = self.load_top_scores(level);
        let rank = insert_ranked(&mut entries, ScoreEntry { score, timestamp })?;

        let key = storage_key(level);
        let written = serde_json::to_string(&entries)
            .map_err(PersistenceError::from)
            .and_then(|text| self.store.write(&key, &text));
        if let Err(e) = written {
            warn!("leaderboard `{key}` not saved: {e}");
        }
        Some(rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u32) -> ScoreEntry {
        ScoreEntry {
            score,
            timestamp: format!("t{score}"),
        }
    }

    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
            Err(std::io::Error::new(ErrorKind::PermissionDenied, "denied").into())
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
            Err(std::io::Error::new(ErrorKind::PermissionDenied, "denied").into())
        }
    }

    #[test]
    fn test_ordering_keeps_ties_in_insertion_order() {
        let mut board = Leaderboard::in_memory();
        for (i, score) in [50, 90, 10, 90].into_iter().enumerate() {
            board.save_top_score(100, score, format!("run{i}"));
        }
        let stored = board.load_top_scores(100);
        let scores: Vec<u32> = stored.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![90, 90, 50, 10]);
        assert_eq!(stored[0].timestamp, "run1");
        assert_eq!(stored[1].timestamp, "run3");
    }

    #[test]
    fn test_full_board_rejects_lowest() {
        let mut entries: Vec<ScoreEntry> = (0..LEADERBOARD_CAPACITY as u32)
            .map(|i| entry(1000 - i))
            .collect();
        let before = entries.clone();

        assert_eq!(insert_ranked(&mut entries, entry(1)), None);
        assert_eq!(entries, before);

        // A better score pushes the last one out.
        assert_eq!(insert_ranked(&mut entries, entry(2000)), Some(0));
        assert_eq!(entries.len(), LEADERBOARD_CAPACITY);
        assert_eq!(entries[0].score, 2000);
        assert!(!entries.contains(&before[LEADERBOARD_CAPACITY - 1]));
    }

    #[test]
    fn test_corrupt_data_reads_as_empty() {
        let mut store = MemoryScoreStore::new();
        store.write(&storage_key(3), "{not json").unwrap();
        let mut board = Leaderboard::new(Box::new(store));
        assert!(board.load_top_scores(3).is_empty());

        // Saving over corrupt data starts a fresh board.
        assert_eq!(board.save_top_score(3, 40, "now".into()), Some(0));
        assert_eq!(board.load_top_scores(3).len(), 1);
    }

    #[test]
    fn test_unavailable_storage_is_recovered() {
        let mut board = Leaderboard::new(Box::new(BrokenStore));
        assert!(board.load_top_scores(1).is_empty());
        assert_eq!(board.save_top_score(1, 10, "now".into()), Some(0));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("robowave-scores-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let mut board = Leaderboard::new(Box::new(FileScoreStore::new(&dir)));
        board.save_top_score(2, 70, "a".into());
        board.save_top_score(2, 80, "b".into());

        let reopened = Leaderboard::new(Box::new(FileScoreStore::new(&dir)));
        let scores: Vec<u32> = reopened.load_top_scores(2).iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![80, 70]);
        assert!(dir.join("scores-level-2.json").exists());
        assert!(reopened.load_top_scores(9).is_empty());

        let _ = fs::remove_dir_all(&dir);
    }
}
