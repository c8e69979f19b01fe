//! Persistent player statistics.
//!
//! Stats are read once when a [`RewardManager`](super::RewardManager) is
//! built and written as a full snapshot after every battle. Stores never
//! merge; a save always replaces what was there.

use serde::{Deserialize, Serialize};

use crate::core::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub total_games: u32,
    pub total_wins: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_points: u64,
    pub perfect_wins: u32,
    pub comeback_wins: u32,
}

/// Persistence collaborator for [`GameStats`].
pub trait StatsStore {
    /// The stored snapshot, `None` if nothing was saved yet.
    fn load_stats(&self) -> Result<Option<GameStats>>;

    /// Replace the stored snapshot.
    fn save_stats(&mut self, stats: &GameStats) -> Result<()>;
}

/// In-memory store holding a `bincode` snapshot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStatsStore {
    snapshot: Option<Vec<u8>>,
}

impl MemoryStatsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with raw snapshot bytes.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            snapshot: Some(bytes),
        }
    }

    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.snapshot.as_deref()
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }
}

impl StatsStore for MemoryStatsStore {
    fn load_stats(&self) -> Result<Option<GameStats>> {
        match &self.snapshot {
            Some(bytes) => Ok(Some(bincode::deserialize(bytes)?)),
            None => Ok(None),
        }
    }

    fn save_stats(&mut self, stats: &GameStats) -> Result<()> {
        self.snapshot = Some(bincode::serialize(stats)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;

    #[test]
    fn test_empty_store() {
        assert_eq!(MemoryStatsStore::new().load_stats().unwrap(), None);
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryStatsStore::new();
        let first = GameStats {
            total_games: 1,
            ..GameStats::default()
        };
        let second = GameStats {
            total_games: 2,
            best_streak: 2,
            ..GameStats::default()
        };

        store.save_stats(&first).unwrap();
        store.save_stats(&second).unwrap();

        assert_eq!(store.load_stats().unwrap(), Some(second));
    }

    #[test]
    fn test_corrupt_snapshot() {
        let store = MemoryStatsStore::from_bytes(vec![1, 2]);
        assert!(matches!(store.load_stats(), Err(EngineError::StatsCodec(_))));
    }

    #[test]
    fn test_json_defaults_missing_fields() {
        let stats: GameStats = serde_json::from_str(r#"{"total_wins": 4}"#).unwrap();
        assert_eq!(stats.total_wins, 4);
        assert_eq!(stats.total_games, 0);
    }
}
