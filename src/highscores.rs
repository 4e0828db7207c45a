//! Best score tracking
//!
//! A single number persisted under `highScore`. Absent or unreadable values
//! count as no prior score.

use crate::platform::storage::KeyValueStore;

/// Best score across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "highScore";

    /// Read the stored best, treating absence or garbage as 0
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(Self::STORAGE_KEY) else {
            log::info!("No high score found, starting fresh");
            return Self::default();
        };

        match parse_score(&raw) {
            Some(best) => {
                log::info!("Loaded high score {}", best);
                Self { best }
            }
            None => {
                log::warn!("Ignoring unreadable high score {:?}", raw);
                Self::default()
            }
        }
    }

    /// Record a score. Persists and returns true only when it beats the best.
    pub fn record(&mut self, score: u64, store: &mut dyn KeyValueStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.save(store);
        true
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.set(Self::STORAGE_KEY, &self.best.to_string());
        log::info!("High score saved ({})", self.best);
    }
}

/// Accepts plain integers and whole non-negative JSON numbers like `12.0`
fn parse_score(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(n) = serde_json::from_str::<u64>(raw) {
        return Some(n);
    }
    match serde_json::from_str::<f64>(raw) {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => Some(f as u64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;

    #[test]
    fn test_absent_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best, 0);
    }

    #[test]
    fn test_load_stored_value() {
        let mut store = MemoryStore::new();
        store.set(HighScore::STORAGE_KEY, "42");
        assert_eq!(HighScore::load(&store).best, 42);

        store.set(HighScore::STORAGE_KEY, " 17.0 ");
        assert_eq!(HighScore::load(&store).best, 17);
    }

    #[test]
    fn test_corrupt_value_is_zero() {
        let mut store = MemoryStore::new();
        for garbage in ["abc", "-3", "1.5", "", "{\"best\":3}", "NaN"] {
            store.set(HighScore::STORAGE_KEY, garbage);
            assert_eq!(HighScore::load(&store).best, 0, "value {:?}", garbage);
        }
    }

    #[test]
    fn test_record_only_persists_improvements() {
        let mut store = MemoryStore::new();
        let mut high = HighScore { best: 5 };

        assert!(!high.record(5, &mut store));
        assert_eq!(store.get(HighScore::STORAGE_KEY), None);

        assert!(high.record(6, &mut store));
        assert_eq!(high.best, 6);
        assert_eq!(store.get(HighScore::STORAGE_KEY).as_deref(), Some("6"));
        assert_eq!(HighScore::load(&store).best, 6);
    }
}
