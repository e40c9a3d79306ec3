//! Best-score persistence
//!
//! Features:
//! - Single-slot store contract injected into the driver
//! - In-memory store (tests, headless runs without disk)
//! - JSON file store (native)
//! - LocalStorage store (wasm32)
//! - Missing or corrupt values degrade to a best score of 0

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// A flat key-value store holding one best-score slot
pub trait ScoreStore {
    /// Read the stored best score, 0 when absent or unreadable
    fn load(&self) -> u64;
    /// Overwrite the stored best score
    fn save(&mut self, best_score: u64);
}

/// Parse a stored best-score value, degrading to 0
pub fn parse_best_score(raw: &str) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(score) => score,
        Err(e) => {
            log::warn!("Ignoring stored best score {:?}: {}", raw, e);
            0
        }
    }
}

/// Store that lives only as long as the process; records every write
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    best_score: Option<u64>,
    writes: Vec<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best_score(best_score: u64) -> Self {
        Self {
            best_score: Some(best_score),
            writes: Vec::new(),
        }
    }

    /// Every value passed to `save`, in order
    pub fn writes(&self) -> &[u64] {
        &self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.best_score.unwrap_or(0)
    }

    fn save(&mut self, best_score: u64) {
        self.best_score = Some(best_score);
        self.writes.push(best_score);
    }
}
