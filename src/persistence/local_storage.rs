//! LocalStorage store for the browser build

use super::{ScoreStore, parse_best_score};

/// Best score kept under a single LocalStorage key as a plain integer
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "sky_glider_best";

    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, best score will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for LocalStorageStore {
    fn load(&self) -> u64 {
        let Some(storage) = &self.storage else {
            return 0;
        };
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(raw)) => parse_best_score(&raw),
            _ => {
                log::info!("No best score found, starting fresh");
                0
            }
        }
    }

    fn save(&mut self, best_score: u64) {
        if let Some(storage) = &self.storage {
            if storage
                .set_item(Self::STORAGE_KEY, &best_score.to_string())
                .is_ok()
            {
                log::info!("Best score {} saved", best_score);
            } else {
                log::warn!("Failed to save best score");
            }
        }
    }
}
