//! JSON file store for native builds

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ScoreStore;

/// On-disk record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u64,
}

/// Best score kept in a small JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Default file name inside a data directory
    pub const FILE_NAME: &'static str = "sky_glider_best.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in `dir` under the default file name
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    /// Store in the per-user data directory (see [`data_dir`])
    pub fn in_data_dir() -> Self {
        Self::in_dir(data_dir(|key| std::env::var_os(key)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> io::Result<u64> {
        let json = fs::read_to_string(&self.path)?;
        let record: BestScoreRecord = serde_json::from_str(&json)?;
        Ok(record.best_score)
    }

    fn write(&self, best_score: u64) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&BestScoreRecord { best_score })?;
        // Write to a temp file then rename so a crash never leaves a torn record
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}

/// Where the native best score lives, first match wins:
/// `SKY_GLIDER_DATA_DIR`, `$XDG_DATA_HOME/sky-glider`,
/// `$HOME/.local/share/sky-glider`, then the temp dir (which may be cleared
/// between reboots).
pub fn data_dir(env: impl Fn(&str) -> Option<OsString>) -> PathBuf {
    let set = |key: &str| env(key).filter(|v| !v.is_empty()).map(PathBuf::from);
    if let Some(dir) = set("SKY_GLIDER_DATA_DIR") {
        return dir;
    }
    if let Some(dir) = set("XDG_DATA_HOME") {
        return dir.join("sky-glider");
    }
    if let Some(home) = set("HOME") {
        return home.join(".local").join("share").join("sky-glider");
    }
    std::env::temp_dir().join("sky-glider")
}

impl ScoreStore for FileStore {
    fn load(&self) -> u64 {
        match self.read() {
            Ok(score) => {
                log::info!("Loaded best score {} from {}", score, self.path.display());
                score
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No best score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Unreadable best score at {} ({}), using 0", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, best_score: u64) {
        match self.write(best_score) {
            Ok(()) => log::info!("Best score {} saved", best_score),
            Err(e) => log::warn!("Failed to save best score to {}: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sky-glider-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = FileStore::in_dir(scratch_dir("missing"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_round_trip_through_disk() {
        let dir = scratch_dir("roundtrip");
        let mut store = FileStore::in_dir(&dir);
        store.save(31);
        assert_eq!(FileStore::in_dir(&dir).load(), 31);
        let _ = fs::remove_dir_all(&dir);
    }

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<OsString> {
        move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| OsString::from(*v))
    }

    #[test]
    fn test_data_dir_prefers_explicit_override() {
        let env = env_of(&[("SKY_GLIDER_DATA_DIR", "/srv/glider"), ("HOME", "/home/pilot")]);
        assert_eq!(data_dir(env), PathBuf::from("/srv/glider"));
    }

    #[test]
    fn test_data_dir_uses_xdg_then_home() {
        let env = env_of(&[("XDG_DATA_HOME", "/data"), ("HOME", "/home/pilot")]);
        assert_eq!(data_dir(env), PathBuf::from("/data/sky-glider"));

        let env = env_of(&[("XDG_DATA_HOME", ""), ("HOME", "/home/pilot")]);
        assert_eq!(data_dir(env), PathBuf::from("/home/pilot/.local/share/sky-glider"));
    }

    #[test]
    fn test_data_dir_falls_back_to_temp() {
        assert_eq!(data_dir(env_of(&[])), std::env::temp_dir().join("sky-glider"));
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let store = FileStore::in_dir(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), 0);
        let _ = fs::remove_dir_all(&dir);
    }
}
