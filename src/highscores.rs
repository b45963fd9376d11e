use serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A key/value store of high scores.
///
/// Reading never fails; a missing key reads as zero.
pub(crate) trait HighScoreStore: fmt::Debug {
    fn get(&self, key: &str) -> u32;

    fn set(&mut self, key: &str, value: u32) -> Result<(), SaveError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn get(&self, key: &str) -> u32 {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), SaveError> {
        (**self).set(key, value)
    }
}

/// High scores kept only for the life of the process
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore(HashMap<String, u32>);

impl HighScoreStore for MemoryStore {
    fn get(&self, key: &str) -> u32 {
        self.0.get(key).copied().unwrap_or_default()
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), SaveError> {
        self.0.insert(key.to_owned(), value);
        Ok(())
    }
}

/// High scores backed by a JSON file.  Every `set()` rewrites the file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    path: PathBuf,
    scores: HighScores,
}

impl HighScoreFile {
    /// Create a store for `path` without reading it
    pub(crate) fn empty(path: PathBuf) -> HighScoreFile {
        HighScoreFile {
            path,
            scores: HighScores::default(),
        }
    }

    /// Read the high scores stored at `path`.  A nonexistent file yields an
    /// empty table.
    pub(crate) fn load(path: PathBuf) -> Result<HighScoreFile, LoadError> {
        let src = match fs_err::read(&path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HighScoreFile::empty(path))
            }
            Err(e) => return Err(LoadError::read(e)),
        };
        let scores = serde_json::from_slice(&src).map_err(LoadError::deserialize)?;
        Ok(HighScoreFile { path, scores })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&self.scores).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

impl HighScoreStore for HighScoreFile {
    fn get(&self, key: &str) -> u32 {
        self.scores.get(key).map_or(0, NonZeroU32::get)
    }

    fn set(&mut self, key: &str, value: u32) -> Result<(), SaveError> {
        if let Some(score) = NonZeroU32::new(value) {
            self.scores.set(key, score);
        } else {
            self.scores.remove(key);
        }
        self.save()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct HighScores(HashMap<String, NonZeroU32>);

impl HighScores {
    fn get(&self, key: &str) -> Option<NonZeroU32> {
        self.0.get(key).copied()
    }

    fn set(&mut self, key: &str, score: NonZeroU32) {
        self.0.insert(key.to_owned(), score);
    }

    fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    fn to_json_array(&self) -> Vec<HighScoreEntry> {
        let mut entries = self
            .0
            .iter()
            .map(|(key, &score)| HighScoreEntry {
                key: key.clone(),
                score,
            })
            .collect::<Vec<_>>();
        entries.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        entries
    }

    fn from_json_array(array: Vec<HighScoreEntry>) -> HighScores {
        HighScores(
            array
                .into_iter()
                .map(|hse| (hse.key, hse.score))
                .collect(),
        )
    }
}

impl Serialize for HighScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HighScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<HighScoreEntry>::deserialize(deserializer).map(HighScores::from_json_array)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct HighScoreEntry {
    key: String,
    score: NonZeroU32,
}

#[derive(Debug, Error)]
#[error("Failed to save high scores to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    pub(crate) fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high scores")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high scores to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high scores from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high scores file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high scores")]
    Deserialize(#[source] serde_json::Error),
}
