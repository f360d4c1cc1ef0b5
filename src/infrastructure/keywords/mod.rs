//! Sensitive keyword set loading and hot reload
//!
//! The keyword set is process-wide, read-mostly state. [`KeywordStore`] keeps
//! the current set behind an atomically swappable `Arc`: a scoring run either
//! sees the old set or the new set in full, never a partial one, and a reload
//! blocks concurrent runs for no longer than the swap itself.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::scoring::SensitiveKeywordSet;

/// Failure loading the keyword list from its external source.
#[derive(Debug, Error)]
pub enum KeywordSourceError {
    #[error("failed to read keyword file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keyword source '{}' contains no keywords", path.display())]
    Empty { path: PathBuf },
}

/// Source of the sensitive keyword list.
pub trait KeywordSource: Send + Sync {
    fn load(&self) -> Result<SensitiveKeywordSet, KeywordSourceError>;

    /// Human-readable origin for log messages.
    fn describe(&self) -> String;
}

/// Flat file of comma-or-line-separated lowercase terms.
pub struct FileKeywordSource {
    path: PathBuf,
}

impl FileKeywordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl KeywordSource for FileKeywordSource {
    fn load(&self) -> Result<SensitiveKeywordSet, KeywordSourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            KeywordSourceError::Io {
                path: self.path.clone(),
                source,
            }
        })?;
        let set = parse_keywords(&content);
        if set.is_empty() {
            return Err(KeywordSourceError::Empty {
                path: self.path.clone(),
            });
        }
        Ok(set)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a keyword list in either supported layout: comma-separated on one
/// line, or one keyword per line.
pub fn parse_keywords(content: &str) -> SensitiveKeywordSet {
    let terms: Vec<String> = if content.contains(',') {
        content.split(',').map(str::to_string).collect()
    } else {
        content.lines().map(str::to_string).collect()
    };
    SensitiveKeywordSet::new(terms)
}

/// Process-wide holder of the current keyword set.
pub struct KeywordStore {
    source: Box<dyn KeywordSource>,
    current: RwLock<Arc<SensitiveKeywordSet>>,
}

impl KeywordStore {
    /// Load the initial set. Failure here is fatal: the process must not
    /// serve scores with an undefined keyword set.
    pub fn initialize(source: Box<dyn KeywordSource>) -> Result<Self, KeywordSourceError> {
        let set = source.load()?;
        info!(
            source = %source.describe(),
            keywords = set.len(),
            "loaded sensitive keyword set"
        );
        Ok(Self {
            source,
            current: RwLock::new(Arc::new(set)),
        })
    }

    /// Snapshot of the current set. Runs hold the returned `Arc` for their
    /// whole lifetime so a concurrent reload cannot change their input.
    pub fn current(&self) -> Arc<SensitiveKeywordSet> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Re-read the source and swap the set atomically.
    ///
    /// On failure the previously loaded set stays in effect; the error is
    /// logged and returned so the caller can surface a warning.
    pub fn reload(&self) -> Result<usize, KeywordSourceError> {
        match self.source.load() {
            Ok(set) => {
                let count = set.len();
                let next = Arc::new(set);
                match self.current.write() {
                    Ok(mut guard) => *guard = next,
                    Err(poisoned) => *poisoned.into_inner() = next,
                }
                info!(
                    source = %self.source.describe(),
                    keywords = count,
                    "reloaded sensitive keyword set"
                );
                Ok(count)
            }
            Err(error) => {
                warn!(
                    source = %self.source.describe(),
                    %error,
                    "keyword reload failed, keeping previous set"
                );
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_comma_separated_layout() {
        let set = parse_keywords("tc,kimlik, Telefon ,password");
        assert_eq!(set.len(), 4);
        assert!(set.contains("telefon"));
    }

    #[test]
    fn parses_line_separated_layout() {
        let set = parse_keywords("tc\nkimlik\n\npassword\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains("kimlik"));
    }

    #[test]
    fn file_source_rejects_empty_lists() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   \n  ").unwrap();
        let source = FileKeywordSource::new(file.path());
        assert!(matches!(
            source.load(),
            Err(KeywordSourceError::Empty { .. })
        ));
    }

    #[test]
    fn failed_reload_keeps_previous_set() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "password,tc").unwrap();
        let path = file.path().to_path_buf();

        let store = KeywordStore::initialize(Box::new(FileKeywordSource::new(&path))).unwrap();
        assert_eq!(store.current().len(), 2);

        drop(file);
        assert!(store.reload().is_err());
        assert_eq!(store.current().len(), 2);
        assert!(store.current().contains("password"));
    }

    #[test]
    fn successful_reload_swaps_the_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.txt");
        std::fs::write(&path, "password").unwrap();

        let store = KeywordStore::initialize(Box::new(FileKeywordSource::new(&path))).unwrap();
        let before = store.current();
        assert_eq!(before.len(), 1);

        std::fs::write(&path, "password,tc,kimlik").unwrap();
        assert_eq!(store.reload().unwrap(), 3);
        assert_eq!(store.current().len(), 3);
        // The snapshot taken before the reload is unchanged.
        assert_eq!(before.len(), 1);
    }

    #[test]
    fn missing_file_fails_initialization() {
        let source = FileKeywordSource::new("/nonexistent/keywords.txt");
        assert!(KeywordStore::initialize(Box::new(source)).is_err());
    }
}
