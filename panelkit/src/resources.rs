//! Resource file lookup.
//!
//! A name is first tried as a literal path. Otherwise every search directory
//! is probed in order and the last directory holding the file wins, so
//! directories appended later override earlier ones.

use std::path::{Path, PathBuf};

use crate::error::AtlasError;

/// An ordered list of directories searched for sheets and descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePaths {
    dirs: Vec<PathBuf>,
}

impl ResourcePaths {
    pub fn new(dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            dirs: dirs.into_iter().collect(),
        }
    }

    /// The directories next to the running executable: `<exe dir>/resources`
    /// then `<exe dir>` itself.
    pub fn beside_executable() -> Self {
        let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        else {
            return Self::default();
        };
        Self::new([dir.join("resources"), dir])
    }

    /// Append a directory; it takes precedence over every earlier one.
    pub fn push(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.push(dir.into());
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Locate `name`, or `None` if it exists nowhere on the path.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        let literal = Path::new(name);
        if literal.is_file() {
            return Some(literal.to_path_buf());
        }

        let found = self
            .dirs
            .iter()
            .rev()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file());
        tracing::debug!(name, found = ?found, "resolved resource");
        found
    }

    /// Locate `name`, failing with `NotFound`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, AtlasError> {
        self.find(name)
            .ok_or_else(|| AtlasError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_last_directory_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("leds.png"), b"a").unwrap();
        fs::write(second.path().join("leds.png"), b"b").unwrap();

        let paths = ResourcePaths::new([first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(paths.find("leds.png"), Some(second.path().join("leds.png")));
    }

    #[test]
    fn test_earlier_directory_used_when_later_lacks_file() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("panels.png"), b"a").unwrap();

        let paths = ResourcePaths::new([first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(paths.find("panels.png"), Some(first.path().join("panels.png")));
    }

    #[test]
    fn test_literal_path_has_priority() {
        let dir = tempfile::tempdir().unwrap();
        let literal = dir.path().join("sheet.png");
        fs::write(&literal, b"x").unwrap();
        let other = tempfile::tempdir().unwrap();
        fs::write(other.path().join("sheet.png"), b"y").unwrap();

        let mut paths = ResourcePaths::default();
        paths.push(other.path());
        let name = literal.to_str().unwrap();
        assert_eq!(paths.find(name), Some(literal.clone()));
    }

    #[test]
    fn test_missing_is_not_found() {
        let paths = ResourcePaths::new([PathBuf::from("/nonexistent-panelkit-dir")]);
        assert!(matches!(
            paths.resolve("nothing.png"),
            Err(AtlasError::NotFound(name)) if name == "nothing.png"
        ));
    }
}
