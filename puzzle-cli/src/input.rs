//! Local store for puzzle input files
//!
//! Inputs live at `{root}/{year}/day{day:02}.txt` and are provided by the
//! user; nothing is fetched over the network.

use std::fs;
use std::io;
use std::path::PathBuf;

/// File-based store for puzzle inputs
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default root under the platform data directory, falling back to the
    /// current directory when none is available.
    pub fn default_root() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("puzzle_inputs")
    }

    /// Path of the input file for a year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(year.to_string()).join(format!("day{:02}.txt", day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Load the input for a year/day
    pub fn load(&self, year: u16, day: u8) -> io::Result<String> {
        fs::read_to_string(self.input_path(year, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("/inputs"));
        assert_eq!(
            store.input_path(2023, 1),
            PathBuf::from("/inputs/2023/day01.txt")
        );
        assert_eq!(
            store.input_path(2023, 25),
            PathBuf::from("/inputs/2023/day25.txt")
        );
    }

    #[test]
    fn test_load_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2023, 1));

        let dir = temp.path().join("2023");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("day01.txt"), "test input\n").unwrap();

        assert!(store.contains(2023, 1));
        assert_eq!(store.load(2023, 1).unwrap(), "test input\n");
    }

    #[test]
    fn test_load_missing_input_fails() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(store.load(2023, 1).is_err());
    }
}
