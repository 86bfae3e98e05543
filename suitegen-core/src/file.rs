use std::path::{Path, PathBuf};

use eyre::Result;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the same content and was left untouched
    Unchanged,
}

/// A generated source file destined for disk
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    /// Create a new output file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, skipping the write when the existing content is identical
    pub fn write(&self) -> Result<WriteResult> {
        if self.exists() {
            let current = std::fs::read(&self.path)?;
            if current == self.content.as_bytes() {
                return Ok(WriteResult::Unchanged);
            }
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("Suite.java");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_output_file_writes_new_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.rs");

        let file = OutputFile::new(&path, "fn main() {}\n");
        assert!(!file.exists());

        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fn main() {}\n");
    }

    #[test]
    fn test_output_file_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.rs");
        fs::write(&path, "old").unwrap();

        let result = OutputFile::new(&path, "new").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_output_file_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("generated.rs");
        fs::write(&path, "same").unwrap();

        let file = OutputFile::new(&path, "same");
        assert_eq!(file.content(), "same");
        assert_eq!(file.path(), path.as_path());

        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "same");
    }
}
