use std::{
    io::Read,
    path::{Path, PathBuf},
};

use super::Manifest;
use crate::{Error, Result};

/// Display name used for manifests read from standard input.
const STDIN_NAME: &str = "<stdin>";

/// A manifest together with the text it was parsed from.
#[derive(Debug)]
pub struct ManifestFile {
    name: String,
    content: String,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a manifest file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_content(content, path.display().to_string())
    }

    /// Read a manifest from a reader to completion and parse it.
    pub fn from_reader(mut reader: impl Read, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| Error::io(PathBuf::from(&name), e))?;
        Self::from_content(content, name)
    }

    /// Read the manifest from standard input.
    pub fn stdin() -> Result<Self> {
        Self::from_reader(std::io::stdin().lock(), STDIN_NAME)
    }

    /// Open `path`, or read standard input when no path is given.
    pub fn open_or_stdin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Self::stdin(),
        }
    }

    fn from_content(content: String, name: String) -> Result<Self> {
        let manifest = Manifest::from_str_with_filename(&content, &name)?;
        Ok(Self {
            name,
            content,
            manifest,
        })
    }

    /// Get the display name (path or `<stdin>`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
