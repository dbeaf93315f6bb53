pub mod filter;
pub mod header;
pub mod pipeline;
pub mod shorten;
pub mod styles;


use std::{
    fs::{read_dir, read_to_string},
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("unable to read directory \"{path}\": {source}")]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("unable to read \"{path}\": {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("unable to write \"{path}\": {source}")]
    WriteFile { path: PathBuf, source: io::Error },
    #[error("unable to serialize descriptor: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unknown language \"{0}\"")]
    UnknownLanguage(String),
}

/// A descriptor's file name and the text read from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescriptorBlob {
    pub name: String,
    pub result: String,
}

impl DescriptorBlob {
    pub fn new(name: &str, result: &str) -> Self {
        Self {
            name: name.into(),
            result: result.into(),
        }
    }

    pub fn read(path: &Path) -> Result<Self, BuildError> {
        let result = read_to_string(path).map_err(|source| BuildError::ReadFile {
            path: path.into(),
            source,
        })?;

        Ok(Self::new(&path.to_string_lossy(), &result))
    }
}

/// Reads every file in `dir` whose name ends with `suffix`, sorted by name.
pub fn read_blobs(dir: &Path, suffix: &str) -> Result<Vec<DescriptorBlob>, BuildError> {
    let read_dir_error = |source: io::Error| BuildError::ReadDir {
        path: dir.into(),
        source,
    };

    let mut paths = Vec::new();

    for entry in read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();

        let has_suffix = path
            .file_name()
            .and_then(|file_name| file_name.to_str())
            .is_some_and(|file_name| file_name.ends_with(suffix));

        if has_suffix && path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    paths.iter().map(|path| DescriptorBlob::read(path)).collect()
}
