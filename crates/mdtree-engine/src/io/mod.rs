use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("File too large: {path} is {size} bytes, limit is {limit}")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file as raw bytes
///
/// Content is not checked for UTF-8; the parser accepts any bytes.
pub fn read_file(path: &Path) -> Result<Vec<u8>, IoError> {
    read_file_limited(path, None)
}

/// Read a markdown file, refusing files larger than `limit` bytes
pub fn read_file_limited(path: &Path, limit: Option<u64>) -> Result<Vec<u8>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    if let Some(limit) = limit {
        let size = fs::metadata(path)?.len();
        if size > limit {
            return Err(IoError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    fs::read(path).map_err(IoError::Io)
}
