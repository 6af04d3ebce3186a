use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("read dump {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DumpError>;
