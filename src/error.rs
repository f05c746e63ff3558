use std::path::PathBuf;

use thiserror::Error;

use crate::core::validate::NAME_PATTERN;
use crate::graph::parse::ParseError;

#[derive(Debug, Error)]
pub enum PkgDepsError {
    #[error("usage: pkgdeps <dependency-file> [<package-1> ... <package-n>]")]
    Usage,
    #[error("the package name \"{0}\" is not valid: expected {}", NAME_PATTERN)]
    InvalidPackageName(String),
    #[error("the dependency file path \"{}\" is not valid", .path.display())]
    InvalidFilePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read dependency file \"{}\": {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dependency file: {0}")]
    MalformedLine(#[from] ParseError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PkgDepsError>;
