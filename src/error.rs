use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum TableError {
    #[error("table capacity must be at least 1")]
    ZeroCapacity,
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("cannot read course file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {reason}")]
    MalformedRow { line: usize, reason: &'static str },
}
