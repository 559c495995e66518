use std::{fmt, io, path::PathBuf};

use lsrs_fs::LoadError;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a listing can fail. All of them end the invocation.
#[derive(Debug)]
pub enum Error {
    /// The target path could not be made absolute.
    PathResolution { path: PathBuf, source: io::Error },
    /// The resolved path does not exist.
    PathNotFound(PathBuf),
    /// The directory could not be opened or read.
    Read { path: PathBuf, source: io::Error },
    /// JSON encoding failed.
    Serialization(serde_json::Error),
    /// Writing the listing to stdout failed.
    Output(io::Error),
}

impl Error {
    /// The reader went away (e.g. `lsrs | head`); not worth reporting.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PathResolution { path, source } => {
                write!(f, "cannot resolve path {}: {}", path.display(), source)
            }
            Error::PathNotFound(path) => write!(f, "path does not exist: {}", path.display()),
            Error::Read { path, source } => {
                write!(f, "cannot read directory {}: {}", path.display(), source)
            }
            Error::Serialization(err) => write!(f, "cannot encode listing as JSON: {}", err),
            Error::Output(err) => write!(f, "cannot write output: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::PathResolution { source, .. } | Error::Read { source, .. } => Some(source),
            Error::Serialization(err) => Some(err),
            Error::Output(err) => Some(err),
            Error::PathNotFound(_) => None,
        }
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound(path) => Error::PathNotFound(path),
            LoadError::Read { path, source } => Error::Read { path, source },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Output(err)
    }
}
