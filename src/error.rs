use snafu::Snafu;
use std::net::SocketAddr;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Path not found: {}", path.display()))]
    PathNotFound { path: PathBuf },

    #[snafu(display("Not a directory: {}", path.display()))]
    NotADirectory { path: PathBuf },

    #[snafu(display("Permission denied: {}", path.display()))]
    PermissionDenied { path: PathBuf },

    #[snafu(display(
        "Invalid selection action: {action}. Allowed: 'select' | 'deselect' | 'select_all' | 'deselect_all'"
    ))]
    InvalidAction { action: String },

    #[snafu(display("Action '{action}' requires an 'entry' field"))]
    MissingEntry { action: String },

    #[snafu(display("Failed to list directory '{}': {source}", path.display()))]
    ListDirectoryFailed { path: PathBuf, source: Box<Error> },

    #[snafu(display("Failed to copy '{entry}' to '{}': {source}", destination.display()))]
    CopyFailed {
        entry: String,
        destination: PathBuf,
        source: Box<Error>,
    },

    #[snafu(display("Failed to move '{entry}' to '{}': {source}", destination.display()))]
    MoveFailed {
        entry: String,
        destination: PathBuf,
        source: Box<Error>,
    },

    #[snafu(display("Failed to create directory '{}': {source}", path.display()))]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to bind {addr}: {source}"))]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[snafu(display("Server error: {source}"))]
    Serve { source: std::io::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

impl Error {
    /// Classify an OS error against the path it was raised for.
    pub fn from_fs(error: std::io::Error, path: &std::path::Path) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Error::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::NotADirectory => Error::NotADirectory {
                path: path.to_path_buf(),
            },
            _ => Error::Io { source: error },
        }
    }
}
