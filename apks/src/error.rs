use std::path::{Path, PathBuf};
use zip::result::ZipError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("APKS file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("No .apk files found in the .apks archive.")]
    NoApk,
    #[error("Failed to open as zip: {}", .0.display())]
    Format(PathBuf, #[source] ZipError),
    #[error("{err}: {}", path.display())]
    Io { path: PathBuf, err: std::io::Error },
}

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NotFound,
    Format,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::NoApk => ErrorKind::NotFound,
            Self::Format(_, _) => ErrorKind::Format,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Wraps an io error raised while operating on `path`, for use with
    /// `map_err`.
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.to_path_buf();
        move |err| Self::Io { path, err }
    }

    /// Maps a zip error raised while reading `archive`. Plain io failures
    /// stay io failures, everything else means the container is broken.
    pub(crate) fn zip(archive: &Path, err: ZipError) -> Self {
        match err {
            ZipError::Io(err) => Self::io(archive)(err),
            err => Self::Format(archive.to_path_buf(), err),
        }
    }

    pub(crate) fn walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        Self::Io {
            path,
            err: err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::NotFound("missing.apks".into());
        assert_eq!(err.to_string(), "APKS file not found: missing.apks");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(Error::NoApk.kind(), ErrorKind::NotFound);
        let err = Error::zip(
            Path::new("x.apks"),
            ZipError::InvalidArchive("Invalid zip header"),
        );
        assert_eq!(err.to_string(), "Failed to open as zip: x.apks");
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn zip_io_stays_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::zip(Path::new("x.apks"), ZipError::Io(io));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "denied: x.apks");
    }

    #[test]
    fn io_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "Not a directory");
        let err = Error::io(Path::new("work/base.apk"))(io);
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "Not a directory: work/base.apk");
    }
}
