//! VFS error types.

use std::io;
use thiserror::Error;

/// VFS error type.
///
/// `NotFound` is the only kind resolution logic ever inspects. Anything a
/// backend reports beyond absence passes through opaquely and is treated
/// as "this binding cannot serve the request".
#[derive(Debug, Error)]
pub enum VfsError {
    /// Path does not exist. Carries the logical path as requested by the
    /// caller, never a backend-translated one.
    #[error("not found: {0}")]
    NotFound(String),

    /// I/O error passed through from a backend.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Other backend-local error.
    #[error("{0}")]
    Other(String),
}

impl VfsError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create an Other error.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// True if this error means "does not exist", including OS-level
    /// absence passed through as [`VfsError::Io`].
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            Self::Other(_) => false,
        }
    }
}

/// Convert VfsError to std::io::Error for compatibility.
impl From<VfsError> for io::Error {
    fn from(e: VfsError) -> Self {
        match e {
            VfsError::NotFound(msg) => io::Error::new(io::ErrorKind::NotFound, msg),
            VfsError::Io(e) => e,
            VfsError::Other(msg) => io::Error::other(msg),
        }
    }
}

/// VFS result type.
pub type VfsResult<T> = Result<T, VfsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(VfsError::not_found("/x").is_not_found());
        assert!(VfsError::Io(io::Error::from(io::ErrorKind::NotFound)).is_not_found());
        assert!(!VfsError::Io(io::Error::from(io::ErrorKind::PermissionDenied)).is_not_found());
        assert!(!VfsError::other("boom").is_not_found());
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: io::Error = VfsError::not_found("/missing").into();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        let err: io::Error = VfsError::other("backend detail").into();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
