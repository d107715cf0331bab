//! Bridge failure taxonomy.
//!
//! One variant per pipeline stage. The boundary still collapses everything
//! to a single error line; `kind()` exists so callers and tests can tell
//! the stages apart.

use std::io;

use thiserror::Error;

/// Coarse failure classification, one value per pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Registry unreachable, endpoint invalid, or channel setup failed
    Resolution,
    /// The remote call itself failed
    Invocation,
    /// Local input or output failed
    Io,
}

/// Errors produced while bridging a question to the remote service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    #[error("Service resolution failed: {0}")]
    Resolution(String),

    #[error("Service invocation failed: {0}")]
    Invocation(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl BridgeError {
    /// The pipeline stage this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            BridgeError::Resolution(_) => FailureKind::Resolution,
            BridgeError::Invocation(_) => FailureKind::Invocation,
            BridgeError::Io(_) => FailureKind::Io,
        }
    }
}

impl From<io::Error> for BridgeError {
    fn from(err: io::Error) -> Self {
        BridgeError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = BridgeError::Resolution("connection refused".to_string());
        assert_eq!(
            format!("{}", err),
            "Service resolution failed: connection refused"
        );

        let err = BridgeError::Invocation("status: Internal".to_string());
        assert_eq!(
            format!("{}", err),
            "Service invocation failed: status: Internal"
        );

        let err = BridgeError::Io("broken pipe".to_string());
        assert_eq!(format!("{}", err), "I/O error: broken pipe");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            BridgeError::Resolution(String::new()).kind(),
            FailureKind::Resolution
        );
        assert_eq!(
            BridgeError::Invocation(String::new()).kind(),
            FailureKind::Invocation
        );
        assert_eq!(BridgeError::Io(String::new()).kind(), FailureKind::Io);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let err = BridgeError::from(io_err);
        assert_eq!(err.kind(), FailureKind::Io);
        assert!(format!("{}", err).contains("stdin closed"));
    }

    #[test]
    fn test_error_source() {
        // String payloads carry the whole message; there is no inner source.
        let err = BridgeError::Resolution("inner".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_clone_eq() {
        let err1 = BridgeError::Io("same".to_string());
        let err2 = err1.clone();
        let err3 = BridgeError::Io("different".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BridgeError>();
    }
}
