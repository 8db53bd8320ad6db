use thiserror::Error;

/// Main error type for T.125 MCS PER operations
///
/// Variants fall into two tiers. Stream and data errors are recoverable:
/// the caller decides whether the enclosing message is still usable.
/// Protocol violations (see [`McsError::is_fatal`]) mean a field that must
/// hold a well-known value did not, and the enclosing decode has to stop.
#[derive(Error, Debug)]
pub enum McsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Truncated stream while reading {field}: expected {expected} bytes")]
    TruncatedStream { field: &'static str, expected: usize },

    #[error("Expected byte 0x{expected:02X}, but read 0x{actual:02X}")]
    UnexpectedByte { expected: u8, actual: u8 },

    #[error("Expected byte 0x{expected:02X}, but the stream is exhausted")]
    MissingByte { expected: u8 },

    #[error("Object identifier mismatch: expected {expected}")]
    ObjectIdentifierMismatch { expected: String },

    #[error("Octet stream mismatch: expected {expected_len} matching bytes")]
    OctetStreamMismatch { expected_len: usize },

    #[error("Length out of range: {0} (max 0x7FFF)")]
    LengthOutOfRange(usize),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl McsError {
    /// Whether this error is an unrecoverable protocol violation
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            McsError::UnexpectedByte { .. }
                | McsError::MissingByte { .. }
                | McsError::ObjectIdentifierMismatch { .. }
                | McsError::OctetStreamMismatch { .. }
        )
    }
}

/// Result type alias for T.125 MCS PER operations
pub type McsResult<T> = Result<T, McsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_violations_are_fatal() {
        assert!(McsError::UnexpectedByte { expected: 6, actual: 5 }.is_fatal());
        assert!(McsError::MissingByte { expected: 6 }.is_fatal());
        assert!(McsError::OctetStreamMismatch { expected_len: 4 }.is_fatal());
    }

    #[test]
    fn test_stream_errors_are_recoverable() {
        let err = McsError::TruncatedStream { field: "octet stream", expected: 7 };
        assert!(!err.is_fatal());
        assert!(!McsError::LengthOutOfRange(0x8000).is_fatal());
    }

    #[test]
    fn test_unexpected_byte_message() {
        let err = McsError::UnexpectedByte { expected: 0x06, actual: 0x05 };
        assert_eq!(err.to_string(), "Expected byte 0x06, but read 0x05");
    }
}
