//! Error types

/// Resolution errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input failed grammar or label validation; never reaches the network
    #[error("Invalid ENS expression: {0}")]
    InvalidExpression(String),

    /// Network, timeout or transport-level failure
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Response body did not decode into the expected shape
    #[error("Decode failure: {0}")]
    DecodeFailure(String),

    /// Request succeeded but carried no usable value
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// True when the failure came from the I/O boundary rather than the resolver's answer
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::TransportFailure(_) | Self::DecodeFailure(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeFailure(err.to_string())
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operational_errors() {
        assert!(Error::TransportFailure("timeout".into()).is_operational());
        assert!(Error::DecodeFailure("eof".into()).is_operational());
        assert!(!Error::NotFound("vitalik.eth".into()).is_operational());
        assert!(!Error::InvalidExpression("a b".into()).is_operational());
    }

    #[test]
    fn test_json_error_maps_to_decode_failure() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(Error::from(err), Error::DecodeFailure(_)));
    }
}
