/// Error raised while reading a foreign JVM object through the bridge.
///
/// Every variant keeps the accessor name that was being read, so schema
/// drift (a renamed or removed accessor after a library upgrade) shows up
/// in the message directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The object exposes no zero-argument accessor with this name.
    #[error("accessor not found: {accessor}")]
    AccessorNotFound { accessor: String },

    /// The accessor exists but the call failed on the JVM side.
    #[error("accessor {accessor} failed: {message}")]
    Call { accessor: String, message: String },

    /// The accessor returned a value of an unexpected shape.
    #[error("accessor {accessor}: expected {expected}, got {actual}")]
    TypeMismatch {
        accessor: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A value that should have been a present/absent wrapper was not one.
    #[error("expected an optional wrapper, got {actual}")]
    NotOptional { actual: &'static str },
}

impl BridgeError {
    pub fn accessor_not_found(accessor: impl Into<String>) -> Self {
        Self::AccessorNotFound { accessor: accessor.into() }
    }

    pub fn call(accessor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Call { accessor: accessor.into(), message: message.into() }
    }
}
