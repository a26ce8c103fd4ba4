use sparkspy_bridge::BridgeError;

/// A conversion failure: the bridge error plus the record type being built.
///
/// The underlying [`BridgeError`] is carried untouched — kind and message
/// are exactly what the bridge produced. The record name is context added
/// at the point the error is first raised; a failure inside a nested
/// conversion keeps the nested record's name all the way up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("converting {record}: {source}")]
pub struct ConvertError {
    pub record: &'static str,
    #[source]
    pub source: BridgeError,
}

impl ConvertError {
    pub fn new(record: &'static str, source: BridgeError) -> Self {
        Self { record, source }
    }
}
