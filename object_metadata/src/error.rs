use thiserror::Error;

/// A logging sink refused or failed to record a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SinkError(pub String);

/// Any failure while reading a storage event or reporting its fields.
///
/// The `Display` text is the cause substituted into the error log line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The event carries no `id` or no `type` attribute.
    #[error("missing event attribute '{0}'")]
    MissingIdentity(&'static str),

    /// The event's `id` or `type` attribute is not a string.
    #[error("event attribute '{0}' is not a string")]
    InvalidIdentity(&'static str),

    /// The event carries no `data` object.
    #[error("event has no object payload")]
    MissingPayload,

    /// The logging sink faulted while recording a line.
    #[error("log sink failure: {0}")]
    Sink(#[from] SinkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_cause() {
        assert_eq!(
            ExtractionError::MissingIdentity("id").to_string(),
            "missing event attribute 'id'"
        );
        let err: ExtractionError = SinkError("disk full".to_string()).into();
        assert_eq!(err.to_string(), "log sink failure: disk full");
    }
}
