use crate::script::ParseError;

/// Failures of the store-level trigger operations.
///
/// Runtime script failures are deliberately absent: activation errors
/// are never caught or translated by this layer and travel as
/// `anyhow::Error` to the host's own error path.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    /// Script source failed to compile at add time. No mutation occurred.
    #[error("failed to parse script for `{name}`: {source}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },

    /// Read or write failure against the persistence directory.
    #[error("i/o failure for `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The name (or one of its aliases) is already bound.
    #[error("command `{0}` is already bound")]
    DuplicateBinding(String),

    /// Removal of a name that is not bound.
    #[error("command `{0}` is not bound")]
    MissingBinding(String),
}
