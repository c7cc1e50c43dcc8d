//! Error taxonomy for theme persistence and DOM projection.
//!
//! None of these are fatal to the page. The controller and the browser
//! entry point log them and continue.

/// Error returned by the store and DOM seams and by config parsing.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A stored or configured value is not `light` or `dark`.
    #[error("invalid theme value: {0:?}")]
    InvalidTheme(String),
    /// The persistent store could not be obtained at all.
    #[error("persistent storage is unavailable")]
    StorageUnavailable,
    /// The persistent store rejected a read or write.
    #[error("storage error: {0}")]
    Storage(String),
    /// A DOM lookup or mutation failed.
    #[error("dom error: {0}")]
    Dom(String),
    /// Configuration JSON could not be parsed.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}
