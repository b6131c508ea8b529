//! Error types for combinator configuration.
//!
//! Waiting on signals cannot fail; the only errors come from building an
//! [`OrChannel`](crate::OrChannel) with settings it cannot honor.

/// Errors that can occur while configuring an [`OrChannel`](crate::OrChannel)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrError {
    /// Fan-in width too small to make progress when recursing into the tail
    InvalidFanIn { width: usize },
}

impl std::fmt::Display for OrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrError::InvalidFanIn { width } => {
                write!(
                    f,
                    "Invalid fan-in width {}: each watcher must observe at least 2 signals.\n\
                     \n\
                     A width of 0 or 1 would never shrink the nested tail of inputs.",
                    width
                )
            }
        }
    }
}

impl std::error::Error for OrError {}

/// Result type for combinator configuration
pub type OrResult<T> = Result<T, OrError>;
