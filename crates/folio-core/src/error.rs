use thiserror::Error;

/// Failures of the persistent key-value store behind the theme
/// preference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
  #[error("storage is unavailable")]
  Unavailable,
  #[error("failed reading `{key}`: {reason}")]
  Read {
    key:    String,
    reason: String
  },
  #[error("failed writing `{key}`: {reason}")]
  Write {
    key:    String,
    reason: String
  }
}

/// Failures of the rendering surface that carries the dark flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
  #[error("rendering surface is unavailable")]
  Unavailable,
  #[error("rendering surface rejected `{class}`: {reason}")]
  Rejected {
    class:  String,
    reason: String
  }
}
