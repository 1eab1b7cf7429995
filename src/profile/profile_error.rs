use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors, fatal to building or resetting a mission.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot find profile '{name}' at {}", path.display())]
    NotFound { name: String, path: PathBuf },
    #[error("error reading profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile is corrupted or missing a key: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid profile: {0}")]
    Invalid(String),
}
