// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

/// Errors surfaced by fallible setup operations (configuration I/O).
///
/// The alert lifecycle itself never fails: completions always resolve with
/// an [`Outcome`](crate::alert::Outcome).
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
}

/// Failures reported by a [`Surface`](crate::surface::Surface).
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SurfaceError {
    /// The alert container is not mounted; the operation is skipped.
    #[error("alert container is not available")]
    MissingContainer,
    /// The surface refused to render for another reason.
    #[error("surface rejected the operation: {0}")]
    Rejected(String),
}

/// Failures reported by a [`SoundPlayer`](crate::registry::SoundPlayer).
///
/// Playback errors are logged and never affect an alert's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum SoundError {
    /// The host refused to start playback (e.g. autoplay policy).
    #[error("sound playback was blocked")]
    Blocked,
    /// The sound source could not be loaded or decoded.
    #[error("sound unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
