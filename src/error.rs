//! Error types shared by every collection in the crate.

use core::fmt;

/// Error raised by fallible collection operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The requested capacity does not fit in `usize`, or its byte size
    /// exceeds `isize::MAX`.
    CapacityOverflow,
    /// The allocator refused a request of `bytes` bytes.
    OutOfMemory { bytes: usize },
    /// A configuration was rejected before any allocation happened.
    Config(ConfigError),
    /// A `Display`/`Debug` implementation reported an error while formatting.
    Format,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityOverflow => f.write_str("capacity overflow"),
            Error::OutOfMemory { bytes } => {
                write!(f, "failed to allocate {} bytes of memory", bytes)
            }
            Error::Config(e) => write!(f, "invalid configuration: {}", e),
            Error::Format => f.write_str("formatter error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// Rejected table configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `initial_capacity` was zero; doubling from zero never grows.
    ZeroInitialCapacity,
    /// `load_factor` was not a finite number in `(0, 1]`.
    InvalidLoadFactor(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroInitialCapacity => f.write_str("initial capacity must be non-zero"),
            ConfigError::InvalidLoadFactor(lf) => {
                write!(f, "load factor must be in (0, 1], got {}", lf)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
