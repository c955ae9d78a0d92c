//! Hash table tunables.

use crate::error::ConfigError;

/// Slot count of a table's first allocation.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;
/// Occupancy ratio a table may reach before it grows.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Growth parameters for a `HashTable`.
///
/// ```
/// use simple_collections::TableConfig;
///
/// let config = TableConfig::new().initial_capacity(64).load_factor(0.5);
/// assert!(config.validate().is_ok());
/// assert!(TableConfig::new().load_factor(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize,
    pub load_factor: f64,
}

impl TableConfig {
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroInitialCapacity);
        }
        let lf = self.load_factor;
        if !lf.is_finite() || lf <= 0.0 || lf > 1.0 {
            return Err(ConfigError::InvalidLoadFactor(lf));
        }
        Ok(())
    }

    /// Whether `count` entries fit in `capacity` slots under the load factor.
    #[inline]
    pub(crate) fn admits(&self, count: usize, capacity: usize) -> bool {
        capacity as f64 * self.load_factor >= count as f64
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
