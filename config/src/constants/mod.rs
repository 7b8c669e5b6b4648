//! Centralized configuration values shared across the statement tree crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

// =============================================================================
// TEXT RECONSTRUCTION
// =============================================================================

/// Initial capacity of the buffer used when reconstructing statement text.
///
/// Sized for a short conditional such as `if (x) y(); else z()`; longer
/// output simply grows the buffer.
///
/// # Examples
/// ```
/// use config::constants::TEXT_INITIAL_CAPACITY;
/// assert!(TEXT_INITIAL_CAPACITY >= 16);
/// ```
pub const TEXT_INITIAL_CAPACITY: usize = 64;

// =============================================================================
// RECURSION GUARDS
// =============================================================================

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which a recursive walk switches to a freshly
/// allocated segment of [`STACKER_STACK_SIZE_BYTES`].
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 128 * 1024;

// =============================================================================
// PASS LIMITS
// =============================================================================

/// Maximum number of diagnostics a single validation pass records.
///
/// Findings past this limit are counted but dropped.
///
/// # Examples
/// ```
/// use config::constants::MAX_DIAGNOSTICS;
/// assert!(MAX_DIAGNOSTICS >= 16);
/// ```
pub const MAX_DIAGNOSTICS: usize = 256;

/// Immutable snapshot of the settings used by text reconstruction.
///
/// # Examples
/// ```
/// use config::constants::TextConfig;
/// let config = TextConfig::default();
/// assert!(config.red_zone_bytes < config.stack_growth_bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextConfig {
    /// Capacity reserved for the output buffer before rendering starts.
    pub initial_capacity: usize,
    /// Remaining stack that triggers a switch to a new stack segment.
    pub red_zone_bytes: usize,
    /// Size of each stack segment allocated for deep trees.
    pub stack_growth_bytes: usize,
}

impl TextConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// sizes.
    ///
    /// # Examples
    /// ```
    /// use config::constants::TextConfig;
    /// let cfg = TextConfig::new(128, 64 * 1024, 1024 * 1024).expect("valid config");
    /// assert_eq!(cfg.initial_capacity, 128);
    /// ```
    pub fn new(
        initial_capacity: usize,
        red_zone_bytes: usize,
        stack_growth_bytes: usize,
    ) -> Result<Self, ConfigError> {
        if initial_capacity == 0 {
            return Err(ConfigError::InvalidCapacity(initial_capacity));
        }
        if red_zone_bytes == 0 || red_zone_bytes >= stack_growth_bytes {
            return Err(ConfigError::InvalidStackSizes {
                red_zone: red_zone_bytes,
                growth: stack_growth_bytes,
            });
        }
        Ok(Self {
            initial_capacity,
            red_zone_bytes,
            stack_growth_bytes,
        })
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            initial_capacity: TEXT_INITIAL_CAPACITY,
            red_zone_bytes: STACKER_RED_ZONE_BYTES,
            stack_growth_bytes: STACKER_STACK_SIZE_BYTES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Raised when the text buffer capacity is zero.
    #[error("initial_capacity must be positive: {0}")]
    InvalidCapacity(usize),
    /// Raised when the red zone is empty or does not fit inside a segment.
    #[error("red zone ({red_zone} bytes) must be positive and smaller than the growth size ({growth} bytes)")]
    InvalidStackSizes { red_zone: usize, growth: usize },
}
