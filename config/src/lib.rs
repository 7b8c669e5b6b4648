//! # Config Crate
//!
//! Centralized configuration constants for the statement tree crates.
//! Buffer sizes, recursion guards and pass limits are defined here so that
//! every crate renders and walks trees with the same settings.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{TextConfig, TEXT_INITIAL_CAPACITY};
//!
//! let config = TextConfig::default();
//! assert_eq!(config.initial_capacity, TEXT_INITIAL_CAPACITY);
//!
//! let buffer = String::with_capacity(config.initial_capacity);
//! assert!(buffer.capacity() >= TEXT_INITIAL_CAPACITY);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: Tunable groups are exposed as checked structs

pub mod constants;
