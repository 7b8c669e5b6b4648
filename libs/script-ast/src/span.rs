//! # Source Span
//!
//! Byte range in the source text a node was built from. Tree builders attach
//! spans so later passes can point diagnostics at the original code.
//!
//! ## Usage
//!
//! ```rust
//! use script_ast::Span;
//!
//! let span = Span::new(0, 10);
//! assert_eq!(span.start(), 0);
//! assert_eq!(span.end(), 10);
//! assert_eq!(span.len(), 10);
//! ```

use serde::{Deserialize, Serialize};

/// A range in the source code, represented as byte offsets.
///
/// Nodes created without position information carry `Span::default()`,
/// the empty range at offset zero.
///
/// # Example
///
/// ```rust
/// use script_ast::Span;
///
/// // For source "if (x) y()" the span of the condition "x" would be:
/// let span = Span::new(4, 5);
/// assert_eq!(span.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Starting byte offset (inclusive)
    start: usize,
    /// Ending byte offset (exclusive)
    end: usize,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the starting byte offset.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the ending byte offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20);
        assert_eq!(span.start(), 10);
        assert_eq!(span.end(), 20);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::new(5, 5).is_empty());
        assert!(Span::new(10, 5).is_empty()); // Inverted span is empty
        assert!(!Span::new(0, 1).is_empty());
        assert_eq!(Span::new(10, 5).len(), 0);
    }

    #[test]
    fn test_span_default() {
        let span = Span::default();
        assert_eq!(span.start(), 0);
        assert!(span.is_empty());
    }
}
