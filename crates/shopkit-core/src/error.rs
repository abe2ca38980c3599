//! # Error Types
//!
//! Domain-specific error types for shopkit-core.
//!
//! ## Error vs. Sentinel
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     How Bad Input Is Reported                           │
//! │                                                                         │
//! │  Precondition violated          → Err(CoreError::InvalidArgument)      │
//! │  ├── negative price                                                    │
//! │  ├── discount outside 0..=100                                          │
//! │  ├── negative tax rate                                                 │
//! │  └── non-positive weight/distance (legacy shipping only)               │
//! │                                                                         │
//! │  Input "not applicable"         → sentinel value, never an error       │
//! │  ├── missing product name       → ""                                   │
//! │  ├── unusable phone number      → None                                 │
//! │  └── invalid shipping inputs    → 0.0                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The message IS the user-facing text; Display adds no prefix
//! 3. Errors are raised at the violated precondition, never retried

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by shopkit-core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A function input violated its precondition.
    ///
    /// ## When This Occurs
    /// - `calculate_discounted_price(-10.0, 10.0)`
    /// - `calculate_tax(100.0, -5.0)`
    /// - Parsing an unknown customer tier name
    #[error("{0}")]
    InvalidArgument(String),
}

impl CoreError {
    /// Shorthand for building an [`CoreError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CoreError::InvalidArgument(message.into())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
