//! errors.rs - Custom error types for the fastformat-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `fastformat-core`
/// library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
///
/// Note that the transformation entry points themselves never surface these
/// errors: a rule that cannot compile is dropped and a rule that cannot be
/// applied is skipped, with the error's message carried in the per-rule
/// outcome report instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FastformatError {
    #[error("Failed to compile format rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Rule '{0}': replacement references non-existent capture group ${1}")]
    MissingCaptureGroup(String, usize),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
