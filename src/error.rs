//! Error types for snptrack
//!
//! Errors are only produced at construction time (building an exon map,
//! parsing a color, validating a position). All per-feature runtime paths
//! (classification, visibility, coordinate mapping, interpolation) are total
//! and resolve to conservative defaults instead of erroring, so a single
//! malformed feature can never abort a render pass.

use thiserror::Error;

/// Main error type for snptrack operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnptrackError {
    /// Invalid coordinate or range
    #[error("Invalid coordinates: {msg}")]
    InvalidCoordinates { msg: String },

    /// Color string could not be parsed as RGB hex
    #[error("Invalid color value: {value}")]
    InvalidColor { value: String },

    /// Exon map with no exons
    #[error("Exon map must contain at least one exon")]
    EmptyExonMap,
}
