//! Crate error type.
//!
//! The calculation core throws only on missing reference data. Degenerate
//! numeric inputs are clamped or defaulted, and electrical validation
//! findings are collected as [`crate::design::report::Diagnostic`] entries
//! rather than surfaced as errors.

use thiserror::Error;

/// Errors returned by the calculation core.
#[derive(Debug, Error)]
pub enum Error {
    /// Required reference data could not be resolved. Fatal for the
    /// requested calculation; the caller must not proceed.
    #[error("data not found: {what}")]
    DataNotFound {
        /// Description of the missing data (e.g. "solar profile").
        what: String,
    },
}

impl Error {
    /// Convenience constructor for [`Error::DataNotFound`].
    pub fn data_not_found(what: impl Into<String>) -> Self {
        Self::DataNotFound { what: what.into() }
    }
}
