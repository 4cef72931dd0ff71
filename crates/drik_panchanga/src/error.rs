//! Error type for the calendar decision layer.
//!
//! The numerical kernel is total; errors only arise from invalid external
//! input at the public conversion surfaces.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from panchanga and solar calendar conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PanchangaError {
    /// A caller-supplied date or month is outside its valid range.
    InvalidInput(&'static str),
}

impl Display for PanchangaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for PanchangaError {}
