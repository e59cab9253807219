//! Value error kinds
//!
//! Each kind carries a stable numeric code:
//! - YQLV0001: nil value passed where a value is required
//! - YQLV0002: value kind does not support the requested accessor
//! - YQLV0003: value cannot be cast into the requested destination
//! - YQLV0004: decimal construction with out-of-range digits

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a [`ValueError`](crate::ValueError)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The input value reference was absent
    NilValue,
    /// The value's runtime kind does not support the requested accessor
    CapabilityMismatch,
    /// Value and destination are well-formed but structurally incompatible
    CastIncompatible,
    /// Decimal parts violate precision/scale limits
    InvalidDecimal,
}

impl ErrorKind {
    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        match self {
            Self::NilValue => 1,
            Self::CapabilityMismatch => 2,
            Self::CastIncompatible => 3,
            Self::InvalidDecimal => 4,
        }
    }

    /// Short description of the kind
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NilValue => "nil value",
            Self::CapabilityMismatch => "capability mismatch",
            Self::CastIncompatible => "incompatible cast",
            Self::InvalidDecimal => "invalid decimal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YQLV{:04}", self.code())
    }
}
