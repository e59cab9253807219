//! Value error types

use crate::{CallSite, ErrorKind};
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// A context annotation attached while an error propagates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextFrame {
    /// Message describing what the caller was doing
    pub message: String,
    /// Where the annotation was added
    pub location: CallSite,
}

impl fmt::Display for ContextFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.location)
    }
}

/// Error produced by value accessors, casts and decimal construction.
///
/// Every error records the call site that raised it. Callers may add
/// context frames with [`ValueError::with_context`]; the outermost frame is
/// rendered first.
#[derive(Debug, Clone, Error)]
#[error("{}{message} at {location}", context_prefix(.context))]
pub struct ValueError {
    kind: ErrorKind,
    message: String,
    location: CallSite,
    context: SmallVec<[ContextFrame; 2]>,
}

fn context_prefix(frames: &[ContextFrame]) -> String {
    frames
        .iter()
        .rev()
        .map(|frame| format!("{}: ", frame.message))
        .collect()
}

impl ValueError {
    /// Create an error of the given kind at the caller's location
    #[track_caller]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: CallSite::caller(),
            context: SmallVec::new(),
        }
    }

    /// Create a nil value error
    #[track_caller]
    pub fn nil_value() -> Self {
        Self::new(ErrorKind::NilValue, "nil value")
    }

    /// Create a capability mismatch error
    #[track_caller]
    pub fn capability_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapabilityMismatch, message)
    }

    /// Create an incompatible cast error
    #[track_caller]
    pub fn cast_incompatible(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CastIncompatible, message)
    }

    /// Create an invalid decimal error
    #[track_caller]
    pub fn invalid_decimal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDecimal, message)
    }

    /// Attach a context frame recorded at the caller's location
    #[track_caller]
    pub fn with_context(mut self, message: impl Into<String>) -> Self {
        self.context.push(ContextFrame {
            message: message.into(),
            location: CallSite::caller(),
        });
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the message without location or context
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the call site that raised the error
    pub fn location(&self) -> CallSite {
        self.location
    }

    /// Context frames, innermost first
    pub fn context(&self) -> &[ContextFrame] {
        &self.context
    }

    pub fn is_nil_value(&self) -> bool {
        self.kind == ErrorKind::NilValue
    }

    pub fn is_capability_mismatch(&self) -> bool {
        self.kind == ErrorKind::CapabilityMismatch
    }

    pub fn is_cast_incompatible(&self) -> bool {
        self.kind == ErrorKind::CastIncompatible
    }
}

/// Extension for annotating results with context frames
pub trait ResultExt<T> {
    /// Attach a context frame to the error, if any
    #[track_caller]
    fn context(self, message: impl Into<String>) -> crate::Result<T>;
}

impl<T> ResultExt<T> for crate::Result<T> {
    #[track_caller]
    fn context(self, message: impl Into<String>) -> crate::Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(err.with_context(message)),
        }
    }
}
