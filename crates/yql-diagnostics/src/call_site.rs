//! Call-site tracking for value errors

use serde::Serialize;
use std::fmt;
use std::panic::Location;

/// Source position in Rust code where an error was raised or annotated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CallSite {
    /// Source file path as reported by the compiler
    pub file: &'static str,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl CallSite {
    /// Create a new call site
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Capture the location of the caller.
    ///
    /// Propagates through every `#[track_caller]` frame, so the recorded
    /// position is the first caller without the attribute.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_points_at_this_file() {
        let site = CallSite::caller();
        assert!(site.file.ends_with("call_site.rs"));
        assert!(site.line > 0);
    }

    #[test]
    fn test_display() {
        let site = CallSite::new("src/lib.rs", 12, 5);
        assert_eq!(site.to_string(), "src/lib.rs:12:5");
    }
}
