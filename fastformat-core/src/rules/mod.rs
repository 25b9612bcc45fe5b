//! Rule compilation for the format cascade.
//!
//! This module converts the ordered `FormatRule` list into compiled regular
//! expressions ready for application. Compilation is best-effort: a
//! malformed pattern drops that single rule and never aborts the rest, so a
//! user-editable rule list tolerates an individual bad entry.

pub mod compiler;
