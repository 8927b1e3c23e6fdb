//! Constants used throughout the libconf library.

/// Deepest nesting of groups, lists and arrays the parser accepts.
///
/// The parser is recursive; deeper input is reported as a parse error
/// instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;
