/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// source expression, along with the position diagram renderer they share.
/// Parse errors include unknown symbols, malformed literals, unmatched
/// parentheses, and empty input.
pub mod parse_error;

pub use parse_error::{ParseError, error_position};
