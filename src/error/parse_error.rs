#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during scanning and parsing.
///
/// Every positional variant carries the byte offset of the offending token
/// and a pre-rendered position diagram (see [`error_position`]) so that the
/// displayed message can point at the exact character in the source.
pub enum ParseError {
    /// The token sequence was empty before parsing started.
    EmptyExpression,
    /// The scanner encountered a character it cannot classify.
    UnknownSymbol {
        /// The offending character.
        symbol:  String,
        /// Byte offset of the character in the source.
        offset:  usize,
        /// Rendered position diagram pointing at the character.
        diagram: String,
    },
    /// A literal token could not be converted to a number.
    MalformedNumber {
        /// The conversion failure reported by the number parser.
        reason:  String,
        /// The offending literal text.
        literal: String,
        /// Byte offset of the literal in the source.
        offset:  usize,
        /// Rendered position diagram pointing at the literal.
        diagram: String,
    },
    /// An opening `(` was not followed by a matching `)` where expected.
    UnmatchedParen {
        /// What was found in place of the closing parenthesis.
        found:   String,
        /// Byte offset of the found token, or of the opening parenthesis
        /// when the expression ended early.
        offset:  usize,
        /// Rendered position diagram pointing at the position.
        diagram: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "empty token list"),

            Self::UnknownSymbol { symbol,
                                  offset,
                                  diagram, } => {
                write!(f, "Symbol error: unknown '{symbol}', position [{offset}:]\n{diagram}")
            },

            Self::MalformedNumber { reason,
                                    literal,
                                    diagram,
                                    .. } => {
                write!(f, "{reason}\nShould be '(' or '0-9' but get '{literal}'\n{diagram}")
            },

            Self::UnmatchedParen { found, diagram, .. } => {
                write!(f, "Should be ')' but get {found}\n{diagram}")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Renders the three-part framed position diagram used by all positional
/// errors.
///
/// Given the source text and a zero-based byte offset, the diagram is a
/// separator of dashes the byte length of the source, the source itself,
/// `offset` spaces followed by a caret, and the separator again, each on its
/// own line. The format is a compatibility surface for existing consumers;
/// do not change it.
///
/// # Parameters
/// - `source`: The original expression text.
/// - `offset`: Zero-based byte offset the caret points at.
///
/// # Returns
/// The rendered diagram, newline-terminated.
///
/// # Example
/// ```
/// use numera::error::error_position;
///
/// assert_eq!(error_position("3+@5", 2), "----\n3+@5\n  ^\n----\n");
/// ```
#[must_use]
pub fn error_position(source: &str, offset: usize) -> String {
    let separator = "-".repeat(source.len());
    let padding = " ".repeat(offset);

    format!("{separator}\n{source}\n{padding}^\n{separator}\n")
}
