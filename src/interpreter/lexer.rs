use logos::Logos;

use crate::error::{ParseError, error_position};

/// Represents a lexical token kind in the source expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in an arithmetic expression.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\v\f\r]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14` or `1_000`.
    ///
    /// A literal is a maximal run of digits, `.`, `_` and `e` starting with a
    /// digit. Underscores are visual separators and are stripped from the
    /// token text here. The text is not validated as a number at scan time;
    /// malformed literals like `2e` or `3.5.6` are rejected by the builder.
    #[regex(r"[0-9][0-9._e]*", |lex| lex.slice().replace('_', ""))]
    Literal(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Literal(text) => text.as_str(),
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
        };
        write!(f, "{text}")
    }
}

/// A token produced by the scanner.
///
/// Tokens are immutable once produced: the scanner creates them, the builder
/// consumes them, and they are discarded after AST construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is, including literal text where applicable.
    pub kind:   TokenKind,
    /// Byte offset of the token's first character in the source expression.
    pub offset: usize,
}

/// Scans a source expression into an ordered token sequence.
///
/// The scanner skips whitespace between tokens and records the byte offset of
/// every token's first character for diagnostics. The full input is scanned
/// before parsing begins; empty input yields an empty sequence, which the
/// builder rejects separately.
///
/// # Parameters
/// - `source`: The expression text to scan.
///
/// # Returns
/// All tokens of the expression, in source order.
///
/// # Errors
/// Returns [`ParseError::UnknownSymbol`] when a character outside the token
/// alphabet is encountered, carrying the character, its byte offset, and a
/// rendered position diagram.
///
/// # Example
/// ```
/// use numera::interpreter::lexer::scan;
///
/// let tokens = scan("3 + 4").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].offset, 4);
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => {
                tokens.push(Token { kind,
                                    offset: lexer.span().start, });
            },
            Err(()) => {
                let offset = lexer.span().start;
                return Err(ParseError::UnknownSymbol { symbol:  lexer.slice().to_string(),
                                                       offset,
                                                       diagram: error_position(source, offset), });
            },
        }
    }

    Ok(tokens)
}
