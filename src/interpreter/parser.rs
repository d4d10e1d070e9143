use crate::{
    ast::{BinaryOperator, Expr},
    error::{ParseError, error_position},
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maps a token kind to its binary-operator precedence.
///
/// Higher precedence binds tighter. Addition and subtraction sit at 10,
/// multiplication, division and modulo at 20. Every other token (literals,
/// parentheses) maps to -1, which terminates the precedence climb.
///
/// The table is a process-wide constant: it is never mutated at runtime, so
/// concurrent parse invocations need no synchronization.
///
/// # Example
/// ```
/// use numera::interpreter::{lexer::TokenKind, parser::precedence};
///
/// assert_eq!(precedence(&TokenKind::Plus), 10);
/// assert_eq!(precedence(&TokenKind::Star), 20);
/// assert_eq!(precedence(&TokenKind::RParen), -1);
/// ```
#[must_use]
pub const fn precedence(kind: &TokenKind) -> i32 {
    match kind {
        TokenKind::Plus | TokenKind::Minus => 10,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => 20,
        _ => -1,
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for the five operator tokens `+`, `-`,
/// `*`, `/` and `%`, and `None` for all other tokens.
///
/// # Example
/// ```
/// use numera::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

/// Builds an expression tree from a token sequence.
///
/// The builder owns a cursor over the tokens of a single parse invocation,
/// together with the original source text for diagnostics. Advancing the
/// cursor is the builder's only mutation; errors are threaded through
/// `Result` and short-circuit all further work, so a partial tree is never
/// exposed.
///
/// Recursion depth equals the nesting depth of parentheses and operator
/// chains, bounded by the input length.
pub struct AstBuilder<'src> {
    /// Results from lexical analysis.
    tokens: Vec<Token>,
    /// The original expression, used to render position diagrams.
    source: &'src str,
    /// Cursor into `tokens`.
    pos:    usize,
}

impl<'src> AstBuilder<'src> {
    /// Creates a builder over a scanned token sequence.
    ///
    /// # Parameters
    /// - `tokens`: Tokens produced by [`scan`](crate::interpreter::lexer::scan).
    /// - `source`: The original expression the tokens came from.
    ///
    /// # Errors
    /// Returns [`ParseError::EmptyExpression`] when `tokens` is empty.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::{lexer::scan, parser::AstBuilder};
    ///
    /// let tokens = scan("2+3*4").unwrap();
    /// let expr = AstBuilder::new(tokens, "2+3*4").unwrap()
    ///                                             .parse_expression()
    ///                                             .unwrap();
    ///
    /// assert_eq!(expr.depth(), 3);
    /// ```
    pub fn new(tokens: Vec<Token>, source: &'src str) -> ParseResult<Self> {
        if tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        Ok(Self { tokens,
                  source,
                  pos: 0 })
    }

    /// Gets the token under the cursor, or `None` once the cursor has moved
    /// past the end of the sequence.
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Advances the cursor by one token and returns the new current token.
    ///
    /// Running off the end yields `None`; the climbing loop treats that as
    /// an end condition rather than an error.
    fn advance(&mut self) -> Option<&Token> {
        self.pos += 1;
        self.tokens.get(self.pos)
    }

    /// Gets the precedence of the token under the cursor, or -1 when the
    /// cursor is exhausted.
    fn current_precedence(&self) -> i32 {
        self.current().map_or(-1, |token| precedence(&token.kind))
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It parses a primary
    /// expression and then climbs binary operators via `parse_binary_op_rhs`,
    /// starting from the lowest precedence.
    ///
    /// Grammar: `expression := primary (operator primary)*`
    ///
    /// # Returns
    /// The root of the parsed expression tree.
    ///
    /// # Errors
    /// Propagates any error from primary parsing or the operator climb.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let lhs = self.parse_primary()?;

        if self.advance().is_none() {
            return Ok(lhs);
        }

        self.parse_binary_op_rhs(0, lhs)
    }

    /// Climbs binary operators to the right of an already-parsed operand.
    ///
    /// Standard precedence climbing: while the current operator's precedence
    /// is at least `min_precedence`, consume the operator and parse the
    /// right-hand primary. When the *next* operator binds tighter than the
    /// current one, it is recursively absorbed into the right-hand side
    /// before combining. Equal-precedence operators therefore group to the
    /// left, while tighter runs group to the right.
    ///
    /// An exhausted cursor ends the climb: a trailing operator is dropped
    /// and the expression parsed so far is returned.
    ///
    /// # Parameters
    /// - `min_precedence`: Smallest operator precedence this call may
    ///   consume.
    /// - `lhs`: The operand parsed so far.
    ///
    /// # Returns
    /// `lhs` extended by every operator this call consumed.
    fn parse_binary_op_rhs(&mut self, min_precedence: i32, mut lhs: Expr) -> ParseResult<Expr> {
        loop {
            let token_precedence = self.current_precedence();
            if token_precedence < min_precedence {
                return Ok(lhs);
            }

            // The precedence gate only lets the five operator tokens through.
            let Some(op) = self.current()
                               .and_then(|token| token_to_binary_operator(&token.kind))
            else {
                return Ok(lhs);
            };

            if self.advance().is_none() {
                return Ok(lhs);
            }

            let mut rhs = self.parse_primary()?;

            if self.advance().is_none() {
                return Ok(Expr::Binary { op,
                                         left: Box::new(lhs),
                                         right: Box::new(rhs) });
            }

            let next_precedence = self.current_precedence();
            if token_precedence < next_precedence {
                rhs = self.parse_binary_op_rhs(token_precedence + 1, rhs)?;
            }

            lhs = Expr::Binary { op,
                                 left: Box::new(lhs),
                                 right: Box::new(rhs) };
        }
    }

    /// Parses a primary (atomic) expression.
    ///
    /// A primary is either a numeric literal or a parenthesized
    /// sub-expression. Any other token is routed through number parsing on
    /// purpose, so that unexpected tokens surface the same "should be `(` or
    /// `0-9`" diagnostic as a malformed literal.
    ///
    /// Grammar: `primary := literal | "(" expression ")"`
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        // Every call site checks the cursor before descending into a primary.
        let open_paren = self.current()
                             .map(|token| (matches!(token.kind, TokenKind::LParen), token.offset));

        match open_paren {
            Some((true, offset)) => self.parse_grouping(offset),
            _ => self.parse_number(),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// The cursor sits on `(` when this is called. The function steps past
    /// it, parses the enclosed expression, and requires the current token to
    /// be `)`. The closing parenthesis is left under the cursor for the
    /// caller to step over.
    ///
    /// # Parameters
    /// - `open_offset`: Byte offset of the opening parenthesis, reported
    ///   when the expression ends before a `)` is found.
    ///
    /// # Errors
    /// Returns [`ParseError::UnmatchedParen`] when the closing parenthesis
    /// is missing.
    fn parse_grouping(&mut self, open_offset: usize) -> ParseResult<Expr> {
        if self.advance().is_none() {
            return Err(ParseError::UnmatchedParen { found:   "end of expression".to_string(),
                                                    offset:  open_offset,
                                                    diagram: error_position(self.source,
                                                                            open_offset), });
        }

        let inner = self.parse_expression()?;

        match self.current() {
            Some(token) if matches!(token.kind, TokenKind::RParen) => Ok(inner),
            Some(token) => {
                Err(ParseError::UnmatchedParen { found:   token.kind.to_string(),
                                                 offset:  token.offset,
                                                 diagram: error_position(self.source,
                                                                         token.offset), })
            },
            None => {
                Err(ParseError::UnmatchedParen { found:   "end of expression".to_string(),
                                                 offset:  open_offset,
                                                 diagram: error_position(self.source,
                                                                         open_offset), })
            },
        }
    }

    /// Parses the token under the cursor as a numeric literal.
    ///
    /// The token's text is converted to a 64-bit float. The cursor is not
    /// advanced; callers step over the literal themselves.
    ///
    /// # Errors
    /// Returns [`ParseError::MalformedNumber`] carrying the conversion
    /// failure, the offending text, and a position diagram when the text is
    /// not a valid number.
    fn parse_number(&self) -> ParseResult<Expr> {
        // Dispatch in parse_primary guarantees a token under the cursor.
        let token = self.current().unwrap();
        let text = token.kind.to_string();

        match text.parse::<f64>() {
            Ok(value) => Ok(Expr::Number { value }),
            Err(reason) => {
                Err(ParseError::MalformedNumber { reason: reason.to_string(),
                                                  literal: text,
                                                  offset: token.offset,
                                                  diagram: error_position(self.source,
                                                                          token.offset) })
            },
        }
    }
}
