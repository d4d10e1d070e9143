/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and applies operator semantics to produce
/// the final floating-point result. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported arithmetic operations.
/// - Preserves the engine's historical operator quirks (see the module
///   items).
/// - Aborts on division by zero, the engine's one fatal failure mode.
pub mod evaluator;
/// The lexer module tokenizes a source expression for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence
/// of tokens corresponding to numeric literals, operators and parentheses.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and byte
///   offset.
/// - Skips whitespace between tokens.
/// - Reports lexical errors for characters outside the token alphabet.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST using recursive descent with operator-precedence
/// climbing for binary operators.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces precedence, associativity and parenthesis matching.
/// - Reports syntax errors with position diagrams, never exposing a partial
///   tree.
pub mod parser;
