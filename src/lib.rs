//! # numera
//!
//! numera is an arithmetic expression interpreter written in Rust.
//! It scans, parses, and evaluates expressions like `3+5*(3+4)-9/3`,
//! reporting precise, position-annotated errors on malformed input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::evaluate, lexer::scan, parser::AstBuilder};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an arithmetic expression as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression tree as a closed sum type.
/// - Provides tree inspection helpers such as depth and a level-order dump.
pub mod ast;
/// Provides unified error types for scanning and parsing.
///
/// This module defines all recoverable errors the pipeline can raise before
/// evaluation. It standardizes error reporting and carries detailed
/// information about failures, including byte offsets and rendered position
/// diagrams for user feedback.
///
/// # Responsibilities
/// - Defines the error enum for all scan and parse failure modes.
/// - Renders the framed caret diagram shared by all positional errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing and evaluation to provide a
/// complete pipeline for arithmetic expressions. Data flows strictly one
/// way: text → tokens → AST → result.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser and evaluator.
/// - Provides entry points for scanning, building and evaluating
///   expressions.
pub mod interpreter;

/// Evaluates an arithmetic expression from source text.
///
/// This function runs the full pipeline (scan, build, evaluate) for a
/// single expression and returns the computed result. Each call is
/// independent and stateless; concurrent calls share nothing.
///
/// # Errors
/// Returns a [`ParseError`](error::ParseError) when the expression cannot be
/// scanned or parsed: empty input, an unknown symbol, a malformed number, or
/// an unmatched parenthesis.
///
/// # Panics
/// Division by exact zero aborts evaluation with a panic rather than an
/// error value; see [`evaluate`](interpreter::evaluator::evaluate).
///
/// # Examples
/// ```
/// use numera::evaluate_expression;
///
/// let result = evaluate_expression("3+5*(3+4)-9/3").unwrap();
/// assert_eq!(result, 35.0);
///
/// // Malformed input surfaces a recoverable error.
/// assert!(evaluate_expression("3+@5").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, error::ParseError> {
    let tokens = scan(source)?;
    let expr = AstBuilder::new(tokens, source)?.parse_expression()?;

    Ok(evaluate(&expr))
}
