use crate::ast::{BinaryOperator, Expr};

/// Evaluates an expression tree and returns the result.
///
/// Evaluation is a pure recursive walk with no I/O: a number node yields its
/// stored value, a binary node evaluates its left child, then its right
/// child, and applies the operator. `+`, `-` and `*` are ordinary
/// floating-point arithmetic. `%` truncates both operands to integers and
/// performs integer division, not a remainder: `7 % 2` is `3`, not `1`.
/// This is long-standing engine behavior and is kept deliberately.
///
/// # Parameters
/// - `root`: Root of the tree to evaluate.
///
/// # Returns
/// The computed value.
///
/// # Panics
/// Division by exact zero aborts the evaluation with a panic instead of
/// returning an error value. This fatal path is kept distinct from the
/// recoverable [`ParseError`](crate::error::ParseError) kinds on purpose;
/// callers observe it as a categorically different failure. A `%` whose
/// right operand truncates to zero likewise panics, via the underlying
/// integer division.
///
/// # Example
/// ```
/// use numera::interpreter::{evaluator::evaluate, lexer::scan, parser::AstBuilder};
///
/// let tokens = scan("3+5*(3+4)-9/3").unwrap();
/// let expr = AstBuilder::new(tokens, "3+5*(3+4)-9/3").unwrap()
///                                                    .parse_expression()
///                                                    .unwrap();
///
/// assert_eq!(evaluate(&expr), 35.0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn evaluate(root: &Expr) -> f64 {
    match root {
        Expr::Number { value } => *value,
        Expr::Binary { op, left, right } => {
            let lhs = evaluate(left);
            let rhs = evaluate(right);

            match op {
                BinaryOperator::Add => lhs + rhs,
                BinaryOperator::Sub => lhs - rhs,
                BinaryOperator::Mul => lhs * rhs,
                BinaryOperator::Div => {
                    if rhs == 0.0 {
                        panic!("division by zero: '{lhs}/{rhs}'");
                    }
                    lhs / rhs
                },
                BinaryOperator::Mod => ((lhs as i64) / (rhs as i64)) as f64,
            }
        },
    }
}
