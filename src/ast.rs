use std::collections::VecDeque;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed sum type with exactly two variants: a numeric leaf and
/// a binary operation. Both children of a binary node are fully-formed
/// expressions by construction; the builder fails with an error instead of
/// ever exposing a partial tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal leaf.
    Number {
        /// The literal's value.
        value: f64,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Returns the height of the expression tree.
    ///
    /// A leaf has depth 1; a binary node is one deeper than its deepest
    /// child.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::{lexer::scan, parser::AstBuilder};
    ///
    /// let tokens = scan("1+2*3").unwrap();
    /// let expr = AstBuilder::new(tokens, "1+2*3").unwrap().parse_expression().unwrap();
    ///
    /// assert_eq!(expr.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Renders the tree breadth-first, level by level.
    ///
    /// Each line holds one tree depth: the labels of that level's nodes from
    /// left to right, each label followed by a tab. Number leaves render as
    /// `( <value> )` with the value rounded to zero decimals, binary nodes as
    /// `(L <op> R)`.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::{lexer::scan, parser::AstBuilder};
    ///
    /// let tokens = scan("1+2*3").unwrap();
    /// let expr = AstBuilder::new(tokens, "1+2*3").unwrap().parse_expression().unwrap();
    ///
    /// assert_eq!(expr.level_order(), "(L + R)\t\n( 1 )\t(L * R)\t\n( 2 )\t( 3 )\t\n");
    /// ```
    #[must_use]
    pub fn level_order(&self) -> String {
        let mut rendered = String::new();
        let mut queue = VecDeque::from([self]);

        while !queue.is_empty() {
            let layer_size = queue.len();

            for _ in 0..layer_size {
                let Some(node) = queue.pop_front() else {
                    break;
                };

                if let Self::Binary { left, right, .. } = node {
                    queue.push_back(left.as_ref());
                    queue.push_back(right.as_ref());
                }

                rendered.push_str(&node.label());
                rendered.push('\t');
            }
            rendered.push('\n');
        }

        rendered
    }

    /// Gets the display label of a single node.
    fn label(&self) -> String {
        match self {
            Self::Number { value } => format!("( {value:.0} )"),
            Self::Binary { op, .. } => format!("(L {op} R)"),
        }
    }
}

/// Represents a binary operator.
///
/// These are the only operators that can appear in a well-formed tree; the
/// builder maps operator tokens through this closed set, so evaluation never
/// sees an unknown operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
