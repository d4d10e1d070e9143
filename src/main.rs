use clap::Parser;
use numera::interpreter::{evaluator::evaluate, lexer::scan, parser::AstBuilder};

/// numera is an easy to use interpreter for arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the expression tree level by level before the result.
    #[arg(short, long)]
    tree: bool,

    /// The expression to evaluate, e.g. '3+5*(3+4)-9/3'.
    expression: String,
}

fn main() {
    let args = Args::parse();

    let tokens = match scan(&args.expression) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Invalid expression: {e}");
            std::process::exit(1);
        },
    };

    let builder = AstBuilder::new(tokens, &args.expression);
    let expr = match builder.and_then(|mut builder| builder.parse_expression()) {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("Invalid expression: {e}");
            std::process::exit(1);
        },
    };

    if args.tree {
        print!("{}", expr.level_order());
    }

    let result = evaluate(&expr);

    println!("The calculation result of math expression '{}' is {result:.2}",
             args.expression);
}
