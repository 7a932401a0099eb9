use containerkit::ds::ArrayStack;

/// Evaluates a whitespace-separated postfix expression.
fn eval_postfix(expr: &str) -> Option<f64> {
    // operand depth is bounded by the token count
    let mut stack: ArrayStack<f64> = ArrayStack::with_capacity(expr.split_whitespace().count());

    for token in expr.split_whitespace() {
        match token {
            "+" | "-" | "*" | "/" => {
                let rhs = stack.pop().ok()?;
                let lhs = stack.pop().ok()?;
                let result = match token {
                    "+" => lhs + rhs,
                    "-" => lhs - rhs,
                    "*" => lhs * rhs,
                    _ => lhs / rhs,
                };
                stack.push(result).ok()?;
            }
            number => stack.push(number.parse().ok()?).ok()?,
        }
    }

    let result = stack.pop().ok()?;
    // a well-formed expression consumes every operand
    stack.is_empty().then_some(result)
}

fn main() {
    for expr in ["3 4 + 2 *", "5 1 2 + 4 * + 3 -", "1 +", "2 3"] {
        match eval_postfix(expr) {
            Some(value) => println!("{expr:<20} = {value}"),
            None => println!("{expr:<20} = (malformed)"),
        }
    }
}
