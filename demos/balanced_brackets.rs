use containerkit::ds::LinkedStack;

/// Checks whether every bracket in `input` is closed in the right order.
fn is_balanced(input: &str) -> bool {
    let mut stack: LinkedStack<char> = LinkedStack::new();

    for c in input.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Ok(open) if open == expected => {}
                    _ => return false,
                }
            }
            _ => {}
        }
    }

    stack.is_empty()
}

fn main() {
    for input in ["(a[b]{c})", "([)]", "((", "fn main() { let x = v[0]; }"] {
        println!("{input:<30} balanced: {}", is_balanced(input));
    }
}
