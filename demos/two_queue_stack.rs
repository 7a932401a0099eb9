use containerkit::ds::LinkedQueue;
use containerkit::error::EmptyError;

/// A LIFO stack built from two FIFO queues: push is O(1), pop rotates all
/// but the last element from the main queue into the spare, then swaps them.
struct TwoQueueStack<T> {
    main: LinkedQueue<T>,
    spare: LinkedQueue<T>,
}

impl<T> TwoQueueStack<T> {
    fn new() -> Self {
        Self {
            main: LinkedQueue::new(),
            spare: LinkedQueue::new(),
        }
    }

    fn push(&mut self, value: T) {
        self.main.enqueue(value);
    }

    fn pop(&mut self) -> Result<T, EmptyError> {
        while self.main.len() > 1 {
            let value = self.main.dequeue()?;
            self.spare.enqueue(value);
        }
        let top = self.main.dequeue()?;
        std::mem::swap(&mut self.main, &mut self.spare);
        Ok(top)
    }

    fn len(&self) -> usize {
        self.main.len()
    }
}

fn main() {
    let mut stack = TwoQueueStack::new();
    for v in [10, 20, 30, 40] {
        stack.push(v);
        println!("push {v}");
    }

    while stack.len() > 0 {
        println!("pop  {}", stack.pop().unwrap());
    }
}
