#![no_main]

use std::collections::VecDeque;

use containerkit::ds::ArrayQueue;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on ArrayQueue
//
// Picks a small capacity (including zero) from the first byte, then runs
// random enqueue/dequeue/peek/clear sequences against a VecDeque shadow
// model with the same capacity rule. Small capacities force frequent
// wraparound of the circular index.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = data[0] as usize % 8;
    let mut queue: ArrayQueue<u32> = ArrayQueue::with_capacity(capacity);
    let mut model: VecDeque<u32> = VecDeque::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                let result = queue.enqueue(value);
                if model.len() < capacity {
                    assert!(result.is_ok());
                    model.push_back(value);
                } else {
                    assert_eq!(result.unwrap_err().into_inner(), value);
                }
            }
            1 => {
                let dequeued = queue.dequeue();
                assert_eq!(dequeued.ok(), model.pop_front());
            }
            2 => {
                assert_eq!(queue.front().ok(), model.front());
                assert_eq!(queue.rear().ok(), model.back());
            }
            3 => {
                let collected: Vec<u32> = queue.iter().copied().collect();
                let expected: Vec<u32> = model.iter().copied().collect();
                assert_eq!(collected, expected);
            }
            4 => {
                queue.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.is_empty(), model.is_empty());
        assert_eq!(queue.is_full(), model.len() == capacity);
        assert_eq!(queue.capacity(), capacity);

        idx += 2;
    }
});
