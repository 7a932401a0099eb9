use containerkit::ds::ArrayQueue;

/// A binary tree stored as a flat array: children of index `i` live at
/// `2i + 1` and `2i + 2`, with `None` marking an absent node.
const TREE: [Option<u32>; 15] = [
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    None,
    Some(6),
    Some(7),
    None,
    Some(9),
    None,
    None,
    Some(13),
    None,
    None,
    Some(15),
];

fn main() {
    // breadth-first traversal: visit a node, then queue its children; the
    // frontier never exceeds the tree size, so a bounded queue suffices
    let mut queue: ArrayQueue<usize> = ArrayQueue::with_capacity(TREE.len() + 1);
    queue.enqueue(0).unwrap();

    let mut visited = Vec::new();
    while let Ok(index) = queue.dequeue() {
        let Some(Some(value)) = TREE.get(index) else {
            continue;
        };
        visited.push(*value);
        queue.enqueue(2 * index + 1).unwrap();
        queue.enqueue(2 * index + 2).unwrap();
    }

    println!("level order: {visited:?}");
}
