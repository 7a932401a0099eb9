// ==============================================
// CROSS-CONTAINER INVARIANT TESTS (integration)
// ==============================================
//
// Tests that verify library-wide behavioral consistency across all container
// backings. These span multiple modules and belong here rather than in any
// single source file.

// ==============================================
// Capacity-0 Behavior
// ==============================================
//
// A zero capacity is legal and degenerate: the container is simultaneously
// empty and full, every insert is refused, and the refusal happens before
// any modular arithmetic could divide by zero.

mod array_stack_zero_capacity {
    use containerkit::ds::ArrayStack;

    #[test]
    fn capacity_zero_is_honored() {
        let stack: ArrayStack<i32> = ArrayStack::with_capacity(0);

        assert_eq!(
            stack.capacity(),
            0,
            "ArrayStack::with_capacity(0) should honor capacity=0, not coerce to {}",
            stack.capacity()
        );
        assert!(stack.is_empty());
        assert!(stack.is_full());
    }

    #[test]
    fn capacity_zero_rejects_pushes() {
        let mut stack: ArrayStack<i32> = ArrayStack::with_capacity(0);
        let err = stack.push(42).unwrap_err();

        assert_eq!(err.into_inner(), 42, "rejected value must come back intact");
        assert_eq!(stack.len(), 0, "ArrayStack with capacity=0 should reject pushes");
    }
}

mod array_queue_zero_capacity {
    use containerkit::ds::ArrayQueue;
    use containerkit::error::EmptyError;

    #[test]
    fn capacity_zero_is_honored() {
        let queue: ArrayQueue<i32> = ArrayQueue::with_capacity(0);

        assert_eq!(queue.capacity(), 0);
        assert!(queue.is_empty());
        assert!(queue.is_full());
    }

    #[test]
    fn capacity_zero_rejects_enqueues_without_modulo_panic() {
        let mut queue: ArrayQueue<i32> = ArrayQueue::with_capacity(0);

        let err = queue.enqueue(1).unwrap_err();
        assert_eq!(err.into_inner(), 1);

        assert_eq!(queue.dequeue(), Err(EmptyError));
        assert_eq!(queue.front(), Err(EmptyError));
        assert_eq!(queue.rear(), Err(EmptyError));
    }
}

// ==============================================
// No Partial Mutation on Failure
// ==============================================
//
// Every precondition is checked before any state changes, so a container
// that reported an error is byte-for-byte the container it was before.

mod error_then_usable {
    use containerkit::ds::{ArrayQueue, ArrayStack, Deque, SinglyLinkedList};
    use containerkit::error::EmptyError;

    #[test]
    fn full_stack_survives_rejected_push() {
        let mut stack = ArrayStack::with_capacity(2);
        stack.push("a").unwrap();
        stack.push("b").unwrap();

        assert!(stack.push("c").is_err());

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok("b"));
        assert_eq!(stack.pop(), Ok("a"));
        assert_eq!(stack.pop(), Err(EmptyError));

        // and it is immediately reusable after underflow too
        stack.push("d").unwrap();
        assert_eq!(stack.peek(), Ok(&"d"));
    }

    #[test]
    fn full_queue_preserves_order_across_rejection() {
        let mut queue = ArrayQueue::with_capacity(2);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();

        assert_eq!(queue.enqueue(3).unwrap_err().into_inner(), 3);

        assert_eq!(queue.to_vec(), vec![1, 2], "rejected enqueue must not disturb contents");
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
    }

    #[test]
    fn list_index_errors_leave_list_intact() {
        let mut list = SinglyLinkedList::new();
        list.push_back(10);
        list.push_back(20);

        assert!(list.insert_at(3, 99).is_err());
        assert!(list.remove_at(2).is_err());
        assert!(list.get(2).is_err());

        assert_eq!(list.to_vec(), vec![10, 20]);
        list.debug_validate_invariants();
    }

    #[test]
    fn empty_deque_reports_both_ends() {
        let mut deque: Deque<u8> = Deque::new();

        assert_eq!(deque.pop_front(), Err(EmptyError));
        assert_eq!(deque.pop_back(), Err(EmptyError));
        assert_eq!(deque.front(), Err(EmptyError));
        assert_eq!(deque.back(), Err(EmptyError));

        deque.push_front(7);
        assert_eq!(deque.front(), Ok(&7));
        assert_eq!(deque.back(), Ok(&7));
    }
}

// ==============================================
// Bounded vs Unbounded Consistency
// ==============================================
//
// Both backings of each discipline satisfy the same trait contract; the
// unbounded backing simply never produces the Err arm of push/enqueue.

mod backing_consistency {
    use containerkit::ds::{ArrayQueue, ArrayStack, LinkedQueue, LinkedStack};
    use containerkit::traits::{Container, CoreQueue, CoreStack};

    fn drain_stack<T, S: CoreStack<T>>(stack: &mut S) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(value) = stack.pop() {
            out.push(value);
        }
        out
    }

    fn drain_queue<T, Q: CoreQueue<T>>(queue: &mut Q) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(value) = queue.dequeue() {
            out.push(value);
        }
        out
    }

    #[test]
    fn stacks_agree_on_lifo_order() {
        let mut array: ArrayStack<u32> = ArrayStack::with_capacity(16);
        let mut linked: LinkedStack<u32> = LinkedStack::new();

        for v in 0..10 {
            CoreStack::push(&mut array, v).unwrap();
            CoreStack::push(&mut linked, v).unwrap();
        }

        assert_eq!(drain_stack(&mut array), drain_stack(&mut linked));
    }

    #[test]
    fn queues_agree_on_fifo_order() {
        let mut array: ArrayQueue<u32> = ArrayQueue::with_capacity(16);
        let mut linked: LinkedQueue<u32> = LinkedQueue::new();

        for v in 0..10 {
            CoreQueue::enqueue(&mut array, v).unwrap();
            CoreQueue::enqueue(&mut linked, v).unwrap();
        }

        assert_eq!(drain_queue(&mut array), drain_queue(&mut linked));
    }

    #[test]
    fn builder_wrappers_agree_with_bare_backings() {
        use containerkit::builder::{QueueBackend, QueueBuilder, StackBackend, StackBuilder};

        let mut bare: ArrayStack<u32> = ArrayStack::with_capacity(16);
        let mut wrapped = StackBuilder::new()
            .capacity(16)
            .try_build::<u32>(StackBackend::Array)
            .unwrap();

        for v in 0..10 {
            CoreStack::push(&mut bare, v).unwrap();
            CoreStack::push(&mut wrapped, v).unwrap();
        }
        assert_eq!(drain_stack(&mut bare), drain_stack(&mut wrapped));

        let mut bare: LinkedQueue<u32> = LinkedQueue::new();
        let mut wrapped = QueueBuilder::new()
            .try_build::<u32>(QueueBackend::Linked)
            .unwrap();

        for v in 0..10 {
            CoreQueue::enqueue(&mut bare, v).unwrap();
            CoreQueue::enqueue(&mut wrapped, v).unwrap();
        }
        assert_eq!(CoreQueue::capacity(&wrapped), None);
        assert_eq!(drain_queue(&mut bare), drain_queue(&mut wrapped));
    }

    #[test]
    fn capacity_reporting_distinguishes_backings() {
        let array: ArrayStack<u8> = ArrayStack::with_capacity(4);
        let linked: LinkedStack<u8> = LinkedStack::new();

        assert_eq!(CoreStack::capacity(&array), Some(4));
        assert_eq!(CoreStack::capacity(&linked), None);
        assert!(!CoreStack::is_full(&linked));
    }

    #[test]
    fn trait_objects_dispatch_both_backings() {
        let mut array: ArrayStack<i64> = ArrayStack::with_capacity(8);
        let mut linked: LinkedStack<i64> = LinkedStack::new();

        let stacks: Vec<&mut dyn CoreStack<i64>> = vec![&mut array, &mut linked];
        for stack in stacks {
            stack.push(1).unwrap();
            stack.push(2).unwrap();
            assert_eq!(stack.len(), 2);
            assert_eq!(stack.pop(), Ok(2));
        }
    }

    #[test]
    fn clear_preserves_array_capacity() {
        let mut queue: ArrayQueue<u8> = ArrayQueue::with_capacity(3);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();

        Container::clear(&mut queue);

        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 3);
        for v in 0..3 {
            queue.enqueue(v).unwrap();
        }
        assert!(queue.is_full());
    }
}

// ==============================================
// Builder Validation
// ==============================================

mod builder_validation {
    use containerkit::builder::{QueueBackend, QueueBuilder, StackBackend, StackBuilder};

    #[test]
    fn array_backend_requires_capacity() {
        assert!(StackBuilder::new().try_build::<u32>(StackBackend::Array).is_err());
        assert!(QueueBuilder::new().try_build::<u32>(QueueBackend::Array).is_err());
    }

    #[test]
    fn linked_backend_rejects_stray_capacity() {
        assert!(
            StackBuilder::new()
                .capacity(8)
                .try_build::<u32>(StackBackend::Linked)
                .is_err(),
            "a capacity configured for an unbounded backing should be an error, not ignored"
        );
    }

    #[test]
    fn built_containers_behave_like_their_backing() {
        let mut stack = StackBuilder::new()
            .capacity(1)
            .try_build::<u32>(StackBackend::Array)
            .unwrap();
        stack.push(1).unwrap();
        assert_eq!(stack.push(2).unwrap_err().into_inner(), 2);

        let mut queue = QueueBuilder::new()
            .try_build::<u32>(QueueBackend::Linked)
            .unwrap();
        for v in 0..100 {
            queue.enqueue(v).unwrap();
        }
        assert_eq!(queue.capacity(), None);
        assert_eq!(queue.dequeue(), Ok(0));
    }
}

// ==============================================
// Hash Table Bucket Discipline
// ==============================================

mod hash_table_buckets {
    use containerkit::ds::SimpleHashTable;

    #[test]
    fn fixed_bucket_count_never_grows_on_insert() {
        let mut table: SimpleHashTable<u32, u32> = SimpleHashTable::with_buckets(4);

        for k in 0..1_000 {
            table.insert(k, k * 2);
        }

        assert_eq!(
            table.bucket_count(),
            4,
            "insert must never resize the bucket array"
        );
        assert_eq!(table.len(), 1_000);
        assert!(table.load_factor() > 200.0);
        table.debug_validate_invariants();
    }

    #[test]
    fn rehash_is_explicit_and_preserves_entries() {
        let mut table: SimpleHashTable<u32, u32> = SimpleHashTable::with_buckets(2);
        for k in 0..50 {
            table.insert(k, k);
        }

        table.rehash_to(64).unwrap();

        assert_eq!(table.bucket_count(), 64);
        assert_eq!(table.len(), 50);
        for k in 0..50 {
            assert_eq!(table.get(&k), Some(&k));
        }
        table.debug_validate_invariants();
    }

    #[test]
    fn rehash_to_zero_buckets_is_rejected() {
        let mut table: SimpleHashTable<u32, u32> = SimpleHashTable::with_buckets(4);
        table.insert(1, 1);

        assert!(table.rehash_to(0).is_err());
        assert_eq!(table.bucket_count(), 4);
        assert_eq!(table.get(&1), Some(&1));
    }
}
