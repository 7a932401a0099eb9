#![no_main]

use containerkit::ds::SinglyLinkedList;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on SinglyLinkedList
//
// Runs random sequences of push/pop/insert/remove/reverse/dedup operations
// against a Vec shadow model and checks the list matches the model after
// every step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: SinglyLinkedList<u32> = SinglyLinkedList::new();
    let mut model: Vec<u32> = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 12;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                list.push_front(value);
                model.insert(0, value);
            }
            1 => {
                list.push_back(value);
                model.push(value);
            }
            2 => {
                // insert_at: index drawn past len to also exercise the error path
                let index = (value as usize) % (model.len() + 2);
                let result = list.insert_at(index, value);
                if index <= model.len() {
                    assert!(result.is_ok());
                    model.insert(index, value);
                } else {
                    assert!(result.is_err());
                }
            }
            3 => {
                let popped = list.pop_front();
                if model.is_empty() {
                    assert!(popped.is_err());
                } else {
                    assert_eq!(popped.ok(), Some(model.remove(0)));
                }
            }
            4 => {
                let popped = list.pop_back();
                if model.is_empty() {
                    assert!(popped.is_err());
                } else {
                    assert_eq!(popped.ok(), model.pop());
                }
            }
            5 => {
                let index = (value as usize) % (model.len() + 2);
                let removed = list.remove_at(index);
                if index < model.len() {
                    assert_eq!(removed.ok(), Some(model.remove(index)));
                } else {
                    assert!(removed.is_err());
                }
            }
            6 => {
                let removed = list.remove_value(&value);
                let position = model.iter().position(|&v| v == value);
                assert_eq!(removed, position.is_some());
                if let Some(position) = position {
                    model.remove(position);
                }
            }
            7 => {
                list.reverse();
                model.reverse();
            }
            8 => {
                list.dedup_sorted();
                model.dedup();
            }
            9 => {
                let index = (value as usize) % (model.len() + 2);
                assert_eq!(list.get(index).ok(), model.get(index));
            }
            10 => {
                assert_eq!(list.contains(&value), model.contains(&value));
                assert_eq!(list.index_of(&value), model.iter().position(|&v| v == value));
            }
            11 => {
                list.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.to_vec(), model);
        assert!(!list.has_cycle());

        // middle is the second of two centrals, i.e. index len/2
        if model.is_empty() {
            assert_eq!(list.middle(), None);
        } else {
            assert_eq!(list.middle(), Some(&model[model.len() / 2]));
        }

        idx += 2;
    }
});
