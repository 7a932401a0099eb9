#![no_main]

use std::collections::HashMap;

use containerkit::ds::SimpleHashTable;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on SimpleHashTable
//
// Picks a small bucket count from the first byte (small counts force long
// chains), then runs random insert/get/remove/replace/rehash sequences
// against a HashMap shadow model.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let bucket_count = (data[0] as usize % 8).max(1);
    let mut table: SimpleHashTable<u32, u32> = SimpleHashTable::with_buckets(bucket_count);
    let mut model: HashMap<u32, u32> = HashMap::new();
    let mut bucket_count = bucket_count;

    let mut idx = 1;
    while idx + 2 < data.len() {
        let op = data[idx] % 7;
        // key space of 32 keeps overwrite and remove hits frequent
        let key = u32::from(data[idx + 1]) % 32;
        let value = u32::from(data[idx + 2]);

        match op {
            0 => {
                let previous = table.insert(key, value);
                assert_eq!(previous, model.insert(key, value));
            }
            1 => {
                assert_eq!(table.get(&key), model.get(&key));
            }
            2 => {
                assert_eq!(table.remove(&key), model.remove(&key));
            }
            3 => {
                assert_eq!(table.contains_key(&key), model.contains_key(&key));
            }
            4 => {
                let replaced = table.replace(&key, value);
                match model.get_mut(&key) {
                    Some(slot) => {
                        assert_eq!(replaced, Ok(std::mem::replace(slot, value)));
                    }
                    None => assert!(replaced.is_err()),
                }
            }
            5 => {
                let requested = (value as usize % 16).max(1);
                table.rehash_to(requested).unwrap();
                bucket_count = requested;
            }
            6 => {
                table.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        assert_eq!(table.len(), model.len());
        assert_eq!(table.is_empty(), model.is_empty());
        assert_eq!(table.bucket_count(), bucket_count);

        let expected = model.len() as f64 / bucket_count as f64;
        assert!((table.load_factor() - expected).abs() < f64::EPSILON);

        idx += 3;
    }
});
