#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;
use memokit::cache::splay::SplayCache;

// Fuzz arbitrary get / insert sequences against a BTreeMap model
//
// Checks values, node count, the splayed-node-is-root guarantee, and that
// in-order traversal always yields strictly increasing keys.
fuzz_target!(|data: &[u8]| {
    let mut tree = SplayCache::new();
    let mut model: BTreeMap<u64, u64> = BTreeMap::new();

    let mut idx = 0;
    while idx + 2 < data.len() {
        let op = data[idx] % 2;
        let key = u64::from(data[idx + 1] % 64);
        let value = u64::from(data[idx + 2]);

        match op {
            0 => {
                assert_eq!(tree.insert(key, value), model.insert(key, value));
                assert_eq!(tree.root_key(), Some(key));
            }
            _ => {
                assert_eq!(tree.get(key), model.get(&key).copied());
                if model.contains_key(&key) {
                    assert_eq!(tree.root_key(), Some(key));
                }
            }
        }

        assert_eq!(tree.len(), model.len());
        let expected_keys: Vec<u64> = model.keys().copied().collect();
        assert_eq!(tree.in_order_keys(), expected_keys);

        idx += 3;
    }
});
