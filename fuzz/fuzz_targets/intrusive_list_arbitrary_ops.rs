#![no_main]

use libfuzzer_sys::fuzz_target;
use memokit::ds::IntrusiveList;

// Fuzz arbitrary operation sequences on IntrusiveList
//
// Tests random sequences of push_front, push_back, pop_front, pop_back,
// move_to_front, remove, get, clear operations.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut all_ids = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                let id = list.push_front(value);
                all_ids.push(id);

                assert_eq!(list.front(), Some(&value));
                assert!(list.contains(id));
                assert_eq!(list.get(id), Some(&value));
            }
            1 => {
                let id = list.push_back(value);
                all_ids.push(id);

                assert_eq!(list.back(), Some(&value));
                assert!(list.contains(id));
            }
            2 => {
                let old_len = list.len();
                if list.pop_front().is_some() {
                    assert_eq!(list.len(), old_len - 1);
                } else {
                    assert_eq!(old_len, 0);
                }
            }
            3 => {
                let old_len = list.len();
                if list.pop_back().is_some() {
                    assert_eq!(list.len(), old_len - 1);
                } else {
                    assert_eq!(old_len, 0);
                }
            }
            4 => {
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    if list.move_to_front(id) {
                        assert_eq!(list.front_id(), Some(id));
                    } else {
                        assert!(!list.contains(id));
                    }
                }
            }
            5 => {
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    let old_len = list.len();
                    if list.remove(id).is_some() {
                        assert_eq!(list.len(), old_len - 1);
                        assert!(!list.contains(id));
                    }
                    // Double remove must stay a no-op.
                    assert!(list.remove(id).is_none());
                }
            }
            6 => {
                if !all_ids.is_empty() {
                    let id = all_ids[(value as usize) % all_ids.len()];
                    if let Some(value_ref) = list.get(id) {
                        let _ = *value_ref;
                    }
                }
            }
            _ => {
                list.clear();
                assert!(list.is_empty());
                assert_eq!(list.front(), None);
                assert_eq!(list.back(), None);
            }
        }

        list.debug_validate_invariants();
        idx += 2;
    }
});
