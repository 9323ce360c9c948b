#![no_main]

use arckit::ds::OrderedList;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on OrderedList
//
// Random sequences of put_mru, update, touch, remove, pop_lru, and reads,
// with the two-index bijection validated after every operation.
fuzz_target!(|data: &[u8]| {
    let mut list: OrderedList<u8, u8> = OrderedList::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 7;
        let key = data[idx + 1];

        match op {
            0 => {
                list.put_mru(key, key.wrapping_mul(3));
            }
            1 => {
                list.update(&key, key.wrapping_add(1));
            }
            2 => {
                list.touch(&key);
            }
            3 => {
                list.remove(&key);
            }
            4 => {
                list.pop_lru();
            }
            5 => {
                let _ = list.get(&key);
                let _ = list.contains(&key);
            }
            6 => {
                let _ = list.peek_lru();
                let _ = list.iter().count();
            }
            _ => unreachable!(),
        }

        list.debug_validate_invariants();
        assert_eq!(list.is_empty(), list.len() == 0);

        idx += 2;
    }
});
