#![no_main]

use arckit::policy::arc::ArcCore;
use arckit::traits::ReadOnlyCache;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on ArcCore
//
// Drives the full state machine (insert dispatch, replace, ghost trims,
// target adaptation) with random keys and validates the four-list
// invariants after every operation.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the capacity (1-32); zero capacity is boundary-rejected
    // in the API and uninteresting here.
    let capacity = (data[0] as usize) % 32 + 1;
    let mut cache: ArcCore<u8, u8> = ArcCore::new(capacity);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let key = data[idx + 1] % 64;

        match op {
            0 => {
                cache.insert(key, key.wrapping_mul(7));
            }
            1 => {
                let _ = cache.get(&key);
            }
            2 => {
                let _ = cache.peek(&key);
            }
            3 => {
                cache.update(&key, key.wrapping_add(1), key % 2 == 0);
            }
            4 => {
                cache.remove(&key);
            }
            5 => {
                cache.touch(&key);
            }
            _ => unreachable!(),
        }

        cache.debug_validate_invariants();
        assert!(cache.len() <= capacity);
        assert!(cache.target() <= capacity);

        idx += 2;
    }
});
