#![no_main]

use arckit::ds::GhostList;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on GhostList
//
// Random record/remove/pop sequences; membership and ordering invariants
// checked after every operation.
fuzz_target!(|data: &[u8]| {
    let mut ghost: GhostList<u8> = GhostList::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let key = data[idx + 1];

        match op {
            0 => {
                ghost.record(key);
                assert!(ghost.contains(&key));
            }
            1 => {
                ghost.remove(&key);
                assert!(!ghost.contains(&key));
            }
            2 => {
                ghost.pop_lru();
            }
            3 => {
                let _ = ghost.contains(&key);
                let _ = ghost.len();
            }
            4 => {
                ghost.clear();
                assert!(ghost.is_empty());
            }
            _ => unreachable!(),
        }

        ghost.debug_validate_invariants();

        idx += 2;
    }
});
