#![no_main]

use boundkit::ds::SlotArena;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on SlotArena.
fuzz_target!(|data: &[u8]| {
    let mut arena: SlotArena<u32> = SlotArena::new();
    let mut live = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 5;
        let value = u32::from(pair[1]);

        match op {
            0 | 1 => {
                let id = arena.insert(value);
                assert_eq!(arena.get(id), Some(&value));
                live.push(id);
            }
            2 => {
                if !live.is_empty() {
                    let id = live.swap_remove(value as usize % live.len());
                    let old_len = arena.len();
                    assert!(arena.remove(id).is_some());
                    assert_eq!(arena.len(), old_len - 1);
                    assert!(!arena.contains(id));
                    assert_eq!(arena.remove(id), None);
                }
            }
            3 => {
                if !live.is_empty() {
                    let id = live[value as usize % live.len()];
                    if let Some(slot) = arena.get_mut(id) {
                        *slot = slot.wrapping_add(1);
                    }
                }
            }
            _ => {
                arena.clear();
                live.clear();
                assert!(arena.is_empty());
            }
        }

        assert_eq!(arena.len(), live.len());
    }
});
