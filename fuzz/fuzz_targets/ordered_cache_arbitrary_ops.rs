#![no_main]

use boundkit::policy::lru::OrderedCache;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on OrderedCache
//
// The first byte picks the capacity; each following pair is (op, key).
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };

    let capacity = usize::from(first % 16) + 1;
    let mut cache: OrderedCache<u8, u32> = OrderedCache::new(capacity).unwrap();

    for (step, pair) in rest.chunks_exact(2).enumerate() {
        let op = pair[0] % 7;
        let key = pair[1] % 32;

        match op {
            0 | 1 => {
                let had = cache.contains(&key);
                let old_len = cache.len();
                cache.put(key, step as u32);
                assert_eq!(cache.recency_rank(&key), Some(0));
                if had {
                    assert_eq!(cache.len(), old_len);
                }
            }
            2 => {
                if cache.get(&key).is_some() {
                    assert_eq!(cache.recency_rank(&key), Some(0));
                }
            }
            3 => {
                let before: Vec<u8> = cache.keys().copied().collect();
                let _ = cache.peek(&key);
                let after: Vec<u8> = cache.keys().copied().collect();
                assert_eq!(before, after);
            }
            4 => {
                cache.remove(&key);
                assert!(!cache.contains(&key));
            }
            5 => {
                let lru = cache.peek_lru().map(|(k, _)| *k);
                assert_eq!(cache.pop_lru().map(|(k, _)| k), lru);
            }
            _ => {
                cache.touch(&key);
            }
        }

        assert!(cache.len() <= capacity);
        cache.check_invariants().unwrap();
    }
});
