// ==============================================
// CROSS-STRUCTURE INVARIANT TESTS (integration)
// ==============================================
//
// Behavior that must hold for every bounded structure in the library: zero
// bounds are rejected, documented scenarios produce the documented output,
// and read operations are idempotent.

// ==============================================
// Zero-Bound Rejection
// ==============================================
//
// A zero bound is a configuration error everywhere. Nothing is clamped up
// to 1.

mod zero_bound {
    use boundkit::builder::{BoundBuilder, BoundConfig};
    use boundkit::policy::lru::OrderedCache;
    use boundkit::stream::top_k::{BoundedTopK, top_k};
    use boundkit::stream::window_max::{WindowMaximumTracker, sliding_window_max};

    #[test]
    fn ordered_cache_rejects_zero_capacity() {
        let err = OrderedCache::<u32, u32>::new(0).unwrap_err();
        assert!(
            err.message().contains("capacity"),
            "error should name the bound, got {:?}",
            err
        );
    }

    #[test]
    fn window_tracker_rejects_zero_window() {
        assert!(WindowMaximumTracker::<i32>::new(0).is_err());
        assert!(sliding_window_max(&[1, 2, 3], 0).is_err());
    }

    #[test]
    fn top_k_rejects_zero_k() {
        assert!(BoundedTopK::<i32>::new(0).is_err());
        assert!(top_k(vec![1, 2, 3], 0).is_err());
    }

    #[test]
    fn builder_and_config_reject_zero() {
        assert!(BoundBuilder::new(0).ordered_cache::<u8, u8>().is_err());
        let config = BoundConfig {
            cache_capacity: 0,
            ..BoundConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(config.ordered_cache::<u8, u8>().is_err());
        assert!(config.window_max::<u8>().is_ok());
    }
}

// ==============================================
// Documented Scenarios
// ==============================================

mod scenarios {
    use boundkit::policy::lru::OrderedCache;
    use boundkit::stream::merge::{KWayMerger, merge_sorted};
    use boundkit::stream::top_k::BoundedTopK;
    use boundkit::stream::window_max::WindowMaximumTracker;

    #[test]
    fn lru_capacity_two_walkthrough() {
        let mut cache = OrderedCache::new(2).unwrap();
        cache.put(1, "one");
        cache.put(2, "two");
        cache.put(3, "three");
        assert_eq!(cache.get(&1), None, "key 1 is least recent and must go");
        assert_eq!(cache.get(&2), Some(&"two"));
        assert_eq!(cache.get(&3), Some(&"three"));

        cache.get(&2);
        cache.put(4, "four");
        assert_eq!(cache.get(&3), None, "key 3 became least recent");

        let mut keys: Vec<_> = cache.keys().copied().collect();
        keys.sort();
        assert_eq!(keys, vec![2, 4]);
    }

    #[test]
    fn window_three_walkthrough() {
        let mut window = WindowMaximumTracker::new(3).unwrap();
        let maxima: Vec<i32> = [1, 3, -1, -3, 5, 3, 6, 7]
            .into_iter()
            .map(|v| {
                window.push(v);
                *window.current_max().unwrap()
            })
            .collect();
        assert_eq!(maxima, vec![1, 3, 3, 3, 5, 5, 6, 7]);
    }

    #[test]
    fn top_three_walkthrough() {
        let mut top = BoundedTopK::new(3).unwrap();
        top.extend([3, 1, 4, 1, 5, 9, 2, 6]);
        let mut held = top.snapshot();
        held.sort();
        assert_eq!(held, vec![5, 6, 9]);
    }

    #[test]
    fn merge_three_walkthrough() {
        let merged = merge_sorted(vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]);
        assert_eq!(merged, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn merge_of_nothing() {
        let mut merger = KWayMerger::new(Vec::<Vec<u8>>::new());
        assert_eq!(merger.next(), None);

        let mut merger = KWayMerger::new(vec![Vec::<u8>::new(); 3]);
        assert_eq!(merger.next(), None);
    }
}

// ==============================================
// Idempotence
// ==============================================

mod idempotence {
    use boundkit::policy::lru::OrderedCache;
    use boundkit::stream::merge::KWayMerger;
    use boundkit::stream::top_k::BoundedTopK;
    use boundkit::stream::window_max::WindowMaximumTracker;

    #[test]
    fn repeated_get_on_mru_changes_nothing() {
        let mut cache = OrderedCache::new(3).unwrap();
        cache.extend([(1, 'a'), (2, 'b'), (3, 'c')]);
        cache.get(&2);
        let first: Vec<_> = cache.keys().copied().collect();
        cache.get(&2);
        cache.get(&2);
        let after: Vec<_> = cache.keys().copied().collect();
        assert_eq!(first, after);
    }

    #[test]
    fn current_max_and_snapshot_are_pure() {
        let mut window = WindowMaximumTracker::new(2).unwrap();
        window.extend([4, 8]);
        assert_eq!(window.current_max(), window.current_max());

        let mut top = BoundedTopK::new(2).unwrap();
        top.extend([4, 8, 1]);
        assert_eq!(top.snapshot(), top.snapshot());
        assert_eq!(top.len(), 2);
    }

    // Replaying one scripted sequence on two fresh instances must land in
    // the same observable state.

    fn replay_cache() -> Vec<(u8, u32)> {
        let mut cache = OrderedCache::new(3).unwrap();
        for step in 0..40u32 {
            let key = (step * 7 % 5) as u8;
            match step % 4 {
                0 | 1 => {
                    cache.put(key, step);
                },
                2 => {
                    cache.get(&key);
                },
                _ => {
                    cache.touch(&((key + 1) % 5));
                },
            }
        }
        cache.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn replay_window() -> (Option<i32>, usize) {
        let mut window = WindowMaximumTracker::new(4).unwrap();
        for step in 0..40i32 {
            window.push((step * 13) % 11 - 5);
        }
        (window.current_max().copied(), window.retained())
    }

    fn replay_top() -> Vec<i32> {
        let mut top = BoundedTopK::new(4).unwrap();
        for step in 0..40i32 {
            top.offer((step * 17) % 23);
        }
        top.snapshot()
    }

    fn replay_merge() -> Vec<(u32, usize)> {
        let sources: Vec<Vec<(u32, usize)>> = (0..4)
            .map(|s| (0..6).map(|i| (i / 2, s)).collect())
            .collect();
        KWayMerger::new(sources).collect()
    }

    #[test]
    fn cache_replay_is_deterministic() {
        assert_eq!(replay_cache(), replay_cache());
    }

    #[test]
    fn window_replay_is_deterministic() {
        assert_eq!(replay_window(), replay_window());
    }

    #[test]
    fn top_k_replay_is_deterministic() {
        assert_eq!(replay_top(), replay_top());
    }

    #[test]
    fn merge_replay_is_deterministic() {
        let first = replay_merge();
        assert_eq!(first, replay_merge());
        assert_eq!(first.len(), 24);
    }

    #[test]
    fn exhausted_merger_keeps_returning_none() {
        let mut merger = KWayMerger::new(vec![vec![1, 2]]);
        assert_eq!(merger.by_ref().count(), 2);
        for _ in 0..3 {
            assert_eq!(merger.next(), None);
        }
    }
}

// ==============================================
// Boundaries
// ==============================================

mod boundaries {
    use boundkit::policy::lru::OrderedCache;
    use boundkit::stream::merge::merge_sorted;
    use boundkit::stream::top_k::{BoundedTopK, top_k};
    use boundkit::stream::window_max::{WindowMaximumTracker, sliding_window_max};

    #[test]
    fn capacity_one_cache_holds_last_key() {
        let mut cache = OrderedCache::new(1).unwrap();
        for key in 0..10 {
            cache.put(key, key * 2);
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.peek(&key), Some(&(key * 2)));
        }
    }

    #[test]
    fn window_of_one_is_identity() {
        let mut window = WindowMaximumTracker::new(1).unwrap();
        for v in [3, -2, 7, 7, 0] {
            window.push(v);
            assert_eq!(window.current_max(), Some(&v));
        }
        assert_eq!(
            sliding_window_max(&[3, -2, 7], 1).unwrap(),
            vec![3, -2, 7]
        );
    }

    #[test]
    fn window_longer_than_stream() {
        let mut window = WindowMaximumTracker::new(100).unwrap();
        window.extend([1, 9, 4]);
        assert_eq!(window.current_max(), Some(&9));
        assert!(sliding_window_max(&[1, 9, 4], 100).unwrap().is_empty());
    }

    #[test]
    fn k_equal_to_distinct_offers_never_evicts() {
        let mut top = BoundedTopK::new(5).unwrap();
        for v in [40, 10, 50, 20, 30] {
            assert_eq!(top.offer(v), None, "offer of {} must not displace", v);
        }
        assert_eq!(top.snapshot(), vec![50, 40, 30, 20, 10]);
    }

    #[test]
    fn k_larger_than_stream_keeps_everything() {
        assert_eq!(top_k([1, 3, 2], 10).unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn single_source_merge_is_identity() {
        assert_eq!(merge_sorted(vec![vec![1, 1, 2, 5]]), vec![1, 1, 2, 5]);
    }
}

// ==============================================
// Invariants Under Random Operations
// ==============================================

mod random_ops {
    use boundkit::policy::lru::OrderedCache;
    use boundkit::stream::top_k::BoundedTopK;
    use boundkit::stream::window_max::WindowMaximumTracker;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn cache_invariants_hold_under_churn() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut cache = OrderedCache::new(16).unwrap();
        for _ in 0..5_000 {
            let key: u16 = rng.gen_range(0..64);
            match rng.gen_range(0..5) {
                0 | 1 => {
                    cache.put(key, key);
                },
                2 => {
                    cache.get(&key);
                },
                3 => {
                    cache.remove(&key);
                },
                _ => {
                    cache.pop_lru();
                },
            }
            assert!(cache.len() <= 16);
        }
        cache.check_invariants().unwrap();
    }

    #[test]
    fn stream_invariants_hold_under_random_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut window = WindowMaximumTracker::new(32).unwrap();
        let mut top = BoundedTopK::new(8).unwrap();
        for _ in 0..5_000 {
            let v: i32 = rng.gen_range(-1_000..1_000);
            window.push(v);
            top.offer(v);
        }
        window.check_invariants().unwrap();
        top.check_invariants().unwrap();
        assert!(window.retained() <= 32);
        assert_eq!(top.len(), 8);
    }
}
