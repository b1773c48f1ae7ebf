#![no_main]

use boundkit::stream::top_k::BoundedTopK;
use libfuzzer_sys::fuzz_target;

// Fuzz BoundedTopK against sort-and-truncate. The first byte picks k; a zero
// byte in the stream clears the selector.
fuzz_target!(|data: &[u8]| {
    let Some((&first, values)) = data.split_first() else {
        return;
    };

    let k = usize::from(first % 16) + 1;
    let mut top = BoundedTopK::new(k).unwrap();
    let mut seen: Vec<u8> = Vec::new();

    for &v in values {
        if v == 0 {
            top.clear();
            seen.clear();
            continue;
        }

        let min_before = top.min().copied();
        let returned = top.offer(v);
        seen.push(v);

        match (returned, min_before) {
            (None, _) => assert!(seen.len() <= k),
            (Some(out), Some(min)) => assert!(out == v || out == min),
            (Some(_), None) => panic!("full selector reported no minimum"),
        }

        let mut expected = seen.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(k);
        assert_eq!(top.snapshot(), expected);
        top.check_invariants().unwrap();
    }
});
