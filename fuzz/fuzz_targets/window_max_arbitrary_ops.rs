#![no_main]

use boundkit::stream::window_max::WindowMaximumTracker;
use libfuzzer_sys::fuzz_target;

// Fuzz WindowMaximumTracker against a brute-force maximum of the trailing
// window. The first byte picks the window size.
fuzz_target!(|data: &[u8]| {
    let Some((&first, values)) = data.split_first() else {
        return;
    };

    let window_size = usize::from(first % 32) + 1;
    let mut window = WindowMaximumTracker::new(window_size).unwrap();

    for (pos, &v) in values.iter().enumerate() {
        window.push(v);
        let start = (pos + 1).saturating_sub(window_size);
        assert_eq!(window.current_max(), values[start..=pos].iter().max());
        assert!(window.retained() <= window_size);
        window.check_invariants().unwrap();
    }
});
