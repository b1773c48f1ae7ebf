#![no_main]

use boundkit::stream::merge::KWayMerger;
use libfuzzer_sys::fuzz_target;

// Fuzz KWayMerger with arbitrary sorted sources. A 0xFF byte starts a new
// source; each source is sorted before merging.
fuzz_target!(|data: &[u8]| {
    let mut sources: Vec<Vec<u8>> = vec![Vec::new()];
    for &byte in data {
        if byte == 0xFF {
            sources.push(Vec::new());
        } else if let Some(last) = sources.last_mut() {
            last.push(byte);
        }
    }
    for source in sources.iter_mut() {
        source.sort_unstable();
    }

    let mut expected: Vec<u8> = sources.iter().flatten().copied().collect();
    expected.sort_unstable();

    let mut merger = KWayMerger::new(sources.clone());
    assert_eq!(merger.source_count(), sources.len());
    let (lower, upper) = merger.size_hint();
    assert_eq!(lower, expected.len());
    assert_eq!(upper, Some(expected.len()));

    let merged: Vec<u8> = merger.by_ref().collect();
    assert_eq!(merged, expected);
    assert_eq!(merger.next(), None);
    assert_eq!(merger.active_sources(), 0);
});
