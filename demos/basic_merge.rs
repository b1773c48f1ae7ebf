use boundkit::stream::merge::{KWayMerger, merge_sorted};

fn main() {
    let shards = vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]];

    let mut merger = KWayMerger::new(shards.clone());
    while let Some(value) = merger.next() {
        println!(
            "next {} ({} sources still active)",
            value,
            merger.active_sources()
        );
    }

    println!("merged: {:?}", merge_sorted(shards));
}

// Expected output (last line):
// merged: [1, 2, 3, 4, 5, 6, 7, 8, 9]
