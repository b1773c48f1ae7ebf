use boundkit::error::ConfigError;
use boundkit::policy::lru::OrderedCache;

fn main() -> Result<(), ConfigError> {
    let mut cache: OrderedCache<u32, String> = OrderedCache::new(2)?;

    cache.put(1, "alpha".to_string());
    cache.put(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value);
    }

    cache.put(3, "gamma".to_string());

    println!("contains 2? {}", cache.contains(&2));
    println!("recency order: {:?}", cache.keys().collect::<Vec<_>>());
    Ok(())
}

// Expected output:
// hit 1: alpha
// contains 2? false
// recency order: [3, 1]
//
// Explanation: capacity=2; after get(&1), key 1 is MRU and key 2 is LRU.
// Putting key 3 evicts key 2.
