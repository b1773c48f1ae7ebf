use boundkit::builder::{BoundBuilder, BoundConfig};
use boundkit::error::ConfigError;
use boundkit::traits::BoundedStream;

fn main() -> Result<(), ConfigError> {
    let config = BoundConfig {
        cache_capacity: 128,
        window_size: 4,
        top_k: 2,
    };
    config.validate()?;

    let mut cache = config.ordered_cache::<String, u64>()?;
    let mut window = config.window_max::<u64>()?;
    let mut top = config.top_k::<u64>()?;

    for (i, latency) in [12u64, 40, 7, 33, 18, 51].into_iter().enumerate() {
        cache.put(format!("req-{}", i), latency);
        window.observe(latency);
        top.observe(latency);
    }

    println!("cached: {}", cache.len());
    println!("window max: {:?}", window.current_max());
    println!("slowest: {:?}", top.snapshot());

    match BoundBuilder::new(0).top_k::<u64>() {
        Ok(_) => println!("zero bound accepted?"),
        Err(err) => println!("rejected: {}", err),
    }
    Ok(())
}

// Expected output:
// cached: 6
// window max: Some(51)
// slowest: [51, 40]
// rejected: k must be > 0, got 0
