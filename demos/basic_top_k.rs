use boundkit::error::ConfigError;
use boundkit::stream::top_k::{BoundedTopK, top_k};

fn main() -> Result<(), ConfigError> {
    let mut top = BoundedTopK::new(3)?;
    for score in [3, 1, 4, 1, 5, 9, 2, 6] {
        match top.offer(score) {
            None => println!("offer {}: filling", score),
            Some(out) if out == score => println!("offer {}: rejected", score),
            Some(out) => println!("offer {}: displaced {}", score, out),
        }
    }

    println!("top 3: {:?}", top.snapshot());
    println!("batch: {:?}", top_k(["pear", "fig", "apple", "kiwi"], 2)?);
    Ok(())
}

// Expected output (last two lines):
// top 3: [9, 6, 5]
// batch: ["pear", "kiwi"]
