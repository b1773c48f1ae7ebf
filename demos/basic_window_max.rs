use boundkit::error::ConfigError;
use boundkit::stream::window_max::{WindowMaximumTracker, sliding_window_max};

fn main() -> Result<(), ConfigError> {
    let readings = [1, 3, -1, -3, 5, 3, 6, 7];

    let mut window = WindowMaximumTracker::new(3)?;
    for reading in readings {
        window.push(reading);
        println!(
            "push {:>2} -> max {:?} (retained {})",
            reading,
            window.current_max(),
            window.retained()
        );
    }

    println!("full windows: {:?}", sliding_window_max(&readings, 3)?);
    Ok(())
}

// Expected output (last line):
// full windows: [3, 3, 5, 5, 6, 7]
//
// The first two maxima printed by the loop cover partial windows of one and
// two values.
