/* Plays a fixed sine + sawtooth mix through the default output device,
toggled between playing and stopped from stdin. */

#[cfg(feature = "native")]
fn main() -> anyhow::Result<()> {
    use std::io::{self, Write};

    use sinesaw::gen::MixedOscillator;
    use sinesaw::platform::{AudioOutput, CpalOutput};

    sinesaw::utils::init_logger();

    // Create and configure the CPAL output
    let mut output = CpalOutput::new();
    output.initialize(MixedOscillator::DEFAULT_SAMPLE_RATE)?;

    // Build the oscillator at the rate the device actually opened with
    let osc = MixedOscillator::new(output.sample_rate());
    output.create_stream(osc)?;

    println!("Press 'p' to toggle play/stop, 'q' to quit");

    // Main input loop
    loop {
        let mut input = String::new();
        io::stdout().flush()?;
        io::stdin().read_line(&mut input)?;

        match input.trim() {
            "p" | "" => {
                if output.is_active() {
                    output.stop()?;
                } else if let Err(err) = output.start() {
                    // Start failure is not fatal; leave the toggle stopped
                    log::error!("Failed to start audio output: {:#}", err);
                }
            }
            "q" => {
                println!("Quitting...");
                break;
            }
            _ => {
                println!("Press 'p' to toggle play/stop, 'q' to quit");
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    println!("This binary is only available with the 'native' feature enabled.");
}
