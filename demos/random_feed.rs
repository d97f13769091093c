use ammeter::{AmpMeterApp, FormatMode, MeterCommand, MeterConfig};
use rand::Rng;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MeterConfig::builder()
        .title("Ammeter - random feed".to_string())
        .window_width(360)
        .window_height(360)
        .build();

    let app = AmpMeterApp::new(config);

    let (sender, receiver) = mpsc::channel();

    // Spawn a thread to generate random readings continuously
    thread::spawn(move || {
        let mut rng = rand::rng();
        let mut reading: f64 = 20.0;
        loop {
            reading = (reading + rng.random_range(-4.0..4.0)).clamp(0.0, 99.9);

            let mut commands = vec![MeterCommand::SetValue(reading)];
            if rng.random_bool(0.02) {
                let mode = FormatMode::ALL[rng.random_range(0..FormatMode::ALL.len())];
                commands.push(MeterCommand::SetFormatMode(mode));
            }

            // Send all commands, break if any fail
            if commands.into_iter().any(|cmd| sender.send(cmd).is_err()) {
                break;
            }

            thread::sleep(Duration::from_millis(100));
        }
    });

    println!("Displaying ammeter with a random walk reading");
    println!("Press Ctrl+C to exit");

    app.show_with_commands(receiver)?;
    Ok(())
}
