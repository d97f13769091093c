use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use ammeter::{AmpMeterApp, FormatMode, MeterCommand, MeterConfig};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ammeter", version, about = "Round ammeter with a seven-segment readout")]
struct Cli {
    /// Initial reading in amperes, clamped to 0..=99.9
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    value: f64,

    /// Readout format: integer, decimal1 or decimal2
    #[arg(long, default_value_t = FormatMode::Decimal1)]
    mode: FormatMode,

    /// Start with the demo sweep running
    #[arg(long)]
    animate: bool,

    /// Read commands from stdin, one per line: `<amps>`, `mode <name>`, `animate <on|off>`
    #[arg(long)]
    stdin: bool,

    #[arg(long, default_value_t = 300)]
    width: u32,

    #[arg(long, default_value_t = 300)]
    height: u32,

    #[arg(long, default_value = "Ammeter")]
    title: String,

    /// TrueType font used for the unit label
    #[arg(long)]
    font: Option<PathBuf>,

    /// Render one frame to this PNG file and exit without opening a window
    #[arg(long)]
    screenshot: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let config = MeterConfig::builder()
        .title(cli.title)
        .window_width(cli.width)
        .window_height(cli.height)
        .initial_value(cli.value)
        .format_mode(cli.mode)
        .demo_animation(cli.animate)
        .maybe_font_path(cli.font)
        .build();
    let app = AmpMeterApp::new(config);

    if let Some(path) = cli.screenshot {
        app.screenshot(&path)?;
        return Ok(());
    }

    if !cli.stdin {
        app.show()?;
        return Ok(());
    }

    let (sender, receiver) = mpsc::channel();

    // Spawn a thread to read commands from stdin
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<MeterCommand>() {
                Ok(command) => {
                    if sender.send(command).is_err() {
                        break;
                    }
                }
                Err(err) => warn!(%err, line = %line, "ignoring stdin command"),
            }
        }
        info!("stdin closed");
    });

    app.show_with_commands(receiver)?;
    Ok(())
}
