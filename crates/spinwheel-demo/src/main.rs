#![forbid(unsafe_code)]

//! Terminal demo for the spinwheel engine.
//!
//! Builds a wheel from the command line, spins it on a real ~60 fps loop,
//! and prints each winner plus the outcome distribution. Run with e.g.:
//!
//! ```sh
//! cargo run -p spinwheel-demo -- --labels "Coffee,Tea,Water" --weights "1,2,1" --spins 20
//! ```
//!
//! `RUST_LOG=spinwheel_core=debug` surfaces the engine's spin lifecycle
//! events.

use std::error::Error;
use std::io::Write;
use std::thread;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use web_time::{Duration, Instant};

use spinwheel_core::store::{MemoryLedger, SpinLedger, SpinRecord, distribution};
use spinwheel_core::{
    Easing, Segment, SpinConfig, SpinDriver, TickEvent, Wheel, resolve, small_rng,
};

#[derive(Debug, Parser)]
#[command(name = "spinwheel-demo", version, about = "Spin a weighted wheel in the terminal")]
struct Args {
    /// Comma-separated segment labels.
    #[arg(long, default_value = "Coffee,Tea,Water,Juice")]
    labels: String,

    /// Comma-separated weights, one per label. Defaults to all 1.
    #[arg(long)]
    weights: Option<String>,

    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Spin duration in milliseconds.
    #[arg(long, default_value_t = 3000)]
    duration_ms: u64,

    /// Fewest full turns per spin.
    #[arg(long, default_value_t = 5.0)]
    min_turns: f64,

    /// Most full turns per spin.
    #[arg(long, default_value_t = 10.0)]
    max_turns: f64,

    /// Easing curve (linear, out-quad, out-cubic, out-quart, out-expo,
    /// out-back, out-elastic).
    #[arg(long, default_value = "out-cubic")]
    easing: Easing,

    /// How many spins to run.
    #[arg(long, default_value_t = 1)]
    spins: u32,

    /// Animation frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let wheel = build_wheel(&args)?;
    wheel.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, wheel = %wheel.name, "demo starting");

    let mut rng = small_rng(seed);
    let mut driver = SpinDriver::new();
    let mut ledger = MemoryLedger::new();
    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));

    for round in 1..=args.spins {
        let t0 = Instant::now();
        if !driver.spin(&wheel.segments, &wheel.config, &mut rng, t0) {
            return Err("spin rejected — is the wheel empty?".into());
        }

        loop {
            thread::sleep(frame);
            match driver.tick(Instant::now()) {
                TickEvent::Frame(f) => {
                    let under_pointer = resolve(&wheel.segments, f.angle)
                        .map_or("—", Segment::label);
                    print!(
                        "\r  spin {round:>3}  [{}] {:>5.1}%  {under_pointer:<16}",
                        progress_bar(f.progress),
                        f.progress * 100.0
                    );
                    std::io::stdout().flush()?;
                }
                TickEvent::Finished(result) => {
                    println!(
                        "\r  spin {round:>3}  winner: {:<16} (angle {:.3} rad)      ",
                        result.segment.label(),
                        result.final_angle
                    );
                    ledger.record(SpinRecord::from_result(&wheel.id, &result))?;
                    break;
                }
                TickEvent::Idle => break,
            }
        }
    }

    if ledger.len() > 1 {
        println!("\nOutcome distribution after {} spins:", ledger.len());
        for share in distribution(&wheel.segments, ledger.records()) {
            println!(
                "  {:<16} {:>5}  {:>5.1}%",
                share.label, share.count, share.percentage
            );
        }
    }
    Ok(())
}

fn build_wheel(args: &Args) -> Result<Wheel, Box<dyn Error>> {
    let labels: Vec<&str> = args
        .labels
        .split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let weights: Vec<f64> = match &args.weights {
        Some(raw) => raw
            .split(',')
            .map(|w| w.trim().parse::<f64>())
            .collect::<Result<_, _>>()?,
        None => vec![1.0; labels.len()],
    };
    if weights.len() != labels.len() {
        return Err(format!(
            "{} labels but {} weights",
            labels.len(),
            weights.len()
        )
        .into());
    }

    let segments = labels
        .iter()
        .zip(&weights)
        .enumerate()
        .map(|(i, (label, &weight))| {
            Segment::with_palette_color(format!("seg-{i}"), *label, i).with_weight(weight)
        })
        .collect();

    let config = SpinConfig::new()
        .with_duration(Duration::from_millis(args.duration_ms))
        .with_turns(args.min_turns, args.max_turns)
        .with_easing(args.easing);

    Ok(Wheel::new("demo", "Demo Wheel", segments).with_config(config))
}

fn progress_bar(progress: f64) -> String {
    const WIDTH: usize = 24;
    let filled = ((progress * WIDTH as f64) as usize).min(WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}
