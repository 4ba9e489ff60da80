// main.rs - Window, command line and logging for the Wolfram scroller

use std::time::Duration;

use clap::{Parser, ValueEnum};
use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wolfram::config::{HEADER_HEIGHT, SCREEN_SIZE};
use wolfram::{GridSize, Rule};

mod ui;

use ui::{DISPLAY_SCALE, ScrollerApp};

#[derive(Parser, Debug)]
#[command(name = "scroller")]
#[command(about = "Scroll an elementary cellular automaton down a window")]
struct Cli {
    /// Starting rule, 0-255 (invalid values fall back to 110)
    rule: Option<String>,

    /// Starting grid size
    #[arg(long, value_enum, default_value = "medium")]
    size: SizeArg,

    /// Generations per second
    #[arg(long, default_value = "30")]
    speed: f32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizeArg {
    Small,
    Medium,
    Large,
}

impl From<SizeArg> for GridSize {
    fn from(size: SizeArg) -> Self {
        match size {
            SizeArg::Small  => GridSize::Small,
            SizeArg::Medium => GridSize::Medium,
            SizeArg::Large  => GridSize::Large,
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scroller=info,wolfram=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let rule = initial_rule(cli.rule.as_deref());
    let interval = tick_interval(cli.speed);
    info!("Starting with rule: {rule}");

    let width  = SCREEN_SIZE as f32 * DISPLAY_SCALE;
    let height = (SCREEN_SIZE + HEADER_HEIGHT) as f32 * DISPLAY_SCALE;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Wolfram CA Scroller",
        options,
        Box::new(move |_cc| Box::new(ScrollerApp::new(rule, cli.size.into(), interval))),
    );
    info!("Exiting main loop");
    result
}

/// Rule from the optional command line argument. Anything that is not a plain
/// number in 0-255 is reported and replaced by the default.
fn initial_rule(arg: Option<&str>) -> Rule {
    let Some(arg) = arg else {
        return Rule::default();
    };
    match arg.parse() {
        Ok(rule) => rule,
        Err(e) => {
            warn!("Usage: scroller [optional rule: 0-255]");
            warn!("Invalid argument ({e}), using default rule ({})", Rule::default());
            Rule::default()
        }
    }
}

/// Generations per second, kept within 0.5..=90.
fn tick_interval(speed: f32) -> Duration {
    let speed = if speed.is_finite() { speed.clamp(0.5, 90.0) } else { 30.0 };
    Duration::from_secs_f32(1.0 / speed)
}
