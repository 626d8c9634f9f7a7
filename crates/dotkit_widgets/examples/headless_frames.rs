//! Headless Frames Demo
//!
//! Drives a dot row for every animation style without a window and prints
//! the painted circles of a few sampled frames:
//! - one row per style, all dots appearing at once
//! - a 60 fps clock advanced through `update`
//! - a row loaded from a TOML config
//!
//! Run with: cargo run -p dotkit_widgets --example headless_frames
//! Set `RUST_LOG=dotkit_widgets=trace` to see lifecycle logging.

use dotkit_widgets::{AnimationStyle, DotConfig, DotConfigError, DotRow, Widget};
use tracing_subscriber::EnvFilter;

const FPS: usize = 60;
const SAMPLE_EVERY: usize = 15;

const TOML_CONFIG: &str = r##"
count = 5
style = "collision"
size = 8.0
spacing = 4.0
duration = 1.2
color = "#3366FF"
"##;

fn main() -> Result<(), DotConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for style in AnimationStyle::ALL {
        let row = DotRow::try_new(DotConfig::new(3, style))?;
        play(row, FPS);
    }

    let row = DotRow::try_new(DotConfig::from_toml_str(TOML_CONFIG)?)?;
    play(row, 2 * FPS);

    Ok(())
}

fn play(mut row: DotRow, frames: usize) {
    println!(
        "== {} ({} dots, {}x{})",
        row.config().style,
        row.len(),
        row.size().width,
        row.size().height
    );

    row.appear_all();
    for frame in 0..=frames {
        if frame % SAMPLE_EVERY == 0 {
            print_frame(&row);
        }
        row.update(1.0 / FPS as f32);
    }
}

fn print_frame(row: &DotRow) {
    let circles: Vec<String> = row
        .render()
        .paint_list()
        .iter()
        .map(|c| {
            format!(
                "({:6.2},{:6.2}) r={:5.2} a={:4.2}",
                c.center.x, c.center.y, c.radius, c.color.a
            )
        })
        .collect();
    println!("t={:5.2}s  {}", row.elapsed(), circles.join("  "));
}
