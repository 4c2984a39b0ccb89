use clap::{Parser, Subcommand};
use serde_json::json;

use huecolor::{ColorResult, Rgb8, XYColor};

#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert hue xy+brightness to rgb (example: xy 0.4962 0.4151 143)
    Xy {
        x: f32,
        y: f32,
        /// Brightness, 0-254
        bri: u8,
    },
    /// Convert rgb hex color to hue xy+brightness (example: rgb '#ff8000')
    Rgb { color: String },
}

fn run(command: Command) -> ColorResult<serde_json::Value> {
    match command {
        Command::Xy { x, y, bri } => {
            let col = XYColor::new(x, y, bri);
            if let Err(err) = col.validate() {
                log::warn!("Converting anyway: {err}");
            }
            let rgb = col.rgb();
            log::info!("xy ({x}, {y}) at brightness {bri} is {rgb}");
            Ok(json!({
                "input": col,
                "rgb8": rgb,
                "rgb16": col.rgba(),
                "hex": rgb.to_string(),
            }))
        }
        Command::Rgb { color } => {
            let rgb: Rgb8 = color.parse()?;
            let col = XYColor::from(rgb);
            log::info!("{rgb} is xy ({}, {}) at brightness {}", col.x, col.y, col.bri);
            Ok(json!({
                "input": rgb,
                "xy": col,
                "color": { "xy": col.xy() },
                "brightness_percent": col.brightness_percent(),
            }))
        }
    }
}

fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            log::error!("Argument error: {err}");
            std::process::exit(1);
        }
    };

    match run(args.command) {
        Ok(res) => println!("{res:#}"),
        Err(err) => {
            log::error!("Conversion failed: {err}");
            std::process::exit(1);
        }
    }
}
