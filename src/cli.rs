use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;
use maze::gen::{MazeAlgorithm, RecursiveBacktracker, ALGORITHMS};

use crate::palette::{Hsl, Rgb};
use crate::transmission::{Linear, Transmission, TRANSMISSIONS};

const DEFAULT_WIDTH: i32 = 1920;
const DEFAULT_HEIGHT: i32 = 1080;
const SCREENSAVER_WIDTH: i32 = 800;
const SCREENSAVER_HEIGHT: i32 = 600;

/// Randomly generates map-like screensavers or images.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// Image destination. The file format is picked from the extension.
    pub(crate) destination: PathBuf,

    /// Width of the generated image in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub(crate) width: i32,

    /// Height of the generated image in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub(crate) height: i32,

    /// Algorithm used to generate the underlying maze
    #[arg(short, long, default_value = "RecursiveBacktracker")]
    pub(crate) algorithm: String,

    /// Colour of the point where maze exploration starts, as 1, 2, 3 or 6 hex digits. Random if not set.
    #[arg(short, long, alias = "primary_color")]
    pub(crate) primary_color: Option<Rgb>,

    /// Colour of the point furthest away from the start. Random if not set.
    #[arg(short = 'q', long, alias = "secondary_color")]
    pub(crate) secondary_color: Option<Rgb>,

    /// Seed for colour and maze randomization
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// How to move between the primary and secondary colours (Linear, Wave, Quadratic, Pow10, InversePow10, Round, Piecewise10)
    #[arg(short, long, default_value = "Linear")]
    pub(crate) transmission: String,

    /// Show the image in a window after saving it. Press R for a new one.
    #[arg(long)]
    pub(crate) preview: bool,
}

/// Everything needed to draw a chart, checked and resolved.
pub(crate) struct ChartSettings {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) algorithm: &'static dyn MazeAlgorithm,
    pub(crate) transmission: &'static dyn Transmission,
    pub(crate) primary: Option<Hsl>,
    pub(crate) secondary: Option<Hsl>,
}

impl Args {
    pub(crate) fn settings(&self) -> anyhow::Result<ChartSettings> {
        if self.width <= 0 || self.height <= 0 {
            bail!("image size must be positive, got {}x{}", self.width, self.height);
        }

        Ok(ChartSettings {
            width: self.width,
            height: self.height,
            algorithm: select_by_id("algorithm", ALGORITHMS, &self.algorithm, |a| a.id())?,
            transmission: select_by_id("transmission", TRANSMISSIONS, &self.transmission, |t| t.id())?,
            primary: self.primary_color.map(|rgb| rgb.to_hsl()),
            secondary: self.secondary_color.map(|rgb| rgb.to_hsl()),
        })
    }
}

impl ChartSettings {
    /// Random colours on a window-sized maze.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub(crate) fn screensaver() -> ChartSettings {
        ChartSettings {
            width: SCREENSAVER_WIDTH,
            height: SCREENSAVER_HEIGHT,
            algorithm: &RecursiveBacktracker,
            transmission: &Linear,
            primary: None,
            secondary: None,
        }
    }
}

/// Finds the item whose id matches `id`, ignoring case.
pub(crate) fn select_by_id<T: ?Sized>(
    thing: &str,
    items: &[&'static T],
    id: &str,
    id_of: impl Fn(&T) -> &'static str,
) -> anyhow::Result<&'static T> {
    let lower_id = id.to_lowercase();
    items
        .iter()
        .copied()
        .find(|&item| id_of(item).to_lowercase() == lower_id)
        .ok_or_else(|| {
            let known: Vec<&str> = items.iter().map(|&item| id_of(item)).collect();
            anyhow!("unknown {}: {} (expected one of {})", thing, id, known.join(", "))
        })
}
