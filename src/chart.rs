use log::info;
use maze::{distance, Grid, Point, Snapshot};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::cli::ChartSettings;
use crate::palette::{paint_maze, Hsl, Palette};

/// The one random source for a run. Without a seed, one is picked and logged so the run can be repeated.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Using seed {}", seed);
    StdRng::seed_from_u64(seed)
}

/// Builds a maze the size of the image, measures how far every cell is from a random
/// start, and colours each cell by that distance. Returns packed `0xRRGGBB` pixels.
///
/// Inspired by https://github.com/jamis/amazing-desktops.
pub(crate) fn chart(settings: &ChartSettings, rng: &mut dyn RngCore) -> anyhow::Result<Snapshot> {
    let primary = settings.primary.unwrap_or_else(|| Hsl::random(rng));
    let secondary = settings.secondary.unwrap_or_else(|| Hsl::random(rng));

    let mut grid = Grid::new(settings.width, settings.height)?;
    let start = Point::random(grid.shape(), rng);
    info!(
        "Charting {}x{} maze from {} with {} and {} transmission",
        settings.width,
        settings.height,
        start,
        settings.algorithm.id(),
        settings.transmission.id()
    );

    timed("build maze", || settings.algorithm.build(&mut grid, start, rng))?;
    timed("measure distance", || distance::label(&mut grid, start))?;
    let palette = Palette::new(primary, secondary, settings.transmission);
    timed("paint pixels", || paint_maze(&mut grid, &palette))?;

    Ok(grid.payload_snapshot())
}

fn timed<T>(phase: &str, work: impl FnOnce() -> T) -> T {
    let start = perf_now();
    let result = work();
    info!("{} took {:.3}s", phase, perf_now() - start);
    result
}

fn perf_now() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.performance())
            .map_or(0.0, |performance| performance.now() / 1000.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0.0, |time| time.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use maze::gen::RecursiveBacktracker;
    use crate::palette::Rgb;
    use crate::transmission::{Linear, Quadratic};
    use super::*;

    fn settings(width: i32, height: i32) -> ChartSettings {
        ChartSettings {
            width,
            height,
            algorithm: &RecursiveBacktracker,
            transmission: &Linear,
            primary: Some(Rgb::rgb(255, 0, 0).to_hsl()),
            secondary: Some(Rgb::rgb(0, 0, 255).to_hsl()),
        }
    }

    #[test]
    fn same_seed_same_chart() {
        let mut settings = settings(40, 30);
        settings.primary = None;
        settings.transmission = &Quadratic;
        let first = chart(&settings, &mut seeded_rng(Some(11))).unwrap();
        let second = chart(&settings, &mut seeded_rng(Some(11))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn runs_from_primary_to_secondary() {
        let colors = chart(&settings(30, 20), &mut seeded_rng(Some(5))).unwrap();
        assert_eq!((colors.width(), colors.height()), (30, 20));
        assert_eq!(colors.values().iter().filter(|&&c| c == 0xff0000).count(), 1);
        assert!(colors.values().contains(&0x0000ff));
        assert!(colors.values().iter().all(|&c| c <= 0xffffff));
    }

    #[test]
    fn single_pixel() {
        let colors = chart(&settings(1, 1), &mut seeded_rng(Some(0))).unwrap();
        assert_eq!(colors.values(), &[0xff0000]);
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(chart(&settings(0, 5), &mut seeded_rng(Some(0))).is_err());
    }
}
