use std::path::Path;

use anyhow::Context;
use image::RgbImage;
use log::info;
use maze::Snapshot;

/// Writes packed `0xRRGGBB` pixels to `path`, in whatever format its extension names.
pub(crate) fn save_color_data(path: &Path, colors: &Snapshot) -> anyhow::Result<()> {
    let pixels = RgbImage::from_fn(colors.width() as u32, colors.height() as u32, |x, y| {
        let colour = colors.get(x as usize, y as usize);
        image::Rgb([(colour >> 16) as u8, (colour >> 8) as u8, colour as u8])
    });

    pixels
        .save(path)
        .with_context(|| format!("couldn't save image to {}", path.display()))?;
    info!("Saved {}x{} image to {}", colors.width(), colors.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use maze::{Grid, Point, UInt28};
    use super::*;

    #[test]
    fn channels_land_in_place() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.cell_mut(Point::of(0, 0)).unwrap().set_payload(UInt28::new(0xff8000).unwrap());
        grid.cell_mut(Point::of(1, 0)).unwrap().set_payload(UInt28::new(0x0000ff).unwrap());

        let path = std::env::temp_dir().join(format!("charty-{}.png", std::process::id()));
        save_color_data(&path, &grid.payload_snapshot()).unwrap();

        let saved = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(saved.dimensions(), (2, 1));
        assert_eq!(saved.get_pixel(0, 0), &image::Rgb([0xff, 0x80, 0x00]));
        assert_eq!(saved.get_pixel(1, 0), &image::Rgb([0x00, 0x00, 0xff]));
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let grid = Grid::new(1, 1).unwrap();
        let path = std::env::temp_dir().join("charty-test.not-an-image-format");
        assert!(save_color_data(&path, &grid.payload_snapshot()).is_err());
    }
}
