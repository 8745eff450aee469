use std::str::FromStr;

use log::info;
use maze::{Grid, UInt28};
use rand::Rng;

use crate::transmission::Transmission;

/// A colour in the red-green-blue model, each component in `[0.0, 1.0]`.
#[derive(PartialEq, Debug, Clone, Copy)]
pub(crate) struct Rgb {
    pub(crate) red: f64,
    pub(crate) green: f64,
    pub(crate) blue: f64,
}

#[derive(thiserror::Error, PartialEq, Eq, Debug)]
#[error("cannot parse {0:?} as RGB, expected 1, 2, 3 or 6 hexadecimal digits")]
pub(crate) struct ParseColorError(String);

impl Rgb {
    pub(crate) fn new(red: f64, green: f64, blue: f64) -> Rgb {
        Rgb { red, green, blue }
    }

    pub(crate) fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        Rgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub(crate) fn grey(v: u8) -> Rgb {
        Rgb::rgb(v, v, v)
    }

    pub(crate) fn to_hsl(&self) -> Hsl {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        let lightness = (max + min) / 2.0;
        if max == min {
            return Hsl::new(0.0, 0.0, lightness);
        }

        let range = max - min;
        let saturation = if lightness <= 0.5 {
            range / (max + min)
        } else {
            range / (2.0 - max - min)
        };

        let rc = (max - self.red) / range;
        let gc = (max - self.green) / range;
        let bc = (max - self.blue) / range;
        let hue = if self.red == max {
            bc - gc
        } else if self.green == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hsl::new((hue / 6.0).rem_euclid(1.0), saturation, lightness)
    }

    /// Packs the colour as `0xRRGGBB`.
    pub(crate) fn to_int(&self) -> u32 {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        channel(self.red) << 16 | channel(self.green) << 8 | channel(self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// `ff8800` is RGB, `f80` is short for `ff8800`, `88` is the grey `888888` and `8` is short for `88`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = || ParseColorError(text.to_string());
        let digits = text
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(error)?;

        let pair = |high: u8, low: u8| high << 4 | low;
        match digits[..] {
            [r1, r2, g1, g2, b1, b2] => Ok(Rgb::rgb(pair(r1, r2), pair(g1, g2), pair(b1, b2))),
            [r, g, b] => Ok(Rgb::rgb(pair(r, r), pair(g, g), pair(b, b))),
            [high, low] => Ok(Rgb::grey(pair(high, low))),
            [v] => Ok(Rgb::grey(pair(v, v))),
            _ => Err(error()),
        }
    }
}

/// A colour in the hue-saturation-lightness model, each component in `[0.0, 1.0]`.
///
/// Mixing in HSL looks a lot better than mixing RGB channels. Hue is an angle
/// (expressed as a fraction of a turn) so it wraps around: 0.9 and 0.1 are 0.2 apart.
#[derive(PartialEq, Debug, Clone, Copy)]
pub(crate) struct Hsl {
    pub(crate) hue: f64,
    pub(crate) saturation: f64,
    pub(crate) lightness: f64,
}

impl Hsl {
    pub(crate) fn new(hue: f64, saturation: f64, lightness: f64) -> Hsl {
        Hsl { hue, saturation, lightness }
    }

    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
        Hsl::new(rng.gen(), rng.gen(), rng.gen())
    }

    pub(crate) fn to_rgb(&self) -> Rgb {
        if self.saturation == 0.0 {
            return Rgb::new(self.lightness, self.lightness, self.lightness);
        }

        let m2 = if self.lightness <= 0.5 {
            self.lightness * (1.0 + self.saturation)
        } else {
            self.lightness + self.saturation - (self.lightness * self.saturation)
        };
        let m1 = 2.0 * self.lightness - m2;

        let channel = |hue: f64| {
            let hue = hue.rem_euclid(1.0);
            if hue < 1.0 / 6.0 {
                m1 + (m2 - m1) * hue * 6.0
            } else if hue < 0.5 {
                m2
            } else if hue < 2.0 / 3.0 {
                m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
            } else {
                m1
            }
        };

        Rgb::new(
            channel(self.hue + 1.0 / 3.0),
            channel(self.hue),
            channel(self.hue - 1.0 / 3.0),
        )
    }

    /// Mixes `a` into `b`; `t = 0` is `a`. Hue goes the short way round the colour wheel.
    pub(crate) fn interpolate(a: &Hsl, b: &Hsl, t: f64) -> Hsl {
        let mut hue_delta = b.hue - a.hue;
        if hue_delta > 0.5 {
            hue_delta -= 1.0;
        } else if hue_delta < -0.5 {
            hue_delta += 1.0;
        }

        Hsl::new(
            (a.hue + t * hue_delta).rem_euclid(1.0),
            lerp(a.saturation, b.saturation, t),
            lerp(a.lightness, b.lightness, t),
        )
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + ((b - a) * t)
}

pub(crate) struct Palette {
    start: Hsl,
    end: Hsl,
    transmission: &'static dyn Transmission,
}

impl Palette {
    pub(crate) fn new(start: Hsl, end: Hsl, transmission: &'static dyn Transmission) -> Palette {
        Palette { start, end, transmission }
    }

    /// Packed `0xRRGGBB` colour for `t` in `[0.0, 1.0]`.
    pub(crate) fn paint(&self, t: f64) -> u32 {
        let t = self.transmission.transmit(t).clamp(0.0, 1.0);
        Hsl::interpolate(&self.start, &self.end, t).to_rgb().to_int()
    }
}

/// Replaces every distance label in `grid` with its colour.
///
/// Expects payloads written by `maze::distance::label`: the distance plus one, 0 for
/// unreached cells. Unreached cells get the start colour.
pub(crate) fn paint_maze(grid: &mut Grid, palette: &Palette) -> anyhow::Result<()> {
    let farthest = grid.all_cells().map(|cell| cell.payload()).max().unwrap_or(0).saturating_sub(1);
    info!("Painting {}x{} cells, farthest distance {}", grid.width(), grid.height(), farthest);

    for point in grid.points() {
        if let Some(mut cell) = grid.cell_mut(point) {
            let distance = cell.payload().saturating_sub(1);
            let t = if farthest == 0 { 0.0 } else { distance as f64 / farthest as f64 };
            cell.set_payload(UInt28::new(palette.paint(t))?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use maze::{Direction, Point};
    use crate::transmission::{Linear, Round};
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parses_every_length() {
        assert_eq!("ff8800".parse::<Rgb>().unwrap().to_int(), 0xff8800);
        assert_eq!("F80".parse::<Rgb>().unwrap().to_int(), 0xff8800);
        assert_eq!("88".parse::<Rgb>().unwrap().to_int(), 0x888888);
        assert_eq!("8".parse::<Rgb>().unwrap().to_int(), 0x888888);
        assert_eq!("AbCdEf".parse::<Rgb>().unwrap().to_int(), 0xabcdef);
    }

    #[test]
    fn rejects_nonsense() {
        assert!("".parse::<Rgb>().is_err());
        assert!("ff88".parse::<Rgb>().is_err());
        assert!("gg0000".parse::<Rgb>().is_err());
        assert_eq!("#fff".parse::<Rgb>(), Err(ParseColorError("#fff".to_string())));
    }

    #[test]
    fn hsl_of_primaries() {
        let red = Rgb::rgb(255, 0, 0).to_hsl();
        assert!(close(red.hue, 0.0) && close(red.saturation, 1.0) && close(red.lightness, 0.5));

        let blue = Rgb::rgb(0, 0, 255).to_hsl();
        assert!(close(blue.hue, 2.0 / 3.0));

        let grey = Rgb::grey(0x80).to_hsl();
        assert!(close(grey.saturation, 0.0));
    }

    #[test]
    fn hsl_round_trips() {
        for colour in [0xff8800, 0x123456, 0x00ff7f, 0xffffff, 0x000000, 0x7f7f7f, 0xc0ffee] {
            let rgb = Rgb::rgb((colour >> 16) as u8, (colour >> 8) as u8, colour as u8);
            assert_eq!(rgb.to_hsl().to_rgb().to_int(), colour, "{:06x}", colour);
        }
    }

    #[test]
    fn interpolation_takes_the_short_way() {
        let a = Hsl::new(0.9, 0.0, 0.0);
        let b = Hsl::new(0.1, 1.0, 1.0);
        let middle = Hsl::interpolate(&a, &b, 0.5);
        assert!(close(middle.hue, 0.0) || close(middle.hue, 1.0));
        assert!(close(middle.saturation, 0.5));
        assert!(close(middle.lightness, 0.5));

        assert_eq!(Hsl::interpolate(&a, &b, 0.0), a);
        assert!(close(Hsl::interpolate(&a, &b, 1.0).hue, 0.1));
    }

    #[test]
    fn palette_ends() {
        let start = Rgb::rgb(255, 0, 0).to_hsl();
        let end = Rgb::rgb(0, 0, 255).to_hsl();
        let palette = Palette::new(start, end, &Linear);
        assert_eq!(palette.paint(0.0), 0xff0000);
        assert_eq!(palette.paint(1.0), 0x0000ff);
    }

    #[test]
    fn paints_by_distance() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.cell_mut(Point::of(0, 0)).unwrap().open_corridor(Direction::East);
        grid.cell_mut(Point::of(1, 0)).unwrap().open_corridor(Direction::East);
        maze::distance::label(&mut grid, Point::of(0, 0)).unwrap();

        let palette = Palette::new(Rgb::grey(0).to_hsl(), Rgb::grey(255).to_hsl(), &Round);
        paint_maze(&mut grid, &palette).unwrap();

        assert_eq!(grid.payload_snapshot().values(), &[0x000000, 0xffffff, 0xffffff]);
        // Corridors survive painting.
        assert!(grid.cell(Point::of(1, 0)).unwrap().has_corridor(Direction::West));
    }

    #[test]
    fn paints_a_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        maze::distance::label(&mut grid, Point::of(0, 0)).unwrap();
        let palette = Palette::new(Rgb::rgb(255, 0, 0).to_hsl(), Rgb::grey(0).to_hsl(), &Linear);
        paint_maze(&mut grid, &palette).unwrap();
        assert_eq!(grid.payload_snapshot().values(), &[0xff0000]);
    }
}
