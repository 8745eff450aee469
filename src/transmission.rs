use std::f64::consts::PI;

/// Reshapes the interpolation parameter before colours are mixed.
///
/// The palette only mixes two colours linearly. Bending `t` on the way in is a much
/// cheaper way to get a different look than touching the colour maths. Both input and
/// output are in `[0.0, 1.0]`.
pub trait Transmission {
    fn id(&self) -> &'static str;

    fn transmit(&self, t: f64) -> f64;
}

/// `f(t) = t`
pub struct Linear;

/// Half a cosine wave, squeezed through (0, 0) and (1, 1).
pub struct Wave;

/// `f(t) = t²`. Leaves the primary colour quicker with fewer in-betweens.
pub struct Quadratic;

/// `f(t) = t¹⁰`. A sea of the primary colour with highlights of the secondary.
pub struct Pow10;

/// `Pow10` with the colours swapped.
pub struct InversePow10;

/// Only the two palette colours, nothing in between.
pub struct Round;

/// Ten even steps between the palette colours.
pub struct Piecewise10;

impl Transmission for Linear {
    fn id(&self) -> &'static str {
        "Linear"
    }

    fn transmit(&self, t: f64) -> f64 {
        t
    }
}

impl Transmission for Wave {
    fn id(&self) -> &'static str {
        "Wave"
    }

    fn transmit(&self, t: f64) -> f64 {
        (PI * t + PI).cos() / 2.0 + 0.5
    }
}

impl Transmission for Quadratic {
    fn id(&self) -> &'static str {
        "Quadratic"
    }

    fn transmit(&self, t: f64) -> f64 {
        t * t
    }
}

impl Transmission for Pow10 {
    fn id(&self) -> &'static str {
        "Pow10"
    }

    fn transmit(&self, t: f64) -> f64 {
        t.powi(10)
    }
}

impl Transmission for InversePow10 {
    fn id(&self) -> &'static str {
        "InversePow10"
    }

    fn transmit(&self, t: f64) -> f64 {
        1.0 - t.powi(10)
    }
}

impl Transmission for Round {
    fn id(&self) -> &'static str {
        "Round"
    }

    fn transmit(&self, t: f64) -> f64 {
        t.round()
    }
}

impl Transmission for Piecewise10 {
    fn id(&self) -> &'static str {
        "Piecewise10"
    }

    fn transmit(&self, t: f64) -> f64 {
        (t * 10.0).round() / 10.0
    }
}

/// If you write a new transmission, add it here so the command line knows about it.
pub const TRANSMISSIONS: &[&dyn Transmission] = &[
    &Linear,
    &Wave,
    &Quadratic,
    &Pow10,
    &InversePow10,
    &Round,
    &Piecewise10,
];
