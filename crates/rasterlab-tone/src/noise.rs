//! Salt and pepper noise
//!
//! Impulse noise driven by one uniform draw per pixel. When both salt and
//! pepper are requested, the choice between white and black is derived from
//! a digit of that same draw, not from a second independent draw, so a
//! single random sequence fully determines the output.

use crate::error::{ToneError, ToneResult};
use rand::{Rng, RngExt};
use rasterlab_core::Raster;

/// The default impulse probability used by the convenience wrappers.
pub const DEFAULT_NOISE_PROBABILITY: f64 = 0.01;

/// Overwrite roughly `probability` of all pixels with impulse noise.
///
/// Each pixel draws one uniform value in [0, 1); pixels whose draw falls
/// below `probability` are hit. With both `salt` and `pepper` enabled the
/// polarity alternates on the parity of `round(draw * 10)`; with only one
/// enabled that extreme is always written. Alpha is never touched.
///
/// # Errors
///
/// Returns [`ToneError::InvalidProbability`] if `probability` lies outside
/// [0, 1]; the raster is not modified.
pub fn add_noise(
    raster: &mut Raster,
    probability: f64,
    salt: bool,
    pepper: bool,
    rng: &mut impl Rng,
) -> ToneResult<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(ToneError::InvalidProbability(probability));
    }
    if !salt && !pepper {
        return Ok(());
    }

    for row in raster.rows_mut() {
        for pixel in row {
            let draw = rng.random::<f64>();
            if draw >= probability {
                continue;
            }
            let white = if salt && pepper {
                (draw * 10.0).round() as u64 % 2 == 0
            } else {
                salt
            };
            if white {
                pixel.overwrite(255, 255, 255);
            } else {
                pixel.overwrite(0, 0, 0);
            }
        }
    }
    Ok(())
}

/// Add 1% salt-and-pepper noise.
pub fn salt_and_pepper(raster: &mut Raster, rng: &mut impl Rng) -> ToneResult<()> {
    add_noise(raster, DEFAULT_NOISE_PROBABILITY, true, true, rng)
}

/// Add 1% salt (white) noise.
pub fn salt(raster: &mut Raster, rng: &mut impl Rng) -> ToneResult<()> {
    add_noise(raster, DEFAULT_NOISE_PROBABILITY, true, false, rng)
}

/// Add 1% pepper (black) noise.
pub fn pepper(raster: &mut Raster, rng: &mut impl Rng) -> ToneResult<()> {
    add_noise(raster, DEFAULT_NOISE_PROBABILITY, false, true, rng)
}
