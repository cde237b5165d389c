//! RGBA pixel sample
//!
//! A [`Pixel`] is a single RGBA sample with 8-bit channels. Storing channels
//! as `u8` makes the [0, 255] range invariant structural; values arriving
//! from outside the engine (fill colors, UI parameters) go through the
//! fallible [`Pixel::from_values`] boundary constructor instead.
//!
//! A pixel also carries a transient undefined-sample marker. It only matters
//! to [`Pixel::average`]: when exactly one side of an average is undefined,
//! the defined side wins outright. No engine operation sets the marker.

use crate::error::{Error, Result};

/// A single RGBA sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel
    pub alpha: u8,
    /// Undefined-sample marker, honored only by `average`
    undefined: bool,
}

impl Pixel {
    /// Create a pixel from 8-bit channel values.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Pixel {
            red,
            green,
            blue,
            alpha,
            undefined: false,
        }
    }

    /// Create a fully opaque pixel (alpha = 255).
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Pixel::new(red, green, blue, 255)
    }

    /// Create a pixel from untrusted channel values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOutOfRange`] if any value lies outside
    /// [0, 255].
    pub fn from_values(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self> {
        let check = |channel: &'static str, value: i32| -> Result<u8> {
            u8::try_from(value).map_err(|_| Error::ChannelOutOfRange { channel, value })
        };
        Ok(Pixel::new(
            check("red", red)?,
            check("green", green)?,
            check("blue", blue)?,
            check("alpha", alpha)?,
        ))
    }

    /// Whether this pixel is an undefined sample.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.undefined
    }

    /// Rewrite the color channels, keeping alpha and clearing the marker.
    #[inline]
    pub fn overwrite(&mut self, red: u8, green: u8, blue: u8) {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self.undefined = false;
    }

    /// Blend this pixel toward `other`.
    ///
    /// `bias` is the weight of `self`: each channel becomes
    /// `floor(self * bias + other * (1 - bias))`. The floor (not round) is
    /// deliberate; bilinear resampling output depends on it bit for bit.
    ///
    /// If exactly one side is an undefined sample, the defined side is
    /// returned unchanged, whatever the bias.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBias`] if `bias` lies outside [0, 1].
    pub fn average(&self, other: &Pixel, bias: f64) -> Result<Pixel> {
        if !(0.0..=1.0).contains(&bias) {
            return Err(Error::InvalidBias(bias));
        }
        if self.undefined && !other.undefined {
            return Ok(*other);
        }
        if !self.undefined && other.undefined {
            return Ok(*self);
        }
        let blend = |a: u8, b: u8| (f64::from(a) * bias + f64::from(b) * (1.0 - bias)).floor() as u8;
        Ok(Pixel::new(
            blend(self.red, other.red),
            blend(self.green, other.green),
            blend(self.blue, other.blue),
            blend(self.alpha, other.alpha),
        ))
    }
}
