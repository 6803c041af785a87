use std::f32::consts::{FRAC_PI_2, PI};

use crate::error::Error;

/// Per-pixel depth in [0, 1], row-major. 0 is the flat background (no
/// disparity); values in (0.5, 1.0] lie inside the star, increasing toward
/// its center. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthField {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl DepthField {
    /// Generates the 5-pointed-star depth field. Deterministic: the same
    /// dimensions always produce the same field.
    pub fn generate(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut values = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                values.push(star_depth(width, height, x as f32, y as f32));
            }
        }

        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Builds a field from caller-supplied samples (row-major, one per
    /// pixel). Samples are expected to lie in [0, 1].
    pub fn from_values(width: usize, height: usize, values: Vec<f32>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if values.len() != width * height {
            return Err(Error::DimensionMismatch {
                width,
                height,
                len: values.len(),
            });
        }

        Ok(Self {
            width,
            height,
            values,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }
}

/// Depth of the star at a (possibly fractional) pixel position.
///
/// The star has 5-fold angular symmetry: the polar angle is folded into one
/// of five equal sectors and the radius threshold swings sinusoidally
/// between the inner and outer radius across the sector. Inside the
/// threshold, depth falls off linearly from 1.0 at the center to 0.5 at the
/// boundary; outside it is exactly 0.
fn star_depth(width: usize, height: usize, x: f32, y: f32) -> f32 {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let outer_radius = width.min(height) as f32 / 4.0;
    let inner_radius = outer_radius * 0.4;

    let dx = x - center_x;
    let dy = y - center_y;
    let distance = (dx * dx + dy * dy).sqrt();
    let angle = dy.atan2(dx);

    let folded = (angle + FRAC_PI_2).rem_euclid(2.0 * PI / 5.0);
    let threshold =
        inner_radius + (outer_radius - inner_radius) * (0.5 + 0.5 * (5.0 * folded).cos());

    if distance < threshold {
        1.0 - (distance / threshold) * 0.5
    } else {
        0.0
    }
}
