use rand_core::RngCore;

use crate::depth::DepthField;
use crate::error::Error;
use crate::raster::Raster;

const RED: usize = 0;
const GREEN: usize = 1;
const BLUE: usize = 2;

/// Output shape of a render pass. All modes share one scan loop and one
/// shift/clamp path; only the buffer layout and channel routing differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Base random-dot pattern, no disparity applied.
    Grayscale,
    /// Left eye (red) and right eye (cyan) as two separate images.
    SplitEyes,
    /// Both eye views merged into one image for red-cyan glasses.
    Anaglyph,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Grayscale(Raster),
    SplitEyes { left: Raster, right: Raster },
    Anaglyph(Raster),
}

/// Scatters random dots over the depth field, shifting each dot left for
/// the red channel and right for the green/blue channels by
/// `trunc(depth * depth_scale)` pixels.
///
/// Every source pixel independently receives a dot with probability
/// `dot_density`; each dot gets a uniform random brightness. Shifted
/// destinations are clamped to the image, so dots near the border may
/// collapse onto the boundary column. Scan order is row-major and
/// overlapping destinations resolve last-write-wins.
pub fn render<R: RngCore>(
    depth: &DepthField,
    dot_density: f64,
    depth_scale: u32,
    mode: Mode,
    rng: &mut R,
) -> Result<Output, Error> {
    if !(0.0..=1.0).contains(&dot_density) {
        return Err(Error::InvalidProbability(dot_density));
    }

    let width = depth.width();
    let height = depth.height();

    let mut output = match mode {
        Mode::Grayscale => Output::Grayscale(Raster::gray(width, height)),
        Mode::SplitEyes => Output::SplitEyes {
            left: Raster::rgb(width, height),
            right: Raster::rgb(width, height),
        },
        Mode::Anaglyph => Output::Anaglyph(Raster::rgb(width, height)),
    };

    for y in 0..height {
        for x in 0..width {
            if next_unit(rng) >= dot_density {
                continue;
            }
            let brightness = (next_unit(rng) * 255.0) as u8;

            let shift = (f64::from(depth.get(x, y)) * f64::from(depth_scale)) as usize;
            let left_x = x.saturating_sub(shift);
            let right_x = (x + shift).min(width - 1);

            match &mut output {
                Output::Grayscale(raster) => raster.set(x, y, 0, brightness),
                Output::SplitEyes { left, right } => {
                    left.set(left_x, y, RED, brightness);
                    right.set(right_x, y, GREEN, brightness);
                    right.set(right_x, y, BLUE, brightness);
                }
                Output::Anaglyph(raster) => {
                    raster.set(left_x, y, RED, brightness);
                    raster.set(right_x, y, GREEN, brightness);
                    raster.set(right_x, y, BLUE, brightness);
                }
            }
        }
    }

    Ok(output)
}

fn next_unit<R: RngCore>(rng: &mut R) -> f64 {
    f64::from(rng.next_u32()) / (f64::from(u32::MAX) + 1.0)
}
