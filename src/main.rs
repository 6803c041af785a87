use std::fs;

use anyhow::Result;
use log::info;
use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use dot_n_depth::{render, DepthField, Mode, Output};

const WIDTH: usize = 800;
const HEIGHT: usize = 600;
const DOT_DENSITY: f64 = 0.5;

fn main() -> Result<()> {
    env_logger::init();

    fs::create_dir_all("./out")?;
    let mut rng = Xoshiro256Plus::from_entropy();

    let depth = DepthField::generate(WIDTH, HEIGHT)?;

    // Base pattern: the dots alone, before any disparity is applied.
    if let Output::Grayscale(raster) = render(&depth, DOT_DENSITY, 0, Mode::Grayscale, &mut rng)? {
        raster.write_png("./out/random_dots.png")?;
        info!("wrote out/random_dots.png");
    }

    // Per-eye views: red dots shifted left, cyan dots shifted right.
    if let Output::SplitEyes { left, right } =
        render(&depth, DOT_DENSITY, 20, Mode::SplitEyes, &mut rng)?
    {
        left.write_png("./out/left_eye_red.png")?;
        right.write_png("./out/right_eye_cyan.png")?;
        info!("wrote out/left_eye_red.png and out/right_eye_cyan.png");
    }

    // Both views in one image for red-cyan glasses (red lens on the left).
    if let Output::Anaglyph(raster) = render(&depth, DOT_DENSITY, 20, Mode::Anaglyph, &mut rng)? {
        raster.write_png("./out/anaglyph.png")?;
        info!("wrote out/anaglyph.png");
    }

    // Sweep the depth scale; large shifts pop more but get harder to fuse.
    for (depth_scale, label) in [
        (5, "shallow"),
        (10, "slight"),
        (20, "medium"),
        (30, "deep"),
        (40, "very_deep"),
    ] {
        if let Output::Anaglyph(raster) =
            render(&depth, DOT_DENSITY, depth_scale, Mode::Anaglyph, &mut rng)?
        {
            let file_name = format!("./out/anaglyph_{label}_{depth_scale}.png");
            raster.write_png(&file_name)?;
            info!("wrote {file_name} (depth_scale={depth_scale})");
        }
    }

    Ok(())
}
