// End-to-end tests over the public API: depth field generation feeding the
// disparity renderer, with a seeded generator for reproducibility.

use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use dot_n_depth::{render, DepthField, Error, Mode, Output};

#[test]
fn anaglyph_with_zero_scale_paints_every_pixel_white_balanced() {
    // With full density and no shift, every source pixel keeps its column,
    // so red, green, and blue must carry the same brightness everywhere.
    let depth = DepthField::generate(10, 10).unwrap();
    let mut rng = Xoshiro256Plus::seed_from_u64(123);

    let raster = match render(&depth, 1.0, 0, Mode::Anaglyph, &mut rng).unwrap() {
        Output::Anaglyph(raster) => raster,
        other => panic!("expected anaglyph output, got {other:?}"),
    };

    assert_eq!(raster.width(), 10);
    assert_eq!(raster.height(), 10);
    assert_eq!(raster.channels(), 3);
    for y in 0..10 {
        for x in 0..10 {
            let r = raster.get(x, y, 0);
            assert_eq!(r, raster.get(x, y, 1), "green differs at ({x}, {y})");
            assert_eq!(r, raster.get(x, y, 2), "blue differs at ({x}, {y})");
        }
    }
}

#[test]
fn same_seed_reproduces_the_image() {
    let depth = DepthField::generate(40, 30).unwrap();

    let mut rng = Xoshiro256Plus::seed_from_u64(9);
    let first = render(&depth, 0.5, 20, Mode::Anaglyph, &mut rng).unwrap();

    let mut rng = Xoshiro256Plus::seed_from_u64(9);
    let second = render(&depth, 0.5, 20, Mode::Anaglyph, &mut rng).unwrap();

    assert_eq!(first, second);
}

#[test]
fn split_eyes_produces_two_rgb_buffers() {
    let depth = DepthField::generate(16, 16).unwrap();
    let mut rng = Xoshiro256Plus::seed_from_u64(1);

    match render(&depth, 0.5, 10, Mode::SplitEyes, &mut rng).unwrap() {
        Output::SplitEyes { left, right } => {
            assert_eq!((left.width(), left.height(), left.channels()), (16, 16, 3));
            assert_eq!((right.width(), right.height(), right.channels()), (16, 16, 3));
        }
        other => panic!("expected split output, got {other:?}"),
    }
}

#[test]
fn precondition_errors_surface_before_rendering() {
    assert!(matches!(
        DepthField::generate(0, 0),
        Err(Error::InvalidDimension { .. })
    ));
    assert!(matches!(
        DepthField::from_values(5, 5, vec![0.0; 24]),
        Err(Error::DimensionMismatch { .. })
    ));

    let depth = DepthField::generate(8, 8).unwrap();
    let mut rng = Xoshiro256Plus::seed_from_u64(0);
    assert!(matches!(
        render(&depth, 1.1, 5, Mode::Grayscale, &mut rng),
        Err(Error::InvalidProbability(_))
    ));
}
