//! Property tests for the rendering engine's building blocks.
//!
//! These tests sweep the public API over many inputs:
//! - Quantization ranges and round-trips through the palette
//! - Output sizing bounds for every mode
//! - Sampler coordinate bounds
//! - Dither determinism

use termuwu::render::color::{BLACK_INDEX, CUBE_END, CUBE_START, GRAY_RAMP_END, GRAY_RAMP_START};
use termuwu::render::dither::dither;
use termuwu::render::{
    approximate_rgb, compute_output_size, quantize, source_coord, Color, RenderConfig,
    RenderMode,
};

const ALL_MODES: [RenderMode; 3] = [RenderMode::Block, RenderMode::HalfBlock, RenderMode::Braille];

// ==================== Quantizer Tests ====================

#[test]
fn test_quantize_black_is_16() {
    assert_eq!(quantize(Color::new(0, 0, 0)), BLACK_INDEX);
    assert_eq!(BLACK_INDEX, 16);
}

#[test]
fn test_quantize_grays_use_ramp() {
    for v in 1..=255u8 {
        let q = quantize(Color::gray(v));
        assert!(
            (GRAY_RAMP_START..=GRAY_RAMP_END).contains(&q),
            "gray {} quantized to {}",
            v,
            q
        );
    }
}

#[test]
fn test_quantize_grays_are_monotonic() {
    // Below 15 the dark boost shifts values, so start above it
    let mut last = GRAY_RAMP_START;
    for v in 15..=255u8 {
        let q = quantize(Color::gray(v));
        assert!(q >= last, "gray {} went backwards: {} < {}", v, q, last);
        last = q;
    }
}

#[test]
fn test_quantize_primaries_use_cube() {
    for c in [
        Color::new(255, 0, 0),
        Color::new(0, 255, 0),
        Color::new(0, 0, 255),
    ] {
        let q = quantize(c);
        assert!((CUBE_START..=CUBE_END).contains(&q), "{:?} -> {}", c, q);
    }
}

#[test]
fn test_quantize_never_returns_system_colors() {
    for r in (0..=255u16).step_by(15) {
        for g in (0..=255u16).step_by(15) {
            for b in (0..=255u16).step_by(15) {
                let q = quantize(Color::new(r as u8, g as u8, b as u8));
                assert!(q >= 16, "({},{},{}) -> {}", r, g, b, q);
            }
        }
    }
}

#[test]
fn test_quantize_roundtrip_is_near_minimal() {
    // Re-quantizing what an index displays as lands on the same or an
    // adjacent entry: no channel moves by more than one cube step.
    for index in 16..=255u8 {
        let shown = approximate_rgb(index);
        let back = approximate_rgb(quantize(shown));
        let [r1, g1, b1]: [u8; 3] = shown.into();
        let [r2, g2, b2]: [u8; 3] = back.into();
        for (a, b) in [(r1, r2), (g1, g2), (b1, b2)] {
            assert!(
                (a as i32 - b as i32).abs() <= 48,
                "index {} drifted from {:?} to {:?}",
                index,
                shown,
                back
            );
        }
    }
}

#[test]
fn test_quantize_is_exact_for_upper_cube_levels() {
    // Levels 95 and above sit exactly on their own thresholds
    for r in 2..6u8 {
        for g in 2..6u8 {
            for b in 2..6u8 {
                if r == g && g == b {
                    continue;
                }
                let index = 16 + 36 * r + 6 * g + b;
                assert_eq!(quantize(approximate_rgb(index)), index);
            }
        }
    }
}

// ==================== Scaler Tests ====================

#[test]
fn test_output_size_always_positive() {
    let sources = [(1, 1), (1, 500), (500, 1), (3, 7), (640, 480), (4000, 3000)];
    let limits = [(1, 1), (2, 3), (80, 24), (300, 100)];
    for &(sw, sh) in &sources {
        for &(mw, mh) in &limits {
            for mode in ALL_MODES {
                let (w, h) = compute_output_size(sw, sh, mode, mw, mh, 0.5);
                assert!(w >= 1 && h >= 1, "{:?} {}x{} in {}x{}", mode, sw, sh, mw, mh);
                assert!(w <= mw.max(1), "{:?} width {} over {}", mode, w, mw);
            }
        }
    }
}

#[test]
fn test_half_block_height_even_and_bounded() {
    for sw in [1u32, 2, 5, 17, 333, 1024] {
        for sh in [1u32, 2, 5, 17, 333, 1024] {
            for (mw, mh) in [(1u32, 1u32), (80, 24), (37, 11)] {
                let (_, h) = compute_output_size(sw, sh, RenderMode::HalfBlock, mw, mh, 0.5);
                assert_eq!(h % 2, 0, "{}x{} gave odd height {}", sw, sh, h);
                assert!(h >= 2);
                assert!(h <= mh * 2, "{}x{} gave {} rows over {}", sw, sh, h / 2, mh);
            }
        }
    }
}

#[test]
fn test_block_height_bounded_by_max() {
    for (sw, sh) in [(10u32, 10u32), (100, 400), (640, 480), (1, 1000)] {
        let (_, h) = compute_output_size(sw, sh, RenderMode::Block, 80, 24, 0.5);
        assert!(h <= 24, "{}x{} gave height {}", sw, sh, h);
    }
}

#[test]
fn test_config_output_size_uses_its_fields() {
    let config = RenderConfig::new(RenderMode::Block).with_size(64, 16);
    assert_eq!(config.output_size(64, 64), (8, 16));
}

// ==================== Sampler Tests ====================

#[test]
fn test_source_coord_stays_in_bounds() {
    for source_extent in [1u32, 2, 3, 10, 97, 640] {
        for out_extent in [1u32, 2, 3, 10, 97, 640] {
            for target in 0..out_extent {
                let c = source_coord(target, source_extent, out_extent);
                assert!(c < source_extent, "{} -> {} of {}", target, c, source_extent);
            }
        }
    }
}

#[test]
fn test_source_coord_is_monotonic() {
    let coords: Vec<u32> = (0..50).map(|t| source_coord(t, 13, 50)).collect();
    assert!(coords.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(coords[0], 0);
    assert_eq!(*coords.last().unwrap(), 12);
}

// ==================== Dither Tests ====================

#[test]
fn test_dither_is_pure() {
    let c = Color::new(90, 140, 210);
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(dither(c, x, y), dither(c, x, y));
        }
    }
}

#[test]
fn test_dither_offsets_are_small() {
    let c = Color::new(100, 100, 100);
    for y in 0..2 {
        for x in 0..2 {
            let d = dither(c, x, y);
            assert!((d.r as i32 - 100).abs() <= 4);
            assert_eq!(d.r, d.g);
            assert_eq!(d.g, d.b);
        }
    }
}

#[test]
fn test_disabled_dither_is_identity() {
    let config = RenderConfig::default().with_dither(false);
    for y in 0..4 {
        for x in 0..4 {
            let c = Color::new((x * 60) as u8, (y * 60) as u8, 7);
            assert_eq!(config.apply_dither(c, x, y), c);
        }
    }
}
