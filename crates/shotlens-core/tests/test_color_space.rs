use shotlens_core::color::{hsv_to_rgb, rgb_to_gray, rgb_to_hsv, ColorMode};

// ---------------------------------------------------------------------------
// Gray
// ---------------------------------------------------------------------------

#[test]
fn test_gray_extremes() {
    assert_eq!(rgb_to_gray(255, 255, 255), 255);
    assert_eq!(rgb_to_gray(0, 0, 0), 0);
}

#[test]
fn test_gray_weighted_sum() {
    // 0.299*100 + 0.587*150 + 0.114*200 = 140.75
    assert_eq!(rgb_to_gray(100, 150, 200), 141);
    assert_eq!(rgb_to_gray(255, 0, 0), 76);
    assert_eq!(rgb_to_gray(0, 255, 0), 150);
    assert_eq!(rgb_to_gray(0, 0, 255), 29);
}

// ---------------------------------------------------------------------------
// HSV
// ---------------------------------------------------------------------------

#[test]
fn test_hsv_primaries() {
    assert_eq!(rgb_to_hsv(255, 0, 0), [0, 255, 255]);
    assert_eq!(rgb_to_hsv(0, 255, 0), [60, 255, 255]);
    assert_eq!(rgb_to_hsv(0, 0, 255), [120, 255, 255]);
    assert_eq!(rgb_to_hsv(255, 255, 0), [30, 255, 255]);
}

#[test]
fn test_hsv_achromatic_has_zero_hue() {
    assert_eq!(rgb_to_hsv(0, 0, 0), [0, 0, 0]);
    assert_eq!(rgb_to_hsv(128, 128, 128), [0, 0, 128]);
    assert_eq!(rgb_to_hsv(255, 255, 255), [0, 0, 255]);
}

#[test]
fn test_hsv_hue_stays_below_180() {
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(15) {
            for b in (0..=255).step_by(15) {
                let [h, _, _] = rgb_to_hsv(r as u8, g as u8, b as u8);
                assert!(h < 180, "hue {h} for ({r}, {g}, {b})");
            }
        }
    }
}

fn max_channel_diff(a: [u8; 3], b: [u8; 3]) -> i32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as i32 - y as i32).abs())
        .max()
        .unwrap_or(0)
}

#[test]
fn test_hsv_roundtrip_low_chroma_within_two() {
    for base in (0..=225u32).step_by(15) {
        for dr in (0..=30u32).step_by(10) {
            for dg in (0..=30u32).step_by(10) {
                let rgb = [(base + dr) as u8, (base + dg) as u8, base as u8];
                let [h, s, v] = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
                let back = hsv_to_rgb(h, s, v);
                assert!(
                    max_channel_diff(rgb, back) <= 2,
                    "{rgb:?} -> {:?} -> {back:?}",
                    [h, s, v]
                );
            }
        }
    }
}

#[test]
fn test_hsv_roundtrip_error_grows_with_chroma() {
    // Hue is stored in 2-degree steps, so the error scales with max - min.
    for r in (0..=255u32).step_by(51) {
        for g in (0..=255u32).step_by(51) {
            for b in (0..=255u32).step_by(51) {
                let rgb = [r as u8, g as u8, b as u8];
                let chroma = r.max(g).max(b) - r.min(g).min(b);
                let bound = 2 + chroma.div_ceil(60) as i32;
                let [h, s, v] = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
                let back = hsv_to_rgb(h, s, v);
                assert!(
                    max_channel_diff(rgb, back) <= bound,
                    "{rgb:?} -> {back:?} exceeds {bound}"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ColorMode
// ---------------------------------------------------------------------------

#[test]
fn test_mode_codes_roundtrip() {
    for &mode in ColorMode::ALL {
        assert_eq!(ColorMode::from_code(mode.code()), Some(mode));
    }
    assert_eq!(ColorMode::Rgb.code(), 4);
    assert_eq!(ColorMode::Hsv.code(), 40);
    assert_eq!(ColorMode::Gray.code(), 6);
    assert_eq!(ColorMode::from_code(7), None);
}

#[test]
fn test_mode_parse_and_display() {
    assert_eq!("hsv".parse::<ColorMode>().unwrap(), ColorMode::Hsv);
    assert_eq!("GREY".parse::<ColorMode>().unwrap(), ColorMode::Gray);
    assert_eq!("40".parse::<ColorMode>().unwrap(), ColorMode::Hsv);
    assert!("cmyk".parse::<ColorMode>().is_err());
    assert_eq!(ColorMode::Gray.to_string(), "GRAY");
}

#[test]
fn test_mode_channel_limits() {
    assert_eq!(ColorMode::Gray.channels(), 1);
    assert_eq!(ColorMode::Hsv.channels(), 3);
    assert_eq!(ColorMode::Hsv.channel_max(0), 180);
    assert_eq!(ColorMode::Hsv.channel_max(1), 255);
    assert_eq!(ColorMode::Rgb.channel_max(0), 255);
}

#[test]
fn test_mode_convert() {
    assert_eq!(ColorMode::Gray.convert([100, 150, 200]).as_slice(), &[141]);
    assert_eq!(ColorMode::Rgb.convert([1, 2, 3]).as_slice(), &[1, 2, 3]);
    assert_eq!(ColorMode::Hsv.convert([0, 255, 0]).as_slice(), &[60, 255, 255]);
}
