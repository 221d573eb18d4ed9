use field::colormap::{clamped_ceiling, heat_rgba, normalize, Rgba, CONTRAST_WINDOW};

#[test]
fn ramp_endpoints() {
    assert_eq!(heat_rgba(0.0), Rgba { r: 0, g: 100, b: 255, a: 255 });
    assert_eq!(heat_rgba(1.0), Rgba { r: 255, g: 0, b: 0, a: 255 });
}

#[test]
fn ramp_channel_formulas() {
    let c = heat_rgba(0.5);
    assert_eq!(c.r, 127); // floor(255 * 0.5)
    assert_eq!(c.g, 50);
    assert_eq!(c.b, 127);
    assert_eq!(c.a, 255);
}

#[test]
fn ramp_monotone_and_opaque() {
    let mut prev = heat_rgba(0.0);
    for k in 1..=100 {
        let c = heat_rgba(k as f32 / 100.0);
        assert!(c.r >= prev.r);
        assert!(c.g <= prev.g);
        assert!(c.b <= prev.b);
        assert_eq!(c.a, 255);
        prev = c;
    }
}

#[test]
fn ceiling_clamps_to_window() {
    assert_eq!(clamped_ceiling(1.0, 10.0), 1.0 + CONTRAST_WINDOW);
    assert_eq!(clamped_ceiling(1.0, 1.2), 1.2);
    assert_eq!(clamped_ceiling(0.0, 0.0), 0.0);
}

#[test]
fn normalize_clamps_and_guards() {
    assert_eq!(normalize(0.25, 0.0, 0.5), 0.5);
    // Saturation above the ceiling and below the floor
    assert_eq!(normalize(9.0, 0.0, 0.5), 1.0);
    assert_eq!(normalize(-1.0, 0.0, 0.5), 0.0);
    // Flat field: defined fallback, not NaN
    assert_eq!(normalize(3.0, 3.0, 3.0), 0.0);
}

#[test]
fn normalize_stays_in_unit_interval() {
    for k in 0..=1000 {
        let v = -2.0 + k as f32 * 0.05;
        let t = normalize(v, -1.0, 4.0);
        assert!((0.0..=1.0).contains(&t));
    }
}
