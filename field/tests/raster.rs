use field::colormap::Rgba;
use field::domain::Domain;
use field::loss::PenaltyParams;
use field::raster::{render_heatmap, sample_loss};

const OFF: PenaltyParams = PenaltyParams { alpha: 0.0, enabled: false };

#[test]
fn deterministic_byte_identical() {
    let p = PenaltyParams { alpha: 0.123, enabled: true };
    let (a, sa) = render_heatmap(64, 64, Domain::centered(), p);
    let (b, sb) = render_heatmap(64, 64, Domain::centered(), p);
    assert_eq!(sa, sb);
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn opaque_and_within_ramp_bounds() {
    let (map, _) = render_heatmap(50, 40, Domain::centered(), OFF);
    assert_eq!(map.pixels.len(), 50 * 40);
    for px in &map.pixels {
        assert_eq!(px.a, 255);
        assert!(px.g <= 100);
        // r = floor(255 t), b = floor(255 (1 - t)) for t in [0, 1]
        let rb = px.r as u32 + px.b as u32;
        assert!((254..=255).contains(&rb));
    }
}

#[test]
fn zero_sized_grid_is_empty() {
    let (map, stats) = render_heatmap(0, 37, Domain::centered(), OFF);
    assert_eq!(map.pixels.len(), 0);
    assert_eq!((stats.min, stats.max), (0.0, 0.0));
    let (map, _) = render_heatmap(37, 0, Domain::centered(), OFF);
    assert!(map.pixels.is_empty());
}

#[test]
fn flat_field_renders_minimum_color() {
    // A 1x1 grid has a single sample, so min == max.
    let (map, stats) = render_heatmap(1, 1, Domain::centered(), OFF);
    assert_eq!(stats.min, stats.max);
    assert_eq!(map.pixels, vec![Rgba { r: 0, g: 100, b: 255, a: 255 }]);
}

#[test]
fn stats_bound_every_sample() {
    let p = PenaltyParams { alpha: 0.4, enabled: true };
    let (values, stats) = sample_loss(33, 21, Domain::centered(), p);
    assert_eq!(values.len(), 33 * 21);
    for &v in &values {
        assert!(stats.min <= v && v <= stats.max);
    }
}

#[test]
fn ring_samples_beat_corners_on_4x4() {
    // Lattice: x in {-2,-1,0,1}, y in {2,1,0,-1}. (0,1) and (-1,0) sit on
    // the unit ring (loss 0); the four grid corners do not.
    let (values, _) = sample_loss(4, 4, Domain::centered(), OFF);
    let ring = [values[1 * 4 + 2], values[2 * 4 + 1]];
    let corners = [values[0], values[3], values[12], values[15]];
    for &r in &ring {
        assert_eq!(r, 0.0);
        for &c in &corners {
            assert!(r < c);
        }
    }
}

#[test]
fn strong_penalty_moves_argmin_to_poles() {
    let p = PenaltyParams { alpha: 0.5, enabled: true };
    let (w, h) = (100u32, 100u32);
    let d = Domain::centered();
    let (values, _) = sample_loss(w, h, d, p);
    let mut best = 0usize;
    for (i, &v) in values.iter().enumerate() {
        if v < values[best] {
            best = i;
        }
    }
    let (px, py) = (best as u32 % w, best as u32 / w);
    let (x, y) = d.pixel_to_xy(px, py, w, h);
    let dist = |ax: f32, ay: f32| ((x - ax).powi(2) + (y - ay).powi(2)).sqrt();
    let to_poles = dist(0.0, 1.0).min(dist(0.0, -1.0));
    let to_equator = dist(1.0, 0.0).min(dist(-1.0, 0.0));
    assert!(to_poles < to_equator);
}
