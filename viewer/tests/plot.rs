use field::loss::PenaltyParams;
use viewer::plot::{build_ring_section, sample_ring};

#[test]
fn flat_zero_without_penalty() {
    // The whole ring is a minimum when the penalty is off.
    let pts = sample_ring(PenaltyParams { alpha: 0.5, enabled: false }, 64);
    assert_eq!(pts.len(), 65);
    for p in &pts {
        assert!(p[1].abs() < 1e-9);
    }
}

#[test]
fn minima_at_poles_with_penalty() {
    let pts = sample_ring(PenaltyParams { alpha: 0.5, enabled: true }, 360);
    let best = pts
        .iter()
        .min_by(|a, b| a[1].partial_cmp(&b[1]).unwrap())
        .unwrap();
    assert!((best[0].abs() - std::f64::consts::FRAC_PI_2).abs() < 0.02);
}

#[test]
fn section_stats_match_penalty_strength() {
    // On the ring the profile is alpha * cos^2 theta: min 0, max alpha.
    let alpha = 0.3f32;
    let section =
        build_ring_section(PenaltyParams { alpha, enabled: true }, 360, "curve", "minima");
    assert!(section.stats.min.abs() < 1e-6);
    assert!((section.stats.max - alpha).abs() < 1e-5);
}

#[test]
fn theta_spans_full_turn() {
    let pts = sample_ring(PenaltyParams::default(), 8);
    assert!((pts[0][0] + std::f64::consts::PI).abs() < 1e-6);
    assert!((pts[8][0] - std::f64::consts::PI).abs() < 1e-6);
}
