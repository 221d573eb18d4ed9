//! Loss profile along the unit ring, drawn with egui_plot.
//!
//! Parameterizes the ring as theta in [-pi, pi] and samples
//! `L(cos theta, sin theta)`. With the penalty off the profile is flat zero
//! (the whole ring is a minimum); with the penalty on it becomes
//! `alpha * cos^2 theta`, bottoming out at theta = +-pi/2.

use egui::Color32;
use egui_plot::{Line, PlotPoints, Points};

use field::loss::{loss, PenaltyParams};

/// Tolerance for marking a sample as a minimum of the profile.
const MIN_EPS: f32 = 1e-6;

/// Summary of one sampled profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionStats {
    /// Smallest sampled loss on the ring
    pub min: f32,
    /// Largest sampled loss on the ring
    pub max: f32,
}

/// Drawable profile: the curve, markers at its minima, and the stats line.
pub struct RingSection {
    /// The loss curve over theta
    pub curve: Line,
    /// Markers at the sampled minima
    pub minima: Points,
    /// Min/max of the sampled profile
    pub stats: SectionStats,
}

/// Sample `L(cos theta, sin theta)` at `steps + 1` points over [-pi, pi].
pub fn sample_ring(params: PenaltyParams, steps: usize) -> Vec<[f64; 2]> {
    let n = steps.max(1);
    let mut pts: Vec<[f64; 2]> = Vec::with_capacity(n + 1);
    for k in 0..=n {
        let t = k as f32 / n as f32;
        let theta = -std::f32::consts::PI + t * std::f32::consts::TAU;
        let v = loss(theta.cos(), theta.sin(), params);
        pts.push([theta as f64, v as f64]);
    }
    pts
}

/// Build the drawable ring profile for the current parameters.
pub fn build_ring_section(params: PenaltyParams, steps: usize, curve_name: &str, minima_name: &str) -> RingSection {
    let pts = sample_ring(params, steps);
    let (mut min, mut max) = (f32::INFINITY, f32::NEG_INFINITY);
    for p in &pts {
        min = min.min(p[1] as f32);
        max = max.max(p[1] as f32);
    }
    let marks: Vec<[f64; 2]> =
        pts.iter().copied().filter(|p| (p[1] as f32 - min).abs() <= MIN_EPS).collect();
    let curve = Line::new(PlotPoints::from_iter(pts.iter().copied()))
        .color(Color32::from_rgb(80, 160, 240))
        .name(curve_name);
    let minima = Points::new(PlotPoints::from_iter(marks.iter().copied()))
        .color(Color32::from_rgb(250, 200, 80))
        .radius(2.5)
        .name(minima_name);
    RingSection { curve, minima, stats: SectionStats { min, max } }
}
