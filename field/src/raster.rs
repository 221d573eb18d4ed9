//! Heatmap rasterization: two passes over the pixel grid.
//!
//! Pass 1 evaluates the loss at every pixel and tracks min/max; pass 2
//! normalizes each sample into the contrast window and maps it to color.
//! The normalization bounds depend on the complete field, so the buffered
//! two-pass structure is load-bearing, not incidental.

use crate::colormap::{clamped_ceiling, heat_rgba, normalize, Rgba};
use crate::domain::Domain;
use crate::loss::{loss, PenaltyParams};

/// Min/max loss observed across one sampling pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossStats {
    /// Smallest sampled loss (0.0 for an empty grid)
    pub min: f32,
    /// Largest sampled loss (0.0 for an empty grid)
    pub max: f32,
}

/// RGBA heatmap image, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// `width * height` pixels, row-major
    pub pixels: Vec<Rgba>,
}

impl Heatmap {
    /// Raw byte view of the pixel buffer (RGBA order, no copy).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Pass 1: evaluate the loss at every pixel of a `width x height` grid.
///
/// Returns the row-major sample matrix and its observed bounds. A zero-sized
/// grid yields an empty matrix and zeroed stats.
pub fn sample_loss(
    width: u32,
    height: u32,
    domain: Domain,
    params: PenaltyParams,
) -> (Vec<f32>, LossStats) {
    let mut values: Vec<f32> = Vec::with_capacity(width as usize * height as usize);
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for py in 0..height {
        for px in 0..width {
            let (x, y) = domain.pixel_to_xy(px, py, width, height);
            let v = loss(x, y, params);
            min = min.min(v);
            max = max.max(v);
            values.push(v);
        }
    }
    if values.is_empty() {
        return (values, LossStats { min: 0.0, max: 0.0 });
    }
    (values, LossStats { min, max })
}

/// Render the loss field to an RGBA heatmap.
///
/// Deterministic: identical inputs produce byte-identical buffers. The
/// matrix and pixel buffer are rebuilt from scratch on every call and never
/// partially published.
pub fn render_heatmap(
    width: u32,
    height: u32,
    domain: Domain,
    params: PenaltyParams,
) -> (Heatmap, LossStats) {
    let (values, stats) = sample_loss(width, height, domain, params);
    let ceiling = clamped_ceiling(stats.min, stats.max);
    let pixels: Vec<Rgba> =
        values.iter().map(|&v| heat_rgba(normalize(v, stats.min, ceiling))).collect();
    (Heatmap { width, height, pixels }, stats)
}
