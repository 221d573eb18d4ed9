//! Loss-to-color mapping: contrast-window normalization and the fixed
//! blue-to-red channel ramp.

use bytemuck::{Pod, Zeroable};

/// Width of the displayed loss window above the observed minimum.
///
/// The unconstrained field spans a large range dominated by the region far
/// from the ring; clamping the ceiling to `min + CONTRAST_WINDOW` keeps the
/// ring/point structure visible for every alpha.
pub const CONTRAST_WINDOW: f32 = 0.5;

/// One sRGB pixel, 8 bits per channel, alpha last.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha (always 255 in rendered output)
    pub a: u8,
}

/// Ceiling of the normalization window: `max` clamped to `min + CONTRAST_WINDOW`.
#[inline]
pub fn clamped_ceiling(min: f32, max: f32) -> f32 {
    max.min(min + CONTRAST_WINDOW)
}

/// Map a loss sample into [0, 1] within the window `[min, ceiling]`.
///
/// A flat field (`ceiling <= min`) maps everything to 0 rather than dividing
/// by zero; samples above the ceiling saturate at 1.
#[inline]
pub fn normalize(v: f32, min: f32, ceiling: f32) -> f32 {
    if ceiling <= min {
        return 0.0;
    }
    ((v - min) / (ceiling - min)).clamp(0.0, 1.0)
}

/// Blue (t = 0, low loss) to red (t = 1, high loss) ramp.
///
/// Exact per-channel formulas, reproduced as-is for compatibility with the
/// expected visual output; this is a plain linear blend, not a perceptual
/// colormap.
#[inline]
pub fn heat_rgba(t: f32) -> Rgba {
    Rgba {
        r: (255.0 * t).floor() as u8,
        g: (100.0 * (1.0 - t)).floor() as u8,
        b: (255.0 * (1.0 - t)).floor() as u8,
        a: 255,
    }
}
