//! Ring-loss field evaluation and heatmap rasterization.
//! No GUI dependencies; the viewer crate owns presentation.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod colormap;
pub mod domain;
pub mod loss;
pub mod raster;

/// Returns the crate version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
