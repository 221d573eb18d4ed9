//! PNG snapshot of the current heatmap.

use field::raster::Heatmap;

/// Write the heatmap to `path` as a PNG.
///
/// Best-effort from the caller's point of view: the viewer shows the error
/// in the HUD instead of aborting.
pub fn export_heatmap_png(map: &Heatmap, path: &str) -> Result<(), String> {
    if map.width == 0 || map.height == 0 {
        return Err("export: empty heatmap".to_string());
    }
    let img = image::RgbaImage::from_raw(map.width, map.height, map.as_bytes().to_vec())
        .ok_or_else(|| "export: pixel buffer does not match dimensions".to_string())?;
    img.save(path).map_err(|e| format!("export: write {path}: {e}"))
}
