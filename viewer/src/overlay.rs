//! Axis overlay: crosshair strokes and label anchors over the heatmap rect.

use egui::{epaint::Shape, Color32, Pos2, Rect, Stroke};

/// Inset of the axis labels from the line ends, in points.
const LABEL_PAD: f32 = 6.0;

/// 1 px solid white crosshair: a horizontal line at the vertical midpoint
/// and a vertical line at the horizontal midpoint of `rect`.
pub fn axis_cross(rect: Rect) -> Vec<Shape> {
    let c = rect.center();
    let stroke = Stroke::new(1.0, Color32::WHITE);
    vec![
        Shape::line_segment([Pos2::new(rect.left(), c.y), Pos2::new(rect.right(), c.y)], stroke),
        Shape::line_segment([Pos2::new(c.x, rect.top()), Pos2::new(c.x, rect.bottom())], stroke),
    ]
}

/// Anchors for the two axis labels: the x label near the right end of the
/// horizontal line, the y label near the top of the vertical line.
pub fn label_anchors(rect: Rect) -> (Pos2, Pos2) {
    let c = rect.center();
    let x_anchor = Pos2::new(rect.right() - LABEL_PAD, c.y - LABEL_PAD);
    let y_anchor = Pos2::new(c.x + LABEL_PAD, rect.top() + LABEL_PAD);
    (x_anchor, y_anchor)
}
