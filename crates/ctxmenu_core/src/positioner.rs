//! Popup placement with far-edge overflow handling.
//!
//! The requested point is kept unless the popup would cross the right or
//! bottom edge, in which case that axis is pulled back so the popup ends
//! [`EDGE_MARGIN`] pixels inside the edge. The two axes are independent and
//! the top/left edges are never clamped.

use crate::geometry::{EdgePolicy, Point, Size, Viewport};

/// Gap between the popup and the edge it would otherwise overflow.
pub const EDGE_MARGIN: f64 = 5.0;

/// Clamp `requested` using the default edge policy and margin.
pub fn clamp(requested: Point, popup: Size, viewport: &Viewport) -> Point {
    Positioner::default().place(requested, popup, viewport)
}

/// Placement settings fixed for the lifetime of a menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Positioner {
    edge: EdgePolicy,
    margin: f64,
}

impl Positioner {
    /// Create a positioner with an explicit edge policy and margin.
    pub fn new(edge: EdgePolicy, margin: f64) -> Self {
        Self { edge, margin }
    }

    /// The edge policy in use.
    pub fn edge(&self) -> EdgePolicy {
        self.edge
    }

    /// The margin kept from an overflowed edge.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Compute where a popup of size `popup` should be anchored.
    pub fn place(&self, requested: Point, popup: Size, viewport: &Viewport) -> Point {
        let edge = viewport.far_edge(self.edge);
        Point::new(
            clamp_axis(requested.x, popup.width, edge.x, self.margin),
            clamp_axis(requested.y, popup.height, edge.y, self.margin),
        )
    }
}

impl Default for Positioner {
    fn default() -> Self {
        Self::new(EdgePolicy::default(), EDGE_MARGIN)
    }
}

/// One axis of the clamp. Landing exactly on the edge is not an overflow.
fn clamp_axis(start: f64, extent: f64, edge: f64, margin: f64) -> f64 {
    if start + extent > edge {
        edge - extent - margin
    } else {
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_inside_is_unchanged() {
        let viewport = Viewport::new(1400.0, 1400.0);
        let at = clamp(Point::new(10.0, 10.0), Size::new(100.0, 40.0), &viewport);
        assert_eq!(at, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_corner_overflow_is_clamped_on_both_axes() {
        let viewport = Viewport::new(1400.0, 1400.0);
        let at = clamp(Point::new(1399.0, 1399.0), Size::new(100.0, 40.0), &viewport);
        assert_eq!(at, Point::new(1295.0, 1355.0));
    }

    #[test]
    fn test_fitting_points_are_never_moved() {
        let viewport = Viewport::new(300.0, 200.0);
        let popup = Size::new(50.0, 30.0);
        for x in (0..=250).step_by(10) {
            for y in (0..=170).step_by(10) {
                let requested = Point::new(x as f64, y as f64);
                assert_eq!(clamp(requested, popup, &viewport), requested, "moved {requested:?}");
            }
        }
    }

    #[test]
    fn test_axes_clamp_independently() {
        let viewport = Viewport::new(300.0, 200.0);
        let popup = Size::new(50.0, 30.0);

        for y in [0.0, 85.0, 170.0] {
            let at = clamp(Point::new(280.0, y), popup, &viewport);
            assert_eq!(at, Point::new(300.0 - 50.0 - EDGE_MARGIN, y));
        }
        for x in [0.0, 125.0, 250.0] {
            let at = clamp(Point::new(x, 199.0), popup, &viewport);
            assert_eq!(at, Point::new(x, 200.0 - 30.0 - EDGE_MARGIN));
        }
    }

    #[test]
    fn test_exact_fit_is_not_overflow() {
        let viewport = Viewport::new(300.0, 200.0);
        let at = clamp(Point::new(250.0, 170.0), Size::new(50.0, 30.0), &viewport);
        assert_eq!(at, Point::new(250.0, 170.0));
    }

    #[test]
    fn test_top_left_is_never_clamped() {
        let viewport = Viewport::new(300.0, 200.0);
        let at = clamp(Point::new(-40.0, -15.0), Size::new(50.0, 30.0), &viewport);
        assert_eq!(at, Point::new(-40.0, -15.0));
    }

    #[test]
    fn test_viewport_edge_includes_scroll_offset() {
        let viewport =
            Viewport::new(800.0, 600.0).with_scroll(0.0, 1000.0).with_document(800.0, 5000.0);
        let popup = Size::new(100.0, 40.0);

        // Inside the scrolled viewport.
        let at = clamp(Point::new(20.0, 1500.0), popup, &viewport);
        assert_eq!(at, Point::new(20.0, 1500.0));

        // Past the bottom of the scrolled viewport.
        let at = clamp(Point::new(20.0, 1590.0), popup, &viewport);
        assert_eq!(at, Point::new(20.0, 1600.0 - 40.0 - EDGE_MARGIN));
    }

    #[test]
    fn test_document_policy_uses_document_size() {
        let viewport =
            Viewport::new(800.0, 600.0).with_scroll(0.0, 1000.0).with_document(800.0, 5000.0);
        let positioner = Positioner::new(EdgePolicy::Document, EDGE_MARGIN);

        let at = positioner.place(Point::new(20.0, 1590.0), Size::new(100.0, 40.0), &viewport);
        assert_eq!(at, Point::new(20.0, 1590.0));

        let at = positioner.place(Point::new(20.0, 4990.0), Size::new(100.0, 40.0), &viewport);
        assert_eq!(at, Point::new(20.0, 5000.0 - 40.0 - EDGE_MARGIN));
    }

    #[test]
    fn test_custom_margin() {
        let positioner = Positioner::new(EdgePolicy::Viewport, 12.0);
        let at = positioner.place(
            Point::new(1399.0, 10.0),
            Size::new(100.0, 40.0),
            &Viewport::new(1400.0, 1400.0),
        );
        assert_eq!(at, Point::new(1288.0, 10.0));
    }
}
