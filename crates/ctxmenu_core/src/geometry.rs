//! Page-coordinate geometry used by the positioner.
//!
//! All values are in CSS pixels (device-independent units) measured from the
//! document origin, which is what pointer events report as page coordinates.

use serde::{Deserialize, Serialize};

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured size of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which boundary counts as the far (right/bottom) edge when clamping.
///
/// The two definitions only differ when the document is larger than the
/// visible viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// The visible viewport shifted by the current scroll offset.
    #[default]
    Viewport,
    /// The full scrollable document.
    Document,
}

/// Viewport geometry, read fresh from the host on every open attempt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
    /// Horizontal scroll offset of the visible area.
    pub scroll_x: f64,
    /// Vertical scroll offset of the visible area.
    pub scroll_y: f64,
    /// Full scrollable width of the document.
    pub document_width: f64,
    /// Full scrollable height of the document.
    pub document_height: f64,
}

impl Viewport {
    /// Create an unscrolled viewport whose document exactly fills it.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
            document_width: width,
            document_height: height,
        }
    }

    /// Builder: set the scroll offset.
    pub fn with_scroll(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    /// Builder: set the full document size.
    pub fn with_document(mut self, width: f64, height: f64) -> Self {
        self.document_width = width;
        self.document_height = height;
        self
    }

    /// The right/bottom boundary, in page coordinates, under `policy`.
    pub fn far_edge(&self, policy: EdgePolicy) -> Point {
        match policy {
            EdgePolicy::Viewport => {
                Point::new(self.scroll_x + self.width, self.scroll_y + self.height)
            }
            EdgePolicy::Document => Point::new(self.document_width, self.document_height),
        }
    }
}
