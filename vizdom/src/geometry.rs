//! Geometry value types used by the position and offset queries.

/// A top/left coordinate pair.
///
/// Used both for element positions (offset-parent-relative or
/// viewport-relative) and for document-level scroll/border state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Vertical coordinate, in pixels.
    pub top: f64,
    /// Horizontal coordinate, in pixels.
    pub left: f64,
}

impl Position {
    /// Create a position from its top/left components.
    pub fn new(top: f64, left: f64) -> Self {
        Position { top, left }
    }
}

/// A bounding rectangle in viewport coordinates.
///
/// There is no layout engine in this crate; rectangles are host state set
/// by the embedding layer (see [`Element::set_bounding_rect`]) and read
/// back unchanged.
///
/// [`Element::set_bounding_rect`]: crate::Element::set_bounding_rect
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientRect {
    /// Distance from the top of the viewport, in pixels.
    pub top: f64,
    /// Distance from the left of the viewport, in pixels.
    pub left: f64,
    /// Width of the rectangle, in pixels.
    pub width: f64,
    /// Height of the rectangle, in pixels.
    pub height: f64,
}

impl ClientRect {
    /// Create a rectangle from its components.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        ClientRect {
            top,
            left,
            width,
            height,
        }
    }
}
