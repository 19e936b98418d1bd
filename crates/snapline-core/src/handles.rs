//! Transform handle identifiers and the relative origins used to re-anchor a
//! shape after a resize.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One of the eight transform controls of a shape.
///
/// Four corners plus four edge midpoints. Names follow the host convention
/// (`tl`, `mt`, ...), which is also the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "mt")]
    MiddleTop,
    #[serde(rename = "mr")]
    MiddleRight,
    #[serde(rename = "mb")]
    MiddleBottom,
    #[serde(rename = "ml")]
    MiddleLeft,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::MiddleTop,
        Corner::MiddleRight,
        Corner::MiddleBottom,
        Corner::MiddleLeft,
    ];

    /// Check if this is an edge midpoint handle.
    pub fn is_midpoint(self) -> bool {
        matches!(
            self,
            Corner::MiddleTop | Corner::MiddleRight | Corner::MiddleBottom | Corner::MiddleLeft
        )
    }

    pub fn has_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft | Corner::MiddleLeft)
    }

    pub fn has_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight | Corner::MiddleRight)
    }

    pub fn has_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight | Corner::MiddleTop)
    }

    pub fn has_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight | Corner::MiddleBottom)
    }

    /// Check if dragging this handle changes the local width.
    pub fn moves_x(self) -> bool {
        self.has_left() || self.has_right()
    }

    /// Check if dragging this handle changes the local height.
    pub fn moves_y(self) -> bool {
        self.has_top() || self.has_bottom()
    }

    /// Swap left and right (for horizontally flipped shapes).
    pub fn flip_x(self) -> Self {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::BottomRight,
            Corner::BottomRight => Corner::BottomLeft,
            Corner::MiddleLeft => Corner::MiddleRight,
            Corner::MiddleRight => Corner::MiddleLeft,
            other => other,
        }
    }

    /// Swap top and bottom (for vertically flipped shapes).
    pub fn flip_y(self) -> Self {
        match self {
            Corner::TopLeft => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomRight => Corner::TopRight,
            Corner::MiddleTop => Corner::MiddleBottom,
            Corner::MiddleBottom => Corner::MiddleTop,
            other => other,
        }
    }

    /// Map a visual handle to the geometric corner of a possibly flipped shape.
    pub fn for_flip(self, flip_x: bool, flip_y: bool) -> Self {
        let corner = if flip_x { self.flip_x() } else { self };
        if flip_y { corner.flip_y() } else { corner }
    }

    /// The handle diagonally (or directly, for midpoints) across the shape.
    pub fn opposite(self) -> Self {
        self.flip_x().flip_y()
    }

    /// Fractional position of this handle in the shape's local box (0, 0.5 or 1 per axis).
    pub fn fraction(self) -> (f64, f64) {
        let fx = if self.has_left() {
            0.0
        } else if self.has_right() {
            1.0
        } else {
            0.5
        };
        let fy = if self.has_top() {
            0.0
        } else if self.has_bottom() {
            1.0
        } else {
            0.5
        };
        (fx, fy)
    }
}

/// Horizontal part of a relative origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginX {
    Left,
    Center,
    Right,
}

/// Vertical part of a relative origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginY {
    Top,
    Center,
    Bottom,
}

/// A point in a shape's local box named by its side, e.g. right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelativeOrigin {
    pub x: OriginX,
    pub y: OriginY,
}

impl RelativeOrigin {
    pub fn new(x: OriginX, y: OriginY) -> Self {
        Self { x, y }
    }

    /// Fractional position in the local box.
    pub fn fraction(self) -> (f64, f64) {
        let fx = match self.x {
            OriginX::Left => 0.0,
            OriginX::Center => 0.5,
            OriginX::Right => 1.0,
        };
        let fy = match self.y {
            OriginY::Top => 0.0,
            OriginY::Center => 0.5,
            OriginY::Bottom => 1.0,
        };
        (fx, fy)
    }
}

/// Relative origin that stays fixed while a given handle is dragged.
pub fn default_origin(corner: Corner) -> RelativeOrigin {
    use OriginX as X;
    use OriginY as Y;
    match corner {
        Corner::TopLeft => RelativeOrigin::new(X::Right, Y::Bottom),
        Corner::TopRight => RelativeOrigin::new(X::Left, Y::Bottom),
        Corner::BottomRight => RelativeOrigin::new(X::Left, Y::Top),
        Corner::BottomLeft => RelativeOrigin::new(X::Right, Y::Top),
        Corner::MiddleTop => RelativeOrigin::new(X::Center, Y::Bottom),
        Corner::MiddleRight => RelativeOrigin::new(X::Left, Y::Center),
        Corner::MiddleBottom => RelativeOrigin::new(X::Center, Y::Top),
        Corner::MiddleLeft => RelativeOrigin::new(X::Right, Y::Center),
    }
}

/// Mapping from handle to the corner that stays fixed while it is dragged.
pub type OppositeCornerMap = HashMap<Corner, Corner>;

/// Default opposite-corner map: diagonal for corners, facing edge for midpoints.
pub fn default_opposite_map() -> OppositeCornerMap {
    Corner::ALL.iter().map(|&c| (c, c.opposite())).collect()
}
