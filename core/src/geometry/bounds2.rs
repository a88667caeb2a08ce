//! 2-D Axis Aligned Bounding Boxes.

use super::*;
use crate::common::*;

/// A 2-D axis aligned bounding box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds2f {
    /// Minimum bounds (top-left corner).
    pub p_min: Point2f,

    /// Maximum bounds (bottom-right corner).
    pub p_max: Point2f,
}

impl Bounds2f {
    /// Creates a new 2-D bounding box from 2 points. The minimum and maximum
    /// bounds are used for each coordinate axis.
    ///
    /// * `p1` - First point.
    /// * `p2` - Second point.
    pub fn new(p1: Point2f, p2: Point2f) -> Self {
        Self {
            p_min: Point2f::new(min(p1.x, p2.x), min(p1.y, p2.y)),
            p_max: Point2f::new(max(p1.x, p2.x), max(p1.y, p2.y)),
        }
    }

    /// Returns the width of the box.
    pub fn width(&self) -> Float {
        self.p_max.x - self.p_min.x
    }

    /// Returns the height of the box.
    pub fn height(&self) -> Float {
        self.p_max.y - self.p_min.y
    }

    /// Linearly interpolates between the corners of the box by the given
    /// amount in each dimension.
    ///
    /// * `t` - Interpolation parameter in x and y directions.
    pub fn lerp(&self, t: &Point2f) -> Point2f {
        Point2f::new(
            self.p_min.x + t.x * self.width(),
            self.p_min.y + t.y * self.height(),
        )
    }
}
