//! Axis-aligned bounds of a turtle drawing and the square viewport derived from them.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Running bounding box of every position the turtle has moved to.
///
/// Starts collapsed onto the origin, since the turtle starts there, and only
/// ever grows.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: DVec2::ZERO,
            max: DVec2::ZERO,
        }
    }
}

impl Bounds {
    /// Creates a box from its lower-left and upper-right corners.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Widens the box so it contains `point`.
    pub fn include(&mut self, point: DVec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Extent along X.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Midpoint of the box.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// True if `point` lies inside the box or on its edge.
    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Returns the smallest square box sharing this box's center that encloses it.
    ///
    /// The shorter axis is expanded symmetrically until it matches the longer
    /// one, so a surface fitted to the result draws at equal x/y scale.
    pub fn square_viewport(&self) -> Bounds {
        let (width, height) = (self.width(), self.height());
        let center = self.center();

        if width > height {
            let half = width / 2.0;
            Bounds::new(
                DVec2::new(self.min.x, center.y - half),
                DVec2::new(self.max.x, center.y + half),
            )
        } else {
            let half = height / 2.0;
            Bounds::new(
                DVec2::new(center.x - half, self.min.y),
                DVec2::new(center.x + half, self.max.y),
            )
        }
    }
}
