use glam::Vec2;

/// Axis-aligned box in 2D pixel space.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
/// The constructor enforces this by swapping components if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Box2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for Box2 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Box2 {
    /// The degenerate box at the origin.
    pub const ZERO: Box2 = Box2 {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Create a box from two corners. Automatically sorts
    /// components so that min <= max on every axis.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a box from its top-left corner and size.
    pub fn from_top_left_size(top_left: Vec2, size: Vec2) -> Self {
        Self::new(top_left, top_left + size)
    }

    /// Create a box from a center point and half-extents.
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self::new(center - half, center + half)
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns the smallest box enclosing both self and other.
    pub fn union(&self, other: &Box2) -> Box2 {
        Box2 {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns the smallest box enclosing self and `p`.
    pub fn include_point(&self, p: Vec2) -> Box2 {
        Box2 {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Returns the center point of the box.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns a new box expanded outward by `margin` on each axis
    /// (both sides of the axis grow by the same amount).
    pub fn expand_by(&self, margin: Vec2) -> Box2 {
        Box2::new(self.min - margin, self.max + margin)
    }

    /// Returns the size along each axis.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Returns true if the box has zero area
    /// (degenerate on at least one axis).
    pub fn is_degenerate(&self) -> bool {
        self.min.x == self.max.x || self.min.y == self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_auto_sorts() {
        let b = Box2::new(Vec2::new(10.0, 10.0), Vec2::new(0.0, 0.0));
        assert_eq!(b.min, Vec2::ZERO);
        assert_eq!(b.max, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_contains_point_on_edge() {
        let b = Box2::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(b.contains_point(Vec2::ZERO));
        assert!(b.contains_point(Vec2::new(10.0, 5.0)));
        assert!(!b.contains_point(Vec2::new(10.5, 5.0)));
    }

    #[test]
    fn test_union_encloses_both() {
        let a = Box2::new(Vec2::ZERO, Vec2::new(5.0, 5.0));
        let b = Box2::new(Vec2::new(3.0, -2.0), Vec2::new(10.0, 4.0));
        let u = a.union(&b);
        assert_eq!(u.min, Vec2::new(0.0, -2.0));
        assert_eq!(u.max, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_include_point_grows_box() {
        let b = Box2::ZERO.include_point(Vec2::new(-3.0, 4.0));
        assert_eq!(b.min, Vec2::new(-3.0, 0.0));
        assert_eq!(b.max, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_center_and_size() {
        let b = Box2::from_top_left_size(Vec2::new(-10.0, 20.0), Vec2::new(40.0, 10.0));
        assert_eq!(b.center(), Vec2::new(10.0, 25.0));
        assert_eq!(b.size(), Vec2::new(40.0, 10.0));
    }

    #[test]
    fn test_expand_by_pads_both_sides() {
        let b = Box2::new(Vec2::ZERO, Vec2::new(100.0, 50.0)).expand_by(Vec2::new(400.0, 300.0));
        assert_eq!(b.min, Vec2::new(-400.0, -300.0));
        assert_eq!(b.max, Vec2::new(500.0, 350.0));
    }

    #[test]
    fn test_from_center_half_extents() {
        let b = Box2::from_center_half_extents(Vec2::new(10.0, 10.0), Vec2::new(5.0, 2.0));
        assert_eq!(b.min, Vec2::new(5.0, 8.0));
        assert_eq!(b.max, Vec2::new(15.0, 12.0));
    }

    #[test]
    fn test_is_degenerate() {
        assert!(Box2::ZERO.is_degenerate());
        assert!(Box2::new(Vec2::new(5.0, 0.0), Vec2::new(5.0, 10.0)).is_degenerate());
        assert!(!Box2::new(Vec2::ZERO, Vec2::ONE).is_degenerate());
    }
}
