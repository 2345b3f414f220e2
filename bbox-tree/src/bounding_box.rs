use std::ops::{Add, AddAssign};

use glam::Vec3;

/// Axis-aligned bounding box.
///
/// The default box is empty (`min` at positive and `max` at negative infinity),
/// which makes it the identity for union - growing it by anything yields that
/// thing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_point(p: Vec3) -> Self {
        Self::new(p, p)
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn extent(&self) -> Vec3 {
        self.max() - self.min()
    }

    pub fn centroid(&self) -> Vec3 {
        0.5 * self.min() + 0.5 * self.max()
    }

    /// Returns whether this box contains at least one point.
    pub fn is_set(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        self.min.cmple(p).all() && p.cmple(self.max).all()
    }

    /// Returns whether `other` lies fully inside `self`; the empty box is
    /// contained in everything.
    pub fn contains_box(&self, other: &Self) -> bool {
        if !other.is_set() {
            return true;
        }

        self.contains_point(other.min) && self.contains_point(other.max)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY))
    }
}

impl Add<Vec3> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Vec3) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Vec3> for BoundingBox {
    fn add_assign(&mut self, rhs: Vec3) {
        self.min = self.min.min(rhs);
        self.max = self.max.max(rhs);
    }
}

impl FromIterator<Vec3> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Vec3>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

impl Add<Self> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Self> for BoundingBox {
    fn add_assign(&mut self, rhs: Self) {
        if rhs.is_set() {
            *self += rhs.min;
            *self += rhs.max;
        }
    }
}

impl FromIterator<Self> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Self>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    #[test]
    fn union() {
        let a = BoundingBox::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0));
        let b = BoundingBox::new(vec3(-1.0, 0.5, 2.0), vec3(0.5, 3.0, 4.0));

        assert_eq!(
            BoundingBox::new(vec3(-1.0, 0.0, 0.0), vec3(1.0, 3.0, 4.0)),
            a + b,
        );

        // ---
        // The empty box is the identity

        assert_eq!(a, a + BoundingBox::default());
        assert_eq!(a, BoundingBox::default() + a);
        assert!(!BoundingBox::default().is_set());

        // ---

        let points: BoundingBox =
            [vec3(1.0, 2.0, 3.0), vec3(-1.0, 5.0, 0.0)].into_iter().collect();

        assert_eq!(
            BoundingBox::new(vec3(-1.0, 2.0, 0.0), vec3(1.0, 5.0, 3.0)),
            points,
        );
    }

    #[test]
    fn containment() {
        let outer = BoundingBox::new(Vec3::ZERO, Vec3::splat(10.0));
        let inner = BoundingBox::new(Vec3::ONE, Vec3::splat(2.0));

        assert!(outer.contains_box(&inner));
        assert!(outer.contains_box(&outer));
        assert!(!inner.contains_box(&outer));
        assert!(inner.contains_box(&BoundingBox::default()));

        assert!(outer.contains_point(Vec3::splat(10.0)));
        assert!(!outer.contains_point(vec3(5.0, 5.0, 10.5)));
    }

    #[test]
    fn centroid() {
        let bb = BoundingBox::new(vec3(0.0, -2.0, 4.0), vec3(1.0, 2.0, 5.0));

        assert_eq!(vec3(0.5, 0.0, 4.5), bb.centroid());
        assert_eq!(vec3(1.0, 4.0, 1.0), bb.extent());

        // ---

        let bb = BoundingBox::new(vec3(0.1, 0.2, 0.3), vec3(0.7, 0.9, 1.1));
        let centroid = bb.centroid();

        assert_relative_eq!(0.4, centroid.x, epsilon = 1e-6);
        assert_relative_eq!(0.55, centroid.y, epsilon = 1e-6);
        assert_relative_eq!(0.7, centroid.z, epsilon = 1e-6);
        assert!(bb.contains_point(centroid));

        // ---

        let bb = BoundingBox::new(Vec3::splat(3.0e38), Vec3::splat(f32::MAX));

        assert!(bb.centroid().is_finite());
        assert!(bb.contains_point(bb.centroid()));
    }

    #[test]
    fn float_limits() {
        let edge = BoundingBox::from_point(vec3(f32::MAX, 0.0, 0.0));

        assert!(edge.is_set());

        let bb = edge + BoundingBox::from_point(Vec3::ZERO);

        assert_eq!(
            BoundingBox::new(Vec3::ZERO, vec3(f32::MAX, 0.0, 0.0)),
            bb,
        );

        assert!(bb.contains_box(&edge));

        let bb = BoundingBox::from_point(Vec3::MIN) + Vec3::MAX;

        assert_eq!(BoundingBox::new(Vec3::MIN, Vec3::MAX), bb);
        assert!(bb.is_set());

        // ---
        // A box inside-out on any axis is empty

        let inverted =
            BoundingBox::new(vec3(0.0, 1.0, 0.0), vec3(1.0, 0.0, 1.0));

        assert!(!inverted.is_set());
        assert_eq!(edge, edge + inverted);
    }
}
