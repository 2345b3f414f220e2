use std::ops::Index;

use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns all axes in scan order; split axis ties go to whichever comes
    /// first here.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::X, Self::Y, Self::Z].into_iter()
    }

    /// Returns the axis along which `extent` is the largest, preferring the
    /// earlier axis on ties.
    pub fn longest(extent: DVec3) -> Self {
        let mut best = Self::X;

        for axis in Self::all().skip(1) {
            if extent[axis] > extent[best] {
                best = axis;
            }
        }

        best
    }
}

impl Index<Axis> for DVec3 {
    type Output = f64;

    fn index(&self, index: Axis) -> &Self::Output {
        match index {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
