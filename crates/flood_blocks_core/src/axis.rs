use crate::{Point, Point3i, PointN};

/// Either the X, Y, or Z axis.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis3 {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis3 {
    pub fn get_unit_vector(&self) -> Point3i {
        match self {
            Axis3::X => PointN([1, 0, 0]),
            Axis3::Y => PointN([0, 1, 0]),
            Axis3::Z => PointN([0, 0, 1]),
        }
    }
}

/// One of the six axis-aligned directions of a voxel lattice.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SignedAxis3 {
    pub sign: i32,
    pub axis: Axis3,
}

impl SignedAxis3 {
    pub const POS_X: Self = Self::new(1, Axis3::X);
    pub const NEG_X: Self = Self::new(-1, Axis3::X);
    pub const POS_Y: Self = Self::new(1, Axis3::Y);
    pub const NEG_Y: Self = Self::new(-1, Axis3::Y);
    pub const POS_Z: Self = Self::new(1, Axis3::Z);
    pub const NEG_Z: Self = Self::new(-1, Axis3::Z);

    pub const fn new(sign: i32, axis: Axis3) -> Self {
        Self { sign, axis }
    }

    pub fn get_vector(&self) -> Point3i {
        let sign = self.sign;

        self.axis.get_unit_vector().map_components(|c| c * sign)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
