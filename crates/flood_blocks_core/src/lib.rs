//! The core data types for addressing a bounded 3D voxel lattice:
//! - `PointN`: an N-dimensional point, most importantly `Point3i`
//! - `ExtentN`: an N-dimensional extent, most importantly `Extent3i`
//! - `Axis3` and `SignedAxis3`: the axes and the six face directions of a voxel

pub mod axis;
pub mod extent;
pub mod point;
pub mod point3;

pub use axis::{Axis3, SignedAxis3};
pub use extent::{bounding_extent, Extent3, Extent3PointIter, Extent3i, ExtentN};
pub use point::{Distance, IntegerPoint, Ones, Point, PointN, SmallZero};
pub use point3::{Point3, Point3i};

pub mod prelude {
    pub use super::{
        Axis3, Distance, Extent3, Extent3i, ExtentN, IntegerPoint, Ones, Point, Point3, Point3i,
        PointN, SignedAxis3, SmallZero,
    };
}
