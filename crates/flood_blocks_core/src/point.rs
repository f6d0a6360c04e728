use core::ops::{Add, Sub};
use serde::{Deserialize, Serialize};

/// An N-dimensional point, which is usually just a primitive array of type `D`. Voxel worlds only need `N = 3`, and it's most
/// convenient to construct them as:
///
/// ```
/// use flood_blocks_core::PointN;
///
/// let p = PointN([1, 2, 3]);
/// ```
///
/// Points support addition and subtraction, which is how neighbor offsets are applied.
///
/// ```
/// use flood_blocks_core::PointN;
///
/// let p1 = PointN([1, 2, 3]);
/// let p2 = PointN([3, 4, 5]);
///
/// assert_eq!(p1 + p2, PointN([4, 6, 8]));
/// assert_eq!(p1 - p2, PointN([-2, -2, -2]));
/// ```
///
/// There is also a partial order defined on points which says that a point A is greater than a point B if and only if all of
/// the components of point A are greater than point B. This is useful for easily checking if a point is inside of the extent
/// between two other points:
///
/// ```
/// use flood_blocks_core::PointN;
///
/// let min = PointN([0, 0, 0]);
/// let least_upper_bound = PointN([3, 3, 3]);
///
/// let p = PointN([0, 1, 2]);
/// assert!(min <= p && p < least_upper_bound);
///
/// let outside = PointN([-1, 1, 2]);
/// assert!(!(min <= outside && outside < least_upper_bound));
/// ```
#[derive(Copy, Clone, Debug, Deserialize, Default, Eq, Hash, PartialEq, Serialize)]
pub struct PointN<N>(pub N);

/// A trait that bundles op traits that all `PointN<N>` (and its components) should have.
pub trait Point:
    Add<Output = Self>
    + Copy
    + Ones
    + PartialOrd
    + Sized
    + SmallZero
    + Sub<Output = Self>
{
    type Scalar: Copy;

    /// Returns the component specified by index. I.e. X = 0, Y = 1, Z = 2.
    fn at(&self, component_index: usize) -> Self::Scalar;

    /// Returns the point after applying `f` component-wise.
    fn map_components(&self, f: impl Fn(Self::Scalar) -> Self::Scalar) -> Self;
}

pub trait Ones: Copy {
    /// A point of all ones.
    const ONES: Self;
}

pub trait Distance: Point {
    /// The square of the L2 (Euclidean) distance between points.
    fn l2_distance_squared(&self, other: &Self) -> Self::Scalar;
}

pub trait IntegerPoint: Point {
    /// Component-wise maximum.
    fn join(&self, other: &Self) -> Self;

    /// Component-wise minimum.
    fn meet(&self, other: &Self) -> Self;
}

// `Zero` trait doesn't allow associated constants for zero because of bignums.
pub trait SmallZero: Copy {
    const ZERO: Self;
}

// `One` trait doesn't allow associated constants for one because of bignums.
pub trait SmallOne: Copy {
    const ONE: Self;
}

impl SmallZero for i32 {
    const ZERO: i32 = 0;
}
impl SmallOne for i32 {
    const ONE: i32 = 1;
}

impl<N> PointN<N>
where
    Self: Point,
{
    /// A point with every component set to `value`.
    #[inline]
    pub fn fill(value: <Self as Point>::Scalar) -> Self {
        Self::ONES.map_components(|_| value)
    }
}
