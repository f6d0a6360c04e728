//! The address space of a bounded voxel world: a bijection between in-bounds `Point3i` coordinates and linear `VoxelIndex`
//! values.
//!
//! The layout puts `X` fastest, then `Z`, then `Y`, so that every horizontal layer of the world is one contiguous range of
//! indices:
//!
//! ```text
//! index = x + W * (z + L * y)
//! ```
//!
//! ```
//! use flood_blocks_core::prelude::*;
//! use flood_blocks_storage::prelude::*;
//!
//! let indexer = WorldIndexer::new(PointN([4, 3, 2]));
//!
//! let p = PointN([1, 2, 1]);
//! let index = indexer.index_from_point(p).unwrap();
//! assert_eq!(index, VoxelIndex(1 + 4 * (1 + 2 * 2)));
//! assert_eq!(indexer.point_from_index(index), p);
//!
//! // Out-of-bounds points have no index.
//! assert_eq!(indexer.index_from_point(PointN([-1, 0, 0])), None);
//! ```

use flood_blocks_core::prelude::*;

use serde::{Deserialize, Serialize};

/// A linear offset into the voxels of a world.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct VoxelIndex(pub usize);

/// Converts between coordinates and indices for a world of a fixed shape `(W, H, L)`. The world always has its minimum at
/// the origin.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WorldIndexer {
    shape: Point3i,
}

impl WorldIndexer {
    /// # Panics
    /// If any dimension of `shape` is not positive.
    #[inline]
    pub fn new(shape: Point3i) -> Self {
        assert!(
            shape > Point3i::ZERO,
            "world dimensions must be positive, got {}",
            shape
        );

        Self { shape }
    }

    /// The world dimensions `(W, H, L)`.
    #[inline]
    pub fn shape(&self) -> Point3i {
        self.shape
    }

    /// The extent covered by the world.
    #[inline]
    pub fn extent(&self) -> Extent3i {
        Extent3i::from_min_and_shape(Point3i::ZERO, self.shape)
    }

    /// The number of voxels in the world.
    #[inline]
    pub fn volume(&self) -> usize {
        // Each dimension fits in an i32, but their product may not.
        self.shape.x() as usize * self.shape.y() as usize * self.shape.z() as usize
    }

    #[inline]
    pub fn contains(&self, p: Point3i) -> bool {
        Point3i::ZERO <= p && p < self.shape
    }

    #[inline]
    pub fn contains_index(&self, index: VoxelIndex) -> bool {
        index.0 < self.volume()
    }

    /// Returns the index of `p`, or `None` if `p` is outside of the world.
    #[inline]
    pub fn index_from_point(&self, p: Point3i) -> Option<VoxelIndex> {
        if self.contains(p) {
            Some(self.index_from_point_unchecked(p))
        } else {
            None
        }
    }

    /// Same as `index_from_point`, but the caller must ensure `p` is in bounds.
    #[inline]
    pub fn index_from_point_unchecked(&self, p: Point3i) -> VoxelIndex {
        debug_assert!(self.contains(p));

        let w = self.shape.x() as usize;
        let l = self.shape.z() as usize;

        VoxelIndex(p.x() as usize + w * (p.z() as usize + l * p.y() as usize))
    }

    /// The inverse of `index_from_point`. The caller must ensure `index` is in bounds.
    #[inline]
    pub fn point_from_index(&self, index: VoxelIndex) -> Point3i {
        debug_assert!(self.contains_index(index));

        let w = self.shape.x() as usize;
        let l = self.shape.z() as usize;

        let x = index.0 % w;
        let zy = index.0 / w;
        let z = zy % l;
        let y = zy / l;

        PointN([x as i32, y as i32, z as i32])
    }

    /// Returns the point at `index`, or `None` if `index` is outside of the world.
    #[inline]
    pub fn checked_point_from_index(&self, index: VoxelIndex) -> Option<Point3i> {
        if self.contains_index(index) {
            Some(self.point_from_index(index))
        } else {
            None
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
