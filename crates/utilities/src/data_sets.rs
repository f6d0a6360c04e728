use flood_blocks_core::prelude::*;
use flood_blocks_storage::prelude::*;

use rand::{rngs::StdRng, Rng, SeedableRng};

// TODO: it would be nice if all crates could share this module, but it causes this issue:
// https://github.com/rust-lang/cargo/issues/6765

/// A cubic world of `outer` with a ball of `inner` in the middle. Returns the world, the center of the ball, and its radius.
pub fn sphere_world(edge_length: i32, inner: Material, outer: Material) -> (BlockArray, Point3i, i32) {
    let center = Point3i::fill(edge_length / 2);
    let radius = edge_length / 2 - 1;

    let world = BlockArray::fill_with(Point3i::fill(edge_length), |p| {
        if p.l2_distance_squared(&center) < radius * radius {
            inner
        } else {
            outer
        }
    });

    (world, center, radius)
}

/// A world of `air` with a one-voxel-thick slab of `slab` at `y = 0`.
pub fn slab_world(shape: Point3i, slab: Material, air: Material) -> BlockArray {
    BlockArray::fill_with(shape, |p| if p.y() == 0 { slab } else { air })
}

/// A straight corridor of `length` voxels along X.
pub fn corridor_world(length: i32, material: Material) -> BlockArray {
    BlockArray::fill(PointN([length, 1, 1]), material)
}

/// A world where each voxel is independently `a` with probability `density`, otherwise `b`. The same `seed` always gives the
/// same world.
pub fn speckled_world(shape: Point3i, density: f64, seed: u64, a: Material, b: Material) -> BlockArray {
    let mut rng = StdRng::seed_from_u64(seed);

    BlockArray::fill_with(shape, |_| if rng.gen_bool(density) { a } else { b })
}
