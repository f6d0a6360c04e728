//! Connected-region flood fill over bounded 3D voxel worlds.
//!
//! This library is organized into several crates:
//! - **core**: lattice point, extent, and axis types
//! - **storage**: voxel addressing, material identity, world access traits, and the sparse visited set
//! - **search**: the fill modes, the depth-bounded traversal, and the fill orchestrator with its collaborator traits
//!
//! A fill starts from a seed voxel and discovers every voxel reachable from it (under the adjacency allowed by a
//! [`FillMode`](crate::search::FillMode)) that shares the seed's material. The discovered voxels are then handed to a draw
//! executor together with a brush.
//!
//! ```
//! use flood_blocks::prelude::*;
//!
//! let mut world = BlockArray::fill(Point3i::fill(8), Material::new(BlockType::AIR));
//! for x in 0..8 {
//!     for z in 0..8 {
//!         world.set(PointN([x, 0, z]), Material::new(BlockType::STONE));
//!     }
//! }
//!
//! let outcome = run_fill(
//!     &mut world,
//!     PointN([3, 0, 3]),
//!     &Material::new(BlockType::DIRT),
//!     FillMode::Layer,
//!     &BlockPermissions::allow_all(),
//!     &SolidBrushResolver,
//!     &mut BufferedDrawOp::default(),
//!     &FillConfig::default(),
//! )
//! .unwrap();
//!
//! match outcome {
//!     FillOutcome::Filled(report) => assert_eq!(report.num_voxels, 64),
//!     FillOutcome::Rejected(reason) => panic!("{}", reason),
//! }
//! assert_eq!(world.material(PointN([0, 0, 0])), Some(Material::new(BlockType::DIRT)));
//! ```

pub use flood_blocks_core as core;
pub use flood_blocks_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;

    #[cfg(feature = "search")]
    pub use super::search::prelude::*;
}

#[cfg(feature = "search")]
pub use flood_blocks_search as search;
