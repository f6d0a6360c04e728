//! Storage and addressing for bounded 3D voxel worlds.
//!
//! The pieces are:
//!   - `WorldIndexer`: the bijection between in-bounds `Point3i` coordinates and linear `VoxelIndex` values
//!   - `Material` and `BlockType`: a voxel's material identity, with extended-type-aware equality
//!   - `ReadMaterial` and `WriteMaterial`: the traits algorithms use to access a world
//!   - `BlockArray`: a dense, in-memory world implementing both access traits
//!   - `SparseBitset`: a set of voxel indices that only allocates pages for the indices actually inserted

pub mod access_traits;
pub mod array;
pub mod bitset;
pub mod indexer;
pub mod material;

pub use access_traits::*;
pub use array::*;
pub use bitset::*;
pub use indexer::*;
pub use material::*;

// Hash types to use for small keys like `VoxelIndex`.
pub type SmallKeyHashMap<K, V> = ahash::AHashMap<K, V>;

pub mod prelude {
    pub use super::{
        BlockArray, BlockType, Material, ReadMaterial, SmallKeyHashMap, SparseBitset, VoxelIndex,
        WorldIndexer, WriteMaterial,
    };
}
