//! A dense, in-memory voxel world.
//!
//! `BlockArray` stores one `BlockType` per voxel in a flat `Vec`, laid out by its `WorldIndexer`. The secondary values of
//! extended blocks are rare, so they live in a sparse map instead of a second dense array.
//!
//! ```
//! use flood_blocks_core::prelude::*;
//! use flood_blocks_storage::prelude::*;
//!
//! let mut world = BlockArray::fill_with(PointN([8, 8, 8]), |p| {
//!     if p.y() == 0 {
//!         Material::new(BlockType::STONE)
//!     } else {
//!         Material::new(BlockType::AIR)
//!     }
//! });
//!
//! assert!(world.set(PointN([2, 1, 2]), Material::extended(5)));
//! assert_eq!(world.material(PointN([2, 1, 2])), Some(Material::extended(5)));
//!
//! // Writes outside of the world are ignored.
//! assert!(!world.set(PointN([2, 8, 2]), Material::extended(5)));
//! ```

use crate::{BlockType, Material, ReadMaterial, SmallKeyHashMap, VoxelIndex, WorldIndexer, WriteMaterial};

use flood_blocks_core::prelude::*;

#[derive(Clone, Debug)]
pub struct BlockArray {
    indexer: WorldIndexer,
    blocks: Vec<BlockType>,
    ext: SmallKeyHashMap<VoxelIndex, u8>,
}

impl BlockArray {
    /// Creates a world of the given `shape` where every voxel is `value`.
    pub fn fill(shape: Point3i, value: Material) -> Self {
        let indexer = WorldIndexer::new(shape);
        let mut array = Self {
            indexer,
            blocks: vec![value.block(); indexer.volume()],
            ext: SmallKeyHashMap::default(),
        };
        if let Some(ext) = value.ext() {
            array.ext.reserve(indexer.volume());
            for i in 0..indexer.volume() {
                array.ext.insert(VoxelIndex(i), ext);
            }
        }

        array
    }

    /// Creates a world of the given `shape` where the voxel at `p` is `filler(p)`.
    pub fn fill_with(shape: Point3i, mut filler: impl FnMut(Point3i) -> Material) -> Self {
        let mut array = Self::fill(shape, Material::default());
        for p in array.indexer.extent().iter_points() {
            let index = array.indexer.index_from_point_unchecked(p);
            array.set_material(index, filler(p));
        }

        array
    }

    #[inline]
    pub fn extent(&self) -> Extent3i {
        self.indexer.extent()
    }

    /// Sets the material at `p`. Returns `false` and does nothing if `p` is out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point3i, material: Material) -> bool {
        match self.indexer.index_from_point(p) {
            Some(index) => {
                self.set_material(index, material);
                true
            }
            None => false,
        }
    }

    /// The material at `index`, which must be in bounds.
    #[inline]
    pub fn material_at(&self, index: VoxelIndex) -> Material {
        let block = self.blocks[index.0];
        let ext = if block.is_extended() {
            self.ext.get(&index).copied().unwrap_or(0)
        } else {
            0
        };

        Material::from_raw(block, ext)
    }

    /// Counts the voxels whose material equals `material`.
    pub fn count(&self, material: Material) -> usize {
        (0..self.blocks.len())
            .filter(|i| self.material_at(VoxelIndex(*i)) == material)
            .count()
    }

    /// Calls `f` on every voxel of the world, in index order.
    pub fn for_each(&self, mut f: impl FnMut(Point3i, Material)) {
        for i in 0..self.blocks.len() {
            let index = VoxelIndex(i);
            f(self.indexer.point_from_index(index), self.material_at(index));
        }
    }
}

impl ReadMaterial for BlockArray {
    #[inline]
    fn indexer(&self) -> WorldIndexer {
        self.indexer
    }

    #[inline]
    fn block_type(&self, p: Point3i) -> Option<BlockType> {
        self.indexer
            .index_from_point(p)
            .map(|index| self.blocks[index.0])
    }

    #[inline]
    fn ext_value(&self, p: Point3i) -> u8 {
        self.indexer
            .index_from_point(p)
            .and_then(|index| self.ext.get(&index).copied())
            .unwrap_or(0)
    }
}

impl WriteMaterial for BlockArray {
    #[inline]
    fn set_material(&mut self, index: VoxelIndex, material: Material) {
        self.blocks[index.0] = material.block();
        match material.ext() {
            Some(ext) => {
                self.ext.insert(index, ext);
            }
            None => {
                self.ext.remove(&index);
            }
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn overwriting_extended_block_drops_its_secondary_value() {
        let mut world = BlockArray::fill(PointN([2, 2, 2]), Material::new(BlockType::AIR));
        let p = PointN([1, 1, 1]);

        world.set(p, Material::extended(42));
        assert_eq!(world.ext_value(p), 42);

        world.set(p, Material::new(BlockType::SAND));
        assert_eq!(world.ext_value(p), 0);
        assert_eq!(world.material(p), Some(Material::new(BlockType::SAND)));
    }

    #[test]
    fn fill_with_extended_material() {
        let world = BlockArray::fill(PointN([3, 1, 3]), Material::extended(9));

        assert_eq!(world.count(Material::extended(9)), 9);
        assert_eq!(world.count(Material::extended(8)), 0);
    }

    #[test]
    fn reads_through_references() {
        fn material_at_origin(world: impl ReadMaterial) -> Option<Material> {
            world.material(Point3i::ZERO)
        }

        let mut world = BlockArray::fill(PointN([1, 1, 1]), Material::new(BlockType::GLASS));
        assert_eq!(material_at_origin(&world), Some(Material::new(BlockType::GLASS)));
        assert_eq!(material_at_origin(&mut world), Some(Material::new(BlockType::GLASS)));
    }

    #[test]
    fn for_each_visits_in_index_order() {
        let world = BlockArray::fill_with(PointN([2, 2, 1]), |p| {
            Material::new(BlockType((p.x() + 2 * p.y()) as u8))
        });

        let mut visited = Vec::new();
        world.for_each(|p, m| visited.push((p, m.block())));

        assert_eq!(
            visited,
            vec![
                (PointN([0, 0, 0]), BlockType(0)),
                (PointN([1, 0, 0]), BlockType(1)),
                (PointN([0, 1, 0]), BlockType(2)),
                (PointN([1, 1, 0]), BlockType(3)),
            ]
        );
    }
}
