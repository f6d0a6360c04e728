//! Traits defining how algorithms read and write the materials of a bounded voxel world.
//!
//! Reads are bounds-aware: asking for a point outside of the world yields `None`, never a panic, so a search can compute
//! neighbors blindly and let the world reject the ones that fall off the edge.
//!
//! ```
//! use flood_blocks_core::prelude::*;
//! use flood_blocks_storage::prelude::*;
//!
//! let world = BlockArray::fill(PointN([4, 4, 4]), Material::new(BlockType::STONE));
//!
//! assert_eq!(world.material(PointN([1, 2, 3])), Some(Material::new(BlockType::STONE)));
//! assert_eq!(world.material(PointN([4, 0, 0])), None);
//! ```

use crate::{BlockType, Material, VoxelIndex, WorldIndexer};

use auto_impl::auto_impl;
use flood_blocks_core::prelude::*;

/// Read access to the materials of a world.
#[auto_impl(&, &mut)]
pub trait ReadMaterial {
    /// The address space of the world.
    fn indexer(&self) -> WorldIndexer;

    /// The primary type at `p`, or `None` if `p` is out of bounds.
    fn block_type(&self, p: Point3i) -> Option<BlockType>;

    /// The secondary value stored at `p`. Only meaningful when the primary type at `p` is `BlockType::EXTENDED`.
    fn ext_value(&self, p: Point3i) -> u8;

    /// The material identity at `p`, or `None` if `p` is out of bounds.
    #[inline]
    fn material(&self, p: Point3i) -> Option<Material> {
        let block = self.block_type(p)?;
        let ext = if block.is_extended() {
            self.ext_value(p)
        } else {
            0
        };

        Some(Material::from_raw(block, ext))
    }
}

/// Write access to the materials of a world.
#[auto_impl(&mut)]
pub trait WriteMaterial: ReadMaterial {
    /// Overwrites the material at `index`, which must be in bounds.
    fn set_material(&mut self, index: VoxelIndex, material: Material);
}
