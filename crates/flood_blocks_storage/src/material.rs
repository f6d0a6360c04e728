//! Material identity of a voxel.
//!
//! Every voxel has a primary `BlockType`. One reserved type, `BlockType::EXTENDED`, stands for a whole family of custom
//! blocks; which member of the family a voxel holds is stored as a secondary `ext` value. The secondary value only
//! participates in equality for the extended type, so two stone voxels are the same material no matter what stale `ext` byte
//! the world may hold for them.
//!
//! ```
//! use flood_blocks_storage::prelude::*;
//!
//! assert_eq!(Material::from_raw(BlockType::STONE, 5), Material::from_raw(BlockType::STONE, 7));
//! assert_ne!(Material::extended(5), Material::extended(7));
//! ```

use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The primary type code of a voxel.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct BlockType(pub u8);

impl BlockType {
    pub const AIR: Self = BlockType(0);
    pub const STONE: Self = BlockType(1);
    pub const GRASS: Self = BlockType(2);
    pub const DIRT: Self = BlockType(3);
    pub const COBBLESTONE: Self = BlockType(4);
    pub const WOOD: Self = BlockType(5);
    pub const WATER: Self = BlockType(8);
    pub const STILL_WATER: Self = BlockType(9);
    pub const LAVA: Self = BlockType(10);
    pub const STILL_LAVA: Self = BlockType(11);
    pub const SAND: Self = BlockType(12);
    pub const GRAVEL: Self = BlockType(13);
    pub const GLASS: Self = BlockType(20);

    /// The reserved type whose voxels carry a meaningful secondary value.
    pub const EXTENDED: Self = BlockType(163);

    #[inline]
    pub fn is_extended(&self) -> bool {
        *self == Self::EXTENDED
    }

    /// Flowing or still water and lava.
    #[inline]
    pub fn is_liquid(&self) -> bool {
        matches!(
            *self,
            Self::WATER | Self::STILL_WATER | Self::LAVA | Self::STILL_LAVA
        )
    }

    fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::AIR => "air",
            Self::STONE => "stone",
            Self::GRASS => "grass",
            Self::DIRT => "dirt",
            Self::COBBLESTONE => "cobblestone",
            Self::WOOD => "wood",
            Self::WATER => "water",
            Self::STILL_WATER => "still_water",
            Self::LAVA => "lava",
            Self::STILL_LAVA => "still_lava",
            Self::SAND => "sand",
            Self::GRAVEL => "gravel",
            Self::GLASS => "glass",
            Self::EXTENDED => "extended",
            _ => return None,
        };

        Some(name)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "block #{}", self.0),
        }
    }
}

/// The material identity of a voxel: a primary type, plus a secondary value that only matters for `BlockType::EXTENDED`.
///
/// `PartialEq` and `Hash` ignore `ext` unless the block is extended. This is the only notion of "same material" used for fill
/// connectivity and for rejecting no-op fills.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub struct Material {
    block: BlockType,
    ext: u8,
}

impl Material {
    /// A material with no secondary value.
    #[inline]
    pub const fn new(block: BlockType) -> Self {
        Self { block, ext: 0 }
    }

    /// The extended block with secondary value `ext`.
    #[inline]
    pub const fn extended(ext: u8) -> Self {
        Self {
            block: BlockType::EXTENDED,
            ext,
        }
    }

    /// Pairs a primary type with whatever secondary value storage holds for the voxel, meaningful or not.
    #[inline]
    pub const fn from_raw(block: BlockType, ext: u8) -> Self {
        Self { block, ext }
    }

    #[inline]
    pub fn block(&self) -> BlockType {
        self.block
    }

    /// The secondary value, or `None` for non-extended blocks.
    #[inline]
    pub fn ext(&self) -> Option<u8> {
        if self.block.is_extended() {
            Some(self.ext)
        } else {
            None
        }
    }
}

impl PartialEq for Material {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.block == other.block && (!self.block.is_extended() || self.ext == other.ext)
    }
}

impl Eq for Material {}

impl Hash for Material {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.block.hash(state);
        self.ext().hash(state);
    }
}

impl From<BlockType> for Material {
    #[inline]
    fn from(block: BlockType) -> Self {
        Self::new(block)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ext() {
            Some(ext) => write!(f, "{}:{}", self.block, ext),
            None => write!(f, "{}", self.block),
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
