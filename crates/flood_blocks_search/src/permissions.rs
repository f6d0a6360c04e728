use auto_impl::auto_impl;
use flood_blocks_storage::prelude::*;

/// The predicates a fill asks before it is allowed to replace voxels of some type.
#[auto_impl(&, &mut, Box)]
pub trait Permissions {
    /// May the caller place or delete blocks of this type?
    fn can_place(&self, block: BlockType) -> bool;

    /// Can blocks be put inside of this type without removing it first? (Liquids, usually.)
    fn can_build_in(&self, block: BlockType) -> bool;

    /// A type is fillable if either predicate holds.
    #[inline]
    fn can_fill(&self, block: BlockType) -> bool {
        self.can_place(block) || self.can_build_in(block)
    }
}

const NUM_BLOCK_TYPES: usize = 256;

/// A `Permissions` implementation backed by a pair of lookup tables, one entry per `BlockType`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockPermissions {
    place: [bool; NUM_BLOCK_TYPES],
    build_in: [bool; NUM_BLOCK_TYPES],
}

impl BlockPermissions {
    pub fn allow_all() -> Self {
        Self {
            place: [true; NUM_BLOCK_TYPES],
            build_in: liquid_table(),
        }
    }

    pub fn deny_all() -> Self {
        Self {
            place: [false; NUM_BLOCK_TYPES],
            build_in: liquid_table(),
        }
    }

    pub fn allow(mut self, block: BlockType) -> Self {
        self.place[block.0 as usize] = true;

        self
    }

    pub fn deny(mut self, block: BlockType) -> Self {
        self.place[block.0 as usize] = false;

        self
    }

    pub fn set_build_in(&mut self, block: BlockType, value: bool) {
        self.build_in[block.0 as usize] = value;
    }
}

impl Default for BlockPermissions {
    fn default() -> Self {
        Self::allow_all()
    }
}

impl Permissions for BlockPermissions {
    #[inline]
    fn can_place(&self, block: BlockType) -> bool {
        self.place[block.0 as usize]
    }

    #[inline]
    fn can_build_in(&self, block: BlockType) -> bool {
        self.build_in[block.0 as usize]
    }
}

fn liquid_table() -> [bool; NUM_BLOCK_TYPES] {
    let mut table = [false; NUM_BLOCK_TYPES];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = BlockType(i as u8).is_liquid();
    }

    table
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
