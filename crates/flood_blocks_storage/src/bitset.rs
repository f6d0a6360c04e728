//! A sparse set of voxel indices.
//!
//! A fill only touches a small fraction of a large world, so the membership structure must not allocate a bit for every
//! voxel up front. `SparseBitset` splits the index space into fixed-size pages of 4096 bits and only allocates a page once
//! a bit inside of it is set. Lookups are a hash of the page number followed by a word and bit mask.
//!
//! ```
//! use flood_blocks_storage::prelude::*;
//!
//! let mut visited = SparseBitset::default();
//! assert!(!visited.get(VoxelIndex(1_000_000_000)));
//!
//! visited.set(VoxelIndex(1_000_000_000), true);
//! assert!(visited.get(VoxelIndex(1_000_000_000)));
//! assert_eq!(visited.num_pages(), 1);
//!
//! visited.clear();
//! assert!(visited.is_empty());
//! ```

use crate::{SmallKeyHashMap, VoxelIndex};

const PAGE_BITS_LOG2: usize = 12;
const PAGE_BITS: usize = 1 << PAGE_BITS_LOG2;
const PAGE_BITS_MASK: usize = PAGE_BITS - 1;
const WORDS_PER_PAGE: usize = PAGE_BITS / 64;

#[derive(Clone)]
struct BitPage {
    words: [u64; WORDS_PER_PAGE],
}

impl BitPage {
    fn empty() -> Box<Self> {
        Box::new(Self {
            words: [0; WORDS_PER_PAGE],
        })
    }

    #[inline]
    fn bit_is_set(&self, bit: usize) -> bool {
        self.words[bit >> 6] & (1 << (bit & 63)) != 0
    }

    /// Returns `true` iff the bit was not already set.
    #[inline]
    fn set_bit(&mut self, bit: usize) -> bool {
        let word = &mut self.words[bit >> 6];
        let mask = 1 << (bit & 63);
        let was_unset = *word & mask == 0;
        *word |= mask;

        was_unset
    }

    /// Returns `true` iff the bit was set.
    #[inline]
    fn unset_bit(&mut self, bit: usize) -> bool {
        let word = &mut self.words[bit >> 6];
        let mask = 1 << (bit & 63);
        let was_set = *word & mask != 0;
        *word &= !mask;

        was_set
    }

    fn any(&self) -> bool {
        self.words.iter().any(|w| *w != 0)
    }
}

/// A set of `VoxelIndex` values whose memory is proportional to the number of 4096-index pages that contain a member, not to
/// the size of the index domain.
#[derive(Clone, Default)]
pub struct SparseBitset {
    pages: SmallKeyHashMap<usize, Box<BitPage>>,
    len: usize,
}

impl SparseBitset {
    #[inline]
    fn split(index: VoxelIndex) -> (usize, usize) {
        (index.0 >> PAGE_BITS_LOG2, index.0 & PAGE_BITS_MASK)
    }

    /// Returns `true` iff `index` is a member.
    #[inline]
    pub fn get(&self, index: VoxelIndex) -> bool {
        let (page, bit) = Self::split(index);

        self.pages
            .get(&page)
            .map(|p| p.bit_is_set(bit))
            .unwrap_or(false)
    }

    /// Sets the membership of `index` to `value`.
    #[inline]
    pub fn set(&mut self, index: VoxelIndex, value: bool) {
        if value {
            self.insert(index);
        } else {
            self.remove(index);
        }
    }

    /// Adds `index` to the set. Returns `true` iff it was not already a member.
    #[inline]
    pub fn insert(&mut self, index: VoxelIndex) -> bool {
        let (page, bit) = Self::split(index);
        let inserted = self
            .pages
            .entry(page)
            .or_insert_with(BitPage::empty)
            .set_bit(bit);
        if inserted {
            self.len += 1;
        }

        inserted
    }

    /// Removes `index` from the set. Returns `true` iff it was a member. Pages are released once they become empty.
    pub fn remove(&mut self, index: VoxelIndex) -> bool {
        let (page_key, bit) = Self::split(index);
        let (removed, now_empty) = match self.pages.get_mut(&page_key) {
            Some(page) => {
                let removed = page.unset_bit(bit);
                (removed, removed && !page.any())
            }
            None => (false, false),
        };
        if now_empty {
            self.pages.remove(&page_key);
        }
        if removed {
            self.len -= 1;
        }

        removed
    }

    /// Removes every member and releases all pages.
    pub fn clear(&mut self) {
        self.pages.clear();
        self.pages.shrink_to_fit();
        self.len = 0;
    }

    /// The number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of allocated pages.
    #[inline]
    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    /// Iterates over all members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VoxelIndex> + '_ {
        let mut page_keys: Vec<usize> = self.pages.keys().copied().collect();
        page_keys.sort_unstable();

        page_keys.into_iter().flat_map(move |key| {
            let page = &self.pages[&key];
            let base = key << PAGE_BITS_LOG2;

            (0..PAGE_BITS)
                .filter(move |bit| page.bit_is_set(*bit))
                .map(move |bit| VoxelIndex(base + bit))
        })
    }
}

impl std::fmt::Debug for SparseBitset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparseBitset")
            .field("len", &self.len)
            .field("num_pages", &self.pages.len())
            .finish()
    }
}

impl Extend<VoxelIndex> for SparseBitset {
    fn extend<I: IntoIterator<Item = VoxelIndex>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
