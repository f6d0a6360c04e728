use crate::{FillConfig, FillMode};

use flood_blocks_core::prelude::*;
use flood_blocks_storage::prelude::*;

use thiserror::Error;

/// The accumulated state of one fill: the visited set, the voxels discovered so far (in discovery order), and the branches
/// that were cut off by the depth bound and still need to be resumed.
///
/// A `FloodFill` is owned by a single fill invocation. The visited set and the result are always updated together, so an
/// index is in `result()` iff it is in `visited()`.
///
/// Exploration is depth-first from each seed handed to `explore`. A branch that gets deeper than `max_depth` is not
/// followed; its next voxel is pushed on the continuation queue *without* being marked visited, to be explored from depth 0
/// by a later pass. The bound only changes how many passes it takes to cover a component, never which voxels end up in it.
pub struct FloodFill {
    reference: Material,
    mode: FillMode,
    max_depth: usize,
    voxel_limit: Option<usize>,
    visited: SparseBitset,
    result: Vec<VoxelIndex>,
    continuation: Vec<VoxelIndex>,
    stack: Vec<Frame>,
    passes: usize,
}

#[derive(Clone, Copy)]
struct Frame {
    point: Point3i,
    depth: usize,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("fill would cover more than {limit} voxels")]
pub struct VoxelLimitExceeded {
    pub limit: usize,
}

impl FloodFill {
    /// Starts a fill that collects voxels whose material equals `reference`.
    pub fn new(reference: Material, mode: FillMode, config: &FillConfig) -> Self {
        Self {
            reference,
            mode,
            max_depth: config.max_depth,
            voxel_limit: config.voxel_limit,
            visited: SparseBitset::default(),
            result: Vec::new(),
            continuation: Vec::new(),
            stack: Vec::new(),
            passes: 0,
        }
    }

    /// Every voxel index discovered so far.
    #[inline]
    pub fn visited(&self) -> &SparseBitset {
        &self.visited
    }

    /// The discovered voxel indices, in discovery order.
    #[inline]
    pub fn result(&self) -> &[VoxelIndex] {
        &self.result
    }

    /// Indices where a pass stopped because of the depth bound. These are not visited yet, and may contain duplicates.
    #[inline]
    pub fn continuation(&self) -> &[VoxelIndex] {
        &self.continuation
    }

    /// The number of calls to `explore` so far.
    #[inline]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Runs one pass of the traversal from `seed`, which is treated as being at `depth`.
    ///
    /// The seed itself is only checked for being unvisited, not for matching the reference material. Every neighbor is
    /// checked for both, in the mode's direction order, and neighbors outside of the world never match.
    ///
    /// Returns an error as soon as the result would exceed the configured voxel limit. The partial result is left in place.
    pub fn explore(
        &mut self,
        world: &impl ReadMaterial,
        seed: Point3i,
        depth: usize,
    ) -> Result<(), VoxelLimitExceeded> {
        let indexer = world.indexer();
        let directions = self.mode.directions();

        self.passes += 1;
        self.stack.clear();
        self.stack.push(Frame { point: seed, depth });

        while let Some(Frame { point, depth }) = self.stack.pop() {
            let index = match indexer.index_from_point(point) {
                Some(index) => index,
                None => continue,
            };
            if self.visited.get(index) {
                continue;
            }
            if depth > self.max_depth {
                self.continuation.push(index);
                continue;
            }
            if let Some(limit) = self.voxel_limit {
                if self.result.len() >= limit {
                    self.stack.clear();
                    return Err(VoxelLimitExceeded { limit });
                }
            }

            self.visited.insert(index);
            self.result.push(index);

            // Reversed so the first direction is popped first, exactly as a recursive implementation would descend.
            for dir in directions.iter().rev() {
                let neighbor = point + dir.get_vector();
                if world.material(neighbor) == Some(self.reference) {
                    self.stack.push(Frame {
                        point: neighbor,
                        depth: depth + 1,
                    });
                }
            }
        }

        Ok(())
    }

    /// Finishes the fill, giving up the accumulated state.
    pub fn into_component(self) -> Component {
        Component {
            reference: self.reference,
            mode: self.mode,
            positions: self.result,
            visited: self.visited,
            passes: self.passes,
        }
    }
}

/// A completed fill: the connected component of the seed.
#[derive(Clone, Debug)]
pub struct Component {
    pub reference: Material,
    pub mode: FillMode,
    /// The voxels of the component, in discovery order. Each appears exactly once.
    pub positions: Vec<VoxelIndex>,
    /// Exactly the members of `positions`.
    pub visited: SparseBitset,
    /// How many traversal passes it took to cover the component.
    pub passes: usize,
}

impl Component {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The coordinates of the component, in discovery order.
    pub fn points<'a>(&'a self, indexer: &'a WorldIndexer) -> impl Iterator<Item = Point3i> + 'a {
        self.positions.iter().map(move |i| indexer.point_from_index(*i))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
