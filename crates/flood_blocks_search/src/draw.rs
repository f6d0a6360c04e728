//! Brushes decide what gets written at each filled voxel, and draw executors commit those writes to a world.

use crate::FillMode;

use flood_blocks_core::prelude::*;
use flood_blocks_storage::prelude::*;

use thiserror::Error;

/// Yields the material to write at each position of a fill.
pub trait Brush {
    /// The material for `p`, or `None` to leave that voxel alone. `anchor` is the voxel the fill was started from.
    fn next_material(&mut self, p: Point3i, anchor: Point3i) -> Option<Material>;
}

/// Turns a caller's replacement spec into a brush.
pub trait BrushResolver<S: ?Sized> {
    type Brush: Brush;

    /// The material that the legality gate compares against the seed's material.
    fn replacement(&self, spec: &S) -> Material;

    /// Builds the brush for a fill in `mode`, or `None` if the spec can't be drawn.
    fn resolve(&self, spec: &S, mode: FillMode) -> Option<Self::Brush>;
}

/// Commits the output of a brush over a set of voxels.
pub trait DrawExecutor<W> {
    /// Writes `brush` over `positions`, returning the number of voxels that changed.
    fn apply<B: Brush>(
        &mut self,
        world: &mut W,
        positions: &[VoxelIndex],
        brush: &mut B,
        anchor: Point3i,
    ) -> Result<usize, DrawError>;
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DrawError {
    #[error("You tried to draw {attempted} blocks, you cannot draw more than {limit}.")]
    LimitExceeded { attempted: usize, limit: usize },
    #[error("voxel {0:?} is outside of the world")]
    OutOfBounds(VoxelIndex),
}

/// Writes the same material everywhere.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SolidBrush(pub Material);

impl Brush for SolidBrush {
    #[inline]
    fn next_material(&mut self, _p: Point3i, _anchor: Point3i) -> Option<Material> {
        Some(self.0)
    }
}

/// Resolves a plain `Material` into a `SolidBrush`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolidBrushResolver;

impl BrushResolver<Material> for SolidBrushResolver {
    type Brush = SolidBrush;

    #[inline]
    fn replacement(&self, spec: &Material) -> Material {
        *spec
    }

    #[inline]
    fn resolve(&self, spec: &Material, _mode: FillMode) -> Option<SolidBrush> {
        Some(SolidBrush(*spec))
    }
}

/// Alternates between two materials in a 3D checkerboard centered on the anchor. Restricted fill modes shift the pattern by
/// the mode's brush offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CheckeredBrush {
    pub even: Material,
    pub odd: Material,
    pub offset: i32,
}

impl Brush for CheckeredBrush {
    #[inline]
    fn next_material(&mut self, p: Point3i, anchor: Point3i) -> Option<Material> {
        let d = p - anchor;
        let parity = (d.x() + d.y() + d.z() + self.offset).rem_euclid(2);

        Some(if parity == 0 { self.even } else { self.odd })
    }
}

/// Resolves an `(even, odd)` pair of materials into a `CheckeredBrush`. Identical materials can't make a checkerboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckeredBrushResolver;

impl BrushResolver<(Material, Material)> for CheckeredBrushResolver {
    type Brush = CheckeredBrush;

    #[inline]
    fn replacement(&self, spec: &(Material, Material)) -> Material {
        spec.0
    }

    fn resolve(&self, spec: &(Material, Material), mode: FillMode) -> Option<CheckeredBrush> {
        let (even, odd) = *spec;
        if even == odd {
            return None;
        }

        Some(CheckeredBrush {
            even,
            odd,
            offset: mode.brush_offset(),
        })
    }
}

/// One voxel overwritten by a draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UndoEntry {
    pub index: VoxelIndex,
    pub old: Material,
    pub new: Material,
}

/// Every change made by one draw, in the order it was written.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UndoRecord {
    entries: Vec<UndoEntry>,
}

impl UndoRecord {
    #[inline]
    pub fn entries(&self) -> &[UndoEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Puts back the materials that the draw replaced.
    pub fn revert(&self, world: &mut impl WriteMaterial) {
        for entry in self.entries.iter().rev() {
            world.set_material(entry.index, entry.old);
        }
    }
}

/// An all-or-nothing executor. It computes every write before touching the world, so a draw that fails leaves the world
/// unchanged. Successful draws are kept as `UndoRecord`s.
#[derive(Clone, Debug, Default)]
pub struct BufferedDrawOp {
    limit: Option<usize>,
    history: Vec<UndoRecord>,
}

impl BufferedDrawOp {
    /// An executor that refuses to draw over more than `limit` voxels at once.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Completed draws, oldest first.
    #[inline]
    pub fn history(&self) -> &[UndoRecord] {
        &self.history
    }

    /// Reverts the most recent draw and returns how many voxels it restored.
    pub fn undo_last(&mut self, world: &mut impl WriteMaterial) -> Option<usize> {
        let record = self.history.pop()?;
        record.revert(world);

        Some(record.len())
    }
}

impl<W> DrawExecutor<W> for BufferedDrawOp
where
    W: WriteMaterial,
{
    fn apply<B: Brush>(
        &mut self,
        world: &mut W,
        positions: &[VoxelIndex],
        brush: &mut B,
        anchor: Point3i,
    ) -> Result<usize, DrawError> {
        if let Some(limit) = self.limit {
            if positions.len() > limit {
                return Err(DrawError::LimitExceeded {
                    attempted: positions.len(),
                    limit,
                });
            }
        }

        let indexer = world.indexer();
        let mut entries = Vec::with_capacity(positions.len());
        for &index in positions.iter() {
            let p = indexer
                .checked_point_from_index(index)
                .ok_or(DrawError::OutOfBounds(index))?;
            let old = world.material(p).ok_or(DrawError::OutOfBounds(index))?;
            if let Some(new) = brush.next_material(p, anchor) {
                if new != old {
                    entries.push(UndoEntry { index, old, new });
                }
            }
        }

        for entry in entries.iter() {
            world.set_material(entry.index, entry.new);
        }

        let num_changed = entries.len();
        self.history.push(UndoRecord { entries });

        Ok(num_changed)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
