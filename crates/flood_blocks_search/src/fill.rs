use crate::{
    Brush, BrushResolver, Component, DrawError, DrawExecutor, FillConfig, FillMode, FloodFill, Permissions,
    VoxelLimitExceeded,
};

use flood_blocks_core::{bounding_extent, prelude::*};
use flood_blocks_storage::prelude::*;

use thiserror::Error;

/// Why a fill was refused before any traversal happened.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Rejection {
    #[error("Cannot fill with the same type.")]
    SameType,
    #[error("Cannot fill with that.")]
    NotPermitted,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum FillError {
    #[error("seed {0} is outside of the world")]
    SeedOutOfBounds(Point3i),
    #[error("the replacement could not be turned into a brush")]
    NoBrush,
    #[error("fill would cover more than {limit} voxels")]
    TooManyVoxels { limit: usize },
    #[error(transparent)]
    Draw(#[from] DrawError),
}

impl From<VoxelLimitExceeded> for FillError {
    fn from(e: VoxelLimitExceeded) -> Self {
        FillError::TooManyVoxels { limit: e.limit }
    }
}

/// What a successful fill did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FillReport {
    /// Where the brush was anchored. This is the seed unless the fill was explicitly anchored elsewhere.
    pub anchor: Point3i,
    /// The size of the seed's connected component.
    pub num_voxels: usize,
    pub passes: usize,
    /// How many voxels the executor actually changed.
    pub num_changed: usize,
    /// The smallest extent containing the component.
    pub bounds: Option<Extent3i>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FillOutcome {
    Filled(FillReport),
    Rejected(Rejection),
}

impl FillOutcome {
    pub fn report(&self) -> Option<&FillReport> {
        match self {
            FillOutcome::Filled(report) => Some(report),
            FillOutcome::Rejected(_) => None,
        }
    }
}

/// Refuses a fill that would be a no-op or that replaces something the caller may not touch.
pub fn check_legality(
    reference: Material,
    replacement: Material,
    permissions: &impl Permissions,
) -> Result<(), Rejection> {
    if replacement == reference {
        return Err(Rejection::SameType);
    }
    if !permissions.can_fill(reference.block()) {
        return Err(Rejection::NotPermitted);
    }

    Ok(())
}

/// Finds the connected component of `seed`: every voxel reachable from it through the adjacency of `mode` that has the same
/// material as the seed.
///
/// The traversal is depth-first and bounded by `config.max_depth`. Truncated branches are resumed from the continuation
/// queue, in order, until the queue stops growing, so the returned set does not depend on the bound.
pub fn find_component(
    world: &impl ReadMaterial,
    seed: Point3i,
    mode: FillMode,
    config: &FillConfig,
) -> Result<Component, FillError> {
    let reference = world.material(seed).ok_or(FillError::SeedOutOfBounds(seed))?;

    collect_component(world, seed, reference, mode, config)
}

fn collect_component(
    world: &impl ReadMaterial,
    seed: Point3i,
    reference: Material,
    mode: FillMode,
    config: &FillConfig,
) -> Result<Component, FillError> {
    let indexer = world.indexer();
    let mut fill = FloodFill::new(reference, mode, config);

    fill.explore(world, seed, 0)?;

    // The queue can grow while we walk it.
    let mut cursor = 0;
    while cursor < fill.continuation().len() {
        let index = fill.continuation()[cursor];
        cursor += 1;
        fill.explore(world, indexer.point_from_index(index), 0)?;
    }

    Ok(fill.into_component())
}

/// Replaces the connected component of `seed` with the output of the brush that `resolver` makes from `spec`.
///
/// Legality rejections are returned as `Ok(FillOutcome::Rejected(_))` and cost no traversal. Every other failure is an
/// `Err`, and none of them leave a partial fill behind as long as `executor` is all-or-nothing.
pub fn run_fill<W, S, P, R, E>(
    world: &mut W,
    seed: Point3i,
    spec: &S,
    mode: FillMode,
    permissions: &P,
    resolver: &R,
    executor: &mut E,
    config: &FillConfig,
) -> Result<FillOutcome, FillError>
where
    W: WriteMaterial,
    S: ?Sized,
    P: Permissions,
    R: BrushResolver<S>,
    E: DrawExecutor<W>,
{
    run_fill_anchored(
        world,
        seed,
        seed,
        spec,
        mode,
        permissions,
        resolver,
        executor,
        config,
    )
}

/// Same as `run_fill`, but the brush pattern is anchored at `anchor` instead of at the seed.
pub fn run_fill_anchored<W, S, P, R, E>(
    world: &mut W,
    seed: Point3i,
    anchor: Point3i,
    spec: &S,
    mode: FillMode,
    permissions: &P,
    resolver: &R,
    executor: &mut E,
    config: &FillConfig,
) -> Result<FillOutcome, FillError>
where
    W: WriteMaterial,
    S: ?Sized,
    P: Permissions,
    R: BrushResolver<S>,
    E: DrawExecutor<W>,
{
    let span = tracing::info_span!("flood_fill", %seed, %anchor, %mode);
    let _trace_guard = span.enter();

    let reference = world.material(seed).ok_or(FillError::SeedOutOfBounds(seed))?;
    let replacement = resolver.replacement(spec);

    if let Err(rejection) = check_legality(reference, replacement, permissions) {
        tracing::debug!(%reference, %replacement, "rejected: {}", rejection);
        return Ok(FillOutcome::Rejected(rejection));
    }

    let mut brush = resolver.resolve(spec, mode).ok_or(FillError::NoBrush)?;

    let component = collect_component(&*world, seed, reference, mode, config)?;
    tracing::debug!(
        voxels = component.len(),
        passes = component.passes,
        "found component"
    );

    let indexer = world.indexer();
    let bounds = bounding_extent(component.points(&indexer));
    let num_changed = draw(executor, world, &component, &mut brush, anchor)?;

    Ok(FillOutcome::Filled(FillReport {
        anchor,
        num_voxels: component.len(),
        passes: component.passes,
        num_changed,
        bounds,
    }))
}

fn draw<W, E, B>(
    executor: &mut E,
    world: &mut W,
    component: &Component,
    brush: &mut B,
    anchor: Point3i,
) -> Result<usize, FillError>
where
    E: DrawExecutor<W>,
    B: Brush,
{
    Ok(executor.apply(world, &component.positions, brush, anchor)?)
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
