use crate::{
    run_fill_anchored, BrushResolver, DrawExecutor, FillConfig, FillError, FillMode, FillOutcome, Permissions,
};

use flood_blocks_core::prelude::*;
use flood_blocks_storage::prelude::*;

/// Where a `FillSession` is in its interaction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    /// No fill is pending.
    Idle,
    /// A fill is pending and the next selected voxel is its seed.
    AwaitingSeed,
    /// The seed of an anchored fill was picked, and the next selected voxel is where the brush gets anchored.
    AwaitingDestination { seed: Point3i },
}

/// The interactive side of filling: a caller begins a fill, then selects the voxel(s) it applies to.
///
/// A sticky session re-arms after every successful fill, so the same replacement can be applied to several seeds. The
/// session only carries the pending replacement and mode; no traversal state survives between fills.
#[derive(Clone, Debug)]
pub struct FillSession<S> {
    state: SessionState,
    pending: Option<Pending<S>>,
    sticky: bool,
}

#[derive(Clone, Debug)]
struct Pending<S> {
    spec: S,
    mode: FillMode,
    anchored: bool,
}

impl<S> Default for FillSession<S> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<S> FillSession<S> {
    pub fn new(sticky: bool) -> Self {
        Self {
            state: SessionState::Idle,
            pending: None,
            sticky,
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    #[inline]
    pub fn set_sticky(&mut self, sticky: bool) {
        self.sticky = sticky;
    }

    /// The mode of the pending fill, if any.
    pub fn pending_mode(&self) -> Option<FillMode> {
        self.pending.as_ref().map(|p| p.mode)
    }

    /// Arms the session with a fill whose brush is anchored at the seed. Replaces any pending fill.
    pub fn begin(&mut self, spec: S, mode: FillMode) {
        self.arm(spec, mode, false);
    }

    /// Arms the session with a fill that takes two selections: the seed, then the brush anchor.
    pub fn begin_anchored(&mut self, spec: S, mode: FillMode) {
        self.arm(spec, mode, true);
    }

    fn arm(&mut self, spec: S, mode: FillMode, anchored: bool) {
        self.pending = Some(Pending {
            spec,
            mode,
            anchored,
        });
        self.state = SessionState::AwaitingSeed;
    }

    /// Drops the pending fill, whatever state the session is in.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.state = SessionState::Idle;
    }

    /// Handles a seed selection.
    ///
    /// Returns `None` without doing anything unless the session is awaiting a seed. An anchored fill only records the seed
    /// here, moves to `AwaitingDestination` and also returns `None`. Otherwise the fill runs and its result is returned.
    pub fn select_seed<W, P, R, E>(
        &mut self,
        seed: Point3i,
        world: &mut W,
        permissions: &P,
        resolver: &R,
        executor: &mut E,
        config: &FillConfig,
    ) -> Option<Result<FillOutcome, FillError>>
    where
        W: WriteMaterial,
        P: Permissions,
        R: BrushResolver<S>,
        E: DrawExecutor<W>,
    {
        if self.state != SessionState::AwaitingSeed {
            return None;
        }
        let pending = self.pending.take()?;
        if pending.anchored {
            self.pending = Some(pending);
            self.state = SessionState::AwaitingDestination { seed };
            return None;
        }

        Some(self.fill(pending, seed, seed, world, permissions, resolver, executor, config))
    }

    /// Handles the anchor selection of an anchored fill. Returns `None` without doing anything unless the session is
    /// awaiting a destination.
    pub fn select_destination<W, P, R, E>(
        &mut self,
        anchor: Point3i,
        world: &mut W,
        permissions: &P,
        resolver: &R,
        executor: &mut E,
        config: &FillConfig,
    ) -> Option<Result<FillOutcome, FillError>>
    where
        W: WriteMaterial,
        P: Permissions,
        R: BrushResolver<S>,
        E: DrawExecutor<W>,
    {
        let seed = match self.state {
            SessionState::AwaitingDestination { seed } => seed,
            _ => return None,
        };
        let pending = self.pending.take()?;

        Some(self.fill(pending, seed, anchor, world, permissions, resolver, executor, config))
    }

    fn fill<W, P, R, E>(
        &mut self,
        pending: Pending<S>,
        seed: Point3i,
        anchor: Point3i,
        world: &mut W,
        permissions: &P,
        resolver: &R,
        executor: &mut E,
        config: &FillConfig,
    ) -> Result<FillOutcome, FillError>
    where
        W: WriteMaterial,
        P: Permissions,
        R: BrushResolver<S>,
        E: DrawExecutor<W>,
    {
        let result = run_fill_anchored(
            world,
            seed,
            anchor,
            &pending.spec,
            pending.mode,
            permissions,
            resolver,
            executor,
            config,
        );

        // Only a fill that actually drew re-arms the session.
        match result {
            Ok(FillOutcome::Filled(_)) if self.sticky => {
                self.pending = Some(pending);
                self.state = SessionState::AwaitingSeed;
            }
            _ => self.cancel(),
        }

        result
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
    use crate::{BlockPermissions, BufferedDrawOp, CheckeredBrushResolver, Rejection, SolidBrushResolver};

    use pretty_assertions::assert_eq;

    const AIR: Material = Material::new(BlockType::AIR);
    const STONE: Material = Material::new(BlockType::STONE);
    const SAND: Material = Material::new(BlockType::SAND);

    /// Two separate stone pillars at x = 0 and x = 2.
    fn two_pillars() -> BlockArray {
        BlockArray::fill_with(PointN([3, 4, 1]), |p| if p.x() == 1 { AIR } else { STONE })
    }

    fn select(
        session: &mut FillSession<Material>,
        world: &mut BlockArray,
        seed: Point3i,
    ) -> Option<Result<FillOutcome, FillError>> {
        session.select_seed(
            seed,
            world,
            &BlockPermissions::allow_all(),
            &SolidBrushResolver,
            &mut BufferedDrawOp::default(),
            &FillConfig::default(),
        )
    }

    #[test]
    fn idle_session_ignores_selection() {
        let mut world = two_pillars();
        let mut session = FillSession::<Material>::default();

        assert_eq!(select(&mut session, &mut world, Point3i::ZERO), None);
        assert_eq!(world.count(STONE), 8);
    }

    #[test]
    fn one_shot_session_goes_idle() {
        let mut world = two_pillars();
        let mut session = FillSession::new(false);
        session.begin(SAND, FillMode::Normal);
        assert_eq!(session.state(), SessionState::AwaitingSeed);

        let outcome = select(&mut session, &mut world, Point3i::ZERO).unwrap().unwrap();

        assert_eq!(outcome.report().unwrap().num_voxels, 4);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.pending_mode(), None);
        assert_eq!(select(&mut session, &mut world, PointN([2, 0, 0])), None);
        assert_eq!(world.count(STONE), 4);
    }

    #[test]
    fn sticky_session_rearms_after_fill() {
        let mut world = two_pillars();
        let mut session = FillSession::new(true);
        session.begin(SAND, FillMode::Up);

        select(&mut session, &mut world, Point3i::ZERO).unwrap().unwrap();
        assert_eq!(session.state(), SessionState::AwaitingSeed);
        assert_eq!(session.pending_mode(), Some(FillMode::Up));

        select(&mut session, &mut world, PointN([2, 0, 0])).unwrap().unwrap();
        assert_eq!(session.state(), SessionState::AwaitingSeed);
        assert_eq!(world.count(SAND), 8);
    }

    #[test]
    fn sticky_session_ends_on_rejection() {
        let mut world = two_pillars();
        let mut session = FillSession::new(true);
        session.begin(STONE, FillMode::Normal);

        let outcome = select(&mut session, &mut world, Point3i::ZERO).unwrap().unwrap();

        assert_eq!(outcome, FillOutcome::Rejected(Rejection::SameType));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn sticky_session_ends_on_error() {
        let mut world = two_pillars();
        let mut session = FillSession::new(true);
        session.begin(SAND, FillMode::Normal);

        let result = select(&mut session, &mut world, PointN([5, 0, 0])).unwrap();

        assert_eq!(result, Err(FillError::SeedOutOfBounds(PointN([5, 0, 0]))));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn cancel_drops_pending_fill() {
        let mut world = two_pillars();
        let mut session = FillSession::new(true);
        session.begin(SAND, FillMode::Normal);

        session.cancel();

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(select(&mut session, &mut world, Point3i::ZERO), None);
        assert_eq!(world.count(SAND), 0);
    }

    #[test]
    fn anchored_fill_waits_for_destination() {
        let wood = Material::new(BlockType::WOOD);
        let glass = Material::new(BlockType::GLASS);
        let mut world = BlockArray::fill(PointN([4, 1, 1]), STONE);
        let mut session = FillSession::new(false);
        let mut executor = BufferedDrawOp::default();
        session.begin_anchored((wood, glass), FillMode::Normal);

        let selected = session.select_seed(
            Point3i::ZERO,
            &mut world,
            &BlockPermissions::allow_all(),
            &CheckeredBrushResolver,
            &mut executor,
            &FillConfig::default(),
        );
        assert!(selected.is_none());
        assert_eq!(
            session.state(),
            SessionState::AwaitingDestination {
                seed: Point3i::ZERO
            }
        );
        assert_eq!(world.count(STONE), 4);

        let outcome = session
            .select_destination(
                PointN([1, 0, 0]),
                &mut world,
                &BlockPermissions::allow_all(),
                &CheckeredBrushResolver,
                &mut executor,
                &FillConfig::default(),
            )
            .unwrap()
            .unwrap();

        assert_eq!(outcome.report().unwrap().anchor, PointN([1, 0, 0]));
        assert_eq!(world.material(PointN([0, 0, 0])), Some(glass));
        assert_eq!(world.material(PointN([1, 0, 0])), Some(wood));
        assert_eq!(session.state(), SessionState::Idle);
    }
}
