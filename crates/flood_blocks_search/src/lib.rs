#![allow(
    clippy::type_complexity,
    clippy::needless_collect,
    clippy::too_many_arguments
)]

//! Connected-region flood fill over bounded voxel worlds.
//!
//! - `FloodFill` is the depth-bounded traversal, `find_component` drives it until a whole component is covered
//! - `run_fill` adds the legality gate and hands the component to a `Brush` and a `DrawExecutor`
//! - `FillSession` is the seed-selection state machine for interactive (and sticky) fills

pub mod config;
pub mod draw;
pub mod fill;
pub mod flood_fill;
pub mod mode;
pub mod permissions;
pub mod session;

pub use config::*;
pub use draw::*;
pub use fill::*;
pub use flood_fill::*;
pub use mode::*;
pub use permissions::*;
pub use session::*;

pub mod prelude {
    pub use super::{
        find_component, run_fill, BlockPermissions, Brush, BrushResolver, BufferedDrawOp, Component, DrawExecutor,
        FillConfig, FillError, FillMode, FillOutcome, FillReport, FillSession, Permissions, Rejection, SessionState,
        SolidBrush, SolidBrushResolver,
    };
}
