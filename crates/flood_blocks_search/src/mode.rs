use flood_blocks_core::prelude::*;

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Selects which of the six face neighbors of a voxel are adjacent to it during a fill.
///
/// | mode        | +x/-x | +z/-z | +y  | -y  |
/// |-------------|-------|-------|-----|-----|
/// | `Normal`    | yes   | yes   | yes | yes |
/// | `Up`        | yes   | yes   | yes | no  |
/// | `Down`      | yes   | yes   | no  | yes |
/// | `Layer`     | yes   | yes   | no  | no  |
/// | `VerticalX` | no    | yes   | yes | yes |
/// | `VerticalZ` | yes   | no    | yes | yes |
///
/// `Layer` confines a fill to one horizontal slice. `VerticalX` and `VerticalZ` pin one horizontal coordinate, so the fill is
/// a flat vertical curtain.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    Normal,
    Up,
    Down,
    Layer,
    VerticalX,
    VerticalZ,
}

impl Default for FillMode {
    fn default() -> Self {
        FillMode::Normal
    }
}

const NORMAL_DIRECTIONS: [SignedAxis3; 6] = [
    SignedAxis3::POS_X,
    SignedAxis3::NEG_X,
    SignedAxis3::POS_Z,
    SignedAxis3::NEG_Z,
    SignedAxis3::POS_Y,
    SignedAxis3::NEG_Y,
];
const UP_DIRECTIONS: [SignedAxis3; 5] = [
    SignedAxis3::POS_X,
    SignedAxis3::NEG_X,
    SignedAxis3::POS_Z,
    SignedAxis3::NEG_Z,
    SignedAxis3::POS_Y,
];
const DOWN_DIRECTIONS: [SignedAxis3; 5] = [
    SignedAxis3::POS_X,
    SignedAxis3::NEG_X,
    SignedAxis3::POS_Z,
    SignedAxis3::NEG_Z,
    SignedAxis3::NEG_Y,
];
const LAYER_DIRECTIONS: [SignedAxis3; 4] = [
    SignedAxis3::POS_X,
    SignedAxis3::NEG_X,
    SignedAxis3::POS_Z,
    SignedAxis3::NEG_Z,
];
const VERTICAL_X_DIRECTIONS: [SignedAxis3; 4] = [
    SignedAxis3::POS_Z,
    SignedAxis3::NEG_Z,
    SignedAxis3::POS_Y,
    SignedAxis3::NEG_Y,
];
const VERTICAL_Z_DIRECTIONS: [SignedAxis3; 4] = [
    SignedAxis3::POS_X,
    SignedAxis3::NEG_X,
    SignedAxis3::POS_Y,
    SignedAxis3::NEG_Y,
];

impl FillMode {
    pub const ALL: [FillMode; 6] = [
        FillMode::Normal,
        FillMode::Up,
        FillMode::Down,
        FillMode::Layer,
        FillMode::VerticalX,
        FillMode::VerticalZ,
    ];

    /// The enabled neighbor directions, always in the order `+x, -x, +z, -z, +y, -y`.
    pub fn directions(&self) -> &'static [SignedAxis3] {
        match self {
            FillMode::Normal => &NORMAL_DIRECTIONS,
            FillMode::Up => &UP_DIRECTIONS,
            FillMode::Down => &DOWN_DIRECTIONS,
            FillMode::Layer => &LAYER_DIRECTIONS,
            FillMode::VerticalX => &VERTICAL_X_DIRECTIONS,
            FillMode::VerticalZ => &VERTICAL_Z_DIRECTIONS,
        }
    }

    /// Returns `true` iff a fill in this mode may step in direction `dir`.
    pub fn allows(&self, dir: SignedAxis3) -> bool {
        self.directions().contains(&dir)
    }

    /// Brushes position their pattern one voxel further out for every mode that restricts adjacency.
    pub fn brush_offset(&self) -> i32 {
        match self {
            FillMode::Normal => 0,
            _ => 1,
        }
    }

    /// The command token for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::Normal => "normal",
            FillMode::Up => "up",
            FillMode::Down => "down",
            FillMode::Layer => "layer",
            FillMode::VerticalX => "vertical_x",
            FillMode::VerticalZ => "vertical_z",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown fill mode `{0}`, expected one of normal/up/down/layer/vertical_x/vertical_z")]
pub struct ParseFillModeError(pub String);

impl FromStr for FillMode {
    type Err = ParseFillModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FillMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFillModeError(s.to_string()))
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
    fn adjacency_table() {
        use flood_blocks_core::SignedAxis3 as D;

        let row = |mode: FillMode| {
            [D::POS_X, D::NEG_X, D::POS_Z, D::NEG_Z, D::POS_Y, D::NEG_Y]
                .iter()
                .map(|d| mode.allows(*d))
                .collect::<Vec<_>>()
        };

        assert_eq!(row(FillMode::Normal), vec![true, true, true, true, true, true]);
        assert_eq!(row(FillMode::Up), vec![true, true, true, true, true, false]);
        assert_eq!(row(FillMode::Down), vec![true, true, true, true, false, true]);
        assert_eq!(row(FillMode::Layer), vec![true, true, true, true, false, false]);
        assert_eq!(row(FillMode::VerticalX), vec![false, false, true, true, true, true]);
        assert_eq!(row(FillMode::VerticalZ), vec![true, true, false, false, true, true]);
    }

    #[test]
    fn parse_and_display_command_tokens() {
        for mode in FillMode::ALL.iter() {
            assert_eq!(mode.to_string().parse::<FillMode>(), Ok(*mode));
        }
        assert_eq!("Vertical_X".parse::<FillMode>(), Ok(FillMode::VerticalX));
        assert_eq!(
            "sideways".parse::<FillMode>(),
            Err(ParseFillModeError("sideways".to_string()))
        );
    }

    #[test]
    fn only_normal_has_no_brush_offset() {
        for mode in FillMode::ALL.iter() {
            let expected = if *mode == FillMode::Normal { 0 } else { 1 };
            assert_eq!(mode.brush_offset(), expected);
        }
    }
}
