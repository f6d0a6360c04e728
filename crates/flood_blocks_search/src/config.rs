use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The traversal depth at which a branch is deferred to a later pass.
pub const DEFAULT_MAX_DEPTH: usize = 2000;

/// Tunables for a fill. These never change which voxels a fill selects, only how the work is batched and whether an
/// oversized fill is allowed to finish.
///
/// ```
/// use flood_blocks_search::FillConfig;
///
/// let config = FillConfig::from_toml_str("voxel_limit = 100000").unwrap();
/// assert_eq!(config.max_depth, 2000);
/// assert_eq!(config.voxel_limit, Some(100000));
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct FillConfig {
    /// Branches deeper than this are put on the continuation queue and resumed in a later, shallower pass.
    pub max_depth: usize,
    /// When set, a fill whose component would hold more voxels than this fails before anything is drawn.
    pub voxel_limit: Option<usize>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            voxel_limit: None,
        }
    }
}

impl FillConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid fill config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize fill config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
