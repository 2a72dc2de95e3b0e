//! Search configuration section.

use serde::{Deserialize, Serialize};

use crate::pathfinding::{Connectivity, DiscoveryPolicy, SearchConfig};

/// Search settings section
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSection {
    /// 4- or 8-connected movement
    #[serde(default)]
    pub connectivity: Connectivity,

    /// How rediscovered cells are handled
    #[serde(default)]
    pub policy: DiscoveryPolicy,
}

impl SearchSection {
    /// Convert to the engine's per-invocation config
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig::new(self.connectivity).with_policy(self.policy)
    }
}
