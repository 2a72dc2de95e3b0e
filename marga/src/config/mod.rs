//! Unified configuration loading for Marga.
//!
//! Loads all configuration from a single YAML file. Every section and field
//! is optional; missing values take the defaults below.
//!
//! ```yaml
//! search:
//!   connectivity: eight      # four | eight (or 4 | 8)
//!   policy: first_discovery  # first_discovery | relaxing
//! map:
//!   free_value: 254          # traversable pixel intensity
//!   tolerance: 0
//! render:
//!   explored_value: 230
//!   path_value: 0
//!   frame_every: 0           # 0 disables frame snapshots
//! ```

mod defaults;
mod error;
mod map;
mod marga;
mod render;
mod search;

pub use error::ConfigLoadError;
pub use marga::{DEFAULT_CONFIG_PATH, MargaConfig};

pub use map::MapSection;
pub use render::RenderSection;
pub use search::SearchSection;
