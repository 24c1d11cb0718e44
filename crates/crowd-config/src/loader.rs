//! JSON scenario loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "num_agents": 12,
//!   "grid_width": 30,
//!   "grid_height": 30,
//!   "agent_start_positions": { "width": [0, 30], "height": [0, 5] },
//!   "obstacles":  [ { "position": [10, 12] } ],
//!   "objectives": [ { "position": [15, 29], "preset": "exit", "color": [0, 0, 128] } ]
//! }
//! ```
//!
//! Unknown fields are ignored and missing ones take their defaults.  The
//! parsed document is validated before it is returned.

use std::io::Read;
use std::path::Path;

use crate::{ConfigResult, CrowdConfig};

/// Load and validate a scenario from a JSON file.
pub fn load_config(path: &Path) -> ConfigResult<CrowdConfig> {
    let file = std::fs::File::open(path)?;
    load_config_reader(std::io::BufReader::new(file))
}

/// Like [`load_config`] but accepts any `Read` source.
pub fn load_config_reader<R: Read>(reader: R) -> ConfigResult<CrowdConfig> {
    let config: CrowdConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Like [`load_config`] but parses an in-memory document.
pub fn load_config_str(json: &str) -> ConfigResult<CrowdConfig> {
    let config: CrowdConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
