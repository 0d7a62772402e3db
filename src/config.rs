//! Processing parameters.
//!
//! Parameters are an explicit value passed to [`process`](crate::pipeline::process);
//! there is no global parameter object. They are usually read from a JSON
//! file where every field is optional:
//!
//! ```json
//! {
//!   "check_all_elements": true,
//!   "calculate_volume": true,
//!   "clear_previous_boundary": false,
//!   "scale": [1.0, 1.0, 1.0],
//!   "calculate_surface": true,
//!   "print_pos_nodes": false,
//!   "print_pos_elements": false,
//!   "print_pos_surface": false
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algs::transform::{is_identity_scale, validate_scale};
use crate::mesh_error::MeshSkinError;

/// Switches and factors controlling one processing run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Run the signed-volume check over all elements.
    pub check_all_elements: bool,
    /// Report the summed element volume.
    pub calculate_volume: bool,
    /// Drop boundary markers delivered by the loader before marking.
    pub clear_previous_boundary: bool,
    /// Per-axis coordinate scale factors.
    pub scale: [f64; 3],
    /// Extract the exterior surface and mark its nodes.
    pub calculate_surface: bool,
    /// Write node-id and node-boundary POS views.
    pub print_pos_nodes: bool,
    /// Write the element POS view.
    pub print_pos_elements: bool,
    /// Write the exterior-surface POS view.
    pub print_pos_surface: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            check_all_elements: true,
            calculate_volume: true,
            clear_previous_boundary: false,
            scale: [1.0; 3],
            calculate_surface: true,
            print_pos_nodes: false,
            print_pos_elements: false,
            print_pos_surface: false,
        }
    }
}

impl ProcessingConfig {
    /// Parses and validates JSON parameters.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MeshSkinError> {
        let config: Self = serde_json::from_reader(reader)
            .map_err(|e| MeshSkinError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads parameters from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MeshSkinError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn validate(&self) -> Result<(), MeshSkinError> {
        validate_scale(self.scale)
    }

    /// Whether scaling changes any coordinate.
    pub fn needs_scaling(&self) -> bool {
        !is_identity_scale(self.scale)
    }

    /// Whether any POS view is requested.
    pub fn wants_pos(&self) -> bool {
        self.print_pos_nodes || self.print_pos_elements || self.print_pos_surface
    }
}
