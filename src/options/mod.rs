//! Centralized control options with TOML preset support.
//!
//! All tweakable settings (projection, action enables and speeds,
//! damping, orbit limits, input bindings) are consolidated here.
//! Options serialize to/from TOML for control presets.

mod bindings;
mod camera;
mod control;
mod limits;

use std::path::Path;

pub use bindings::{BindingOptions, MouseBindings, OrbitAction, TouchAction, TouchBindings};
pub use camera::CameraOptions;
pub use control::ControlOptions;
pub use limits::{LimitOptions, RADIUS_FLOOR};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitaError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[limits]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Action enables, speeds, and damping.
    pub control: ControlOptions,
    /// Orbit radius and polar angle bounds.
    pub limits: LimitOptions,
    /// Mouse and touch bindings.
    #[schemars(skip)]
    pub bindings: BindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitaError> {
        let content = std::fs::read_to_string(path).map_err(OrbitaError::Io)?;
        toml::from_str(&content).map_err(|e| OrbitaError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitaError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitaError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[limits]
min_distance = 2.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.limits.min_distance, 2.0);
        // Everything else should be default
        assert_eq!(opts.limits.max_distance, f32::INFINITY);
        assert_eq!(opts.control.damping_factor, 0.06);
        assert_eq!(opts.bindings.mouse, MouseBindings::default());
    }

    #[test]
    fn infinite_max_distance_round_trips() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.limits.max_distance, f32::INFINITY);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value = serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("control"));
        assert!(props.contains_key("limits"));

        // Bindings are not schema-driven UI
        assert!(!props.contains_key("bindings"));

        // Control should expose speed fields but not clipping planes
        let control = &props["control"]["properties"];
        assert!(control.get("rotate_speed").is_some());
        assert!(control.get("damping_factor").is_some());
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
