use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Per-action enables, speed multipliers, and damping parameters.
pub struct ControlOptions {
    /// Whether pointer drag may rotate the camera.
    pub enable_rotate: bool,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Whether wheel / dolly drag may change the orbit radius.
    pub enable_zoom: bool,
    /// Zoom sensitivity multiplier (exponent on the wheel scale step).
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Whether pointer drag may translate the orbit target.
    pub enable_pan: bool,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Whether pending deltas decay across frames instead of applying
    /// in full. Requires the host to call `advance` every frame.
    pub enable_damping: bool,
    /// Fraction of the remaining delta consumed per frame.
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Pan in the camera's view plane; when false, pan stays
    /// perpendicular to the up axis.
    pub screen_space_panning: bool,
    /// Turntable rotation around the up axis while idle.
    pub auto_rotate: bool,
    /// Auto-rotation speed: 2.0 is one orbit per 30 seconds at 60 fps.
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            enable_rotate: true,
            rotate_speed: 1.0,
            enable_zoom: true,
            zoom_speed: 1.0,
            enable_pan: true,
            pan_speed: 1.0,
            enable_damping: true,
            damping_factor: 0.06,
            screen_space_panning: true,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
        }
    }
}
