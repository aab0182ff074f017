//! Pointer and touch gesture bindings.
//!
//! Maps physical inputs (mouse buttons, touch-point counts) to orbit
//! actions. Serializable so presets can rebind, e.g. left-drag to pan
//! for CAD-style controls.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::PointerButton;

/// Action driven by a single-pointer drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrbitAction {
    /// Orbit around the target.
    Rotate,
    /// Change the distance to the target.
    Dolly,
    /// Translate the target.
    Pan,
}

/// Action driven by a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TouchAction {
    /// One- or two-finger orbit.
    Rotate,
    /// One- or two-finger pan.
    Pan,
    /// Pinch dolly combined with centroid pan.
    DollyPan,
    /// Pinch dolly combined with centroid rotate.
    DollyRotate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Mouse button to action map. `None` disables a button.
pub struct MouseBindings {
    /// Action for the primary button.
    pub left: Option<OrbitAction>,
    /// Action for the middle button (wheel click).
    pub middle: Option<OrbitAction>,
    /// Action for the secondary button.
    pub right: Option<OrbitAction>,
}

impl Default for MouseBindings {
    fn default() -> Self {
        Self {
            left: Some(OrbitAction::Rotate),
            middle: Some(OrbitAction::Dolly),
            right: Some(OrbitAction::Pan),
        }
    }
}

impl MouseBindings {
    /// Look up the action bound to a pointer button.
    #[must_use]
    pub fn action_for(&self, button: PointerButton) -> Option<OrbitAction> {
        match button {
            PointerButton::Left => self.left,
            PointerButton::Middle => self.middle,
            PointerButton::Right => self.right,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Touch-point count to gesture map. `None` disables a gesture.
pub struct TouchBindings {
    /// Gesture for a single touch point.
    pub one: Option<TouchAction>,
    /// Gesture for two touch points.
    pub two: Option<TouchAction>,
}

impl Default for TouchBindings {
    fn default() -> Self {
        Self {
            one: Some(TouchAction::Rotate),
            two: Some(TouchAction::DollyPan),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
/// Combined mouse and touch bindings.
pub struct BindingOptions {
    /// Mouse button bindings.
    pub mouse: MouseBindings,
    /// Touch gesture bindings.
    pub touch: TouchBindings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mouse_map_matches_convention() {
        let bindings = MouseBindings::default();
        assert_eq!(bindings.action_for(PointerButton::Left), Some(OrbitAction::Rotate));
        assert_eq!(bindings.action_for(PointerButton::Middle), Some(OrbitAction::Dolly));
        assert_eq!(bindings.action_for(PointerButton::Right), Some(OrbitAction::Pan));
    }

    #[test]
    fn buttons_can_be_rebound_and_disabled() {
        let bindings = MouseBindings {
            left: Some(OrbitAction::Pan),
            middle: None,
            ..MouseBindings::default()
        };
        assert_eq!(bindings.action_for(PointerButton::Left), Some(OrbitAction::Pan));
        assert_eq!(bindings.action_for(PointerButton::Middle), None);
    }

    #[test]
    fn actions_serialize_as_snake_case() {
        let toml_str = toml::to_string(&BindingOptions::default()).unwrap();
        assert!(toml_str.contains("rotate"));
        assert!(toml_str.contains("dolly_pan"));
    }
}
