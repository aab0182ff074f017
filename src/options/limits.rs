use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest usable orbit radius. Keeps the spherical conversion away
/// from a zero-length offset even when the host configures a zero or
/// negative distance bound.
pub const RADIUS_FLOOR: f32 = 1e-4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Limits", inline)]
#[serde(default)]
/// Bounds on the orbit radius and polar angle.
///
/// The clamps use `max(lo).min(hi)` ordering, so a misconfigured range
/// (`min > max`) degrades to the upper bound instead of panicking.
pub struct LimitOptions {
    /// Smallest allowed distance from the target.
    #[schemars(title = "Min Distance", range(min = 0.0, max = 1000.0))]
    pub min_distance: f32,
    /// Largest allowed distance from the target.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Smallest allowed polar angle, radians in [0, pi].
    #[schemars(title = "Min Polar Angle", range(min = 0.0, max = 3.141592))]
    pub min_polar_angle: f32,
    /// Largest allowed polar angle, radians in [0, pi].
    #[schemars(title = "Max Polar Angle", range(min = 0.0, max = 3.141592))]
    pub max_polar_angle: f32,
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: std::f32::consts::PI,
        }
    }
}

impl LimitOptions {
    /// Clamp an orbit radius into the configured distance range, floored
    /// to [`RADIUS_FLOOR`]. Idempotent.
    #[must_use]
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius
            .max(self.min_distance)
            .min(self.max_distance)
            .max(RADIUS_FLOOR)
    }

    /// Clamp a polar angle into the configured range. Idempotent; the
    /// pole guard is applied separately by the caller.
    #[must_use]
    pub fn clamp_polar(&self, phi: f32) -> f32 {
        phi.max(self.min_polar_angle).min(self.max_polar_angle)
    }

    /// Whether either range is inverted (`min > max`).
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min_distance > self.max_distance
            || self.min_polar_angle > self.max_polar_angle
    }
}
