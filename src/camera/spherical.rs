use glam::Vec3;

/// Pole guard: phi is kept inside (EPS, PI - EPS) so the look direction
/// never becomes parallel to the up axis.
pub const POLE_EPSILON: f32 = 1e-6;

/// Spherical coordinates of the camera offset from the orbit target,
/// expressed in the up-aligned basis (y is the canonical up axis).
///
/// `phi` is the polar angle measured from +y, `theta` the azimuthal
/// angle around y measured from +z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the target.
    pub radius: f32,
    /// Polar angle from the up axis, in radians.
    pub phi: f32,
    /// Azimuthal angle around the up axis, in radians.
    pub theta: f32,
}

impl Spherical {
    /// Zero offset.
    pub const ZERO: Self = Self {
        radius: 0.0,
        phi: 0.0,
        theta: 0.0,
    };

    /// Create from explicit components.
    #[must_use]
    pub const fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert a cartesian offset into spherical coordinates.
    ///
    /// A zero-length offset yields `Spherical::ZERO` rather than NaN
    /// angles.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::ZERO;
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    /// Convert back to a cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Nudge phi off the exact poles where the azimuth is undefined.
    pub fn make_safe(&mut self) {
        self.phi = self
            .phi
            .clamp(POLE_EPSILON, std::f32::consts::PI - POLE_EPSILON);
    }
}

impl Default for Spherical {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_cartesian() {
        let original = Spherical::new(10.0, 1.2, -0.7);
        let back = Spherical::from_vec3(original.to_vec3());
        assert!((back.radius - original.radius).abs() < 1e-5);
        assert!((back.phi - original.phi).abs() < 1e-5);
        assert!((back.theta - original.theta).abs() < 1e-5);
    }

    #[test]
    fn canonical_axes() {
        // +y is the pole: phi = 0
        let s = Spherical::from_vec3(Vec3::new(0.0, 5.0, 0.0));
        assert!((s.phi - 0.0).abs() < 1e-6);
        assert!((s.radius - 5.0).abs() < 1e-6);

        // +z is the azimuth origin: phi = pi/2, theta = 0
        let s = Spherical::from_vec3(Vec3::new(0.0, 0.0, 5.0));
        assert!((s.phi - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!(s.theta.abs() < 1e-6);
    }

    #[test]
    fn zero_offset_does_not_produce_nan() {
        let s = Spherical::from_vec3(Vec3::ZERO);
        assert_eq!(s, Spherical::ZERO);
        assert!(s.to_vec3().is_finite());
    }

    #[test]
    fn make_safe_keeps_phi_off_the_poles() {
        let mut s = Spherical::new(1.0, 0.0, 0.0);
        s.make_safe();
        assert!(s.phi >= POLE_EPSILON);

        let mut s = Spherical::new(1.0, std::f32::consts::PI, 0.0);
        s.make_safe();
        assert!(s.phi <= std::f32::consts::PI - POLE_EPSILON);
    }
}
