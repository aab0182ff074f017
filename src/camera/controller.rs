use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::camera::spherical::Spherical;
use crate::events::{ControlEvent, ObserverId, ObserverSet};
use crate::options::{ControlOptions, LimitOptions, Options, RADIUS_FLOOR};

/// Threshold on the squared pose difference below which a frame is
/// reported as unchanged.
const POSE_EPSILON: f32 = 1e-6;

/// Per-pixel rate for drag dollying.
const DOLLY_DRAG_RATE: f32 = 0.005;

/// Wheel scale steps before the zoom-speed exponent is applied.
const WHEEL_STEP_OUT: f32 = 1.1;
const WHEEL_STEP_IN: f32 = 0.9;

/// Orbital camera state: accumulates pointer intent as pending
/// spherical deltas and resolves them into a camera pose once per frame.
///
/// The camera itself stays with the host; [`advance`](Self::advance)
/// borrows it mutably for the duration of one update. Input handlers
/// (usually driven through an
/// [`InputTranslator`](crate::input::InputTranslator)) accumulate
/// deltas; `advance` consumes them — in full, or as an exponentially
/// decaying fraction when damping is enabled.
pub struct OrbitState {
    /// Point the camera orbits. The host may move it between frames.
    pub target: Vec3,
    /// Secondary pivot, translated together with the target during pans.
    pub cursor: Vec3,
    /// Action enables, speed multipliers, and damping.
    pub control: ControlOptions,
    /// Orbit radius and polar angle bounds.
    pub limits: LimitOptions,

    // Spherical scratch, recomputed from the camera pose every advance.
    spherical: Spherical,
    // Pending, not-yet-applied rotation.
    spherical_delta: Spherical,
    // Pending uniform radius scale; 1.0 means no dolly this frame.
    scale: f32,
    // Pending world-space pan offset.
    pan_offset: Vec3,

    // Rotates the host's up axis onto canonical +y and back.
    quat: Quat,
    quat_inverse: Quat,

    viewport_height: f32,
    dragging: bool,

    last_eye: Vec3,
    last_target: Vec3,

    observers: ObserverSet,
}

impl OrbitState {
    /// Create orbit state around the camera's current target with
    /// default options.
    ///
    /// The camera's up axis is read once here to establish the orbit
    /// basis; later changes to `camera.up` are ignored.
    #[must_use]
    pub fn new(camera: &Camera) -> Self {
        Self::from_options(camera, &Options::default())
    }

    /// Create orbit state with the control and limit sections of the
    /// given options.
    #[must_use]
    pub fn from_options(camera: &Camera, options: &Options) -> Self {
        if options.limits.is_inverted() {
            log::warn!(
                "inverted orbit limits (min > max); clamping degrades to the upper bound"
            );
        }
        let up = camera.up.try_normalize().unwrap_or(Vec3::Y);
        let quat = Quat::from_rotation_arc(up, Vec3::Y);
        Self {
            target: camera.target,
            cursor: camera.target,
            control: options.control.clone(),
            limits: options.limits.clone(),
            spherical: Spherical::ZERO,
            spherical_delta: Spherical::ZERO,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
            quat,
            quat_inverse: quat.inverse(),
            viewport_height: 1080.0,
            dragging: false,
            // Infinite sentinel so the first advance always reports a
            // change.
            last_eye: Vec3::INFINITY,
            last_target: Vec3::INFINITY,
            observers: ObserverSet::new(),
        }
    }

    /// Update the viewport height used for pixel-to-angle conversion.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    /// Register an observer for change/start/end notifications.
    pub fn observe(&mut self, observer: impl FnMut(ControlEvent) + 'static) -> ObserverId {
        self.observers.add(observer)
    }

    /// Unregister an observer.
    pub fn unobserve(&mut self, id: ObserverId) {
        self.observers.remove(id);
    }

    /// Whether an interactive drag is in progress.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.dragging
    }

    /// Mark the start of an interactive drag and emit
    /// [`ControlEvent::Start`]. Idempotent while a drag is active.
    pub fn begin_interaction(&mut self) {
        if !self.dragging {
            self.dragging = true;
            self.observers.emit(ControlEvent::Start);
        }
    }

    /// Mark the end of an interactive drag and emit
    /// [`ControlEvent::End`]. Damped decay keeps settling afterwards.
    pub fn end_interaction(&mut self) {
        if self.dragging {
            self.dragging = false;
            self.observers.emit(ControlEvent::End);
        }
    }

    // ── Input-to-delta translation ───────────────────────────────────

    /// Queue an azimuthal rotation, positive angles orbiting leftward.
    pub fn rotate_left(&mut self, angle: f32) {
        self.spherical_delta.theta -= angle;
    }

    /// Queue a polar rotation, positive angles orbiting upward.
    pub fn rotate_up(&mut self, angle: f32) {
        self.spherical_delta.phi -= angle;
    }

    /// Queue a rotation from a pointer drag delta in pixels.
    ///
    /// A full viewport height of vertical drag sweeps 2π of polar
    /// angle; the conversion reads the viewport height at call time.
    pub fn rotate_pixels(&mut self, delta: Vec2) {
        if !self.control.enable_rotate {
            return;
        }
        let height = self.viewport_height.max(1.0);
        let speed = self.control.rotate_speed;
        self.rotate_left(TAU * delta.x / height * speed);
        self.rotate_up(TAU * delta.y / height * speed);
    }

    /// Queue a dolly from a vertical drag delta in pixels. Dragging
    /// down (positive delta) moves the camera away from the target.
    pub fn dolly_move(&mut self, delta_y: f32) {
        if !self.control.enable_zoom {
            return;
        }
        self.scale *= 1.0 + delta_y * DOLLY_DRAG_RATE;
    }

    /// Queue a dolly from a wheel step: one notch scales the radius by
    /// 1.1 (away) or 0.9 (toward), adjusted by the zoom speed exponent.
    pub fn wheel(&mut self, delta_y: f32) {
        if !self.control.enable_zoom {
            return;
        }
        let step = if delta_y > 0.0 { WHEEL_STEP_OUT } else { WHEEL_STEP_IN };
        self.scale *= step.powf(self.control.zoom_speed);
    }

    /// Queue a dolly from a pinch gesture given the previous and
    /// current distance between the two touch points.
    pub fn pinch_dolly(&mut self, start_distance: f32, end_distance: f32) {
        if !self.control.enable_zoom || start_distance <= 0.0 || end_distance <= 0.0 {
            return;
        }
        let ratio = (end_distance / start_distance).powf(self.control.zoom_speed);
        self.scale /= ratio;
    }

    /// Queue a pan from a pointer drag delta in pixels.
    ///
    /// The pixel delta is scaled by the scene height visible at the
    /// target distance, so panning tracks the cursor regardless of
    /// zoom. Recomputed from the live radius on every call.
    pub fn pan_pixels(&mut self, delta: Vec2, camera: &Camera) {
        if !self.control.enable_pan {
            return;
        }
        let height = self.viewport_height.max(1.0);
        let target_distance = (camera.eye - self.target).length().max(RADIUS_FLOOR)
            * (camera.fovy.to_radians() / 2.0).tan();
        let speed = self.control.pan_speed;
        let dx = 2.0 * delta.x * target_distance / height * speed;
        let dy = 2.0 * delta.y * target_distance / height * speed;

        let forward = (self.target - camera.eye).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();

        self.pan_offset -= right * dx;
        if self.control.screen_space_panning {
            let view_up = right.cross(forward);
            self.pan_offset += view_up * dy;
        } else {
            // Keep the pan in the plane perpendicular to the up axis.
            let horizontal = camera.up.cross(right);
            self.pan_offset += horizontal * dy;
        }
    }

    // ── Frame update ─────────────────────────────────────────────────

    /// Consume pending deltas and write the resulting pose to the
    /// camera. Returns `true` iff a change notification was emitted.
    ///
    /// Call once per frame. With damping enabled this must run every
    /// frame regardless of input, or queued motion never settles.
    pub fn advance(&mut self, camera: &mut Camera) -> bool {
        self.step(camera, false)
    }

    /// Like [`advance`](Self::advance), but always emits a change
    /// notification, even for an identical pose. Useful after the host
    /// mutates `target` or the camera directly.
    pub fn advance_forced(&mut self, camera: &mut Camera) -> bool {
        self.step(camera, true)
    }

    /// Recenter on the centroid of `points` and back off until their
    /// bounding sphere fits the vertical field of view.
    ///
    /// The view direction is preserved. Returns the change flag from
    /// the forced advance.
    pub fn fit_to_points(&mut self, camera: &mut Camera, points: &[Vec3]) -> bool {
        if points.is_empty() {
            return false;
        }
        let centroid: Vec3 = points.iter().copied().sum::<Vec3>() / points.len() as f32;
        let radius = points
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0_f32, f32::max);

        let direction = (camera.eye - self.target).normalize_or_zero();
        let direction = if direction == Vec3::ZERO { Vec3::Z } else { direction };

        let fovy_rad = camera.fovy.to_radians();
        // 1.5x padding for a comfortable margin around the sphere
        let fit_distance = radius / (fovy_rad / 2.0).tan() * 1.5;
        let distance = self.limits.clamp_radius(fit_distance);

        self.target = centroid;
        self.cursor = centroid;
        camera.eye = centroid + direction * distance;

        log::debug!(
            "fit camera to {} points: target {centroid:?}, distance {distance}",
            points.len()
        );
        self.advance_forced(camera)
    }

    fn auto_rotation_angle(&self) -> f32 {
        // 2.0 is one orbit per 30 seconds at 60 frames per second
        TAU / 60.0 / 60.0 * self.control.auto_rotate_speed
    }

    fn step(&mut self, camera: &mut Camera, force: bool) -> bool {
        // Current spherical position in the up-aligned basis. Recomputed
        // from the camera each frame so host-side moves are picked up.
        let mut offset = camera.eye - self.target;
        offset = self.quat * offset;
        self.spherical = Spherical::from_vec3(offset);

        if self.control.auto_rotate && !self.dragging {
            self.rotate_left(self.auto_rotation_angle());
        }

        // Apply pending rotation: all of it, or a damped fraction.
        if self.control.enable_damping {
            let k = self.control.damping_factor;
            self.spherical.theta += self.spherical_delta.theta * k;
            self.spherical.phi += self.spherical_delta.phi * k;
        } else {
            self.spherical.theta += self.spherical_delta.theta;
            self.spherical.phi += self.spherical_delta.phi;
        }

        self.spherical.phi = self.limits.clamp_polar(self.spherical.phi);
        self.spherical.make_safe();

        // Bound theta growth. Damped mode keeps the raw angle: the
        // pending delta must decay toward zero, not toward a wrapped
        // value.
        if !self.control.enable_damping {
            self.spherical.theta = wrap_angle(self.spherical.theta);
        }

        self.spherical.radius = self.limits.clamp_radius(self.spherical.radius * self.scale);

        // Pan translates the target (and the cursor pivot with it).
        if self.control.enable_damping {
            let k = self.control.damping_factor;
            self.target += self.pan_offset * k;
            self.cursor += self.pan_offset * k;
        } else {
            self.target += self.pan_offset;
            self.cursor += self.pan_offset;
        }

        // Write the new pose: position plus look-at orientation.
        offset = self.quat_inverse * self.spherical.to_vec3();
        camera.eye = self.target + offset;
        camera.target = self.target;

        // Consume or decay what was applied.
        if self.control.enable_damping {
            let keep = 1.0 - self.control.damping_factor;
            self.spherical_delta.theta *= keep;
            self.spherical_delta.phi *= keep;
            self.pan_offset *= keep;
        } else {
            self.spherical_delta = Spherical::ZERO;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        let moved = self.last_eye.distance_squared(camera.eye) > POSE_EPSILON
            || self.last_target.distance_squared(self.target) > POSE_EPSILON;
        if force || moved {
            self.observers.emit(ControlEvent::Change);
            self.last_eye = camera.eye;
            self.last_target = self.target;
            return true;
        }
        false
    }
}

/// Wrap an angle into (-pi, pi].
fn wrap_angle(theta: f32) -> f32 {
    let wrapped = theta.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
