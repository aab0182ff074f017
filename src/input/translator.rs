//! Converts raw pointer events into pending orbit deltas.
//!
//! The `InputTranslator` owns all transient input state (the
//! interaction state machine, per-action drag references, bindings).
//! It composes over whatever event source the host has: the host
//! forwards [`PointerEvent`]s and aggregated touch points, the
//! translator mutates the [`OrbitState`] and triggers `advance`.

use glam::Vec2;

use super::event::{PointerEvent, PointerButton};
use crate::camera::{Camera, OrbitState};
use crate::options::{BindingOptions, OrbitAction, TouchAction};

/// How incoming pointer-move events are currently interpreted.
///
/// Set on pointer-down/touch-start from the configured bindings,
/// cleared on pointer-up/touch-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No active gesture.
    #[default]
    Idle,
    /// Pointer drag orbits the camera.
    Rotating,
    /// Pointer drag translates the target.
    Panning,
    /// Pointer drag changes the orbit radius.
    Dollying,
    /// One-finger orbit.
    TouchRotating,
    /// One-finger pan.
    TouchPanning,
    /// Two-finger pinch dolly + centroid pan.
    TouchDollyPan,
    /// Two-finger pinch dolly + centroid rotate.
    TouchDollyRotate,
}

/// Maps pointer and touch input onto an [`OrbitState`].
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(event) = PointerEvent::from_window_event(&raw, cursor) {
///     let _ = translator.handle_event(&mut orbit, &mut camera, event);
/// }
/// // Once per frame:
/// if orbit.advance(&mut camera) {
///     window.request_redraw();
/// }
/// ```
pub struct InputTranslator {
    /// Current gesture interpretation.
    state: InteractionState,
    /// Mouse and touch bindings.
    bindings: BindingOptions,

    // Drag references, one per action so combined touch gestures can
    // track independently.
    rotate_ref: Vec2,
    pan_ref: Vec2,
    dolly_ref: Vec2,
    pinch_ref: f32,
}

impl InputTranslator {
    /// Create a translator with default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: InteractionState::Idle,
            bindings: BindingOptions::default(),
            rotate_ref: Vec2::ZERO,
            pan_ref: Vec2::ZERO,
            dolly_ref: Vec2::ZERO,
            pinch_ref: 0.0,
        }
    }

    /// Create a translator with custom bindings.
    #[must_use]
    pub fn with_bindings(bindings: BindingOptions) -> Self {
        Self {
            bindings,
            ..Self::new()
        }
    }

    /// Current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Read-only access to the bindings.
    #[must_use]
    pub fn bindings(&self) -> &BindingOptions {
        &self.bindings
    }

    /// Mutable access to the bindings for reconfiguration.
    pub fn bindings_mut(&mut self) -> &mut BindingOptions {
        &mut self.bindings
    }

    /// Process a pointer event. Returns `true` if the event engaged or
    /// drove a camera gesture.
    pub fn handle_event(
        &mut self,
        orbit: &mut OrbitState,
        camera: &mut Camera,
        event: PointerEvent,
    ) -> bool {
        match event {
            PointerEvent::ButtonPressed { button, x, y } => {
                self.handle_button_pressed(orbit, button, Vec2::new(x, y))
            }
            PointerEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(orbit, camera, Vec2::new(x, y))
            }
            PointerEvent::ButtonReleased => self.handle_button_released(orbit),
            PointerEvent::Wheel { delta_y } => self.handle_wheel(orbit, camera, delta_y),
        }
    }

    fn handle_button_pressed(
        &mut self,
        orbit: &mut OrbitState,
        button: PointerButton,
        position: Vec2,
    ) -> bool {
        let state = match self.bindings.mouse.action_for(button) {
            Some(OrbitAction::Rotate) if orbit.control.enable_rotate => {
                self.rotate_ref = position;
                InteractionState::Rotating
            }
            Some(OrbitAction::Dolly) if orbit.control.enable_zoom => {
                self.dolly_ref = position;
                InteractionState::Dollying
            }
            Some(OrbitAction::Pan) if orbit.control.enable_pan => {
                self.pan_ref = position;
                InteractionState::Panning
            }
            _ => return false,
        };
        self.state = state;
        orbit.begin_interaction();
        true
    }

    fn handle_cursor_moved(
        &mut self,
        orbit: &mut OrbitState,
        camera: &mut Camera,
        position: Vec2,
    ) -> bool {
        match self.state {
            InteractionState::Rotating => {
                orbit.rotate_pixels(position - self.rotate_ref);
                self.rotate_ref = position;
            }
            InteractionState::Dollying => {
                orbit.dolly_move(position.y - self.dolly_ref.y);
                self.dolly_ref = position;
            }
            InteractionState::Panning => {
                orbit.pan_pixels(position - self.pan_ref, camera);
                self.pan_ref = position;
            }
            _ => return false,
        }
        let _ = orbit.advance(camera);
        true
    }

    fn handle_button_released(&mut self, orbit: &mut OrbitState) -> bool {
        if self.state == InteractionState::Idle {
            return false;
        }
        self.state = InteractionState::Idle;
        orbit.end_interaction();
        true
    }

    fn handle_wheel(
        &mut self,
        orbit: &mut OrbitState,
        camera: &mut Camera,
        delta_y: f32,
    ) -> bool {
        if !orbit.control.enable_zoom {
            return false;
        }
        // Wheel zoom works regardless of pointer state. Bracket it
        // with start/end only when no drag already owns the
        // interaction.
        let idle = self.state == InteractionState::Idle;
        if idle {
            orbit.begin_interaction();
        }
        orbit.wheel(delta_y);
        let _ = orbit.advance(camera);
        if idle {
            orbit.end_interaction();
        }
        true
    }

    // ── Touch gestures ───────────────────────────────────────────────

    /// Begin a touch gesture from the aggregated touch points the host
    /// tracks. One point maps through the one-finger binding, two
    /// points through the two-finger binding; other counts are ignored.
    pub fn touch_started(&mut self, orbit: &mut OrbitState, points: &[Vec2]) -> bool {
        let action = match points.len() {
            1 => self.bindings.touch.one,
            2 => self.bindings.touch.two,
            _ => None,
        };
        let state = match action {
            Some(TouchAction::Rotate) if orbit.control.enable_rotate => {
                self.rotate_ref = centroid(points);
                InteractionState::TouchRotating
            }
            Some(TouchAction::Pan) if orbit.control.enable_pan => {
                self.pan_ref = centroid(points);
                InteractionState::TouchPanning
            }
            Some(TouchAction::DollyPan)
                if orbit.control.enable_zoom || orbit.control.enable_pan =>
            {
                self.pinch_ref = pinch_distance(points);
                self.pan_ref = centroid(points);
                InteractionState::TouchDollyPan
            }
            Some(TouchAction::DollyRotate)
                if orbit.control.enable_zoom || orbit.control.enable_rotate =>
            {
                self.pinch_ref = pinch_distance(points);
                self.rotate_ref = centroid(points);
                InteractionState::TouchDollyRotate
            }
            _ => return false,
        };
        self.state = state;
        orbit.begin_interaction();
        true
    }

    /// Drive the active touch gesture with updated touch points.
    pub fn touch_moved(
        &mut self,
        orbit: &mut OrbitState,
        camera: &mut Camera,
        points: &[Vec2],
    ) -> bool {
        if points.is_empty() {
            return false;
        }
        let position = centroid(points);
        match self.state {
            InteractionState::TouchRotating => {
                orbit.rotate_pixels(position - self.rotate_ref);
                self.rotate_ref = position;
            }
            InteractionState::TouchPanning => {
                orbit.pan_pixels(position - self.pan_ref, camera);
                self.pan_ref = position;
            }
            InteractionState::TouchDollyPan => {
                if points.len() >= 2 {
                    let distance = pinch_distance(points);
                    orbit.pinch_dolly(self.pinch_ref, distance);
                    self.pinch_ref = distance;
                }
                orbit.pan_pixels(position - self.pan_ref, camera);
                self.pan_ref = position;
            }
            InteractionState::TouchDollyRotate => {
                if points.len() >= 2 {
                    let distance = pinch_distance(points);
                    orbit.pinch_dolly(self.pinch_ref, distance);
                    self.pinch_ref = distance;
                }
                orbit.rotate_pixels(position - self.rotate_ref);
                self.rotate_ref = position;
            }
            _ => return false,
        }
        let _ = orbit.advance(camera);
        true
    }

    /// End the active touch gesture.
    pub fn touch_ended(&mut self, orbit: &mut OrbitState) -> bool {
        match self.state {
            InteractionState::TouchRotating
            | InteractionState::TouchPanning
            | InteractionState::TouchDollyPan
            | InteractionState::TouchDollyRotate => {
                self.state = InteractionState::Idle;
                orbit.end_interaction();
                true
            }
            _ => false,
        }
    }
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new()
    }
}

fn centroid(points: &[Vec2]) -> Vec2 {
    points.iter().copied().sum::<Vec2>() / points.len().max(1) as f32
}

fn pinch_distance(points: &[Vec2]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    (points[0] - points[1]).length()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::events::ControlEvent;
    use crate::options::{CameraOptions, MouseBindings};

    fn setup() -> (OrbitState, Camera, InputTranslator) {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            1.6,
            &CameraOptions::default(),
        );
        let mut orbit = OrbitState::new(&camera);
        orbit.control.enable_damping = false;
        orbit.set_viewport_height(500.0);
        (orbit, camera, InputTranslator::new())
    }

    fn polar_angle(camera: &Camera, target: Vec3) -> f32 {
        let offset = camera.eye - target;
        (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
    }

    #[test]
    fn left_drag_rotates_per_viewport_height() {
        let (mut orbit, mut camera, mut translator) = setup();

        // Pointer down at (100, 100), drag up to (100, 50) on a 500 px
        // viewport: phi grows by 2*pi*50/500 = 0.628.
        assert!(translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::ButtonPressed { button: PointerButton::Left, x: 100.0, y: 100.0 },
        ));
        assert_eq!(translator.state(), InteractionState::Rotating);
        assert!(translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::CursorMoved { x: 100.0, y: 50.0 },
        ));

        let phi = polar_angle(&camera, orbit.target);
        assert!((phi - (std::f32::consts::FRAC_PI_2 + 0.6283)).abs() < 1e-3);

        assert!(translator.handle_event(&mut orbit, &mut camera, PointerEvent::ButtonReleased));
        assert_eq!(translator.state(), InteractionState::Idle);
    }

    #[test]
    fn middle_drag_dollies() {
        let (mut orbit, mut camera, mut translator) = setup();

        let _ = translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::ButtonPressed { button: PointerButton::Middle, x: 0.0, y: 0.0 },
        );
        assert_eq!(translator.state(), InteractionState::Dollying);
        let _ = translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::CursorMoved { x: 0.0, y: 40.0 },
        );

        // scale = 1 + 40 * 0.005 = 1.2
        assert!(((camera.eye - orbit.target).length() - 12.0).abs() < 1e-3);
    }

    #[test]
    fn right_drag_pans_the_target() {
        let (mut orbit, mut camera, mut translator) = setup();

        let _ = translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::ButtonPressed { button: PointerButton::Right, x: 0.0, y: 0.0 },
        );
        assert_eq!(translator.state(), InteractionState::Panning);
        let _ = translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::CursorMoved { x: 100.0, y: 0.0 },
        );

        // Content follows the cursor: target slides opposite the drag.
        assert!(orbit.target.x < -1e-3);
        assert!((camera.target - orbit.target).length() < 1e-6);
    }

    #[test]
    fn wheel_works_without_pointer_state() {
        let (mut orbit, mut camera, mut translator) = setup();

        assert!(translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::Wheel { delta_y: 100.0 },
        ));
        assert!((camera.eye.z - 11.0).abs() < 1e-3);
        assert_eq!(translator.state(), InteractionState::Idle);
    }

    #[test]
    fn rebound_buttons_change_the_gesture() {
        let (mut orbit, mut camera, mut translator) = setup();
        translator.bindings_mut().mouse = MouseBindings {
            left: Some(OrbitAction::Pan),
            middle: None,
            right: Some(OrbitAction::Rotate),
        };

        let _ = translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::ButtonPressed { button: PointerButton::Left, x: 0.0, y: 0.0 },
        );
        assert_eq!(translator.state(), InteractionState::Panning);
        let _ = translator.handle_event(&mut orbit, &mut camera, PointerEvent::ButtonReleased);

        // Unbound button engages nothing.
        assert!(!translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::ButtonPressed { button: PointerButton::Middle, x: 0.0, y: 0.0 },
        ));
        assert_eq!(translator.state(), InteractionState::Idle);
    }

    #[test]
    fn disabled_rotate_ignores_the_bound_button() {
        let (mut orbit, mut camera, mut translator) = setup();
        orbit.control.enable_rotate = false;

        assert!(!translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::ButtonPressed { button: PointerButton::Left, x: 0.0, y: 0.0 },
        ));
        assert_eq!(translator.state(), InteractionState::Idle);
        assert!(!orbit.is_interacting());
    }

    #[test]
    fn drag_emits_start_change_end_in_order() {
        let (mut orbit, mut camera, mut translator) = setup();

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let _ = orbit.observe(move |e| sink.borrow_mut().push(e));

        let _ = translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::ButtonPressed { button: PointerButton::Left, x: 0.0, y: 0.0 },
        );
        let _ = translator.handle_event(
            &mut orbit,
            &mut camera,
            PointerEvent::CursorMoved { x: 30.0, y: 0.0 },
        );
        let _ = translator.handle_event(&mut orbit, &mut camera, PointerEvent::ButtonReleased);

        assert_eq!(
            *events.borrow(),
            vec![ControlEvent::Start, ControlEvent::Change, ControlEvent::End]
        );
    }

    #[test]
    fn one_finger_touch_rotates() {
        let (mut orbit, mut camera, mut translator) = setup();

        assert!(translator.touch_started(&mut orbit, &[Vec2::new(100.0, 100.0)]));
        assert_eq!(translator.state(), InteractionState::TouchRotating);

        let _ = translator.touch_moved(&mut orbit, &mut camera, &[Vec2::new(100.0, 50.0)]);
        let phi = polar_angle(&camera, orbit.target);
        assert!((phi - (std::f32::consts::FRAC_PI_2 + 0.6283)).abs() < 1e-3);

        assert!(translator.touch_ended(&mut orbit));
        assert_eq!(translator.state(), InteractionState::Idle);
    }

    #[test]
    fn two_finger_pinch_dollies_and_pans() {
        let (mut orbit, mut camera, mut translator) = setup();

        let start = [Vec2::new(200.0, 300.0), Vec2::new(300.0, 300.0)];
        assert!(translator.touch_started(&mut orbit, &start));
        assert_eq!(translator.state(), InteractionState::TouchDollyPan);

        // Spread from 100 px to 200 px: scale = 1 / (200/100) = 0.5,
        // same centroid so no pan.
        let spread = [Vec2::new(150.0, 300.0), Vec2::new(350.0, 300.0)];
        let _ = translator.touch_moved(&mut orbit, &mut camera, &spread);
        assert!(((camera.eye - orbit.target).length() - 5.0).abs() < 1e-3);

        // Moving both fingers together pans the target.
        let shifted = [Vec2::new(250.0, 300.0), Vec2::new(450.0, 300.0)];
        let _ = translator.touch_moved(&mut orbit, &mut camera, &shifted);
        assert!(orbit.target.x.abs() > 1e-4);

        let _ = translator.touch_ended(&mut orbit);
    }
}
