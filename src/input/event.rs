/// Platform-agnostic pointer events.
///
/// These are fed into an [`InputTranslator`](super::InputTranslator),
/// which turns them into pending orbit deltas on an
/// [`OrbitState`](crate::camera::OrbitState).
///
/// # Example
///
/// ```ignore
/// let consumed = translator.handle_event(
///     &mut orbit,
///     &mut camera,
///     PointerEvent::CursorMoved { x: 100.0, y: 200.0 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A pointer button went down at the given screen position.
    ButtonPressed {
        /// Which button was pressed.
        button: PointerButton,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer moved to an absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The active pointer button was released.
    ButtonReleased,
    /// Scroll wheel (positive delta = zoom out, browser convention).
    Wheel {
        /// Vertical scroll amount in pixels.
        delta_y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "winit")]
impl PointerEvent {
    /// Map a winit window event onto a pointer event, if it carries one.
    ///
    /// `cursor` is the last known cursor position, needed because winit
    /// reports button presses without coordinates.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
        cursor: (f32, f32),
    ) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { button, state, .. } => Some(match state {
                ElementState::Pressed => Self::ButtonPressed {
                    button: (*button).into(),
                    x: cursor.0,
                    y: cursor.1,
                },
                ElementState::Released => Self::ButtonReleased,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                // Line deltas scroll "up" for zoom-in; flip to the
                // pixel-delta sign convention.
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * 100.0,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                Some(Self::Wheel { delta_y })
            }
            _ => None,
        }
    }
}
