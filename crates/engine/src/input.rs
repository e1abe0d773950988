use crate::prelude::*;

use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Four-way digital direction pad
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalPad {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Snapshot of the first connected gamepad.
///
/// winit has no gamepad support, so this stays at rest unless the platform
/// writes it through [`InputState::set_gamepad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadState {
    /// Left thumbstick, each axis in [-1, 1]. Up is +y.
    pub left_stick: Vector2<f32>,
    pub dpad: DirectionalPad,
    pub back: bool,
}

impl Default for GamepadState {
    fn default() -> Self {
        Self {
            left_stick: Vector2::zeros(),
            dpad: DirectionalPad::default(),
            back: false,
        }
    }
}

/// One frame's merged snapshot of every input device
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    /// Summed stick and digital direction, screen oriented (down is +y)
    pub movement: Vector2<f32>,
    /// Cursor position, only while the primary button is held
    pub pointer: Option<Point2<f32>>,
    /// First active touch point
    pub touch: Option<Point2<f32>>,
    pub exit: bool,
}

impl Default for InputSample {
    fn default() -> Self {
        Self {
            movement: Vector2::zeros(),
            pointer: None,
            touch: None,
            exit: false,
        }
    }
}

/// Resource that tracks keyboard, mouse, touch and gamepad state
#[derive(Resource, Default)]
pub struct InputState {
    /// Currently pressed keys
    pub keys_pressed: HashSet<KeyCode>,
    /// Currently held mouse buttons
    pub mouse_buttons: HashSet<MouseButton>,
    /// Mouse position in window coordinates, unknown until the cursor moves
    pub mouse_position: Option<Point2<f32>>,
    /// Active touch points in the order they started
    pub touches: Vec<(u64, Point2<f32>)>,
    pub gamepad: GamepadState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// Handle key press
    pub fn press_key(&mut self, key: KeyCode) {
        self.keys_pressed.insert(key);
    }

    /// Handle key release
    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_pressed.remove(&key);
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.mouse_buttons.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.mouse_buttons.remove(&button);
    }

    /// Update mouse position
    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = Some(Point2::new(x, y));
    }

    /// Insert or move a touch point. New ids go to the back.
    pub fn update_touch(&mut self, id: u64, x: f32, y: f32) {
        let position = Point2::new(x, y);
        match self.touches.iter_mut().find(|(touch_id, _)| *touch_id == id) {
            Some((_, existing)) => *existing = position,
            None => self.touches.push((id, position)),
        }
    }

    pub fn end_touch(&mut self, id: u64) {
        self.touches.retain(|(touch_id, _)| *touch_id != id);
    }

    pub fn set_gamepad(&mut self, gamepad: GamepadState) {
        self.gamepad = gamepad;
    }

    /// Fold a window event into the tracked state
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let PhysicalKey::Code(keycode) = key_event.physical_key {
                    match key_event.state {
                        ElementState::Pressed => self.press_key(keycode),
                        ElementState::Released => self.release_key(keycode),
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press_button(*button),
                ElementState::Released => self.release_button(*button),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.set_mouse_position(position.x as f32, position.y as f32);
            }
            WindowEvent::Touch(touch) => match touch.phase {
                TouchPhase::Started | TouchPhase::Moved => {
                    self.update_touch(touch.id, touch.location.x as f32, touch.location.y as f32)
                }
                TouchPhase::Ended | TouchPhase::Cancelled => self.end_touch(touch.id),
            },
            WindowEvent::Focused(false) => {
                self.keys_pressed.clear();
                self.mouse_buttons.clear();
            }
            _ => {}
        }
    }

    /// Merge every device into a single frame sample
    pub fn sample(&self) -> InputSample {
        let pad = &self.gamepad;

        // Stick y is up-positive, screen y is down-positive
        let mut movement = Vector2::new(pad.left_stick.x, -pad.left_stick.y);

        if self.is_key_pressed(KeyCode::ArrowLeft) || pad.dpad.left {
            movement.x -= 1.0;
        }
        if self.is_key_pressed(KeyCode::ArrowRight) || pad.dpad.right {
            movement.x += 1.0;
        }
        if self.is_key_pressed(KeyCode::ArrowUp) || pad.dpad.up {
            movement.y -= 1.0;
        }
        if self.is_key_pressed(KeyCode::ArrowDown) || pad.dpad.down {
            movement.y += 1.0;
        }

        let pointer = if self.is_button_pressed(MouseButton::Left) {
            self.mouse_position
        } else {
            None
        };

        InputSample {
            movement,
            pointer,
            touch: self.touches.first().map(|(_, position)| *position),
            exit: self.is_key_pressed(KeyCode::Escape) || pad.back,
        }
    }
}
